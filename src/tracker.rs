//! Section tracking and scroll progress.
//!
//! [`SectionTracker`] owns the [`ScrollState`] of the page. Browser events are
//! fed in through [`SectionTracker::on_scroll`] and
//! [`SectionTracker::on_visibility_change`] (or both at once through
//! [`SectionTracker::evaluate`]); consumers only ever see snapshots.

use std::collections::HashMap;

use log::debug;

use crate::{
    config::TrackerConfig,
    store::{Store, SubscriptionId},
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SectionState {
    Inactive,
    Active,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Section {
    pub id: String,
    pub state: SectionState,
}

/// Layout of a section in document coordinates (pixels from the top of the page).
#[derive(Debug, Clone, PartialEq)]
pub struct SectionBounds {
    pub id: String,
    pub top: f64,
    pub bottom: f64,
}

impl SectionBounds {
    pub fn new(id: impl Into<String>, top: f64, bottom: f64) -> Self {
        Self {
            id: id.into(),
            top,
            bottom,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScrollMetrics {
    pub offset: f64,
    pub document_height: f64,
    pub viewport_height: f64,
}

impl ScrollMetrics {
    /// Built from the root element's `scrollHeight` and `clientHeight`.
    /// `clientHeight` leaves out a horizontal scrollbar, `innerHeight` does not.
    pub fn from_root(offset: f64, scroll_height: i32, client_height: i32) -> Self {
        Self {
            offset,
            document_height: scroll_height as f64,
            viewport_height: client_height as f64,
        }
    }

    pub fn max_offset(&self) -> f64 {
        self.document_height - self.viewport_height
    }

    /// Always within `[0, 1]`. A page that cannot scroll reports 0.
    pub fn fraction(&self) -> f64 {
        let max = self.max_offset();
        if max <= 0.0 {
            return 0.0;
        }
        (self.offset / max).clamp(0.0, 1.0)
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ScrollState {
    pub fraction_scrolled: f64,
    pub active_section_id: Option<String>,
    pub is_progress_visible: bool,
    pub is_scrolled: bool,
}

/// Answers whether a section id resolves to something on the page.
pub trait SectionLookup {
    fn has_section(&self, id: &str) -> bool;
}

impl SectionLookup for [SectionBounds] {
    fn has_section(&self, id: &str) -> bool {
        self.iter().any(|b| b.id == id)
    }
}

/// Horizontal band of the viewport a section must touch to count as visible.
/// Margins are viewport fractions, negative values shrink the band. The
/// default of -0.5 on both sides collapses it to the viewport's center line.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DetectionBand {
    pub top_margin: f64,
    pub bottom_margin: f64,
}

impl From<&TrackerConfig> for DetectionBand {
    fn from(config: &TrackerConfig) -> Self {
        Self {
            top_margin: config.top_margin,
            bottom_margin: config.bottom_margin,
        }
    }
}

impl Default for DetectionBand {
    fn default() -> Self {
        Self::from(&TrackerConfig::default())
    }
}

impl DetectionBand {
    /// Band edges in document coordinates.
    pub fn edges(&self, offset: f64, viewport_height: f64) -> (f64, f64) {
        let top = offset - self.top_margin * viewport_height;
        let bottom = offset + viewport_height + self.bottom_margin * viewport_height;
        (top, bottom)
    }

    pub fn intersects(&self, bounds: &SectionBounds, offset: f64, viewport_height: f64) -> bool {
        let (top, bottom) = self.edges(offset, viewport_height);
        bounds.top <= bottom && bounds.bottom >= top
    }
}

/// Reports intersection changes the way an intersection observer does: only
/// sections whose state flipped since the last evaluation, in document order.
#[derive(Debug, Default)]
pub struct VisibilityObserver {
    band: DetectionBand,
    last: HashMap<String, bool>,
}

impl VisibilityObserver {
    pub fn new(band: DetectionBand) -> Self {
        Self {
            band,
            last: HashMap::new(),
        }
    }

    pub fn evaluate(
        &mut self,
        bounds: &[SectionBounds],
        offset: f64,
        viewport_height: f64,
    ) -> Vec<(String, bool)> {
        let mut entries = Vec::new();
        for b in bounds {
            let now = self.band.intersects(b, offset, viewport_height);
            let before = self.last.insert(b.id.clone(), now).unwrap_or(false);
            if now != before {
                entries.push((b.id.clone(), now));
            }
        }
        entries
    }

    pub fn reset(&mut self) {
        self.last.clear();
    }
}

type Release = Box<dyn FnOnce() + Send + Sync>;

pub struct SectionTracker {
    config: TrackerConfig,
    sections: Vec<Section>,
    state: Store<ScrollState>,
    observer: VisibilityObserver,
    releases: Vec<Release>,
}

impl SectionTracker {
    pub fn new(config: TrackerConfig) -> Self {
        let band = DetectionBand::from(&config);
        Self {
            config,
            sections: Vec::new(),
            state: Store::new(ScrollState::default()),
            observer: VisibilityObserver::new(band),
            releases: Vec::new(),
        }
    }

    /// Registers every id that `lookup` can resolve. Ids that are missing
    /// from the page are skipped. Returns how many were newly registered.
    pub fn observe_sections<'a, I, L>(&mut self, ids: I, lookup: &L) -> usize
    where
        I: IntoIterator<Item = &'a str>,
        L: SectionLookup + ?Sized,
    {
        let mut added = 0;
        for id in ids {
            if self.section(id).is_some() {
                continue;
            }
            if !lookup.has_section(id) {
                debug!("section #{id} not found, skipping");
                continue;
            }
            self.sections.push(Section {
                id: id.to_string(),
                state: SectionState::Inactive,
            });
            added += 1;
        }
        added
    }

    pub fn sections(&self) -> &[Section] {
        &self.sections
    }

    pub fn section(&self, id: &str) -> Option<&Section> {
        self.sections.iter().find(|s| s.id == id)
    }

    /// The last section reported as intersecting becomes active, whatever
    /// was active before.
    pub fn on_visibility_change(&mut self, section_id: &str, is_intersecting: bool) {
        let Some(section) = self.sections.iter_mut().find(|s| s.id == section_id) else {
            debug!("visibility change for unobserved section #{section_id}");
            return;
        };
        if is_intersecting {
            section.state = SectionState::Active;
            let id = section.id.clone();
            self.state.update(|s| s.active_section_id = Some(id));
        } else {
            section.state = SectionState::Inactive;
        }
    }

    pub fn on_scroll(&mut self, metrics: ScrollMetrics) {
        let fraction = metrics.fraction();
        let visible = fraction > self.config.progress_hidden_below
            && fraction < self.config.progress_hidden_above;
        let scrolled = metrics.offset > self.config.scrolled_offset;
        self.state.update(|s| {
            s.fraction_scrolled = fraction;
            s.is_progress_visible = visible;
            s.is_scrolled = scrolled;
        });
    }

    /// Handles one animation frame: recomputes progress, then replays the
    /// intersection changes of the registered sections in document order.
    pub fn evaluate(&mut self, metrics: ScrollMetrics, bounds: &[SectionBounds]) {
        self.on_scroll(metrics);
        let observed: Vec<SectionBounds> = bounds
            .iter()
            .filter(|b| self.section(&b.id).is_some())
            .cloned()
            .collect();
        let entries = self
            .observer
            .evaluate(&observed, metrics.offset, metrics.viewport_height);
        for (id, intersecting) in entries {
            self.on_visibility_change(&id, intersecting);
        }
    }

    pub fn snapshot(&self) -> ScrollState {
        self.state.snapshot()
    }

    pub fn subscribe(
        &mut self,
        f: impl Fn(&ScrollState) + Send + Sync + 'static,
    ) -> SubscriptionId {
        self.state.subscribe(f)
    }

    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        self.state.unsubscribe(id)
    }

    /// Keeps an observation alive until [`teardown`](Self::teardown).
    pub fn hold(&mut self, release: impl FnOnce() + Send + Sync + 'static) {
        self.releases.push(Box::new(release));
    }

    /// Releases all observations and subscribers. Safe to call repeatedly.
    pub fn teardown(&mut self) {
        if !self.releases.is_empty() {
            debug!("releasing {} section observations", self.releases.len());
        }
        for release in self.releases.drain(..) {
            release();
        }
        self.state.clear_subscribers();
        self.sections.clear();
        self.observer.reset();
    }
}

impl Default for SectionTracker {
    fn default() -> Self {
        Self::new(TrackerConfig::default())
    }
}

impl Drop for SectionTracker {
    fn drop(&mut self) {
        self.teardown();
    }
}

#[cfg(test)]
mod tests {
    use std::sync::{
        atomic::{AtomicUsize, Ordering},
        Arc, Mutex,
    };

    use super::*;

    fn metrics(offset: f64) -> ScrollMetrics {
        ScrollMetrics {
            offset,
            document_height: 1600.0,
            viewport_height: 800.0,
        }
    }

    fn two_sections() -> Vec<SectionBounds> {
        vec![
            SectionBounds::new("a", 0.0, 800.0),
            SectionBounds::new("b", 801.0, 1600.0),
        ]
    }

    fn tracker_for(bounds: &[SectionBounds]) -> SectionTracker {
        let mut tracker = SectionTracker::default();
        let ids: Vec<&str> = bounds.iter().map(|b| b.id.as_str()).collect();
        tracker.observe_sections(ids, bounds);
        tracker
    }

    #[test]
    fn test_fraction_is_clamped() {
        for offset in [0.0, 1.0, 200.0, 399.5, 800.0] {
            assert_eq!(metrics(offset).fraction(), offset / 800.0);
        }
        assert_eq!(metrics(-30.0).fraction(), 0.0);
        assert_eq!(metrics(900.0).fraction(), 1.0);

        let unscrollable = ScrollMetrics {
            offset: 0.0,
            document_height: 600.0,
            viewport_height: 800.0,
        };
        assert_eq!(unscrollable.fraction(), 0.0);
    }

    #[test]
    fn test_root_metrics() {
        // a horizontal scrollbar takes 15px off the client height
        let m = ScrollMetrics::from_root(415.0, 1615, 785);
        assert_eq!(m.max_offset(), 830.0);
        assert_eq!(m.fraction(), 0.5);
    }

    #[test]
    fn test_progress_visibility_bounds() {
        let mut tracker = SectionTracker::default();
        let cases = [
            (0.0, false),
            (8.0, false),
            (8.8, true),
            (400.0, true),
            (791.2, true),
            (792.0, false),
            (800.0, false),
        ];
        for (offset, visible) in cases {
            tracker.on_scroll(metrics(offset));
            assert_eq!(
                tracker.snapshot().is_progress_visible,
                visible,
                "offset {offset}"
            );
        }
    }

    #[test]
    fn test_is_scrolled_after_threshold() {
        let mut tracker = SectionTracker::default();
        tracker.on_scroll(metrics(50.0));
        assert!(!tracker.snapshot().is_scrolled);
        tracker.on_scroll(metrics(51.0));
        assert!(tracker.snapshot().is_scrolled);
    }

    #[test]
    fn test_center_line_picks_active_section() {
        let bounds = two_sections();
        let mut tracker = tracker_for(&bounds);

        tracker.evaluate(metrics(760.0), &bounds);
        assert_eq!(tracker.snapshot().active_section_id.as_deref(), Some("b"));
        assert_eq!(tracker.section("b").unwrap().state, SectionState::Active);
        assert_eq!(tracker.section("a").unwrap().state, SectionState::Inactive);

        tracker.evaluate(metrics(40.0), &bounds);
        assert_eq!(tracker.snapshot().active_section_id.as_deref(), Some("a"));
        assert_eq!(tracker.section("b").unwrap().state, SectionState::Inactive);
    }

    #[test]
    fn test_observer_reports_only_changes() {
        let bounds = two_sections();
        let mut observer = VisibilityObserver::default();

        assert_eq!(
            observer.evaluate(&bounds, 40.0, 800.0),
            vec![("a".to_string(), true)]
        );
        assert!(observer.evaluate(&bounds, 60.0, 800.0).is_empty());
        assert_eq!(
            observer.evaluate(&bounds, 760.0, 800.0),
            vec![("a".to_string(), false), ("b".to_string(), true)]
        );
    }

    #[test]
    fn test_last_intersecting_wins() {
        let bounds = two_sections();
        let mut tracker = tracker_for(&bounds);

        tracker.on_visibility_change("b", true);
        tracker.on_visibility_change("a", true);
        assert_eq!(tracker.snapshot().active_section_id.as_deref(), Some("a"));

        // leaving the band does not clear the active id
        tracker.on_visibility_change("a", false);
        assert_eq!(tracker.snapshot().active_section_id.as_deref(), Some("a"));
        assert_eq!(tracker.section("a").unwrap().state, SectionState::Inactive);
    }

    #[test]
    fn test_same_frame_entries_pick_later_section() {
        let bounds = vec![
            SectionBounds::new("a", 0.0, 800.0),
            SectionBounds::new("b", 800.0, 1600.0),
        ];

        // the center line sits at 800, exactly on the shared edge
        let mut observer = VisibilityObserver::default();
        assert_eq!(
            observer.evaluate(&bounds, 400.0, 800.0),
            vec![("a".to_string(), true), ("b".to_string(), true)]
        );

        let mut tracker = tracker_for(&bounds);
        tracker.evaluate(metrics(400.0), &bounds);
        assert_eq!(tracker.snapshot().active_section_id.as_deref(), Some("b"));
        assert_eq!(tracker.section("a").unwrap().state, SectionState::Active);
        assert_eq!(tracker.section("b").unwrap().state, SectionState::Active);
    }

    #[test]
    fn test_leaving_section_keeps_later_active() {
        let bounds = vec![
            SectionBounds::new("a", 0.0, 800.0),
            SectionBounds::new("b", 800.0, 1600.0),
        ];
        let mut tracker = tracker_for(&bounds);
        tracker.evaluate(metrics(400.0), &bounds);

        // center line moves to 1000: a leaves, b stays
        tracker.evaluate(metrics(600.0), &bounds);
        assert_eq!(tracker.snapshot().active_section_id.as_deref(), Some("b"));
        assert_eq!(tracker.section("a").unwrap().state, SectionState::Inactive);
        assert_eq!(tracker.section("b").unwrap().state, SectionState::Active);

        // back to a shared edge: a re-enters alone and takes over
        tracker.evaluate(metrics(400.0), &bounds);
        assert_eq!(tracker.snapshot().active_section_id.as_deref(), Some("a"));
    }

    #[test]
    fn test_band_follows_config() {
        let config = TrackerConfig {
            top_margin: 0.0,
            bottom_margin: 0.0,
            ..TrackerConfig::default()
        };
        let band = DetectionBand::from(&config);
        assert_eq!(band.edges(100.0, 800.0), (100.0, 900.0));
        assert_eq!(DetectionBand::default().edges(0.0, 800.0), (400.0, 400.0));

        // with the whole viewport as the band both sections intersect at once
        let bounds = two_sections();
        let mut tracker = SectionTracker::new(config);
        tracker.observe_sections(["a", "b"], bounds.as_slice());
        tracker.evaluate(metrics(400.0), &bounds);
        assert_eq!(tracker.section("a").unwrap().state, SectionState::Active);
        assert_eq!(tracker.section("b").unwrap().state, SectionState::Active);
    }

    #[test]
    fn test_missing_sections_are_skipped() {
        let bounds = two_sections();
        let mut tracker = SectionTracker::default();
        let added = tracker.observe_sections(["a", "missing", "b", "a"], bounds.as_slice());
        assert_eq!(added, 2);
        assert_eq!(tracker.sections().len(), 2);

        tracker.on_visibility_change("missing", true);
        assert_eq!(tracker.snapshot().active_section_id, None);
    }

    #[test]
    fn test_no_sections_leaves_active_unset() {
        let mut tracker = SectionTracker::default();
        let empty: &[SectionBounds] = &[];
        let added = tracker.observe_sections(["about", "skills"], empty);
        assert_eq!(added, 0);

        tracker.evaluate(metrics(400.0), &two_sections());
        let state = tracker.snapshot();
        assert_eq!(state.active_section_id, None);
        assert!(state.is_progress_visible);
    }

    #[test]
    fn test_subscribers_see_snapshots() {
        let bounds = two_sections();
        let mut tracker = tracker_for(&bounds);
        let seen = Arc::new(Mutex::new(Vec::new()));
        let s = seen.clone();
        tracker.subscribe(move |state| {
            s.lock().unwrap().push(state.active_section_id.clone());
        });

        tracker.evaluate(metrics(40.0), &bounds);
        tracker.evaluate(metrics(760.0), &bounds);

        let seen = seen.lock().unwrap();
        assert_eq!(seen.last(), Some(&Some("b".to_string())));
        assert!(seen.contains(&Some("a".to_string())));
    }

    #[test]
    fn test_teardown_twice() {
        let released = Arc::new(AtomicUsize::new(0));
        let mut tracker = tracker_for(&two_sections());
        for _ in 0..2 {
            let r = released.clone();
            tracker.hold(move || {
                r.fetch_add(1, Ordering::SeqCst);
            });
        }
        let calls = Arc::new(AtomicUsize::new(0));
        let c = calls.clone();
        tracker.subscribe(move |_| {
            c.fetch_add(1, Ordering::SeqCst);
        });

        tracker.teardown();
        tracker.teardown();
        assert_eq!(released.load(Ordering::SeqCst), 2);

        // events after teardown are harmless and reach nobody
        tracker.on_scroll(metrics(400.0));
        tracker.on_visibility_change("a", true);
        assert_eq!(calls.load(Ordering::SeqCst), 0);
        drop(tracker);
        assert_eq!(released.load(Ordering::SeqCst), 2);
    }
}
