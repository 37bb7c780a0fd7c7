use std::sync::{
    atomic::{AtomicBool, Ordering},
    Arc, Mutex,
};

use leptos::{ev, prelude::*};
use log::debug;
use web_sys::{ScrollBehavior, ScrollIntoViewOptions};

use crate::{
    config::SiteConfig,
    tracker::{ScrollMetrics, ScrollState, Section, SectionBounds, SectionLookup, SectionTracker},
};

/// Read-only view of the tracker state handed to the rest of the page.
#[derive(Debug, Clone, Copy)]
pub struct ScrollContext(pub Signal<ScrollState>);

struct DomLookup(web_sys::Document);

impl SectionLookup for DomLookup {
    fn has_section(&self, id: &str) -> bool {
        self.0.get_element_by_id(id).is_some()
    }
}

fn read_metrics() -> ScrollMetrics {
    let offset = window().scroll_y().unwrap_or_default();
    match document().document_element() {
        Some(root) => ScrollMetrics::from_root(offset, root.scroll_height(), root.client_height()),
        None => ScrollMetrics::from_root(offset, 0, 0),
    }
}

fn read_bounds(sections: &[Section], offset: f64) -> Vec<SectionBounds> {
    let doc = document();
    sections
        .iter()
        .filter_map(|s| {
            let rect = doc.get_element_by_id(&s.id)?.get_bounding_client_rect();
            Some(SectionBounds::new(
                s.id.clone(),
                rect.top() + offset,
                rect.bottom() + offset,
            ))
        })
        .collect()
}

fn evaluate(tracker: &Mutex<SectionTracker>) {
    let mut tracker = tracker.lock().expect("should be able to unlock tracker");
    let metrics = read_metrics();
    let bounds = read_bounds(tracker.sections(), metrics.offset);
    tracker.evaluate(metrics, &bounds);
}

/// Starts tracking `ids` once the page is mounted and provides a
/// [`ScrollContext`]. Listeners are released when the owner is cleaned up.
pub fn provide_section_tracker(ids: &'static [&'static str]) {
    let config = use_context::<SiteConfig>().unwrap_or_default();
    let tracker = Arc::new(Mutex::new(SectionTracker::new(config.tracker)));
    let state = RwSignal::new(ScrollState::default());

    tracker
        .lock()
        .expect("should be able to unlock tracker")
        .subscribe(move |s| state.set(s.clone()));

    // effects only run in the browser, after hydration
    Effect::new({
        let tracker = tracker.clone();
        move |_| {
            let registered = tracker
                .lock()
                .expect("should be able to unlock tracker")
                .observe_sections(ids.iter().copied(), &DomLookup(document()));
            debug!("tracking {registered} of {} sections", ids.len());
            evaluate(&tracker);

            // coalesce bursts of events to one evaluation per frame
            let frame_pending = Arc::new(AtomicBool::new(false));
            let schedule = {
                let tracker = tracker.clone();
                move || {
                    if frame_pending.swap(true, Ordering::Relaxed) {
                        return;
                    }
                    let tracker = tracker.clone();
                    let frame_pending = frame_pending.clone();
                    request_animation_frame(move || {
                        frame_pending.store(false, Ordering::Relaxed);
                        evaluate(&tracker);
                    });
                }
            };

            let scroll = window_event_listener(ev::scroll, {
                let schedule = schedule.clone();
                move |_| schedule()
            });
            let resize = window_event_listener(ev::resize, move |_| schedule());

            let mut tracker = tracker.lock().expect("should be able to unlock tracker");
            tracker.hold(move || scroll.remove());
            tracker.hold(move || resize.remove());
        }
    });

    on_cleanup(move || {
        tracker
            .lock()
            .expect("should be able to unlock tracker")
            .teardown();
    });

    provide_context(ScrollContext(state.read_only().into()));
}

/// Smoothly scrolls the element with `id` into view. Missing targets are ignored.
pub fn scroll_to_section(id: &str) {
    let Some(el) = document().get_element_by_id(id) else {
        debug!("no element #{id} to scroll to");
        return;
    };
    let options = ScrollIntoViewOptions::new();
    options.set_behavior(ScrollBehavior::Smooth);
    el.scroll_into_view_with_scroll_into_view_options(&options);
}
