use std::time::Duration;

/// Ids of the page sections, in document order.
pub const SECTION_IDS: [&str; 5] = ["hero", "about", "skills", "projects", "contact"];

/// Behaviour settings for the page. Server settings (address, site root)
/// come from `leptos::config::get_configuration` instead.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SiteConfig {
    pub tracker: TrackerConfig,
    pub contact: ContactConfig,
}

#[derive(Debug, Clone, PartialEq)]
pub struct TrackerConfig {
    /// Viewport fraction added above the viewport when testing intersection.
    /// Negative values shrink the band.
    pub top_margin: f64,
    pub bottom_margin: f64,
    /// Progress bar is shown strictly between these fractions.
    pub progress_hidden_below: f64,
    pub progress_hidden_above: f64,
    /// Pixels of scroll after which the navigation counts as scrolled.
    pub scrolled_offset: f64,
}

impl Default for TrackerConfig {
    fn default() -> Self {
        Self {
            top_margin: -0.5,
            bottom_margin: -0.5,
            progress_hidden_below: 0.01,
            progress_hidden_above: 0.99,
            scrolled_offset: 50.0,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ContactConfig {
    pub send_delay: Duration,
    pub status_reset: Duration,
}

impl Default for ContactConfig {
    fn default() -> Self {
        Self {
            send_delay: Duration::from_millis(2000),
            status_reset: Duration::from_millis(5000),
        }
    }
}
