use leptos::prelude::*;

use super::tracking::ScrollContext;

/// Thin bar across the top of the viewport, hidden near either end of the page.
#[component]
pub fn ScrollProgress() -> impl IntoView {
    let ScrollContext(scroll) = expect_context::<ScrollContext>();
    let visible = move || scroll.with(|s| s.is_progress_visible);

    view! {
        <Show when=visible>
            <div
                class="fixed top-0 left-0 right-0 h-1 bg-gradient-to-r from-primary to-secondary z-50 origin-left"
                role="progressbar"
                aria-valuemin="0"
                aria-valuemax="100"
                aria-valuenow=move || {
                    scroll.with(|s| (s.fraction_scrolled * 100.0).round().to_string())
                }
                style:transform=move || {
                    scroll.with(|s| format!("scaleX({})", s.fraction_scrolled))
                }
            ></div>
        </Show>
    }
}
