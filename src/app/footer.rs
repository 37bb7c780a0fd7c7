use chrono::{DateTime, Datelike};
use leptos::prelude::*;

use super::{navigation::NAV_ITEMS, tracking::scroll_to_section};

fn build_year() -> Option<i32> {
    DateTime::parse_from_rfc3339(env!("BUILD_TIME"))
        .ok()
        .map(|d| d.year())
}

#[component]
pub fn Footer() -> impl IntoView {
    let copyright = match build_year() {
        Some(year) => format!("© {year} Alex Developer"),
        None => "© Alex Developer".to_string(),
    };

    view! {
        <footer id="footer" class="py-12 px-4 sm:px-6 border-t border-muted/20">
            <div class="max-w-6xl mx-auto flex flex-col md:flex-row items-center justify-between gap-6">
                <p class="text-sm text-muted">{copyright}</p>
                <ul class="flex gap-4 text-sm">
                    {NAV_ITEMS
                        .into_iter()
                        .map(|item| {
                            view! {
                                <li>
                                    <a
                                        href=format!("#{}", item.id)
                                        class="hover:text-primary"
                                        on:click=move |ev| {
                                            ev.prevent_default();
                                            scroll_to_section(item.id);
                                        }
                                    >
                                        {item.label}
                                    </a>
                                </li>
                            }
                        })
                        .collect_view()}
                </ul>
                <button
                    class="px-4 py-2 rounded-md border border-muted/30 hover:text-primary"
                    aria-label="Back to top"
                    on:click=move |_| scroll_to_section("hero")
                >
                    "↑ Top"
                </button>
            </div>
        </footer>
    }
}
