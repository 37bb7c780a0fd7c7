use leptos::prelude::*;
use log::warn;

#[cfg(feature = "hydrate")]
use codee::string::FromToStringCodec;
#[cfg(feature = "hydrate")]
use leptos_use::storage::{use_local_storage_with_options, UseStorageOptions};

#[cfg(feature = "hydrate")]
use crate::theme::THEME_STORAGE_KEY;
use crate::theme::Theme;

#[derive(Debug, Clone, Copy)]
pub struct ThemeContext {
    pub theme: Signal<Theme>,
    pub set_theme: WriteSignal<Theme>,
}

fn apply_theme(theme: Theme) {
    let Some(root) = document().document_element() else {
        return;
    };
    let res = root
        .set_attribute("data-theme", theme.as_str())
        .and_then(|_| root.set_attribute("style", &theme.css_variables()))
        .and_then(|_| root.set_attribute("class", if theme.is_dark() { "dark" } else { "light" }));
    if let Err(e) = res {
        warn!("couldn't apply theme {theme}: {e:?}");
    }
}

/// Loads the stored theme (browser only) and keeps the document root in sync with it.
/// The stored value is read one frame after hydration so the first client
/// render matches the server's default.
pub fn provide_theme() {
    #[cfg(feature = "hydrate")]
    let (theme, set_theme, _) = use_local_storage_with_options::<Theme, FromToStringCodec>(
        THEME_STORAGE_KEY,
        UseStorageOptions::default().delay_during_hydration(true),
    );

    #[cfg(not(feature = "hydrate"))]
    let (theme, set_theme) = {
        let (theme, set_theme) = signal(Theme::default());
        (Signal::from(theme), set_theme)
    };

    Effect::new(move |_| apply_theme(theme.get()));
    provide_context(ThemeContext { theme, set_theme });
}

#[component]
pub fn ThemeSwitcher() -> impl IntoView {
    let ThemeContext { theme, set_theme } = expect_context::<ThemeContext>();
    let (open, set_open) = signal(false);

    view! {
        <div class="relative">
            <button
                class="p-2 rounded-md hover:bg-surface"
                aria-haspopup="listbox"
                aria-expanded=move || open.get().to_string()
                title=move || format!("Theme: {}", theme.get().name())
                on:click=move |_| set_open.update(|o| *o = !*o)
            >
                {move || theme.get().icon()}
            </button>
            <Show when=move || open.get()>
                <ul
                    class="absolute right-0 mt-2 w-40 rounded-md bg-surface shadow-lg py-1"
                    role="listbox"
                >
                    {Theme::ALL
                        .into_iter()
                        .map(|t| {
                            view! {
                                <li
                                    role="option"
                                    aria-selected=move || (theme.get() == t).to_string()
                                    class="px-3 py-2 cursor-pointer hover:bg-primary/10"
                                    on:click=move |_| {
                                        set_theme.set(t);
                                        set_open.set(false);
                                    }
                                >
                                    <span class="mr-2">{t.icon()}</span>
                                    {t.name()}
                                </li>
                            }
                        })
                        .collect_view()}
                </ul>
            </Show>
        </div>
    }
}
