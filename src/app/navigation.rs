use leptos::prelude::*;

use super::{
    theme::ThemeSwitcher,
    tracking::{scroll_to_section, ScrollContext},
};

#[derive(Debug, Clone, Copy)]
pub struct NavItem {
    pub id: &'static str,
    pub label: &'static str,
    pub icon: &'static str,
}

pub const NAV_ITEMS: [NavItem; 4] = [
    NavItem {
        id: "about",
        label: "About",
        icon: "👨‍💻",
    },
    NavItem {
        id: "skills",
        label: "Skills",
        icon: "⚡",
    },
    NavItem {
        id: "projects",
        label: "Projects",
        icon: "🚀",
    },
    NavItem {
        id: "contact",
        label: "Contact",
        icon: "📬",
    },
];

#[component]
pub fn Navigation() -> impl IntoView {
    let ScrollContext(scroll) = expect_context::<ScrollContext>();
    let (menu_open, set_menu_open) = signal(false);
    let close_menu = Callback::new(move |_: ()| set_menu_open.set(false));

    let links = move || {
        NAV_ITEMS
            .into_iter()
            .map(|item| view! { <NavLink item on_select=close_menu /> })
            .collect_view()
    };

    view! {
        <nav class=move || {
            if scroll.with(|s| s.is_scrolled) {
                "fixed top-0 w-full z-40 transition-all duration-300 bg-surface/80 backdrop-blur-md shadow-lg"
            } else {
                "fixed top-0 w-full z-40 transition-all duration-300 bg-transparent"
            }
        }>
            <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8 py-4 flex items-center justify-between">
                <a
                    href="#hero"
                    class="text-xl font-bold text-primary"
                    on:click=move |ev| {
                        ev.prevent_default();
                        scroll_to_section("hero");
                    }
                >
                    "Portfolio"
                </a>
                <ul class="hidden md:flex items-center gap-6">{links}</ul>
                <div class="flex items-center gap-2">
                    <ThemeSwitcher />
                    <button
                        class="md:hidden p-2 rounded-md"
                        aria-label="Toggle menu"
                        aria-expanded=move || menu_open.get().to_string()
                        on:click=move |_| set_menu_open.update(|open| *open = !*open)
                    >
                        {move || if menu_open.get() { "✕" } else { "☰" }}
                    </button>
                </div>
            </div>
            <Show when=move || menu_open.get()>
                <ul class="md:hidden flex flex-col gap-2 px-4 pb-4">{links}</ul>
            </Show>
        </nav>
    }
}

#[component]
fn NavLink(item: NavItem, on_select: Callback<()>) -> impl IntoView {
    let ScrollContext(scroll) = expect_context::<ScrollContext>();
    let is_current =
        move || scroll.with(|s| s.active_section_id.as_deref() == Some(item.id));

    view! {
        <li>
            <a
                href=format!("#{}", item.id)
                class=move || {
                    if is_current() {
                        "px-3 py-2 rounded-md text-primary font-semibold bg-primary/10"
                    } else {
                        "px-3 py-2 rounded-md hover:text-primary"
                    }
                }
                aria-current=move || is_current().then_some("page")
                on:click=move |ev| {
                    ev.prevent_default();
                    on_select.run(());
                    scroll_to_section(item.id);
                }
            >
                <span class="mr-1">{item.icon}</span>
                {item.label}
            </a>
        </li>
    }
}
