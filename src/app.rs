mod contact;
mod footer;
mod navigation;
mod progress;
mod sections;
mod theme;
mod tracking;

use leptos::prelude::*;
use leptos_meta::*;
use leptos_router::{components::*, path};

use crate::config::{SiteConfig, SECTION_IDS};
use contact::Contact;
use footer::Footer;
use navigation::Navigation;
use progress::ScrollProgress;
use sections::{About, Hero, Projects, Skills};

pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8" />
                <meta name="viewport" content="width=device-width, initial-scale=1" />
                <AutoReload options=options.clone() />
                <HydrationScripts options />
                <meta name="color-scheme" content="dark light" />
                <link rel="shortcut icon" type="image/ico" href="/favicon.ico" />
                <link rel="stylesheet" id="leptos" href="/pkg/portfolio-site.css" />
                <MetaTags />
            </head>
            <body class="bg-background text-foreground antialiased">
                <App />
            </body>
        </html>
    }
}

#[component]
pub fn App() -> impl IntoView {
    // Provides context that manages stylesheets, titles, meta tags, etc.
    provide_meta_context();
    provide_context(SiteConfig::default());

    view! {
        <Title formatter=|title| format!("Portfolio - {title}") />

        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=path!("/") view=HomePage />
            </Routes>
        </Router>
    }
}

#[component]
fn HomePage() -> impl IntoView {
    tracking::provide_section_tracker(&SECTION_IDS);
    theme::provide_theme();

    view! {
        <Title text="Home" />
        <ScrollProgress />
        <Navigation />
        <main class="min-h-screen scroll-smooth">
            <Hero />
            <About />
            <Skills />
            <Projects />
            <Contact />
        </main>
        <Footer />
    }
}
