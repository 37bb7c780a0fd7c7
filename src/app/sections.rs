use leptos::{either::Either, prelude::*};

use super::tracking::scroll_to_section;
use crate::gallery::{
    sorted_skills, Category, CategoryFilter, GalleryQuery, Metric, Proficiency, Project,
    ProjectSort, ProjectStatus, Skill, SkillCategory, SkillSort, PREVIEW_COUNT,
};

/// Spacing shared by the content sections. The scroll margin keeps headings
/// clear of the fixed navigation bar after a jump.
pub const SECTION_CLASS: &str = "py-20 px-4 sm:px-6 scroll-mt-20 md:scroll-mt-24";

#[component]
pub fn Hero() -> impl IntoView {
    view! {
        <section
            id="hero"
            class="relative min-h-screen flex items-center justify-center pt-20 md:pt-24 px-4"
        >
            <div class="max-w-4xl text-center">
                <p class="text-primary font-medium mb-4">"Hi, my name is"</p>
                <h1 class="text-4xl sm:text-6xl font-bold mb-6">"Alex Developer"</h1>
                <p class="text-lg sm:text-xl text-muted mb-10">
                    "Full-stack engineer building fast, reliable software for the web."
                </p>
                <div class="flex flex-col sm:flex-row gap-4 justify-center">
                    <button
                        class="px-6 py-3 rounded-md bg-primary text-white font-medium"
                        on:click=move |_| scroll_to_section("projects")
                    >
                        "View My Work"
                    </button>
                    <button
                        class="px-6 py-3 rounded-md border border-primary text-primary font-medium"
                        on:click=move |_| scroll_to_section("contact")
                    >
                        "Get In Touch"
                    </button>
                </div>
            </div>
        </section>
    }
}

#[component]
pub fn About() -> impl IntoView {
    view! {
        <section id="about" class=SECTION_CLASS>
            <div class="max-w-4xl mx-auto">
                <h2 class="text-3xl font-bold mb-8">"About Me"</h2>
                <p class="text-base mb-4 leading-relaxed">
                    "I enjoy turning rough ideas into polished products, from the data model down to the last animation frame."
                </p>
                <p class="text-base mb-4 leading-relaxed">
                    "Lately I have been writing a lot of Rust, both on servers and in the browser through WebAssembly."
                </p>
            </div>
        </section>
    }
}

static SKILL_CATEGORIES: [SkillCategory; 4] = [
    SkillCategory {
        name: "Languages",
        skills: &[
            Skill { name: "Rust", icon: "🦀", level: 85, projects: 9 },
            Skill { name: "TypeScript", icon: "🟦", level: 80, projects: 14 },
            Skill { name: "Python", icon: "🐍", level: 60, projects: 7 },
            Skill { name: "SQL", icon: "🗄️", level: 75, projects: 10 },
        ],
    },
    SkillCategory {
        name: "Frontend",
        skills: &[
            Skill { name: "Leptos", icon: "🦊", level: 80, projects: 4 },
            Skill { name: "React", icon: "⚛️", level: 90, projects: 12 },
            Skill { name: "Tailwind CSS", icon: "💨", level: 95, projects: 15 },
        ],
    },
    SkillCategory {
        name: "Backend",
        skills: &[
            Skill { name: "Axum", icon: "🌐", level: 80, projects: 5 },
            Skill { name: "Tokio", icon: "⚙️", level: 70, projects: 6 },
            Skill { name: "PostgreSQL", icon: "🐘", level: 75, projects: 9 },
            Skill { name: "Docker", icon: "🐳", level: 45, projects: 4 },
        ],
    },
    SkillCategory {
        name: "Tools",
        skills: &[
            Skill { name: "Git", icon: "📚", level: 95, projects: 25 },
            Skill { name: "CI Pipelines", icon: "🔁", level: 55, projects: 6 },
            Skill { name: "Cloud Services", icon: "☁️", level: 30, projects: 2 },
        ],
    },
];

#[component]
pub fn Skills() -> impl IntoView {
    let (active, set_active) = signal(0usize);
    let (sort, set_sort) = signal(SkillSort::default());
    let (compact, set_compact) = signal(false);

    let tabs = SKILL_CATEGORIES
        .iter()
        .enumerate()
        .map(|(i, category)| {
            let average = category.average_level();
            let proficiency = Proficiency::from_level(average);
            view! {
                <button
                    role="tab"
                    aria-selected=move || (active.get() == i).to_string()
                    class=move || {
                        if active.get() == i {
                            "w-full text-left p-4 rounded-lg bg-primary/20 border border-primary"
                        } else {
                            "w-full text-left p-4 rounded-lg bg-surface border border-transparent hover:border-primary/40"
                        }
                    }
                    on:click=move |_| set_active.set(i)
                >
                    <div class="flex items-center justify-between mb-1">
                        <span class="font-semibold">{category.name}</span>
                        <span class="text-xs px-2 py-1 rounded-full bg-primary/10">
                            {proficiency.label()}
                        </span>
                    </div>
                    <div class="flex justify-between text-sm text-muted">
                        <span>{format!("{} skills", category.skills.len())}</span>
                        <span>{format!("{average}% avg")}</span>
                    </div>
                </button>
            }
        })
        .collect_view();

    let skill_list = move || {
        let category = SKILL_CATEGORIES.get(active.get())?;
        let cards = sorted_skills(category.skills, sort.get())
            .into_iter()
            .map(|skill| skill_card(skill, compact.get()))
            .collect_view();
        Some(view! {
            <h3 class="text-2xl font-semibold mb-4">{category.name}</h3>
            <div class=move || {
                if compact.get() { "grid gap-3 md:grid-cols-2" } else { "grid gap-4" }
            }>{cards}</div>
        })
    };

    view! {
        <section id="skills" class=SECTION_CLASS>
            <div class="max-w-6xl mx-auto">
                <h2 class="text-3xl font-bold mb-8">"Skills"</h2>
                <div class="grid lg:grid-cols-12 gap-6">
                    <div class="lg:col-span-4 space-y-3" role="tablist">
                        {tabs}
                    </div>
                    <div class="lg:col-span-8">
                        <div class="flex flex-wrap gap-3 justify-end mb-4">
                            <select
                                class="px-3 py-2 rounded-md bg-surface text-sm"
                                aria-label="Sort skills"
                                prop:value=move || sort.get().as_str()
                                on:change=move |ev| {
                                    if let Some(s) = SkillSort::parse(&event_target_value(&ev)) {
                                        set_sort.set(s);
                                    }
                                }
                            >
                                {SkillSort::ALL
                                    .into_iter()
                                    .map(|s| view! { <option value=s.as_str()>{s.label()}</option> })
                                    .collect_view()}
                            </select>
                            <button
                                class="px-3 py-2 rounded-md bg-surface text-sm"
                                on:click=move |_| set_compact.update(|c| *c = !*c)
                            >
                                {move || if compact.get() { "Detailed view" } else { "Compact view" }}
                            </button>
                        </div>
                        {skill_list}
                    </div>
                </div>
            </div>
        </section>
    }
}

fn skill_card(skill: &'static Skill, compact: bool) -> impl IntoView {
    let proficiency = Proficiency::from_level(skill.level);
    let bar = view! {
        <div class="h-2 rounded-full bg-primary/10 overflow-hidden">
            <div
                class="h-full rounded-full bg-primary"
                style:width=format!("{}%", skill.level)
            ></div>
        </div>
    };
    if compact {
        Either::Left(view! {
            <div class="p-3 rounded-lg bg-surface">
                <div class="flex items-center justify-between mb-2">
                    <span>{skill.icon} " " {skill.name}</span>
                    <span class="text-sm font-bold">{format!("{}%", skill.level)}</span>
                </div>
                {bar}
            </div>
        })
    } else {
        Either::Right(view! {
            <div class="p-4 rounded-lg bg-surface">
                <div class="flex items-center gap-4 mb-3">
                    <span class="text-3xl">{skill.icon}</span>
                    <div class="flex-grow">
                        <h4 class="text-lg font-semibold">{skill.name}</h4>
                        <p class="text-sm text-muted">
                            {format!("{} projects", skill.projects)}
                        </p>
                    </div>
                    <div class="text-right">
                        <div class="text-2xl font-bold">{format!("{}%", skill.level)}</div>
                        <span class="text-xs px-2 py-1 rounded-full bg-primary/10">
                            {proficiency.label()}
                        </span>
                    </div>
                </div>
                {bar}
            </div>
        })
    }
}

static PROJECTS: [Project; 5] = [
    Project {
        title: "Terminal Portfolio",
        description: "A personal site with a working shell, rendered on the server and hydrated with WebAssembly.",
        long_description: "Server-side rendered with Axum and hydrated in the browser. The shell has a virtual filesystem, tab completion and command history, all compiled to WebAssembly.",
        tech: &["Rust", "Leptos", "Axum", "WASM", "Tailwind CSS"],
        category: Category::FullStack,
        featured: true,
        status: ProjectStatus::Completed,
        year: 2025,
        achievements: &["Sub-second first paint", "No JavaScript framework on the client"],
        metrics: &[
            Metric { label: "Lighthouse", value: "100", icon: "⚡" },
            Metric { label: "WASM size", value: "240 KB", icon: "📦" },
        ],
        github: "https://github.com/",
        demo: Some("https://example.com/"),
    },
    Project {
        title: "Realtime Dashboard",
        description: "Streaming metrics over websockets into interactive charts.",
        long_description: "Collects service metrics, aggregates them per second and pushes them to every open dashboard over websockets.",
        tech: &["TypeScript", "React", "WebSockets", "PostgreSQL"],
        category: Category::Frontend,
        featured: false,
        status: ProjectStatus::Completed,
        year: 2024,
        achievements: &["Handles 5k concurrent viewers"],
        metrics: &[Metric { label: "Update latency", value: "<100 ms", icon: "⏱️" }],
        github: "https://github.com/",
        demo: None,
    },
    Project {
        title: "Task Runner",
        description: "A small CLI that runs project scripts in parallel with readable output.",
        long_description: "Reads a task graph from a TOML file, runs independent tasks concurrently and prefixes every output line with its task name.",
        tech: &["Rust", "Tokio", "Clap"],
        category: Category::FullStack,
        featured: false,
        status: ProjectStatus::InProgress,
        year: 2025,
        achievements: &["Cut CI time by a third on its first user"],
        metrics: &[],
        github: "https://github.com/",
        demo: None,
    },
    Project {
        title: "Receipt Reader",
        description: "Extracts line items and totals from photographed receipts.",
        long_description: "An OCR pipeline followed by a small classifier that tags each line as item, tax or total.",
        tech: &["Python", "PyTorch", "FastAPI"],
        category: Category::AiMl,
        featured: true,
        status: ProjectStatus::Completed,
        year: 2023,
        achievements: &["94% field accuracy on a held-out set"],
        metrics: &[Metric { label: "Accuracy", value: "94%", icon: "🎯" }],
        github: "https://github.com/",
        demo: None,
    },
    Project {
        title: "Trail Log",
        description: "Offline-first hiking journal with GPS tracks and photos.",
        long_description: "Records tracks without a connection and syncs them when the phone is back online.",
        tech: &["React Native", "SQLite", "Expo"],
        category: Category::Mobile,
        featured: false,
        status: ProjectStatus::Planned,
        year: 2024,
        achievements: &[],
        metrics: &[],
        github: "https://github.com/",
        demo: None,
    },
];

/// Technologies shown on a card before collapsing into "+N more".
const CARD_TECH_COUNT: usize = 4;

#[component]
pub fn Projects() -> impl IntoView {
    let query = RwSignal::new(GalleryQuery::default());
    let selected = RwSignal::new(None::<&'static Project>);
    let match_count = move || query.with(|q| q.matching(&PROJECTS).len());

    let cards = move || {
        let visible = query.with(|q| q.visible(&PROJECTS));
        if visible.is_empty() {
            Either::Left(view! {
                <p class="text-center text-muted py-12">"No projects match your search."</p>
            })
        } else {
            Either::Right(view! {
                <div class="grid md:grid-cols-2 lg:grid-cols-3 gap-6">
                    {visible.into_iter().map(|p| project_card(p, selected)).collect_view()}
                </div>
            })
        }
    };

    view! {
        <section id="projects" class=SECTION_CLASS>
            <div class="max-w-6xl mx-auto">
                <h2 class="text-3xl font-bold mb-8">"Projects"</h2>
                <div class="flex flex-col md:flex-row gap-4 mb-8">
                    <input
                        type="search"
                        class="flex-grow px-4 py-2 rounded-md bg-surface"
                        placeholder="Search projects or technologies..."
                        aria-label="Search projects"
                        prop:value=move || query.with(|q| q.search.clone())
                        on:input=move |ev| query.update(|q| q.search = event_target_value(&ev))
                    />
                    <select
                        class="px-3 py-2 rounded-md bg-surface"
                        aria-label="Sort projects"
                        prop:value=move || query.with(|q| q.sort.as_str())
                        on:change=move |ev| {
                            if let Some(s) = ProjectSort::parse(&event_target_value(&ev)) {
                                query.update(|q| q.sort = s);
                            }
                        }
                    >
                        {ProjectSort::ALL
                            .into_iter()
                            .map(|s| view! { <option value=s.as_str()>{s.label()}</option> })
                            .collect_view()}
                    </select>
                </div>
                <div class="flex flex-wrap gap-2 mb-8">
                    {CategoryFilter::options()
                        .map(|c| {
                            view! {
                                <button
                                    class=move || {
                                        if query.with(|q| q.category == c) {
                                            "px-4 py-2 rounded-full text-sm bg-primary text-white"
                                        } else {
                                            "px-4 py-2 rounded-full text-sm bg-surface hover:bg-primary/10"
                                        }
                                    }
                                    aria-pressed=move || query.with(|q| q.category == c).to_string()
                                    on:click=move |_| query.update(|q| q.category = c)
                                >
                                    {c.label()}
                                </button>
                            }
                        })
                        .collect_view()}
                </div>
                {cards}
                <Show when=move || { match_count() > PREVIEW_COUNT }>
                    <div class="text-center mt-8">
                        <button
                            class="px-6 py-3 rounded-md border border-primary text-primary"
                            on:click=move |_| query.update(|q| q.show_all = !q.show_all)
                        >
                            {move || {
                                if query.with(|q| q.show_all) {
                                    "Show Less".to_string()
                                } else {
                                    format!("Show All Projects ({})", match_count())
                                }
                            }}
                        </button>
                    </div>
                </Show>
            </div>
            {move || selected.get().map(|p| project_details(p, selected))}
        </section>
    }
}

fn project_card(
    project: &'static Project,
    selected: RwSignal<Option<&'static Project>>,
) -> impl IntoView {
    let (tech, hidden) = project.tech_preview(CARD_TECH_COUNT);
    view! {
        <article class="p-6 rounded-lg bg-surface flex flex-col">
            <div class="flex items-center justify-between text-xs text-muted mb-2">
                <span>{project.category.label()} " · " {project.year.to_string()}</span>
                {project
                    .featured
                    .then(|| view! { <span class="px-2 py-1 rounded-full bg-primary/20 text-primary">"Featured"</span> })}
            </div>
            <h3 class="text-xl font-semibold mb-2">{project.title}</h3>
            <p class="text-sm text-muted mb-4 flex-grow">{project.description}</p>
            <ul class="flex flex-wrap gap-2 mb-4">
                {tech
                    .iter()
                    .map(|t| view! { <li class="px-2 py-1 rounded text-xs bg-secondary/10">{*t}</li> })
                    .collect_view()}
                {(hidden > 0)
                    .then(|| view! { <li class="px-2 py-1 text-xs text-muted">{format!("+{hidden} more")}</li> })}
            </ul>
            <div class="flex gap-4">
                <button class="text-primary hover:underline" on:click=move |_| selected.set(Some(project))>
                    "Details"
                </button>
                <a
                    href=project.github
                    target="_blank"
                    rel="noopener noreferrer"
                    class="text-primary hover:underline"
                >
                    "View source →"
                </a>
            </div>
        </article>
    }
}

fn project_details(
    project: &'static Project,
    selected: RwSignal<Option<&'static Project>>,
) -> impl IntoView {
    let close = move |_| selected.set(None);
    view! {
        <div
            class="fixed inset-0 z-50 flex items-center justify-center bg-black/70 p-4"
            role="dialog"
            aria-modal="true"
            aria-label=project.title
            on:click=close
        >
            <div
                class="relative max-w-2xl w-full max-h-[90vh] overflow-y-auto rounded-lg bg-surface p-8"
                on:click=|ev| ev.stop_propagation()
            >
                <button class="absolute top-4 right-4 p-2" aria-label="Close" on:click=close>
                    "✕"
                </button>
                <p class="text-sm text-muted mb-1">
                    {project.category.label()} " · " {project.year.to_string()} " · "
                    {project.status.label()}
                </p>
                <h3 class="text-2xl font-bold mb-4">{project.title}</h3>
                <p class="mb-6 leading-relaxed">{project.long_description}</p>
                {(!project.metrics.is_empty())
                    .then(|| {
                        view! {
                            <div class="grid grid-cols-2 gap-4 mb-6">
                                {project
                                    .metrics
                                    .iter()
                                    .map(|m| {
                                        view! {
                                            <div class="p-3 rounded-md bg-primary/10 text-center">
                                                <div class="text-xl">{m.icon}</div>
                                                <div class="font-bold">{m.value}</div>
                                                <div class="text-xs text-muted">{m.label}</div>
                                            </div>
                                        }
                                    })
                                    .collect_view()}
                            </div>
                        }
                    })}
                {(!project.achievements.is_empty())
                    .then(|| {
                        view! {
                            <h4 class="font-semibold mb-2">"Key Achievements"</h4>
                            <ul class="list-disc pl-5 mb-6 space-y-1">
                                {project
                                    .achievements
                                    .iter()
                                    .map(|a| view! { <li>{*a}</li> })
                                    .collect_view()}
                            </ul>
                        }
                    })}
                <h4 class="font-semibold mb-2">"Technologies"</h4>
                <ul class="flex flex-wrap gap-2 mb-6">
                    {project
                        .tech
                        .iter()
                        .map(|t| view! { <li class="px-2 py-1 rounded text-xs bg-secondary/10">{*t}</li> })
                        .collect_view()}
                </ul>
                <div class="flex gap-4">
                    <a href=project.github target="_blank" rel="noopener noreferrer" class="text-primary hover:underline">
                        "Source"
                    </a>
                    {project
                        .demo
                        .map(|url| {
                            view! {
                                <a href=url target="_blank" rel="noopener noreferrer" class="text-primary hover:underline">
                                    "Live demo"
                                </a>
                            }
                        })}
                </div>
            </div>
        </div>
    }
}

#[cfg(all(test, feature = "ssr"))]
mod tests {
    use super::*;
    use crate::app::contact::Contact;

    #[test]
    fn test_sections_clear_the_header() {
        let pages = [
            view! { <About /> }.to_html(),
            view! { <Skills /> }.to_html(),
            view! { <Projects /> }.to_html(),
            view! { <Contact /> }.to_html(),
        ];
        for html in pages {
            assert!(html.contains("scroll-mt-20 md:scroll-mt-24"), "{html}");
        }
    }

    #[test]
    fn test_gallery_starts_with_preview() {
        let html = view! { <Projects /> }.to_html();
        assert_eq!(html.matches("<article").count(), PREVIEW_COUNT);
        assert!(html.contains("Show All Projects (5)"));
        // featured projects lead
        let first = html.find("Terminal Portfolio").unwrap();
        let second = html.find("Receipt Reader").unwrap();
        let third = html.find("Realtime Dashboard").unwrap();
        assert!(first < second && second < third);
        assert!(!html.contains("Trail Log"));
        assert!(!html.contains("role=\"dialog\""));
    }

    #[test]
    fn test_skills_open_on_first_category_by_level() {
        let html = view! { <Skills /> }.to_html();
        let rust = html.find("Rust").unwrap();
        let sql = html.find("SQL").unwrap();
        let python = html.find("Python").unwrap();
        assert!(rust < sql && sql < python);
        // Languages tab: (85 + 80 + 60 + 75) / 4 = 75
        assert!(html.contains("75% avg"));
        assert!(!html.contains("PostgreSQL"));
    }
}
