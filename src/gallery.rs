//! Filtering and ordering for the project gallery and the skills showcase.

use std::cmp::Ordering;

/// Projects shown before the user asks for the full list.
pub const PREVIEW_COUNT: usize = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    FullStack,
    Frontend,
    AiMl,
    Mobile,
}

impl Category {
    pub const ALL: [Category; 4] = [
        Category::FullStack,
        Category::Frontend,
        Category::AiMl,
        Category::Mobile,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Category::FullStack => "Full-Stack",
            Category::Frontend => "Frontend",
            Category::AiMl => "AI/ML",
            Category::Mobile => "Mobile",
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum CategoryFilter {
    #[default]
    All,
    Only(Category),
}

impl CategoryFilter {
    pub fn label(&self) -> &'static str {
        match self {
            CategoryFilter::All => "All",
            CategoryFilter::Only(c) => c.label(),
        }
    }

    pub fn matches(&self, category: Category) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Only(c) => *c == category,
        }
    }

    pub fn options() -> impl Iterator<Item = CategoryFilter> {
        std::iter::once(CategoryFilter::All).chain(Category::ALL.map(CategoryFilter::Only))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProjectStatus {
    Completed,
    InProgress,
    Planned,
}

impl ProjectStatus {
    pub fn label(&self) -> &'static str {
        match self {
            ProjectStatus::Completed => "Completed",
            ProjectStatus::InProgress => "In Progress",
            ProjectStatus::Planned => "Planned",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Metric {
    pub label: &'static str,
    pub value: &'static str,
    pub icon: &'static str,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Project {
    pub title: &'static str,
    pub description: &'static str,
    /// Shown in the detail view only.
    pub long_description: &'static str,
    pub tech: &'static [&'static str],
    pub category: Category,
    pub featured: bool,
    pub status: ProjectStatus,
    pub year: u16,
    pub achievements: &'static [&'static str],
    pub metrics: &'static [Metric],
    pub github: &'static str,
    pub demo: Option<&'static str>,
}

impl Project {
    /// The first `n` technologies and how many were left out.
    pub fn tech_preview(&self, n: usize) -> (&'static [&'static str], usize) {
        let shown = &self.tech[..n.min(self.tech.len())];
        (shown, self.tech.len() - shown.len())
    }

    /// `needle` must already be lowercase.
    fn mentions(&self, needle: &str) -> bool {
        self.title.to_lowercase().contains(needle)
            || self.description.to_lowercase().contains(needle)
            || self.tech.iter().any(|t| t.to_lowercase().contains(needle))
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ProjectSort {
    #[default]
    Featured,
    Year,
    Title,
}

impl ProjectSort {
    pub const ALL: [ProjectSort; 3] = [ProjectSort::Featured, ProjectSort::Year, ProjectSort::Title];

    pub fn as_str(&self) -> &'static str {
        match self {
            ProjectSort::Featured => "featured",
            ProjectSort::Year => "year",
            ProjectSort::Title => "title",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ProjectSort::Featured => "Featured first",
            ProjectSort::Year => "Newest first",
            ProjectSort::Title => "By title",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|o| o.as_str() == s)
    }

    fn compare(&self, a: &Project, b: &Project) -> Ordering {
        match self {
            ProjectSort::Featured => b.featured.cmp(&a.featured),
            ProjectSort::Year => b.year.cmp(&a.year),
            ProjectSort::Title => a.title.to_lowercase().cmp(&b.title.to_lowercase()),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GalleryQuery {
    pub category: CategoryFilter,
    pub search: String,
    pub sort: ProjectSort,
    pub show_all: bool,
}

impl GalleryQuery {
    /// Every project passing the category filter and search, in sort order.
    /// The sort is stable, so ties keep their listing order.
    pub fn matching<'a>(&self, projects: &'a [Project]) -> Vec<&'a Project> {
        let needle = self.search.trim().to_lowercase();
        let mut found: Vec<&Project> = projects
            .iter()
            .filter(|p| self.category.matches(p.category) && p.mentions(&needle))
            .collect();
        found.sort_by(|a, b| self.sort.compare(a, b));
        found
    }

    /// What the gallery renders: the first [`PREVIEW_COUNT`] matches unless
    /// `show_all` is set.
    pub fn visible<'a>(&self, projects: &'a [Project]) -> Vec<&'a Project> {
        let mut found = self.matching(projects);
        if !self.show_all {
            found.truncate(PREVIEW_COUNT);
        }
        found
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Skill {
    pub name: &'static str,
    pub icon: &'static str,
    /// Self-assessed, 0 to 100.
    pub level: u8,
    pub projects: u16,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkillCategory {
    pub name: &'static str,
    pub skills: &'static [Skill],
}

impl SkillCategory {
    pub fn average_level(&self) -> u8 {
        if self.skills.is_empty() {
            return 0;
        }
        let total: u32 = self.skills.iter().map(|s| s.level as u32).sum();
        let n = self.skills.len() as u32;
        ((total + n / 2) / n) as u8
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SkillSort {
    #[default]
    Level,
    Projects,
    Name,
}

impl SkillSort {
    pub const ALL: [SkillSort; 3] = [SkillSort::Level, SkillSort::Projects, SkillSort::Name];

    pub fn as_str(&self) -> &'static str {
        match self {
            SkillSort::Level => "level",
            SkillSort::Projects => "projects",
            SkillSort::Name => "name",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            SkillSort::Level => "Sort by Level",
            SkillSort::Projects => "Sort by Projects",
            SkillSort::Name => "Sort by Name",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|o| o.as_str() == s)
    }
}

pub fn sorted_skills(skills: &[Skill], sort: SkillSort) -> Vec<&Skill> {
    let mut sorted: Vec<&Skill> = skills.iter().collect();
    match sort {
        SkillSort::Level => sorted.sort_by(|a, b| b.level.cmp(&a.level)),
        SkillSort::Projects => sorted.sort_by(|a, b| b.projects.cmp(&a.projects)),
        SkillSort::Name => sorted.sort_by_key(|s| s.name.to_lowercase()),
    }
    sorted
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Proficiency {
    Expert,
    Advanced,
    Intermediate,
    BeginnerPlus,
    Learning,
}

impl Proficiency {
    pub fn from_level(level: u8) -> Self {
        match level {
            90..=u8::MAX => Proficiency::Expert,
            70..=89 => Proficiency::Advanced,
            50..=69 => Proficiency::Intermediate,
            30..=49 => Proficiency::BeginnerPlus,
            _ => Proficiency::Learning,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Proficiency::Expert => "Expert",
            Proficiency::Advanced => "Advanced",
            Proficiency::Intermediate => "Intermediate",
            Proficiency::BeginnerPlus => "Beginner+",
            Proficiency::Learning => "Learning",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn project(title: &'static str, category: Category, featured: bool, year: u16) -> Project {
        Project {
            title,
            description: "Something built",
            long_description: "",
            tech: &["React", "Node.js"],
            category,
            featured,
            status: ProjectStatus::Completed,
            year,
            achievements: &[],
            metrics: &[],
            github: "",
            demo: None,
        }
    }

    fn catalog() -> Vec<Project> {
        vec![
            project("Weather App", Category::Frontend, false, 2023),
            project("Chat Server", Category::FullStack, true, 2024),
            project("Image Tagger", Category::AiMl, false, 2025),
            Project {
                tech: &["Python", "TensorFlow"],
                ..project("Mood Journal", Category::Mobile, true, 2022)
            },
            project("budget Tracker", Category::FullStack, false, 2024),
        ]
    }

    fn titles(found: &[&Project]) -> Vec<&'static str> {
        found.iter().map(|p| p.title).collect()
    }

    #[test]
    fn test_category_filter() {
        let projects = catalog();
        let query = GalleryQuery {
            category: CategoryFilter::Only(Category::FullStack),
            show_all: true,
            ..Default::default()
        };
        let found = query.matching(&projects);
        assert_eq!(titles(&found), vec!["Chat Server", "budget Tracker"]);

        let all = GalleryQuery {
            show_all: true,
            ..Default::default()
        };
        assert_eq!(all.matching(&projects).len(), projects.len());
        assert_eq!(CategoryFilter::options().count(), 5);
        assert_eq!(CategoryFilter::All.label(), "All");
    }

    #[test]
    fn test_search_is_case_insensitive() {
        let projects = catalog();
        let mut query = GalleryQuery {
            search: "CHAT".to_string(),
            ..Default::default()
        };
        assert_eq!(titles(&query.matching(&projects)), vec!["Chat Server"]);

        // matches on tech as well as title and description
        query.search = "tensorflow".to_string();
        assert_eq!(titles(&query.matching(&projects)), vec!["Mood Journal"]);

        query.search = "BUILT".to_string();
        assert_eq!(query.matching(&projects).len(), projects.len());

        query.search = "nothing like this".to_string();
        assert!(query.matching(&projects).is_empty());
    }

    #[test]
    fn test_sort_keys() {
        let projects = catalog();
        let mut query = GalleryQuery {
            show_all: true,
            ..Default::default()
        };

        // featured first, listing order kept within each group
        assert_eq!(
            titles(&query.matching(&projects)),
            vec![
                "Chat Server",
                "Mood Journal",
                "Weather App",
                "Image Tagger",
                "budget Tracker"
            ]
        );

        query.sort = ProjectSort::Year;
        let years: Vec<u16> = query.matching(&projects).iter().map(|p| p.year).collect();
        assert_eq!(years, vec![2025, 2024, 2024, 2023, 2022]);

        query.sort = ProjectSort::Title;
        assert_eq!(
            titles(&query.matching(&projects)),
            vec![
                "budget Tracker",
                "Chat Server",
                "Image Tagger",
                "Mood Journal",
                "Weather App"
            ]
        );
        assert_eq!(ProjectSort::parse("year"), Some(ProjectSort::Year));
        assert_eq!(ProjectSort::parse("stars"), None);
    }

    #[test]
    fn test_preview_shows_three() {
        let projects = catalog();
        let mut query = GalleryQuery::default();
        assert_eq!(query.visible(&projects).len(), PREVIEW_COUNT);

        query.show_all = true;
        assert_eq!(query.visible(&projects).len(), 5);

        query.show_all = false;
        query.category = CategoryFilter::Only(Category::FullStack);
        assert_eq!(query.visible(&projects).len(), 2);
    }

    #[test]
    fn test_tech_preview() {
        let p = Project {
            tech: &["Rust", "Leptos", "Axum", "Tokio", "SQLx", "Docker"],
            ..project("Site", Category::FullStack, true, 2025)
        };
        assert_eq!(p.tech_preview(4), (&p.tech[..4], 2));

        let short = project("Short", Category::Frontend, false, 2024);
        assert_eq!(short.tech_preview(4), (short.tech, 0));
    }

    const SKILLS: [Skill; 3] = [
        Skill {
            name: "python",
            icon: "",
            level: 60,
            projects: 7,
        },
        Skill {
            name: "SQL",
            icon: "",
            level: 80,
            projects: 8,
        },
        Skill {
            name: "Java",
            icon: "",
            level: 30,
            projects: 12,
        },
    ];

    #[test]
    fn test_skill_sorting() {
        let names = |sort| {
            sorted_skills(&SKILLS, sort)
                .iter()
                .map(|s| s.name)
                .collect::<Vec<_>>()
        };
        assert_eq!(names(SkillSort::Level), vec!["SQL", "python", "Java"]);
        assert_eq!(names(SkillSort::Projects), vec!["Java", "SQL", "python"]);
        assert_eq!(names(SkillSort::Name), vec!["Java", "python", "SQL"]);
    }

    #[test]
    fn test_proficiency_bands() {
        assert_eq!(Proficiency::from_level(95), Proficiency::Expert);
        assert_eq!(Proficiency::from_level(90), Proficiency::Expert);
        assert_eq!(Proficiency::from_level(89), Proficiency::Advanced);
        assert_eq!(Proficiency::from_level(50), Proficiency::Intermediate);
        assert_eq!(Proficiency::from_level(30).label(), "Beginner+");
        assert_eq!(Proficiency::from_level(29), Proficiency::Learning);

        let category = SkillCategory {
            name: "Languages",
            skills: &SKILLS,
        };
        // (60 + 80 + 30) / 3 = 56.67
        assert_eq!(category.average_level(), 57);
    }
}
