use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Local storage key holding the selected theme name.
pub const THEME_STORAGE_KEY: &str = "portfolio-theme";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Dark,
    Light,
    Cyberpunk,
    Minimal,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    pub primary: &'static str,
    pub secondary: &'static str,
    pub background: &'static str,
    pub surface: &'static str,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Unknown theme: {0}")]
pub struct ParseThemeError(String);

impl Theme {
    pub const ALL: [Theme; 4] = [Theme::Dark, Theme::Light, Theme::Cyberpunk, Theme::Minimal];

    pub fn as_str(&self) -> &'static str {
        match self {
            Theme::Dark => "dark",
            Theme::Light => "light",
            Theme::Cyberpunk => "cyberpunk",
            Theme::Minimal => "minimal",
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Theme::Dark => "Dark",
            Theme::Light => "Light",
            Theme::Cyberpunk => "Cyberpunk",
            Theme::Minimal => "Minimal",
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            Theme::Dark => "🌙",
            Theme::Light => "☀️",
            Theme::Cyberpunk => "🎮",
            Theme::Minimal => "🎨",
        }
    }

    pub fn palette(&self) -> Palette {
        match self {
            Theme::Dark => Palette {
                primary: "rgb(59, 130, 246)",
                secondary: "rgb(168, 85, 247)",
                background: "rgb(9, 9, 11)",
                surface: "rgb(24, 24, 27)",
            },
            Theme::Light => Palette {
                primary: "rgb(37, 99, 235)",
                secondary: "rgb(147, 51, 234)",
                background: "rgb(255, 255, 255)",
                surface: "rgb(248, 250, 252)",
            },
            Theme::Cyberpunk => Palette {
                primary: "rgb(255, 20, 147)",
                secondary: "rgb(0, 255, 255)",
                background: "rgb(10, 10, 20)",
                surface: "rgb(20, 20, 40)",
            },
            Theme::Minimal => Palette {
                primary: "rgb(75, 85, 99)",
                secondary: "rgb(107, 114, 128)",
                background: "rgb(249, 250, 251)",
                surface: "rgb(255, 255, 255)",
            },
        }
    }

    /// Inline style for the document root.
    pub fn css_variables(&self) -> String {
        let p = self.palette();
        format!(
            "--color-primary: {}; --color-secondary: {}; --color-background: {}; --color-surface: {};",
            p.primary, p.secondary, p.background, p.surface
        )
    }

    pub fn is_dark(&self) -> bool {
        matches!(self, Theme::Dark | Theme::Cyberpunk)
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Theme {
    type Err = ParseThemeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Theme::ALL
            .into_iter()
            .find(|t| t.as_str() == s)
            .ok_or_else(|| ParseThemeError(s.to_string()))
    }
}
