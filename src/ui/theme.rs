//! # Theme System
//!
//! Centralized colors for the quickpick popup. Rendering code references
//! semantic [`Theme`] fields instead of hardcoding `ratatui` colors; the
//! active theme is chosen by name via config or the `--theme` flag.
//!
//! ## Built-in Themes
//!
//! - **Catppuccin Mocha** (default) - warm, dark pastel theme
//! - **Catppuccin Macchiato** - medium-dark pastel theme
//! - **Dracula** - dark theme with vivid colors
//! - **Nord** - arctic, north-bluish color palette

use ratatui::style::Color;

/// All colors used by the popup, grouped by semantic role.
#[derive(Debug, Clone)]
pub struct Theme {
    /// Human-readable name matched against config / `--theme`.
    pub name: &'static str,

    /// Popup background.
    pub bg: Color,
    /// Primary text (item rows).
    pub fg: Color,
    /// Muted text (separator, footer, affordances).
    pub fg_dim: Color,
    /// Accent for the border, title, and group labels.
    pub accent: Color,
    /// The typed query text.
    pub secondary: Color,
}

impl Theme {
    /// Return the list of all built-in themes.
    pub fn all() -> &'static [Theme] {
        &BUILT_IN_THEMES
    }

    /// Find a built-in theme by name (case-insensitive).
    pub fn by_name(name: &str) -> Option<&'static Theme> {
        BUILT_IN_THEMES
            .iter()
            .find(|t| t.name.eq_ignore_ascii_case(name))
    }

    /// Return the default theme (Catppuccin Mocha).
    pub fn default_theme() -> &'static Theme {
        &BUILT_IN_THEMES[0]
    }
}

static BUILT_IN_THEMES: [Theme; 4] = [
    // 0 - Catppuccin Mocha (default)
    Theme {
        name: "Catppuccin Mocha",
        bg: Color::Rgb(30, 30, 46),           // base
        fg: Color::Rgb(205, 214, 244),        // text
        fg_dim: Color::Rgb(108, 112, 134),    // overlay0
        accent: Color::Rgb(137, 180, 250),    // blue
        secondary: Color::Rgb(249, 226, 175), // yellow
    },
    // 1 - Catppuccin Macchiato
    Theme {
        name: "Catppuccin Macchiato",
        bg: Color::Rgb(36, 39, 58),           // base
        fg: Color::Rgb(202, 211, 245),        // text
        fg_dim: Color::Rgb(110, 115, 141),    // overlay0
        accent: Color::Rgb(138, 173, 244),    // blue
        secondary: Color::Rgb(238, 212, 159), // yellow
    },
    // 2 - Dracula
    Theme {
        name: "Dracula",
        bg: Color::Rgb(40, 42, 54),
        fg: Color::Rgb(248, 248, 242),
        fg_dim: Color::Rgb(98, 114, 164),
        accent: Color::Rgb(189, 147, 249),    // purple
        secondary: Color::Rgb(241, 250, 140), // yellow
    },
    // 3 - Nord
    Theme {
        name: "Nord",
        bg: Color::Rgb(46, 52, 64),
        fg: Color::Rgb(216, 222, 233),
        fg_dim: Color::Rgb(76, 86, 106),
        accent: Color::Rgb(136, 192, 208),    // frost
        secondary: Color::Rgb(235, 203, 139), // yellow
    },
];
