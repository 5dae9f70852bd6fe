//! Color palette and styling utilities for bashmenu
//! Keeps the menu's color usage in one place so every surface stays consistent

use console::Style;

/// Color theme struct for consistent styling
pub struct ColorTheme;

impl ColorTheme {
    /// Banner rules and the `->` separator
    pub fn frame() -> Style {
        Style::new().cyan()
    }

    /// Menu title, farewell and pause prompts
    pub fn accent() -> Style {
        Style::new().yellow()
    }

    /// Option numbers and the success banner
    pub fn ok() -> Style {
        Style::new().green()
    }

    /// Exit option, invalid-choice and failure banners
    pub fn alert() -> Style {
        Style::new().red()
    }

    /// Command instructions and selection echo
    pub fn detail() -> Style {
        Style::new().blue()
    }
}
