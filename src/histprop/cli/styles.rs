//! Styles for the histprop CLI.
//!
//! Templates refer to semantic style names (a card title, a condition badge)
//! and never to colors. The names resolve through [`HISTPROP_THEME`], a
//! registry of `console::Style`s built once through `once_cell::sync::Lazy`.
//!
//! When color is off the `style` filter passes text through untouched. An
//! unknown style name is flagged with [`MISSING_STYLE_INDICATOR`] so typos in
//! templates show up in plain output too.

use console::Style;
use once_cell::sync::Lazy;
use std::collections::HashMap;

pub const MISSING_STYLE_INDICATOR: &str = "(!?)";

/// Style identifiers shared between templates and renderers.
pub mod names {
    pub const TITLE: &str = "title";
    pub const MUTED: &str = "muted";
    pub const LABEL: &str = "label";
    pub const INDEX: &str = "index";
    pub const SECTION: &str = "section";
    pub const COUNT: &str = "count";
    pub const ERROR: &str = "error";
    pub const WARNING: &str = "warning";
    pub const SUCCESS: &str = "success";
    pub const INFO: &str = "info";
    // Condition badges
    pub const CONDITION_EXCELLENT: &str = "condition-excellent";
    pub const CONDITION_GOOD: &str = "condition-good";
    pub const CONDITION_OTHER: &str = "condition-other";
}

/// A collection of named styles.
#[derive(Clone, Default)]
pub struct Theme {
    styles: HashMap<String, Style>,
}

impl Theme {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(mut self, name: &str, style: Style) -> Self {
        self.styles.insert(name.to_string(), style);
        self
    }

    pub fn has(&self, name: &str) -> bool {
        self.styles.contains_key(name)
    }

    /// Applies a named style. Plain text comes back when `use_color` is off.
    pub fn apply(&self, name: &str, text: &str, use_color: bool) -> String {
        match self.styles.get(name) {
            Some(style) if use_color => style.clone().force_styling(true).apply_to(text).to_string(),
            Some(_) => text.to_string(),
            None => format!("{} {}", MISSING_STYLE_INDICATOR, text),
        }
    }
}

pub static HISTPROP_THEME: Lazy<Theme> = Lazy::new(|| {
    let muted = Style::new().color256(245);
    Theme::new()
        .add(names::TITLE, Style::new().bold())
        .add(names::MUTED, muted.clone())
        .add(names::LABEL, Style::new().bold().color256(250))
        .add(names::INDEX, Style::new().yellow())
        .add(names::SECTION, Style::new().cyan().bold())
        .add(names::COUNT, Style::new().cyan())
        .add(names::ERROR, Style::new().red().bold())
        .add(names::WARNING, Style::new().yellow().bold())
        .add(names::SUCCESS, Style::new().green())
        .add(names::INFO, muted)
        .add(names::CONDITION_EXCELLENT, Style::new().green())
        .add(names::CONDITION_GOOD, Style::new().blue())
        .add(names::CONDITION_OTHER, Style::new().yellow())
});

/// Badge style for a condition value: anything mentioning "excellent" is
/// green, then "good" is blue, everything else yellow.
pub fn condition_style(condition: &str) -> &'static str {
    let lowered = condition.to_lowercase();
    if lowered.contains("excellent") {
        names::CONDITION_EXCELLENT
    } else if lowered.contains("good") {
        names::CONDITION_GOOD
    } else {
        names::CONDITION_OTHER
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn condition_badges() {
        assert_eq!(condition_style("Excellent"), names::CONDITION_EXCELLENT);
        assert_eq!(condition_style("Good to excellent"), names::CONDITION_EXCELLENT);
        assert_eq!(condition_style("very good"), names::CONDITION_GOOD);
        assert_eq!(condition_style("Fair"), names::CONDITION_OTHER);
    }

    #[test]
    fn apply_without_color_is_plain() {
        assert_eq!(HISTPROP_THEME.apply(names::TITLE, "Royall House", false), "Royall House");
    }

    #[test]
    fn apply_with_color_emits_ansi() {
        let styled = HISTPROP_THEME.apply(names::SUCCESS, "ok", true);
        assert!(styled.contains("\u{1b}["));
        assert!(styled.contains("ok"));
    }

    #[test]
    fn unknown_style_is_flagged() {
        assert_eq!(
            HISTPROP_THEME.apply("typo", "text", false),
            format!("{} text", MISSING_STYLE_INDICATOR)
        );
    }

    #[test]
    fn every_name_is_registered() {
        for name in [
            names::TITLE,
            names::MUTED,
            names::LABEL,
            names::INDEX,
            names::SECTION,
            names::COUNT,
            names::ERROR,
            names::WARNING,
            names::SUCCESS,
            names::INFO,
            names::CONDITION_EXCELLENT,
            names::CONDITION_GOOD,
            names::CONDITION_OTHER,
        ] {
            assert!(HISTPROP_THEME.has(name), "{name} missing");
        }
    }
}
