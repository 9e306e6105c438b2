//! HTML output helpers shared by every component renderer.

use serde::{Deserialize, Serialize};
use std::fmt;

/// HTML escape function for safety
pub fn html_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#x27;")
}

/// A CSS length as supplied by callers: a bare number means pixels,
/// anything else is passed through verbatim (`"100%"`, `"auto"`, `"12rem"`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Length {
    Px(f64),
    Css(String),
}

impl fmt::Display for Length {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Length::Px(n) => write!(f, "{n}px"),
            Length::Css(s) => write!(f, "{s}"),
        }
    }
}

impl From<u32> for Length {
    fn from(px: u32) -> Self {
        Length::Px(f64::from(px))
    }
}

impl From<&str> for Length {
    fn from(css: &str) -> Self {
        Length::Css(css.to_string())
    }
}

/// Space-separated class attribute builder.
///
/// Empty entries are skipped so optional classes can be pushed unconditionally.
#[derive(Debug, Clone, Default)]
pub struct ClassList {
    classes: Vec<String>,
}

impl ClassList {
    pub fn new(base: impl Into<String>) -> Self {
        let mut list = Self::default();
        list.push(base);
        list
    }

    pub fn push(&mut self, class: impl Into<String>) {
        let class = class.into();
        let trimmed = class.trim();
        if !trimmed.is_empty() {
            self.classes.push(trimmed.to_string());
        }
    }

    pub fn push_if(&mut self, cond: bool, class: impl Into<String>) {
        if cond {
            self.push(class);
        }
    }

    pub fn is_empty(&self) -> bool {
        self.classes.is_empty()
    }
}

impl fmt::Display for ClassList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&html_escape(&self.classes.join(" ")))
    }
}
