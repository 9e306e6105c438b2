//! Button component - pure Rust implementation.
//!
//! Renders variant/size styled buttons directly to HTML.

use crate::size::Size;
use lumen_core::{html_escape, ClassList, Result};
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ButtonVariant {
    #[default]
    Primary,
    Secondary,
    Danger,
}

impl ButtonVariant {
    pub fn as_str(self) -> &'static str {
        match self {
            ButtonVariant::Primary => "primary",
            ButtonVariant::Secondary => "secondary",
            ButtonVariant::Danger => "danger",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Button {
    text: String,
    #[serde(default)]
    variant: ButtonVariant,
    #[serde(default)]
    size: Size,
    #[serde(default)]
    disabled: bool,
    #[serde(default)]
    class_name: Option<String>,
}

impl Button {
    pub fn new(text: impl Into<String>, variant: ButtonVariant, size: Size, disabled: bool) -> Self {
        Self {
            text: text.into(),
            variant,
            size,
            disabled,
            class_name: None,
        }
    }

    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn with_class(mut self, class_name: impl Into<String>) -> Self {
        self.class_name = Some(class_name.into());
        self
    }

    /// Disabled buttons swallow clicks.
    pub fn click(&self) -> bool {
        !self.disabled
    }

    /// Render button to HTML string
    pub fn render(&self) -> String {
        let mut classes = ClassList::new("btn");
        classes.push(format!("btn-{}", self.variant.as_str()));

        // Medium is the default size, no class needed
        if let Some(suffix) = self.size.suffix() {
            classes.push(format!("btn-{suffix}"));
        }
        if let Some(extra) = &self.class_name {
            classes.push(extra.as_str());
        }

        let disabled_attr = if self.disabled { " disabled" } else { "" };

        format!(
            r#"<button type="button" class="{}"{}>{}</button>"#,
            classes,
            disabled_attr,
            html_escape(&self.text)
        )
    }
}

impl fmt::Display for Button {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}
