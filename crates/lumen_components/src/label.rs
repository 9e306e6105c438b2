//! Label component - pure Rust implementation.

use crate::size::Size;
use lumen_core::{html_escape, ClassList, Result};
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LabelVariant {
    #[default]
    Default,
    Required,
    Optional,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FontWeight {
    Normal,
    #[default]
    Medium,
    Bold,
}

impl FontWeight {
    pub fn as_str(self) -> &'static str {
        match self {
            FontWeight::Normal => "normal",
            FontWeight::Medium => "medium",
            FontWeight::Bold => "bold",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Label {
    text: String,
    #[serde(default)]
    html_for: Option<String>,
    #[serde(default)]
    size: Size,
    #[serde(default)]
    variant: LabelVariant,
    #[serde(default)]
    disabled: bool,
    #[serde(default)]
    font_weight: FontWeight,
    #[serde(default)]
    class_name: Option<String>,
}

impl Label {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            html_for: None,
            size: Size::default(),
            variant: LabelVariant::default(),
            disabled: false,
            font_weight: FontWeight::default(),
            class_name: None,
        }
    }

    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn html_for(mut self, id: impl Into<String>) -> Self {
        self.html_for = Some(id.into());
        self
    }

    pub fn size(mut self, size: Size) -> Self {
        self.size = size;
        self
    }

    pub fn variant(mut self, variant: LabelVariant) -> Self {
        self.variant = variant;
        self
    }

    pub fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    pub fn font_weight(mut self, weight: FontWeight) -> Self {
        self.font_weight = weight;
        self
    }

    /// Render label to HTML string
    pub fn render(&self) -> String {
        let mut classes = ClassList::new("form-label");
        classes.push(format!("form-label-{}", self.size.as_str()));
        classes.push(format!("fw-{}", self.font_weight.as_str()));
        classes.push_if(self.disabled, "disabled");
        if let Some(extra) = &self.class_name {
            classes.push(extra.as_str());
        }

        // A disabled label no longer focuses its control
        let for_attr = match (&self.html_for, self.disabled) {
            (Some(id), false) => format!(r#" for="{}""#, html_escape(id)),
            _ => String::new(),
        };

        let marker = match self.variant {
            LabelVariant::Default => "",
            LabelVariant::Required => r#"<span class="form-label-marker" aria-hidden="true"> *</span>"#,
            LabelVariant::Optional => r#"<span class="form-label-marker"> (optional)</span>"#,
        };

        format!(
            r#"<label class="{}"{}>{}{}</label>"#,
            classes,
            for_attr,
            html_escape(&self.text),
            marker
        )
    }
}

impl fmt::Display for Label {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_label_basic() {
        let html = Label::new("Email").html_for("email").render();
        assert_eq!(
            html,
            r#"<label class="form-label form-label-medium fw-medium" for="email">Email</label>"#
        );
    }

    #[test]
    fn test_label_variants() {
        let required = Label::new("Name").variant(LabelVariant::Required).render();
        let optional = Label::new("Nickname").variant(LabelVariant::Optional).render();
        let plain = Label::new("Bio").render();

        assert!(required.contains("> *</span>"));
        assert!(optional.contains("(optional)"));
        assert!(!plain.contains("form-label-marker"));
    }

    #[test]
    fn test_label_disabled_drops_for() {
        let html = Label::new("Email").html_for("email").disabled(true).render();
        assert!(!html.contains("for="));
        assert!(html.contains("disabled"));
    }

    #[test]
    fn test_label_sizes_and_weight() {
        let html = Label::new("Big")
            .size(Size::Large)
            .font_weight(FontWeight::Bold)
            .render();
        assert!(html.contains("form-label-large"));
        assert!(html.contains("fw-bold"));
    }

    #[test]
    fn test_label_from_json() {
        let label = Label::from_json(r#"{"text": "Age", "htmlFor": "age", "variant": "optional"}"#).unwrap();
        let html = label.render();
        assert!(html.contains(r#"for="age""#));
        assert!(html.contains("(optional)"));
    }

    #[test]
    fn test_html_escape() {
        let html = Label::new("<script>alert('xss')</script>").render();
        assert!(html.contains("&lt;script&gt;"));
        assert!(!html.contains("<script>"));
    }
}
