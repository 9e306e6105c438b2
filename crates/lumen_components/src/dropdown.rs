//! Dropdown select with open/close toggle and outside-press dismissal.

use crate::size::Size;
use lumen_core::{html_escape, ClassList, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::debug;

/// Option values may be strings or integers, as in the JSON props.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum OptionValue {
    Int(i64),
    Text(String),
}

impl fmt::Display for OptionValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OptionValue::Int(i) => write!(f, "{i}"),
            OptionValue::Text(s) => write!(f, "{s}"),
        }
    }
}

impl From<i64> for OptionValue {
    fn from(value: i64) -> Self {
        OptionValue::Int(value)
    }
}

impl From<&str> for OptionValue {
    fn from(value: &str) -> Self {
        OptionValue::Text(value.to_string())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DropdownOption {
    pub label: String,
    pub value: OptionValue,
    #[serde(default)]
    pub disabled: bool,
}

impl DropdownOption {
    pub fn new(label: impl Into<String>, value: impl Into<OptionValue>) -> Self {
        Self {
            label: label.into(),
            value: value.into(),
            disabled: false,
        }
    }
}

fn default_placeholder() -> String {
    "Select an option".to_string()
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DropdownProps {
    pub options: Vec<DropdownOption>,
    /// Controlled value; takes precedence over `default_value`.
    #[serde(default)]
    pub value: Option<OptionValue>,
    #[serde(default)]
    pub default_value: Option<OptionValue>,
    #[serde(default = "default_placeholder")]
    pub placeholder: String,
    #[serde(default)]
    pub size: Size,
    #[serde(default)]
    pub disabled: bool,
    #[serde(default)]
    pub class_name: Option<String>,
}

impl DropdownProps {
    pub fn new(options: Vec<DropdownOption>) -> Self {
        Self {
            options,
            value: None,
            default_value: None,
            placeholder: default_placeholder(),
            size: Size::default(),
            disabled: false,
            class_name: None,
        }
    }
}

#[derive(Debug, Clone)]
pub struct Dropdown {
    props: DropdownProps,
    open: bool,
    selected: Option<OptionValue>,
}

impl Dropdown {
    pub fn new(props: DropdownProps) -> Self {
        let selected = props.value.clone().or_else(|| props.default_value.clone());
        Self {
            props,
            open: false,
            selected,
        }
    }

    pub fn from_json(json: &str) -> Result<Self> {
        let props: DropdownProps = serde_json::from_str(json)?;
        Ok(Self::new(props))
    }

    pub fn props(&self) -> &DropdownProps {
        &self.props
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn selected(&self) -> Option<&OptionValue> {
        self.selected.as_ref()
    }

    /// Open or close the menu. A disabled dropdown stays closed.
    pub fn toggle(&mut self) -> bool {
        if !self.props.disabled {
            self.open = !self.open;
        }
        self.open
    }

    /// Select the option with `value`, closing the menu.
    ///
    /// Returns the new value when the selection was applied, i.e. when a
    /// change event should fire. Unknown and disabled options are refused.
    pub fn select(&mut self, value: &OptionValue) -> Option<OptionValue> {
        if self.props.disabled {
            return None;
        }
        let option = self
            .props
            .options
            .iter()
            .find(|option| &option.value == value && !option.disabled)?;

        debug!(value = %option.value, label = %option.label, "dropdown selection changed");
        self.selected = Some(option.value.clone());
        self.open = false;
        self.selected.clone()
    }

    /// Pointer pressed somewhere on the page. Presses outside close the menu.
    pub fn pointer_down(&mut self, inside: bool) {
        if !inside && self.open {
            debug!("dropdown closed by outside press");
            self.open = false;
        }
    }

    /// Apply a new controlled value from the parent.
    pub fn sync_value(&mut self, value: OptionValue) {
        self.selected = Some(value);
    }

    pub fn display_text(&self) -> &str {
        self.selected
            .as_ref()
            .and_then(|selected| {
                self.props
                    .options
                    .iter()
                    .find(|option| &option.value == selected)
            })
            .map(|option| option.label.as_str())
            .unwrap_or(self.props.placeholder.as_str())
    }

    pub fn render(&self) -> String {
        let mut classes = ClassList::new("dropdown");
        classes.push(format!("dropdown-{}", self.props.size.as_str()));
        classes.push_if(self.props.disabled, "disabled");
        if let Some(extra) = &self.props.class_name {
            classes.push(extra.as_str());
        }

        let disabled_attr = if self.props.disabled { " disabled" } else { "" };
        let hidden_attr = if self.open { "" } else { " hidden" };

        let mut html = format!(
            r#"<div class="{}"><button type="button" class="dropdown-toggle" aria-haspopup="listbox" aria-expanded="{}"{}>{}</button><ul class="dropdown-menu" role="listbox"{}>"#,
            classes,
            self.open,
            disabled_attr,
            html_escape(self.display_text()),
            hidden_attr
        );

        for option in &self.props.options {
            let is_selected = self.selected.as_ref() == Some(&option.value);
            let mut item_classes = ClassList::new("dropdown-item");
            item_classes.push_if(is_selected, "active");
            item_classes.push_if(option.disabled, "disabled");

            html.push_str(&format!(
                r#"<li class="{}" role="option" data-value="{}" aria-selected="{}"{}>{}</li>"#,
                item_classes,
                html_escape(&option.value.to_string()),
                is_selected,
                if option.disabled { r#" aria-disabled="true""# } else { "" },
                html_escape(&option.label)
            ));
        }

        html.push_str("</ul></div>");
        html
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fruit() -> DropdownProps {
        DropdownProps::new(vec![
            DropdownOption::new("Apple", "apple"),
            DropdownOption::new("Banana", "banana"),
            DropdownOption {
                disabled: true,
                ..DropdownOption::new("Cherry", "cherry")
            },
        ])
    }

    #[test]
    fn test_dropdown_placeholder() {
        let dropdown = Dropdown::new(fruit());
        assert_eq!(dropdown.display_text(), "Select an option");
        assert!(!dropdown.is_open());
        assert!(dropdown.render().contains(" hidden"));
    }

    #[test]
    fn test_dropdown_toggle() {
        let mut dropdown = Dropdown::new(fruit());
        assert!(dropdown.toggle());
        assert!(dropdown.render().contains(r#"aria-expanded="true""#));
        assert!(!dropdown.toggle());
    }

    #[test]
    fn test_disabled_dropdown_never_opens() {
        let mut dropdown = Dropdown::new(DropdownProps {
            disabled: true,
            ..fruit()
        });
        assert!(!dropdown.toggle());
        assert_eq!(dropdown.select(&"apple".into()), None);
        assert!(dropdown.render().contains(" disabled>"));
    }

    #[test]
    fn test_select_closes_and_reports_change() {
        let mut dropdown = Dropdown::new(fruit());
        dropdown.toggle();
        let changed = dropdown.select(&"banana".into());
        assert_eq!(changed, Some(OptionValue::from("banana")));
        assert!(!dropdown.is_open());
        assert_eq!(dropdown.display_text(), "Banana");
    }

    #[test]
    fn test_select_refuses_disabled_and_unknown_options() {
        let mut dropdown = Dropdown::new(fruit());
        dropdown.toggle();
        assert_eq!(dropdown.select(&"cherry".into()), None);
        assert_eq!(dropdown.select(&"durian".into()), None);
        assert!(dropdown.is_open());
        assert_eq!(dropdown.selected(), None);
    }

    #[test]
    fn test_outside_press_closes() {
        let mut dropdown = Dropdown::new(fruit());
        dropdown.toggle();
        dropdown.pointer_down(true);
        assert!(dropdown.is_open());
        dropdown.pointer_down(false);
        assert!(!dropdown.is_open());
    }

    #[test]
    fn test_controlled_value_wins_over_default() {
        let mut dropdown = Dropdown::new(DropdownProps {
            value: Some("banana".into()),
            default_value: Some("apple".into()),
            ..fruit()
        });
        assert_eq!(dropdown.display_text(), "Banana");

        dropdown.sync_value("apple".into());
        assert_eq!(dropdown.display_text(), "Apple");
    }

    #[test]
    fn test_dropdown_from_json_numeric_values() {
        let dropdown = Dropdown::from_json(
            r#"{"options": [{"label": "One", "value": 1}, {"label": "Two", "value": "2"}], "defaultValue": 1, "size": "large"}"#,
        )
        .unwrap();
        assert_eq!(dropdown.selected(), Some(&OptionValue::Int(1)));
        assert_eq!(dropdown.display_text(), "One");
        assert!(dropdown.render().contains("dropdown-large"));
    }

    #[test]
    fn test_dropdown_escapes_labels() {
        let dropdown = Dropdown::new(DropdownProps::new(vec![DropdownOption::new(
            "<b>bold</b>",
            "x",
        )]));
        let html = dropdown.render();
        assert!(html.contains("&lt;b&gt;bold&lt;/b&gt;"));
        assert!(!html.contains("<b>"));
    }
}
