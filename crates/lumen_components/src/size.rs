use serde::{Deserialize, Serialize};

/// Component size shared by buttons, labels and dropdowns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Size {
    Small,
    #[default]
    Medium,
    Large,
}

impl Size {
    pub fn as_str(self) -> &'static str {
        match self {
            Size::Small => "small",
            Size::Medium => "medium",
            Size::Large => "large",
        }
    }

    /// Bootstrap-style suffix (`sm`/`lg`); medium is the unsuffixed default.
    pub fn suffix(self) -> Option<&'static str> {
        match self {
            Size::Small => Some("sm"),
            Size::Medium => None,
            Size::Large => Some("lg"),
        }
    }
}
