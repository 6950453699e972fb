use serde::Serialize;

use super::Phase;
use super::validation::Validity;

pub const BADGE_LABEL: &str = "Current profile";

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BadgeStyle {
    pub background: &'static str,
    pub border_radius: &'static str,
    pub padding: &'static str,
}

impl Default for BadgeStyle {
    fn default() -> Self {
        Self {
            background: "#e5e5e5",
            border_radius: "5px",
            padding: "3px 5px",
        }
    }
}

/// Read-only display of the active profile.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProfileBadge {
    pub label: &'static str,
    pub text: String,
    pub style: BadgeStyle,
}

impl ProfileBadge {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            label: BADGE_LABEL,
            text: text.into(),
            style: BadgeStyle::default(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProfileOption {
    pub name: String,
    pub selected: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NewProfileField {
    pub value: String,
    pub validity: Validity,
}

/// Everything a front end needs to draw the profile screen.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProfileView {
    pub phase: Phase,
    pub badge: ProfileBadge,
    pub options: Vec<ProfileOption>,
    pub new_profile: NewProfileField,
    pub last_error: Option<String>,
}

impl ProfileView {
    pub fn option_names(&self) -> Vec<&str> {
        self.options.iter().map(|option| option.name.as_str()).collect()
    }
}
