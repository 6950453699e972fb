use serde::Serialize;

pub const DUPLICATE_PROFILE_MESSAGE: &str = "A profile with this name already exists.";

/// Custom validity of the new-profile field. An invalid field blocks form submission.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "state", content = "message", rename_all = "snake_case")]
pub enum Validity {
    Valid,
    Invalid(String),
}

impl Validity {
    pub fn is_valid(&self) -> bool {
        matches!(self, Validity::Valid)
    }

    /// The custom validity message; empty when valid.
    pub fn message(&self) -> &str {
        match self {
            Validity::Valid => "",
            Validity::Invalid(message) => message,
        }
    }
}

/// Case-sensitive duplicate check against the profiles known at load time.
pub fn validate_new_profile(existing: &[String], candidate: &str) -> Validity {
    if existing.iter().any(|profile| profile == candidate) {
        Validity::Invalid(DUPLICATE_PROFILE_MESSAGE.to_string())
    } else {
        Validity::Valid
    }
}
