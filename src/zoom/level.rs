use std::fmt;

use serde::Serialize;

/// Content zoom as an integer percentage, always within `[MIN, MAX]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct ZoomLevel(u32);

impl ZoomLevel {
    pub const MIN: u32 = 30;
    pub const MAX: u32 = 500;
    pub const DEFAULT: u32 = 100;

    pub fn new(percent: i64) -> Self {
        Self(percent.clamp(Self::MIN as i64, Self::MAX as i64) as u32)
    }

    pub fn percent(self) -> u32 {
        self.0
    }

    pub fn increase(self, amount: f64) -> Self {
        Self::new((self.0 as i64).saturating_add(round_amount(amount)))
    }

    pub fn decrease(self, amount: f64) -> Self {
        Self::new((self.0 as i64).saturating_sub(round_amount(amount)))
    }

    /// Reads a rendered style value such as `"110%"`; an unset value means the default.
    pub fn from_style(value: &str) -> Self {
        let trimmed = value.trim();
        if trimmed.is_empty() {
            return Self::default();
        }

        match trimmed.trim_end_matches('%').trim().parse::<f64>() {
            Ok(percent) if percent.is_finite() => Self::new(percent.trunc() as i64),
            _ => {
                log::debug!("ignoring unreadable zoom style `{value}`");
                Self::default()
            }
        }
    }

    pub fn to_style(self) -> String {
        format!("{}%", self.0)
    }
}

impl Default for ZoomLevel {
    fn default() -> Self {
        Self(Self::DEFAULT)
    }
}

impl fmt::Display for ZoomLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}%", self.0)
    }
}

fn round_amount(amount: f64) -> i64 {
    // `as` saturates and maps NaN to zero
    amount.round() as i64
}
