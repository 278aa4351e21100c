use std::fmt;
use std::str::FromStr;

/// Discrete feedback intensity requested by the host.
///
/// This is a request tag, not a numeric scale; backends map each kind to
/// whatever their platform offers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FeedbackKind {
    Light,
    Medium,
    Heavy,
    Selection,
}

impl FeedbackKind {
    pub const ALL: [FeedbackKind; 4] = [
        FeedbackKind::Light,
        FeedbackKind::Medium,
        FeedbackKind::Heavy,
        FeedbackKind::Selection,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            FeedbackKind::Light => "light",
            FeedbackKind::Medium => "medium",
            FeedbackKind::Heavy => "heavy",
            FeedbackKind::Selection => "selection",
        }
    }
}

impl fmt::Display for FeedbackKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FeedbackKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "light" => Ok(FeedbackKind::Light),
            "medium" => Ok(FeedbackKind::Medium),
            "heavy" => Ok(FeedbackKind::Heavy),
            "selection" => Ok(FeedbackKind::Selection),
            other => Err(format!(
                "unknown feedback kind '{}' (expected light, medium, heavy or selection)",
                other
            )),
        }
    }
}
