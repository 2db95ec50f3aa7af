//! Response language flag.

use serde::{Deserialize, Serialize};

/// Language the service should use for names and formatted lines.
///
/// Sent on the wire as `language=E` or `language=A`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Language {
    #[default]
    #[serde(rename = "E")]
    English,
    #[serde(rename = "A")]
    Arabic,
}

impl Language {
    /// Returns the wire code for this language.
    #[must_use]
    pub const fn code(&self) -> &'static str {
        match self {
            Self::English => "E",
            Self::Arabic => "A",
        }
    }
}

impl std::fmt::Display for Language {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.code())
    }
}

impl std::str::FromStr for Language {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "E" | "EN" | "ENGLISH" => Ok(Self::English),
            "A" | "AR" | "ARABIC" => Ok(Self::Arabic),
            other => Err(format!("unknown language '{other}', expected E or A")),
        }
    }
}
