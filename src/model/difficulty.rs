use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// How demanding a recipe is to prepare.
///
/// Displayed with the localized labels `Baja`, `Media` and `Alta`. Parsing
/// also accepts the English names and the usual Spanish synonyms, ignoring
/// case, so seed files can be written either way.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub enum Difficulty {
    #[default]
    Easy,
    Medium,
    Hard,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Unknown difficulty: {0}")]
pub struct DifficultyParseError(pub String);

impl Difficulty {
    /// Localized label used for display and export.
    pub fn label(self) -> &'static str {
        match self {
            Difficulty::Easy => "Baja",
            Difficulty::Medium => "Media",
            Difficulty::Hard => "Alta",
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Difficulty {
    type Err = DifficultyParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match super::text::fold(s.trim()).as_str() {
            "baja" | "easy" | "facil" => Ok(Difficulty::Easy),
            "media" | "medium" | "intermedia" => Ok(Difficulty::Medium),
            "alta" | "hard" | "dificil" => Ok(Difficulty::Hard),
            _ => Err(DifficultyParseError(s.to_string())),
        }
    }
}

impl Serialize for Difficulty {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.label())
    }
}

impl<'de> Deserialize<'de> for Difficulty {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = String::deserialize(deserializer)?;
        value.parse().map_err(serde::de::Error::custom)
    }
}
