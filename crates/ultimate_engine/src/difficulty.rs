//! Difficulty tiers for the engine player.

use serde::{Deserialize, Serialize};

/// How hard the engine tries.
///
/// Chosen once per match and fixed for its duration.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
    strum::EnumIter,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum Difficulty {
    /// Uniformly random legal moves.
    Easy,
    /// Optimal most of the time, random otherwise.
    Medium,
    /// Always optimal. Never loses.
    #[default]
    Hard,
}

impl Difficulty {
    /// Returns the display label for this tier.
    pub fn label(self) -> &'static str {
        match self {
            Self::Easy => "Easy",
            Self::Medium => "Medium",
            Self::Hard => "Hard",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn test_parse_round_trips_display() {
        for tier in Difficulty::iter() {
            assert_eq!(tier.to_string().parse::<Difficulty>().unwrap(), tier);
        }
        assert_eq!("HARD".parse::<Difficulty>().unwrap(), Difficulty::Hard);
        assert!("expert".parse::<Difficulty>().is_err());
    }

    #[test]
    fn test_default_is_hard() {
        assert_eq!(Difficulty::default(), Difficulty::Hard);
        assert_eq!(Difficulty::default().label(), "Hard");
    }
}
