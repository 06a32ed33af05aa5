// File: src/core/heat.rs
use crate::core::types::Outcome;
use serde::{Deserialize, Serialize};
use std::fmt;

pub const MIN_HEAT: u8 = 0;
pub const MAX_HEAT: u8 = 10;
pub const DEFAULT_HEAT: u8 = 5;

/// Display bands. Upper bounds are inclusive.
const LOW_BAND_MAX: u8 = 3;
const MEDIUM_BAND_MAX: u8 = 7;

/// Heat at or past these thresholds ruins the dish regardless of ingredients.
/// Not the same cut points as the display bands.
const BURNT_AT: u8 = 9;
const UNDERCOOKED_AT: u8 = 1;

const MOOD_FIERY_AT: u8 = 9;
const MOOD_SLEEPY_AT: u8 = 2;

/// Heat dial position. Always within `[MIN_HEAT, MAX_HEAT]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct HeatLevel(u8);

impl HeatLevel {
    /// Clamps `value` into range.
    pub fn new(value: u8) -> Self {
        Self(value.min(MAX_HEAT))
    }

    pub fn value(&self) -> u8 {
        self.0
    }

    pub fn increment(&mut self) {
        self.0 = (self.0 + 1).min(MAX_HEAT);
    }

    pub fn decrement(&mut self) {
        self.0 = self.0.saturating_sub(1);
    }

    pub fn reset(&mut self) {
        self.0 = DEFAULT_HEAT;
    }

    pub fn band(&self) -> HeatBand {
        if self.0 <= LOW_BAND_MAX {
            HeatBand::Low
        } else if self.0 <= MEDIUM_BAND_MAX {
            HeatBand::Medium
        } else {
            HeatBand::High
        }
    }

    pub fn mood(&self) -> Mood {
        if self.0 >= MOOD_FIERY_AT {
            Mood::Fiery
        } else if self.0 <= MOOD_SLEEPY_AT {
            Mood::Sleepy
        } else {
            Mood::Sparkling
        }
    }

    /// `Some(Burnt)` / `Some(Undercooked)` when the heat alone decides the dish.
    pub fn override_outcome(&self) -> Option<Outcome> {
        if self.0 >= BURNT_AT {
            Some(Outcome::Burnt)
        } else if self.0 <= UNDERCOOKED_AT {
            Some(Outcome::Undercooked)
        } else {
            None
        }
    }
}

impl Default for HeatLevel {
    fn default() -> Self {
        Self(DEFAULT_HEAT)
    }
}

impl TryFrom<u8> for HeatLevel {
    type Error = String;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        if value > MAX_HEAT {
            return Err(format!("heat {value} is outside {MIN_HEAT}..={MAX_HEAT}"));
        }
        Ok(Self(value))
    }
}

impl From<HeatLevel> for u8 {
    fn from(heat: HeatLevel) -> Self {
        heat.0
    }
}

impl fmt::Display for HeatLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HeatBand {
    Low,
    Medium,
    High,
}

impl HeatBand {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Low => "Low",
            Self::Medium => "Medium",
            Self::High => "High",
        }
    }
}

impl fmt::Display for HeatBand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Decorative indicator shown next to the band.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Mood {
    Sleepy,
    Sparkling,
    Fiery,
}

impl Mood {
    pub fn indicator(&self) -> &'static str {
        match self {
            Self::Sleepy => "💤",
            Self::Sparkling => "✨",
            Self::Fiery => "🔥🔥🔥",
        }
    }
}

/// Everything the heat dial says about the current setting.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeatReading {
    pub band: HeatBand,
    pub mood: Mood,
    pub override_outcome: Option<Outcome>,
}

pub fn classify(heat: HeatLevel) -> HeatReading {
    HeatReading {
        band: heat.band(),
        mood: heat.mood(),
        override_outcome: heat.override_outcome(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn heat(v: u8) -> HeatLevel {
        HeatLevel::new(v)
    }

    #[test]
    fn test_band_boundaries() {
        assert_eq!(heat(0).band(), HeatBand::Low);
        assert_eq!(heat(3).band(), HeatBand::Low);
        assert_eq!(heat(4).band(), HeatBand::Medium);
        assert_eq!(heat(7).band(), HeatBand::Medium);
        assert_eq!(heat(8).band(), HeatBand::High);
        assert_eq!(heat(10).band(), HeatBand::High);
    }

    #[test]
    fn test_override_thresholds_differ_from_bands() {
        assert_eq!(heat(0).override_outcome(), Some(Outcome::Undercooked));
        assert_eq!(heat(1).override_outcome(), Some(Outcome::Undercooked));
        assert_eq!(heat(2).override_outcome(), None);
        // High band but still cookable
        assert_eq!(heat(8).override_outcome(), None);
        assert_eq!(heat(9).override_outcome(), Some(Outcome::Burnt));
        assert_eq!(heat(10).override_outcome(), Some(Outcome::Burnt));
    }

    #[test]
    fn test_mood_indicator() {
        assert_eq!(heat(2).mood().indicator(), "💤");
        assert_eq!(heat(3).mood().indicator(), "✨");
        assert_eq!(heat(8).mood().indicator(), "✨");
        assert_eq!(heat(9).mood().indicator(), "🔥🔥🔥");
    }

    #[test]
    fn test_dial_clamps_at_bounds() {
        let mut h = heat(42);
        assert_eq!(h.value(), MAX_HEAT);
        h.increment();
        assert_eq!(h.value(), MAX_HEAT);

        let mut h = heat(0);
        h.decrement();
        assert_eq!(h.value(), MIN_HEAT);
        h.increment();
        assert_eq!(h.value(), 1);
        h.reset();
        assert_eq!(h, HeatLevel::default());
    }

    #[test]
    fn test_deserialize_rejects_out_of_range() {
        assert!(serde_json::from_str::<HeatLevel>("11").is_err());
        assert_eq!(serde_json::from_str::<HeatLevel>("6").unwrap().value(), 6);
    }

    #[test]
    fn test_classify_bundles_everything() {
        let reading = classify(heat(9));
        assert_eq!(reading.band, HeatBand::High);
        assert_eq!(reading.mood, Mood::Fiery);
        assert_eq!(reading.override_outcome, Some(Outcome::Burnt));
    }
}
