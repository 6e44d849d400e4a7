//! Household mode: the three-way home / away / sleep toggle.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ValidationError;

/// Banner text while everyone is home.
pub const HOME_ALERT: &str = "All clear, house is comfy \u{1F49C}";
/// Banner text while the house is empty.
pub const AWAY_ALERT: &str = "House is guarded. I will notify on any motion.";
/// Banner text overnight.
pub const SLEEP_ALERT: &str = "Quiet mode on. I will keep an eye on alerts.";

/// Household mode selected by the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    #[default]
    Home,
    Away,
    Sleep,
}

impl Mode {
    /// Every mode, in toggle order.
    pub const ALL: [Mode; 3] = [Mode::Home, Mode::Away, Mode::Sleep];

    /// Lower-case wire name.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Home => "home",
            Self::Away => "away",
            Self::Sleep => "sleep",
        }
    }

    /// Capitalized name for buttons.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Home => "Home",
            Self::Away => "Away",
            Self::Sleep => "Sleep",
        }
    }

    /// Greeting banner shown while this mode is active.
    #[must_use]
    pub fn alert_message(self) -> &'static str {
        match self {
            Self::Home => HOME_ALERT,
            Self::Away => AWAY_ALERT,
            Self::Sleep => SLEEP_ALERT,
        }
    }

    /// Accent color (CSS hex) for the avatar.
    #[must_use]
    pub fn accent_color(self) -> &'static str {
        match self {
            Self::Home => "#d8f3dc",
            Self::Away => "#ffe5ec",
            Self::Sleep => "#e7e9fb",
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Mode {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "home" => Ok(Self::Home),
            "away" => Ok(Self::Away),
            "sleep" => Ok(Self::Sleep),
            other => Err(ValidationError::UnknownMode(other.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_default_to_home() {
        assert_eq!(Mode::default(), Mode::Home);
    }

    #[test]
    fn should_map_modes_to_exact_alerts() {
        assert_eq!(
            Mode::Away.alert_message(),
            "House is guarded. I will notify on any motion."
        );
        assert_eq!(
            Mode::Sleep.alert_message(),
            "Quiet mode on. I will keep an eye on alerts."
        );
        assert_eq!(Mode::Home.alert_message(), "All clear, house is comfy 💜");
    }

    #[test]
    fn should_map_modes_to_accent_colors() {
        assert_eq!(Mode::Home.accent_color(), "#d8f3dc");
        assert_eq!(Mode::Away.accent_color(), "#ffe5ec");
        assert_eq!(Mode::Sleep.accent_color(), "#e7e9fb");
    }

    #[test]
    fn should_reject_unknown_mode_when_parsing_strictly() {
        assert_eq!(
            "Away".parse::<Mode>(),
            Err(ValidationError::UnknownMode("Away".to_string()))
        );
    }

    #[test]
    fn should_roundtrip_through_display_and_from_str() {
        for mode in Mode::ALL {
            assert_eq!(mode.to_string().parse::<Mode>().unwrap(), mode);
        }
    }

    #[test]
    fn should_serialize_lowercase() {
        assert_eq!(serde_json::to_string(&Mode::Sleep).unwrap(), "\"sleep\"");
    }
}
