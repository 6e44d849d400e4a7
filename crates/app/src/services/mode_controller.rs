//! Mode controller: the home / away / sleep toggle and its banner.

use eve_domain::mode::Mode;

/// Current household mode together with the banner derived from it.
///
/// The alert and accent are re-derived on every transition, so they can
/// never disagree with the mode.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModeController {
    mode: Mode,
    alert: &'static str,
    accent_color: &'static str,
}

impl Default for ModeController {
    fn default() -> Self {
        Self::new(Mode::default())
    }
}

impl ModeController {
    /// Start in `initial` with its banner already derived.
    #[must_use]
    pub fn new(initial: Mode) -> Self {
        Self {
            mode: initial,
            alert: initial.alert_message(),
            accent_color: initial.accent_color(),
        }
    }

    #[must_use]
    pub fn mode(&self) -> Mode {
        self.mode
    }

    #[must_use]
    pub fn alert(&self) -> &'static str {
        self.alert
    }

    #[must_use]
    pub fn accent_color(&self) -> &'static str {
        self.accent_color
    }

    /// Switch to `mode`. Returns `true` when the mode actually changed.
    pub fn select(&mut self, mode: Mode) -> bool {
        if mode == self.mode {
            return false;
        }
        *self = Self::new(mode);
        true
    }
}
