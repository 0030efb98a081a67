//! Bold fraction: the share of each word stem rendered in bold.

use std::fmt;

/// Proportion of a stem's length to emphasize, always within [0, 1].
///
/// The engine accepts any value in that range. The interactive settings only
/// move between [`BoldFraction::UI_MIN`] and [`BoldFraction::UI_MAX`] in
/// steps of [`BoldFraction::UI_STEP`].
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct BoldFraction(f64);

impl BoldFraction {
    pub const DEFAULT: BoldFraction = BoldFraction(0.4);
    pub const UI_MIN: BoldFraction = BoldFraction(0.1);
    pub const UI_MAX: BoldFraction = BoldFraction(0.7);
    pub const UI_STEP: BoldFraction = BoldFraction(0.05);

    /// Build a fraction, clamping into [0, 1]. `NaN` maps to 0.
    pub fn new(value: f64) -> Self {
        if value.is_nan() {
            return BoldFraction(0.0);
        }
        BoldFraction(value.clamp(0.0, 1.0))
    }

    pub fn get(self) -> f64 {
        self.0
    }

    /// Clamp into the range offered by the settings panel.
    pub fn clamp_to_ui(self) -> Self {
        BoldFraction(self.0.clamp(Self::UI_MIN.0, Self::UI_MAX.0))
    }

    /// Next value on the 0.05 grid, saturating at [`BoldFraction::UI_MAX`].
    pub fn step_up(self) -> Self {
        self.step(1)
    }

    /// Previous value on the 0.05 grid, saturating at [`BoldFraction::UI_MIN`].
    pub fn step_down(self) -> Self {
        self.step(-1)
    }

    fn step(self, direction: i64) -> Self {
        // Work in hundredths so repeated stepping never drifts.
        let per_step = i64::from(Self::UI_STEP.percent());
        let hundredths = (self.clamp_to_ui().0 * 100.0).round() as i64;
        // Off-grid values (e.g. 0.42) move to the nearest grid point in the step direction.
        let next = if direction > 0 {
            (hundredths.div_euclid(per_step) + 1) * per_step
        } else {
            ((hundredths + per_step - 1).div_euclid(per_step) - 1) * per_step
        };
        BoldFraction(next as f64 / 100.0).clamp_to_ui()
    }

    /// Whole-number percentage for display (0.4 -> 40).
    pub fn percent(self) -> u8 {
        (self.0 * 100.0).round() as u8
    }
}

impl Default for BoldFraction {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl fmt::Display for BoldFraction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.2}", self.0)
    }
}

/// Number of leading stem characters to embolden.
///
/// Returns 0 only for an empty stem; otherwise the result is
/// `ceil(stem_len * fraction)` clamped into `1..=stem_len`.
pub fn bold_length(stem_len: usize, fraction: BoldFraction) -> usize {
    if stem_len == 0 {
        return 0;
    }
    let raw = (stem_len as f64 * fraction.get()).ceil();
    // `as` saturates, so the cast is safe before clamping.
    (raw as usize).clamp(1, stem_len)
}
