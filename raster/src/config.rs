use serde::{Deserialize, Serialize};

/// Animation cadence, in scan ticks.
///
/// The defaults are the tick counts of a 100 MHz pixel clock. They are kept
/// as tick counts rather than durations: the cadence is part of the observable
/// output, so a slower software scan simply animates slower.
#[derive(Copy, Clone, Eq, PartialEq, Debug, Serialize, Deserialize)]
#[serde(default)]
pub struct TimingConfig {
    /// Ticks between two cloud scroll steps (0.25 s).
    pub cloud_step_ticks: u32,
    /// How long shake and flash stay active after game over (1 s).
    pub effect_duration_ticks: u32,
    /// Ticks each of the four shake offsets is held.
    pub shake_step_ticks: u32,
    /// Length of one flash on/off half period.
    pub flash_step_ticks: u32,
}

impl Default for TimingConfig {
    fn default() -> Self {
        Self {
            cloud_step_ticks: 25_000_000,
            effect_duration_ticks: 100_000_000,
            shake_step_ticks: 5_000_000,
            flash_step_ticks: 12_500_000,
        }
    }
}

impl TimingConfig {
    /// Same ratios, scaled down so a software scan of 1440×900 pixels per
    /// frame still shows visible motion.
    #[must_use]
    pub const fn per_frame() -> Self {
        Self {
            cloud_step_ticks: 1_296_000 / 8,
            effect_duration_ticks: 1_296_000 * 60,
            shake_step_ticks: 1_296_000 * 3,
            flash_step_ticks: 1_296_000 * 8,
        }
    }
}
