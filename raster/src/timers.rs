//! Animation counters owned by the compositor.
//!
//! Everything here advances exactly once per scan tick through
//! [`TimerBank::tick`], before any layer is evaluated for that tick.
//!
//! ```text
//!            game over asserted                       duration reached
//!                    │                                        │
//!  shake  (0,0) ─────┼─▶ P0 ─▶ P1 ─▶ P2 ─▶ P3 ─▶ P0 ─▶ ...  ──┼─▶ (0,0) (frozen)
//!  flash  off   ─────┼─▶ on ──▶ off ──▶ on ──▶ off ...        ──┼─▶ off   (frozen)
//!                    │                                        │
//!  game over cleared at any point ─▶ both back to the inactive state
//! ```

use serde::{Deserialize, Serialize};

use crate::config::TimingConfig;
use crate::point::Point;
use crate::snapshot::GameSnapshot;
use crate::SCREEN_WIDTH;

/// Screen-shake offsets, walked in this order while the effect is running.
pub const SHAKE_OFFSETS: [Point<i32>; 4] = [
    Point::new(5, -3),
    Point::new(-4, 5),
    Point::new(3, -5),
    Point::new(-5, 2),
];

/// Amount the clouds move on every scroll step.
const CLOUD_STEP: u32 = 2;

/// Horizontal scroll of the cloud layer.
#[derive(Default, Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CloudScroll {
    ticks: u32,
    offset: u32,
}

impl CloudScroll {
    fn tick(&mut self, step_ticks: u32) {
        self.ticks += 1;
        if self.ticks < step_ticks {
            return;
        }

        self.ticks = 0;
        self.offset += CLOUD_STEP;
        if self.offset > SCREEN_WIDTH - 1 {
            self.offset = 0;
        }
    }

    /// Always in `0..SCREEN_WIDTH`.
    #[must_use]
    pub const fn offset(&self) -> u32 {
        self.offset
    }
}

/// Post-death screen shake.
#[derive(Default, Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShakeTimer {
    engaged: bool,
    elapsed: u32,
    phase: u8,
}

impl ShakeTimer {
    fn tick(&mut self, over: bool, timing: &TimingConfig) {
        if !over {
            *self = Self::default();
            return;
        }

        if !self.engaged {
            self.engaged = true;
            return;
        }

        if self.elapsed >= timing.effect_duration_ticks {
            return;
        }

        self.elapsed += 1;
        if self.elapsed % timing.shake_step_ticks.max(1) == 0 {
            self.phase = (self.phase + 1) % 4;
        }
    }

    #[must_use]
    pub const fn phase(&self) -> u8 {
        self.phase
    }

    const fn running(&self, timing: &TimingConfig) -> bool {
        self.engaged && self.elapsed < timing.effect_duration_ticks
    }

    /// Signed pixel offset added to the background sampling position.
    #[must_use]
    pub const fn offset(&self, timing: &TimingConfig) -> Point<i32> {
        if self.running(timing) {
            SHAKE_OFFSETS[self.phase as usize]
        } else {
            Point::new(0, 0)
        }
    }
}

/// Post-death ground flash.
#[derive(Default, Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct FlashTimer {
    engaged: bool,
    elapsed: u32,
    dark: bool,
}

impl FlashTimer {
    fn tick(&mut self, over: bool, timing: &TimingConfig) {
        if !over {
            *self = Self::default();
            return;
        }

        if !self.engaged {
            self.engaged = true;
            return;
        }

        if self.elapsed >= timing.effect_duration_ticks {
            return;
        }

        self.elapsed += 1;
        if self.elapsed % timing.flash_step_ticks.max(1) == 0 {
            self.dark = !self.dark;
        }
    }

    /// True while the ground should be painted red.
    #[must_use]
    pub const fn is_on(&self, timing: &TimingConfig) -> bool {
        self.engaged && self.elapsed < timing.effect_duration_ticks && !self.dark
    }
}

#[derive(Default, Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimerBank {
    pub cloud: CloudScroll,
    pub shake: ShakeTimer,
    pub flash: FlashTimer,
}

impl TimerBank {
    pub fn tick(&mut self, snapshot: &GameSnapshot, timing: &TimingConfig) {
        let was_running = self.shake.running(timing);

        self.cloud.tick(timing.cloud_step_ticks);
        self.shake.tick(snapshot.mode.over, timing);
        self.flash.tick(snapshot.mode.over, timing);

        let running = self.shake.running(timing);
        if running != was_running {
            tracing::debug!(running, "post-death effects toggled");
        }
    }

    #[must_use]
    pub const fn cloud_offset(&self) -> u32 {
        self.cloud.offset()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rand::Rng;

    fn fast_timing() -> TimingConfig {
        TimingConfig {
            cloud_step_ticks: 3,
            effect_duration_ticks: 40,
            shake_step_ticks: 4,
            flash_step_ticks: 5,
        }
    }

    fn over() -> GameSnapshot {
        let mut snapshot = GameSnapshot::default();
        snapshot.mode.over = true;
        snapshot
    }

    #[test]
    fn cloud_offset_steps_by_two() {
        let timing = fast_timing();
        let mut bank = TimerBank::default();
        let snapshot = GameSnapshot::default();

        for _ in 0..2 {
            bank.tick(&snapshot, &timing);
        }
        assert_eq!(bank.cloud_offset(), 0);

        bank.tick(&snapshot, &timing);
        assert_eq!(bank.cloud_offset(), 2);
    }

    #[test]
    fn cloud_offset_wraps_to_zero() {
        let timing = TimingConfig {
            cloud_step_ticks: 1,
            ..fast_timing()
        };
        let mut bank = TimerBank::default();
        let snapshot = GameSnapshot::default();

        for _ in 0..(SCREEN_WIDTH / CLOUD_STEP - 1) {
            bank.tick(&snapshot, &timing);
        }
        assert_eq!(bank.cloud_offset(), SCREEN_WIDTH - 2);

        bank.tick(&snapshot, &timing);
        assert_eq!(bank.cloud_offset(), 0);
    }

    #[test]
    fn cloud_offset_stays_in_range() {
        let mut rng = rand::thread_rng();
        let timing = TimingConfig {
            cloud_step_ticks: rng.gen_range(1..4),
            ..fast_timing()
        };
        let mut bank = TimerBank::default();
        let snapshot = GameSnapshot::default();

        for _ in 0..rng.gen_range(5_000..10_000) {
            bank.tick(&snapshot, &timing);
            assert!(bank.cloud_offset() < SCREEN_WIDTH);
        }
    }

    #[test]
    fn shake_is_zero_when_not_over() {
        let timing = fast_timing();
        let mut bank = TimerBank::default();

        for _ in 0..20 {
            bank.tick(&GameSnapshot::default(), &timing);
            assert_eq!(bank.shake.offset(&timing), Point::new(0, 0));
            assert!(!bank.flash.is_on(&timing));
        }
    }

    #[test]
    fn shake_cycles_presets_then_stops() {
        let timing = fast_timing();
        let mut bank = TimerBank::default();
        let snapshot = over();

        let mut seen = Vec::new();
        for _ in 0..timing.effect_duration_ticks {
            bank.tick(&snapshot, &timing);
            seen.push(bank.shake.offset(&timing));
        }

        let expected: Vec<_> = (0..timing.effect_duration_ticks)
            .map(|t| SHAKE_OFFSETS[((t / timing.shake_step_ticks) % 4) as usize])
            .collect();
        assert_eq!(seen, expected);

        for _ in 0..50 {
            bank.tick(&snapshot, &timing);
            assert_eq!(bank.shake.offset(&timing), Point::new(0, 0));
        }
        let frozen = bank.shake.phase();
        bank.tick(&snapshot, &timing);
        assert_eq!(bank.shake.phase(), frozen);
    }

    #[test]
    fn flash_alternates_during_effect() {
        let timing = fast_timing();
        let mut bank = TimerBank::default();
        let snapshot = over();

        for t in 0..timing.effect_duration_ticks {
            bank.tick(&snapshot, &timing);
            let expected = (t / timing.flash_step_ticks) % 2 == 0;
            assert_eq!(bank.flash.is_on(&timing), expected, "tick {t}");
        }

        bank.tick(&snapshot, &timing);
        assert!(!bank.flash.is_on(&timing));
    }

    #[test]
    fn clearing_game_over_resets_effects() {
        let timing = fast_timing();
        let mut bank = TimerBank::default();

        for _ in 0..7 {
            bank.tick(&over(), &timing);
        }
        assert_eq!(bank.shake.phase(), 1);

        bank.tick(&GameSnapshot::default(), &timing);
        assert_eq!(bank.shake, ShakeTimer::default());
        assert_eq!(bank.flash, FlashTimer::default());

        bank.tick(&over(), &timing);
        assert_eq!(bank.shake.offset(&timing), SHAKE_OFFSETS[0]);
        assert!(bank.flash.is_on(&timing));
    }
}
