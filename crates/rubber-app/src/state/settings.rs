use std::ops::RangeInclusive;

use rubber_core::{HitArea, Size};

// Settings live for the process lifetime only; nothing is persisted.
#[derive(Debug, Default, Clone, PartialEq)]
pub(crate) struct Settings {
    pub(crate) sound: SoundSettings,
    pub(crate) keypad: KeypadSettings,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct SoundSettings {
    pub(crate) enabled: bool,
}

impl Default for SoundSettings {
    fn default() -> Self {
        Self { enabled: true }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub(crate) struct KeypadSettings {
    pub(crate) min_target: Size,
}

impl KeypadSettings {
    /// Side lengths offered for the square minimum touch target.
    pub(crate) const MIN_TARGET_SIDE_RANGE: RangeInclusive<f32> = 20.0..=80.0;

    #[must_use]
    pub(crate) fn hit_area(&self) -> HitArea {
        HitArea::new(self.min_target)
    }

    #[must_use]
    pub(crate) fn min_target_side(&self) -> f32 {
        self.min_target.width.max(self.min_target.height)
    }

    pub(crate) fn set_min_target_side(&mut self, side: f32) {
        let side = side.clamp(
            *Self::MIN_TARGET_SIDE_RANGE.start(),
            *Self::MIN_TARGET_SIDE_RANGE.end(),
        );
        self.min_target = Size::splat(side);
    }
}

impl Default for KeypadSettings {
    fn default() -> Self {
        Self {
            min_target: HitArea::DEFAULT_MIN_SIZE,
        }
    }
}
