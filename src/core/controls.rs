use fnv::FnvHashMap;

use super::constants::*;

/// Continuous controls (status `STATUS_CONTROL`).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ControlAction {
    ParticleCount,
    SpreadDistance,
    Hue,
    Saturation,
    Lightness,
    CameraX,
    CameraY,
    CameraZ,
    RotateX,
    RotateY,
    RotateZ,
}

/// Toggle buttons (status `STATUS_BUTTON`).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ButtonAction {
    AutoRotate,
    RandomColors,
}

impl ControlAction {
    /// Linear rescale of a 7-bit control value into the scene's units.
    #[inline]
    pub fn rescale(self, value: u8) -> f32 {
        let v = value as f32;
        match self {
            ControlAction::ParticleCount => v * 100.0 / PARTICLE_COUNT_DIVISOR,
            ControlAction::SpreadDistance => v * SPREAD_PER_STEP,
            ControlAction::Hue | ControlAction::Saturation | ControlAction::Lightness => {
                v * 100.0 / HSL_DIVISOR
            }
            ControlAction::CameraX => v * CAMERA_X_RANGE * CAMERA_KNOB_GAIN,
            ControlAction::CameraY | ControlAction::CameraZ => {
                v * CAMERA_YZ_RANGE * CAMERA_KNOB_GAIN
            }
            ControlAction::RotateX | ControlAction::RotateY | ControlAction::RotateZ => {
                v * ROTATE_RANGE
            }
        }
    }
}

#[derive(Clone, Debug)]
pub struct ControlMap {
    values: FnvHashMap<u8, ControlAction>,
    buttons: FnvHashMap<u8, ButtonAction>,
}

impl Default for ControlMap {
    fn default() -> Self {
        let mut map = Self::empty();
        map.bind_value(CODE_PARTICLE_COUNT, ControlAction::ParticleCount);
        map.bind_value(CODE_SPREAD_DISTANCE, ControlAction::SpreadDistance);
        map.bind_value(CODE_HUE, ControlAction::Hue);
        map.bind_value(CODE_CAMERA_X, ControlAction::CameraX);
        map.bind_value(CODE_SATURATION, ControlAction::Saturation);
        map.bind_value(CODE_ROTATE_X, ControlAction::RotateX);
        map.bind_value(CODE_LIGHTNESS, ControlAction::Lightness);
        map.bind_value(CODE_ROTATE_Z, ControlAction::RotateZ);
        map.bind_value(CODE_ROTATE_Y, ControlAction::RotateY);
        map.bind_value(CODE_CAMERA_Y, ControlAction::CameraY);
        map.bind_value(CODE_CAMERA_Z, ControlAction::CameraZ);
        map.bind_button(CODE_AUTO_ROTATE, ButtonAction::AutoRotate);
        map.bind_button(CODE_RANDOM_COLORS, ButtonAction::RandomColors);
        map
    }
}

impl ControlMap {
    pub fn empty() -> Self {
        Self {
            values: FnvHashMap::default(),
            buttons: FnvHashMap::default(),
        }
    }

    /// Bind (or rebind) a control code; returns the action it replaced.
    pub fn bind_value(&mut self, code: u8, action: ControlAction) -> Option<ControlAction> {
        self.values.insert(code, action)
    }

    pub fn bind_button(&mut self, code: u8, action: ButtonAction) -> Option<ButtonAction> {
        self.buttons.insert(code, action)
    }

    #[inline]
    pub fn value_action(&self, code: u8) -> Option<ControlAction> {
        self.values.get(&code).copied()
    }

    #[inline]
    pub fn button_action(&self, code: u8) -> Option<ButtonAction> {
        self.buttons.get(&code).copied()
    }
}
