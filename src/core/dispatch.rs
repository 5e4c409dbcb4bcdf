use super::controls::{ButtonAction, ControlAction, ControlMap};
use super::midi::{MidiCategory, MidiError, MidiMessage};
use super::scene::{Axis, SceneController};

/// What a single MIDI message did to the scene.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Dispatch {
    Control { action: ControlAction, value: f32 },
    Toggle { action: ButtonAction, enabled: bool },
    UnmappedControl { code: u8, value: u8 },
    UnmappedButton { code: u8 },
    Ignored(MidiCategory),
}

/// Routes decoded MIDI to scene setters and owns the two toggle states.
pub struct InputDispatcher {
    controls: ControlMap,
    auto_rotate: bool,
    random_colors: bool,
}

impl Default for InputDispatcher {
    fn default() -> Self {
        Self::new(ControlMap::default())
    }
}

impl InputDispatcher {
    pub fn new(controls: ControlMap) -> Self {
        Self {
            controls,
            auto_rotate: false,
            random_colors: false,
        }
    }

    pub fn auto_rotate(&self) -> bool {
        self.auto_rotate
    }

    pub fn random_colors(&self) -> bool {
        self.random_colors
    }

    /// Decode `bytes` and apply it. Malformed input is returned as an error
    /// and leaves the scene untouched.
    pub fn handle_bytes(
        &mut self,
        bytes: &[u8],
        scene: &mut SceneController,
        now_ms: f64,
    ) -> Result<Dispatch, MidiError> {
        let msg = MidiMessage::parse(bytes)?;
        Ok(self.handle(msg, scene, now_ms))
    }

    pub fn handle(&mut self, msg: MidiMessage, scene: &mut SceneController, now_ms: f64) -> Dispatch {
        match msg.category {
            MidiCategory::Button => self.handle_button(msg.code, scene, now_ms),
            MidiCategory::Control => self.handle_control(msg.code, msg.value, scene),
            other => Dispatch::Ignored(other),
        }
    }

    fn handle_button(&mut self, code: u8, scene: &mut SceneController, now_ms: f64) -> Dispatch {
        let Some(action) = self.controls.button_action(code) else {
            log::info!("[midi] unmapped button {}", code);
            return Dispatch::UnmappedButton { code };
        };
        let enabled = match action {
            ButtonAction::AutoRotate => {
                self.auto_rotate = !self.auto_rotate;
                scene.set_auto_rotate(self.auto_rotate, now_ms);
                self.auto_rotate
            }
            ButtonAction::RandomColors => {
                self.random_colors = !self.random_colors;
                scene.set_random_colors(self.random_colors);
                self.random_colors
            }
        };
        log::info!("[midi] {:?} -> {}", action, enabled);
        Dispatch::Toggle { action, enabled }
    }

    fn handle_control(&mut self, code: u8, raw: u8, scene: &mut SceneController) -> Dispatch {
        let Some(action) = self.controls.value_action(code) else {
            log::info!("[midi] unmapped control {} value {}", code, raw);
            return Dispatch::UnmappedControl { code, value: raw };
        };
        let value = action.rescale(raw);
        match action {
            ControlAction::ParticleCount => {
                scene.set_particle_count(value.max(0.0).ceil() as usize)
            }
            ControlAction::SpreadDistance => scene.set_spread_distance(value),
            ControlAction::Hue => scene.set_hue(value),
            ControlAction::Saturation => scene.set_saturation(value),
            ControlAction::Lightness => scene.set_lightness(value),
            ControlAction::CameraX => scene.set_camera_axis(Axis::X, value),
            ControlAction::CameraY => scene.set_camera_axis(Axis::Y, value),
            ControlAction::CameraZ => scene.set_camera_axis(Axis::Z, value),
            ControlAction::RotateX => scene.rotate(Axis::X, value),
            ControlAction::RotateY => scene.rotate(Axis::Y, value),
            ControlAction::RotateZ => scene.rotate(Axis::Z, value),
        }
        log::debug!("[midi] {:?} raw={} value={:.4}", action, raw, value);
        Dispatch::Control { action, value }
    }
}
