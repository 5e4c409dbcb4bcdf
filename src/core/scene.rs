use glam::{EulerRot, Mat4, Quat, Vec3};
use rand::prelude::*;
use smallvec::SmallVec;

use super::color::{hsl_to_rgb, sweep_hue};
use super::constants::*;
use super::sampling::random_point_in_sphere;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Axis {
    X,
    Y,
    Z,
}

impl Axis {
    #[inline]
    pub fn index(self) -> usize {
        match self {
            Axis::X => 0,
            Axis::Y => 1,
            Axis::Z => 2,
        }
    }
}

#[derive(Clone, Debug)]
pub struct Particle {
    pub position: Vec3,
    /// Euler angles, XYZ order, radians.
    pub orientation: Vec3,
    pub group: usize,
    pub color: [f32; 3],
}

#[derive(Clone, Debug)]
pub struct MaterialGroup {
    pub hsl: [f32; 3],
    pub rgb: [f32; 3],
    pub size: f32,
    pub sprite_layer: u32,
}

impl MaterialGroup {
    fn set_hsl(&mut self, hsl: [f32; 3]) {
        self.hsl = hsl;
        self.rgb = hsl_to_rgb(hsl[0], hsl[1], hsl[2]);
    }
}

#[derive(Clone, Debug)]
pub struct Camera {
    pub position: Vec3,
    pub target: Vec3,
    pub fov_y: f32,
    pub aspect: f32,
    pub near: f32,
    pub far: f32,
}

impl Camera {
    pub fn view(&self) -> Mat4 {
        let mut eye = self.position;
        if (eye - self.target).length_squared() < 1e-12 {
            eye = self.target + Vec3::Z * self.near;
        }
        Mat4::look_at_rh(eye, self.target, Vec3::Y)
    }

    pub fn projection(&self) -> Mat4 {
        Mat4::perspective_rh(self.fov_y, self.aspect.max(1e-3), self.near, self.far)
    }

    pub fn view_proj(&self) -> Mat4 {
        self.projection() * self.view()
    }
}

/// GPU-ready description of one particle sprite.
#[repr(C)]
#[derive(Copy, Clone, Debug, Default, bytemuck::Pod, bytemuck::Zeroable)]
pub struct SpriteInstance {
    pub position: [f32; 3],
    pub size: f32,
    pub color: [f32; 4],
    pub layer: u32,
    pub _pad: [u32; 3],
}

pub struct FrameView<'a> {
    pub camera: &'a Camera,
    pub sprites: &'a [SpriteInstance],
}

#[derive(Clone, Debug)]
pub struct SceneConfig {
    pub spread_distance: f32,
    pub camera_z: f32,
    pub aspect: f32,
    pub seed: u64,
}

impl Default for SceneConfig {
    fn default() -> Self {
        Self {
            spread_distance: DEFAULT_SPREAD_DISTANCE,
            camera_z: DEFAULT_CAMERA_Z,
            aspect: 16.0 / 9.0,
            seed: DEFAULT_SEED,
        }
    }
}

/// Owns the particle cloud, its materials and the camera, and applies the
/// controller-driven parameters to them.
pub struct SceneController {
    camera: Camera,
    particles: Vec<Particle>,
    groups: SmallVec<[MaterialGroup; 5]>,
    sprites: Vec<SpriteInstance>,
    rng: StdRng,
    rotation: f64,
    hsl: [f32; 3],
    spread_distance: f32,
    particle_count: usize,
    knobs: [f32; 3],
    auto_rotate: bool,
    random_colors: bool,
}

impl SceneController {
    pub fn new(config: SceneConfig) -> Self {
        let mut scene = Self {
            camera: Camera {
                position: Vec3::new(0.0, 0.0, config.camera_z),
                target: Vec3::ZERO,
                fov_y: CAMERA_FOV_Y_DEG.to_radians(),
                aspect: config.aspect,
                near: CAMERA_NEAR,
                far: CAMERA_FAR,
            },
            particles: Vec::new(),
            groups: SmallVec::new(),
            sprites: Vec::new(),
            rng: StdRng::seed_from_u64(config.seed),
            rotation: 0.0,
            hsl: DEFAULT_HSL,
            spread_distance: config.spread_distance,
            particle_count: 0,
            knobs: [0.0; 3],
            auto_rotate: false,
            random_colors: false,
        };
        scene.attach_materials();
        scene
    }

    pub fn particle_count(&self) -> usize {
        self.particle_count
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    pub fn groups(&self) -> &[MaterialGroup] {
        &self.groups
    }

    pub fn camera(&self) -> &Camera {
        &self.camera
    }

    pub fn rotation(&self) -> f64 {
        self.rotation
    }

    pub fn hsl(&self) -> [f32; 3] {
        self.hsl
    }

    pub fn spread_distance(&self) -> f32 {
        self.spread_distance
    }

    pub fn knob(&self, axis: Axis) -> f32 {
        self.knobs[axis.index()]
    }

    pub fn auto_rotate(&self) -> bool {
        self.auto_rotate
    }

    pub fn random_colors(&self) -> bool {
        self.random_colors
    }

    /// Grow by regenerating the whole cloud, shrink by dropping the oldest
    /// particles.
    pub fn set_particle_count(&mut self, target: usize) {
        let current = self.particles.len();
        if target > current {
            self.regenerate(target);
            self.attach_materials();
        } else if target < current {
            self.particles.drain(..current - target);
        }
        self.particle_count = self.particles.len();
    }

    pub fn set_spread_distance(&mut self, distance: f32) {
        for p in &mut self.particles {
            p.position = random_point_in_sphere(&mut self.rng, distance);
        }
        self.spread_distance = distance;
    }

    pub fn rotate(&mut self, axis: Axis, value: f32) {
        let step = value * ROTATION_SCALE;
        self.rotation = step as f64;
        let i = axis.index();
        for p in &mut self.particles {
            p.orientation[i] += step;
        }
    }

    pub fn set_hue(&mut self, value: f32) {
        self.hsl[0] = value;
    }

    pub fn set_saturation(&mut self, value: f32) {
        self.hsl[1] = value;
    }

    pub fn set_lightness(&mut self, value: f32) {
        self.hsl[2] = value;
    }

    /// Relative camera drag driven by an absolute knob reading.
    ///
    /// X/Y: rising knob adds `value - pos`, falling subtracts `value + pos`.
    /// Z runs the other way round.
    pub fn set_camera_axis(&mut self, axis: Axis, value: f32) {
        let i = axis.index();
        let pos = self.camera.position[i];
        let rising = value > self.knobs[i];
        self.camera.position[i] = match (axis, rising) {
            (Axis::Z, true) | (Axis::X | Axis::Y, false) => pos - (value + pos),
            _ => pos + (value - pos),
        };
        self.knobs[i] = value;
    }

    /// Switching auto-rotation off freezes the angle at the current time.
    pub fn set_auto_rotate(&mut self, enabled: bool, now_ms: f64) {
        self.auto_rotate = enabled;
        if !enabled {
            self.rotation = now_ms * TIME_ROTATION_SCALE;
        }
    }

    pub fn set_random_colors(&mut self, enabled: bool) {
        self.random_colors = enabled;
    }

    pub fn resize(&mut self, width: u32, height: u32) {
        self.camera.aspect = width as f32 / height.max(1) as f32;
    }

    /// Apply rotation and color state to every particle and return what the
    /// renderer needs for this frame.
    pub fn render_frame(&mut self, now_ms: f64) -> FrameView<'_> {
        if self.auto_rotate {
            self.rotation = now_ms * TIME_ROTATION_SCALE;
        }
        self.camera.target = Vec3::ZERO;

        for g in &mut self.groups {
            g.set_hsl(self.hsl);
        }

        let yaw = (self.rotation % std::f64::consts::TAU) as f32;
        let [_, s, l] = self.hsl;
        self.sprites.clear();
        self.sprites.reserve(self.particles.len());
        for (i, p) in self.particles.iter_mut().enumerate() {
            let group = &self.groups[p.group % self.groups.len()];
            p.color = if self.random_colors {
                let h = sweep_hue(SWEEP_HUES[i % 2], now_ms, TIME_ROTATION_SCALE);
                hsl_to_rgb(h, s, l)
            } else {
                group.rgb
            };
            p.orientation.y = yaw;

            let o = p.orientation;
            let world = Quat::from_euler(EulerRot::XYZ, o.x, o.y, o.z) * p.position;
            self.sprites.push(SpriteInstance {
                position: world.to_array(),
                size: group.size,
                color: [p.color[0], p.color[1], p.color[2], 1.0],
                layer: group.sprite_layer,
                _pad: [0; 3],
            });
        }

        FrameView {
            camera: &self.camera,
            sprites: &self.sprites,
        }
    }

    fn regenerate(&mut self, count: usize) {
        let radius = self.spread_distance;
        let groups = GROUP_COLORS.len();
        self.particles.clear();
        self.particles.reserve(count);
        for i in 0..count {
            let position = random_point_in_sphere(&mut self.rng, radius);
            let orientation = Vec3::new(
                self.rng.gen::<f32>() * INITIAL_ORIENTATION_MAX,
                self.rng.gen::<f32>() * INITIAL_ORIENTATION_MAX,
                self.rng.gen::<f32>() * INITIAL_ORIENTATION_MAX,
            );
            self.particles.push(Particle {
                position,
                orientation,
                group: i % groups,
                color: [1.0, 1.0, 1.0],
            });
        }
    }

    fn attach_materials(&mut self) {
        self.groups.clear();
        for preset in GROUP_COLORS {
            let mut group = MaterialGroup {
                hsl: preset,
                rgb: [1.0, 1.0, 1.0],
                size: GROUP_POINT_SIZE,
                sprite_layer: self.rng.gen_range(0..SPRITE_LAYERS),
            };
            group.set_hsl(preset);
            self.groups.push(group);
        }
    }
}
