// Scene and MIDI tuning constants shared by the dispatcher and the scene controller.

// MIDI status bytes (channel 1 note/cc banks are ignored, channel 5 carries the controls)
pub const STATUS_NOTE: u8 = 144;
pub const STATUS_BUTTON: u8 = 148;
pub const STATUS_NOTE_OFF: u8 = 176;
pub const STATUS_CONTROL: u8 = 180;

// Default control codes
pub const CODE_PARTICLE_COUNT: u8 = 13;
pub const CODE_SPREAD_DISTANCE: u8 = 14;
pub const CODE_HUE: u8 = 15;
pub const CODE_CAMERA_X: u8 = 16;
pub const CODE_SATURATION: u8 = 17;
pub const CODE_ROTATE_X: u8 = 18;
pub const CODE_LIGHTNESS: u8 = 19;
pub const CODE_ROTATE_Z: u8 = 20;
pub const CODE_ROTATE_Y: u8 = 29;
pub const CODE_CAMERA_Y: u8 = 30;
pub const CODE_CAMERA_Z: u8 = 31;
pub const CODE_AUTO_ROTATE: u8 = 41;
pub const CODE_RANDOM_COLORS: u8 = 42;

// Rescaling of the 7-bit control value
pub const PARTICLE_COUNT_DIVISOR: f32 = 70.0; // count = v * 100 / 70
pub const SPREAD_PER_STEP: f32 = 10.0; // distance = v * 10
pub const HSL_DIVISOR: f32 = 12700.0; // channel = v * 100 / 12700
pub const CAMERA_X_RANGE: f32 = 1000.0;
pub const CAMERA_YZ_RANGE: f32 = 500.0;
pub const CAMERA_KNOB_GAIN: f32 = 0.05;
pub const ROTATE_RANGE: f32 = 1000.0;

// Radians per unit of rotate() magnitude, and per millisecond of wall clock
pub const ROTATION_SCALE: f32 = 5e-5;
pub const TIME_ROTATION_SCALE: f64 = 5e-5;

// Scene defaults
pub const DEFAULT_SPREAD_DISTANCE: f32 = 300.0;
pub const DEFAULT_CAMERA_Z: f32 = 1000.0; // far plane / 3
pub const DEFAULT_SEED: u64 = 42;
pub const DEFAULT_HSL: [f32; 3] = [1.0, 1.0, 1.0];
pub const INITIAL_ORIENTATION_MAX: f32 = 6.0;

// Material groups: preset [h, s, l] and point size
pub const GROUP_COLORS: [[f32; 3]; 5] = [
    [1.0, 1.0, 0.5],
    [0.95, 1.0, 0.5],
    [0.9, 1.0, 0.5],
    [0.85, 1.0, 0.5],
    [0.8, 1.0, 0.5],
];
pub const GROUP_POINT_SIZE: f32 = 3.0;
pub const SPRITE_LAYERS: u32 = 2;

// Random color sweep base hues (even / odd particle)
pub const SWEEP_HUES: [f32; 2] = [0.8, 1.0];

// Rejection sampling cap for sphere points
pub const MAX_SPHERE_SAMPLES: usize = 64;

// Camera projection
pub const CAMERA_FOV_Y_DEG: f32 = 75.0;
pub const CAMERA_NEAR: f32 = 1.0;
pub const CAMERA_FAR: f32 = 3000.0;
