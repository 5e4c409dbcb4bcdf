// Render and page tuning constants for the browser front-end.
//
// Scene semantics (MIDI scaling, materials, camera) live in
// `core::constants`; this file only covers how the cloud is drawn.

// Background and fog (exponential-squared, toward the clear color)
pub const CLEAR_COLOR: [f64; 3] = [0.0, 0.0, 0.0];
pub const FOG_DENSITY: f32 = 0.0007;

// Sprite texture array
pub const SPRITE_SIZE: u32 = 64;
pub const SPRITE_URLS: [&str; 2] = ["assets/sprite0.png", "assets/sprite1.png"];

// Initial instance buffer capacity (grown on demand)
pub const INITIAL_SPRITE_CAPACITY: usize = 256;

// DOM
pub const CANVAS_ID: &str = "app-canvas";
pub const STATS_PANEL_ID: &str = "stats-panel";
