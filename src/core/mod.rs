pub mod color;
pub mod constants;
pub mod controls;
pub mod dispatch;
pub mod midi;
pub mod sampling;
pub mod scene;
pub mod sprite;
pub mod stats;

pub use controls::*;
pub use dispatch::*;
pub use midi::*;
pub use scene::*;
pub use stats::*;

// Shaders bundled as string constants
pub static POINTS_WGSL: &str = include_str!("../../shaders/points.wgsl");
