use glam::Vec3;
use rand::Rng;

use super::constants::MAX_SPHERE_SAMPLES;

// Keeps scaled points strictly inside the ball despite f32 rounding
const SURFACE_MARGIN: f32 = 8.0 * f32::EPSILON;

/// Uniform point inside the ball of `radius` around the origin.
///
/// Rejection sampling over the unit cube, capped at `MAX_SPHERE_SAMPLES`
/// draws, then scaled by `radius`. A non-positive or non-finite radius yields
/// the origin; if the cap is exhausted the last candidate is pulled onto the
/// unit sphere before scaling, so the result still satisfies `|p| <= radius`.
pub fn random_point_in_sphere<R: Rng + ?Sized>(rng: &mut R, radius: f32) -> Vec3 {
    if !(radius.is_finite() && radius > 0.0) {
        return Vec3::ZERO;
    }
    let scale = radius * (1.0 - SURFACE_MARGIN);
    let mut unit = Vec3::ZERO;
    for _ in 0..MAX_SPHERE_SAMPLES {
        unit = Vec3::new(
            rng.gen_range(-1.0..=1.0),
            rng.gen_range(-1.0..=1.0),
            rng.gen_range(-1.0..=1.0),
        );
        if unit.length_squared() <= 1.0 {
            return unit * scale;
        }
    }
    unit.normalize_or_zero() * scale
}
