// Procedural RGBA sprites used until (or instead of) the image sprites load.

/// RGBA8 pixels of a `size` x `size` sprite for `layer`.
///
/// Layer 0 is a soft round glow; layer 1 is the same disc with two dark
/// eyes, a cheap ghost silhouette. Alpha is premultiplied into the color
/// channels since the sprites are drawn with additive blending.
pub fn procedural_sprite(layer: u32, size: u32) -> Vec<u8> {
    let size = size.max(1);
    let mut pixels = Vec::with_capacity((size * size * 4) as usize);
    let half = size as f32 * 0.5;
    for y in 0..size {
        for x in 0..size {
            let u = (x as f32 + 0.5 - half) / half;
            let v = (y as f32 + 0.5 - half) / half;
            let r = (u * u + v * v).sqrt();
            let mut a = (1.0 - r).clamp(0.0, 1.0);
            a *= a;
            if layer % 2 == 1 {
                let eye = |cx: f32| ((u - cx).powi(2) + (v + 0.2).powi(2)).sqrt() < 0.14;
                if eye(-0.28) || eye(0.28) {
                    a *= 0.15;
                }
            }
            let c = (a * 255.0).round() as u8;
            pixels.extend_from_slice(&[c, c, c, c]);
        }
    }
    pixels
}

/// Premultiply straight-alpha RGBA8 pixels in place.
pub fn premultiply_alpha(pixels: &mut [u8]) {
    for px in pixels.chunks_exact_mut(4) {
        let a = px[3] as u16;
        for c in &mut px[..3] {
            *c = ((*c as u16 * a + 127) / 255) as u8;
        }
    }
}
