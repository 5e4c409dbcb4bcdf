// HSL helpers for particle materials.
//
// Conversion mirrors the usual `setHSL` semantics: hue wraps into [0, 1),
// saturation and lightness are clamped. The stored channels themselves are
// never clamped, only the derived RGB.

#[inline]
fn hue_to_channel(p: f32, q: f32, t: f32) -> f32 {
    let mut t = t;
    if t < 0.0 {
        t += 1.0;
    }
    if t > 1.0 {
        t -= 1.0;
    }
    if t < 1.0 / 6.0 {
        return p + (q - p) * 6.0 * t;
    }
    if t < 0.5 {
        return q;
    }
    if t < 2.0 / 3.0 {
        return p + (q - p) * 6.0 * (2.0 / 3.0 - t);
    }
    p
}

/// Convert an `[h, s, l]` triple to linear `[r, g, b]` in [0, 1].
pub fn hsl_to_rgb(h: f32, s: f32, l: f32) -> [f32; 3] {
    if !h.is_finite() || !s.is_finite() || !l.is_finite() {
        return [0.0, 0.0, 0.0];
    }
    let h = h.rem_euclid(1.0);
    let s = s.clamp(0.0, 1.0);
    let l = l.clamp(0.0, 1.0);
    if s == 0.0 {
        return [l, l, l];
    }
    let p = if l <= 0.5 { l * (1.0 + s) } else { l + s - l * s };
    let q = 2.0 * l - p;
    [
        hue_to_channel(q, p, h + 1.0 / 3.0),
        hue_to_channel(q, p, h),
        hue_to_channel(q, p, h - 1.0 / 3.0),
    ]
}

/// Hue of the time-driven color sweep for a given base hue.
///
/// `((360 * (base + now_ms * scale)) % 360) / 360`, evaluated in f64 because
/// wall-clock milliseconds overflow f32 precision.
pub fn sweep_hue(base: f32, now_ms: f64, scale: f64) -> f32 {
    let degrees = (360.0 * (base as f64 + now_ms * scale)) % 360.0;
    (degrees / 360.0) as f32
}
