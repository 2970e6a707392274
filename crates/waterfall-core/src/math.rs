//! Scalar helpers shared by the per-frame controllers.

use crate::constants::DAMP_TARGET_FPS;
use std::f32::consts::PI;

#[inline]
pub fn lerp(a: f32, b: f32, n: f32) -> f32 {
    (1.0 - n) * a + n * b
}

/// Frame-rate independent smoothing toward `target`.
///
/// `rate` is the fraction of the remaining distance covered per frame at
/// 60 fps; `dt` rescales it so that a 30 fps frame covers the same ground as
/// two 60 fps frames.
#[inline]
pub fn damp(source: f32, target: f32, rate: f32, dt: f32) -> f32 {
    let relative_delta = dt * DAMP_TARGET_FPS;
    let smoothing = 1.0 - rate;
    lerp(source, target, 1.0 - smoothing.powf(relative_delta))
}

#[inline]
pub fn clamp(num: f32, min: f32, max: f32) -> f32 {
    if num <= min {
        min
    } else if num >= max {
        max
    } else {
        num
    }
}

/// Linear remap of `x` from `[a, b]` to `[c, d]`. Unclamped; `a > b` is allowed.
#[inline]
pub fn map_range(x: f32, a: f32, b: f32, c: f32, d: f32) -> f32 {
    ((x - a) * (d - c)) / (b - a) + c
}

#[inline]
pub fn round_to(number: f32, decimals: i32) -> f32 {
    let factor = 10f32.powi(decimals);
    (number * factor).round() / factor
}

/// Floored modulo: the result has the sign of `y`.
#[inline]
pub fn modulo(x: f32, y: f32) -> f32 {
    x - y * (x / y).floor()
}

/// Map `value` in `[0, dimension]` to `[-1, 1]`.
#[inline]
pub fn normalize(value: f32, dimension: f32) -> f32 {
    (value / dimension) * 2.0 - 1.0
}

/// The angle equivalent to `to` that lies closest to `from`.
#[inline]
pub fn closest_angle(from: f32, to: f32) -> f32 {
    from + modulo(to - from + PI, 2.0 * PI) - PI
}

fn rubberband(distance: f32, dimension: f32, constant: f32) -> f32 {
    if dimension == 0.0 || dimension.is_infinite() {
        return distance.powf(constant * 5.0);
    }
    (distance * dimension * constant) / (dimension + constant * distance)
}

/// Clamp with an elastic overshoot instead of a hard stop.
pub fn rubberband_if_out_of_bounds(position: f32, min: f32, max: f32, constant: f32) -> f32 {
    if constant == 0.0 {
        return clamp(position, min, max);
    }
    if position < min {
        return -rubberband(min - position, max - min, constant) + min;
    }
    if position > max {
        return rubberband(position - max, max - min, constant) + max;
    }
    position
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn damp_with_full_rate_snaps_to_target() {
        assert_eq!(damp(0.0, 4.0, 1.0, 1.0 / 60.0), 4.0);
    }

    #[test]
    fn damp_is_frame_rate_independent() {
        let one_step = damp(0.0, 1.0, 0.1, 2.0 / 60.0);
        let two_steps = damp(damp(0.0, 1.0, 0.1, 1.0 / 60.0), 1.0, 0.1, 1.0 / 60.0);
        assert!((one_step - two_steps).abs() < 1e-5);
    }

    #[test]
    fn normalize_maps_extent_to_unit_range() {
        assert_eq!(normalize(0.0, 800.0), -1.0);
        assert_eq!(normalize(400.0, 800.0), 0.0);
        assert_eq!(normalize(800.0, 800.0), 1.0);
    }

    #[test]
    fn closest_angle_wraps_across_pi() {
        let a = closest_angle(3.0, -3.0);
        assert!((a - (2.0 * PI - 3.0)).abs() < 1e-4, "got {a}");
    }

    #[test]
    fn rubberband_stays_inside_when_in_range() {
        assert_eq!(rubberband_if_out_of_bounds(0.5, 0.0, 1.0, 0.15), 0.5);
        let over = rubberband_if_out_of_bounds(2.0, 0.0, 1.0, 0.15);
        assert!(over > 1.0 && over < 2.0);
        assert_eq!(rubberband_if_out_of_bounds(2.0, 0.0, 1.0, 0.0), 1.0);
    }
}
