use bevy::math::{Quat, Vec3};
use nalgebra::{UnitQuaternion, Vector3};

/// First-order low-pass step: move `current` a fraction `gain` of the way to `target`.
#[inline]
pub fn smooth_toward(current: f64, target: f64, gain: f64) -> f64 {
    current + (target - current) * gain
}

/// Add `step` when the positive control is held, subtract it for the negative
/// control, otherwise relax by `decay`. The positive control wins when both
/// are held. The result is clamped to `±limit`.
#[inline]
pub fn drive_rate(rate: f64, positive: bool, negative: bool, step: f64, decay: f64, limit: f64) -> f64 {
    let driven = if positive {
        rate + step
    } else if negative {
        rate - step
    } else {
        rate * decay
    };
    driven.clamp(-limit, limit)
}

/// Simulation vectors are f64, bevy transforms are f32.
#[inline]
pub fn to_render_vec(v: &Vector3<f64>) -> Vec3 {
    Vec3::new(v.x as f32, v.y as f32, v.z as f32)
}

#[inline]
pub fn from_render_vec(v: Vec3) -> Vector3<f64> {
    Vector3::new(v.x as f64, v.y as f64, v.z as f64)
}

#[inline]
pub fn to_render_quat(q: &UnitQuaternion<f64>) -> Quat {
    let q = q.quaternion();
    Quat::from_xyzw(q.i as f32, q.j as f32, q.k as f32, q.w as f32)
}
