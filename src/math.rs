//! Exponential-smoothing interpolation and the menu's projection.

use crate::config;
use cgmath::{Matrix4, Vector3, Vector4};

/// Move each component of `current` a fraction `rate` of its remaining
/// distance toward `dest`.
///
/// `rate` is a per-frame fraction in (0, 1]; with `rate < 1.0` the value
/// approaches the destination asymptotically and never lands on it exactly,
/// so consumers must treat equality as approximate. A length mismatch between
/// the two slices leaves `current` untouched rather than panicking.
pub fn lerp(current: &mut [f32], dest: &[f32], rate: f32) {
    if current.len() != dest.len() {
        return;
    }
    for (c, d) in current.iter_mut().zip(dest) {
        *c += rate * (*d - *c);
    }
}

#[inline(always)]
pub fn lerp_vec3(current: &mut Vector3<f32>, dest: &Vector3<f32>, rate: f32) {
    let current: &mut [f32; 3] = current.as_mut();
    let dest: &[f32; 3] = dest.as_ref();
    lerp(current, dest, rate);
}

#[inline(always)]
pub fn lerp_vec4(current: &mut Vector4<f32>, dest: &Vector4<f32>, rate: f32) {
    let current: &mut [f32; 4] = current.as_mut();
    let dest: &[f32; 4] = dest.as_ref();
    lerp(current, dest, rate);
}

/// Orthographic projection covering the menu's view volume. Menus read best
/// without perspective.
#[inline(always)]
pub fn menu_projection() -> Matrix4<f32> {
    cgmath::ortho(
        -config::VIEW_HALF_WIDTH,
        config::VIEW_HALF_WIDTH,
        -config::VIEW_HALF_HEIGHT,
        config::VIEW_HALF_HEIGHT,
        config::VIEW_NEAR,
        config::VIEW_FAR,
    )
}
