//! The animatable base state every visual element carries.

use crate::math::lerp_vec3;
use crate::render::{DrawList, QuadFill, TextureId};
use cgmath::{Matrix4, Vector3};

/// Position and scale, each as a current/destination pair.
///
/// The `*_dest` fields are targets written by the state machine and the
/// transition sequencer; `position` and `scale` are the rendered values and
/// are only ever moved by [`Animatable::step`], which pulls them toward their
/// destinations by the given per-frame rates.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Animatable {
    pub position: Vector3<f32>,
    pub position_dest: Vector3<f32>,
    pub scale: Vector3<f32>,
    pub scale_dest: Vector3<f32>,
}

impl Animatable {
    /// At rest at `position` with unit scale.
    pub fn at(position: Vector3<f32>) -> Self {
        Self {
            position,
            position_dest: position,
            scale: Vector3::new(1.0, 1.0, 1.0),
            scale_dest: Vector3::new(1.0, 1.0, 1.0),
        }
    }

    pub fn with_scale(position: Vector3<f32>, scale: Vector3<f32>) -> Self {
        Self {
            position,
            position_dest: position,
            scale,
            scale_dest: scale,
        }
    }

    /// One interpolation step toward the destinations.
    pub fn step(&mut self, position_rate: f32, scale_rate: f32) {
        lerp_vec3(&mut self.position, &self.position_dest, position_rate);
        lerp_vec3(&mut self.scale, &self.scale_dest, scale_rate);
    }

    /// Model transform for the unit tile: translate to `position`, then
    /// scale.
    pub fn transform(&self) -> Matrix4<f32> {
        Matrix4::from_translation(self.position)
            * Matrix4::from_nonuniform_scale(self.scale.x, self.scale.y, self.scale.z)
    }
}

/// A static textured surface: the backdrop behind the menu. It keeps the
/// animatable state so a host can retarget it, but nothing in the core moves
/// it.
#[derive(Clone, Debug)]
pub struct Plane {
    pub body: Animatable,
    pub texture: Option<TextureId>,
}

impl Plane {
    pub fn new(position: Vector3<f32>, scale: Vector3<f32>) -> Self {
        Self {
            body: Animatable::with_scale(position, scale),
            texture: None,
        }
    }

    /// Nothing to draw until a bitmap has been delivered and bound.
    pub fn draw(&self, list: &mut DrawList) {
        if let Some(texture) = self.texture {
            list.push(self.body.transform(), QuadFill::Textured(texture));
        }
    }
}
