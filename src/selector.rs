//! The flat-colored highlight quad, in both of its roles.

use crate::config;
use crate::entity::Animatable;
use crate::math::lerp_vec4;
use crate::menu::MenuEntry;
use crate::render::{DrawList, QuadFill};
use cgmath::{Matrix4, Vector3, Vector4};

/// An animatable quad drawn through the untextured shader path. One instance
/// chases the focused entry as the highlight; a second, screen-sized instance
/// serves as the backdrop tint, fading its alpha destination between hidden
/// and shown.
#[derive(Clone, Debug)]
pub struct Selector {
    pub body: Animatable,
    pub color: Vector4<f32>,
    pub color_dest: Vector4<f32>,
}

impl Selector {
    pub fn new(position: Vector3<f32>, scale: Vector3<f32>, color: [f32; 4]) -> Self {
        let color = Vector4::from(color);
        Self {
            body: Animatable::with_scale(position, scale),
            color,
            color_dest: color,
        }
    }

    /// The focus highlight, parked on `entry`.
    pub fn highlight(entry: &MenuEntry) -> Self {
        Self::new(
            entry.body.position,
            entry.body.scale,
            config::SELECTOR_COLOR,
        )
    }

    /// The full-screen tint plane behind the tiles.
    pub fn backdrop_tint() -> Self {
        let [r, g, b] = config::TINT_COLOR;
        Self::new(
            Vector3::from(config::TINT_POSITION),
            Vector3::from(config::TINT_SCALE),
            [r, g, b, config::TINT_SHOWN_ALPHA],
        )
    }

    /// Position, scale and color each glide toward their own destination at
    /// their own rate.
    pub fn animate(&mut self, _elapsed_ms: f32) {
        self.body.step(config::SELECTOR_POSITION_RATE, config::SELECTOR_SCALE_RATE);
        lerp_vec4(&mut self.color, &self.color_dest, config::SELECTOR_COLOR_RATE);
    }

    /// A small z bias keeps the quad in front of the tile it covers.
    pub fn draw(&self, list: &mut DrawList) {
        let transform = Matrix4::from_translation(Vector3::new(0.0, 0.0, config::SELECTOR_Z_BIAS))
            * self.body.transform();
        list.push(transform, QuadFill::Solid(self.color.into()));
    }
}
