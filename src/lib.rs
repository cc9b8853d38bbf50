//! glidemenu: an animated, selectable tile-menu engine for GPU canvases.
//!
//! A row of textured tiles, expandable sub-menus, and a flat-colored
//! selector that glides between whatever is focused. Every visual element
//! carries current/destination pairs for position, scale and color; input
//! and the show/hide choreography only ever write destinations, and a
//! per-frame exponential-smoothing step pulls the rendered values after
//! them. The GPU itself stays outside the crate: implement [`Renderer`]
//! (upload a bitmap, draw a list of quads) and hand it to [`MenuApp`], or
//! drive [`MenuController::frame`] from your own loop.
//!
//! ```no_run
//! use glidemenu::{DrawList, MenuApp, MenuManifest, Renderer, TextureId};
//! use std::error::Error;
//!
//! struct NullRenderer(u64);
//!
//! impl Renderer for NullRenderer {
//!     fn create_texture(&mut self, _: &image::RgbaImage) -> Result<TextureId, Box<dyn Error>> {
//!         self.0 += 1;
//!         Ok(TextureId(self.0))
//!     }
//!     fn draw(&mut self, _: &DrawList, _: cgmath::Matrix4<f32>) -> Result<(), Box<dyn Error>> {
//!         Ok(())
//!     }
//!     fn resize(&mut self, _: u32, _: u32) {}
//! }
//!
//! let manifest = MenuManifest::demo();
//! MenuApp::new(&manifest, |_window| Ok(NullRenderer(0))).run().unwrap();
//! ```

pub mod app;
pub mod config;
pub mod controller;
pub mod entity;
pub mod input;
pub mod loader;
pub mod manifest;
pub mod math;
pub mod menu;
pub mod render;
pub mod selector;
pub mod sequencer;

pub use app::MenuApp;
pub use controller::MenuController;
pub use entity::{Animatable, Plane};
pub use input::{InputState, MenuAction};
pub use loader::{TileArt, TileLoader, TileSlot, compose_tile};
pub use manifest::{ChildDef, EntryDef, MenuManifest};
pub use menu::{ChildKind, MenuEntry};
pub use render::{DrawList, Quad, QuadFill, Renderer, TextureId};
pub use selector::Selector;
pub use sequencer::{Group, Mutation, TransitionSequencer};
