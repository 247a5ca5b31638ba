//! wgpu rendering module
//!
//! The game state is read into a `Scene`, tessellated into NDC triangles and
//! drawn by a single flat-color pipeline.

pub mod pipeline;
pub mod scene;
pub mod shapes;
pub mod text;
pub mod vertex;

pub use pipeline::{RenderError, RenderState};
pub use scene::{DrawCommand, Scene, build_scene};
pub use vertex::Vertex;
