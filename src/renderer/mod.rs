//! WebGPU rendering module
//!
//! One colored-triangle pipeline; the scene is retessellated every frame
//! from the simulation state.

pub mod pipeline;
pub mod shapes;
pub mod vertex;

pub use pipeline::RenderState;
pub use shapes::scene_vertices;
pub use vertex::Vertex;
