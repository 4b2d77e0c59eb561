//! WebGPU rendering module
//!
//! Every sprite is drawn as flat-colored triangles built on the CPU each frame.

pub mod pipeline;
pub mod shapes;
pub mod vertex;

pub use pipeline::RenderState;
pub use shapes::build_scene;
pub use vertex::Vertex;
