pub mod reveal;
pub mod scene;
pub mod skills;
pub mod video;

pub use scene::*;

// Shaders bundled as string constants
pub static BACKGROUND_WGSL: &str = include_str!("../../shaders/background.wgsl");
pub static MESH_WGSL: &str = include_str!("../../shaders/mesh.wgsl");
