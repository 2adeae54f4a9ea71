//! CPU-side pieces of the GLCollection demos. Nothing in here touches OpenGL, so all of it can be
//! tested without a context.

pub mod mat4;
pub mod mesh;
pub mod obj;

pub use mat4::{radians, Mat4};
pub use mesh::{MeshVertex, PositionNormal, PositionTexCoord};
