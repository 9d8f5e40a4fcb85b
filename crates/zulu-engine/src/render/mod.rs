//! GPU rendering subsystem.
//!
//! Renderers consume `scene` draw streams and issue GPU commands via wgpu.
//! Each renderer is responsible for its own GPU resources (pipelines, buffers).
//!
//! Convention:
//! - CPU geometry is in logical pixels (top-left origin, +Y down).
//! - Vertex shaders convert to NDC using a viewport uniform.
//! - A frame is rendered in two steps: every renderer `prepare`s (uploads all
//!   of its instances once), then each z-layer is drawn by every renderer in
//!   turn, so paint order holds across shape kinds.

mod ctx;
mod scene_renderer;
pub mod shapes;

pub use ctx::{RenderCtx, RenderTarget};
pub use scene_renderer::SceneRenderer;
