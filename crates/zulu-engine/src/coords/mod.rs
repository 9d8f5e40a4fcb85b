//! Coordinate and geometry types shared across engine renderers and the clock face.
//!
//! Canonical CPU space:
//! - Logical pixels (DPI-aware)
//! - Origin top-left
//! - +X right, +Y down
//!
//! `Vec2` is also used for origin-centered, y-up math space by callers that
//! author geometry there and map it into logical pixels before recording.
//!
//! Renderers convert to NDC in shaders using a viewport uniform.

mod vec2;
mod viewport;

pub use vec2::Vec2;
pub use viewport::Viewport;
