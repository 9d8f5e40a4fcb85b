//! World-letter clock face.
//!
//! Everything here is pure with respect to the platform: renderers record
//! commands into a [`zulu_engine::scene::DrawList`], time comes from a
//! [`WallClock`] and zone data from a [`ZoneDirectory`]. The studio binary
//! executes the recorded frames on the GPU.
//!
//! Geometry is computed in *math space* (origin at the clock center, +Y up,
//! one unit = one `scale` step) and mapped to drawing space by [`CanvasMapper`].

pub mod controller;
pub mod face;
pub mod hands;
pub mod letters;
pub mod mapper;
pub mod painter;
pub mod status;
pub mod wall_clock;
pub mod zones;

pub use controller::{ClockController, Frame};
pub use face::{FaceRenderer, FaceStyle};
pub use hands::{HandAngles, HandRenderer};
pub use letters::{letter_for_hour, LETTERS};
pub use mapper::CanvasMapper;
pub use painter::Painter;
pub use status::{StatusLine, StatusStrip};
pub use wall_clock::{FixedClock, SystemClock, WallClock};
pub use zones::{offset_label, zone_options, TzDatabase, ZoneDirectory, ZoneError, ZoneOption};
