//! Zulu engine crate.
//!
//! This crate owns the platform + GPU runtime pieces used by the clock face:
//! window and event loop, wgpu device, draw-list scene, shape renderers,
//! fonts, the repeating ticker and logger setup.

pub mod device;
pub mod window;
pub mod input;
pub mod time;
pub mod core;

pub mod logging;
pub mod coords;
pub mod render;
pub mod paint;
pub mod scene;
pub mod text;
