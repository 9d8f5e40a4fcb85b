//! Time subsystem.
//!
//! Provides a testable repeating schedule without coupling to the runtime.
//! Intended usage:
//! - one `Ticker` per runtime
//! - the runtime waits until `next_deadline()` and calls `poll()` with the
//!   current instant

mod ticker;

pub use ticker::{Tick, Ticker};
