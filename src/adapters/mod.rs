//! Adapter implementations of the host ports.

pub mod live;
pub mod recording;
pub mod replaying;
