//! The device-facing side of `rqueue`. Render queues never talk to a graphics API directly. They
//! record through `RqueueCommandBuffer` and build pipelines through `RqueueDeviceContext`, so any
//! backend (or the recording backend in this crate) can sit underneath them.

pub use command_buffer::*;
pub use device_context::*;
pub use error::*;
pub use types::*;

pub mod recording;

mod command_buffer;
mod device_context;
mod error;
mod types;
