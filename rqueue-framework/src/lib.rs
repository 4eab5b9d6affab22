//! Per-frame render queues: collect sub-model/material-pass pairs, filter them by transparency
//! and render phase, sort them and record them into a command buffer

mod resources;
pub use resources::*;

pub mod render_objects;
pub use render_objects::RenderObject;
pub use render_objects::RenderObjectId;
pub use render_objects::RenderObjectSet;
pub use render_objects::SubModel;

pub mod render_queue;

pub use rqueue_api::RqueueResult;

#[cfg(test)]
mod test_helpers;
