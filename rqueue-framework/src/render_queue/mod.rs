//! Render queues and everything needed to configure them

mod registry;
pub use registry::RenderPhaseIndex;
pub use registry::RenderPhaseMaskInnerType;
pub use registry::RenderPhaseRegistry;
pub use registry::MAX_RENDER_PHASE_COUNT;

mod render_phase_mask;
pub use render_phase_mask::RenderPhaseMask;
pub use render_phase_mask::RenderPhaseMaskBuilder;

mod entry;
pub use entry::pack_sort_hash;
pub use entry::RenderQueueEntry;
pub use entry::RenderQueueSortHash;
pub use entry::SubModelRef;

mod sort;
pub use sort::opaque_compare;
pub use sort::transparent_compare;
pub use sort::RenderQueueSortFunction;

mod descriptor;
pub use descriptor::convert_render_queue_descriptor;
pub use descriptor::create_render_queue;
pub use descriptor::RenderPhaseName;
pub use descriptor::RenderQueueDescriptor;
pub use descriptor::RenderQueueDescriptorDef;
pub use descriptor::RenderQueueSortMode;

#[allow(clippy::module_inception)]
mod render_queue;
pub use render_queue::render_queue_clear;
pub use render_queue::render_queue_sort;
pub use render_queue::RenderQueue;
