use super::RenderQueueEntry;
use std::cmp::Ordering;

/// Orders the entries of a render queue. Chosen once when the queue is configured.
pub type RenderQueueSortFunction = fn(&RenderQueueEntry, &RenderQueueEntry) -> Ordering;

/// Sort hash, then front to back, then by shader so equal-depth draws share pipelines
pub fn opaque_compare(
    a: &RenderQueueEntry,
    b: &RenderQueueEntry,
) -> Ordering {
    a.hash
        .cmp(&b.hash)
        .then_with(|| a.depth.total_cmp(&b.depth))
        .then_with(|| a.shader_id.cmp(&b.shader_id))
}

/// Object priority, then sort hash, then back to front (needed for blending), then by shader
pub fn transparent_compare(
    a: &RenderQueueEntry,
    b: &RenderQueueEntry,
) -> Ordering {
    a.priority
        .cmp(&b.priority)
        .then_with(|| a.hash.cmp(&b.hash))
        .then_with(|| b.depth.total_cmp(&a.depth))
        .then_with(|| a.shader_id.cmp(&b.shader_id))
}
