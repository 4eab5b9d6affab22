use crate::{RenderObjectId, ShaderVariantId};

/// Packed sort key of a `RenderQueueEntry`. From most to least significant:
///
/// | bits   | field              |
/// |--------|--------------------|
/// | 30..32 | reserved, always 0 |
/// | 16..30 | pass priority (u8) |
/// | 8..16  | sub-model priority |
/// | 0..8   | pass index         |
pub type RenderQueueSortHash = u32;

const SORT_HASH_RESERVED_SHIFT: u32 = 30;
const SORT_HASH_PASS_PRIORITY_SHIFT: u32 = 16;
const SORT_HASH_SUB_MODEL_PRIORITY_SHIFT: u32 = 8;
const SORT_HASH_PASS_INDEX_MASK: u32 = 0xFF;

// Nothing writes the reserved field yet
const SORT_HASH_RESERVED: u32 = 0;

pub fn pack_sort_hash(
    pass_priority: u8,
    sub_model_priority: u8,
    pass_index: usize,
) -> RenderQueueSortHash {
    debug_assert!(
        pass_index <= SORT_HASH_PASS_INDEX_MASK as usize,
        "pass index {} does not fit in the sort hash",
        pass_index
    );

    (SORT_HASH_RESERVED << SORT_HASH_RESERVED_SHIFT)
        | (pass_priority as u32) << SORT_HASH_PASS_PRIORITY_SHIFT
        | (sub_model_priority as u32) << SORT_HASH_SUB_MODEL_PRIORITY_SHIFT
        | (pass_index as u32 & SORT_HASH_PASS_INDEX_MASK)
}

/// Locates a sub-model by index rather than by reference, so entries stay plain data
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct SubModelRef {
    pub render_object: RenderObjectId,
    pub sub_model_index: u32,
}

/// One scheduled draw: a sub-model drawn with one of its passes
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct RenderQueueEntry {
    /// Copied from the render object
    pub priority: u32,
    pub hash: RenderQueueSortHash,
    /// Never NaN
    pub depth: f32,
    pub shader_id: ShaderVariantId,
    pub sub_model: SubModelRef,
    pub pass_index: u32,
}
