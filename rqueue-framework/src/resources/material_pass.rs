use crate::render_queue::RenderPhaseMask;
use fnv::FnvHasher;
use rqueue_api::{RqueueBlendState, RqueueDescriptorSetHandle};
use std::hash::{Hash, Hasher};

pub type ShaderVariantId = u32;

/// A compiled shader variant. Only the id matters to render queues: it is the last sort key, so
/// draws that share a variant end up next to each other.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ShaderVariant {
    id: ShaderVariantId,
}

impl ShaderVariant {
    pub fn new(id: ShaderVariantId) -> Self {
        ShaderVariant { id }
    }

    pub fn id(&self) -> ShaderVariantId {
        self.id
    }
}

/// One pass of a material: the fixed-function state and descriptor set used to draw a sub-model
/// in a particular render phase
#[derive(Debug, Clone)]
pub struct MaterialPass {
    priority: u8,
    phase: RenderPhaseMask,
    blend_state: RqueueBlendState,
    descriptor_set: RqueueDescriptorSetHandle,
    hash: u64,
}

impl MaterialPass {
    pub fn new(
        priority: u8,
        phase: RenderPhaseMask,
        blend_state: RqueueBlendState,
        descriptor_set: RqueueDescriptorSetHandle,
    ) -> Self {
        // Only state that affects the pipeline goes into the hash. Priority and phase only steer
        // queueing, and the descriptor set is rebound per draw.
        let mut hasher = FnvHasher::default();
        blend_state.hash(&mut hasher);
        let hash = hasher.finish();

        MaterialPass {
            priority,
            phase,
            blend_state,
            descriptor_set,
            hash,
        }
    }

    pub fn priority(&self) -> u8 {
        self.priority
    }

    pub fn phase(&self) -> RenderPhaseMask {
        self.phase
    }

    pub fn blend_state(&self) -> &RqueueBlendState {
        &self.blend_state
    }

    pub fn descriptor_set(&self) -> RqueueDescriptorSetHandle {
        self.descriptor_set
    }

    /// Identity of the pass for pipeline caching
    pub fn hash(&self) -> u64 {
        self.hash
    }

    pub fn is_transparent(&self) -> bool {
        self.blend_state.is_transparent()
    }
}
