// Fixtures shared by the unit tests in this crate

use crate::render_queue::RenderPhaseMask;
use crate::{MaterialPass, ShaderVariant, ShaderVariantId, SubModel};
use rqueue_api::{RqueueBlendState, RqueueDescriptorSetHandle, RqueueInputAssembler};
use std::sync::Arc;

pub fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

pub fn opaque_pass(
    priority: u8,
    phases: u32,
    descriptor_set: u64,
) -> Arc<MaterialPass> {
    Arc::new(MaterialPass::new(
        priority,
        RenderPhaseMask::from_bits(phases),
        RqueueBlendState::default_alpha_disabled(),
        RqueueDescriptorSetHandle(descriptor_set),
    ))
}

pub fn transparent_pass(
    priority: u8,
    phases: u32,
    descriptor_set: u64,
) -> Arc<MaterialPass> {
    Arc::new(MaterialPass::new(
        priority,
        RenderPhaseMask::from_bits(phases),
        RqueueBlendState::default_alpha_enabled(),
        RqueueDescriptorSetHandle(descriptor_set),
    ))
}

pub fn shader(id: ShaderVariantId) -> Arc<ShaderVariant> {
    Arc::new(ShaderVariant::new(id))
}

/// A sub-model with no passes yet. `id` is used for both the input assembler and the local
/// descriptor set.
pub fn sub_model(
    priority: u8,
    id: u64,
) -> SubModel {
    SubModel::new(
        priority,
        RqueueInputAssembler {
            id,
            vertex_count: 3,
            ..Default::default()
        },
        RqueueDescriptorSetHandle(id),
    )
}
