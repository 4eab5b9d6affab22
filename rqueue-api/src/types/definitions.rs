use crate::{
    RqueueBlendFactor, RqueueBlendOp, RqueueColorFlags, RqueueDescriptorSetHandle,
    RqueueRenderPassHandle,
};
#[cfg(feature = "serde-support")]
use serde::{Deserialize, Serialize};

/// Configures blend state for a particular render target
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde-support", derive(Serialize, Deserialize))]
pub struct RqueueBlendStateRenderTarget {
    pub src_factor: RqueueBlendFactor,
    pub dst_factor: RqueueBlendFactor,
    pub src_factor_alpha: RqueueBlendFactor,
    pub dst_factor_alpha: RqueueBlendFactor,
    pub blend_op: RqueueBlendOp,
    pub blend_op_alpha: RqueueBlendOp,
    pub masks: RqueueColorFlags,
}

impl Default for RqueueBlendStateRenderTarget {
    fn default() -> Self {
        RqueueBlendStateRenderTarget {
            blend_op: RqueueBlendOp::Add,
            blend_op_alpha: RqueueBlendOp::Add,
            src_factor: RqueueBlendFactor::One,
            src_factor_alpha: RqueueBlendFactor::One,
            dst_factor: RqueueBlendFactor::Zero,
            dst_factor_alpha: RqueueBlendFactor::Zero,
            masks: RqueueColorFlags::ALL,
        }
    }
}

impl RqueueBlendStateRenderTarget {
    pub fn default_alpha_disabled() -> Self {
        Default::default()
    }

    pub fn default_alpha_enabled() -> Self {
        RqueueBlendStateRenderTarget {
            src_factor: RqueueBlendFactor::SrcAlpha,
            dst_factor: RqueueBlendFactor::OneMinusSrcAlpha,
            src_factor_alpha: RqueueBlendFactor::One,
            dst_factor_alpha: RqueueBlendFactor::Zero,
            blend_op: RqueueBlendOp::Add,
            blend_op_alpha: RqueueBlendOp::Add,
            masks: RqueueColorFlags::ALL,
        }
    }

    /// Anything other than "replace the destination with the source" counts as blending
    pub fn blend_enabled(&self) -> bool {
        self.src_factor != RqueueBlendFactor::One
            || self.src_factor_alpha != RqueueBlendFactor::One
            || self.dst_factor != RqueueBlendFactor::Zero
            || self.dst_factor_alpha != RqueueBlendFactor::Zero
    }
}

/// Affects the way the result of a pixel shader is blended with a value it will overwrite. Commonly
/// used to enable "alpha-blending".
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde-support", derive(Serialize, Deserialize))]
pub struct RqueueBlendState {
    /// Individual blend states for blend targets. The first entry decides whether geometry drawn
    /// with this state belongs in a transparent queue.
    pub render_target_blend_states: Vec<RqueueBlendStateRenderTarget>,

    /// If false, `render_target_blend_states[0]` will apply to all render targets
    pub independent_blend: bool,
}

impl RqueueBlendState {
    pub fn default_alpha_disabled() -> Self {
        RqueueBlendState {
            render_target_blend_states: vec![
                RqueueBlendStateRenderTarget::default_alpha_disabled(),
            ],
            independent_blend: false,
        }
    }

    pub fn default_alpha_enabled() -> Self {
        RqueueBlendState {
            render_target_blend_states: vec![
                RqueueBlendStateRenderTarget::default_alpha_enabled(),
            ],
            independent_blend: false,
        }
    }

    /// True if the first render target blends. A state with no targets never blends.
    ///
    /// Only the blend factors are inspected. A target with One/Zero factors counts as opaque even
    /// when its blend op is `Min` or `Max`.
    pub fn is_transparent(&self) -> bool {
        self.render_target_blend_states
            .first()
            .map(|target| target.blend_enabled())
            .unwrap_or(false)
    }
}

impl Default for RqueueBlendState {
    fn default() -> Self {
        Self::default_alpha_disabled()
    }
}

/// Vertex/index buffer bindings plus the draw range for a sub-model. `vertex_layout_hash` must
/// change whenever the vertex layout changes because pipelines are cached against it.
#[derive(Debug, Default, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde-support", derive(Serialize, Deserialize))]
pub struct RqueueInputAssembler {
    pub id: u64,
    pub vertex_layout_hash: u64,
    pub vertex_count: u32,
    pub first_vertex: u32,
    /// Zero for non-indexed geometry
    pub index_count: u32,
    pub first_index: u32,
    pub instance_count: u32,
}

impl RqueueInputAssembler {
    pub fn is_indexed(&self) -> bool {
        self.index_count > 0
    }
}

/// Everything a device needs to build a pipeline state object for one draw
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde-support", derive(Serialize, Deserialize))]
pub struct RqueuePipelineStateDef {
    pub material_pass_hash: u64,
    pub shader_id: u32,
    pub blend_state: RqueueBlendState,
    pub render_pass: RqueueRenderPassHandle,
    pub vertex_layout_hash: u64,
}

/// Descriptor set binding as issued by a render queue
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde-support", derive(Serialize, Deserialize))]
pub struct RqueueDescriptorSetBinding {
    pub set_index: crate::RqueueSetIndex,
    pub descriptor_set: RqueueDescriptorSetHandle,
}
