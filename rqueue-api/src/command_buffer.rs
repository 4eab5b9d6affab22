use crate::{
    RqueueDescriptorSetHandle, RqueueInputAssembler, RqueuePipelineState, RqueueResult,
    RqueueSetIndex,
};

/// The subset of a command buffer that a render queue writes into.
///
/// Commands are recorded in the order they are called. Implementations must not reorder them:
/// render queues rely on the pipeline, descriptor sets and input assembler bound immediately
/// before a `cmd_draw` being the ones used by that draw.
pub trait RqueueCommandBuffer {
    fn cmd_bind_pipeline_state(
        &mut self,
        pipeline_state: RqueuePipelineState,
    ) -> RqueueResult<()>;

    fn cmd_bind_descriptor_set(
        &mut self,
        set_index: RqueueSetIndex,
        descriptor_set: RqueueDescriptorSetHandle,
    ) -> RqueueResult<()>;

    fn cmd_bind_input_assembler(
        &mut self,
        input_assembler: &RqueueInputAssembler,
    ) -> RqueueResult<()>;

    /// Draw the range described by the input assembler. Indexed if `index_count` is non-zero.
    fn cmd_draw(
        &mut self,
        input_assembler: &RqueueInputAssembler,
    ) -> RqueueResult<()>;
}
