use crate::{RqueueDeviceId, RqueuePipelineState, RqueuePipelineStateDef, RqueueResult};

/// A device that can build pipeline state objects. Pipeline caches key their entries on
/// `device_id()`, so two contexts for the same device must report the same id.
pub trait RqueueDeviceContext {
    fn device_id(&self) -> RqueueDeviceId;

    fn create_pipeline_state(
        &self,
        pipeline_state_def: &RqueuePipelineStateDef,
    ) -> RqueueResult<RqueuePipelineState>;
}
