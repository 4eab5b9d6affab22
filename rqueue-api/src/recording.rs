//! A backend that builds nothing on a GPU. Pipelines are numbered in creation order and command
//! buffers keep the list of commands issued to them. Useful for headless tools and for checking
//! exactly what a render queue emits.

use crate::{
    RqueueCommandBuffer, RqueueDescriptorSetBinding, RqueueDescriptorSetHandle, RqueueDeviceContext,
    RqueueDeviceId, RqueueInputAssembler, RqueuePipelineState, RqueuePipelineStateDef,
    RqueueResult, RqueueSetIndex,
};
use parking_lot::Mutex;
use std::sync::Arc;

struct RqueueDeviceContextRecordingInner {
    device_id: RqueueDeviceId,
    created_pipeline_states: Mutex<Vec<RqueuePipelineStateDef>>,
}

#[derive(Clone)]
pub struct RqueueDeviceContextRecording {
    inner: Arc<RqueueDeviceContextRecordingInner>,
}

impl RqueueDeviceContextRecording {
    pub fn new(device_id: RqueueDeviceId) -> Self {
        let inner = RqueueDeviceContextRecordingInner {
            device_id,
            created_pipeline_states: Default::default(),
        };

        RqueueDeviceContextRecording {
            inner: Arc::new(inner),
        }
    }

    /// Number of times `create_pipeline_state` has been called
    pub fn pipeline_state_create_count(&self) -> usize {
        self.inner.created_pipeline_states.lock().len()
    }

    pub fn created_pipeline_states(&self) -> Vec<RqueuePipelineStateDef> {
        self.inner.created_pipeline_states.lock().clone()
    }
}

impl RqueueDeviceContext for RqueueDeviceContextRecording {
    fn device_id(&self) -> RqueueDeviceId {
        self.inner.device_id
    }

    fn create_pipeline_state(
        &self,
        pipeline_state_def: &RqueuePipelineStateDef,
    ) -> RqueueResult<RqueuePipelineState> {
        let mut created = self.inner.created_pipeline_states.lock();
        let pipeline_state = RqueuePipelineState(created.len() as u64);
        log::trace!(
            "Recording device {} created pipeline state {:?} for shader {}",
            self.inner.device_id,
            pipeline_state,
            pipeline_state_def.shader_id
        );
        created.push(pipeline_state_def.clone());
        Ok(pipeline_state)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RqueueRecordedCommand {
    BindPipelineState(RqueuePipelineState),
    BindDescriptorSet(RqueueDescriptorSetBinding),
    BindInputAssembler(u64),
    Draw {
        input_assembler: u64,
        indexed: bool,
        first: u32,
        count: u32,
        instance_count: u32,
    },
}

#[derive(Debug, Default)]
pub struct RqueueCommandBufferRecording {
    commands: Vec<RqueueRecordedCommand>,
}

impl RqueueCommandBufferRecording {
    pub fn new() -> Self {
        Default::default()
    }

    pub fn commands(&self) -> &[RqueueRecordedCommand] {
        &self.commands
    }

    pub fn draw_count(&self) -> usize {
        self.commands
            .iter()
            .filter(|command| matches!(command, RqueueRecordedCommand::Draw { .. }))
            .count()
    }

    /// Forget recorded commands but keep the allocation
    pub fn reset(&mut self) {
        self.commands.clear();
    }
}

impl RqueueCommandBuffer for RqueueCommandBufferRecording {
    fn cmd_bind_pipeline_state(
        &mut self,
        pipeline_state: RqueuePipelineState,
    ) -> RqueueResult<()> {
        self.commands
            .push(RqueueRecordedCommand::BindPipelineState(pipeline_state));
        Ok(())
    }

    fn cmd_bind_descriptor_set(
        &mut self,
        set_index: RqueueSetIndex,
        descriptor_set: RqueueDescriptorSetHandle,
    ) -> RqueueResult<()> {
        self.commands
            .push(RqueueRecordedCommand::BindDescriptorSet(
                RqueueDescriptorSetBinding {
                    set_index,
                    descriptor_set,
                },
            ));
        Ok(())
    }

    fn cmd_bind_input_assembler(
        &mut self,
        input_assembler: &RqueueInputAssembler,
    ) -> RqueueResult<()> {
        self.commands
            .push(RqueueRecordedCommand::BindInputAssembler(input_assembler.id));
        Ok(())
    }

    fn cmd_draw(
        &mut self,
        input_assembler: &RqueueInputAssembler,
    ) -> RqueueResult<()> {
        let (first, count) = if input_assembler.is_indexed() {
            (input_assembler.first_index, input_assembler.index_count)
        } else {
            (input_assembler.first_vertex, input_assembler.vertex_count)
        };

        self.commands.push(RqueueRecordedCommand::Draw {
            input_assembler: input_assembler.id,
            indexed: input_assembler.is_indexed(),
            first,
            count,
            instance_count: input_assembler.instance_count.max(1),
        });
        Ok(())
    }
}
