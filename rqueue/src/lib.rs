//! Per-frame render submission queues.
//!
//! A pipeline stage owns one or more `RenderQueue`s, each configured from a
//! `RenderQueueDescriptorDef`. Every frame the stage offers each (render object, sub-model, pass)
//! it wants drawn to its queues, sorts them and records them into a command buffer.
//!
//! * `base`: the recycling entry pool
//! * `api`: command buffer and device traits, plus a backend that records instead of drawing
//! * `framework`: render phases, render queues and the pipeline state cache

pub use rqueue_base as base;

pub use rqueue_api as api;

#[cfg(feature = "framework")]
pub use rqueue_framework as framework;

#[cfg(all(test, feature = "framework"))]
mod tests {
    use super::api::recording::{
        RqueueCommandBufferRecording, RqueueDeviceContextRecording, RqueueRecordedCommand,
    };
    use super::api::{
        RqueueBlendState, RqueueDescriptorSetHandle, RqueueInputAssembler, RqueueRenderPassHandle,
    };
    use super::framework::render_queue::{
        render_queue_clear, render_queue_sort, RenderPhaseRegistry, RenderQueue,
        RenderQueueDescriptorDef,
    };
    use super::framework::{
        MaterialPass, PipelineStateCache, RenderObject, RenderObjectSet, ShaderVariant, SubModel,
    };
    use std::sync::Arc;

    const FORWARD_STAGE: &str = r#"[
        (is_transparent: false, sort_mode: FrontToBack, stages: ["forward"]),
        (is_transparent: true, sort_mode: BackToFront, stages: ["forward"]),
    ]"#;

    fn draw_order(command_buffer: &RqueueCommandBufferRecording) -> Vec<u64> {
        command_buffer
            .commands()
            .iter()
            .filter_map(|command| match command {
                RqueueRecordedCommand::Draw {
                    input_assembler, ..
                } => Some(*input_assembler),
                _ => None,
            })
            .collect()
    }

    fn object(
        id: u64,
        depth: f32,
        pass: &Arc<MaterialPass>,
    ) -> RenderObject {
        RenderObject::new().with_depth(depth).with_sub_model(
            SubModel::new(
                0,
                RqueueInputAssembler {
                    id,
                    vertex_count: 3,
                    ..Default::default()
                },
                RqueueDescriptorSetHandle(id),
            )
            .with_pass(pass.clone(), Arc::new(ShaderVariant::new(1))),
        )
    }

    #[test]
    fn test_forward_stage_frames() {
        let _ = env_logger::builder().is_test(true).try_init();

        let registry = RenderPhaseRegistry::new();
        let defs: Vec<RenderQueueDescriptorDef> = ron::from_str(FORWARD_STAGE).unwrap();
        let mut render_queues: Vec<RenderQueue> = defs
            .iter()
            .map(|def| def.create_render_queue(&registry))
            .collect::<Result<_, _>>()
            .unwrap();

        let forward = registry.render_phase_mask("forward").unwrap();
        let shadow = registry.render_phase_mask("shadow").unwrap();
        let opaque = Arc::new(MaterialPass::new(
            0,
            forward,
            RqueueBlendState::default_alpha_disabled(),
            RqueueDescriptorSetHandle(100),
        ));
        let transparent = Arc::new(MaterialPass::new(
            0,
            forward,
            RqueueBlendState::default_alpha_enabled(),
            RqueueDescriptorSetHandle(101),
        ));
        let shadow_caster = Arc::new(MaterialPass::new(
            0,
            shadow,
            RqueueBlendState::default_alpha_disabled(),
            RqueueDescriptorSetHandle(102),
        ));

        let mut render_objects = RenderObjectSet::new();
        render_objects.add(object(1, 4.0, &opaque));
        render_objects.add(object(2, 6.0, &transparent));
        render_objects.add(object(3, 2.0, &opaque));
        render_objects.add(object(4, 1.0, &shadow_caster));
        render_objects.add(object(5, 8.0, &transparent));

        let device_context = RqueueDeviceContextRecording::new(0);
        let pipeline_cache = PipelineStateCache::new();

        let mut frames = vec![];
        for _ in 0..2 {
            for (id, render_object) in render_objects.iter() {
                for (sub_model_index, sub_model) in render_object.sub_models().iter().enumerate() {
                    for pass_index in 0..sub_model.pass_count() {
                        // First queue that accepts the pass draws it
                        for render_queue in &mut render_queues {
                            if render_queue.insert_render_pass(
                                &render_objects,
                                id,
                                sub_model_index,
                                pass_index,
                            ) {
                                break;
                            }
                        }
                    }
                }
            }

            let mut command_buffer = RqueueCommandBufferRecording::new();
            for render_queue in &mut render_queues {
                render_queue_sort(render_queue);
                render_queue
                    .record_command_buffer(
                        &render_objects,
                        &pipeline_cache,
                        &device_context,
                        RqueueRenderPassHandle(1),
                        &mut command_buffer,
                    )
                    .unwrap();
                render_queue_clear(render_queue);
            }

            frames.push(draw_order(&command_buffer));
        }

        // Opaque front to back, then transparent back to front. The shadow caster is not in any
        // phase this stage draws.
        assert_eq!(vec![3, 1, 5, 2], frames[0]);
        assert_eq!(frames[0], frames[1]);
        assert_eq!(2, device_context.pipeline_state_create_count());
        assert!(render_queues.iter().all(|render_queue| render_queue.is_empty()));
    }
}
