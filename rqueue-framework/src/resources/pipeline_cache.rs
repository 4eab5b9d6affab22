use crate::{MaterialPass, ShaderVariant, ShaderVariantId};
use fnv::FnvHashMap;
use parking_lot::Mutex;
use rqueue_api::{
    RqueueDeviceContext, RqueueDeviceId, RqueueInputAssembler, RqueuePipelineState,
    RqueuePipelineStateDef, RqueueRenderPassHandle, RqueueResult,
};
use std::sync::Arc;

#[derive(PartialEq, Eq, Hash)]
struct CachedPipelineStateKey {
    device_id: RqueueDeviceId,
    material_pass: u64,
    shader_id: ShaderVariantId,
    render_pass: RqueueRenderPassHandle,
    vertex_layout_hash: u64,
}

impl CachedPipelineStateKey {
    fn new(
        device_id: RqueueDeviceId,
        material_pass: &MaterialPass,
        shader: &ShaderVariant,
        render_pass: RqueueRenderPassHandle,
        input_assembler: &RqueueInputAssembler,
    ) -> Self {
        CachedPipelineStateKey {
            device_id,
            material_pass: material_pass.hash(),
            shader_id: shader.id(),
            render_pass,
            vertex_layout_hash: input_assembler.vertex_layout_hash,
        }
    }
}

struct PipelineStateCacheInner {
    cached_pipelines: FnvHashMap<CachedPipelineStateKey, RqueuePipelineState>,
    pipeline_create_count: u64,
}

#[derive(Debug)]
pub struct PipelineStateCacheMetrics {
    pub pipeline_count: usize,
    pub pipeline_create_count: u64,
}

/// Pipelines built for (device, material pass, shader, render pass, vertex layout). Cloning the
/// cache shares it.
#[derive(Clone)]
pub struct PipelineStateCache {
    inner: Arc<Mutex<PipelineStateCacheInner>>,
}

impl Default for PipelineStateCache {
    fn default() -> Self {
        Self::new()
    }
}

impl PipelineStateCache {
    pub fn new() -> Self {
        let inner = PipelineStateCacheInner {
            cached_pipelines: Default::default(),
            pipeline_create_count: 0,
        };

        PipelineStateCache {
            inner: Arc::new(Mutex::new(inner)),
        }
    }

    pub fn metrics(&self) -> PipelineStateCacheMetrics {
        let guard = self.inner.lock();
        PipelineStateCacheMetrics {
            pipeline_count: guard.cached_pipelines.len(),
            pipeline_create_count: guard.pipeline_create_count,
        }
    }

    pub fn try_get_pipeline_state(
        &self,
        device_id: RqueueDeviceId,
        material_pass: &MaterialPass,
        shader: &ShaderVariant,
        render_pass: RqueueRenderPassHandle,
        input_assembler: &RqueueInputAssembler,
    ) -> Option<RqueuePipelineState> {
        let key = CachedPipelineStateKey::new(
            device_id,
            material_pass,
            shader,
            render_pass,
            input_assembler,
        );

        self.inner.lock().cached_pipelines.get(&key).copied()
    }

    pub fn get_or_create_pipeline_state<DeviceContextT: RqueueDeviceContext + ?Sized>(
        &self,
        device_context: &DeviceContextT,
        material_pass: &MaterialPass,
        shader: &ShaderVariant,
        render_pass: RqueueRenderPassHandle,
        input_assembler: &RqueueInputAssembler,
    ) -> RqueueResult<RqueuePipelineState> {
        let key = CachedPipelineStateKey::new(
            device_context.device_id(),
            material_pass,
            shader,
            render_pass,
            input_assembler,
        );

        let mut guard = self.inner.lock();
        let inner = &mut *guard;

        if let Some(pipeline_state) = inner.cached_pipelines.get(&key) {
            return Ok(*pipeline_state);
        }

        profiling::scope!("Create Pipeline");
        log::debug!(
            "Creating pipeline state for material pass {:x} shader {} render pass {:?}",
            key.material_pass,
            key.shader_id,
            key.render_pass
        );

        let pipeline_state = device_context.create_pipeline_state(&RqueuePipelineStateDef {
            material_pass_hash: key.material_pass,
            shader_id: key.shader_id,
            blend_state: material_pass.blend_state().clone(),
            render_pass,
            vertex_layout_hash: key.vertex_layout_hash,
        })?;

        inner.pipeline_create_count += 1;
        inner.cached_pipelines.insert(key, pipeline_state);
        Ok(pipeline_state)
    }

    /// Drop every cached pipeline, for example after the device was recreated
    pub fn clear(&self) {
        self.inner.lock().cached_pipelines.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render_queue::RenderPhaseMask;
    use rqueue_api::recording::RqueueDeviceContextRecording;
    use rqueue_api::{RqueueBlendState, RqueueDescriptorSetHandle, RqueueError};

    fn material_pass() -> MaterialPass {
        MaterialPass::new(
            0,
            RenderPhaseMask::from_bits(1),
            RqueueBlendState::default(),
            RqueueDescriptorSetHandle(1),
        )
    }

    fn input_assembler(vertex_layout_hash: u64) -> RqueueInputAssembler {
        RqueueInputAssembler {
            id: 1,
            vertex_layout_hash,
            vertex_count: 3,
            ..Default::default()
        }
    }

    #[test]
    fn test_get_or_create_is_idempotent() {
        let device_context = RqueueDeviceContextRecording::new(0);
        let cache = PipelineStateCache::new();
        let pass = material_pass();
        let shader = ShaderVariant::new(4);

        let first = cache
            .get_or_create_pipeline_state(
                &device_context,
                &pass,
                &shader,
                RqueueRenderPassHandle(1),
                &input_assembler(10),
            )
            .unwrap();
        let second = cache
            .get_or_create_pipeline_state(
                &device_context,
                &pass,
                &shader,
                RqueueRenderPassHandle(1),
                &input_assembler(10),
            )
            .unwrap();

        assert_eq!(first, second);
        assert_eq!(1, device_context.pipeline_state_create_count());
        assert_eq!(1, cache.metrics().pipeline_count);
        assert_eq!(1, cache.metrics().pipeline_create_count);
    }

    #[test]
    fn test_each_key_component_gets_its_own_pipeline() {
        let device_context = RqueueDeviceContextRecording::new(0);
        let other_device_context = RqueueDeviceContextRecording::new(1);
        let cache = PipelineStateCache::new();
        let pass = material_pass();
        let shader = ShaderVariant::new(4);

        let base = cache
            .get_or_create_pipeline_state(
                &device_context,
                &pass,
                &shader,
                RqueueRenderPassHandle(1),
                &input_assembler(10),
            )
            .unwrap();
        let other_layout = cache
            .get_or_create_pipeline_state(
                &device_context,
                &pass,
                &shader,
                RqueueRenderPassHandle(1),
                &input_assembler(11),
            )
            .unwrap();
        let other_render_pass = cache
            .get_or_create_pipeline_state(
                &device_context,
                &pass,
                &shader,
                RqueueRenderPassHandle(2),
                &input_assembler(10),
            )
            .unwrap();
        let other_shader = cache
            .get_or_create_pipeline_state(
                &device_context,
                &pass,
                &ShaderVariant::new(5),
                RqueueRenderPassHandle(1),
                &input_assembler(10),
            )
            .unwrap();
        cache
            .get_or_create_pipeline_state(
                &other_device_context,
                &pass,
                &shader,
                RqueueRenderPassHandle(1),
                &input_assembler(10),
            )
            .unwrap();

        assert_ne!(base, other_layout);
        assert_ne!(base, other_render_pass);
        assert_ne!(base, other_shader);
        assert_eq!(5, cache.metrics().pipeline_count);
        assert_eq!(1, other_device_context.pipeline_state_create_count());
    }

    #[test]
    fn test_try_get_does_not_create() {
        let device_context = RqueueDeviceContextRecording::new(0);
        let cache = PipelineStateCache::new();
        let pass = material_pass();
        let shader = ShaderVariant::new(4);

        assert!(cache
            .try_get_pipeline_state(
                0,
                &pass,
                &shader,
                RqueueRenderPassHandle(1),
                &input_assembler(10)
            )
            .is_none());

        let created = cache
            .get_or_create_pipeline_state(
                &device_context,
                &pass,
                &shader,
                RqueueRenderPassHandle(1),
                &input_assembler(10),
            )
            .unwrap();

        assert_eq!(
            Some(created),
            cache.try_get_pipeline_state(
                0,
                &pass,
                &shader,
                RqueueRenderPassHandle(1),
                &input_assembler(10)
            )
        );

        cache.clear();
        assert_eq!(0, cache.metrics().pipeline_count);
    }

    #[test]
    fn test_passes_differing_only_in_priority_share_a_pipeline() {
        let device_context = RqueueDeviceContextRecording::new(0);
        let cache = PipelineStateCache::new();
        let shader = ShaderVariant::new(4);

        for priority in 0..2 {
            let pass = MaterialPass::new(
                priority,
                RenderPhaseMask::from_bits(1 << priority),
                RqueueBlendState::default(),
                RqueueDescriptorSetHandle(1),
            );
            cache
                .get_or_create_pipeline_state(
                    &device_context,
                    &pass,
                    &shader,
                    RqueueRenderPassHandle(1),
                    &input_assembler(10),
                )
                .unwrap();
        }

        assert_eq!(1, device_context.pipeline_state_create_count());
        assert_eq!(1, cache.metrics().pipeline_count);
    }

    struct FailingDeviceContext;

    impl RqueueDeviceContext for FailingDeviceContext {
        fn device_id(&self) -> RqueueDeviceId {
            0
        }

        fn create_pipeline_state(
            &self,
            _pipeline_state_def: &RqueuePipelineStateDef,
        ) -> RqueueResult<RqueuePipelineState> {
            Err(RqueueError::from("out of pipeline memory"))
        }
    }

    #[test]
    fn test_creation_failure_is_not_cached() {
        let cache = PipelineStateCache::new();
        let result = cache.get_or_create_pipeline_state(
            &FailingDeviceContext,
            &material_pass(),
            &ShaderVariant::new(1),
            RqueueRenderPassHandle(1),
            &input_assembler(10),
        );

        assert!(result.is_err());
        assert_eq!(0, cache.metrics().pipeline_count);
    }
}
