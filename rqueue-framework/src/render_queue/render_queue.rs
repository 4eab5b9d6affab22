use super::{pack_sort_hash, RenderQueueDescriptor, RenderQueueEntry, SubModelRef};
use crate::{PipelineStateCache, RenderObjectId, RenderObjectSet};
use rqueue_api::{
    RqueueCommandBuffer, RqueueDeviceContext, RqueueRenderPassHandle, RqueueResult,
    RqueueSetIndex,
};
use rqueue_base::{RecyclePool, RecyclePoolKey};

const DEFAULT_RENDER_QUEUE_CAPACITY: usize = 64;

/// Collects the draws of one pipeline stage for a single frame.
///
/// Per frame the queue goes through `insert_render_pass` (any number of times), `sort`,
/// `record_command_buffer` and finally `clear`. Recording a queue that was not sorted since the
/// last insert is allowed and draws in insertion order.
///
/// Entries live in a pool that is reset, not freed, on `clear`, so after the first few frames a
/// queue stops allocating.
pub struct RenderQueue {
    descriptor: RenderQueueDescriptor,
    entry_pool: RecyclePool<RenderQueueEntry>,
    // Keys into entry_pool, in draw order once sorted
    queue: Vec<RecyclePoolKey<RenderQueueEntry>>,
}

impl RenderQueue {
    pub fn new(descriptor: RenderQueueDescriptor) -> Self {
        Self::with_capacity(descriptor, DEFAULT_RENDER_QUEUE_CAPACITY)
    }

    pub fn with_capacity(
        descriptor: RenderQueueDescriptor,
        capacity: usize,
    ) -> Self {
        RenderQueue {
            descriptor,
            entry_pool: RecyclePool::with_capacity(capacity, RenderQueueEntry::default),
            queue: Vec::with_capacity(capacity),
        }
    }

    pub fn descriptor(&self) -> &RenderQueueDescriptor {
        &self.descriptor
    }

    pub fn len(&self) -> usize {
        self.queue.len()
    }

    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }

    /// Entries in their current order
    pub fn iter(&self) -> impl Iterator<Item = &RenderQueueEntry> {
        let entry_pool = &self.entry_pool;
        self.queue.iter().map(move |key| entry_pool.get(*key))
    }

    /// Drop every entry. Storage is kept for the next frame.
    pub fn clear(&mut self) {
        self.queue.clear();
        self.entry_pool.reset();
    }

    /// Offer one pass of one sub-model to the queue. Returns false, and changes nothing, if the
    /// pass is not drawn in any of the queue's phases or its transparency does not match the
    /// queue's. Callers are expected to try other queues in that case.
    ///
    /// Indices must be in range for the render object.
    pub fn insert_render_pass(
        &mut self,
        render_objects: &RenderObjectSet,
        render_object_id: RenderObjectId,
        sub_model_index: usize,
        pass_index: usize,
    ) -> bool {
        let render_object = render_objects.get(render_object_id);
        let sub_model = render_object.sub_model(sub_model_index);
        let pass = sub_model.pass(pass_index);
        let shader = sub_model.shader(pass_index);

        if pass.is_transparent() != self.descriptor.is_transparent
            || !pass.phase().intersects(self.descriptor.phases)
        {
            return false;
        }

        // `+ 0.0` folds -0.0 into 0.0 so total_cmp treats them as equal
        let depth = match render_object.depth() {
            Some(depth) if !depth.is_nan() => depth + 0.0,
            _ => 0.0,
        };

        let (key, entry) = self.entry_pool.add();
        *entry = RenderQueueEntry {
            priority: render_object.priority().unwrap_or(0),
            hash: pack_sort_hash(pass.priority(), sub_model.priority(), pass_index),
            depth,
            shader_id: shader.id(),
            sub_model: SubModelRef {
                render_object: render_object_id,
                sub_model_index: sub_model_index as u32,
            },
            pass_index: pass_index as u32,
        };
        self.queue.push(key);

        true
    }

    /// Order the queue with the descriptor's sort function. Entries that compare equal stay in
    /// insertion order.
    #[profiling::function]
    pub fn sort(&mut self) {
        log::trace!("Sort render queue with {} entries", self.queue.len());

        let entry_pool = &self.entry_pool;
        let sort_function = self.descriptor.sort_function;

        // Keys are handed out in insertion order, so comparing them as a last resort makes the
        // unstable sort behave like a stable one without its scratch allocation
        self.queue.sort_unstable_by(|a, b| {
            sort_function(entry_pool.get(*a), entry_pool.get(*b))
                .then_with(|| a.index().cmp(&b.index()))
        });
    }

    /// Write one bind/draw sequence per entry, in the queue's current order. `render_objects`
    /// must be the set the entries were inserted from.
    #[profiling::function]
    pub fn record_command_buffer<DeviceContextT, CommandBufferT>(
        &self,
        render_objects: &RenderObjectSet,
        pipeline_cache: &PipelineStateCache,
        device_context: &DeviceContextT,
        render_pass: RqueueRenderPassHandle,
        command_buffer: &mut CommandBufferT,
    ) -> RqueueResult<()>
    where
        DeviceContextT: RqueueDeviceContext + ?Sized,
        CommandBufferT: RqueueCommandBuffer + ?Sized,
    {
        for key in &self.queue {
            let entry = self.entry_pool.get(*key);
            let sub_model = render_objects
                .get(entry.sub_model.render_object)
                .sub_model(entry.sub_model.sub_model_index as usize);
            let input_assembler = sub_model.input_assembler();
            let pass = sub_model.pass(entry.pass_index as usize);
            let shader = sub_model.shader(entry.pass_index as usize);

            let pipeline_state = pipeline_cache.get_or_create_pipeline_state(
                device_context,
                pass,
                shader,
                render_pass,
                input_assembler,
            )?;

            command_buffer.cmd_bind_pipeline_state(pipeline_state)?;
            command_buffer
                .cmd_bind_descriptor_set(RqueueSetIndex::Material, pass.descriptor_set())?;
            command_buffer
                .cmd_bind_descriptor_set(RqueueSetIndex::Local, sub_model.descriptor_set())?;
            command_buffer.cmd_bind_input_assembler(input_assembler)?;
            command_buffer.cmd_draw(input_assembler)?;
        }

        Ok(())
    }
}

/// `RenderQueue::clear` as a plain function, for stages that keep a list of per-queue callbacks
pub fn render_queue_clear(render_queue: &mut RenderQueue) {
    render_queue.clear();
}

/// `RenderQueue::sort` as a plain function, for stages that keep a list of per-queue callbacks
pub fn render_queue_sort(render_queue: &mut RenderQueue) {
    render_queue.sort();
}
