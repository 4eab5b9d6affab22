//! The per-frame view of the scene that render queues draw from. Whatever walks the scene fills
//! a `RenderObjectSet` with the visible objects, then offers (object, sub-model, pass) triples to
//! the render queues.

use crate::{MaterialPass, ShaderVariant};
use rqueue_api::{RqueueDescriptorSetHandle, RqueueInputAssembler};
use std::sync::Arc;

pub type RenderObjectIndex = u32;

/// Index of a `RenderObject` within the `RenderObjectSet` of the current frame
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RenderObjectId(RenderObjectIndex);

impl RenderObjectId {
    pub fn new(index: RenderObjectIndex) -> Self {
        RenderObjectId(index)
    }

    #[inline(always)]
    pub fn index(&self) -> RenderObjectIndex {
        self.0
    }
}

/// A piece of a model drawn with its own material. `passes` and `shaders` are index-aligned.
#[derive(Debug, Clone)]
pub struct SubModel {
    priority: u8,
    passes: Vec<Arc<MaterialPass>>,
    shaders: Vec<Arc<ShaderVariant>>,
    input_assembler: RqueueInputAssembler,
    descriptor_set: RqueueDescriptorSetHandle,
}

impl SubModel {
    pub fn new(
        priority: u8,
        input_assembler: RqueueInputAssembler,
        descriptor_set: RqueueDescriptorSetHandle,
    ) -> Self {
        SubModel {
            priority,
            passes: Vec::default(),
            shaders: Vec::default(),
            input_assembler,
            descriptor_set,
        }
    }

    /// Append a pass and the shader variant it is drawn with
    pub fn with_pass(
        mut self,
        pass: Arc<MaterialPass>,
        shader: Arc<ShaderVariant>,
    ) -> Self {
        self.passes.push(pass);
        self.shaders.push(shader);
        self
    }

    pub fn priority(&self) -> u8 {
        self.priority
    }

    pub fn passes(&self) -> &[Arc<MaterialPass>] {
        &self.passes
    }

    pub fn shaders(&self) -> &[Arc<ShaderVariant>] {
        &self.shaders
    }

    pub fn pass_count(&self) -> usize {
        self.passes.len()
    }

    #[inline(always)]
    pub fn pass(
        &self,
        pass_index: usize,
    ) -> &MaterialPass {
        &self.passes[pass_index]
    }

    #[inline(always)]
    pub fn shader(
        &self,
        pass_index: usize,
    ) -> &ShaderVariant {
        &self.shaders[pass_index]
    }

    pub fn input_assembler(&self) -> &RqueueInputAssembler {
        &self.input_assembler
    }

    /// The per-instance ("local") descriptor set
    pub fn descriptor_set(&self) -> RqueueDescriptorSetHandle {
        self.descriptor_set
    }
}

#[derive(Debug, Clone, Default)]
pub struct RenderObject {
    priority: Option<u32>,
    depth: Option<f32>,
    sub_models: Vec<SubModel>,
}

impl RenderObject {
    pub fn new() -> Self {
        Default::default()
    }

    pub fn with_priority(
        mut self,
        priority: u32,
    ) -> Self {
        self.priority = Some(priority);
        self
    }

    /// Depth from the camera for this frame
    pub fn with_depth(
        mut self,
        depth: f32,
    ) -> Self {
        self.depth = Some(depth);
        self
    }

    pub fn with_sub_model(
        mut self,
        sub_model: SubModel,
    ) -> Self {
        self.sub_models.push(sub_model);
        self
    }

    pub fn priority(&self) -> Option<u32> {
        self.priority
    }

    pub fn depth(&self) -> Option<f32> {
        self.depth
    }

    pub fn set_depth(
        &mut self,
        depth: f32,
    ) {
        self.depth = Some(depth);
    }

    pub fn sub_models(&self) -> &[SubModel] {
        &self.sub_models
    }

    #[inline(always)]
    pub fn sub_model(
        &self,
        sub_model_index: usize,
    ) -> &SubModel {
        &self.sub_models[sub_model_index]
    }
}

/// The render objects visible this frame. Ids are only valid until the next `clear()`.
#[derive(Debug, Default)]
pub struct RenderObjectSet {
    render_objects: Vec<RenderObject>,
}

impl RenderObjectSet {
    pub fn new() -> Self {
        Default::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        RenderObjectSet {
            render_objects: Vec::with_capacity(capacity),
        }
    }

    pub fn add(
        &mut self,
        render_object: RenderObject,
    ) -> RenderObjectId {
        let id = RenderObjectId::new(self.render_objects.len() as RenderObjectIndex);
        self.render_objects.push(render_object);
        id
    }

    #[inline(always)]
    pub fn get(
        &self,
        id: RenderObjectId,
    ) -> &RenderObject {
        &self.render_objects[id.index() as usize]
    }

    pub fn get_mut(
        &mut self,
        id: RenderObjectId,
    ) -> &mut RenderObject {
        &mut self.render_objects[id.index() as usize]
    }

    pub fn len(&self) -> usize {
        self.render_objects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.render_objects.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (RenderObjectId, &RenderObject)> {
        self.render_objects
            .iter()
            .enumerate()
            .map(|(index, render_object)| {
                (
                    RenderObjectId::new(index as RenderObjectIndex),
                    render_object,
                )
            })
    }

    /// Forget this frame's objects, keeping the allocation
    pub fn clear(&mut self) {
        self.render_objects.clear();
    }
}
