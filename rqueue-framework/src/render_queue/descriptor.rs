use super::{
    opaque_compare, transparent_compare, RenderPhaseMask, RenderPhaseMaskInnerType,
    RenderPhaseRegistry, RenderQueue, RenderQueueSortFunction,
};
use rqueue_api::RqueueResult;
use serde::{Deserialize, Serialize};

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RenderQueueSortMode {
    /// Sort with `opaque_compare`
    FrontToBack,
    /// Sort with `transparent_compare`
    BackToFront,
}

impl Default for RenderQueueSortMode {
    fn default() -> Self {
        RenderQueueSortMode::BackToFront
    }
}

impl RenderQueueSortMode {
    pub fn sort_function(self) -> RenderQueueSortFunction {
        match self {
            RenderQueueSortMode::FrontToBack => opaque_compare,
            RenderQueueSortMode::BackToFront => transparent_compare,
        }
    }
}

/// A render phase as written in a queue definition: either a name resolved through the
/// `RenderPhaseRegistry` or a mask that is used as-is
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RenderPhaseName {
    Name(String),
    Mask(RenderPhaseMaskInnerType),
}

impl RenderPhaseName {
    pub fn resolve(
        &self,
        registry: &RenderPhaseRegistry,
    ) -> RqueueResult<RenderPhaseMask> {
        match self {
            RenderPhaseName::Name(name) => registry.render_phase_mask(name),
            RenderPhaseName::Mask(bits) => Ok(RenderPhaseMask::from_bits(*bits)),
        }
    }
}

impl From<&str> for RenderPhaseName {
    fn from(name: &str) -> Self {
        RenderPhaseName::Name(name.to_string())
    }
}

impl From<String> for RenderPhaseName {
    fn from(name: String) -> Self {
        RenderPhaseName::Name(name)
    }
}

impl From<RenderPhaseMaskInnerType> for RenderPhaseName {
    fn from(bits: RenderPhaseMaskInnerType) -> Self {
        RenderPhaseName::Mask(bits)
    }
}

/// Authored description of a render queue
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderQueueDescriptorDef {
    pub is_transparent: bool,
    pub sort_mode: RenderQueueSortMode,
    pub stages: Vec<RenderPhaseName>,
}

impl RenderQueueDescriptorDef {
    pub fn to_descriptor(
        &self,
        registry: &RenderPhaseRegistry,
    ) -> RqueueResult<RenderQueueDescriptor> {
        convert_render_queue_descriptor(self, registry)
    }

    pub fn create_render_queue(
        &self,
        registry: &RenderPhaseRegistry,
    ) -> RqueueResult<RenderQueue> {
        create_render_queue(self, registry)
    }
}

/// Runtime configuration of a `RenderQueue`. Fixed for the lifetime of the queue.
#[derive(Copy, Clone, Debug)]
pub struct RenderQueueDescriptor {
    /// Only passes whose blend state matches this are accepted
    pub is_transparent: bool,
    /// Only passes drawn in at least one of these phases are accepted
    pub phases: RenderPhaseMask,
    pub sort_function: RenderQueueSortFunction,
}

/// Resolve the stages of `def` to a phase mask and pick the sort function. Call this when the
/// pipeline is configured, not per frame: new phase names are registered as a side effect.
pub fn convert_render_queue_descriptor(
    def: &RenderQueueDescriptorDef,
    registry: &RenderPhaseRegistry,
) -> RqueueResult<RenderQueueDescriptor> {
    let mut phases = RenderPhaseMask::empty();
    for stage in &def.stages {
        phases |= stage.resolve(registry)?;
    }

    Ok(RenderQueueDescriptor {
        is_transparent: def.is_transparent,
        phases,
        sort_function: def.sort_mode.sort_function(),
    })
}

/// Resolve `def` and build an empty queue from it
pub fn create_render_queue(
    def: &RenderQueueDescriptorDef,
    registry: &RenderPhaseRegistry,
) -> RqueueResult<RenderQueue> {
    Ok(RenderQueue::new(convert_render_queue_descriptor(def, registry)?))
}
