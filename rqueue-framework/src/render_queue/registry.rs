use super::RenderPhaseMask;
use fnv::FnvHashMap;
use parking_lot::Mutex;
use rqueue_api::RqueueResult;
use std::sync::Arc;

/// The `ID` of a registered render phase. The phase's bit in a `RenderPhaseMask` is `1 << index`.
pub type RenderPhaseIndex = u32;

pub type RenderPhaseMaskInnerType = u32;
pub const MAX_RENDER_PHASE_COUNT: u32 = 32;

#[derive(Default)]
struct RenderPhaseRegistryInner {
    phase_name_to_index: FnvHashMap<String, RenderPhaseIndex>,
    // indexed by render phase index
    phase_names: Vec<String>,
}

/// Assigns render phase indices to phase names. The first time a name is seen it gets the next
/// free index, and it keeps that index for as long as the registry lives. Phases are never
/// unregistered.
///
/// The registry is shared: clones refer to the same set of phases. Create one when the pipeline
/// is configured and pass it to everything that resolves phase names.
#[derive(Clone, Default)]
pub struct RenderPhaseRegistry {
    inner: Arc<Mutex<RenderPhaseRegistryInner>>,
}

impl RenderPhaseRegistry {
    pub fn new() -> Self {
        Default::default()
    }

    /// Get the index for a phase name, registering it if it is new
    pub fn render_phase_index(
        &self,
        name: &str,
    ) -> RqueueResult<RenderPhaseIndex> {
        let mut guard = self.inner.lock();
        let inner = &mut *guard;

        if let Some(index) = inner.phase_name_to_index.get(name) {
            return Ok(*index);
        }

        let index = inner.phase_names.len() as RenderPhaseIndex;
        if index >= MAX_RENDER_PHASE_COUNT {
            return Err(format!(
                "Cannot register render phase {}, only {} render phases are supported",
                name, MAX_RENDER_PHASE_COUNT
            )
            .into());
        }

        log::debug!("Registered render phase {} as index {}", name, index);
        inner.phase_name_to_index.insert(name.to_string(), index);
        inner.phase_names.push(name.to_string());
        Ok(index)
    }

    /// Get the single-bit mask for a phase name, registering it if it is new
    pub fn render_phase_mask(
        &self,
        name: &str,
    ) -> RqueueResult<RenderPhaseMask> {
        Ok(RenderPhaseMask::from_index(self.render_phase_index(name)?))
    }

    /// Look up a phase without registering it
    pub fn render_phase_index_from_name(
        &self,
        name: &str,
    ) -> Option<RenderPhaseIndex> {
        self.inner.lock().phase_name_to_index.get(name).copied()
    }

    pub fn render_phase_debug_name(
        &self,
        index: RenderPhaseIndex,
    ) -> Option<String> {
        self.inner.lock().phase_names.get(index as usize).cloned()
    }

    pub fn registered_render_phase_count(&self) -> RenderPhaseIndex {
        self.inner.lock().phase_names.len() as RenderPhaseIndex
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_indices_are_assigned_in_first_use_order() {
        let registry = RenderPhaseRegistry::new();
        assert_eq!(0, registry.render_phase_index("opaque").unwrap());
        assert_eq!(1, registry.render_phase_index("transparent").unwrap());
        assert_eq!(0, registry.render_phase_index("opaque").unwrap());
        assert_eq!(2, registry.registered_render_phase_count());
    }

    #[test]
    fn test_masks_are_single_bits() {
        let registry = RenderPhaseRegistry::new();
        registry.render_phase_index("shadow").unwrap();
        assert_eq!(0b10, registry.render_phase_mask("deferred").unwrap().bits());
    }

    #[test]
    fn test_clones_share_phases() {
        let registry = RenderPhaseRegistry::new();
        let clone = registry.clone();
        clone.render_phase_index("ui").unwrap();

        assert_eq!(Some(0), registry.render_phase_index_from_name("ui"));
        assert_eq!(Some("ui".to_string()), registry.render_phase_debug_name(0));
    }

    #[test]
    fn test_lookup_does_not_register() {
        let registry = RenderPhaseRegistry::new();
        assert_eq!(None, registry.render_phase_index_from_name("missing"));
        assert_eq!(None, registry.render_phase_debug_name(0));
        assert_eq!(0, registry.registered_render_phase_count());
    }

    #[test]
    fn test_too_many_phases() {
        let registry = RenderPhaseRegistry::new();
        for i in 0..MAX_RENDER_PHASE_COUNT {
            assert_eq!(i, registry.render_phase_index(&format!("phase{}", i)).unwrap());
        }

        assert!(registry.render_phase_index("one_too_many").is_err());
        // Existing phases still resolve
        assert_eq!(31, registry.render_phase_index("phase31").unwrap());
        assert_eq!(
            MAX_RENDER_PHASE_COUNT,
            registry.registered_render_phase_count()
        );
    }
}
