use super::registry::{RenderPhaseMaskInnerType, MAX_RENDER_PHASE_COUNT};
use super::RenderPhaseIndex;
use serde::{Deserialize, Serialize};

#[derive(Default)]
pub struct RenderPhaseMaskBuilder(RenderPhaseMaskInnerType);

impl RenderPhaseMaskBuilder {
    pub fn add_render_phase_index(
        mut self,
        index: RenderPhaseIndex,
    ) -> RenderPhaseMaskBuilder {
        assert!(
            index < MAX_RENDER_PHASE_COUNT,
            "render phase index {} is invalid",
            index
        );
        self.0 |= 1 << index;
        self
    }

    pub fn add_render_phase_mask(
        mut self,
        mask: RenderPhaseMask,
    ) -> RenderPhaseMaskBuilder {
        self.0 |= mask.0;
        self
    }

    pub fn build(self) -> RenderPhaseMask {
        RenderPhaseMask(self.0)
    }
}

/// A set of render phases, one bit per phase. Material passes carry the phase(s) they are drawn in
/// and render queues carry the phases they accept.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RenderPhaseMask(RenderPhaseMaskInnerType);

impl RenderPhaseMask {
    pub fn empty() -> Self {
        RenderPhaseMask(0)
    }

    pub fn from_bits(bits: RenderPhaseMaskInnerType) -> Self {
        RenderPhaseMask(bits)
    }

    pub fn from_index(index: RenderPhaseIndex) -> Self {
        RenderPhaseMaskBuilder::default()
            .add_render_phase_index(index)
            .build()
    }

    #[inline(always)]
    pub fn bits(&self) -> RenderPhaseMaskInnerType {
        self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0 == 0
    }

    #[inline(always)]
    pub fn is_included_index(
        &self,
        index: RenderPhaseIndex,
    ) -> bool {
        assert!(
            index < MAX_RENDER_PHASE_COUNT,
            "render phase index {} is invalid (did you forget to register a render phase?)",
            index
        );

        (self.0 & 1 << index) != 0
    }

    /// True if any phase is in both masks
    #[inline(always)]
    pub fn intersects(
        &self,
        other: RenderPhaseMask,
    ) -> bool {
        (self.0 & other.0) != 0
    }
}

impl std::ops::BitOr for RenderPhaseMask {
    type Output = RenderPhaseMask;

    fn bitor(
        self,
        rhs: Self,
    ) -> Self::Output {
        RenderPhaseMask(self.0 | rhs.0)
    }
}

impl std::ops::BitOrAssign for RenderPhaseMask {
    fn bitor_assign(
        &mut self,
        rhs: Self,
    ) {
        self.0 |= rhs.0;
    }
}
