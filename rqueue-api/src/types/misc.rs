#[cfg(feature = "serde-support")]
use serde::{Deserialize, Serialize};

/// Affects blending. Similar to VkBlendFactor
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde-support", derive(Serialize, Deserialize))]
pub enum RqueueBlendFactor {
    Zero,
    One,
    SrcColor,
    OneMinusSrcColor,
    DstColor,
    OneMinusDstColor,
    SrcAlpha,
    OneMinusSrcAlpha,
    DstAlpha,
    OneMinusDstAlpha,
    SrcAlphaSaturate,
    ConstantColor,
    OneMinusConstantColor,
}

impl Default for RqueueBlendFactor {
    fn default() -> Self {
        RqueueBlendFactor::Zero
    }
}

/// Affects blending. Similar to VkBlendOp
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde-support", derive(Serialize, Deserialize))]
pub enum RqueueBlendOp {
    Add,
    Subtract,
    ReverseSubtract,
    Min,
    Max,
}

impl Default for RqueueBlendOp {
    fn default() -> Self {
        RqueueBlendOp::Add
    }
}

bitflags::bitflags! {
    /// Flags for enabling/disabling color channels, used with `RqueueBlendState`
    #[cfg_attr(feature = "serde-support", derive(Serialize, Deserialize))]
    pub struct RqueueColorFlags: u8 {
        const RED = 1;
        const GREEN = 2;
        const BLUE = 4;
        const ALPHA = 8;
        const ALL = 0x0F;
    }
}

impl Default for RqueueColorFlags {
    fn default() -> Self {
        RqueueColorFlags::ALL
    }
}

/// Descriptor set slots used when recording a render queue. The global set is bound once per
/// pass by whoever owns the render pass, the other two are rebound per draw.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde-support", derive(Serialize, Deserialize))]
pub enum RqueueSetIndex {
    Global = 0,
    Material = 1,
    Local = 2,
}

impl RqueueSetIndex {
    pub fn index(self) -> u32 {
        self as u32
    }
}

/// Identifies a device so that pipelines built for one device are never handed to another
pub type RqueueDeviceId = u64;

/// Opaque handle to a compiled pipeline state object owned by the device
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde-support", derive(Serialize, Deserialize))]
pub struct RqueuePipelineState(pub u64);

/// Opaque handle to a descriptor set owned by the device
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde-support", derive(Serialize, Deserialize))]
pub struct RqueueDescriptorSetHandle(pub u64);

/// Opaque handle to a render pass owned by the device
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde-support", derive(Serialize, Deserialize))]
pub struct RqueueRenderPassHandle(pub u64);
