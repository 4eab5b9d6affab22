mod material_pass;
pub use material_pass::MaterialPass;
pub use material_pass::ShaderVariant;
pub use material_pass::ShaderVariantId;

mod pipeline_cache;
pub use pipeline_cache::PipelineStateCache;
pub use pipeline_cache::PipelineStateCacheMetrics;
