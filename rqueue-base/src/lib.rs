//! Lowest level crate of `rqueue`. Includes the frame-recycled storage used by render queues

pub mod recycle_pool;
pub use recycle_pool::RecyclePool;
pub use recycle_pool::RecyclePoolIndexT;
pub use recycle_pool::RecyclePoolKey;
