//! Small pure helpers shared across layers.

pub mod decimal;
pub mod multipart;
pub mod normalize;
pub mod slug;
