//! Scene layers, painted back to front.

pub mod bodies;
pub mod mountains;
pub mod stars;
pub mod trees;
