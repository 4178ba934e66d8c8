pub mod frame;
pub mod geometry;
