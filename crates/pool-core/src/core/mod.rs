pub mod collision;
pub mod geometry;
pub mod physics;
pub mod registry;
pub mod time;
