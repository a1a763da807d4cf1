pub mod component;
pub mod model;
pub mod render;
