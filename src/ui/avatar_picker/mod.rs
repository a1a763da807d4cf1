pub mod component;
pub mod model;
