pub mod shots;
pub mod placement;
pub mod overlay;
