pub mod geometry;
pub mod ghost;
pub mod obstruction;
pub mod rack;
