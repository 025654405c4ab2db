pub mod aspect;
pub mod grid;
pub mod region_plan;
