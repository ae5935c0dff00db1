pub mod edge;
pub mod golden;
