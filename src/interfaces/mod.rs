//! Edges of the application: where records come from and how results leave.

pub mod render;
pub mod sheet;
