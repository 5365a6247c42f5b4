pub mod apply;
pub mod demo;
pub mod distance;
pub mod list;
pub mod render;
pub mod show;
pub mod sort;
