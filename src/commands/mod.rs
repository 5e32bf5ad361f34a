pub mod browse;
pub mod list;
pub mod show;
