pub mod audio;
pub mod models;
pub mod observability;
pub mod process;
