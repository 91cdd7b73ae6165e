pub mod add;
pub mod backup;
pub mod config;
pub mod del;
pub mod duplicate;
pub mod edit;
pub mod import;
pub mod list;
pub mod log;
pub mod move_status;
pub mod summary;
