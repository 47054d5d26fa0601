pub mod error;
pub mod lazy;
pub mod plugin;
pub mod sanitize;
