pub mod components;
pub mod config;
pub mod system_order;
