pub mod config;
pub mod contract;
pub mod logging;
pub mod network;
