pub mod cart_watcher;
pub mod dependency_injection;
pub mod navigator;
pub mod server;
