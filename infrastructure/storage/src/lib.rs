pub mod client_info;
pub mod credentials;
pub mod local_storage;
