pub mod auth;
pub mod catalog;
pub mod client;
pub mod errors;
pub mod interceptor;
pub mod orders;
pub mod producer;
pub mod ratings;
mod wire;

#[cfg(test)]
pub(crate) mod test_support;
