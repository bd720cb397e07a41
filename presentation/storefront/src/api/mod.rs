pub mod auth;
pub mod cart;
pub mod catalog;
pub mod checkout;
pub mod error;
pub mod health;
pub mod money;
pub mod orders;
pub mod producer;
pub mod session;
pub mod tags;
