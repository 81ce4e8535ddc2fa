//! # realty-database
//!
//! The persistence gateway for Realty. [`store`] declares the record
//! operations the services rely on; [`repositories`] implements them on
//! PostgreSQL and [`memory`] implements them in-process.

pub mod connection;
pub mod gateway;
pub mod memory;
pub mod migration;
pub mod repositories;
pub mod store;

pub use connection::open_pool;
pub use gateway::Gateway;
pub use memory::MemoryStore;
pub use store::{DeletedHome, HomeStore, MessageStore, UserStore};
