//! PostgreSQL implementations of the store traits.

pub mod home;
pub mod message;
pub mod user;

pub use home::HomeRepository;
pub use message::MessageRepository;
pub use user::UserRepository;
