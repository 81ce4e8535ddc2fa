//! Request and response shapes of the HTTP API.

pub mod request;
pub mod response;
