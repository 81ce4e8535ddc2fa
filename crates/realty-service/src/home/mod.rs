//! Listings, their images, and inquiries.

pub mod service;

pub use service::{HomeDetail, HomeService, NewHome};
