//! Home listing domain entities.

pub mod filter;
pub mod image;
pub mod model;
pub mod property_type;

pub use filter::HomeFilter;
pub use image::Image;
pub use model::{CreateHome, Home, HomeSummary, UpdateHome};
pub use property_type::PropertyType;
