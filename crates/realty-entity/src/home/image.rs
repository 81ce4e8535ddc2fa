//! Listing image entity.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use realty_core::types::{HomeId, ImageId};

/// A photo attached to a listing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct Image {
    /// Unique image identifier.
    pub id: ImageId,
    /// URL or storage path of the photo.
    pub source: String,
    /// Owning listing.
    pub home_id: HomeId,
}
