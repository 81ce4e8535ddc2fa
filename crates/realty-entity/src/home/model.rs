//! Home entity model and write payloads.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use realty_core::types::{HomeId, UserId};

use super::property_type::PropertyType;

/// A property listed for sale by a realtor.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct Home {
    /// Unique listing identifier.
    pub id: HomeId,
    /// Street address.
    pub address: String,
    /// City the property is in.
    pub city: String,
    /// Number of bedrooms.
    pub number_of_bedrooms: i32,
    /// Number of bathrooms (half baths allowed).
    pub number_of_bathrooms: f64,
    /// Asking price.
    pub price: f64,
    /// Land size in square meters.
    pub land_size: f64,
    /// Kind of property.
    pub property_type: PropertyType,
    /// When the listing went live.
    pub listed_date: DateTime<Utc>,
    /// The realtor who owns the listing.
    pub realtor_id: UserId,
    /// When the row was created.
    pub created_at: DateTime<Utc>,
    /// When the row was last updated.
    pub updated_at: DateTime<Utc>,
}

/// A listing together with its first image, as returned by search.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct HomeSummary {
    /// The listing row.
    #[sqlx(flatten)]
    pub home: Home,
    /// Source of the lowest-id image, if the listing has any.
    pub image: Option<String>,
}

/// Data required to create a listing and its images in one unit.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateHome {
    /// Street address.
    pub address: String,
    /// City.
    pub city: String,
    /// Number of bedrooms.
    pub number_of_bedrooms: i32,
    /// Number of bathrooms.
    pub number_of_bathrooms: f64,
    /// Asking price.
    pub price: f64,
    /// Land size.
    pub land_size: f64,
    /// Kind of property.
    pub property_type: PropertyType,
    /// Owning realtor.
    pub realtor_id: UserId,
    /// Image sources, in display order.
    pub images: Vec<String>,
}

/// Partial update; `None` fields are left untouched.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdateHome {
    /// New street address.
    pub address: Option<String>,
    /// New city.
    pub city: Option<String>,
    /// New bedroom count.
    pub number_of_bedrooms: Option<i32>,
    /// New bathroom count.
    pub number_of_bathrooms: Option<f64>,
    /// New price.
    pub price: Option<f64>,
    /// New land size.
    pub land_size: Option<f64>,
    /// New property type.
    pub property_type: Option<PropertyType>,
}

impl UpdateHome {
    /// Whether no field would change.
    pub fn is_empty(&self) -> bool {
        self.address.is_none()
            && self.city.is_none()
            && self.number_of_bedrooms.is_none()
            && self.number_of_bathrooms.is_none()
            && self.price.is_none()
            && self.land_size.is_none()
            && self.property_type.is_none()
    }

    /// Apply the provided fields to an in-memory listing.
    pub fn apply_to(&self, home: &mut Home) {
        if let Some(address) = &self.address {
            home.address = address.clone();
        }
        if let Some(city) = &self.city {
            home.city = city.clone();
        }
        if let Some(bedrooms) = self.number_of_bedrooms {
            home.number_of_bedrooms = bedrooms;
        }
        if let Some(bathrooms) = self.number_of_bathrooms {
            home.number_of_bathrooms = bathrooms;
        }
        if let Some(price) = self.price {
            home.price = price;
        }
        if let Some(land_size) = self.land_size {
            home.land_size = land_size;
        }
        if let Some(property_type) = self.property_type {
            home.property_type = property_type;
        }
    }
}
