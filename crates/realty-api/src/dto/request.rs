//! Request DTOs with validation.

use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};

use realty_entity::home::{HomeFilter, PropertyType, UpdateHome};
use realty_entity::user::UserRole;
use realty_service::{NewHome, SignUpParams};

/// Sign-up request body.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct SignUpRequest {
    /// Display name.
    #[validate(length(min = 1, message = "Name is required"))]
    pub name: String,
    /// Contact phone number.
    #[validate(custom(function = "validate_phone"))]
    pub phone: Option<String>,
    /// Email.
    #[validate(email(message = "Invalid email address"))]
    pub email: String,
    /// Password.
    #[validate(custom(function = "validate_password"))]
    pub password: String,
    /// Product key, required for elevated roles.
    #[validate(length(min = 1, message = "Product key must not be empty"))]
    pub product_key: Option<String>,
}

impl From<SignUpRequest> for SignUpParams {
    fn from(req: SignUpRequest) -> Self {
        Self {
            email: req.email,
            password: req.password,
            name: req.name,
            phone: req.phone,
            product_key: req.product_key,
        }
    }
}

/// Sign-in request body.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct SignInRequest {
    /// Email.
    #[validate(email(message = "Invalid email address"))]
    pub email: String,
    /// Password.
    #[validate(length(min = 1, message = "Password is required"))]
    pub password: String,
}

/// Product key request body.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct ProductKeyRequest {
    /// Email the key is bound to.
    #[validate(email(message = "Invalid email address"))]
    pub email: String,
    /// Role the key is bound to.
    pub role: UserRole,
}

/// An image attached to a new listing.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct ImageRequest {
    /// Image URL or path.
    #[validate(length(min = 1, message = "Image source is required"))]
    pub source: String,
}

/// Create listing request body.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateHomeRequest {
    /// Street address.
    #[validate(length(min = 1, message = "Address is required"))]
    pub address: String,
    /// City.
    #[validate(length(min = 1, message = "City is required"))]
    pub city: String,
    /// Bedrooms.
    #[validate(range(min = 1, message = "Must be positive"))]
    pub number_of_bedrooms: i32,
    /// Bathrooms.
    #[validate(range(exclusive_min = 0.0, message = "Must be positive"))]
    pub number_of_bathrooms: f64,
    /// Price.
    #[validate(range(exclusive_min = 0.0, message = "Must be positive"))]
    pub price: f64,
    /// Land size.
    #[validate(range(exclusive_min = 0.0, message = "Must be positive"))]
    pub land_size: f64,
    /// Property type, sent as `type`.
    #[serde(rename = "type", alias = "propertyType")]
    pub property_type: PropertyType,
    /// Images, in display order.
    #[serde(default)]
    #[validate(nested)]
    pub images: Vec<ImageRequest>,
}

impl From<CreateHomeRequest> for NewHome {
    fn from(req: CreateHomeRequest) -> Self {
        Self {
            address: req.address,
            city: req.city,
            number_of_bedrooms: req.number_of_bedrooms,
            number_of_bathrooms: req.number_of_bathrooms,
            price: req.price,
            land_size: req.land_size,
            property_type: req.property_type,
            images: req.images.into_iter().map(|i| i.source).collect(),
        }
    }
}

/// Update listing request body; every field is optional.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateHomeRequest {
    /// Street address.
    #[validate(length(min = 1, message = "Address must not be empty"))]
    pub address: Option<String>,
    /// City.
    #[validate(length(min = 1, message = "City must not be empty"))]
    pub city: Option<String>,
    /// Bedrooms.
    #[validate(range(min = 1, message = "Must be positive"))]
    pub number_of_bedrooms: Option<i32>,
    /// Bathrooms.
    #[validate(range(exclusive_min = 0.0, message = "Must be positive"))]
    pub number_of_bathrooms: Option<f64>,
    /// Price.
    #[validate(range(exclusive_min = 0.0, message = "Must be positive"))]
    pub price: Option<f64>,
    /// Land size.
    #[validate(range(exclusive_min = 0.0, message = "Must be positive"))]
    pub land_size: Option<f64>,
    /// Property type, sent as `type`.
    #[serde(rename = "type", alias = "propertyType")]
    pub property_type: Option<PropertyType>,
}

impl From<UpdateHomeRequest> for UpdateHome {
    fn from(req: UpdateHomeRequest) -> Self {
        Self {
            address: req.address,
            city: req.city,
            number_of_bedrooms: req.number_of_bedrooms,
            number_of_bathrooms: req.number_of_bathrooms,
            price: req.price,
            land_size: req.land_size,
            property_type: req.property_type,
        }
    }
}

/// Query string for listing search.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchHomesQuery {
    /// Exact city.
    pub city: Option<String>,
    /// Inclusive lower price bound.
    pub min_price: Option<f64>,
    /// Inclusive upper price bound.
    pub max_price: Option<f64>,
    /// Property type.
    pub property_type: Option<PropertyType>,
}

impl From<SearchHomesQuery> for HomeFilter {
    fn from(query: SearchHomesQuery) -> Self {
        Self {
            city: query.city,
            min_price: query.min_price,
            max_price: query.max_price,
            property_type: query.property_type,
        }
    }
}

/// Inquiry request body.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct InquireRequest {
    /// Inquiry text.
    #[validate(length(min = 1, message = "Message is required"))]
    pub message: String,
}

/// At least 5 characters: one lowercase, one uppercase, two digits, one symbol.
fn validate_password(password: &str) -> Result<(), ValidationError> {
    let lower = password.chars().filter(char::is_ascii_lowercase).count();
    let upper = password.chars().filter(char::is_ascii_uppercase).count();
    let digits = password.chars().filter(char::is_ascii_digit).count();
    let symbols = password
        .chars()
        .filter(|c| !c.is_alphanumeric() && !c.is_whitespace())
        .count();

    if password.chars().count() >= 5 && lower >= 1 && upper >= 1 && digits >= 2 && symbols >= 1 {
        Ok(())
    } else {
        Err(ValidationError::new("weak_password").with_message(
            "Password needs 5+ characters with a lowercase, an uppercase, two digits and a symbol"
                .into(),
        ))
    }
}

fn validate_phone(phone: &str) -> Result<(), ValidationError> {
    let allowed = phone
        .chars()
        .all(|c| c.is_ascii_digit() || matches!(c, ' ' | '+' | '-' | '(' | ')'));
    let len = phone.chars().count();

    if allowed && (7..=20).contains(&len) && phone.chars().any(|c| c.is_ascii_digit()) {
        Ok(())
    } else {
        Err(ValidationError::new("phone").with_message("Invalid phone number".into()))
    }
}
