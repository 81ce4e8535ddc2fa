//! Response DTOs and their mapping from records.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use realty_core::types::{HomeId, MessageId, UserId};
use realty_entity::home::{Home, HomeSummary, PropertyType};
use realty_entity::message::{Message, MessageWithSender};
use realty_entity::user::{User, UserRole};
use realty_service::HomeDetail;

/// Identity token issued by sign-up and sign-in.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TokenResponse {
    /// Bearer token.
    pub token: String,
}

/// Freshly issued product key.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductKeyResponse {
    /// The key.
    pub product_key: String,
}

/// Listing fields shared by summaries and details.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HomeFields {
    /// Listing ID.
    pub id: HomeId,
    /// Street address.
    pub address: String,
    /// City.
    pub city: String,
    /// Bedrooms.
    pub number_of_bedrooms: i32,
    /// Bathrooms.
    pub number_of_bathrooms: f64,
    /// Price.
    pub price: f64,
    /// Land size.
    pub land_size: f64,
    /// Property type.
    pub property_type: PropertyType,
    /// When it was listed.
    pub listed_date: DateTime<Utc>,
    /// Owning realtor.
    pub realtor_id: UserId,
}

impl From<Home> for HomeFields {
    fn from(home: Home) -> Self {
        Self {
            id: home.id,
            address: home.address,
            city: home.city,
            number_of_bedrooms: home.number_of_bedrooms,
            number_of_bathrooms: home.number_of_bathrooms,
            price: home.price,
            land_size: home.land_size,
            property_type: home.property_type,
            listed_date: home.listed_date,
            realtor_id: home.realtor_id,
        }
    }
}

/// A search result.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HomeSummaryResponse {
    /// Listing fields.
    #[serde(flatten)]
    pub home: HomeFields,
    /// First image, if any.
    pub image: Option<String>,
}

impl From<HomeSummary> for HomeSummaryResponse {
    fn from(summary: HomeSummary) -> Self {
        Self {
            home: summary.home.into(),
            image: summary.image,
        }
    }
}

/// A listing with all images.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HomeResponse {
    /// Listing fields.
    #[serde(flatten)]
    pub home: HomeFields,
    /// Image sources, lowest id first.
    pub images: Vec<String>,
}

impl From<HomeDetail> for HomeResponse {
    fn from(detail: HomeDetail) -> Self {
        Self {
            home: detail.home.into(),
            images: detail.images.into_iter().map(|i| i.source).collect(),
        }
    }
}

/// Public contact fields of a listing's realtor.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RealtorResponse {
    /// User ID.
    pub id: UserId,
    /// Name.
    pub name: String,
    /// Email.
    pub email: String,
    /// Phone.
    pub phone: Option<String>,
}

impl From<User> for RealtorResponse {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            name: user.name,
            email: user.email,
            phone: user.phone,
        }
    }
}

/// The caller's own profile.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserProfileResponse {
    /// User ID.
    pub id: UserId,
    /// Name.
    pub name: String,
    /// Email.
    pub email: String,
    /// Phone.
    pub phone: Option<String>,
    /// Role.
    pub role: UserRole,
    /// Registration time.
    pub created_at: DateTime<Utc>,
}

impl From<User> for UserProfileResponse {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            name: user.name,
            email: user.email,
            phone: user.phone,
            role: user.role,
            created_at: user.created_at,
        }
    }
}

/// A recorded inquiry.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InquiryResponse {
    /// Message ID.
    pub id: MessageId,
    /// Inquiry text.
    pub message: String,
    /// Listing.
    pub home_id: HomeId,
    /// When it was sent.
    pub created_at: DateTime<Utc>,
}

impl From<Message> for InquiryResponse {
    fn from(message: Message) -> Self {
        Self {
            id: message.id,
            message: message.text,
            home_id: message.home_id,
            created_at: message.created_at,
        }
    }
}

/// Contact fields of an inquiry's sender.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SenderResponse {
    /// Name.
    pub name: String,
    /// Email.
    pub email: String,
    /// Phone.
    pub phone: Option<String>,
}

/// An inquiry as shown to the listing's realtor.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MessageResponse {
    /// Message ID.
    pub id: MessageId,
    /// Inquiry text.
    pub message: String,
    /// When it was sent.
    pub created_at: DateTime<Utc>,
    /// Who sent it.
    pub sender: SenderResponse,
}

impl From<MessageWithSender> for MessageResponse {
    fn from(row: MessageWithSender) -> Self {
        Self {
            id: row.message.id,
            message: row.message.text,
            created_at: row.message.created_at,
            sender: SenderResponse {
                name: row.sender_name,
                email: row.sender_email,
                phone: row.sender_phone,
            },
        }
    }
}

/// Health check response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    /// Overall status.
    pub status: String,
    /// Server version.
    pub version: String,
    /// Store reachability.
    pub database: String,
}
