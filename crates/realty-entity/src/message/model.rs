//! Inquiry message model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use realty_core::types::{HomeId, MessageId, UserId};

/// A buyer's inquiry about a listing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct Message {
    /// Unique message identifier.
    pub id: MessageId,
    /// Inquiry text.
    pub text: String,
    /// Listing the inquiry is about.
    pub home_id: HomeId,
    /// Buyer who sent it.
    pub sender_id: UserId,
    /// When it was sent.
    pub created_at: DateTime<Utc>,
}

/// An inquiry joined with its sender's contact fields.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct MessageWithSender {
    /// The message row.
    #[sqlx(flatten)]
    pub message: Message,
    /// Sender display name.
    pub sender_name: String,
    /// Sender email.
    pub sender_email: String,
    /// Sender phone.
    pub sender_phone: Option<String>,
}

/// Data required to record an inquiry.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateMessage {
    /// Inquiry text.
    pub text: String,
    /// Listing.
    pub home_id: HomeId,
    /// Buyer.
    pub sender_id: UserId,
}
