//! Record operations the service layer depends on.
//!
//! Each trait is implemented by a PostgreSQL repository and by
//! [`MemoryStore`](crate::memory::MemoryStore). Multi-record writes
//! (`create_with_images`, `delete_with_images`) are all-or-nothing in
//! every implementation.

use async_trait::async_trait;

use realty_core::result::AppResult;
use realty_core::types::{HomeId, UserId};
use realty_entity::home::{CreateHome, Home, HomeFilter, HomeSummary, Image, UpdateHome};
use realty_entity::message::{CreateMessage, Message, MessageWithSender};
use realty_entity::user::{CreateUser, User};

/// Row counts removed by a listing deletion.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DeletedHome {
    /// Images removed with the listing.
    pub images: u64,
    /// Inquiries removed with the listing.
    pub messages: u64,
}

/// Account records.
#[async_trait]
pub trait UserStore: Send + Sync + 'static {
    /// Find a user by primary key.
    async fn find_by_id(&self, id: UserId) -> AppResult<Option<User>>;

    /// Find a user by email.
    async fn find_by_email(&self, email: &str) -> AppResult<Option<User>>;

    /// Insert a user. Fails with `Conflict` when the email is taken.
    async fn create(&self, data: &CreateUser) -> AppResult<User>;

    /// Check that the backing store is reachable.
    async fn ping(&self) -> AppResult<bool>;
}

/// Listing and image records.
#[async_trait]
pub trait HomeStore: Send + Sync + 'static {
    /// Listings matching every provided criterion, each with its first image.
    async fn search(&self, filter: &HomeFilter) -> AppResult<Vec<HomeSummary>>;

    /// Find a listing by primary key.
    async fn find_by_id(&self, id: HomeId) -> AppResult<Option<Home>>;

    /// All images of a listing, lowest id first.
    async fn find_images(&self, id: HomeId) -> AppResult<Vec<Image>>;

    /// Insert a listing and its images as one unit.
    async fn create_with_images(&self, data: &CreateHome) -> AppResult<(Home, Vec<Image>)>;

    /// Apply a partial update. Returns `None` when the listing does not exist.
    async fn update(&self, id: HomeId, data: &UpdateHome) -> AppResult<Option<Home>>;

    /// Remove a listing together with its images and inquiries as one unit.
    ///
    /// Fails with `NotFound` when the listing does not exist; nothing is
    /// removed in that case.
    async fn delete_with_images(&self, id: HomeId) -> AppResult<DeletedHome>;

    /// The account that owns a listing.
    async fn find_realtor(&self, id: HomeId) -> AppResult<Option<User>>;
}

/// Inquiry records.
#[async_trait]
pub trait MessageStore: Send + Sync + 'static {
    /// Insert an inquiry.
    async fn create(&self, data: &CreateMessage) -> AppResult<Message>;

    /// Inquiries about a listing with sender contact fields, oldest first.
    async fn find_by_home(&self, id: HomeId) -> AppResult<Vec<MessageWithSender>>;
}
