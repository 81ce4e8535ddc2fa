//! Listing management, ownership checks, and buyer inquiries.

use std::sync::Arc;

use tracing::info;

use realty_core::error::AppError;
use realty_core::result::AppResult;
use realty_core::types::HomeId;
use realty_database::store::{HomeStore, MessageStore, UserStore};
use realty_entity::home::{
    CreateHome, Home, HomeFilter, HomeSummary, Image, PropertyType, UpdateHome,
};
use realty_entity::message::{CreateMessage, Message, MessageWithSender};
use realty_entity::user::{User, UserRole};

use crate::context::RequestContext;

/// Listing fields supplied by a realtor.
#[derive(Debug, Clone)]
pub struct NewHome {
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
    /// Image sources.
    pub images: Vec<String>,
}

/// A listing with all of its images.
#[derive(Debug, Clone, PartialEq)]
pub struct HomeDetail {
    /// The listing.
    pub home: Home,
    /// Images, lowest id first.
    pub images: Vec<Image>,
}

/// Handles listing CRUD and inquiries.
#[derive(Clone)]
pub struct HomeService {
    /// Listing records.
    homes: Arc<dyn HomeStore>,
    /// Inquiry records.
    messages: Arc<dyn MessageStore>,
    /// Account records.
    users: Arc<dyn UserStore>,
}

impl std::fmt::Debug for HomeService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HomeService").finish_non_exhaustive()
    }
}

impl HomeService {
    /// Creates a new home service.
    pub fn new(
        homes: Arc<dyn HomeStore>,
        messages: Arc<dyn MessageStore>,
        users: Arc<dyn UserStore>,
    ) -> Self {
        Self {
            homes,
            messages,
            users,
        }
    }

    /// Listings matching the filter, each with its first image.
    pub async fn search(&self, filter: &HomeFilter) -> AppResult<Vec<HomeSummary>> {
        self.homes.search(filter).await
    }

    /// A listing with all of its images.
    pub async fn get_by_id(&self, id: HomeId) -> AppResult<HomeDetail> {
        let home = self.find_home(id).await?;
        let images = self.homes.find_images(id).await?;
        Ok(HomeDetail { home, images })
    }

    /// Creates a listing owned by the caller.
    pub async fn create(&self, ctx: &RequestContext, data: NewHome) -> AppResult<HomeDetail> {
        let realtor = self.load_caller(ctx).await?;
        if !realtor.can_list_homes() {
            return Err(AppError::unauthorized("Only realtors may create listings"));
        }

        let (home, images) = self
            .homes
            .create_with_images(&CreateHome {
                address: data.address,
                city: data.city,
                number_of_bedrooms: data.number_of_bedrooms,
                number_of_bathrooms: data.number_of_bathrooms,
                price: data.price,
                land_size: data.land_size,
                property_type: data.property_type,
                realtor_id: realtor.id,
                images: data.images,
            })
            .await?;

        info!(home_id = %home.id, realtor_id = %realtor.id, images = images.len(), "Home listed");
        Ok(HomeDetail { home, images })
    }

    /// Applies the provided fields to a listing.
    pub async fn update(&self, id: HomeId, data: &UpdateHome) -> AppResult<HomeDetail> {
        if data.is_empty() {
            return Err(AppError::validation("No listing fields to update"));
        }

        let home = self
            .homes
            .update(id, data)
            .await?
            .ok_or_else(|| home_not_found(id))?;
        let images = self.homes.find_images(id).await?;

        info!(home_id = %id, "Home updated");
        Ok(HomeDetail { home, images })
    }

    /// Removes a listing with its images and inquiries.
    pub async fn delete(&self, id: HomeId) -> AppResult<()> {
        let deleted = self.homes.delete_with_images(id).await?;
        info!(
            home_id = %id,
            images = deleted.images,
            messages = deleted.messages,
            "Home deleted"
        );
        Ok(())
    }

    /// The account that owns a listing.
    pub async fn realtor_of(&self, id: HomeId) -> AppResult<User> {
        self.homes
            .find_realtor(id)
            .await?
            .ok_or_else(|| home_not_found(id))
    }

    /// Rejects callers that do not own the listing.
    ///
    /// Admins pass only when `admin_override` is set.
    pub async fn ensure_owner(
        &self,
        ctx: &RequestContext,
        id: HomeId,
        admin_override: bool,
    ) -> AppResult<Home> {
        let home = self.find_home(id).await?;
        if home.realtor_id == ctx.user_id || (admin_override && ctx.is_admin()) {
            return Ok(home);
        }
        Err(AppError::unauthorized("You do not own this listing"))
    }

    /// Records a buyer's inquiry about a listing.
    pub async fn inquire(&self, ctx: &RequestContext, id: HomeId, text: &str) -> AppResult<Message> {
        let sender = self.load_caller(ctx).await?;
        if sender.role != UserRole::User {
            return Err(AppError::unauthorized("Only buyers may send inquiries"));
        }
        self.find_home(id).await?;
        let message = self
            .messages
            .create(&CreateMessage {
                text: text.to_string(),
                home_id: id,
                sender_id: ctx.user_id,
            })
            .await?;

        info!(home_id = %id, sender_id = %ctx.user_id, "Inquiry sent");
        Ok(message)
    }

    /// Inquiries about a listing, oldest first.
    pub async fn messages_for(&self, id: HomeId) -> AppResult<Vec<MessageWithSender>> {
        self.messages.find_by_home(id).await
    }

    async fn load_caller(&self, ctx: &RequestContext) -> AppResult<User> {
        self.users
            .find_by_id(ctx.user_id)
            .await?
            .ok_or_else(|| AppError::unauthorized("Unknown user"))
    }

    async fn find_home(&self, id: HomeId) -> AppResult<Home> {
        self.homes
            .find_by_id(id)
            .await?
            .ok_or_else(|| home_not_found(id))
    }
}

fn home_not_found(id: HomeId) -> AppError {
    AppError::not_found(format!("Home {id} not found"))
}
