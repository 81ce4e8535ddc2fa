//! In-process implementation of every store trait.
//!
//! Backs the `memory` database provider and the test suites. All tables
//! live behind one lock; multi-record writes are applied to a copy of the
//! tables that replaces the live state only when the whole unit succeeds.

use std::collections::BTreeMap;
use std::sync::atomic::{AtomicBool, Ordering};

use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::RwLock;

use realty_core::error::AppError;
use realty_core::result::AppResult;
use realty_core::types::{HomeId, ImageId, MessageId, UserId};
use realty_entity::home::{CreateHome, Home, HomeFilter, HomeSummary, Image, UpdateHome};
use realty_entity::message::{CreateMessage, Message, MessageWithSender};
use realty_entity::user::{CreateUser, User};

use crate::store::{DeletedHome, HomeStore, MessageStore, UserStore};

#[derive(Debug, Clone, Default)]
struct Tables {
    users: BTreeMap<UserId, User>,
    homes: BTreeMap<HomeId, Home>,
    images: BTreeMap<ImageId, Image>,
    messages: BTreeMap<MessageId, Message>,
    last_id: i64,
}

impl Tables {
    fn next_id(&mut self) -> i64 {
        self.last_id += 1;
        self.last_id
    }
}

/// Thread-safe in-memory record store.
#[derive(Debug, Default)]
pub struct MemoryStore {
    tables: RwLock<Tables>,
    fail_next_commit: AtomicBool,
}

impl MemoryStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Make the next multi-record write fail after its first step.
    ///
    /// Used to check that partial work is never observable.
    pub fn fail_next_commit(&self) {
        self.fail_next_commit.store(true, Ordering::SeqCst);
    }

    /// Number of images currently stored for a listing.
    pub async fn image_count(&self, id: HomeId) -> usize {
        let tables = self.tables.read().await;
        tables.images.values().filter(|i| i.home_id == id).count()
    }

    /// Number of inquiries currently stored for a listing.
    pub async fn message_count(&self, id: HomeId) -> usize {
        let tables = self.tables.read().await;
        tables.messages.values().filter(|m| m.home_id == id).count()
    }

    fn injected_failure(&self) -> AppResult<()> {
        if self.fail_next_commit.swap(false, Ordering::SeqCst) {
            return Err(AppError::database("Injected write failure"));
        }
        Ok(())
    }
}

#[async_trait]
impl UserStore for MemoryStore {
    async fn find_by_id(&self, id: UserId) -> AppResult<Option<User>> {
        Ok(self.tables.read().await.users.get(&id).cloned())
    }

    async fn find_by_email(&self, email: &str) -> AppResult<Option<User>> {
        let tables = self.tables.read().await;
        Ok(tables.users.values().find(|u| u.email == email).cloned())
    }

    async fn create(&self, data: &CreateUser) -> AppResult<User> {
        let mut tables = self.tables.write().await;
        if tables.users.values().any(|u| u.email == data.email) {
            return Err(AppError::conflict("Email already in use"));
        }

        let now = Utc::now();
        let user = User {
            id: UserId(tables.next_id()),
            email: data.email.clone(),
            password_hash: data.password_hash.clone(),
            name: data.name.clone(),
            phone: data.phone.clone(),
            role: data.role,
            created_at: now,
            updated_at: now,
        };
        tables.users.insert(user.id, user.clone());
        Ok(user)
    }

    async fn ping(&self) -> AppResult<bool> {
        Ok(true)
    }
}

#[async_trait]
impl HomeStore for MemoryStore {
    async fn search(&self, filter: &HomeFilter) -> AppResult<Vec<HomeSummary>> {
        let tables = self.tables.read().await;
        let summaries = tables
            .homes
            .values()
            .filter(|home| filter.matches(home))
            .map(|home| HomeSummary {
                home: home.clone(),
                // BTreeMap iteration is ordered by id, so the first hit is the lowest.
                image: tables
                    .images
                    .values()
                    .find(|i| i.home_id == home.id)
                    .map(|i| i.source.clone()),
            })
            .collect();
        Ok(summaries)
    }

    async fn find_by_id(&self, id: HomeId) -> AppResult<Option<Home>> {
        Ok(self.tables.read().await.homes.get(&id).cloned())
    }

    async fn find_images(&self, id: HomeId) -> AppResult<Vec<Image>> {
        let tables = self.tables.read().await;
        Ok(tables
            .images
            .values()
            .filter(|i| i.home_id == id)
            .cloned()
            .collect())
    }

    async fn create_with_images(&self, data: &CreateHome) -> AppResult<(Home, Vec<Image>)> {
        let mut live = self.tables.write().await;
        let mut tables = live.clone();

        let now = Utc::now();
        let home = Home {
            id: HomeId(tables.next_id()),
            address: data.address.clone(),
            city: data.city.clone(),
            number_of_bedrooms: data.number_of_bedrooms,
            number_of_bathrooms: data.number_of_bathrooms,
            price: data.price,
            land_size: data.land_size,
            property_type: data.property_type,
            listed_date: now,
            realtor_id: data.realtor_id,
            created_at: now,
            updated_at: now,
        };
        tables.homes.insert(home.id, home.clone());
        self.injected_failure()?;

        let mut images = Vec::with_capacity(data.images.len());
        for source in &data.images {
            let image = Image {
                id: ImageId(tables.next_id()),
                source: source.clone(),
                home_id: home.id,
            };
            tables.images.insert(image.id, image.clone());
            images.push(image);
        }

        *live = tables;
        Ok((home, images))
    }

    async fn update(&self, id: HomeId, data: &UpdateHome) -> AppResult<Option<Home>> {
        let mut tables = self.tables.write().await;
        let Some(home) = tables.homes.get_mut(&id) else {
            return Ok(None);
        };
        data.apply_to(home);
        home.updated_at = Utc::now();
        Ok(Some(home.clone()))
    }

    async fn delete_with_images(&self, id: HomeId) -> AppResult<DeletedHome> {
        let mut live = self.tables.write().await;
        if !live.homes.contains_key(&id) {
            return Err(AppError::not_found(format!("Home {id} not found")));
        }
        let mut tables = live.clone();

        let before = tables.images.len();
        tables.images.retain(|_, i| i.home_id != id);
        let images = (before - tables.images.len()) as u64;
        self.injected_failure()?;

        let before = tables.messages.len();
        tables.messages.retain(|_, m| m.home_id != id);
        let messages = (before - tables.messages.len()) as u64;

        tables.homes.remove(&id);

        *live = tables;
        Ok(DeletedHome { images, messages })
    }

    async fn find_realtor(&self, id: HomeId) -> AppResult<Option<User>> {
        let tables = self.tables.read().await;
        Ok(tables
            .homes
            .get(&id)
            .and_then(|home| tables.users.get(&home.realtor_id))
            .cloned())
    }
}

#[async_trait]
impl MessageStore for MemoryStore {
    async fn create(&self, data: &CreateMessage) -> AppResult<Message> {
        let mut tables = self.tables.write().await;
        let message = Message {
            id: MessageId(tables.next_id()),
            text: data.text.clone(),
            home_id: data.home_id,
            sender_id: data.sender_id,
            created_at: Utc::now(),
        };
        tables.messages.insert(message.id, message.clone());
        Ok(message)
    }

    async fn find_by_home(&self, id: HomeId) -> AppResult<Vec<MessageWithSender>> {
        let tables = self.tables.read().await;
        let mut rows: Vec<MessageWithSender> = tables
            .messages
            .values()
            .filter(|m| m.home_id == id)
            .filter_map(|m| {
                let sender = tables.users.get(&m.sender_id)?;
                Some(MessageWithSender {
                    message: m.clone(),
                    sender_name: sender.name.clone(),
                    sender_email: sender.email.clone(),
                    sender_phone: sender.phone.clone(),
                })
            })
            .collect();
        rows.sort_by_key(|row| (row.message.created_at, row.message.id));
        Ok(rows)
    }
}
