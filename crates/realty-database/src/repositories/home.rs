//! Home listing and image repository implementation.

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::debug;

use realty_core::error::{AppError, ErrorKind};
use realty_core::result::AppResult;
use realty_core::types::HomeId;
use realty_entity::home::{CreateHome, Home, HomeFilter, HomeSummary, Image, UpdateHome};
use realty_entity::user::User;

use crate::store::{DeletedHome, HomeStore};

/// Repository for listings and their images.
#[derive(Debug, Clone)]
pub struct HomeRepository {
    pool: PgPool,
}

impl HomeRepository {
    /// Create a new home repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl HomeStore for HomeRepository {
    async fn search(&self, filter: &HomeFilter) -> AppResult<Vec<HomeSummary>> {
        sqlx::query_as::<_, HomeSummary>(
            r#"SELECT h.*, first_image.source AS image
               FROM homes h
               LEFT JOIN LATERAL (
                   SELECT i.source FROM images i
                   WHERE i.home_id = h.id
                   ORDER BY i.id ASC
                   LIMIT 1
               ) first_image ON TRUE
               WHERE ($1::TEXT IS NULL OR h.city = $1)
                 AND ($2::DOUBLE PRECISION IS NULL OR h.price >= $2)
                 AND ($3::DOUBLE PRECISION IS NULL OR h.price <= $3)
                 AND ($4::property_type IS NULL OR h.property_type = $4)
               ORDER BY h.id ASC"#,
        )
        .bind(&filter.city)
        .bind(filter.min_price)
        .bind(filter.max_price)
        .bind(filter.property_type)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to search homes", e))
    }

    async fn find_by_id(&self, id: HomeId) -> AppResult<Option<Home>> {
        sqlx::query_as::<_, Home>("SELECT * FROM homes WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to find home", e))
    }

    async fn find_images(&self, id: HomeId) -> AppResult<Vec<Image>> {
        sqlx::query_as::<_, Image>("SELECT * FROM images WHERE home_id = $1 ORDER BY id ASC")
            .bind(id)
            .fetch_all(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to list home images", e)
            })
    }

    async fn create_with_images(&self, data: &CreateHome) -> AppResult<(Home, Vec<Image>)> {
        let mut tx = self.pool.begin().await.map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to begin transaction", e)
        })?;

        let home = sqlx::query_as::<_, Home>(
            r#"INSERT INTO homes (address, city, number_of_bedrooms, number_of_bathrooms,
                                  price, land_size, property_type, realtor_id)
               VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
               RETURNING *"#,
        )
        .bind(&data.address)
        .bind(&data.city)
        .bind(data.number_of_bedrooms)
        .bind(data.number_of_bathrooms)
        .bind(data.price)
        .bind(data.land_size)
        .bind(data.property_type)
        .bind(data.realtor_id)
        .fetch_one(&mut *tx)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to create home", e))?;

        let mut images = Vec::with_capacity(data.images.len());
        for source in &data.images {
            let image = sqlx::query_as::<_, Image>(
                "INSERT INTO images (source, home_id) VALUES ($1, $2) RETURNING *",
            )
            .bind(source)
            .bind(home.id)
            .fetch_one(&mut *tx)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to create home image", e)
            })?;
            images.push(image);
        }

        tx.commit().await.map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to commit home creation", e)
        })?;

        Ok((home, images))
    }

    async fn update(&self, id: HomeId, data: &UpdateHome) -> AppResult<Option<Home>> {
        sqlx::query_as::<_, Home>(
            r#"UPDATE homes SET
                   address = COALESCE($2, address),
                   city = COALESCE($3, city),
                   number_of_bedrooms = COALESCE($4, number_of_bedrooms),
                   number_of_bathrooms = COALESCE($5, number_of_bathrooms),
                   price = COALESCE($6, price),
                   land_size = COALESCE($7, land_size),
                   property_type = COALESCE($8, property_type),
                   updated_at = NOW()
               WHERE id = $1
               RETURNING *"#,
        )
        .bind(id)
        .bind(&data.address)
        .bind(&data.city)
        .bind(data.number_of_bedrooms)
        .bind(data.number_of_bathrooms)
        .bind(data.price)
        .bind(data.land_size)
        .bind(data.property_type)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to update home", e))
    }

    async fn delete_with_images(&self, id: HomeId) -> AppResult<DeletedHome> {
        let mut tx = self.pool.begin().await.map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to begin transaction", e)
        })?;

        let images = sqlx::query("DELETE FROM images WHERE home_id = $1")
            .bind(id)
            .execute(&mut *tx)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to delete home images", e)
            })?
            .rows_affected();

        let messages = sqlx::query("DELETE FROM messages WHERE home_id = $1")
            .bind(id)
            .execute(&mut *tx)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to delete home messages", e)
            })?
            .rows_affected();

        let homes = sqlx::query("DELETE FROM homes WHERE id = $1")
            .bind(id)
            .execute(&mut *tx)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to delete home", e))?
            .rows_affected();

        if homes == 0 {
            // Dropping the transaction rolls it back.
            return Err(AppError::not_found(format!("Home {id} not found")));
        }

        tx.commit().await.map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to commit home deletion", e)
        })?;

        debug!(home_id = %id, images, messages, "Deleted home");
        Ok(DeletedHome { images, messages })
    }

    async fn find_realtor(&self, id: HomeId) -> AppResult<Option<User>> {
        sqlx::query_as::<_, User>(
            r#"SELECT u.* FROM users u
               JOIN homes h ON h.realtor_id = u.id
               WHERE h.id = $1"#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to find home realtor", e))
    }
}
