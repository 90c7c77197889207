//! Campaign record repository.
//!
//! Persists the `notification` rows that track each broadcast. Rows are created once in
//! `pending`, moved to `in_progress`, and finalized into `completed` or `failed`; this
//! repository never deletes them.

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, DatabaseConnection, EntityTrait, PaginatorTrait, QueryOrder,
};

use crate::server::{
    error::AppError,
    model::notification::{
        CreateNotificationParam, FinalizeNotificationParam, Notification, NotificationStatus,
    },
};

pub struct NotificationRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> NotificationRepository<'a> {
    /// Creates a new NotificationRepository instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    ///
    /// # Returns
    /// - `NotificationRepository` - New repository instance
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a campaign record in `pending` state.
    ///
    /// All recipients start as pending; success and failure counters start at zero.
    ///
    /// # Arguments
    /// - `param` - Message content, filter name and recipient total
    ///
    /// # Returns
    /// - `Ok(Notification)` - The created record
    /// - `Err(AppError::DbErr)` - Database error during insert
    pub async fn create(&self, param: CreateNotificationParam) -> Result<Notification, AppError> {
        let entity = entity::notification::ActiveModel {
            title: ActiveValue::Set(param.title),
            message: ActiveValue::Set(param.message),
            photo_url: ActiveValue::Set(param.photo_url),
            filter_type: ActiveValue::Set(param.filter_type),
            status: ActiveValue::Set(NotificationStatus::Pending.as_str().to_string()),
            total_recipients: ActiveValue::Set(param.total_recipients),
            success_count: ActiveValue::Set(0),
            failed_count: ActiveValue::Set(0),
            pending_count: ActiveValue::Set(param.total_recipients),
            error_details: ActiveValue::Set("[]".to_string()),
            created_at: ActiveValue::Set(Utc::now()),
            completed_at: ActiveValue::Set(None),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Notification::from_entity(entity)
    }

    /// Moves a record to `in_progress`. Counters are left untouched.
    ///
    /// # Arguments
    /// - `id` - ID of the campaign record
    ///
    /// # Returns
    /// - `Ok(Notification)` - The updated record
    /// - `Err(AppError::DbErr)` - Record missing or database error during update
    pub async fn mark_in_progress(&self, id: i32) -> Result<Notification, AppError> {
        let entity = entity::notification::ActiveModel {
            id: ActiveValue::Unchanged(id),
            status: ActiveValue::Set(NotificationStatus::InProgress.as_str().to_string()),
            ..Default::default()
        }
        .update(self.db)
        .await?;

        Notification::from_entity(entity)
    }

    /// Writes the final counters and status of a record.
    ///
    /// Sets `pending_count` to zero and stamps `completed_at`.
    ///
    /// # Arguments
    /// - `id` - ID of the campaign record
    /// - `param` - Terminal status, counters and per-recipient errors
    ///
    /// # Returns
    /// - `Ok(Notification)` - The finalized record
    /// - `Err(AppError::DbErr)` - Record missing or database error during update
    /// - `Err(AppError::InternalError)` - Status is not terminal or error details could not
    ///   be encoded
    pub async fn finalize(
        &self,
        id: i32,
        param: FinalizeNotificationParam,
    ) -> Result<Notification, AppError> {
        if !param.status.is_terminal() {
            return Err(AppError::InternalError(format!(
                "Cannot finalize campaign record {} as {}",
                id, param.status
            )));
        }

        let error_details = serde_json::to_string(&param.errors).map_err(|e| {
            AppError::InternalError(format!("Failed to encode error details: {}", e))
        })?;

        let entity = entity::notification::ActiveModel {
            id: ActiveValue::Unchanged(id),
            status: ActiveValue::Set(param.status.as_str().to_string()),
            success_count: ActiveValue::Set(param.success_count),
            failed_count: ActiveValue::Set(param.failed_count),
            pending_count: ActiveValue::Set(0),
            error_details: ActiveValue::Set(error_details),
            completed_at: ActiveValue::Set(Some(Utc::now())),
            ..Default::default()
        }
        .update(self.db)
        .await?;

        Notification::from_entity(entity)
    }

    /// Finds a campaign record by ID.
    ///
    /// # Returns
    /// - `Ok(Some(Notification))` - Record found
    /// - `Ok(None)` - No record with that ID
    /// - `Err(AppError)` - Database error or malformed stored record
    pub async fn find_by_id(&self, id: i32) -> Result<Option<Notification>, AppError> {
        let entity = entity::prelude::Notification::find_by_id(id)
            .one(self.db)
            .await?;

        entity.map(Notification::from_entity).transpose()
    }

    /// Gets campaign records with pagination, newest first.
    ///
    /// # Arguments
    /// - `page` - Zero-indexed page number
    /// - `per_page` - Number of records per page
    ///
    /// # Returns
    /// - `Ok((notifications, total))` - Records for the page and total record count
    /// - `Err(AppError)` - Database error or malformed stored record
    pub async fn get_paginated(
        &self,
        page: u64,
        per_page: u64,
    ) -> Result<(Vec<Notification>, u64), AppError> {
        let paginator = entity::prelude::Notification::find()
            .order_by_desc(entity::notification::Column::CreatedAt)
            .order_by_desc(entity::notification::Column::Id)
            .paginate(self.db, per_page);

        let total = paginator.num_items().await?;
        let entities = paginator.fetch_page(page).await?;
        let notifications = entities
            .into_iter()
            .map(Notification::from_entity)
            .collect::<Result<Vec<_>, _>>()?;

        Ok((notifications, total))
    }
}
