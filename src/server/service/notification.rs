//! Campaign history queries.

use sea_orm::DatabaseConnection;

use crate::server::{
    data::notification::NotificationRepository,
    error::AppError,
    model::notification::{GetNotificationsParam, Notification, PaginatedNotifications},
};

pub struct NotificationService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> NotificationService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Retrieves one campaign record.
    ///
    /// # Returns
    /// - `Ok(Notification)` - Record found
    /// - `Err(AppError::NotFound)` - No record with that ID
    /// - `Err(AppError::DbErr)` - Database error during query
    pub async fn get_notification(&self, id: i32) -> Result<Notification, AppError> {
        let repo = NotificationRepository::new(self.db);

        repo.find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Notification {} not found", id)))
    }

    /// Retrieves campaign history with pagination, newest first.
    ///
    /// # Arguments
    /// - `param` - Zero-indexed page and page size (at least 1)
    ///
    /// # Returns
    /// - `Ok(PaginatedNotifications)` - Records for the page with pagination metadata
    /// - `Err(AppError::DbErr)` - Database error during query
    pub async fn get_notifications(
        &self,
        param: GetNotificationsParam,
    ) -> Result<PaginatedNotifications, AppError> {
        let repo = NotificationRepository::new(self.db);

        let (notifications, total_items) =
            repo.get_paginated(param.page, param.per_page).await?;

        let total_pages = total_items.div_ceil(param.per_page.max(1));

        Ok(PaginatedNotifications {
            notifications,
            total: total_items,
            page: param.page,
            per_page: param.per_page,
            total_pages,
        })
    }
}
