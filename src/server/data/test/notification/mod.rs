use crate::server::{
    data::notification::NotificationRepository,
    error::AppError,
    model::{
        broadcast::DeliveryError,
        notification::{CreateNotificationParam, FinalizeNotificationParam, NotificationStatus},
    },
};
use test_utils::{builder::TestBuilder, factory};

mod create;
mod finalize;
mod find_by_id;
mod mark_in_progress;

fn create_param(total: i32) -> CreateNotificationParam {
    CreateNotificationParam {
        title: Some("Schedule".to_string()),
        message: "Pool closed on Friday".to_string(),
        photo_url: None,
        filter_type: "all".to_string(),
        total_recipients: total,
    }
}
