use crate::server::{
    data::audience::AudienceRepository,
    model::audience::{FilterParams, FilterSpec},
};
use chrono::{Duration, Utc};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod all;
mod by_tariff;
mod empty_store;
mod expiring_soon;
mod frozen_subscriptions;
mod no_visits;

fn telegram_ids(recipients: &[crate::server::model::audience::Recipient]) -> Vec<String> {
    recipients.iter().map(|r| r.telegram_id.clone()).collect()
}
