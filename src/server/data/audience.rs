//! Audience data repository.
//!
//! This module provides the `AudienceRepository`, the single place where a `FilterSpec` is
//! turned into database predicates. Every filter selects whole clients (so a client with
//! several matching subscriptions appears once) and only clients with a linked Telegram id.

use chrono::{DateTime, Duration, Utc};
use sea_orm::{
    sea_query::SelectStatement, ColumnTrait, Condition, DatabaseConnection, DbErr, EntityTrait,
    QueryFilter, QueryOrder, QuerySelect, QueryTrait, Select,
};

use crate::server::model::audience::{FilterSpec, Recipient};

/// Widest look-ahead or look-back window accepted, in days. Larger values are clamped.
pub const MAX_WINDOW_DAYS: i64 = 36_500;

const STATUS_ACTIVE: &str = "active";
const STATUS_FROZEN: &str = "frozen";

/// Repository resolving broadcast audiences.
///
/// All queries are read-only and ordered by client id, so identical store state always
/// yields the identical recipient sequence.
pub struct AudienceRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> AudienceRepository<'a> {
    /// Creates a new AudienceRepository instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    ///
    /// # Returns
    /// - `AudienceRepository` - New repository instance
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Resolves a filter into the list of recipients it selects.
    ///
    /// `by_tariff` without a tariff id and unknown filters select nobody without touching
    /// the database. Non-positive `days` produce a zero-width or inverted window, which is
    /// a valid (usually empty) selection rather than an error.
    ///
    /// # Arguments
    /// - `filter` - The audience filter
    /// - `now` - Reference time for all date windows
    ///
    /// # Returns
    /// - `Ok(Vec<Recipient>)` - Matching recipients ordered by client id
    /// - `Err(DbErr)` - Database error during query
    pub async fn resolve(
        &self,
        filter: &FilterSpec,
        now: DateTime<Utc>,
    ) -> Result<Vec<Recipient>, DbErr> {
        let query = match filter {
            FilterSpec::All => reachable_clients(),
            FilterSpec::ExpiringSoon { days } => {
                let until = shift_days(now, *days);
                reachable_clients().filter(
                    entity::client::Column::Id.in_subquery(subscribed_client_ids(
                        Condition::all()
                            .add(entity::subscription::Column::Status.eq(STATUS_ACTIVE))
                            .add(entity::subscription::Column::EndDate.gte(now))
                            .add(entity::subscription::Column::EndDate.lte(until)),
                    )),
                )
            }
            FilterSpec::NoVisits { days } => {
                let since = shift_days(now, -*days);
                reachable_clients()
                    .filter(entity::client::Column::Id.not_in_subquery(visited_client_ids(since)))
            }
            FilterSpec::ByTariff {
                tariff_id: Some(tariff_id),
            } => reachable_clients().filter(entity::client::Column::Id.in_subquery(
                subscribed_client_ids(
                    Condition::all()
                        .add(entity::subscription::Column::Status.eq(STATUS_ACTIVE))
                        .add(entity::subscription::Column::TariffId.eq(*tariff_id)),
                ),
            )),
            FilterSpec::NewClients { days } => {
                let since = shift_days(now, -*days);
                reachable_clients().filter(entity::client::Column::CreatedAt.gte(since))
            }
            FilterSpec::FrozenSubscriptions => {
                reachable_clients().filter(entity::client::Column::Id.in_subquery(
                    subscribed_client_ids(
                        Condition::all()
                            .add(entity::subscription::Column::Status.eq(STATUS_FROZEN)),
                    ),
                ))
            }
            FilterSpec::ByTariff { tariff_id: None } | FilterSpec::Unknown(_) => {
                return Ok(Vec::new());
            }
        };

        let clients = query.all(self.db).await?;

        Ok(clients
            .into_iter()
            .filter_map(Recipient::from_entity)
            .collect())
    }
}

/// Clients that can be messaged, in stable order.
fn reachable_clients() -> Select<entity::client::Entity> {
    entity::prelude::Client::find()
        .filter(entity::client::Column::TelegramId.is_not_null())
        .order_by_asc(entity::client::Column::Id)
}

/// `SELECT DISTINCT client_id FROM subscription WHERE <condition>`
fn subscribed_client_ids(condition: Condition) -> SelectStatement {
    entity::prelude::Subscription::find()
        .select_only()
        .column(entity::subscription::Column::ClientId)
        .distinct()
        .filter(condition)
        .into_query()
}

/// `SELECT DISTINCT client_id FROM visit WHERE visited_at >= since`
fn visited_client_ids(since: DateTime<Utc>) -> SelectStatement {
    entity::prelude::Visit::find()
        .select_only()
        .column(entity::visit::Column::ClientId)
        .distinct()
        .filter(entity::visit::Column::VisitedAt.gte(since))
        .into_query()
}

fn shift_days(now: DateTime<Utc>, days: i64) -> DateTime<Utc> {
    now + Duration::days(days.clamp(-MAX_WINDOW_DAYS, MAX_WINDOW_DAYS))
}
