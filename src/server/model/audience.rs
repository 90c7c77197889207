//! Audience selection models.
//!
//! A broadcast audience is described by a named filter (`FilterSpec`) and resolved by the
//! audience repository into a list of `Recipient`s reachable through Telegram.

use crate::model::notification::{FilterParamsDto, RecipientDto};

/// Look-ahead window for `expiring_soon` when no `days` parameter is given.
pub const DEFAULT_EXPIRING_DAYS: i64 = 7;
/// Look-back window for `no_visits` when no `days` parameter is given.
pub const DEFAULT_NO_VISIT_DAYS: i64 = 30;
/// Look-back window for `new_clients` when no `days` parameter is given.
pub const DEFAULT_NEW_CLIENT_DAYS: i64 = 7;

/// Raw filter parameters as supplied by the caller.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterParams {
    pub days: Option<i64>,
    pub tariff_id: Option<i32>,
}

impl FilterParams {
    pub fn from_dto(dto: FilterParamsDto) -> Self {
        Self {
            days: dto.days,
            tariff_id: dto.tariff_id,
        }
    }
}

/// Named predicate selecting a subset of clients.
///
/// Unknown names are kept as `Unknown` so they resolve to an empty audience instead of
/// failing the request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FilterSpec {
    /// Every client with a linked Telegram id.
    All,
    /// Clients whose active subscription ends within `[now, now + days]`.
    ExpiringSoon { days: i64 },
    /// Clients with no visit on or after `now - days`.
    NoVisits { days: i64 },
    /// Clients with an active subscription on the tariff. `None` selects nobody.
    ByTariff { tariff_id: Option<i32> },
    /// Clients registered on or after `now - days`.
    NewClients { days: i64 },
    /// Clients holding at least one frozen subscription.
    FrozenSubscriptions,
    /// Any filter name this build does not recognise.
    Unknown(String),
}

impl FilterSpec {
    /// Builds a filter from its wire name and parameters, applying per-filter defaults.
    ///
    /// # Arguments
    /// - `name` - Filter name such as `expiring_soon`
    /// - `params` - Optional `days` / `tariff_id` values
    ///
    /// # Returns
    /// - `FilterSpec` - Parsed filter; never fails
    pub fn from_name(name: &str, params: &FilterParams) -> Self {
        match name {
            "all" => Self::All,
            "expiring_soon" => Self::ExpiringSoon {
                days: params.days.unwrap_or(DEFAULT_EXPIRING_DAYS),
            },
            "no_visits" => Self::NoVisits {
                days: params.days.unwrap_or(DEFAULT_NO_VISIT_DAYS),
            },
            "by_tariff" => Self::ByTariff {
                tariff_id: params.tariff_id,
            },
            "new_clients" => Self::NewClients {
                days: params.days.unwrap_or(DEFAULT_NEW_CLIENT_DAYS),
            },
            "frozen_subscriptions" => Self::FrozenSubscriptions,
            other => Self::Unknown(other.to_string()),
        }
    }

    /// Wire name of the filter, as stored on campaign records.
    pub fn name(&self) -> &str {
        match self {
            Self::All => "all",
            Self::ExpiringSoon { .. } => "expiring_soon",
            Self::NoVisits { .. } => "no_visits",
            Self::ByTariff { .. } => "by_tariff",
            Self::NewClients { .. } => "new_clients",
            Self::FrozenSubscriptions => "frozen_subscriptions",
            Self::Unknown(name) => name,
        }
    }
}

/// One addressable client.
///
/// Identity is the Telegram id; name and phone are carried for reporting only.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Recipient {
    pub telegram_id: String,
    pub name: String,
    pub phone: String,
}

impl Recipient {
    /// Converts a client entity into a recipient.
    ///
    /// # Returns
    /// - `Some(Recipient)` - Client has a linked Telegram id
    /// - `None` - Client cannot be messaged
    pub fn from_entity(entity: entity::client::Model) -> Option<Self> {
        let telegram_id = entity.telegram_id?;

        Some(Self {
            telegram_id,
            name: entity.name,
            phone: entity.phone,
        })
    }

    pub fn into_dto(self) -> RecipientDto {
        RecipientDto {
            telegram_id: self.telegram_id,
            name: self.name,
            phone: self.phone,
        }
    }
}
