pub use super::client::Entity as Client;
pub use super::notification::Entity as Notification;
pub use super::subscription::Entity as Subscription;
pub use super::tariff::Entity as Tariff;
pub use super::visit::Entity as Visit;
