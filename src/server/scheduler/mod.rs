pub mod subscription_reminders;
