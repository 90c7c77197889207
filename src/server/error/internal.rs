use thiserror::Error;

/// Internal issues with the codebase indicating unexpected behavior & possible bugs
#[derive(Error, Debug)]
pub enum InternalError {
    /// A stored campaign record carries a status this build does not know.
    ///
    /// Results in a 500 Internal Server Error with a generic message returned
    /// to client.
    #[error("Unknown notification status '{value}'")]
    InvalidNotificationStatus {
        /// The stored status value
        value: String,
    },

    /// A stored campaign record's error details column is not valid JSON.
    ///
    /// Results in a 500 Internal Server Error with a generic message returned
    /// to client.
    #[error("Failed to decode error details of notification {notification_id}: {source}")]
    InvalidErrorDetails {
        /// ID of the affected campaign record
        notification_id: i32,
        /// The underlying decode error
        #[source]
        source: serde_json::Error,
    },
}
