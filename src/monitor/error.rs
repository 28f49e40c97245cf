//! Monitor Error Types

#[derive(Debug, thiserror::Error)]
pub enum MonitorError {
    #[error("Queue already registered: {name}")]
    AlreadyRegistered { name: String },

    #[error("Queue is full (max size: {max_size})")]
    QueueFull { max_size: usize },
}

/// Result type for monitor operations
pub type MonitorResult<T> = Result<T, MonitorError>;
