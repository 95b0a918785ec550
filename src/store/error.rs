use std::time::Duration;

use thiserror::Error;

/// Failure of a single store command.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error(transparent)]
    Redis(#[from] redis::RedisError),

    #[error("index {index} is out of range for list '{key}'")]
    IndexOutOfRange { key: String, index: usize },

    #[error("store connection is closed")]
    Disconnected,
}

/// Failure to establish the store connection at startup.
#[derive(Debug, Error)]
pub enum ConnectError {
    #[error("invalid store address '{addr}': {source}")]
    InvalidAddress {
        addr: String,
        #[source]
        source: redis::RedisError,
    },

    #[error("store at {addr} is unreachable: {source}")]
    Unreachable {
        addr: String,
        #[source]
        source: redis::RedisError,
    },

    #[error("no connection to store at {addr} after {timeout:?}")]
    Timeout { addr: String, timeout: Duration },

    #[error("store at {addr} did not answer the handshake: {source}")]
    Handshake {
        addr: String,
        #[source]
        source: redis::RedisError,
    },
}
