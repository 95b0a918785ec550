//! Redis-backed `ListStore`.
//!
//! Holds the single long-lived connection of the process. Commands from concurrent
//! requests are pipelined over it by the connection's driver task, which matches
//! every reply to the command that sent it. A caller that is dropped mid-command
//! (an HTTP client hanging up) leaves its reply to be read and discarded by the
//! driver, so later commands never see it.

use async_trait::async_trait;
use redis::aio::MultiplexedConnection;
use redis::AsyncCommands;
use std::time::Duration;

use super::client::ListStore;
use super::error::{ConnectError, StoreError};
use crate::config::store_url;

pub struct RedisStore {
    conn: MultiplexedConnection,
}

impl RedisStore {
    /// Connects to the store at `addr` (`host:port`, an empty host means localhost).
    ///
    /// Gives up once `timeout` elapses without an established connection. A fresh
    /// connection must answer `INFO SERVER` before it is handed out; the reply is
    /// logged so the operator can see which server was reached.
    pub async fn connect(addr: &str, timeout: Duration) -> Result<Self, ConnectError> {
        tracing::info!("Connecting to store at {}...", addr);

        let client = redis::Client::open(store_url(addr)).map_err(|source| {
            ConnectError::InvalidAddress {
                addr: addr.to_string(),
                source,
            }
        })?;

        let connecting = client.get_multiplexed_tokio_connection();
        let mut conn = match tokio::time::timeout(timeout, connecting).await {
            Ok(Ok(conn)) => conn,
            Ok(Err(source)) => {
                return Err(ConnectError::Unreachable {
                    addr: addr.to_string(),
                    source,
                });
            }
            Err(_) => {
                return Err(ConnectError::Timeout {
                    addr: addr.to_string(),
                    timeout,
                });
            }
        };

        let info: String = redis::cmd("INFO")
            .arg("SERVER")
            .query_async(&mut conn)
            .await
            .map_err(|source| ConnectError::Handshake {
                addr: addr.to_string(),
                source,
            })?;

        tracing::info!("Connected to store at {}:\n{}", addr, info.trim_end());

        Ok(Self { conn })
    }

    // Clones share the one underlying socket and driver.
    fn conn(&self) -> MultiplexedConnection {
        self.conn.clone()
    }
}

#[async_trait]
impl ListStore for RedisStore {
    async fn len(&self, key: &str) -> Result<usize, StoreError> {
        let count: usize = self.conn().llen(key).await?;
        Ok(count)
    }

    async fn append_all(&self, key: &str, values: &[&str]) -> Result<usize, StoreError> {
        let count: usize = self.conn().rpush(key, values).await?;
        Ok(count)
    }

    async fn delete(&self, key: &str) -> Result<(), StoreError> {
        let _removed: usize = self.conn().del(key).await?;
        Ok(())
    }

    async fn read_at(&self, key: &str, index: usize) -> Result<String, StoreError> {
        let value: Option<String> = self.conn().lindex(key, index as isize).await?;
        value.ok_or_else(|| StoreError::IndexOutOfRange {
            key: key.to_string(),
            index,
        })
    }

    async fn ping(&self) -> Result<String, StoreError> {
        let mut conn = self.conn();
        let pong: String = redis::cmd("PING").query_async(&mut conn).await?;
        Ok(pong)
    }
}
