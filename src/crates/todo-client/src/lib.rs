//! Client for the todo tracker API
//!
//! [`TodoApiClient`] issues the HTTP calls; [`TodoBoard`] keeps one page of
//! results in sync with the server and reports outcomes as
//! [`Notification`]s.
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use todo_client::{notification_channel, ClientConfig, TodoApiClient, TodoBoard};
//!
//! let api = TodoApiClient::new(ClientConfig::from_env())?;
//! let (notifier, mut notifications) = notification_channel();
//! let board = TodoBoard::new(Arc::new(api), notifier);
//! board.refresh().await?;
//! ```

pub mod api;
pub mod board;
pub mod config;
pub mod error;
pub mod notify;
pub mod reconcile;

pub use api::{TodoApi, TodoApiClient};
pub use board::{BoardState, ConsistencyMode, TodoBoard};
pub use config::ClientConfig;
pub use error::{ClientError, ClientResult};
pub use notify::{notification_channel, Notification, NotificationLevel, Notifier};
