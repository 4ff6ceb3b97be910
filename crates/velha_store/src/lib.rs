//! Persistence and client plumbing for 4x4 tic-tac-toe.
//!
//! # Architecture
//!
//! - **Document**: the JSON game-state document exchanged with a store
//! - **Store**: the [`GameStore`] seam, with in-memory and HTTP backends
//! - **Stub**: a local HTTP endpoint serving any store
//! - **Client**: [`GameClient`] runs the move flow (load, play, score, save)
//! - **Config**: endpoint and timeout settings from TOML and the environment
//!
//! # Example
//!
//! ```no_run
//! use velha_store::{ClientConfig, GameClient, HttpGameStore};
//!
//! # async fn example() -> anyhow::Result<()> {
//! let config = ClientConfig::default();
//! let store = HttpGameStore::from_config(&config)?;
//! let mut client = GameClient::connect(store).await;
//! let result = client.play(5).await?;
//! println!("{}", result);
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod client;
mod config;
mod document;
mod error;
mod http_store;
mod store;
pub mod stub;

pub use client::GameClient;
pub use config::{ClientConfig, ConfigError, ENDPOINT_ENV};
pub use document::{GameDocument, Verdict};
pub use error::StoreError;
pub use http_store::HttpGameStore;
pub use store::{GameStore, MemoryStore};
