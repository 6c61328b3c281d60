//! HTTP client SDK for the Sqwiggle team chat API.
//!
//! This crate provides a typed client for the Sqwiggle REST API. Every call
//! is one authenticated HTTP round trip: no caching, no retries, and no
//! automatic pagination.
//!
//! # Example
//!
//! ```no_run
//! use sqwiggle::{CreateMessageRequest, Result, SqwiggleClient};
//!
//! # async fn example() -> Result<()> {
//! // Create a client
//! let client = SqwiggleClient::builder()
//!     .api_key("cli_8d0f670196e5c63db53168a3d39bf2ce")
//!     .build()?;
//!
//! // Read the latest messages
//! for message in client.messages().list(0, 50).await? {
//!     println!("{}: {}", message.author.name, message.text);
//! }
//!
//! // Post a message
//! let request = CreateMessageRequest::new(48914, "<b>wow</b>")
//!     .with_format("html")
//!     .with_parse(true);
//! let message = client.messages().create(request).await?;
//! println!("Posted message {}", message.id);
//!
//! // Server-reported errors keep the body's fields
//! match client.streams().get(1).await {
//!     Err(sqwiggle::Error::Api { error, .. }) => println!("{}", error.message),
//!     other => println!("{:?}", other),
//! }
//! # Ok(())
//! # }
//! ```
//!
//! # API Coverage
//!
//! - **Messages**: list, get, create, update, delete
//! - **Streams**: list, get, create, update, delete
//! - **Users**: list, get, update, delete
//! - **Organizations**: list, get, update
//! - **Conversations**: list, get
//! - **Invites**: list, get, create, delete
//! - **Attachments**: list, get, update, delete
//! - **Info**: raw passthrough

pub mod api;
pub mod client;
pub mod config;
pub mod error;
pub mod timestamp;
pub mod types;

mod lenient;

pub use client::{ClientBuilder, SqwiggleClient, DEFAULT_BASE_URL};
pub use config::{ClientConfig, ConfigError};
pub use error::{ApiError, Error, ErrorType, Result};
pub use types::*;
