//! credidesk_client - CLI client for the credidesk API.

pub mod cli;
pub mod client;
pub mod config;
pub mod error;
pub mod output;
pub mod token;
pub mod url;

pub use client::CredideskClient;
pub use config::ClientConfig;
pub use error::{ClientError, Result};
pub use token::TokenStore;
