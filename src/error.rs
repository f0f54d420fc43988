// src/error.rs
use reqwest::StatusCode;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid value for {name}: {value:?}")]
    InvalidVar { name: &'static str, value: String },
    #[error("{name} must be an absolute http(s) url, got {value:?}")]
    InvalidUrl { name: &'static str, value: String },
}

/// Failure to obtain a price. A lookup that succeeds but finds nothing is
/// `PriceLookup::NotFound`, not an error.
#[derive(Debug, Error)]
pub enum PriceError {
    #[error("pricing request failed: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("pricing response could not be decoded: {0}")]
    Decode(#[from] serde_json::Error),
    #[error("pricing endpoint cannot take a path: {0}")]
    InvalidEndpoint(String),
}

#[derive(Debug, Error)]
pub enum ReplyError {
    #[error("send message request failed: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("unexpected status {0}")]
    UnexpectedStatus(StatusCode),
    #[error("chat api endpoint cannot take a path: {0}")]
    InvalidEndpoint(String),
}
