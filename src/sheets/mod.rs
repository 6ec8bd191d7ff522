//! # Google Sheets Transport
//!
//! REST access to a spreadsheet for the client store, authorized with a
//! service-account key.

pub mod auth;
pub mod client;
pub mod range;

pub use auth::{ServiceAccountKey, ServiceAccountTokenSource, StaticToken, TokenSource};
pub use client::{http_client, GoogleSheetsClient, DEFAULT_API_BASE, DEFAULT_TIMEOUT};
pub use range::{client_range, quote_sheet_name};
