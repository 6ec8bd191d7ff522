//! clientbook - client records over HTTP, stored in a spreadsheet
//!
//! The API lists and creates client records. Records live in a Google
//! Sheets range when a spreadsheet is configured, otherwise in process.

pub mod cli;
pub mod clients;
pub mod config;
pub mod http_server;
pub mod observability;
pub mod sheets;
pub mod store;
