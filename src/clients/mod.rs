//! # Client Records
//!
//! Record types and creation-input validation.

pub mod record;
pub mod validation;

pub use record::{today, today_string, ClientRecord, NewClient, DATE_FORMAT};
pub use validation::{CreateClientRequest, NAME_REQUIRED};
