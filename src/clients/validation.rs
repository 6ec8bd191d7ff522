//! # Creation Input Validation
//!
//! The only rule is that a name is present and non-empty. Nothing here
//! touches a store.

use serde::Deserialize;

use super::record::NewClient;

/// Message returned when the name is missing
pub const NAME_REQUIRED: &str = "Name is required";

/// Raw creation payload as it arrives from a caller.
///
/// `name` is optional here so that a missing name is a validation failure
/// rather than a deserialization failure.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CreateClientRequest {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub note: Option<String>,
}

impl CreateClientRequest {
    /// Check required fields and produce store input.
    ///
    /// Optional fields pass through verbatim.
    pub fn validate(self) -> Result<NewClient, &'static str> {
        let name = match self.name {
            Some(name) if !name.is_empty() => name,
            _ => return Err(NAME_REQUIRED),
        };

        Ok(NewClient {
            name,
            email: self.email,
            phone: self.phone,
            note: self.note,
        })
    }
}
