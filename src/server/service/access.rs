//! Ownership checks for mutating operations.
//!
//! A record is either absent (about to be created) or present with an owner. Creating
//! requires a verified caller, who becomes the owner. Updating or deleting a present record
//! requires the verified caller to be its owner. Reads are never gated.

use crate::server::{
    error::{auth::AuthError, entity::EntityError},
    model::db::{CountryModel, FavouriteModel, VisitedModel},
};

/// Records carrying the identifier of the user who created them
pub trait Owned {
    /// Record kind used in log & error messages
    const KIND: &'static str;

    fn record_id(&self) -> i32;

    fn owner_id(&self) -> &str;
}

impl Owned for CountryModel {
    const KIND: &'static str = "Country";

    fn record_id(&self) -> i32 {
        self.id
    }

    fn owner_id(&self) -> &str {
        &self.user_id
    }
}

impl Owned for FavouriteModel {
    const KIND: &'static str = "Favourite";

    fn record_id(&self) -> i32 {
        self.id
    }

    fn owner_id(&self) -> &str {
        &self.user_id
    }
}

impl Owned for VisitedModel {
    const KIND: &'static str = "Visited";

    fn record_id(&self) -> i32 {
        self.id
    }

    fn owner_id(&self) -> &str {
        &self.user_id
    }
}

/// Requires a verified, non-empty caller identifier
pub fn require_identity(verified_user_id: Option<&str>) -> Result<&str, AuthError> {
    verified_user_id
        .filter(|user_id| !user_id.is_empty())
        .ok_or(AuthError::MissingIdentity)
}

/// Decides whether the caller may create, update or delete a record
///
/// # Arguments
/// - `verified_user_id` - Identifier from the verified bearer token, `None` if unverified
/// - `target` - The stored record for update & delete, `None` for create
///
/// # Returns
/// - `Ok(&str)` - The caller's identifier, to be stored as owner of the written record
/// - `Err(AuthError::MissingIdentity)` - No verified caller
/// - `Err(AuthError::NotOwner)` - The record belongs to someone else
pub fn authorize_mutation<'a, T: Owned>(
    verified_user_id: Option<&'a str>,
    target: Option<&T>,
) -> Result<&'a str, AuthError> {
    let user_id = require_identity(verified_user_id)?;

    match target {
        Some(record) if record.owner_id() != user_id => Err(AuthError::NotOwner {
            user_id: user_id.to_string(),
            kind: T::KIND,
            record_id: record.record_id(),
        }),
        _ => Ok(user_id),
    }
}

/// Allows a new favourite only when the caller has none yet
///
/// `existing` is the caller's current favourites as read right before the insert. Two
/// concurrent requests may both read an empty list; nothing below this check prevents both
/// inserts.
pub fn authorize_single_favourite(
    verified_user_id: &str,
    existing: &[FavouriteModel],
) -> Result<(), EntityError> {
    if existing.is_empty() {
        return Ok(());
    }

    tracing::debug!(
        "User {} already has {} favourite(s), rejecting another",
        verified_user_id,
        existing.len()
    );

    Err(EntityError::Conflict(
        "Your favourite already exists".to_string(),
    ))
}
