//! Database model type aliases.
//!
//! Short names for the SeaORM models of the `entity` crate, used by repositories, services
//! and the core engines.

/// Type alias for the continent database model.
///
/// # Fields (from `entity::continent::Model`)
/// - `id` - Primary key
/// - `name` - Unique continent name
/// - `alias` - Unique short alias
pub type ContinentModel = entity::continent::Model;

/// Type alias for the country database model.
///
/// # Fields (from `entity::country::Model`)
/// - `id` - Primary key
/// - `name` - Unique country name
/// - `inhabitants`, `area`, `pkb` - Non-negative statistics summed by the summary engine
/// - `language` - Official language
/// - `continent_id` - Foreign key to the owning continent
/// - `user_id` - Verified identifier of the user who created the record
pub type CountryModel = entity::country::Model;

/// Type alias for the favourite country database model.
///
/// At most one favourite per user is intended, checked before insert.
pub type FavouriteModel = entity::favourite::Model;

/// Type alias for the visited country database model.
pub type VisitedModel = entity::visited::Model;
