//! Factory functions for in-memory models.
//!
//! Pure functions returning entity models with standard test values, for engines that work on
//! slices of models without touching a database.

/// Number of inhabitants given to countries created without explicit statistics
pub const DEFAULT_INHABITANTS: i64 = 1_000_000;
/// Language given to countries created without an explicit language
pub const DEFAULT_LANGUAGE: &str = "English";
pub const DEFAULT_AREA: i64 = 10_000;
pub const DEFAULT_PKB: i64 = 50_000;

/// Country with default statistics & language
pub fn country(id: i32, name: &str, continent_id: i32, user_id: &str) -> entity::country::Model {
    country_with_stats(
        id,
        name,
        continent_id,
        user_id,
        DEFAULT_INHABITANTS,
        DEFAULT_AREA,
        DEFAULT_PKB,
    )
}

/// Country with the given inhabitants, area & pkb
pub fn country_with_stats(
    id: i32,
    name: &str,
    continent_id: i32,
    user_id: &str,
    inhabitants: i64,
    area: i64,
    pkb: i64,
) -> entity::country::Model {
    entity::country::Model {
        id,
        name: name.to_string(),
        inhabitants,
        language: DEFAULT_LANGUAGE.to_string(),
        area,
        pkb,
        continent_id,
        user_id: user_id.to_string(),
    }
}

pub fn favourite(id: i32, country_name: &str, user_id: &str) -> entity::favourite::Model {
    entity::favourite::Model {
        id,
        country_name: country_name.to_string(),
        user_id: user_id.to_string(),
    }
}

pub fn visited(id: i32, country_name: &str, user_id: &str) -> entity::visited::Model {
    entity::visited::Model {
        id,
        country_name: country_name.to_string(),
        user_id: user_id.to_string(),
    }
}
