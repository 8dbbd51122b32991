//! Test configuration constants.

/// Shared HMAC secret used to mint and verify bearer tokens in tests.
///
/// Not a real credential.
pub static TEST_JWT_SECRET: &str = "test_jwt_secret";
