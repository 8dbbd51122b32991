//! Requests through the full router, including bearer token extraction.

mod country;
mod docs;
