//! Service layer.
//!
//! One service per entity kind, each generic over its store trait, plus the engines they
//! share: the ownership gate in [`access`], the country statistics in [`summary`] and the
//! favourites ranking in [`ranking`]. Services run the read-then-write sequences of a request
//! and translate store outcomes into [`Error`](crate::server::error::Error) values.

pub mod access;
pub mod continent;
pub mod country;
pub mod favourite;
pub mod identity;
pub mod ranking;
pub mod summary;
pub mod visited;
