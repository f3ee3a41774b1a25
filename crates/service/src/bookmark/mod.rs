//! Ownership-guarded bookmark CRUD.
//!
//! Every read-single or mutating operation re-checks that the caller owns the
//! target row before acting; a missing row and a row owned by someone else are
//! deliberately indistinguishable to the caller.

pub mod domain;
pub mod repository;
pub mod service;
pub mod repo;

pub use service::BookmarkService;
