//! Domains module containing the server's functional surface.
//!
//! The gateway has exactly one domain: the tool catalog that fronts the
//! pvfUtility WebApi.

pub mod tools;
