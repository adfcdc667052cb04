//! Domain layer: entities, client contracts and pure selection rules.
//!
//! # Architecture
//!
//! - [`entities`] - Project snapshots, overrides, metadata and the output record
//! - [`clients`] - Trait contracts for the external data sources
//! - [`domain_selection`] - Ordered hostname strategies
//! - [`tech_stack`] - Technology label synthesis
//!
//! Nothing here performs I/O; services in [`crate::application::services`]
//! combine these pieces with the clients.

pub mod clients;
pub mod domain_selection;
pub mod entities;
pub mod tech_stack;
