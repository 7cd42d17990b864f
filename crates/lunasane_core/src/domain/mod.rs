//! Runtime-only domain handles for domain-holding entities.
//!
//! # Responsibility
//! - Assign each tracked instance a small increasing integer domain.
//! - Resolve a domain number back to its live instance.
//!
//! # Invariants
//! - Domains start at 0 per registry and are never reused.
//! - `resolve(instance.domain())` is `instance` for the instance lifetime.
//! - Domains are never persisted: numbering depends on creation order within
//!   one run, so `Domain` has no serde impls.

pub mod registry;

pub use registry::{Domain, DomainHolder, DomainNotFound, DomainRegistry, DomainResult};
