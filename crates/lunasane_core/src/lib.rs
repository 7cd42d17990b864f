//! Identity core for Lunasane.
//! Owns the domain registry and the domain-scoped id allocator that every
//! project, source and track relies on for uniqueness.

pub mod domain;
pub mod ids;
pub mod logging;

pub use domain::{Domain, DomainHolder, DomainNotFound, DomainRegistry, DomainResult};
pub use ids::{
    Allocation, IdHolder, IdKind, IdNotFound, IdOrigin, IdResult, IdValue, ProjectIds, ScopedId,
    ScopedIdAllocator, SourceIds, TrackIds, DEFAULT_ID_WIDTH,
};
pub use logging::{default_log_level, init_logging, logging_status, LoggingConfig};

/// Minimal health-check API for linkage probes.
pub fn ping() -> &'static str {
    "pong"
}

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::{core_version, ping};

    #[test]
    fn ping_returns_pong() {
        assert_eq!(ping(), "pong");
    }

    #[test]
    fn version_is_not_empty() {
        assert!(!core_version().is_empty());
    }
}
