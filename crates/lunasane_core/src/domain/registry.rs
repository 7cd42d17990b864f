//! Per-kind domain registry and reverse lookup.

use log::debug;
use std::collections::BTreeMap;
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::sync::{Arc, Weak};

pub type DomainResult<T> = Result<T, DomainNotFound>;

/// Runtime-only handle identifying one instance of a domain-holding kind.
///
/// Assigned in creation order. Two runs that load the same saved data may
/// hand out different numbers, so a `Domain` must never be written to disk or
/// compared across runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Domain(u64);

impl Domain {
    /// Returns the raw domain number.
    pub fn get(self) -> u64 {
        self.0
    }
}

impl From<u64> for Domain {
    fn from(value: u64) -> Self {
        Self(value)
    }
}

impl Display for Domain {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Implemented by entities that own exactly one domain.
pub trait DomainHolder {
    fn domain(&self) -> Domain;
}

/// No live instance is registered under `domain` for `kind`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DomainNotFound {
    pub kind: &'static str,
    pub domain: Domain,
}

impl Display for DomainNotFound {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "domain not found: kind={} domain={}", self.kind, self.domain)
    }
}

impl Error for DomainNotFound {}

/// Domain table for one domain-holding kind (e.g. tracks, projects).
///
/// The table keeps only weak back-references; the instance's natural owner
/// (a project's track list, say) holds the strong `Arc`. Entries of dropped
/// instances are cleared on the next acquisition or by [`prune`].
///
/// [`prune`]: DomainRegistry::prune
#[derive(Debug)]
pub struct DomainRegistry<T> {
    kind: &'static str,
    next_domain: u64,
    table: BTreeMap<Domain, Weak<T>>,
}

impl<T> DomainRegistry<T> {
    pub fn new(kind: &'static str) -> Self {
        Self {
            kind,
            next_domain: 0,
            table: BTreeMap::new(),
        }
    }

    pub fn kind(&self) -> &'static str {
        self.kind
    }

    /// Domain the next acquisition will hand out.
    pub fn next_domain(&self) -> Domain {
        Domain(self.next_domain)
    }

    /// Assigns the next domain, builds the instance with it and registers a
    /// back-reference under that number.
    ///
    /// # Invariants
    /// - The counter and the table are updated together; a domain handed to
    ///   `build` is always resolvable once this returns.
    /// - The counter only moves forward, so released domains are not reused.
    pub fn acquire_domain<F>(&mut self, build: F) -> Arc<T>
    where
        T: DomainHolder,
        F: FnOnce(Domain) -> T,
    {
        let domain = Domain(self.next_domain);
        let instance = Arc::new(build(domain));
        debug_assert_eq!(
            instance.domain(),
            domain,
            "instance must keep the domain it was built with"
        );

        self.prune();
        self.table.insert(domain, Arc::downgrade(&instance));
        self.next_domain += 1;
        debug!(
            "event=domain_acquire module=domain status=ok kind={} domain={}",
            self.kind, domain
        );
        instance
    }

    /// Returns the live instance registered under `domain`.
    ///
    /// # Errors
    /// - `DomainNotFound` when nothing was registered under `domain`, or the
    ///   instance has since been released or dropped.
    pub fn resolve(&self, domain: Domain) -> DomainResult<Arc<T>> {
        self.table
            .get(&domain)
            .and_then(Weak::upgrade)
            .ok_or(DomainNotFound {
                kind: self.kind,
                domain,
            })
    }

    pub fn contains(&self, domain: Domain) -> bool {
        self.table
            .get(&domain)
            .is_some_and(|entry| entry.strong_count() > 0)
    }

    /// Removes the entry for `domain`. Returns whether an entry existed.
    pub fn release(&mut self, domain: Domain) -> bool {
        let removed = self.table.remove(&domain).is_some();
        if removed {
            debug!(
                "event=domain_release module=domain status=ok kind={} domain={}",
                self.kind, domain
            );
        }
        removed
    }

    /// Drops entries whose instance is gone. Returns how many were removed.
    pub fn prune(&mut self) -> usize {
        let before = self.table.len();
        self.table.retain(|_, entry| entry.strong_count() > 0);
        before - self.table.len()
    }

    /// Number of registered instances that are still alive.
    pub fn live_count(&self) -> usize {
        self.table
            .values()
            .filter(|entry| entry.strong_count() > 0)
            .count()
    }
}
