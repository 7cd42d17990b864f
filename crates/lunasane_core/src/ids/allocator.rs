//! Per-kind allocator of domain-scoped ids.
//!
//! # Invariants
//! - Within one domain key, registered ids are pairwise distinct.
//! - The same literal id may be registered under different domain keys.
//! - Fresh ids are the lowest unused `<prefix><padded counter>` candidate; the
//!   counter is never parsed back out of an existing id.

use crate::domain::Domain;
use crate::ids::error::{IdNotFound, IdResult};
use crate::ids::kind::{IdKind, ScopedId};
use log::{debug, warn};
use std::collections::{BTreeSet, HashMap};
use std::fmt::Debug;
use std::hash::Hash;
use std::marker::PhantomData;

/// How the id returned by [`ScopedIdAllocator::construct`] was obtained.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IdOrigin {
    /// No id was supplied; a fresh one was generated.
    Generated,
    /// The supplied id was free in the domain and registered verbatim.
    Supplied,
    /// The supplied id was already used in the domain, so a fresh id was
    /// generated in its place.
    Replaced { requested: String },
    /// An already registered id was taken over by an [`IdHolder`] without
    /// touching the allocator.
    ///
    /// [`IdHolder`]: crate::ids::IdHolder
    Adopted,
}

/// Result of [`ScopedIdAllocator::construct`].
#[derive(Debug)]
pub struct Allocation<K> {
    pub id: ScopedId<K>,
    pub origin: IdOrigin,
}

impl<K> Allocation<K> {
    /// True when a supplied id collided and was swapped for a fresh one.
    pub fn was_replaced(&self) -> bool {
        matches!(self.origin, IdOrigin::Replaced { .. })
    }

    pub fn into_id(self) -> ScopedId<K> {
        self.id
    }
}

/// Tracks used ids of kind `K`, grouped by domain key `D`.
///
/// `D` is usually a [`Domain`], but any hashable key can scope ids.
#[derive(Debug)]
pub struct ScopedIdAllocator<K, D = Domain> {
    used: HashMap<D, BTreeSet<String>>,
    kind: PhantomData<fn() -> K>,
}

impl<K, D> Default for ScopedIdAllocator<K, D> {
    fn default() -> Self {
        Self {
            used: HashMap::new(),
            kind: PhantomData,
        }
    }
}

impl<K, D> ScopedIdAllocator<K, D>
where
    K: IdKind,
    D: Eq + Hash + Clone + Debug,
{
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers `supplied` when it is free in `domain`, otherwise registers a
    /// freshly generated id.
    ///
    /// A colliding `supplied` value is not an error: it is treated as if no id
    /// had been supplied. The substitution is reported through
    /// [`IdOrigin::Replaced`] and a `warn` log line.
    pub fn construct(&mut self, domain: &D, supplied: Option<&str>) -> Allocation<K> {
        let origin = match supplied {
            Some(value) if !self.is_registered(domain, value) => {
                self.register(domain, value);
                return Allocation {
                    id: ScopedId::new(value.to_string()),
                    origin: IdOrigin::Supplied,
                };
            }
            Some(value) => IdOrigin::Replaced {
                requested: value.to_string(),
            },
            None => IdOrigin::Generated,
        };

        let id = self.generate_fresh(domain);
        self.register(domain, id.as_str());

        if let IdOrigin::Replaced { requested } = &origin {
            warn!(
                "event=id_collision module=ids status=replaced kind={} domain={:?} requested={} assigned={}",
                K::NAME,
                domain,
                requested,
                id
            );
        }

        Allocation { id, origin }
    }

    /// Returns the lowest-numbered candidate id not used in `domain`.
    ///
    /// Does not register the returned id.
    pub fn generate_fresh(&self, domain: &D) -> ScopedId<K> {
        let used = self.used.get(domain);
        let mut counter: u64 = 0;
        loop {
            let candidate = candidate_id::<K>(counter);
            if !used.is_some_and(|ids| ids.contains(&candidate)) {
                return ScopedId::new(candidate);
            }
            counter += 1;
        }
    }

    /// Marks `id` as used in `domain`. Idempotent; returns whether the id was
    /// newly added.
    pub fn register(&mut self, domain: &D, id: &str) -> bool {
        let inserted = self
            .used
            .entry(domain.clone())
            .or_default()
            .insert(id.to_string());
        if inserted {
            debug!(
                "event=id_register module=ids status=ok kind={} domain={:?} id={}",
                K::NAME,
                domain,
                id
            );
        }
        inserted
    }

    /// Releases `id` in `domain` so the same text can be handed out again.
    ///
    /// # Errors
    /// - `IdNotFound` when `id` is not registered in `domain`.
    pub fn unregister(&mut self, domain: &D, id: &str) -> IdResult<()> {
        let Some(ids) = self.used.get_mut(domain) else {
            return Err(Self::not_found(id));
        };
        if !ids.remove(id) {
            return Err(Self::not_found(id));
        }
        if ids.is_empty() {
            self.used.remove(domain);
        }

        debug!(
            "event=id_unregister module=ids status=ok kind={} domain={:?} id={}",
            K::NAME,
            domain,
            id
        );
        Ok(())
    }

    /// Looks up a registered id by its text.
    ///
    /// # Errors
    /// - `IdNotFound` carrying `id` when it is not registered in `domain`.
    pub fn find(&self, domain: &D, id: &str) -> IdResult<ScopedId<K>> {
        if self.is_registered(domain, id) {
            Ok(ScopedId::new(id.to_string()))
        } else {
            Err(Self::not_found(id))
        }
    }

    pub fn is_registered(&self, domain: &D, id: &str) -> bool {
        self.used.get(domain).is_some_and(|ids| ids.contains(id))
    }

    /// Returns used ids of `domain` in sorted order.
    pub fn used_ids(&self, domain: &D) -> Vec<&str> {
        self.used
            .get(domain)
            .map(|ids| ids.iter().map(String::as_str).collect())
            .unwrap_or_default()
    }

    /// Forgets every id of `domain`, e.g. when the owning document closes.
    /// Returns how many ids were released.
    pub fn release_domain(&mut self, domain: &D) -> usize {
        let released = self.used.remove(domain).map_or(0, |ids| ids.len());
        if released > 0 {
            debug!(
                "event=id_domain_release module=ids status=ok kind={} domain={:?} released={}",
                K::NAME,
                domain,
                released
            );
        }
        released
    }

    /// Number of domain keys that currently hold at least one id.
    pub fn domain_count(&self) -> usize {
        self.used.len()
    }

    fn not_found(id: &str) -> IdNotFound {
        IdNotFound {
            kind: K::NAME,
            value: id.to_string(),
        }
    }
}

fn candidate_id<K: IdKind>(counter: u64) -> String {
    format!("{}{:0width$}", K::PREFIX, counter, width = K::WIDTH)
}
