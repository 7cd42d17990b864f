//! Convenience wrapper for entities that own exactly one scoped id.

use crate::ids::allocator::{IdOrigin, ScopedIdAllocator};
use crate::ids::kind::{IdKind, ScopedId};
use serde::{Serialize, Serializer};
use std::fmt::Debug;
use std::hash::Hash;

/// Input accepted by [`IdHolder::construct`].
#[derive(Debug)]
pub enum IdValue<K> {
    /// Generate a fresh id in the domain.
    Fresh,
    /// Adopt an id that is already registered, e.g. taken from another holder.
    Existing(ScopedId<K>),
    /// Raw external text (usually read from a project file).
    Raw(String),
}

impl<K> From<ScopedId<K>> for IdValue<K> {
    fn from(value: ScopedId<K>) -> Self {
        Self::Existing(value)
    }
}

impl<K> From<String> for IdValue<K> {
    fn from(value: String) -> Self {
        Self::Raw(value)
    }
}

impl<K> From<&str> for IdValue<K> {
    fn from(value: &str) -> Self {
        Self::Raw(value.to_string())
    }
}

impl<K> From<Option<String>> for IdValue<K> {
    fn from(value: Option<String>) -> Self {
        value.map_or(Self::Fresh, Self::Raw)
    }
}

/// Owns one id of kind `K` together with how it was obtained.
#[derive(Debug)]
pub struct IdHolder<K> {
    id: ScopedId<K>,
    origin: IdOrigin,
}

impl<K: IdKind> IdHolder<K> {
    /// Builds a holder from `value` within `domain`.
    ///
    /// # Invariants
    /// - `Fresh` and `Raw` values end up registered in `domain`.
    /// - `Existing` ids already registered in `domain` are adopted as-is;
    ///   any other `Existing` id is treated like `Raw` text, so it is
    ///   registered or replaced when it collides.
    pub fn construct<D>(
        ids: &mut ScopedIdAllocator<K, D>,
        domain: &D,
        value: impl Into<IdValue<K>>,
    ) -> Self
    where
        D: Eq + Hash + Clone + Debug,
    {
        let allocation = match value.into() {
            IdValue::Fresh => ids.construct(domain, None),
            IdValue::Existing(id) if ids.is_registered(domain, id.as_str()) => {
                return Self::adopt(id)
            }
            IdValue::Existing(id) => ids.construct(domain, Some(id.as_str())),
            IdValue::Raw(raw) => ids.construct(domain, Some(raw.as_str())),
        };
        Self {
            id: allocation.id,
            origin: allocation.origin,
        }
    }

    /// Generates and registers a fresh id in `domain`.
    pub fn generate<D>(ids: &mut ScopedIdAllocator<K, D>, domain: &D) -> Self
    where
        D: Eq + Hash + Clone + Debug,
    {
        Self::construct(ids, domain, IdValue::Fresh)
    }

    fn adopt(id: ScopedId<K>) -> Self {
        Self {
            id,
            origin: IdOrigin::Adopted,
        }
    }
}

impl<K> IdHolder<K> {
    pub fn id(&self) -> &ScopedId<K> {
        &self.id
    }

    pub fn origin(&self) -> &IdOrigin {
        &self.origin
    }

    /// Literal id text for project files.
    pub fn serializable(&self) -> &str {
        self.id.as_str()
    }

    pub fn into_id(self) -> ScopedId<K> {
        self.id
    }
}

impl<K> Serialize for IdHolder<K> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.id.serialize(serializer)
    }
}
