//! Id kinds and the typed id value.

use serde::{Serialize, Serializer};
use std::cmp::Ordering;
use std::fmt::{Debug, Display, Formatter};
use std::hash::{Hash, Hasher};
use std::marker::PhantomData;

/// Zero-padding width used when a kind does not override it.
pub const DEFAULT_ID_WIDTH: usize = 4;

/// Compile-time configuration of one id kind.
///
/// Generated ids have the shape `<PREFIX><counter zero-padded to WIDTH>`, e.g.
/// `src0007`. `WIDTH` only affects display; counters wider than it are still
/// valid ids.
pub trait IdKind {
    const PREFIX: &'static str;
    const WIDTH: usize = DEFAULT_ID_WIDTH;
    /// Diagnostic name used in logs and errors.
    const NAME: &'static str = Self::PREFIX;
}

/// Media source ids (`src0000`).
#[derive(Debug)]
pub enum SourceIds {}

impl IdKind for SourceIds {
    const PREFIX: &'static str = "src";
    const NAME: &'static str = "source";
}

/// Timeline track ids (`trk0000`).
#[derive(Debug)]
pub enum TrackIds {}

impl IdKind for TrackIds {
    const PREFIX: &'static str = "trk";
    const NAME: &'static str = "track";
}

/// Project ids (`prj0000`).
#[derive(Debug)]
pub enum ProjectIds {}

impl IdKind for ProjectIds {
    const PREFIX: &'static str = "prj";
    const NAME: &'static str = "project";
}

/// Literal id text tagged with its kind.
///
/// The value is opaque to consumers. Values are only minted by
/// [`ScopedIdAllocator`](crate::ids::ScopedIdAllocator), but a `ScopedId<K>`
/// is not proof of registration: `generate_fresh` returns unreserved
/// candidates, and an id registered in one domain says nothing about another.
/// Serializes as the bare string. Loaders read the raw text and register it
/// through the allocator, so there is no `Deserialize` impl.
pub struct ScopedId<K> {
    value: String,
    kind: PhantomData<fn() -> K>,
}

impl<K> ScopedId<K> {
    pub(crate) fn new(value: String) -> Self {
        Self {
            value,
            kind: PhantomData,
        }
    }

    pub fn as_str(&self) -> &str {
        &self.value
    }

    pub fn into_string(self) -> String {
        self.value
    }
}

impl<K> Clone for ScopedId<K> {
    fn clone(&self) -> Self {
        Self::new(self.value.clone())
    }
}

impl<K> PartialEq for ScopedId<K> {
    fn eq(&self, other: &Self) -> bool {
        self.value == other.value
    }
}

impl<K> Eq for ScopedId<K> {}

impl<K> PartialEq<str> for ScopedId<K> {
    fn eq(&self, other: &str) -> bool {
        self.value == other
    }
}

impl<K> PartialEq<&str> for ScopedId<K> {
    fn eq(&self, other: &&str) -> bool {
        self.value == *other
    }
}

impl<K> PartialOrd for ScopedId<K> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<K> Ord for ScopedId<K> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.value.cmp(&other.value)
    }
}

impl<K> Hash for ScopedId<K> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.value.hash(state);
    }
}

impl<K> Debug for ScopedId<K> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_tuple("ScopedId").field(&self.value).finish()
    }
}

impl<K> Display for ScopedId<K> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.value)
    }
}

impl<K> AsRef<str> for ScopedId<K> {
    fn as_ref(&self) -> &str {
        &self.value
    }
}

impl<K> Serialize for ScopedId<K> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.value)
    }
}
