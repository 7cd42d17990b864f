//! Short, prefixed ids unique within a domain.
//!
//! # Responsibility
//! - Generate zero-padded ids such as `trk0001` that are unique per domain key.
//! - Register ids loaded from project files without colliding with live ones.
//! - Provide a holder for entities that own exactly one id.
//!
//! # Invariants
//! - Ids are unique within one domain key, not globally: `trk0000` may exist
//!   in two projects at once.
//! - A colliding supplied id is replaced, never registered twice.
//!
//! # See also
//! - crate::domain for the runtime handles usually used as domain keys.

pub mod allocator;
pub mod error;
pub mod holder;
pub mod kind;

pub use allocator::{Allocation, IdOrigin, ScopedIdAllocator};
pub use error::{IdNotFound, IdResult};
pub use holder::{IdHolder, IdValue};
pub use kind::{IdKind, ProjectIds, ScopedId, SourceIds, TrackIds, DEFAULT_ID_WIDTH};
