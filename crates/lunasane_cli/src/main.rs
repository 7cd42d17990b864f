//! CLI smoke entry point.
//!
//! # Responsibility
//! - Verify `lunasane_core` linkage from a standalone executable.
//! - Print a deterministic allocation probe.

use lunasane_core::{Domain, ScopedIdAllocator, TrackIds};

fn main() {
    let mut track_ids = ScopedIdAllocator::<TrackIds>::new();
    let first = track_ids.construct(&Domain::from(0), None).into_id();

    println!("lunasane_core ping={}", lunasane_core::ping());
    println!("lunasane_core version={}", lunasane_core::core_version());
    println!("lunasane_core first_track_id={first}");
}
