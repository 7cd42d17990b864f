use lunasane_core::{
    Domain, IdKind, IdNotFound, IdOrigin, ScopedIdAllocator, SourceIds, TrackIds,
};
use std::collections::HashSet;

#[derive(Debug)]
enum ItemIds {}

impl IdKind for ItemIds {
    const PREFIX: &'static str = "itm";
    const WIDTH: usize = 2;
}

#[test]
fn fresh_source_ids_are_zero_padded() {
    let mut ids = ScopedIdAllocator::<SourceIds>::new();
    let domain = Domain::from(0);

    let generated: Vec<String> = (0..3)
        .map(|_| ids.construct(&domain, None).into_id().into_string())
        .collect();

    assert_eq!(generated, vec!["src0000", "src0001", "src0002"]);
}

#[test]
fn fresh_ids_are_unique_within_domain() {
    let mut ids = ScopedIdAllocator::<TrackIds>::new();
    let domain = Domain::from(3);

    let mut seen = HashSet::new();
    for _ in 0..200 {
        let id = ids.construct(&domain, None).into_id();
        assert!(seen.insert(id.into_string()));
    }
    assert_eq!(ids.used_ids(&domain).len(), 200);
}

#[test]
fn generate_fresh_does_not_reserve() {
    let ids = ScopedIdAllocator::<TrackIds>::new();
    let domain = Domain::from(0);

    assert_eq!(ids.generate_fresh(&domain), "trk0000");
    assert_eq!(ids.generate_fresh(&domain), "trk0000");
    assert!(!ids.is_registered(&domain, "trk0000"));
}

#[test]
fn colliding_supplied_id_is_replaced() {
    let mut ids = ScopedIdAllocator::<TrackIds>::new();
    let domain = Domain::from(0);
    ids.register(&domain, "trk0000");

    let allocation = ids.construct(&domain, Some("trk0000"));

    assert!(allocation.was_replaced());
    assert_eq!(
        allocation.origin,
        IdOrigin::Replaced {
            requested: "trk0000".to_string()
        }
    );
    assert_ne!(allocation.id, "trk0000");
    assert!(ids.is_registered(&domain, allocation.id.as_str()));
}

#[test]
fn supplied_id_is_kept_verbatim_and_reserved() {
    let mut ids = ScopedIdAllocator::<TrackIds>::new();
    let domain = Domain::from(0);

    let allocation = ids.construct(&domain, Some("trk9999"));
    assert_eq!(allocation.origin, IdOrigin::Supplied);
    assert_eq!(allocation.id, "trk9999");

    for _ in 0..20 {
        let fresh = ids.generate_fresh(&domain);
        assert_ne!(fresh, "trk9999");
        ids.register(&domain, fresh.as_str());
    }
}

#[test]
fn supplied_ids_need_not_follow_the_prefix() {
    let mut ids = ScopedIdAllocator::<ItemIds, String>::new();
    let key = "projects/demo.json".to_string();

    let allocation = ids.construct(&key, Some("intro-clip"));
    assert_eq!(allocation.id, "intro-clip");
    assert_eq!(ids.construct(&key, None).id, "itm00");
}

#[test]
fn same_id_lives_in_different_domains() {
    let mut ids = ScopedIdAllocator::<TrackIds>::new();
    let project_a = Domain::from(0);
    let project_b = Domain::from(1);

    let a = ids.construct(&project_a, Some("trk0000"));
    let b = ids.construct(&project_b, Some("trk0000"));

    assert_eq!(a.origin, IdOrigin::Supplied);
    assert_eq!(b.origin, IdOrigin::Supplied);
    assert!(ids.is_registered(&project_a, "trk0000"));
    assert!(ids.is_registered(&project_b, "trk0000"));
    assert_eq!(ids.domain_count(), 2);
}

#[test]
fn narrow_width_scenario_with_arbitrary_key() {
    let mut ids = ScopedIdAllocator::<ItemIds, u32>::new();

    let first = ids.generate_fresh(&5);
    assert_eq!(first, "itm00");
    ids.register(&5, first.as_str());

    assert_eq!(ids.generate_fresh(&5), "itm01");
}

#[test]
fn counter_grows_past_padding_width() {
    let mut ids = ScopedIdAllocator::<ItemIds, u32>::new();
    for _ in 0..100 {
        ids.construct(&0, None);
    }

    assert!(ids.is_registered(&0, "itm99"));
    assert_eq!(ids.generate_fresh(&0), "itm100");
}

#[test]
fn unregister_frees_text_for_reuse() {
    let mut ids = ScopedIdAllocator::<TrackIds>::new();
    let domain = Domain::from(0);
    for _ in 0..3 {
        ids.construct(&domain, None);
    }

    ids.unregister(&domain, "trk0001").unwrap();

    assert_eq!(ids.used_ids(&domain), vec!["trk0000", "trk0002"]);
    assert_eq!(ids.construct(&domain, None).id, "trk0001");
}

#[test]
fn unregister_unknown_id_fails() {
    let mut ids = ScopedIdAllocator::<TrackIds>::new();
    let domain = Domain::from(0);
    ids.construct(&domain, None);

    let err = ids.unregister(&domain, "trk0042").unwrap_err();
    assert_eq!(
        err,
        IdNotFound {
            kind: "track",
            value: "trk0042".to_string(),
        }
    );

    let err = ids.unregister(&Domain::from(9), "trk0000").unwrap_err();
    assert_eq!(err.value, "trk0000");
}

#[test]
fn find_returns_registered_ids_only() {
    let mut ids = ScopedIdAllocator::<SourceIds>::new();
    let domain = Domain::from(2);
    ids.construct(&domain, Some("src0004"));

    assert_eq!(ids.find(&domain, "src0004").unwrap(), "src0004");

    let err = ids.find(&Domain::from(3), "src0004").unwrap_err();
    assert_eq!(err.to_string(), "source id not found: src0004");
}

#[test]
fn release_domain_forgets_all_ids() {
    let mut ids = ScopedIdAllocator::<TrackIds>::new();
    let domain = Domain::from(0);
    ids.construct(&domain, None);
    ids.construct(&domain, None);

    assert_eq!(ids.release_domain(&domain), 2);
    assert_eq!(ids.release_domain(&domain), 0);
    assert!(ids.used_ids(&domain).is_empty());
    assert_eq!(ids.generate_fresh(&domain), "trk0000");
}
