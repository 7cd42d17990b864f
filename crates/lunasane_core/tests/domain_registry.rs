use lunasane_core::{Domain, DomainHolder, DomainNotFound, DomainRegistry};
use std::sync::Arc;

#[derive(Debug)]
struct Track {
    domain: Domain,
    name: String,
}

impl DomainHolder for Track {
    fn domain(&self) -> Domain {
        self.domain
    }
}

fn new_track(registry: &mut DomainRegistry<Track>, name: &str) -> Arc<Track> {
    registry.acquire_domain(|domain| Track {
        domain,
        name: name.to_string(),
    })
}

#[test]
fn domains_start_at_zero_and_increase() {
    let mut registry = DomainRegistry::new("track");

    let domains: Vec<u64> = (0..5)
        .map(|index| new_track(&mut registry, &format!("track {index}")).domain().get())
        .collect();

    assert_eq!(domains, vec![0, 1, 2, 3, 4]);
}

#[test]
fn resolve_returns_the_same_instance() {
    let mut registry = DomainRegistry::new("track");
    let tracks: Vec<Arc<Track>> = ["drums", "bass", "vocals"]
        .iter()
        .map(|name| new_track(&mut registry, name))
        .collect();

    for track in &tracks {
        let resolved = registry.resolve(track.domain()).unwrap();
        assert!(Arc::ptr_eq(&resolved, track));
        assert_eq!(resolved.name, track.name);
    }
}

#[test]
fn resolve_unknown_domain_reports_kind_and_domain() {
    let mut registry = DomainRegistry::new("track");
    new_track(&mut registry, "only");

    let err = registry.resolve(Domain::from(7)).unwrap_err();
    assert_eq!(
        err,
        DomainNotFound {
            kind: "track",
            domain: Domain::from(7),
        }
    );
    assert_eq!(err.to_string(), "domain not found: kind=track domain=7");
}

#[test]
fn registries_are_isolated_per_kind() {
    let mut tracks = DomainRegistry::new("track");
    let mut projects = DomainRegistry::new("project");

    let track = new_track(&mut tracks, "a");
    let project = new_track(&mut projects, "b");

    assert_eq!(track.domain(), Domain::from(0));
    assert_eq!(project.domain(), Domain::from(0));
    assert_eq!(tracks.resolve(Domain::from(0)).unwrap().name, "a");
    assert_eq!(projects.resolve(Domain::from(0)).unwrap().name, "b");
}

#[test]
fn dropped_instances_stop_resolving_and_numbers_are_not_reused() {
    let mut registry = DomainRegistry::new("track");
    let first = new_track(&mut registry, "first");
    let first_domain = first.domain();
    drop(first);

    assert!(registry.resolve(first_domain).is_err());

    let second = new_track(&mut registry, "second");
    assert_eq!(second.domain(), Domain::from(1));
}

#[test]
fn released_domain_no_longer_resolves() {
    let mut registry = DomainRegistry::new("track");
    let track = new_track(&mut registry, "kept alive");

    assert!(registry.release(track.domain()));
    assert!(registry.resolve(track.domain()).is_err());
    assert_eq!(registry.live_count(), 0);
    assert_eq!(registry.next_domain(), Domain::from(1));
}
