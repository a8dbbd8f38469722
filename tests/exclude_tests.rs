//! Tests for component scope resolution.

use url_relation::Component::*;
use url_relation::*;

#[test]
fn test_empty_input() {
    assert_eq!(resolve_scope(&[], None), Component::SEQUENCE.to_vec());
}

#[test]
fn test_slice_sequence() {
    assert_eq!(
        resolve_scope(&[], Some(Host)),
        vec![Protocol, Username, Password, Auth, Tld, Domain, Subdomain, Hostname, Port, Host]
    );
}

#[test]
fn test_exclude_protocol() {
    assert_eq!(
        resolve_scope(&[Protocol], None),
        vec![
            Username, Password, Auth, Tld, Domain, Subdomain, Hostname, Port, Host, Segments,
            Filename, Pathname, Search, Path, Hash
        ]
    );
}

#[test]
fn test_exclude_username_and_parent() {
    assert_eq!(
        resolve_scope(&[Username], None),
        vec![
            Protocol, Password, Tld, Domain, Subdomain, Hostname, Port, Host, Segments, Filename,
            Pathname, Search, Path, Hash
        ]
    );
}

#[test]
fn test_exclude_tld_and_parents() {
    assert_eq!(
        resolve_scope(&[Tld], None),
        vec![
            Protocol, Username, Password, Auth, Domain, Subdomain, Port, Segments, Filename,
            Pathname, Search, Path, Hash
        ]
    );
}

#[test]
fn test_exclude_port_keeps_hostname() {
    assert_eq!(
        resolve_scope(&[Port], None),
        vec![
            Protocol, Username, Password, Auth, Tld, Domain, Subdomain, Hostname, Segments,
            Filename, Pathname, Search, Path, Hash
        ]
    );
}

#[test]
fn test_exclude_search_keeps_pathname() {
    assert_eq!(
        resolve_scope(&[Search], None),
        vec![
            Protocol, Username, Password, Auth, Tld, Domain, Subdomain, Hostname, Port, Host,
            Segments, Filename, Pathname, Hash
        ]
    );
}

#[test]
fn test_exclude_composite_removes_members() {
    assert_eq!(
        resolve_scope(&[Host], None),
        vec![
            Protocol, Username, Password, Auth, Segments, Filename, Pathname, Search, Path, Hash
        ]
    );

    assert_eq!(
        resolve_scope(&[Path], None),
        vec![
            Protocol, Username, Password, Auth, Tld, Domain, Subdomain, Hostname, Port, Host, Hash
        ]
    );
}

#[test]
fn test_excluding_all_members_excludes_composite() {
    let scope = resolve_scope(&[Segments, Filename], None);
    assert!(!scope.contains(&Pathname));
    assert!(!scope.contains(&Path));

    let scope = resolve_scope(&[Username, Password], None);
    assert!(!scope.contains(&Auth));
}

#[test]
fn test_every_leaf_cascades_to_every_parent() {
    for composite in Component::COMPOSITES {
        for leaf in composite.leaves() {
            let scope = resolve_scope(&[leaf], None);
            assert!(!scope.contains(&leaf), "{} should be excluded", leaf);
            assert!(
                !scope.contains(&composite),
                "excluding {} should exclude {}",
                leaf,
                composite
            );
        }
    }
}

#[test]
fn test_duplicates_and_overlap() {
    assert_eq!(
        resolve_scope(&[Hostname, Tld, Tld, Host], Some(Segments)),
        vec![Protocol, Username, Password, Auth, Segments]
    );
}

#[test]
fn test_exclusions_after_target_are_irrelevant() {
    assert_eq!(
        resolve_scope(&[Hash, Search], Some(Auth)),
        vec![Protocol, Username, Password, Auth]
    );
}
