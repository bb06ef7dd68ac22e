//! Tests for tag comparison.

use kodegen_tools_release_tags::{cmp_precedence, compare_tags, compare_versions, parse_version};
use std::cmp::Ordering;

#[test]
fn test_compare_versions() {
    let cases = [
        ("v0.2.2", "v0.3.0", "", -1),
        ("v0.3.0", "v0.2.2", "", 1),
        ("v0.3.0", "v0.3.0", "", 0),
        ("v0.3.0-rc1", "v0.3.0", "", -1),
        ("v0.3.0-rc1", "v0.3.0-rc2", "", -1),
        ("v0.3.0", "v0.3.0-rc2", "", 1),
        ("v0.3.0-rc.2", "v0.3.0-rc.10", "", -1),
        ("v0.3.0-rc1", "0.3.0-RC.1", "", 0),
        ("op-node/v1.16.2", "op-node/v1.16.3", "op-node", -1),
    ];

    for (a, b, prefix, want) in cases {
        assert_eq!(
            compare_versions(a, b, prefix).unwrap(),
            want,
            "compare_versions({a:?}, {b:?}, {prefix:?})"
        );
    }
}

#[test]
fn test_compare_propagates_parse_error() {
    let err = compare_versions("v1.0.0", "garbage", "").unwrap_err();
    assert_eq!(err.tag(), Some("garbage"));

    let err = compare_versions("junk", "garbage", "").unwrap_err();
    assert_eq!(err.tag(), Some("junk"));
}

#[test]
fn test_rc_precedes_release() {
    for x in ["0.0.1", "1.2.3", "10.20.30"] {
        let release = format!("v{x}");
        let rc = format!("v{x}-rc.1");
        assert_eq!(compare_tags(&rc, &release, "").unwrap(), Ordering::Less);
    }
}

#[test]
fn test_compare_is_a_total_order() {
    let tags = [
        "v0.2.2",
        "v0.3.0-alpha",
        "v0.3.0-alpha.1",
        "v0.3.0-beta",
        "v0.3.0-rc1",
        "v0.3.0-rc.2",
        "v0.3.0",
        "v0.3.1",
        "v1.0.0",
    ];

    for a in tags {
        assert_eq!(compare_versions(a, a, "").unwrap(), 0);
        for b in tags {
            let ab = compare_versions(a, b, "").unwrap();
            let ba = compare_versions(b, a, "").unwrap();
            assert_eq!(ab, -ba, "antisymmetry for {a:?} / {b:?}");
            for c in tags {
                let bc = compare_versions(b, c, "").unwrap();
                if ab <= 0 && bc <= 0 {
                    assert!(compare_versions(a, c, "").unwrap() <= 0, "{a} <= {b} <= {c}");
                }
            }
        }
    }

    // Listed in ascending order
    for pair in tags.windows(2) {
        assert_eq!(compare_versions(pair[0], pair[1], "").unwrap(), -1, "{pair:?}");
    }
}

#[test]
fn test_build_metadata_ignored() {
    let a = parse_version("v1.0.0+linux", "").unwrap();
    let b = parse_version("v1.0.0+darwin", "").unwrap();
    assert_eq!(cmp_precedence(&a, &b), Ordering::Equal);
    assert_eq!(compare_versions("v1.0.0+linux", "v1.0.0", "").unwrap(), 0);
}
