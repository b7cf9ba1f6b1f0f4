//! Cone construction on the reference zigzag and on small edge cases.

use super::*;
use crate::field::Zp;
use crate::fixtures::scenario;
use crate::reduction::StandardReduction;
use crate::simplex::{ConeSimplex, Simplex};

fn plain(vs: &[u32]) -> ConeSimplex {
    ConeSimplex::plain(Simplex::new(vs.iter().copied()))
}

fn coned(vs: &[u32]) -> ConeSimplex {
    Simplex::new(vs.iter().copied()).join_cone()
}

#[test]
fn scenario_order_and_links() {
    let cone = ConeFiltration::build(&scenario());
    let expected: Vec<(ConeSimplex, f64, usize)> = vec![
        (ConeSimplex::cone_vertex(), 0.0, 0),
        (plain(&[1]), 0.1, 1),
        (plain(&[1]), 0.3, 2),
        (plain(&[0]), 0.4, 3),
        (plain(&[2]), 0.5, 4),
        (plain(&[0]), 0.7, 5),
        (plain(&[0, 1]), 0.8, 6),
        (plain(&[0, 2]), 0.8, 7),
        (plain(&[1, 2]), 0.9, 8),
        (coned(&[2]), f64::INFINITY, 4),
        (coned(&[0]), 1.0, 5),
        (coned(&[1]), 1.0, 2),
        (coned(&[0, 2]), 1.0, 7),
        (coned(&[1, 2]), 1.0, 8),
        (coned(&[0, 1]), 0.95, 6),
        (coned(&[0]), 0.6, 3),
        (coned(&[1]), 0.2, 1),
    ];
    assert_eq!(cone.len(), expected.len());
    for (i, (s, t, link)) in expected.into_iter().enumerate() {
        let e = &cone[i];
        assert_eq!(e.simplex, s, "simplex at {i}");
        assert_eq!(e.time, t, "time at {i}");
        assert_eq!(e.link, link, "link at {i}");
    }
}

#[test]
fn first_entry_is_cone_vertex_and_links_reach_plain() {
    let cone = ConeFiltration::build(&scenario());
    assert!(cone.is_cone_vertex(0));
    assert_eq!(cone[0].time, 0.0);
    assert!((1..cone.len()).all(|i| !cone.is_cone_vertex(i)));
    for (i, e) in cone.iter().enumerate().skip(1) {
        let first = &cone[e.link];
        assert_eq!(first.simplex.base(), e.simplex.base());
        assert!(!first.simplex.contains_cone_vertex());
        assert_eq!(first.link, e.link, "plain entries link to themselves ({i})");
    }
}

#[test]
fn faces_precede_cofaces() {
    let cone = ConeFiltration::build(&scenario());
    for (i, e) in cone.iter().enumerate() {
        for face in e.simplex.boundary() {
            let j = cone.index_of(&face, i).expect("face present");
            assert!(j < i, "face {face} of {} at {j} >= {i}", e.simplex);
        }
    }
}

#[test]
fn index_of_prefers_link_then_latest_earlier() {
    let cone = ConeFiltration::build(&scenario());
    // <w,0> removed at .6 resolves its base through the link, not the latest <0>
    assert_eq!(cone.index_of(&plain(&[0]), 15), Some(3));
    // <0,1> at .8 sees the latest <1> (reinserted at .3)
    assert_eq!(cone.index_of(&plain(&[1]), 6), Some(2));
    // <w,0,1> at .95 sees <w,0> removed at 1.0
    assert_eq!(cone.index_of(&coned(&[0]), 14), Some(10));
    assert_eq!(cone.index_of(&ConeSimplex::cone_vertex(), 16), Some(0));
    assert_eq!(cone.index_of(&plain(&[9]), 6), None);
    assert_eq!(cone.index_of(&plain(&[0]), 99), None);
}

#[test]
fn face_removed_before_coface_resolves_to_stale_appearance() {
    // vertex 0 leaves at 1, the edge arrives at 2
    let cone = ConeFiltration::from_parts(vec![vec![0], vec![1], vec![0, 1]], vec![
        vec![0.0, 1.0],
        vec![0.0, 10.0],
        vec![2.0, 3.0],
    ])
    .unwrap();
    assert_eq!(cone[3].simplex, plain(&[0, 1]));
    assert_eq!(cone.index_of(&plain(&[0]), 3), Some(1));
    assert!(StandardReduction::reduce(&cone, Zp::default()).is_ok());
}

#[test]
fn never_removed_simplex_is_closed_at_infinity() {
    let cone = ConeFiltration::from_parts(vec![vec![3]], vec![vec![2.0]]).unwrap();
    assert_eq!(cone.len(), 3);
    assert_eq!(cone[1].simplex, plain(&[3]));
    assert_eq!(cone[2].simplex, coned(&[3]));
    assert_eq!(cone[2].time, f64::INFINITY);
    assert_eq!(cone[2].link, 1);
}

#[test]
fn coned_entries_run_backwards_in_time() {
    let cone = ConeFiltration::from_parts(vec![vec![0], vec![1]], vec![vec![0.0, 3.0], vec![
        1.0, 2.0,
    ]])
    .unwrap();
    let coned_times: Vec<f64> = cone
        .iter()
        .skip(1)
        .filter(|e| e.simplex.contains_cone_vertex())
        .map(|e| e.time)
        .collect();
    assert_eq!(coned_times, vec![3.0, 2.0]);
}

#[test]
fn malformed_times_are_rejected() {
    let err = ConeFiltration::from_parts(vec![vec![0]], vec![vec![1.0, 0.5]]).unwrap_err();
    assert!(matches!(
        err,
        crate::ZigzagError::InvalidZigzagInput { entry: 0, .. }
    ));
}
