use stellium::split::{split_at_signs, split_by_sign};
use stellium::{Cluster, Point, Sign, SpreadOptions, Workspace, find_clusters};

fn workspace(positions: &[f64]) -> Workspace {
    let points: Vec<Point> = positions
        .iter()
        .enumerate()
        .map(|(i, p)| Point::new(format!("p{i}"), *p))
        .collect();
    Workspace::from_points(&points).unwrap()
}

#[test]
fn cluster_straddling_a_sign_boundary_splits_into_one_cluster_per_sign() {
    let ws = workspace(&[28.0, 28.0, 28.0, 32.0, 32.0, 32.0]);
    let clusters = find_clusters(&ws, &SpreadOptions::with_theta(5.5));
    assert_eq!(clusters.len(), 2);
    assert_eq!(clusters[0].members(), &[0, 1, 2]);
    assert_eq!(clusters[1].members(), &[3, 4, 5]);
    assert!(clusters[0].members().iter().all(|k| ws.sign(*k) == Sign::Aries));
    assert!(clusters[1].members().iter().all(|k| ws.sign(*k) == Sign::Taurus));
}

#[test]
fn cluster_within_one_sign_is_left_unchanged() {
    let ws = workspace(&[40.0, 42.0, 41.0]);
    let out = split_by_sign(&ws, vec![Cluster::new([0, 1, 2])]);
    assert_eq!(out, vec![Cluster::new([0, 2, 1])]);
}

#[test]
fn seam_cluster_splits_into_pisces_and_aries() {
    let ws = workspace(&[358.0, 359.0, 0.0, 1.0, 2.0]);
    let clusters = find_clusters(&ws, &SpreadOptions::with_theta(5.5));
    assert_eq!(clusters.len(), 2);
    assert_eq!(clusters[0].ids(&ws), vec!["p2", "p3", "p4"]);
    assert_eq!(clusters[1].ids(&ws), vec!["p0", "p1"]);
}

#[test]
fn sign_comes_from_the_point_not_its_display_position() {
    // Both points are displayed in Taurus, but one truly belongs to Aries.
    let points = vec![
        Point::new("a", 29.0).with_display_position(31.0),
        Point::new("b", 32.0),
    ];
    let ws = Workspace::from_points(&points).unwrap();
    let out = split_by_sign(&ws, vec![Cluster::new([0, 1])]);
    assert!(out.is_empty());
}

#[test]
fn every_sign_transition_is_split() {
    let points = vec![
        Point::with_sign("a", Sign::Aries, 28.0),
        Point::with_sign("b", Sign::Aries, 29.0),
        Point::with_sign("c", Sign::Taurus, 30.5),
        Point::with_sign("d", Sign::Taurus, 31.0),
        Point::with_sign("e", Sign::Gemini, 31.5),
        Point::with_sign("f", Sign::Gemini, 32.0),
    ];
    let ws = Workspace::from_points(&points).unwrap();
    let out = split_by_sign(&ws, vec![Cluster::new(0..6)]);
    assert_eq!(
        out,
        vec![
            Cluster::new([0, 1]),
            Cluster::new([2, 3]),
            Cluster::new([4, 5])
        ]
    );
}

#[test]
fn single_point_left_after_a_split_is_released() {
    let ws = workspace(&[28.0, 31.0, 32.0]);
    let out = split_by_sign(&ws, vec![Cluster::new([0, 1, 2])]);
    assert_eq!(out, vec![Cluster::new([1, 2])]);

    let split = split_at_signs(&ws, vec![Cluster::new([0, 1, 2])]);
    assert_eq!(split.clusters, vec![Cluster::new([1, 2])]);
    assert_eq!(split.released, vec![0]);
}

#[test]
fn tied_members_are_ordered_by_id() {
    let points = vec![Point::new("Sun", 40.0), Point::new("Moon", 40.0)];
    let ws = Workspace::from_points(&points).unwrap();
    let out = split_by_sign(&ws, vec![Cluster::new([0, 1])]);
    assert_eq!(out[0].ids(&ws), vec!["Moon", "Sun"]);
}

#[test]
fn split_clusters_never_mix_signs() {
    let positions = [
        27.0, 28.5, 29.5, 30.5, 31.0, 88.0, 89.0, 90.0, 91.0, 200.0, 330.0, 359.5, 0.5,
    ];
    let ws = workspace(&positions);
    let clusters = find_clusters(&ws, &SpreadOptions::with_theta(5.5));
    assert!(!clusters.is_empty());
    for cluster in &clusters {
        assert!(cluster.len() >= 2);
        let sign = ws.sign(cluster.members()[0]);
        assert!(cluster.members().iter().all(|k| ws.sign(*k) == sign));
    }
}
