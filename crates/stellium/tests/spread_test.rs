use stellium::spread::{spread, spread_cluster};
use stellium::{Cluster, Point, SpreadOptions, Workspace, find_clusters};

fn workspace(positions: &[f64]) -> Workspace {
    let points: Vec<Point> = positions
        .iter()
        .enumerate()
        .map(|(i, p)| Point::new(format!("p{i}"), *p))
        .collect();
    Workspace::from_points(&points).unwrap()
}

fn assert_close(actual: f64, expected: f64) {
    assert!(
        (actual - expected).abs() < 1e-9,
        "expected {expected}, got {actual}"
    );
}

fn assert_evenly_spaced(ws: &Workspace, cluster: &Cluster, theta: f64) {
    for pair in cluster.members().windows(2) {
        assert_close(ws.position(pair[1]) - ws.position(pair[0]), theta);
    }
}

#[test]
fn two_point_cluster_is_spread_around_its_midpoint() {
    let mut ws = workspace(&[12.0, 10.0]);
    let mut cluster = Cluster::new([0, 1]);
    spread_cluster(&mut ws, &mut cluster, 5.0);
    assert_close(ws.position(1), 6.0);
    assert_close(ws.position(0), 11.0);
    assert_eq!(cluster.members(), &[1, 0]);
}

#[test]
fn directional_example_is_spread_inside_its_sign_as_far_as_possible() {
    let mut ws = workspace(&[0.0, 1.0, 1.0, 1.0, 14.0]);
    let mut cluster = Cluster::new(0..5);
    spread_cluster(&mut ws, &mut cluster, 5.5);
    let expected = [-0.25, 5.25, 10.75, 16.25, 21.75];
    for (key, want) in expected.iter().enumerate() {
        assert_close(ws.position(key), *want);
    }
}

#[test]
fn full_sign_stellium_is_centred_on_the_sign() {
    let positions = [0.0; 13];
    let mut ws = workspace(&positions);
    let mut clusters = find_clusters(&ws, &SpreadOptions::with_theta(5.5));
    assert_eq!(clusters.len(), 1);
    assert_eq!(clusters[0].len(), 13);

    spread(&mut ws, &mut clusters, 5.5);
    assert_evenly_spaced(&ws, &clusters[0], 5.5);
    assert_close(clusters[0].mean_position(&ws), 15.0);
    // equal positions are ordered by id, so "p9" takes the last slot
    assert_close(ws.position(0), -18.0);
    assert_close(ws.position(9), 48.0);
}

#[test]
fn spread_keeps_the_original_order_of_members() {
    let mut ws = workspace(&[101.0, 100.0, 102.5, 100.5]);
    let mut cluster = Cluster::new(0..4);
    spread_cluster(&mut ws, &mut cluster, 4.0);
    assert!(ws.position(1) < ws.position(3));
    assert!(ws.position(3) < ws.position(0));
    assert!(ws.position(0) < ws.position(2));
}

#[test]
fn every_spread_cluster_is_evenly_spaced_by_theta() {
    let positions = [
        27.0, 28.5, 29.5, 30.5, 31.0, 88.0, 89.0, 90.0, 91.0, 200.0, 201.0, 201.5, 359.5, 355.0,
        356.0,
    ];
    let theta = 5.3;
    let mut ws = workspace(&positions);
    let mut clusters = find_clusters(&ws, &SpreadOptions::with_theta(theta));
    assert!(clusters.len() >= 4);
    spread(&mut ws, &mut clusters, theta);
    for cluster in &clusters {
        assert_evenly_spaced(&ws, cluster, theta);
    }
}
