// File: crates/scatter-core/tests/store.rs
// Purpose: Point store mutation, random seeding bounds and CSV loading.

use rand::rngs::StdRng;
use rand::SeedableRng;
use scatter_core::store::DEFAULT_SEED_MAX;
use scatter_core::{Error, Point, PointStore};

#[test]
fn seeding_yields_n_points_in_half_open_range() {
    let mut store = PointStore::new();
    let mut rng = StdRng::seed_from_u64(7);
    store.seed_random_with(&mut rng, 1000, 10.0, 20.0).expect("valid range");
    assert_eq!(store.len(), 1000);
    for p in store.iter() {
        assert!((10.0..20.0).contains(&p.x), "x out of range: {}", p.x);
        assert!((10.0..20.0).contains(&p.y), "y out of range: {}", p.y);
    }
}

#[test]
fn seeding_defaults_min_to_zero_and_appends() {
    let mut store = PointStore::from_points(vec![Point::new(-5.0, -5.0)]);
    store.seed_random(10, 500.0).expect("valid range");
    assert_eq!(store.len(), 11);
    assert_eq!(store.points()[0], Point::new(-5.0, -5.0));
    assert!(store.iter().skip(1).all(|p| p.x >= 0.0 && p.x < 500.0 && p.y >= 0.0 && p.y < 500.0));
}

#[test]
fn default_bound_seeds_below_one_hundred() {
    let mut store = PointStore::new();
    store.seed_random(50, DEFAULT_SEED_MAX).expect("valid range");
    assert!(store.iter().all(|p| p.x < 100.0 && p.y < 100.0));
}

#[test]
fn same_seed_same_points() {
    let mut a = PointStore::new();
    let mut b = PointStore::new();
    a.seed_random_with(&mut StdRng::seed_from_u64(42), 5, 0.0, 1.0).unwrap();
    b.seed_random_with(&mut StdRng::seed_from_u64(42), 5, 0.0, 1.0).unwrap();
    assert_eq!(a, b);
}

#[test]
fn empty_or_inverted_range_is_rejected() {
    let mut store = PointStore::new();
    for (min, max) in [(5.0, 5.0), (10.0, 1.0), (0.0, f64::INFINITY), (f64::NAN, 1.0), (-1e308, 1e308)] {
        let err = store.seed_random_between(3, min, max).unwrap_err();
        assert!(matches!(err, Error::InvalidRange { .. }));
    }
    assert!(store.is_empty());
}

#[test]
fn add_and_clear() {
    let mut store = PointStore::new();
    store.add(Point::new(1.0, 2.0));
    store.add(Point::new(1.0, 2.0));
    store.add(Point::new(4.0, 0.5));
    assert_eq!(store.len(), 3);
    assert_eq!(store.max_x(), 4.0);
    store.clear();
    assert!(store.is_empty());
    assert!(store.max_x().is_nan());
}

#[test]
fn loads_points_from_csv() {
    let data = "x,y\n1,2\n3.5, 4.25\n-1,0\n";
    let store = PointStore::from_csv_reader(data.as_bytes()).expect("parse csv");
    assert_eq!(store.points(), &[Point::new(1.0, 2.0), Point::new(3.5, 4.25), Point::new(-1.0, 0.0)]);
}

#[test]
fn malformed_csv_is_an_error() {
    let data = "x,y\n1,abc\n";
    assert!(matches!(PointStore::from_csv_reader(data.as_bytes()), Err(Error::Csv(_))));
}

#[test]
fn missing_csv_file_reports_path() {
    let err = PointStore::load_csv("target/test_out/does_not_exist.csv").unwrap_err();
    assert!(err.to_string().contains("does_not_exist.csv"));
}

#[test]
fn load_uses_the_exact_path_given() {
    let dir = std::path::Path::new("target/test_out");
    std::fs::create_dir_all(dir).expect("create out dir");
    std::fs::write(dir.join("sibling_ext.cvs"), "x,y\n1,2\n").expect("write sibling");
    let err = PointStore::load_csv(dir.join("sibling_ext.csv")).unwrap_err();
    assert!(matches!(err, Error::Io { .. }));
}
