#[test]
fn version_matches_cargo_pkg_version() {
    assert_eq!(stellium::VERSION, env!("CARGO_PKG_VERSION"));
    assert!(!stellium::VERSION.is_empty());
}
