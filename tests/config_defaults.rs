use std::fs;
use std::io::Write;

use blob_field::core::config::SimConfig;

#[test]
fn missing_file_falls_back_to_defaults() {
    let (cfg, err) = SimConfig::load_or_default("/definitely/not/here.ron");
    assert!(err.is_some());
    assert_eq!(cfg, SimConfig::default());
}

#[test]
fn malformed_ron_reports_parse_error() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(file, "(bodies: (count: \"twenty\"))").unwrap();
    let err = SimConfig::load_from_file(file.path()).unwrap_err();
    assert!(err.contains("parse RON"), "unexpected error: {err}");
}

#[test]
fn shipped_config_matches_defaults() {
    // The checked-in asset spells out every default; the two must not drift.
    let data = fs::read_to_string(concat!(
        env!("CARGO_MANIFEST_DIR"),
        "/assets/config/sim.ron"
    ))
    .unwrap();
    let cfg: SimConfig = ron::from_str(&data).unwrap();
    assert_eq!(cfg, SimConfig::default());
}

#[test]
fn override_file_only_touches_named_fields() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(
        file,
        "(window: (title: \"Custom\"), field: (isolation: 500.0))"
    )
    .unwrap();
    let cfg = SimConfig::load_from_file(file.path()).unwrap();
    assert_eq!(cfg.window.title, "Custom");
    assert_eq!(cfg.field.isolation, 500.0);
    assert_eq!(cfg.bodies.count, 20);
    assert_eq!(cfg.field.resolution, 96);
}
