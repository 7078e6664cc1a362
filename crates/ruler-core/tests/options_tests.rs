use ruler_core::*;

#[test]
fn test_default_spec_is_valid() {
    let spec = RulerSpec::default();
    assert!(spec.validate().is_ok());
    assert_eq!(spec, RulerSpec::new(30, 4, true));
}

#[test]
fn test_from_input_parses_fields() {
    let spec = RulerSpec::from_input(" 25", "3 ", false).unwrap();
    assert_eq!(spec, RulerSpec::new(25, 3, false));
}

#[test]
fn test_from_input_rejects_non_numeric() {
    match RulerSpec::from_input("abc", "3", true) {
        Err(RulerError::InvalidArgument(msg)) => assert!(msg.contains("Upper limit")),
        other => panic!("Expected InvalidArgument, got {other:?}"),
    }
    match RulerSpec::from_input("3", "", true) {
        Err(RulerError::InvalidArgument(msg)) => assert!(msg.contains("Scale")),
        other => panic!("Expected InvalidArgument, got {other:?}"),
    }
    assert!(RulerSpec::from_input("2.5", "3", true).is_err());
}

#[test]
fn test_from_input_rejects_negative() {
    assert!(matches!(
        RulerSpec::from_input("-1", "5", false),
        Err(RulerError::InvalidArgument(_))
    ));
    assert!(matches!(
        RulerSpec::from_input("1", "-5", false),
        Err(RulerError::InvalidArgument(_))
    ));
}

#[test]
fn test_title() {
    assert_eq!(
        RulerSpec::new(12, 3, false).title(),
        "Ruler from 0 to 12 cm with scale 3"
    );
}

#[test]
fn test_spec_builds_geometry_and_layout() {
    let spec = RulerSpec::new(2, 5, false);
    assert_eq!(spec.geometry().unwrap(), build_geometry(2, 5, false).unwrap());
    assert_eq!(spec.build().unwrap().stripes.len(), 21);
}

#[cfg(feature = "serde")]
#[tokio::test]
async fn test_save_and_load_config() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("ruler.json");

    let spec = RulerSpec::new(42, 6, false);
    spec.save(&path).await.unwrap();

    let loaded = RulerSpec::load(&path).await.unwrap();
    assert_eq!(loaded, spec);
}

#[cfg(feature = "serde")]
#[tokio::test]
async fn test_load_malformed_config() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("broken.json");
    tokio::fs::write(&path, b"{ not json").await.unwrap();

    match RulerSpec::load(&path).await {
        Err(RulerError::Config(msg)) => assert!(msg.contains("Failed to parse config")),
        other => panic!("Expected Config error, got {other:?}"),
    }
}

#[cfg(feature = "serde")]
#[tokio::test]
async fn test_load_config_with_negative_values() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("negative.json");
    tokio::fs::write(
        &path,
        br#"{ "max_cm": -4, "pixel_scale": 2, "show_fives": true }"#,
    )
    .await
    .unwrap();

    assert!(matches!(
        RulerSpec::load(&path).await,
        Err(RulerError::InvalidArgument(_))
    ));
}

#[cfg(feature = "serde")]
#[tokio::test]
async fn test_load_missing_config() {
    let dir = tempfile::tempdir().unwrap();
    let result = RulerSpec::load(dir.path().join("missing.json")).await;
    assert!(matches!(result, Err(RulerError::Io(_))));
}
