use std::io::Write;

use beautycart::config::{Config, ConfigError};
use tempfile::NamedTempFile;

fn write_config(contents: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().expect("create temp config");
    file.write_all(contents.as_bytes()).expect("write config");
    file
}

#[test]
fn defaults_use_the_sample_catalog() {
    let config = Config::default();
    assert_eq!(config.ui.tick_rate_ms, 250);
    assert_eq!(config.catalog().len(), 3);
}

#[test]
fn empty_file_yields_defaults() {
    let file = write_config("");
    let config = Config::load_from(file.path()).expect("load");
    assert_eq!(config.ui.tick_rate_ms, 250);
    assert_eq!(config.catalog().len(), 3);
}

#[test]
fn products_override_the_sample_catalog() {
    let file = write_config(
        r#"
[ui]
tick_rate_ms = 100

[[products]]
name = "Serum"
description = "vitamin c"
price = 29.99
image = "serum"
quantity = 9

[[products]]
name = "Toner"
price = 8.5
"#,
    );
    let config = Config::load_from(file.path()).expect("load");
    assert_eq!(config.ui.tick_rate_ms, 100);

    let catalog = config.catalog();
    assert_eq!(catalog.len(), 2);

    let serum = catalog.get(0).unwrap();
    assert_eq!(serum.name, "Serum");
    assert_eq!(serum.price.cents(), 2999);
    assert_eq!(serum.quantity_available, 9);

    // Omitted fields fall back to their defaults.
    let toner = catalog.get(1).unwrap();
    assert_eq!(toner.description, "");
    assert_eq!(toner.price.cents(), 850);
    assert_eq!(toner.quantity_available, 0);
}

// -- failure modes ------------------------------------------------------------

#[test]
fn missing_explicit_file_is_a_read_error() {
    let err = Config::load_from(std::path::Path::new("/nonexistent/beautycart.toml"))
        .expect_err("should fail");
    assert!(matches!(err, ConfigError::ReadError { .. }));
}

#[test]
fn invalid_toml_is_a_parse_error() {
    let file = write_config("ui = { tick_rate_ms = ");
    let err = Config::load_from(file.path()).expect_err("should fail");
    assert!(matches!(err, ConfigError::ParseError { .. }));
}

#[test]
fn empty_product_list_fails_validation() {
    let file = write_config("products = []");
    let err = Config::load_from(file.path()).expect_err("should fail");
    assert!(matches!(err, ConfigError::ValidationError { .. }));
}

#[test]
fn duplicate_product_names_fail_validation() {
    let file = write_config(
        r#"
[[products]]
name = "Serum"
price = 1.0

[[products]]
name = "Serum"
price = 2.0
"#,
    );
    let err = Config::load_from(file.path()).expect_err("should fail");
    assert!(matches!(err, ConfigError::ValidationError { .. }));
}

#[test]
fn negative_price_fails_validation() {
    let file = write_config(
        r#"
[[products]]
name = "Serum"
price = -1.0
"#,
    );
    let err = Config::load_from(file.path()).expect_err("should fail");
    assert!(matches!(err, ConfigError::ValidationError { .. }));
}

#[test]
fn zero_tick_rate_fails_validation() {
    let file = write_config("[ui]\ntick_rate_ms = 0");
    let err = Config::load_from(file.path()).expect_err("should fail");
    assert!(matches!(err, ConfigError::ValidationError { .. }));
}

#[test]
fn validation_error_mentions_the_empty_catalog() {
    let config = Config {
        products: Some(vec![]),
        ..Config::default()
    };
    let err = config.validate().expect_err("should fail");
    assert!(err.to_string().contains("At least one product"));
}
