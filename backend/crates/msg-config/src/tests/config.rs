use crate::tests::{EnvGuard, setup_config_dir};
use crate::{Config, ConfigError, StoreBackend};

use googletest::assert_that;
use googletest::prelude::{anything, contains_substring, eq, err, none, ok, some};
use serial_test::serial;

// =========================================================================
// Loading Tests
// =========================================================================

#[test]
#[serial]
fn given_no_config_file_when_load_then_defaults_validate() {
    // Given
    let (_temp, _guard) = setup_config_dir();

    // When
    let config = Config::load().unwrap();

    // Then
    assert_that!(config.validate(), ok(anything()));
    assert_eq!(config.store.backend, StoreBackend::Memory);
    assert_that!(config.retry.max_attempts, eq(3));
    assert_that!(config.auth.min_password_length, eq(6));
    assert_that!(config.store.request_timeout(), none());
}

#[test]
#[serial]
fn given_missing_config_dir_when_load_then_directory_created() {
    // Given
    let temp = tempfile::TempDir::new().unwrap();
    let nested = temp.path().join("nested").join("messenger");
    let _guard = EnvGuard::set("MSG_CONFIG_DIR", nested.to_str().unwrap());

    // When
    let result = Config::load();

    // Then
    assert_that!(result, ok(anything()));
    assert!(nested.is_dir());
}

#[test]
#[serial]
fn given_config_file_when_load_then_values_read() {
    // Given
    let (temp, _guard) = setup_config_dir();
    std::fs::write(
        temp.path().join("config.toml"),
        r#"
[store]
backend = "realtime"
base_url = "https://messenger-test.firebaseio.com"
request_timeout_secs = 15

[retry]
max_attempts = 5
jitter = false

[logging]
level = "debug"
file = "messenger.log"
"#,
    )
    .unwrap();

    // When
    let config = Config::load().unwrap();

    // Then
    assert_that!(config.validate(), ok(anything()));
    assert_eq!(config.store.backend, StoreBackend::Realtime);
    assert_that!(
        config.store.base_url,
        some(eq("https://messenger-test.firebaseio.com"))
    );
    assert_that!(config.retry.max_attempts, eq(5));
    assert!(!config.retry.jitter);
    assert_eq!(*config.logging.level, log::LevelFilter::Debug);
    assert_eq!(
        config.log_file_path().unwrap(),
        Some(temp.path().join("log").join("messenger.log"))
    );
}

#[test]
#[serial]
fn given_malformed_toml_when_load_then_toml_error() {
    // Given
    let (temp, _guard) = setup_config_dir();
    std::fs::write(temp.path().join("config.toml"), "[store\nbackend = ").unwrap();

    // When
    let result = Config::load();

    // Then
    assert!(matches!(result, Err(ConfigError::Toml { .. })));
}

#[test]
#[serial]
fn given_env_overrides_when_load_then_env_wins_over_file() {
    // Given
    let (temp, _guard) = setup_config_dir();
    std::fs::write(
        temp.path().join("config.toml"),
        "[retry]\nmax_attempts = 5\n",
    )
    .unwrap();
    let _attempts = EnvGuard::set("MSG_RETRY_MAX_ATTEMPTS", "2");
    let _backend = EnvGuard::set("MSG_STORE_BACKEND", "realtime");
    let _url = EnvGuard::set("MSG_STORE_BASE_URL", "http://127.0.0.1:9000");
    let _token = EnvGuard::set("MSG_STORE_AUTH_TOKEN", "secret-token");

    // When
    let config = Config::load().unwrap();

    // Then
    assert_that!(config.retry.max_attempts, eq(2));
    assert_eq!(config.store.backend, StoreBackend::Realtime);
    assert_eq!(config.store.auth_token.as_deref(), Some("secret-token"));
    assert_that!(config.validate(), ok(anything()));
}

#[test]
#[serial]
fn given_unknown_backend_in_env_when_load_then_error() {
    // Given
    let (_temp, _guard) = setup_config_dir();
    let _backend = EnvGuard::set("MSG_STORE_BACKEND", "firebase");

    // When
    let result = Config::load();

    // Then
    let Err(error) = result else {
        panic!("unknown backend must not fall back to memory");
    };
    assert_that!(error.to_string(), contains_substring("firebase"));
}

#[test]
#[serial]
fn given_unparseable_numeric_override_when_load_then_keeps_default() {
    // Given
    let (_temp, _guard) = setup_config_dir();
    let _attempts = EnvGuard::set("MSG_RETRY_MAX_ATTEMPTS", "many");

    // When
    let config = Config::load().unwrap();

    // Then
    assert_that!(config.retry.max_attempts, eq(3));
}

#[test]
#[serial]
fn given_log_file_with_parent_dir_when_validate_then_error() {
    // Given
    let (_temp, _guard) = setup_config_dir();
    let _file = EnvGuard::set("MSG_LOG_FILE", "../escape.log");

    // When
    let config = Config::load().unwrap();

    // Then
    assert_that!(config.validate(), err(anything()));
}

#[test]
fn given_inline_toml_when_parsed_then_unspecified_sections_default() {
    let config = Config::from_toml_str("[auth]\nmin_password_length = 8\n").unwrap();

    assert_that!(config.auth.min_password_length, eq(8));
    assert_that!(config.retry.max_attempts, eq(3));
    assert_eq!(config.store.backend, StoreBackend::Memory);
}
