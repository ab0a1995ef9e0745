use super::*;
use serial_test::serial;

#[test]
#[serial]
fn test_get_existing_var() {
    std::env::set_var("QK_TEST_ENV_VAR", "test_value");
    assert_eq!(EnvVar::get("QK_TEST_ENV_VAR"), Some("test_value".to_string()));
    std::env::remove_var("QK_TEST_ENV_VAR");
}

#[test]
#[serial]
fn test_get_empty_var() {
    std::env::set_var("QK_TEST_EMPTY_VAR", "   ");
    assert_eq!(EnvVar::get("QK_TEST_EMPTY_VAR"), None);
    std::env::remove_var("QK_TEST_EMPTY_VAR");
}

#[test]
fn test_get_nonexistent_var() {
    assert_eq!(EnvVar::get("QK_NONEXISTENT_VAR_12345"), None);
}

#[test]
#[serial]
fn test_get_u64_parses_number() {
    std::env::set_var("QK_TEST_NUM_VAR", "45");
    assert_eq!(EnvVar::get_u64("QK_TEST_NUM_VAR"), Some(45));
    std::env::remove_var("QK_TEST_NUM_VAR");
}

#[test]
#[serial]
fn test_get_u64_rejects_garbage() {
    std::env::set_var("QK_TEST_BAD_NUM_VAR", "thirty");
    assert_eq!(EnvVar::get_u64("QK_TEST_BAD_NUM_VAR"), None);
    std::env::remove_var("QK_TEST_BAD_NUM_VAR");
}
