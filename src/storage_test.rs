use super::*;
use tempfile::TempDir;

// =========================================================================
// FileStorage tests
// =========================================================================

#[test]
fn test_file_storage_get_missing_file() {
    let temp_dir = TempDir::new().unwrap();
    let storage = FileStorage::in_dir(temp_dir.path());

    assert_eq!(storage.get("quotes").unwrap(), None);
}

#[test]
fn test_file_storage_set_then_get() {
    let temp_dir = TempDir::new().unwrap();
    let storage = FileStorage::in_dir(temp_dir.path());

    storage.set("selectedCategory", "Life").unwrap();

    assert_eq!(
        storage.get("selectedCategory").unwrap(),
        Some("Life".to_string())
    );
}

#[test]
fn test_file_storage_persists_across_instances() {
    let temp_dir = TempDir::new().unwrap();
    FileStorage::in_dir(temp_dir.path())
        .set("quotes", "[]")
        .unwrap();

    let reopened = FileStorage::in_dir(temp_dir.path());
    assert_eq!(reopened.get("quotes").unwrap(), Some("[]".to_string()));
}

#[test]
fn test_file_storage_set_keeps_other_keys() {
    let temp_dir = TempDir::new().unwrap();
    let storage = FileStorage::in_dir(temp_dir.path());

    storage.set("a", "1").unwrap();
    storage.set("b", "2").unwrap();
    storage.set("a", "3").unwrap();

    assert_eq!(storage.get("a").unwrap(), Some("3".to_string()));
    assert_eq!(storage.get("b").unwrap(), Some("2".to_string()));
}

#[test]
fn test_file_storage_get_without_file_is_none() {
    let temp_dir = TempDir::new().unwrap();
    let storage = FileStorage::in_dir(temp_dir.path());

    assert_eq!(storage.get("missing").unwrap(), None);
    assert!(!storage.path().exists());
}

#[test]
fn test_file_storage_corrupt_file_reads_as_empty() {
    let temp_dir = TempDir::new().unwrap();
    let storage = FileStorage::in_dir(temp_dir.path());
    std::fs::write(storage.path(), "{ not json").unwrap();

    assert_eq!(storage.get("quotes").unwrap(), None);

    // 次の書き込みで置換される
    storage.set("quotes", "[]").unwrap();
    assert_eq!(storage.get("quotes").unwrap(), Some("[]".to_string()));
}

#[test]
fn test_file_storage_creates_parent_directories() {
    let temp_dir = TempDir::new().unwrap();
    let nested = temp_dir.path().join("nested").join("dir");
    let storage = FileStorage::in_dir(&nested);

    storage.set("a", "1").unwrap();

    assert!(nested.join(STORAGE_FILE).exists());
}

// =========================================================================
// MemoryStorage tests
// =========================================================================

#[test]
fn test_memory_storage_roundtrip() {
    let storage = MemoryStorage::new();
    assert!(storage.is_empty());

    storage.set("lastQuoteIndex", "3").unwrap();

    assert_eq!(storage.get("lastQuoteIndex").unwrap(), Some("3".to_string()));
    assert_eq!(storage.len(), 1);
}

#[test]
fn test_memory_storage_with_entry() {
    let storage = MemoryStorage::with_entry("quotes", "oops");
    assert_eq!(storage.get("quotes").unwrap(), Some("oops".to_string()));
}

#[test]
fn test_memory_storage_overwrites_value() {
    let storage = MemoryStorage::new();
    storage.set("a", "1").unwrap();
    storage.set("a", "2").unwrap();

    assert_eq!(storage.get("a").unwrap(), Some("2".to_string()));
    assert_eq!(storage.len(), 1);
}
