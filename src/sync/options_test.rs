use super::*;
use crate::merge::MergeKind;

#[test]
fn default_values() {
    let options = SyncOptions::default();
    assert_eq!(options.batch_size, 5);
    assert_eq!(options.origin_category, "Server");
    assert_eq!(options.interval, Duration::from_secs(30));
    assert!(!options.exclusive);
    assert_eq!(options.notice_duration, Duration::from_millis(5000));
}

#[test]
fn from_config_copies_sync_section() {
    let config = SyncConfig {
        interval_secs: 10,
        batch_size: 3,
        origin_category: "Remote".to_string(),
        exclusive: true,
        merge: MergeKind::SkipExisting,
        ..SyncConfig::default()
    };

    let options = SyncOptions::from_config(&config);

    assert_eq!(options.interval, Duration::from_secs(10));
    assert_eq!(options.batch_size, 3);
    assert_eq!(options.origin_category, "Remote");
    assert!(options.exclusive);
}

#[test]
fn builders_override_fields() {
    let options = SyncOptions::default()
        .with_interval(Duration::from_secs(1))
        .with_exclusive(true);
    assert_eq!(options.interval, Duration::from_secs(1));
    assert!(options.exclusive);
}
