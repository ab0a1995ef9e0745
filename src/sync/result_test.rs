use super::*;

#[test]
fn appended_counts_only_synced() {
    let synced = SyncOutcome::Synced {
        fetched: 7,
        appended: 5,
    };
    assert!(synced.is_synced());
    assert_eq!(synced.appended(), 5);

    assert_eq!(SyncOutcome::Failed("boom".to_string()).appended(), 0);
    assert!(!SyncOutcome::Skipped.is_synced());
    assert_eq!(SyncOutcome::Skipped.appended(), 0);
}
