use crate::sync::SyncOutcome;
use owo_colors::OwoColorize;

pub struct CommandSummary {
    pub prefix: String,
    pub message: String,
}

impl CommandSummary {
    /// インポート件数のサマリ
    pub fn import(accepted: usize, dropped: usize) -> Self {
        match (accepted, dropped) {
            (a, d) if d > 0 => Self {
                prefix: "!".yellow().to_string(),
                message: format!("{} imported, {} skipped", a.green(), d.yellow()),
            },
            (a, _) if a > 0 => Self {
                prefix: "✓".green().to_string(),
                message: format!("{} quote(s) imported", a.green()),
            },
            _ => Self {
                prefix: "•".yellow().to_string(),
                message: "No quotes in file".to_string(),
            },
        }
    }

    /// 同期結果のサマリ
    pub fn sync(outcome: &SyncOutcome) -> Self {
        match outcome {
            SyncOutcome::Synced { fetched, appended } => Self {
                prefix: "✓".green().to_string(),
                message: format!("{} of {} remote post(s) added", appended.green(), fetched),
            },
            SyncOutcome::Failed(reason) => Self {
                prefix: "✗".red().to_string(),
                message: format!("Sync failed: {}", reason),
            },
            SyncOutcome::Skipped => Self {
                prefix: "•".yellow().to_string(),
                message: "Sync already in progress".to_string(),
            },
        }
    }

    pub fn print(&self) {
        println!("{} {}", self.prefix, self.message);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn import_summary_reports_skipped_entries() {
        let summary = CommandSummary::import(2, 1);
        assert!(summary.message.contains("skipped"));
    }

    #[test]
    fn import_summary_for_empty_file() {
        assert_eq!(CommandSummary::import(0, 0).message, "No quotes in file");
    }

    #[test]
    fn sync_summary_includes_failure_reason() {
        let summary = CommandSummary::sync(&SyncOutcome::Failed("timeout".to_string()));
        assert_eq!(summary.message, "Sync failed: timeout");
    }
}
