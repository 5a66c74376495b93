//! Loading time logs from JSON files.

use std::path::Path;

use anyhow::{Context, Result};
use shift_core::{EmployeeId, TimeLog};

/// Reads an employee's time logs, sorted ascending by entry time.
///
/// The file holds either a JSON array of logs or one JSON object per line.
/// Logs belonging to other employees are dropped.
pub fn load_logs(path: &Path, employee: &EmployeeId) -> Result<Vec<TimeLog>> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read {}", path.display()))?;
    let all = parse_logs(&content).with_context(|| format!("failed to parse {}", path.display()))?;

    let total = all.len();
    let mut logs: Vec<TimeLog> = all
        .into_iter()
        .filter(|log| &log.employee == employee)
        .collect();
    logs.sort_by_key(|log| log.entry_time);

    let skipped = total - logs.len();
    if skipped > 0 {
        tracing::warn!(
            path = %path.display(),
            %employee,
            skipped,
            "skipped time logs belonging to other employees"
        );
    }
    tracing::debug!(
        path = %path.display(),
        %employee,
        total,
        kept = logs.len(),
        "loaded time logs"
    );
    Ok(logs)
}

fn parse_logs(content: &str) -> Result<Vec<TimeLog>> {
    if content.trim_start().starts_with('[') {
        return serde_json::from_str(content).context("invalid JSON array of time logs");
    }

    content
        .lines()
        .enumerate()
        .filter(|(_, line)| !line.trim().is_empty())
        .map(|(index, line)| {
            serde_json::from_str(line)
                .with_context(|| format!("invalid time log on line {}", index + 1))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;
    use std::sync::{Arc, Mutex};

    const ARRAY: &str = r#"[
        {"employee": "emp-1", "worksite": "hq", "entry_time": "2024-03-12T13:00:00Z", "exit_time": "2024-03-12T17:00:00Z"},
        {"employee": "emp-2", "worksite": "hq", "entry_time": "2024-03-12T09:00:00Z", "exit_time": "2024-03-12T10:00:00Z"},
        {"employee": "emp-1", "worksite": "hq", "entry_time": "2024-03-12T08:00:00Z", "exit_time": "2024-03-12T12:00:00Z"}
    ]"#;

    #[test]
    fn test_load_array_filters_and_sorts() {
        let temp = tempfile::tempdir().unwrap();
        let path = temp.path().join("logs.json");
        std::fs::write(&path, ARRAY).unwrap();

        let logs = load_logs(&path, &EmployeeId::new("emp-1").unwrap()).unwrap();
        assert_eq!(logs.len(), 2);
        assert!(logs[0].entry_time < logs[1].entry_time);
        assert!(logs.iter().all(|log| log.employee.as_str() == "emp-1"));
    }

    /// Collects formatted log output for assertions.
    #[derive(Clone, Default)]
    struct CapturedLogs(Arc<Mutex<Vec<u8>>>);

    impl io::Write for CapturedLogs {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    fn load_capturing(content: &str) -> (Vec<TimeLog>, String) {
        let temp = tempfile::tempdir().unwrap();
        let path = temp.path().join("logs.json");
        std::fs::write(&path, content).unwrap();

        let captured = CapturedLogs::default();
        let writer = captured.clone();
        let subscriber = tracing_subscriber::fmt()
            .with_writer(move || writer.clone())
            .with_ansi(false)
            .finish();
        let logs = tracing::subscriber::with_default(subscriber, || {
            load_logs(&path, &EmployeeId::new("emp-1").unwrap()).unwrap()
        });
        let output = String::from_utf8(captured.0.lock().unwrap().clone()).unwrap();
        (logs, output)
    }

    #[test]
    fn test_foreign_employee_logs_are_warned_about() {
        let (logs, output) = load_capturing(ARRAY);
        assert_eq!(logs.len(), 2);
        assert!(output.contains("WARN"));
        assert!(output.contains("skipped time logs belonging to other employees"));
        assert!(output.contains("skipped=1"));
    }

    #[test]
    fn test_no_warning_when_every_log_matches() {
        let content = r#"[
            {"employee": "emp-1", "worksite": "hq", "entry_time": "2024-03-12T08:00:00Z", "exit_time": "2024-03-12T12:00:00Z"}
        ]"#;
        let (logs, output) = load_capturing(content);
        assert_eq!(logs.len(), 1);
        assert!(!output.contains("WARN"));
    }

    #[test]
    fn test_parse_json_lines() {
        let content = concat!(
            r#"{"employee": "emp-1", "worksite": "hq", "entry_time": "2024-03-12T08:00:00Z"}"#,
            "\n\n",
            r#"{"employee": "emp-1", "worksite": "hq", "entry_time": "2024-03-12T13:00:00Z", "exit_time": null}"#,
            "\n",
        );
        let logs = parse_logs(content).unwrap();
        assert_eq!(logs.len(), 2);
        assert!(logs.iter().all(TimeLog::is_open));
    }

    #[test]
    fn test_parse_reports_bad_line() {
        let content = concat!(
            r#"{"employee": "emp-1", "worksite": "hq", "entry_time": "2024-03-12T08:00:00Z"}"#,
            "\n",
            "not json\n",
        );
        let err = parse_logs(content).unwrap_err();
        assert_eq!(err.to_string(), "invalid time log on line 2");
    }

    #[test]
    fn test_missing_file_names_path() {
        let err = load_logs(
            Path::new("/nonexistent/logs.json"),
            &EmployeeId::new("emp-1").unwrap(),
        )
        .unwrap_err();
        assert!(err.to_string().contains("/nonexistent/logs.json"));
    }
}
