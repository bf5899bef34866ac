use chrono::{Duration, NaiveDate};
use std::fs;
use std::path::{Path, PathBuf};

/// "Today" for every fixture-driven test.
pub fn reference_day() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 6, 20).unwrap()
}

pub fn fixture_path(file: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("fixtures")
        .join(file)
}

pub fn write_log(dir: &Path, contents: &str) -> PathBuf {
    let path = dir.join("slow.log");
    fs::write(&path, contents).unwrap();
    path
}

/// Builds slow log text entry by entry.
#[derive(Default)]
pub struct LogBuilder {
    out: String,
}

impl LogBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Free text outside any entry (server banners and the like).
    pub fn noise(mut self, line: &str) -> Self {
        self.out.push_str(line);
        self.out.push('\n');
        self
    }

    /// An entry dated `days_ago` days before [`reference_day`].
    pub fn dated(mut self, days_ago: i64, user: &str, elapsed: u64, lock: u64, sql: &str) -> Self {
        let day = reference_day() - Duration::days(days_ago);
        self.out
            .push_str(&format!("# Time: {} 10:00:00\n", day.format("%y%m%d")));
        self.undated(user, elapsed, lock, sql)
    }

    /// An entry without a `# Time:` header.
    pub fn undated(mut self, user: &str, elapsed: u64, lock: u64, sql: &str) -> Self {
        self.out.push_str(&format!(
            "# User@Host: {user}[{user}] @ localhost [127.0.0.1]\n\
             # Query_time: {elapsed}  Lock_time: {lock}  Rows_sent: 1  Rows_examined: 10\n"
        ));
        self.out.push_str(sql);
        self.out.push('\n');
        self
    }

    pub fn raw(mut self, text: &str) -> Self {
        self.out.push_str(text);
        self
    }

    pub fn build(self) -> String {
        self.out
    }
}
