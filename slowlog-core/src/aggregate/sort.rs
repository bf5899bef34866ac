use crate::aggregate::group::QueryGroup;
use serde::Serialize;
use std::fmt;

/// Report ordering. Every ordering is ascending.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SortKey {
    /// By maximum lock time.
    Lock,
    /// By maximum elapsed time.
    Time,
    /// By number of occurrences.
    #[default]
    Count,
}

impl SortKey {
    /// `lock` and `time` are recognized; anything else, or nothing, orders by count.
    pub fn from_arg(arg: Option<&str>) -> Self {
        match arg {
            Some("lock") => SortKey::Lock,
            Some("time") => SortKey::Time,
            _ => SortKey::Count,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            SortKey::Lock => "lock",
            SortKey::Time => "time",
            SortKey::Count => "count",
        }
    }

    fn key(self, group: &QueryGroup) -> u64 {
        match self {
            SortKey::Lock => group.max_lock(),
            SortKey::Time => group.max_elapsed(),
            SortKey::Count => group.count() as u64,
        }
    }
}

impl fmt::Display for SortKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Sorted view without reordering the groups themselves.
///
/// Stable: equal keys keep discovery order.
pub fn sorted(groups: &[QueryGroup], key: SortKey) -> Vec<&QueryGroup> {
    let mut view: Vec<&QueryGroup> = groups.iter().collect();
    view.sort_by_key(|g| key.key(g));
    view
}
