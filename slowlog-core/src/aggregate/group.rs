use crate::log::QueryRecord;
use serde::Serialize;

/// All records sharing one signature.
///
/// A group always holds at least one member; min/max are maintained as
/// members are pushed, everything else is derived on demand.
#[derive(Debug, Clone)]
pub struct QueryGroup {
    signature: String,
    members: Vec<QueryRecord>,
    max_elapsed: u64,
    min_elapsed: u64,
    max_lock: u64,
    min_lock: u64,
}

impl QueryGroup {
    pub fn new(signature: String, first: QueryRecord) -> Self {
        Self {
            signature,
            max_elapsed: first.elapsed_seconds,
            min_elapsed: first.elapsed_seconds,
            max_lock: first.lock_seconds,
            min_lock: first.lock_seconds,
            members: vec![first],
        }
    }

    pub fn push(&mut self, record: QueryRecord) {
        self.max_elapsed = self.max_elapsed.max(record.elapsed_seconds);
        self.min_elapsed = self.min_elapsed.min(record.elapsed_seconds);
        self.max_lock = self.max_lock.max(record.lock_seconds);
        self.min_lock = self.min_lock.min(record.lock_seconds);
        self.members.push(record);
    }

    pub fn signature(&self) -> &str {
        &self.signature
    }

    /// Members in the order they appeared in the log.
    pub fn members(&self) -> &[QueryRecord] {
        &self.members
    }

    pub fn count(&self) -> usize {
        self.members.len()
    }

    pub fn max_elapsed(&self) -> u64 {
        self.max_elapsed
    }

    pub fn min_elapsed(&self) -> u64 {
        self.min_elapsed
    }

    pub fn max_lock(&self) -> u64 {
        self.max_lock
    }

    pub fn min_lock(&self) -> u64 {
        self.min_lock
    }

    /// Truncating mean.
    pub fn average_elapsed(&self) -> u64 {
        self.average(|r| r.elapsed_seconds)
    }

    /// Truncating mean.
    pub fn average_lock(&self) -> u64 {
        self.average(|r| r.lock_seconds)
    }

    /// Element at `count / 2` of the ascending values (upper middle for even counts).
    pub fn median_elapsed(&self) -> u64 {
        Self::median(&self.sorted_elapsed())
    }

    pub fn median_lock(&self) -> u64 {
        Self::median(&self.sorted_lock())
    }

    pub fn sorted_elapsed(&self) -> Vec<u64> {
        self.sorted_by(|r| r.elapsed_seconds)
    }

    pub fn sorted_lock(&self) -> Vec<u64> {
        self.sorted_by(|r| r.lock_seconds)
    }

    pub fn total_rows_sent(&self) -> u128 {
        self.total(|r| r.rows_sent)
    }

    pub fn total_rows_examined(&self) -> u128 {
        self.total(|r| r.rows_examined)
    }

    /// The most recently seen member; its session fields represent the group.
    pub fn representative(&self) -> &QueryRecord {
        // Groups are created with a member and never shrink.
        &self.members[self.members.len() - 1]
    }

    pub fn summary(&self) -> GroupSummary {
        let representative = self.representative();

        GroupSummary {
            signature: self.signature.clone(),
            count: self.count(),
            user: representative.user.clone(),
            host: representative.host.clone(),
            ip: representative.ip.clone(),
            min_elapsed: self.min_elapsed,
            max_elapsed: self.max_elapsed,
            average_elapsed: self.average_elapsed(),
            median_elapsed: self.median_elapsed(),
            min_lock: self.min_lock,
            max_lock: self.max_lock,
            average_lock: self.average_lock(),
            median_lock: self.median_lock(),
            rows_sent: self.total_rows_sent(),
            rows_examined: self.total_rows_examined(),
        }
    }

    /// Exact sum of one field over all members.
    fn total(&self, field: impl Fn(&QueryRecord) -> u64) -> u128 {
        self.members.iter().map(|r| u128::from(field(r))).sum()
    }

    fn average(&self, field: impl Fn(&QueryRecord) -> u64) -> u64 {
        let mean = self.total(field) / self.members.len() as u128;
        // A mean never exceeds the largest member.
        u64::try_from(mean).unwrap_or(u64::MAX)
    }

    fn sorted_by(&self, field: impl Fn(&QueryRecord) -> u64) -> Vec<u64> {
        let mut values: Vec<u64> = self.members.iter().map(field).collect();
        values.sort_unstable();
        values
    }

    fn median(sorted: &[u64]) -> u64 {
        sorted[sorted.len() / 2]
    }
}

/// Flattened statistics of one group, for serialization.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GroupSummary {
    pub signature: String,
    pub count: usize,
    pub user: String,
    pub host: String,
    pub ip: String,

    pub min_elapsed: u64,
    pub max_elapsed: u64,
    pub average_elapsed: u64,
    pub median_elapsed: u64,

    pub min_lock: u64,
    pub max_lock: u64,
    pub average_lock: u64,
    pub median_lock: u64,

    pub rows_sent: u128,
    pub rows_examined: u128,
}
