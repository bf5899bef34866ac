use crate::aggregate::group::QueryGroup;
use crate::log::QueryRecord;
use crate::normalize::Normalizer;
use ahash::AHashMap;

/// Signature → group table for one run.
///
/// Groups are kept in discovery order, which is the tie-break order when
/// sorting. Nothing is ever evicted.
#[derive(Debug, Default)]
pub struct Aggregator {
    normalizer: Normalizer,
    index: AHashMap<String, usize>,
    groups: Vec<QueryGroup>,
}

impl Aggregator {
    pub fn new(normalizer: Normalizer) -> Self {
        Self {
            normalizer,
            index: AHashMap::new(),
            groups: Vec::new(),
        }
    }

    pub fn add_record(&mut self, record: QueryRecord) {
        let signature = self.normalizer.signature(&record.sql);
        self.add_with_signature(signature, record);
    }

    pub fn add_with_signature(&mut self, signature: String, record: QueryRecord) {
        match self.index.get(&signature) {
            Some(&i) => self.groups[i].push(record),
            None => {
                self.index.insert(signature.clone(), self.groups.len());
                self.groups.push(QueryGroup::new(signature, record));
            }
        }
    }

    pub fn get(&self, signature: &str) -> Option<&QueryGroup> {
        self.index.get(signature).map(|&i| &self.groups[i])
    }

    pub fn groups(&self) -> &[QueryGroup] {
        &self.groups
    }

    pub fn into_groups(self) -> Vec<QueryGroup> {
        self.groups
    }

    pub fn len(&self) -> usize {
        self.groups.len()
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    /// Total number of records across all groups.
    pub fn record_count(&self) -> usize {
        self.groups.iter().map(QueryGroup::count).sum()
    }
}

impl Extend<QueryRecord> for Aggregator {
    fn extend<I: IntoIterator<Item = QueryRecord>>(&mut self, records: I) {
        for record in records {
            self.add_record(record);
        }
    }
}
