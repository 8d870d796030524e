use std::{collections::HashMap, hash::Hash};

use serde::{Serialize, Serializer};

use crate::{
    invariants::{ClientAddress, StatusCode},
    models::{AnalysisSummary, LogEntry},
};

/// Counter keyed by `K` that remembers the order in which keys first appeared.
#[derive(Debug, Clone)]
pub struct Tally<K> {
    slots: HashMap<K, usize>,
    counts: Vec<(K, u64)>,
}

impl<K: PartialEq> PartialEq for Tally<K> {
    fn eq(&self, other: &Self) -> bool {
        self.counts == other.counts
    }
}

impl<K: Eq> Eq for Tally<K> {}

impl<K> Default for Tally<K> {
    fn default() -> Self {
        Self {
            slots: HashMap::new(),
            counts: Vec::new(),
        }
    }
}

impl<K: Eq + Hash + Clone> Tally<K> {
    /// Adds one to `key`, returning its new count.
    pub fn increment(&mut self, key: &K) -> u64 {
        let slot = match self.slots.get(key) {
            Some(&slot) => slot,
            None => {
                self.counts.push((key.clone(), 0));
                self.slots.insert(key.clone(), self.counts.len() - 1);
                self.counts.len() - 1
            }
        };
        let count = &mut self.counts[slot].1;
        *count += 1;
        *count
    }

    pub fn get(&self, key: &K) -> u64 {
        self.slots.get(key).map_or(0, |&slot| self.counts[slot].1)
    }
}

impl<K> Tally<K> {
    pub fn iter(&self) -> impl Iterator<Item = (&K, u64)> {
        self.counts.iter().map(|(k, v)| (k, *v))
    }

    pub fn len(&self) -> usize {
        self.counts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    pub fn total(&self) -> u64 {
        self.counts.iter().map(|(_, v)| *v).sum()
    }
}

impl<K: Serialize> Serialize for Tally<K> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_map(self.iter())
    }
}

/// Streaming aggregation state. Feed entries in file order, then [`finish`].
///
/// [`finish`]: Aggregator::finish
#[derive(Debug, Default)]
pub struct Aggregator {
    requests: u64,
    statuses: Tally<StatusCode>,
    bytes: u64,
    hosts: HashMap<ClientAddress, u64>,
    // Only replaced when another address strictly exceeds it, so ties keep
    // whichever address reached the count first.
    leader: Option<(ClientAddress, u64)>,
}

impl Aggregator {
    pub fn record(&mut self, entry: &LogEntry) {
        self.requests += 1;
        self.record_status(entry.status);
        self.record_bytes(entry.size_bytes);
        self.record_address(&entry.client_address);
    }

    fn record_status(&mut self, status: StatusCode) {
        self.statuses.increment(&status);
    }

    fn record_bytes(&mut self, bytes: u64) {
        self.bytes = self.bytes.saturating_add(bytes);
    }

    fn record_address(&mut self, address: &ClientAddress) {
        let count = match self.hosts.get_mut(address) {
            Some(count) => {
                *count += 1;
                *count
            }
            None => {
                self.hosts.insert(address.clone(), 1);
                1
            }
        };
        let leading = self.leader.as_ref().map_or(0, |(_, n)| *n);
        if count > leading {
            self.leader = Some((address.clone(), count));
        }
    }

    pub fn finish(self) -> AnalysisSummary {
        let (most_frequent_address, most_frequent_address_count) = match self.leader {
            Some((address, count)) => (Some(address), count),
            None => (None, 0),
        };
        AnalysisSummary {
            total_requests: self.requests,
            status_counts: self.statuses,
            total_bytes_transferred: self.bytes,
            most_frequent_address,
            most_frequent_address_count,
        }
    }
}

/// Summarises `entries` in one pass.
pub fn aggregate<'a>(entries: impl IntoIterator<Item = &'a LogEntry>) -> AnalysisSummary {
    let mut aggregator = Aggregator::default();
    for entry in entries {
        aggregator.record(entry);
    }
    aggregator.finish()
}
