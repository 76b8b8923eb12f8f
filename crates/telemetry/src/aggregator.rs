use crate::types::{Sample, ServiceSummary, Window};
use chrono::{DateTime, Utc};
use std::collections::{HashMap, VecDeque};
use std::sync::Mutex;

/// Samples retained per service before the oldest are evicted.
pub const DEFAULT_CAPACITY_PER_SERVICE: usize = 4096;

/// Concurrency-safe store of per-call duration samples, keyed by service
/// name.
///
/// Created once at startup and shared behind an `Arc`; a single mutex
/// serializes mutation, and `summarize` folds aggregates while holding the
/// lock so readers never observe a partially-appended sample. Each service
/// keeps a bounded ring of recent samples, so memory use is capped at
/// `capacity` entries per service no matter how long the process runs.
///
/// `record` deliberately cannot fail: telemetry must never break the
/// request it is measuring.
#[derive(Debug)]
pub struct Aggregator {
    capacity: usize,
    buckets: Mutex<HashMap<String, VecDeque<Sample>>>,
}

impl Default for Aggregator {
    fn default() -> Self {
        Self::new(DEFAULT_CAPACITY_PER_SERVICE)
    }
}

impl Aggregator {
    pub fn new(capacity_per_service: usize) -> Self {
        Self {
            capacity: capacity_per_service.max(1),
            buckets: Mutex::new(HashMap::new()),
        }
    }

    /// Appends a sample stamped with the current time.
    pub fn record(&self, service: &str, duration_ms: u64) {
        self.record_at(service, Utc::now(), duration_ms);
    }

    /// Appends a sample with an explicit timestamp.
    ///
    /// Silently drops the sample on any internal failure (empty service
    /// name, poisoned lock after a panicking thread); callers on the
    /// request path are never affected.
    pub fn record_at(&self, service: &str, timestamp: DateTime<Utc>, duration_ms: u64) {
        if service.is_empty() {
            tracing::warn!("telemetry sample dropped: empty service name");
            return;
        }

        let mut buckets = match self.buckets.lock() {
            Ok(guard) => guard,
            Err(poisoned) => {
                tracing::warn!("telemetry lock poisoned, recovering");
                poisoned.into_inner()
            }
        };

        let bucket = buckets
            .entry(service.to_owned())
            .or_insert_with(|| VecDeque::with_capacity(self.capacity.min(64)));
        if bucket.len() == self.capacity {
            bucket.pop_front();
        }
        bucket.push_back(Sample {
            timestamp,
            duration_ms,
        });
    }

    /// Aggregates count/avg/min/max per service over the samples whose
    /// timestamp falls inside `window`. Services with no samples in the
    /// window get no entry.
    ///
    /// The lock is held only while copying the buckets out (samples are
    /// `Copy`, so this is a bulk memcpy); filtering and folding run on the
    /// snapshot, so concurrent `record` calls never wait on aggregation
    /// work.
    pub fn summarize(&self, window: &Window) -> HashMap<String, ServiceSummary> {
        let snapshot: Vec<(String, Vec<Sample>)> = {
            let buckets = match self.buckets.lock() {
                Ok(guard) => guard,
                Err(poisoned) => {
                    tracing::warn!("telemetry lock poisoned, recovering");
                    poisoned.into_inner()
                }
            };
            buckets
                .iter()
                .map(|(service, samples)| {
                    (service.clone(), samples.iter().copied().collect())
                })
                .collect()
        };

        let mut summaries = HashMap::new();
        for (service, samples) in snapshot {
            let mut count: u64 = 0;
            let mut total: u64 = 0;
            let mut min = u64::MAX;
            let mut max = 0u64;

            for sample in samples.iter().filter(|s| window.contains(s.timestamp)) {
                count += 1;
                total += sample.duration_ms;
                min = min.min(sample.duration_ms);
                max = max.max(sample.duration_ms);
            }

            if count > 0 {
                summaries.insert(
                    service,
                    ServiceSummary {
                        count,
                        avg_duration_ms: total as f64 / count as f64,
                        min_duration_ms: min,
                        max_duration_ms: max,
                    },
                );
            }
        }

        summaries
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use std::sync::Arc;
    use std::thread;

    fn at(second: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 6, 1, 12, 0, second).unwrap()
    }

    #[test]
    fn summarizes_count_avg_min_max() {
        let aggregator = Aggregator::default();
        for (i, duration) in [10, 20, 30, 40, 50].into_iter().enumerate() {
            aggregator.record_at("x", at(i as u32), duration);
        }

        let summaries = aggregator.summarize(&Window::default());
        let x = &summaries["x"];
        assert_eq!(x.count, 5);
        assert_eq!(x.avg_duration_ms, 30.0);
        assert_eq!(x.min_duration_ms, 10);
        assert_eq!(x.max_duration_ms, 50);
    }

    #[test]
    fn empty_window_yields_an_empty_map() {
        let aggregator = Aggregator::default();
        aggregator.record_at("simulation", at(30), 12);

        let before = Window::between(at(0), at(10));
        assert!(aggregator.summarize(&before).is_empty());
    }

    #[test]
    fn window_endpoints_are_inclusive() {
        let aggregator = Aggregator::default();
        aggregator.record_at("simulation", at(10), 5);
        aggregator.record_at("simulation", at(20), 15);
        aggregator.record_at("simulation", at(30), 25);

        let summaries = aggregator.summarize(&Window::between(at(10), at(20)));
        assert_eq!(summaries["simulation"].count, 2);
    }

    #[test]
    fn services_outside_the_window_get_no_entry() {
        let aggregator = Aggregator::default();
        aggregator.record_at("risk-profile", at(5), 3);
        aggregator.record_at("simulation", at(40), 7);

        let summaries = aggregator.summarize(&Window::between(at(0), at(10)));
        assert_eq!(summaries.len(), 1);
        assert!(summaries.contains_key("risk-profile"));
        assert!(!summaries.contains_key("simulation"));
    }

    #[test]
    fn ring_buffer_keeps_only_the_newest_samples() {
        let aggregator = Aggregator::new(3);
        for i in 0..5u64 {
            aggregator.record_at("x", at(i as u32), i * 10);
        }

        let summaries = aggregator.summarize(&Window::default());
        let x = &summaries["x"];
        assert_eq!(x.count, 3);
        // Samples 0 and 10 were evicted.
        assert_eq!(x.min_duration_ms, 20);
        assert_eq!(x.max_duration_ms, 40);
    }

    #[test]
    fn empty_service_names_are_dropped() {
        let aggregator = Aggregator::default();
        aggregator.record("", 10);
        assert!(aggregator.summarize(&Window::default()).is_empty());
    }

    #[test]
    fn concurrent_recording_loses_no_samples() {
        let aggregator = Arc::new(Aggregator::default());
        let mut handles = Vec::new();

        for t in 0..8 {
            let aggregator = Arc::clone(&aggregator);
            handles.push(thread::spawn(move || {
                for i in 0..100 {
                    aggregator.record("concurrent", (t * 100 + i) as u64);
                }
            }));
        }
        for handle in handles {
            handle.join().unwrap();
        }

        let summaries = aggregator.summarize(&Window::default());
        assert_eq!(summaries["concurrent"].count, 800);
    }

    #[test]
    fn summaries_snapshot_the_buckets_at_call_time() {
        let aggregator = Aggregator::default();
        aggregator.record_at("simulation", at(10), 20);
        aggregator.record_at("simulation", at(11), 40);

        let before = aggregator.summarize(&Window::default());

        // Samples recorded afterwards do not leak into the earlier
        // summary, and the new summary folds them in.
        aggregator.record_at("simulation", at(12), 90);
        assert_eq!(before["simulation"].count, 2);
        assert_eq!(before["simulation"].max_duration_ms, 40);

        let after = aggregator.summarize(&Window::default());
        assert_eq!(after["simulation"].count, 3);
        assert_eq!(after["simulation"].max_duration_ms, 90);
    }

    #[test]
    fn summaries_are_consistent_while_recording() {
        let aggregator = Arc::new(Aggregator::default());
        let writer = {
            let aggregator = Arc::clone(&aggregator);
            thread::spawn(move || {
                for _ in 0..500 {
                    aggregator.record("busy", 7);
                }
            })
        };

        for _ in 0..50 {
            let summaries = aggregator.summarize(&Window::default());
            if let Some(busy) = summaries.get("busy") {
                // Every observed sample is whole: min and max can only be
                // the one recorded duration.
                assert_eq!(busy.min_duration_ms, 7);
                assert_eq!(busy.max_duration_ms, 7);
            }
        }
        writer.join().unwrap();
    }
}
