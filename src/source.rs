use std::sync::{Arc, Mutex, PoisonError};

use flightmock_sample::{RecordMix, SampleGenerator, WireRecord};
use rand::SeedableRng;
use rand::rngs::StdRng;

use crate::config::ServiceConfig;

/// Shared handle to the process-wide sample generator.
///
/// Cloning is cheap; every clone draws from the same random source, so a seeded source yields
/// one reproducible sequence across all requests.
#[derive(Clone, Debug)]
pub struct SampleSource {
    inner: Arc<SampleSourceInner>,
}

#[derive(Debug)]
struct SampleSourceInner {
    policy: BatchPolicy,
    generator: Mutex<SampleGenerator<StdRng>>,
}

/// Shape of the batch served per request.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BatchPolicy {
    pub batch_size: usize,
    pub mix: RecordMix,
    pub include_messages: bool,
}

impl From<&ServiceConfig> for BatchPolicy {
    fn from(config: &ServiceConfig) -> Self {
        Self {
            batch_size: config.batch_size,
            mix: config.record_mix(),
            include_messages: config.include_messages,
        }
    }
}

impl SampleSource {
    /// Creates a source seeded from `seed`, or from OS entropy when `None`.
    pub fn new(policy: BatchPolicy, seed: Option<u64>) -> Self {
        let rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };

        Self {
            inner: Arc::new(SampleSourceInner {
                policy,
                generator: Mutex::new(SampleGenerator::new(rng)),
            }),
        }
    }

    pub fn from_config(config: &ServiceConfig) -> Self {
        Self::new(BatchPolicy::from(config), config.seed)
    }

    pub fn policy(&self) -> &BatchPolicy {
        &self.inner.policy
    }

    /// Generates one batch and shapes it for the wire.
    pub fn batch(&self) -> Vec<WireRecord> {
        let policy = self.inner.policy;
        // Generation cannot leave the generator half-updated, so a poisoned lock is still usable.
        let records = self
            .inner
            .generator
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .generate_batch(policy.batch_size, policy.mix);

        tracing::debug!(count = records.len(), "generated sample batch");

        records
            .iter()
            .map(|record| record.to_wire(policy.include_messages))
            .collect()
    }
}
