//! Sample generation for the flightmock endpoint.
//!
//! Every record is synthesized from a random source and a clock, both injected into
//! [`SampleGenerator`] so tests can pin them. Statuses map to fixed messages and to an ETA
//! window relative to the record's own timestamp, so a generated record is always internally
//! consistent.

mod clock;
mod kinds;
mod record;

use rand::Rng;

pub use crate::clock::{Clock, FixedClock, SystemClock};
pub use crate::kinds::{AlertType, FlightStatus, MsgType};
pub use crate::record::{AlertRecord, FLIGHT_NUMBERS, FlightRecord, Record, WireRecord};

/// Which record kinds a batch may contain.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum RecordMix {
    /// Each record is a flight status or an alert with equal probability.
    #[default]
    FlightsAndAlerts,
    FlightsOnly,
}

impl RecordMix {
    pub fn from_include_alerts(include_alerts: bool) -> Self {
        if include_alerts {
            RecordMix::FlightsAndAlerts
        } else {
            RecordMix::FlightsOnly
        }
    }
}

/// Produces random flight-status and alert records.
///
/// # Examples
/// ```
/// use flightmock_sample::{FixedClock, RecordMix, SampleGenerator};
/// use rand::SeedableRng;
/// use rand::rngs::StdRng;
///
/// let mut generator = SampleGenerator::with_clock(StdRng::seed_from_u64(7), FixedClock(1_000));
/// let batch = generator.generate_batch(5, RecordMix::FlightsOnly);
/// assert_eq!(batch.len(), 5);
/// assert!(batch.iter().all(|record| record.as_flight().is_some()));
/// ```
#[derive(Debug)]
pub struct SampleGenerator<R, C = SystemClock> {
    rng: R,
    clock: C,
}

impl<R: Rng> SampleGenerator<R> {
    pub fn new(rng: R) -> Self {
        Self::with_clock(rng, SystemClock)
    }
}

impl<R: Rng, C: Clock> SampleGenerator<R, C> {
    pub fn with_clock(rng: R, clock: C) -> Self {
        Self { rng, clock }
    }

    pub fn clock(&self) -> &C {
        &self.clock
    }

    /// Draws a status and a flight number uniformly and derives the ETA from the status.
    pub fn generate_flight_record(&mut self) -> FlightRecord {
        let status = FlightStatus::ALL[self.rng.gen_range(0..FlightStatus::ALL.len())];
        let flight_number = FLIGHT_NUMBERS[self.rng.gen_range(0..FLIGHT_NUMBERS.len())];
        let offset = status
            .eta_window()
            .map(|(low, high)| self.rng.gen_range(low..=high));

        FlightRecord::with_eta_offset(flight_number, status, offset, Some(self.clock.now()))
    }

    pub fn generate_alert_record(&mut self) -> AlertRecord {
        let alert_type = AlertType::ALL[self.rng.gen_range(0..AlertType::ALL.len())];
        AlertRecord::new(alert_type, Some(self.clock.now()))
    }

    /// Generates `n` independent records in generation order.
    pub fn generate_batch(&mut self, n: usize, mix: RecordMix) -> Vec<Record> {
        (0..n)
            .map(|_| match mix {
                RecordMix::FlightsAndAlerts if self.rng.gen_bool(0.5) => {
                    Record::Alert(self.generate_alert_record())
                }
                _ => Record::Flight(self.generate_flight_record()),
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use rand::SeedableRng;
    use rand::rngs::StdRng;

    use super::*;

    const NOW: i64 = 1_700_000_000;

    fn generator(seed: u64) -> SampleGenerator<StdRng, FixedClock> {
        SampleGenerator::with_clock(StdRng::seed_from_u64(seed), FixedClock(NOW))
    }

    #[test]
    fn flight_numbers_stay_in_pool() {
        let mut generator = generator(1);
        for _ in 0..500 {
            let record = generator.generate_flight_record();
            assert!(FLIGHT_NUMBERS.contains(&record.flight_number));
        }
    }

    #[test]
    fn eta_respects_status_windows() {
        let mut generator = generator(2);
        for _ in 0..2_000 {
            let record = generator.generate_flight_record();
            assert_eq!(record.timestamp, NOW);
            match record.status {
                FlightStatus::Scheduled | FlightStatus::Delayed => {
                    let eta = record.eta.expect("future eta");
                    assert!(eta > record.timestamp);
                    assert!((3_600..=18_000).contains(&(eta - record.timestamp)));
                }
                FlightStatus::Departed => {
                    let eta = record.eta.expect("past eta");
                    assert!(eta < record.timestamp);
                    assert!((900..=7_200).contains(&(record.timestamp - eta)));
                }
                FlightStatus::Arrived => {
                    let eta = record.eta.expect("past eta");
                    assert!(eta < record.timestamp);
                    assert!((300..=3_600).contains(&(record.timestamp - eta)));
                }
                FlightStatus::Cancelled => assert!(record.eta.is_none()),
            }
            assert_eq!(record.message(), record.status.message());
        }
    }

    #[test]
    fn every_category_is_reachable() {
        let mut generator = generator(3);
        let statuses: HashSet<_> = (0..500)
            .map(|_| generator.generate_flight_record().status)
            .collect();
        let alerts: HashSet<_> = (0..500)
            .map(|_| generator.generate_alert_record().alert_type)
            .collect();
        let numbers: HashSet<_> = (0..2_000)
            .map(|_| generator.generate_flight_record().flight_number)
            .collect();

        assert_eq!(statuses.len(), FlightStatus::ALL.len());
        assert_eq!(alerts.len(), AlertType::ALL.len());
        assert_eq!(numbers.len(), FLIGHT_NUMBERS.len());
    }

    #[test]
    fn alert_messages_are_fixed() {
        let mut generator = generator(4);
        for _ in 0..100 {
            let alert = generator.generate_alert_record();
            assert_eq!(alert.message(), alert.alert_type.message());
            assert_eq!(alert.timestamp, NOW);
        }
    }

    #[test]
    fn batch_has_requested_length() {
        let mut generator = generator(5);
        assert!(generator.generate_batch(0, RecordMix::FlightsAndAlerts).is_empty());
        assert_eq!(generator.generate_batch(1, RecordMix::FlightsAndAlerts).len(), 1);
        assert_eq!(generator.generate_batch(5, RecordMix::FlightsAndAlerts).len(), 5);
    }

    #[test]
    fn flights_only_batch_has_no_alerts() {
        let mut generator = generator(6);
        let batch = generator.generate_batch(200, RecordMix::FlightsOnly);
        assert!(batch.iter().all(|record| record.msg_type() == MsgType::FlightStatus));
    }

    #[test]
    fn mixed_batch_contains_both_kinds() {
        let mut generator = generator(7);
        let batch = generator.generate_batch(200, RecordMix::FlightsAndAlerts);
        assert!(batch.iter().any(|record| record.as_alert().is_some()));
        assert!(batch.iter().any(|record| record.as_flight().is_some()));
    }

    #[test]
    fn same_seed_same_batch() {
        let first = generator(8).generate_batch(20, RecordMix::FlightsAndAlerts);
        let second = generator(8).generate_batch(20, RecordMix::FlightsAndAlerts);
        assert_eq!(first, second);
    }
}
