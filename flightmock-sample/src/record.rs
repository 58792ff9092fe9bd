use serde::{Deserialize, Serialize};

use crate::clock::{Clock, SystemClock};
use crate::kinds::{AlertType, FlightStatus, MsgType};

/// Flight identifiers handed out by the generator, `VY2375` through `VY2388`.
pub const FLIGHT_NUMBERS: [&str; 14] = [
    "VY2375", "VY2376", "VY2377", "VY2378", "VY2379", "VY2380", "VY2381", "VY2382", "VY2383",
    "VY2384", "VY2385", "VY2386", "VY2387", "VY2388",
];

/// Status snapshot for a single flight.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FlightRecord {
    pub flight_number: &'static str,
    pub status: FlightStatus,
    pub eta: Option<i64>,
    pub timestamp: i64,
}

impl FlightRecord {
    /// Creates a record, stamping it with the current time when `timestamp` is `None`.
    pub fn new(
        flight_number: &'static str,
        status: FlightStatus,
        eta: Option<i64>,
        timestamp: Option<i64>,
    ) -> Self {
        Self {
            flight_number,
            status,
            eta,
            timestamp: timestamp.unwrap_or_else(|| SystemClock.now()),
        }
    }

    /// Creates a record whose ETA is `offset` seconds away from its own timestamp.
    pub fn with_eta_offset(
        flight_number: &'static str,
        status: FlightStatus,
        offset: Option<i64>,
        timestamp: Option<i64>,
    ) -> Self {
        let mut record = Self::new(flight_number, status, None, timestamp);
        record.eta = offset.map(|offset| record.timestamp + offset);
        record
    }

    pub fn message(&self) -> &'static str {
        self.status.message()
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AlertRecord {
    pub alert_type: AlertType,
    pub timestamp: i64,
}

impl AlertRecord {
    /// Creates an alert, stamping it with the current time when `timestamp` is `None`.
    pub fn new(alert_type: AlertType, timestamp: Option<i64>) -> Self {
        Self {
            alert_type,
            timestamp: timestamp.unwrap_or_else(|| SystemClock.now()),
        }
    }

    pub fn message(&self) -> &'static str {
        self.alert_type.message()
    }
}

/// One entry of a generated batch.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Record {
    Flight(FlightRecord),
    Alert(AlertRecord),
}

impl Record {
    pub fn msg_type(&self) -> MsgType {
        match self {
            Record::Flight(_) => MsgType::FlightStatus,
            Record::Alert(_) => MsgType::Alert,
        }
    }

    pub fn timestamp(&self) -> i64 {
        match self {
            Record::Flight(flight) => flight.timestamp,
            Record::Alert(alert) => alert.timestamp,
        }
    }

    pub fn as_flight(&self) -> Option<&FlightRecord> {
        match self {
            Record::Flight(flight) => Some(flight),
            Record::Alert(_) => None,
        }
    }

    pub fn as_alert(&self) -> Option<&AlertRecord> {
        match self {
            Record::Alert(alert) => Some(alert),
            Record::Flight(_) => None,
        }
    }

    /// Flattens the record into the JSON object expected by display clients.
    ///
    /// Fields that do not apply to the record kind are emitted as `null`. The `message` field
    /// is only emitted when `include_message` is set.
    pub fn to_wire(&self, include_message: bool) -> WireRecord {
        match self {
            Record::Flight(flight) => WireRecord {
                msg_type: MsgType::FlightStatus,
                flight_number: Some(flight.flight_number.to_owned()),
                status: Some(flight.status),
                alert_type: None,
                eta: flight.eta,
                timestamp: flight.timestamp,
                message: include_message.then(|| flight.message().to_owned()),
            },
            Record::Alert(alert) => WireRecord {
                msg_type: MsgType::Alert,
                flight_number: None,
                status: None,
                alert_type: Some(alert.alert_type),
                eta: None,
                timestamp: alert.timestamp,
                message: include_message.then(|| alert.message().to_owned()),
            },
        }
    }
}

impl From<FlightRecord> for Record {
    fn from(record: FlightRecord) -> Self {
        Record::Flight(record)
    }
}

impl From<AlertRecord> for Record {
    fn from(record: AlertRecord) -> Self {
        Record::Alert(record)
    }
}

/// JSON shape of a single record as served over HTTP.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct WireRecord {
    pub msg_type: MsgType,
    pub flight_number: Option<String>,
    pub status: Option<FlightStatus>,
    pub alert_type: Option<AlertType>,
    pub eta: Option<i64>,
    pub timestamp: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}
