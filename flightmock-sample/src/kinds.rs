use serde::{Deserialize, Serialize};

/// Kind of message carried by a wire record.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MsgType {
    #[serde(rename = "flightStatus")]
    FlightStatus,
    #[serde(rename = "alert")]
    Alert,
}

/// Lifecycle state of a flight.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FlightStatus {
    Scheduled,
    Departed,
    Arrived,
    Delayed,
    Cancelled,
}

impl FlightStatus {
    pub const ALL: [FlightStatus; 5] = [
        FlightStatus::Scheduled,
        FlightStatus::Departed,
        FlightStatus::Arrived,
        FlightStatus::Delayed,
        FlightStatus::Cancelled,
    ];

    /// Human-readable text shown next to the flight on the display.
    pub fn message(self) -> &'static str {
        match self {
            FlightStatus::Scheduled => "Flight scheduled to depart on time.",
            FlightStatus::Departed => "Flight has successfully departed.",
            FlightStatus::Arrived => "Flight has landed successfully.",
            FlightStatus::Delayed => "Flight delayed due to weather conditions.",
            FlightStatus::Cancelled => "Flight cancelled due to technical issues.",
        }
    }

    /// Inclusive range, in seconds, of the ETA relative to the record timestamp.
    ///
    /// Upcoming flights get a future ETA, flights already in the air or on the ground a past
    /// one. Cancelled flights have no ETA.
    pub fn eta_window(self) -> Option<(i64, i64)> {
        match self {
            FlightStatus::Scheduled | FlightStatus::Delayed => Some((HOUR, 5 * HOUR)),
            FlightStatus::Departed => Some((-120 * MINUTE, -15 * MINUTE)),
            FlightStatus::Arrived => Some((-60 * MINUTE, -5 * MINUTE)),
            FlightStatus::Cancelled => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            FlightStatus::Scheduled => "scheduled",
            FlightStatus::Departed => "departed",
            FlightStatus::Arrived => "arrived",
            FlightStatus::Delayed => "delayed",
            FlightStatus::Cancelled => "cancelled",
        }
    }
}

/// On-board alert categories.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AlertType {
    Medical,
    Evacuation,
    /// Kept as `aliens` on the wire, which is what existing display clients match on.
    #[serde(rename = "aliens")]
    UnidentifiedObject,
    Fire,
}

impl AlertType {
    pub const ALL: [AlertType; 4] = [
        AlertType::Medical,
        AlertType::Evacuation,
        AlertType::UnidentifiedObject,
        AlertType::Fire,
    ];

    pub fn message(self) -> &'static str {
        match self {
            AlertType::Medical => "Medical emergency on board. Please remain seated.",
            AlertType::Evacuation => "Emergency evacuation required. Follow crew instructions.",
            AlertType::UnidentifiedObject => "Unidentified flying objects spotted. Stay calm.",
            AlertType::Fire => "Fire detected. Prepare for emergency procedures.",
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            AlertType::Medical => "medical",
            AlertType::Evacuation => "evacuation",
            AlertType::UnidentifiedObject => "aliens",
            AlertType::Fire => "fire",
        }
    }
}

const MINUTE: i64 = 60;
const HOUR: i64 = 60 * MINUTE;
