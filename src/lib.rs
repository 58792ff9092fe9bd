//! Flightmock runtime crate.
//!
//! Serves randomly generated flight-status and alert records over a single
//! `GET /flight-status` endpoint, for demo clients that need plausible data
//! without a real flight feed. Sample generation lives in `flightmock-sample`;
//! this crate wires it into an Axum server driven by environment configuration.

pub mod config;
pub mod context;
pub mod error;
pub mod routes;
pub mod runtime;
pub mod source;

pub use crate::config::{ConfigError, ServiceConfig, ServiceConfigBuilder};
pub use crate::context::{SampleContext, SampleContextRejection};
pub use crate::error::{FlightMockError, Result};
pub use crate::routes::{FLIGHT_STATUS_PATH, router};
pub use crate::runtime::{FlightMockRuntime, run, serve};
pub use crate::source::{BatchPolicy, SampleSource};
pub use flightmock_sample::{
    AlertRecord, AlertType, FlightRecord, FlightStatus, MsgType, Record, RecordMix, WireRecord,
};
