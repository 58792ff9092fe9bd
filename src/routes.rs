use axum::routing::get;
use axum::{Json, Router};
use flightmock_sample::WireRecord;

use crate::context::SampleContext;

/// Path served to display clients.
pub const FLIGHT_STATUS_PATH: &str = "/flight-status";

/// Builds the service router. The runtime attaches the [`SampleSource`](crate::SampleSource).
pub fn router() -> Router {
    Router::new()
        .route("/", get(health))
        .route(FLIGHT_STATUS_PATH, get(flight_status))
}

async fn health() -> &'static str {
    "ok"
}

async fn flight_status(context: SampleContext) -> Json<Vec<WireRecord>> {
    Json(context.batch())
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::extract::Extension;
    use axum::http::{Request, StatusCode};
    use flightmock_sample::{FLIGHT_NUMBERS, FlightStatus, MsgType};
    use serde_json::Value;
    use tower::ServiceExt;

    use crate::config::ServiceConfig;
    use crate::source::SampleSource;

    fn app(config: &ServiceConfig) -> Router {
        router().layer(Extension(SampleSource::from_config(config)))
    }

    async fn get_json(app: Router, uri: &str) -> (StatusCode, Value) {
        let response = app
            .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();
        let status = response.status();
        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        (status, serde_json::from_slice(&body).unwrap_or(Value::Null))
    }

    #[tokio::test]
    async fn health_responds_ok() {
        let response = app(&ServiceConfig::default())
            .oneshot(Request::builder().uri("/").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body = axum::body::to_bytes(response.into_body(), 16).await.unwrap();
        assert_eq!(&body[..], b"ok");
    }

    #[tokio::test]
    async fn serves_default_batch() {
        let config = ServiceConfig::builder().seed(11).build();
        let (status, body) = get_json(app(&config), FLIGHT_STATUS_PATH).await;

        assert_eq!(status, StatusCode::OK);
        let records = body.as_array().expect("array body");
        assert_eq!(records.len(), 5);

        for record in records {
            let object = record.as_object().expect("object record");
            for field in [
                "msg_type",
                "flight_number",
                "status",
                "alert_type",
                "eta",
                "timestamp",
            ] {
                assert!(object.contains_key(field), "missing {field}");
            }
            assert!(!object.contains_key("message"));
            assert!(object["timestamp"].is_i64());
        }
    }

    #[tokio::test]
    async fn serves_configured_flight_only_batch() {
        let config = ServiceConfig::builder()
            .batch_size(1)
            .include_alerts(false)
            .include_messages(true)
            .seed(12)
            .build();
        let (status, body) = get_json(app(&config), FLIGHT_STATUS_PATH).await;

        assert_eq!(status, StatusCode::OK);
        let records: Vec<WireRecord> = serde_json::from_value(body).unwrap();
        assert_eq!(records.len(), 1);

        let record = &records[0];
        assert_eq!(record.msg_type, MsgType::FlightStatus);
        assert!(record.alert_type.is_none());
        let number = record.flight_number.as_deref().expect("flight number");
        assert!(FLIGHT_NUMBERS.iter().any(|candidate| *candidate == number));
        let status = record.status.expect("status");
        assert_eq!(record.message.as_deref(), Some(status.message()));
        assert_eq!(record.eta.is_none(), status == FlightStatus::Cancelled);
    }

    #[tokio::test]
    async fn missing_source_is_a_server_error() {
        let (status, _) = get_json(router(), FLIGHT_STATUS_PATH).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    }
}
