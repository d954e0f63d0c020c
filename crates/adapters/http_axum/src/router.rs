//! Axum router assembly.

use axum::Router;
use axum::routing::get;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use emsdash_app::ports::Bus;

use crate::state::AppState;

/// Build the top-level axum [`Router`].
///
/// Nests the API under `/rest` and falls back to the dashboard assets for
/// every other path when an assets directory is configured.
/// Includes a [`TraceLayer`] that logs each HTTP request/response at the
/// `DEBUG` level using the `tracing` ecosystem.
pub fn build<B>(state: AppState<B>) -> Router
where
    B: Bus + 'static,
{
    let mut router = Router::new()
        .route("/health", get(health_check))
        .nest("/rest", crate::api::routes());

    if let Some(dir) = &state.assets_dir {
        router = router.fallback_service(ServeDir::new(dir));
    }

    router.layer(TraceLayer::new_for_http()).with_state(state)
}

async fn health_check() -> &'static str {
    "OK"
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::future::Future;
    use std::sync::Mutex;

    use axum::body::Body;
    use axum::http::{Request, StatusCode, header};
    use emsdash_app::services::bus_service::BusService;
    use emsdash_domain::bus_status::{BusStatus, TelegramCounters};
    use emsdash_domain::device::Device;
    use emsdash_domain::device_data::DeviceData;
    use emsdash_domain::device_value::DeviceValue;
    use emsdash_domain::error::BusError;
    use emsdash_domain::id::DeviceId;
    use emsdash_domain::inventory::Inventory;
    use emsdash_domain::sensor::Sensor;
    use emsdash_domain::viewer::Viewer;
    use http_body_util::BodyExt;
    use tower::ServiceExt;

    #[derive(Default)]
    struct StubBus {
        scans: Mutex<u32>,
        writes: Mutex<Vec<DeviceValue>>,
    }

    impl Bus for StubBus {
        fn inventory(&self) -> impl Future<Output = Inventory> + Send {
            async {
                Inventory {
                    devices: vec![
                        Device::builder()
                            .id(DeviceId::new(5))
                            .device_type("Boiler")
                            .brand("Buderus")
                            .name("GB125")
                            .deviceid(0x08)
                            .productid(123)
                            .version("04.05")
                            .build()
                            .unwrap(),
                    ],
                    sensors: vec![Sensor {
                        no: 1,
                        id: "28-233D-9497-0C03".to_string(),
                        temp: Some("21.4".to_string()),
                    }],
                }
            }
        }

        fn start_scan(&self) -> impl Future<Output = ()> + Send {
            *self.scans.lock().unwrap() += 1;
            async {}
        }

        fn device_data(
            &self,
            id: DeviceId,
        ) -> impl Future<Output = Result<DeviceData, BusError>> + Send {
            let result = if id == DeviceId::new(5) {
                Ok(DeviceData {
                    name: "Boiler".to_string(),
                    data: vec![
                        "65".to_string(),
                        "\u{b0}C".to_string(),
                        "Flow Temp".to_string(),
                        "1".to_string(),
                    ],
                })
            } else {
                Err(BusError::UnknownDevice(id))
            };
            async { result }
        }

        fn write_value(
            &self,
            value: DeviceValue,
        ) -> impl Future<Output = Result<(), BusError>> + Send {
            let result = if value.data == "70" {
                self.writes.lock().unwrap().push(value);
                Ok(())
            } else {
                Err(BusError::InvalidValue {
                    name: value.name,
                    value: value.data,
                })
            };
            async { result }
        }

        fn status(&self) -> impl Future<Output = BusStatus> + Send {
            let mut counters = TelegramCounters::default();
            for _ in 0..4 {
                counters.record_read();
                counters.record_received();
            }
            counters.record_write();
            counters.record_tx_error();
            async move { counters.status(true) }
        }
    }

    fn state(admin: bool) -> AppState<StubBus> {
        AppState::new(
            BusService::new(StubBus::default()),
            Viewer {
                username: "admin".to_string(),
                admin,
            },
        )
    }

    fn get(uri: &str) -> Request<Body> {
        Request::builder().uri(uri).body(Body::empty()).unwrap()
    }

    fn post(uri: &str, body: &str) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    async fn json(response: axum::response::Response) -> serde_json::Value {
        let body = response.into_body().collect().await.unwrap().to_bytes();
        serde_json::from_slice(&body).unwrap()
    }

    const WRITE_70: &str = r#"{"devicevalue":{"id":5,"data":"70","uom":"°C","name":"Flow Temp","cmd":"1"}}"#;

    #[tokio::test]
    async fn should_return_ok_when_health_check_called() {
        let response = build(state(true)).oneshot(get("/health")).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn should_list_devices_and_sensors() {
        let response = build(state(true))
            .oneshot(get("/rest/allDevices"))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let body = json(response).await;
        assert_eq!(body["devices"][0]["id"], 5);
        assert_eq!(body["devices"][0]["type"], "Boiler");
        assert_eq!(body["sensors"][0]["temp"], "21.4");
    }

    #[tokio::test]
    async fn should_return_viewer() {
        let response = build(state(false)).oneshot(get("/rest/me")).await.unwrap();
        let body = json(response).await;
        assert_eq!(body["username"], "admin");
        assert_eq!(body["admin"], false);
    }

    #[tokio::test]
    async fn should_start_scan() {
        let state = state(true);
        let response = build(state.clone())
            .oneshot(get("/rest/scanDevices"))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(*state.bus_service.bus().scans.lock().unwrap(), 1);
    }

    #[tokio::test]
    async fn should_return_device_data() {
        let response = build(state(true))
            .oneshot(post("/rest/deviceData", r#"{"id":5}"#))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let body = json(response).await;
        assert_eq!(body["name"], "Boiler");
        assert_eq!(body["data"][2], "Flow Temp");
    }

    #[tokio::test]
    async fn should_return_not_found_for_unknown_device() {
        let response = build(state(true))
            .oneshot(post("/rest/deviceData", r#"{"id":9}"#))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn should_accept_write_from_admin() {
        let state = state(true);
        let response = build(state.clone())
            .oneshot(post("/rest/writeValue", WRITE_70))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(state.bus_service.bus().writes.lock().unwrap().len(), 1);
    }

    #[tokio::test]
    async fn should_answer_no_content_when_bus_rejects_write() {
        let body = WRITE_70.replace("\"70\"", "\"abc\"");
        let response = build(state(true))
            .oneshot(post("/rest/writeValue", &body))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::NO_CONTENT);
    }

    #[tokio::test]
    async fn should_forbid_write_from_non_admin() {
        let state = state(false);
        let response = build(state.clone())
            .oneshot(post("/rest/writeValue", WRITE_70))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::FORBIDDEN);
        assert!(state.bus_service.bus().writes.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn should_report_bus_status() {
        let response = build(state(false))
            .oneshot(get("/rest/busStatus"))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let body = json(response).await;
        assert_eq!(
            body,
            serde_json::json!({
                "status": 1,
                "rx_received": 4,
                "tx_sent": 5,
                "rx_quality": 100,
                "tx_quality": 80,
            })
        );
    }

    #[tokio::test]
    async fn should_return_not_found_without_assets() {
        let response = build(state(true)).oneshot(get("/index.html")).await.unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn should_serve_files_from_assets_dir() {
        let state = state(true).with_assets(env!("CARGO_MANIFEST_DIR"));
        let response = build(state).oneshot(get("/Cargo.toml")).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
    }
}
