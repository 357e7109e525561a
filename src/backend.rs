use axum::{routing::get, Json, Router};
use serde::Serialize;
use std::{
    path::PathBuf,
    time::{SystemTime, UNIX_EPOCH},
};
use tower_http::services::{ServeDir, ServeFile};

const DEFAULT_PORT: u16 = 8080;
const DEFAULT_STATIC_DIR: &str = "dist";

#[derive(Serialize)]
struct HealthPayload {
    ok: bool,
    version: &'static str,
}

async fn healthz() -> Json<HealthPayload> {
    Json(HealthPayload {
        ok: true,
        version: env!("CARGO_PKG_VERSION"),
    })
}

pub async fn run() -> Result<(), Box<dyn std::error::Error>> {
    let port = resolve_port(std::env::var("PORT").ok());
    let static_dir = resolve_static_dir(std::env::var("STATIC_DIR").ok());
    let index_file = PathBuf::from(&static_dir).join("index.html");

    let static_service = ServeDir::new(&static_dir).not_found_service(ServeFile::new(index_file));

    let app = Router::new()
        .route("/healthz", get(healthz))
        .fallback_service(static_service);

    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{port}")).await?;
    log_event(
        "server_listening",
        serde_json::json!({
            "port": port,
            "static_dir": static_dir,
        }),
    );
    axum::serve(listener, app).await?;
    Ok(())
}

fn resolve_port(raw: Option<String>) -> u16 {
    raw.and_then(|value| value.trim().parse::<u16>().ok())
        .filter(|port| *port != 0)
        .unwrap_or(DEFAULT_PORT)
}

fn resolve_static_dir(raw: Option<String>) -> String {
    raw.map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty())
        .unwrap_or_else(|| DEFAULT_STATIC_DIR.to_string())
}

fn log_event(event: &str, fields: serde_json::Value) {
    let mut payload = serde_json::Map::new();
    payload.insert(
        "ts".to_string(),
        serde_json::Value::Number(serde_json::Number::from(now_unix_seconds())),
    );
    payload.insert(
        "event".to_string(),
        serde_json::Value::String(event.to_string()),
    );

    if let serde_json::Value::Object(extra) = fields {
        for (key, value) in extra {
            payload.insert(key, value);
        }
    }

    println!("{}", serde_json::Value::Object(payload));
}

fn now_unix_seconds() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|elapsed| elapsed.as_secs())
        .unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_port_falls_back_to_default() {
        assert_eq!(resolve_port(None), DEFAULT_PORT);
    }

    #[test]
    fn unparsable_or_zero_ports_fall_back_to_default() {
        assert_eq!(resolve_port(Some("not-a-port".to_string())), DEFAULT_PORT);
        assert_eq!(resolve_port(Some("0".to_string())), DEFAULT_PORT);
        assert_eq!(resolve_port(Some("70000".to_string())), DEFAULT_PORT);
    }

    #[test]
    fn explicit_port_is_honored() {
        assert_eq!(resolve_port(Some(" 3000 ".to_string())), 3000);
    }

    #[test]
    fn blank_static_dir_falls_back_to_default() {
        assert_eq!(resolve_static_dir(None), DEFAULT_STATIC_DIR);
        assert_eq!(resolve_static_dir(Some("   ".to_string())), DEFAULT_STATIC_DIR);
    }

    #[test]
    fn explicit_static_dir_is_honored() {
        assert_eq!(resolve_static_dir(Some("public".to_string())), "public");
    }

    #[test]
    fn health_payload_serializes_to_the_documented_shape() {
        let payload = HealthPayload {
            ok: true,
            version: "1.2.3",
        };
        let encoded = serde_json::to_value(&payload).expect("serializable payload");

        assert_eq!(encoded, serde_json::json!({"ok": true, "version": "1.2.3"}));
    }
}
