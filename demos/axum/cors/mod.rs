use std::sync::Arc;

use cors_gate::{Cors, CorsOptions};

pub type SharedCors = Arc<Cors>;

#[derive(Clone)]
pub struct AppState {
    pub cors: SharedCors,
    pub greeting: &'static str,
}

const CONFIG: &str = r#"{
    "allowedOrigins": ["http://localhost:3000", "http://api.example.com"],
    "allowedMethods": ["GET", "POST", "OPTIONS"],
    "allowedHeaders": ["Content-Type", "X-Requested-With", "X-Example-Trace"],
    "exposedHeaders": ["X-Example-Trace"],
    "maxAge": 600,
    "supportsCredentials": true
}"#;

pub fn build_state() -> Result<AppState, serde_json::Error> {
    let options: CorsOptions = serde_json::from_str(CONFIG)?;

    Ok(AppState {
        cors: Arc::new(Cors::new(options)),
        greeting: "Welcome to the Axum CORS demo!",
    })
}

pub mod middleware;
