//! HTTP server implementation
//!
//! Uses hyper http1 with TokioIo, one spawned task per connection.
//! Requests are stateless; the only shared state is the MongoDB client.

use bytes::Bytes;
use http_body_util::Full;
use hyper::body::Incoming;
use hyper::server::conn::http1;
use hyper::service::service_fn;
use hyper::{Method, Request, Response, StatusCode};
use hyper_util::rt::TokioIo;
use std::sync::Arc;
use tokio::net::TcpListener;
use tracing::{error, info};

use crate::config::Args;
use crate::db::MongoClient;
use crate::routes;
use crate::types::StockroomError;

/// Shared application state
pub struct AppState {
    pub args: Args,
    /// Store client; None when the connection failed at startup, in which
    /// case /test reports the condition and data endpoints return errors
    pub mongo: Option<MongoClient>,
}

impl AppState {
    pub fn new(args: Args, mongo: Option<MongoClient>) -> Self {
        Self { args, mongo }
    }
}

/// Start the HTTP server
pub async fn run(state: Arc<AppState>) -> Result<(), StockroomError> {
    let addr = state.args.listen_addr();
    let listener = TcpListener::bind(addr).await?;

    info!("Stockroom listening on {}", addr);

    loop {
        match listener.accept().await {
            Ok((stream, addr)) => {
                let state = Arc::clone(&state);
                tokio::spawn(async move {
                    let io = TokioIo::new(stream);

                    let service = service_fn(move |req| {
                        let state = Arc::clone(&state);
                        async move { handle_request(state, req).await }
                    });

                    if let Err(err) = http1::Builder::new().serve_connection(io, service).await {
                        error!("Error serving connection from {}: {:?}", addr, err);
                    }
                });
            }
            Err(e) => {
                error!("Error accepting connection: {:?}", e);
            }
        }
    }
}

/// Route incoming HTTP requests
async fn handle_request(
    state: Arc<AppState>,
    req: Request<Incoming>,
) -> Result<Response<Full<Bytes>>, hyper::Error> {
    let method = req.method().clone();
    let path = req.uri().path().to_string();
    let query = req.uri().query().map(|q| q.to_string());

    info!("{} {}", method, path);

    let response = match (method, path.as_str()) {
        (Method::GET, "/") => routes::read_root(),
        (Method::GET, "/test") => routes::diagnostic(state).await,

        (Method::POST, "/api/assets") => routes::create_asset(state, req).await,
        (Method::GET, "/api/assets") => routes::list_assets(state, query.as_deref()).await,

        (Method::POST, "/api/locations") => routes::create_location(state, req).await,
        (Method::GET, "/api/locations") => routes::list_locations(state).await,

        (Method::POST, "/api/assignments") => routes::create_assignment(state, req).await,
        (Method::GET, "/api/assignments") => {
            routes::list_assignments(state, query.as_deref()).await
        }

        (Method::POST, "/api/audits") => routes::create_audit(state, req).await,
        (Method::GET, "/api/audits") => routes::list_audits(state, query.as_deref()).await,

        (Method::OPTIONS, _) => preflight_response(),

        _ => not_found_response(&path),
    };

    Ok(response)
}

/// CORS preflight response
fn preflight_response() -> Response<Full<Bytes>> {
    Response::builder()
        .status(StatusCode::OK)
        .header("Access-Control-Allow-Origin", "*")
        .header("Access-Control-Allow-Headers", "*")
        .header("Access-Control-Allow-Methods", "*")
        .header("Access-Control-Allow-Credentials", "true")
        .body(Full::new(Bytes::new()))
        .unwrap()
}

/// Not found response
fn not_found_response(path: &str) -> Response<Full<Bytes>> {
    let body = serde_json::json!({
        "error": "Not Found",
        "path": path,
    });

    Response::builder()
        .status(StatusCode::NOT_FOUND)
        .header("Content-Type", "application/json")
        .header("Access-Control-Allow-Origin", "*")
        .header("Access-Control-Allow-Credentials", "true")
        .body(Full::new(Bytes::from(
            serde_json::to_vec(&body).unwrap_or_default(),
        )))
        .unwrap()
}
