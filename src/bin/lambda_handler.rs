//! AWS Lambda handler for the dashboard calculations
//!
//! Accepts a JSON request on one of four routes and returns the result as
//! JSON. Supports Lambda Function URLs for direct HTTP access.
//!
//! - `POST /grow`     -> growth projection
//! - `POST /compare`  -> product comparison
//! - `POST /estate`   -> estate assessment
//! - `POST /medical`  -> medical plan ranking

use lambda_http::{run, service_fn, Body, Error, Request, Response};
use serde::de::DeserializeOwned;
use serde::Serialize;

use sales_toolkit::estate::EstateInputs;
use sales_toolkit::projection::GrowthInputs;
use sales_toolkit::toolkit::{ComparisonRequest, MedicalRequest};
use sales_toolkit::{Toolkit, ToolkitError};

/// Envelope for every successful response
#[derive(Debug, Serialize)]
struct ApiResponse<T: Serialize> {
    result: T,
    execution_time_us: u64,
}

#[derive(Debug, Serialize)]
struct ApiError {
    error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    field: Option<&'static str>,
}

fn with_cors(builder: lambda_http::http::response::Builder) -> lambda_http::http::response::Builder {
    builder
        .header("Access-Control-Allow-Origin", "*")
        .header("Access-Control-Allow-Methods", "POST, OPTIONS")
        .header("Access-Control-Allow-Headers", "Content-Type")
}

fn json_response<T: Serialize>(status: u16, body: &T) -> Result<Response<Body>, Error> {
    Ok(with_cors(Response::builder())
        .status(status)
        .header("Content-Type", "application/json")
        .body(Body::Text(serde_json::to_string(body)?))?)
}

fn error_response(status: u16, message: String, field: Option<&'static str>) -> Result<Response<Body>, Error> {
    json_response(status, &ApiError { error: message, field })
}

fn body_text(event: &Request) -> String {
    match event.body() {
        Body::Text(s) => s.clone(),
        Body::Binary(b) => String::from_utf8_lossy(b).to_string(),
        Body::Empty => "{}".to_string(),
    }
}

/// Calculator addressed by a request path
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Route {
    Grow,
    Compare,
    Estate,
    Medical,
}

impl Route {
    /// Exact match on the path, ignoring a trailing slash
    fn from_path(path: &str) -> Option<Self> {
        match path.trim_end_matches('/') {
            "/grow" => Some(Route::Grow),
            "/compare" => Some(Route::Compare),
            "/estate" => Some(Route::Estate),
            "/medical" => Some(Route::Medical),
            _ => None,
        }
    }
}

/// Parse the request body, run the calculation and wrap the outcome
fn respond<Req, Res, F>(body: &str, start: std::time::Instant, calculate: F) -> Result<Response<Body>, Error>
where
    Req: DeserializeOwned,
    Res: Serialize,
    F: FnOnce(&Req) -> Result<Res, ToolkitError>,
{
    let request: Req = match serde_json::from_str(body) {
        Ok(r) => r,
        Err(e) => return error_response(400, format!("Invalid JSON: {}", e), None),
    };

    match calculate(&request) {
        Ok(result) => json_response(200, &ApiResponse {
            result,
            execution_time_us: start.elapsed().as_micros() as u64,
        }),
        Err(ToolkitError::InvalidInput { field, reason }) => error_response(422, reason, Some(field)),
        Err(e) => error_response(500, e.to_string(), None),
    }
}

async fn handler(toolkit: &Toolkit, event: Request) -> Result<Response<Body>, Error> {
    let start = std::time::Instant::now();

    // CORS preflight
    if event.method().as_str() == "OPTIONS" {
        return Ok(with_cors(Response::builder()).status(200).body(Body::Empty)?);
    }

    let body = body_text(&event);
    let path = event.uri().path();
    log::info!("{} {}", event.method(), path);

    match Route::from_path(path) {
        Some(Route::Grow) => respond(&body, start, |req: &GrowthInputs| toolkit.grow(req)),
        Some(Route::Compare) => respond(&body, start, |req: &ComparisonRequest| toolkit.compare(req)),
        Some(Route::Estate) => respond(&body, start, |req: &EstateInputs| toolkit.assess_estate(req)),
        Some(Route::Medical) => respond(&body, start, |req: &MedicalRequest| toolkit.rank_medical(req)),
        None => error_response(404, format!("Unknown route: {}", path), None),
    }
}

#[tokio::main]
async fn main() -> Result<(), Error> {
    env_logger::init();
    let toolkit = Toolkit::new();
    run(service_fn(|event: Request| handler(&toolkit, event))).await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_routes_match_full_path() {
        assert_eq!(Route::from_path("/grow"), Some(Route::Grow));
        assert_eq!(Route::from_path("/compare/"), Some(Route::Compare));
        assert_eq!(Route::from_path("/estate"), Some(Route::Estate));
        assert_eq!(Route::from_path("/medical"), Some(Route::Medical));
    }

    #[test]
    fn test_nested_or_unknown_paths_are_rejected() {
        assert_eq!(Route::from_path("/anything/grow"), None);
        assert_eq!(Route::from_path("grow"), None);
        assert_eq!(Route::from_path("/"), None);
        assert_eq!(Route::from_path("/cashflow"), None);
    }
}
