use gloo_net::http::Request;
use serde_json::Value;

use crate::config::API_URL;

/// Fetch the perf payload for a project. The payload is kept as raw JSON on
/// purpose: a malformed body must degrade to an empty plot, not a parse
/// failure.
pub async fn fetch_perf(project: &str, token: Option<&str>) -> Result<Value, String> {
    let url = format!("{}/v0/projects/{}/perf", API_URL, project);

    let mut request = Request::get(&url);
    if let Some(token) = token {
        request = request.header("Authorization", &format!("Bearer {}", token));
    }

    let response = request
        .send()
        .await
        .map_err(|e| format!("Request error: {}", e))?;

    if !response.ok() {
        return Err(format!("HTTP error: {}", response.status()));
    }

    response
        .json::<Value>()
        .await
        .map_err(|e| format!("Parse error: {}", e))
}
