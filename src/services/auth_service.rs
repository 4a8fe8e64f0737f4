use gloo_net::http::Request;

use crate::config::API_URL;
use crate::models::{AuthResponse, JsonLogin, JsonSignup};

pub async fn login(body: &JsonLogin) -> Result<AuthResponse, String> {
    post_auth("login", body).await
}

pub async fn signup(body: &JsonSignup) -> Result<AuthResponse, String> {
    post_auth("signup", body).await
}

async fn post_auth<B: serde::Serialize>(endpoint: &str, body: &B) -> Result<AuthResponse, String> {
    let url = format!("{}/v0/auth/{}", API_URL, endpoint);

    let response = Request::post(&url)
        .json(body)
        .map_err(|e| format!("Request build error: {}", e))?
        .send()
        .await
        .map_err(|e| format!("Request error: {}", e))?;

    if !response.ok() {
        return Err(format!("HTTP error: {}", response.status()));
    }

    response
        .json::<AuthResponse>()
        .await
        .map_err(|e| format!("Parse error: {}", e))
}
