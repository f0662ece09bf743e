use axum::http::StatusCode;
use serde_json::Value;

use crate::config::Config;
use crate::error::GatewayError;

fn connect_failed(url: &str, err: impl ToString) -> GatewayError {
    GatewayError {
        status: StatusCode::BAD_GATEWAY,
        body: Some(serde_json::json!({
            "error": "connect_failed",
            "detail": err.to_string(),
            "url": url
        })),
    }
}

/// Requests a payment intent for `amount_minor` (integer minor units) in the
/// configured currency and returns the client secret. Writes no local state.
pub async fn create_payment_intent(
    config: &Config,
    amount_minor: i64,
) -> Result<String, GatewayError> {
    let url = format!(
        "{}/v1/payment_intents",
        config.payment_api_url.trim_end_matches('/')
    );

    let client = reqwest::Client::new();
    let resp = client
        .post(&url)
        .bearer_auth(&config.payment_secret_key)
        .form(&[
            ("amount", amount_minor.to_string()),
            ("currency", config.payment_currency.clone()),
            ("payment_method_types[]", "card".to_string()),
        ])
        .send()
        .await
        .map_err(|e| connect_failed(&url, e))?;

    let status = StatusCode::from_u16(resp.status().as_u16()).unwrap_or(StatusCode::BAD_GATEWAY);
    let body: Value = resp.json().await.map_err(|e| connect_failed(&url, e))?;
    if !status.is_success() {
        return Err(GatewayError {
            status,
            body: Some(body),
        });
    }

    body.get("client_secret")
        .and_then(|v| v.as_str())
        .map(|s| s.to_string())
        .ok_or_else(|| GatewayError {
            status: StatusCode::BAD_GATEWAY,
            body: Some(serde_json::json!({ "error": "missing_client_secret" })),
        })
}
