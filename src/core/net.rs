// src/core/net.rs

// HTTPS GET for puzzle pages and inputs (blocking reqwest)

use std::time::Duration;

use reqwest::blocking::Client;
use reqwest::header::COOKIE;

use crate::config::consts::{TIMEOUT_SECS, USER_AGENT};
use crate::error::Result;

fn client() -> Result<Client> {
    let client = Client::builder()
        .user_agent(USER_AGENT)
        .timeout(Duration::from_secs(TIMEOUT_SECS))
        .build()?;
    Ok(client)
}

/// GET `url` and return the body. Non-2xx statuses are errors.
/// `session` is sent as the `session` cookie when present.
pub fn http_get(url: &str, session: Option<&str>) -> Result<String> {
    let mut req = client()?.get(url);
    if let Some(token) = session {
        req = req.header(COOKIE, format!("session={token}"));
    }
    logd!("GET {url} (session: {})", session.is_some());
    let resp = req.send()?.error_for_status()?;
    Ok(resp.text()?)
}
