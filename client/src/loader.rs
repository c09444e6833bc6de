use leads_shared::TeamDataset;

/// Fetch and parse the team document. Any failure comes back as a message for the log.
pub async fn fetch_dataset(path: &str) -> Result<TeamDataset, String> {
    let resp = gloo_net::http::Request::get(path)
        .send()
        .await
        .map_err(|e| format!("fetch error: {e}"))?;

    if !resp.ok() {
        return Err(format!("HTTP {}", resp.status()));
    }

    let body = resp
        .text()
        .await
        .map_err(|e| format!("fetch error: {e}"))?;
    TeamDataset::from_json(&body).map_err(|e| format!("parse error: {e}"))
}
