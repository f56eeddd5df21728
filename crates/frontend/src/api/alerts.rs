//! API-клиент ленты алертов.

use contracts::alerts::AlertListResponse;
use contracts::search::SearchParams;
use gloo_net::http::Request;

const BASE_URL: &str = "/api/v1/alerts";

/// Загружает ленту алертов для текущих параметров поиска
pub async fn fetch_alerts(params: &SearchParams) -> Result<AlertListResponse, String> {
    let query = params.to_query_string();
    let url = if query.is_empty() {
        BASE_URL.to_string()
    } else {
        format!("{}?{}", BASE_URL, query)
    };

    let response = Request::get(&url)
        .send()
        .await
        .map_err(|e| e.to_string())?;

    if !response.ok() {
        return Err(format!("HTTP {}", response.status()));
    }

    response.json().await.map_err(|e| e.to_string())
}
