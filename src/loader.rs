use portrait_core::{load_dot_map, Dot, FilterBounds};
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use web_sys as web;

async fn fetch_text(url: &str) -> anyhow::Result<String> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let resp_value = JsFuture::from(window.fetch_with_str(url))
        .await
        .map_err(|e| anyhow::anyhow!(format!("fetch {} failed: {:?}", url, e)))?;
    let resp: web::Response = resp_value
        .dyn_into()
        .map_err(|e| anyhow::anyhow!(format!("{:?}", e)))?;
    if !resp.ok() {
        anyhow::bail!("fetch {}: HTTP {}", url, resp.status());
    }
    let text_promise = resp
        .text()
        .map_err(|e| anyhow::anyhow!(format!("{:?}", e)))?;
    let text = JsFuture::from(text_promise)
        .await
        .map_err(|e| anyhow::anyhow!(format!("reading {} failed: {:?}", url, e)))?;
    text.as_string()
        .ok_or_else(|| anyhow::anyhow!("{}: body is not text", url))
}

/// Fetch the dot map and keep the samples inside `bounds`.
pub async fn load_dots(url: &str, bounds: &FilterBounds) -> anyhow::Result<Vec<Dot>> {
    let text = fetch_text(url).await?;
    let dots = load_dot_map(&text, bounds)?;
    Ok(dots)
}
