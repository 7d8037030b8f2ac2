//! `newsdesk news <category>` — one-shot fetch, print the envelope.

use newsdesk_config::AppConfig;

pub async fn run(config: &AppConfig, category: &str) -> Result<(), Box<dyn std::error::Error>> {
    let (fetcher, _writer) = super::build_components(config);

    let envelope = fetcher.get_news(category).await;
    println!("{}", serde_json::to_string_pretty(&envelope)?);

    Ok(())
}
