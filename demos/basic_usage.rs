//! Basic usage: query articles, then vote on the result.
//!
//! ```text
//! SPOUT_BASE_URL=https://api.spout.example SPOUT_API_KEY=... \
//!   RUST_LOG=spout=debug cargo run --example basic_usage -- "central bank rates"
//! ```

use spout::{ArticleQueryRequest, ChatLog, FeedbackRequest, SpoutClient, SummaryRequest};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> spout::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let text = std::env::args().nth(1).unwrap_or_else(|| "rust async runtimes".to_string());
    let client = SpoutClient::from_env()?;

    let resp = client.query(&ArticleQueryRequest::new(&text)).await?;
    println!("query {} -> {} articles", resp.query_id, resp.articles.len());
    for article in &resp.articles {
        println!("  [{:.2}] {} ({})", article.confidence, article.article_title, article.source_url);
    }

    client
        .feedback(&FeedbackRequest::new(resp.query_id, !resp.articles.is_empty()))
        .await?;

    let summary = client
        .summarize(&SummaryRequest::new(vec![
            ChatLog::new(format!("searched for {}", text), "demo"),
            ChatLog::new(format!("{} results", resp.articles.len()), "demo"),
        ]))
        .await?;
    for log in summary.logs {
        println!("{}: {}", log.source, log.text);
    }

    Ok(())
}
