use std::env;

use product_fetcher::domain::product::ProductId;
use product_fetcher::fetcher::ProductFetcher;
use product_fetcher::fetcher::http::HttpProductFetcher;
use product_fetcher::models::config::ClientConfig;

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();
    env_logger::init_from_env(env_logger::Env::default().default_filter_or("info"));

    let ids: Vec<ProductId> = env::args().skip(1).map(ProductId::from).collect();
    if ids.is_empty() {
        log::error!("Usage: product-fetcher <id>...");
        std::process::exit(1);
    }

    let config_path = env::var("CONFIG_PATH").unwrap_or_else(|_| "config.yaml".to_string());
    let config = match ClientConfig::load(&config_path) {
        Ok(config) => config,
        Err(e) => {
            log::error!("Failed to load configuration: {e}");
            std::process::exit(1);
        }
    };

    let fetcher = match HttpProductFetcher::new(&config) {
        Ok(fetcher) => fetcher,
        Err(e) => {
            log::error!("Failed to create product fetcher: {e}");
            std::process::exit(1);
        }
    };
    log::info!("Fetching {} product(s) from {}", ids.len(), fetcher.base_url());

    let tasks = ids.iter().map(|id| fetcher.fetch_product_by_id(id));
    let results = futures::future::join_all(tasks).await;

    let mut failed = false;
    for result in results {
        match result {
            Ok(payload) => match serde_json::to_string_pretty(&payload) {
                Ok(json) => println!("{json}"),
                Err(e) => {
                    log::error!("Failed to serialize payload: {e}");
                    failed = true;
                }
            },
            // Already logged by the fetcher.
            Err(_) => failed = true,
        }
    }

    if failed {
        std::process::exit(1);
    }
}
