//! Hand-run smoke tool: every stdin line goes through the dispatcher as a
//! keystroke snapshot, delivered results print as they arrive. Needs a
//! running server and a populated store.

use std::sync::Arc;

use tokio::io::{AsyncBufReadExt, BufReader, stdin};
use tracing_subscriber::{EnvFilter, fmt};

use client::{
    config::Config, dispatch::SearchDispatcher, search::HttpQueryHandler, session::SessionManager,
};

#[tokio::main]
async fn main() {
    fmt().with_env_filter(EnvFilter::from_default_env()).init();

    let config = Config::load();
    let session = Arc::new(SessionManager::load(&config.session_path));

    let handler = HttpQueryHandler::new(&config.search_url, session);
    let (dispatcher, mut results) = SearchDispatcher::spawn(handler);

    tokio::spawn(async move {
        while let Some(result) = results.recv().await {
            println!("{:?}: {} hits", result.query, result.nb_hits);

            for hit in result.hits {
                println!("  {} - {}", hit.name, hit.description);
            }
        }
    });

    let mut lines = BufReader::new(stdin()).lines();

    while let Ok(Some(line)) = lines.next_line().await {
        dispatcher.on_query_changed(line);
    }
}
