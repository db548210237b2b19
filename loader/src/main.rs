//! One-shot catalog bulk-loader: reads a JSON array of catalog items and
//! batch-writes them into the store hash keyed by `objectID`.

use std::fs;

use clap::Parser;
use indicatif::{ProgressBar, ProgressStyle};
use redis::{AsyncCommands, Client, aio::MultiplexedConnection};

use catalog::{CatalogItem, DEFAULT_STORE_KEY};

const BATCH_SIZE: usize = 25;

#[derive(Parser, Debug)]
#[command(author, version, about)]
struct Args {
    /// JSON file holding the catalog items to load.
    file: String,

    #[arg(long, default_value = "redis://127.0.0.1:6379")]
    redis_url: String,

    #[arg(long, default_value = DEFAULT_STORE_KEY)]
    store_key: String,
}

#[tokio::main]
async fn main() {
    let args = Args::parse();

    println!("Loading catalog items from {}", args.file);

    let raw = fs::read_to_string(&args.file).unwrap();
    let items: Vec<CatalogItem> = serde_json::from_str(&raw).unwrap();

    println!("Loaded Items: {}\n", items.len());

    let client = Client::open(args.redis_url.as_str()).unwrap();
    let mut connection = client.get_multiplexed_async_connection().await.unwrap();

    let pb = ProgressBar::new(items.len() as u64);
    pb.set_style(
        ProgressStyle::with_template(
            "{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} {msg}",
        )
        .unwrap()
        .progress_chars("=> "),
    );

    for batch in items.chunks(BATCH_SIZE) {
        write_batch(&mut connection, &args.store_key, batch).await;
        pb.inc(batch.len() as u64);
    }

    pb.finish_with_message("Done");
    println!("\nSent {} items to the catalog store", items.len());
}

async fn write_batch(
    connection: &mut MultiplexedConnection,
    store_key: &str,
    batch: &[CatalogItem],
) {
    let fields: Vec<(String, String)> = batch
        .iter()
        .map(|item| {
            (
                item.object_id.clone(),
                serde_json::to_string(item).unwrap(),
            )
        })
        .collect();

    let _: () = connection.hset_multiple(store_key, &fields).await.unwrap();
}
