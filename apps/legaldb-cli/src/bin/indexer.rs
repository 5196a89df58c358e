use anyhow::Result;
use indicatif::{ProgressBar, ProgressStyle};
use legaldb_core::chunker::DocumentLoader;
use legaldb_core::config::{expand_path, Config};
use legaldb_embed::get_default_embedder;
use legaldb_store::MemoryStore;
use serde_json::json;
use std::env;
use std::path::PathBuf;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let args: Vec<String> = env::args().collect();
    if args.len() < 2 {
        eprintln!("Usage: {} <data_dir> [store_path]", args[0]);
        eprintln!("Example: {} ./corpus ./legaldb-store.json", args[0]);
        std::process::exit(1);
    }
    let data_dir = expand_path(&args[1]);
    let store_path = args
        .get(2)
        .map(expand_path)
        .unwrap_or_else(|| PathBuf::from("legaldb-store.json"));

    let config = Config::load()?;
    let search = config.search();

    println!("🔍 legaldb-indexer\n==================");
    println!("Data directory: {}", data_dir.display());
    println!("Store snapshot: {}", store_path.display());

    let loader = DocumentLoader::new();
    let docs = loader.load_directory(&data_dir)?;
    if docs.is_empty() {
        println!("No .txt files found under {}.", data_dir.display());
        return Ok(());
    }

    let embedder = get_default_embedder(search.embedding_dim);
    let store = MemoryStore::new(search.embedding_dim);

    let total_chunks: usize = docs.iter().map(|d| d.chunks.len()).sum();
    let pb = ProgressBar::new(total_chunks as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} chunks ({percent}%) {msg}")?
            .progress_chars("#>-"),
    );

    for doc in &docs {
        let doc_id = store.add_document(&doc.source, &doc.content, &doc.format)?;
        for (i, chunk) in doc.chunks.iter().enumerate() {
            let vector = embedder.embed(chunk)?;
            let metadata = json!({ "source": doc.source, "paragraph": i });
            store.add_chunk(doc_id, i as u32, vector, Some(metadata))?;
            pb.inc(1);
        }
    }
    pb.finish_with_message("embedding complete");

    store.save(&store_path)?;
    println!(
        "📊 Indexed {} documents ({} chunks, dim {}) into {}",
        docs.len(),
        total_chunks,
        search.embedding_dim,
        store_path.display()
    );
    Ok(())
}
