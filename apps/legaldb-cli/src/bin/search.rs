use anyhow::{bail, Result};
use legaldb_core::config::{expand_path, Config};
use legaldb_core::types::FtsMode;
use legaldb_embed::HashEmbedder;
use legaldb_hybrid::SearchEngine;
use legaldb_store::MemoryStore;
use legaldb_vector::select_engine;
use std::env;
use std::path::PathBuf;
use std::sync::Arc;

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let args: Vec<String> = env::args().collect();
    if args.len() < 2 {
        eprintln!("Usage: {} <query> [store_path] [mode]", args[0]);
        eprintln!("Modes: hybrid (default) | vector | lexical | fts | fts-documents | fts-metadata");
        std::process::exit(1);
    }
    let query = &args[1];
    let store_path = args
        .get(2)
        .map(expand_path)
        .unwrap_or_else(|| PathBuf::from("legaldb-store.json"));
    let mode = args.get(3).map_or("hybrid", String::as_str);

    let config = Config::load()?;
    let search = config.search();

    let store = Arc::new(MemoryStore::load(&store_path, search.embedding_dim)?);
    let embedder = Arc::new(HashEmbedder::new(search.embedding_dim));
    let engine = SearchEngine::new(
        select_engine(search.distance_mode, Arc::clone(&store)),
        Arc::clone(&store) as _,
        store,
        embedder,
        search.clone(),
    );

    println!("🔍 legaldb-search\n=================");
    println!("Query: {query}");
    println!("Store: {} | mode: {mode}", store_path.display());

    match mode {
        "hybrid" => {
            let hits = engine.hybrid_search(query, 10, search.alpha).await?;
            println!("\nFound {} results", hits.len());
            for (i, hit) in hits.iter().enumerate() {
                println!(
                    "\n  {}. hybrid={:.4} (vector_norm={:.4}, lexical={:.1})  {}",
                    i + 1,
                    hit.hybrid_score,
                    hit.vector_score_norm,
                    hit.lexical_score,
                    hit.citation
                );
                println!("     📝 {}", snippet(&hit.text));
            }
        }
        "vector" => {
            // A bracket literal is treated as a pre-computed embedding.
            let hits = if query.starts_with('[') {
                let vector = legaldb_vector::codec::decode(query)?;
                engine.vector_search_raw(&vector, 10)?
            } else {
                engine.vector_only_search(query, 10)?
            };
            println!("\nFound {} results", hits.len());
            for (i, hit) in hits.iter().enumerate() {
                println!(
                    "\n  {}. distance={:.4}  doc={} chunk={:?}  {}",
                    i + 1,
                    hit.score,
                    hit.doc_id,
                    hit.chunk_index,
                    hit.source
                );
                println!("     📝 {}", snippet(&hit.text));
            }
        }
        "lexical" => {
            let hits = engine.lexical_only_search(query, 10)?;
            println!("\nFound {} results", hits.len());
            for (i, hit) in hits.iter().enumerate() {
                println!("\n  {}. doc={}  {}", i + 1, hit.doc_id, hit.source);
                println!("     📝 {}", snippet(&hit.text));
            }
        }
        "fts" | "fts-documents" | "fts-metadata" => {
            let fts_mode = match mode {
                "fts-documents" => FtsMode::Documents,
                "fts-metadata" => FtsMode::Metadata,
                _ => FtsMode::Both,
            };
            let hits = engine.full_text_search(query, 10, fts_mode)?;
            println!("\nFound {} results", hits.len());
            for (i, hit) in hits.iter().enumerate() {
                println!(
                    "\n  {}. doc={} chunk={:?} area={:?}  {}",
                    i + 1,
                    hit.doc_id,
                    hit.chunk_index,
                    hit.area,
                    hit.source
                );
                println!("     📝 {}", snippet(&hit.text));
            }
        }
        other => bail!("unknown mode: {other}"),
    }
    Ok(())
}

fn snippet(text: &str) -> String {
    let line = text.lines().next().unwrap_or_default();
    let mut out: String = line.chars().take(120).collect();
    if line.chars().count() > 120 {
        out.push('…');
    }
    out
}
