use std::fs;
use tempfile::TempDir;

use std::path::PathBuf;

use legaldb_core::chunker::DocumentLoader;
use legaldb_core::config::{expand_path, DistanceMode, NormPool, SearchConfig};

#[test]
fn load_directory_single_small_file() {
    let tmp = TempDir::new().expect("tempdir");
    let dir = tmp.path();
    fs::write(dir.join("a.txt"), "Short text\n").expect("write");

    let loader = DocumentLoader::new();
    let docs = loader.load_directory(dir).expect("load");

    assert_eq!(docs.len(), 1);
    assert_eq!(docs[0].format, "txt");
    assert_eq!(docs[0].chunks.len(), 1, "one small paragraph becomes one chunk");
    assert_eq!(docs[0].chunks[0].trim(), "Short text");
}

#[test]
fn load_directory_is_sorted_and_txt_only() {
    let tmp = TempDir::new().expect("tempdir");
    let dir = tmp.path();
    fs::write(dir.join("b.txt"), "bravo").expect("write");
    fs::write(dir.join("a.txt"), "alpha").expect("write");
    fs::write(dir.join("c.md"), "ignored").expect("write");

    let loader = DocumentLoader::new();
    let docs = loader.load_directory(dir).expect("load");

    assert_eq!(docs.len(), 2);
    assert!(docs[0].source.ends_with("a.txt"));
    assert!(docs[1].source.ends_with("b.txt"));
}

#[test]
fn expand_path_expands_env_vars() {
    std::env::set_var("LEGALDB_TEST_CORPUS", "/data/corpus");
    assert_eq!(expand_path("$LEGALDB_TEST_CORPUS/2024"), PathBuf::from("/data/corpus/2024"));
}

#[test]
fn expand_path_expands_leading_tilde() {
    std::env::set_var("HOME", "/home/archivist");
    assert_eq!(expand_path("~/corpus"), PathBuf::from("/home/archivist/corpus"));
}

#[test]
fn expand_path_leaves_plain_paths_alone() {
    assert_eq!(expand_path("corpus/cases.txt"), PathBuf::from("corpus/cases.txt"));
    assert_eq!(expand_path("/abs/path.json"), PathBuf::from("/abs/path.json"));
}

#[test]
fn search_config_defaults() {
    let cfg = SearchConfig::default();
    assert_eq!(cfg.embedding_dim, 768);
    assert_eq!(cfg.distance_mode, DistanceMode::Exact);
    assert!((cfg.alpha - 0.5).abs() < f32::EPSILON);
    assert_eq!(cfg.hybrid_fetch_multiplier, 2);
    assert_eq!(cfg.fts_document_multiplier, 4);
    assert_eq!(cfg.fts_metadata_multiplier, 8);
    assert_eq!(cfg.norm_pool, NormPool::All);
}
