use legaldb_core::config::DistanceMode;
use legaldb_core::error::{Error, Result};
use legaldb_core::traits::{ChunkScan, VectorSearch};
use legaldb_core::types::{ChunkRecord, RawHit};
use legaldb_vector::{select_engine, DistanceEngine, ExactScanEngine};
use std::sync::Arc;

struct ScanStore {
    records: Vec<ChunkRecord>,
}

impl ScanStore {
    fn with_unit_vectors(vectors: Vec<Vec<f32>>) -> Self {
        let records = vectors
            .into_iter()
            .enumerate()
            .map(|(i, vector)| ChunkRecord {
                doc_id: i as i64 + 1,
                chunk_index: 0,
                vector,
                text: format!("chunk {i}"),
                source: format!("doc-{i}.txt"),
                format: "txt".to_string(),
                metadata: None,
            })
            .collect();
        Self { records }
    }
}

impl ChunkScan for ScanStore {
    fn scan_chunks(&self) -> Result<Vec<ChunkRecord>> {
        Ok(self.records.clone())
    }
}

impl VectorSearch for ScanStore {
    fn vector_search(&self, _query: &[f32], _top_k: usize, approximate: bool) -> Result<Vec<RawHit>> {
        // Failing here lets tests tell delegation apart from the exact scan.
        assert!(approximate);
        Err(Error::StorageUnavailable("native search not wired".to_string()))
    }
}

#[test]
fn exact_scan_orders_ascending_and_truncates() {
    let store = Arc::new(ScanStore::with_unit_vectors(vec![
        vec![0.0, 1.0],  // orthogonal, distance 1.0
        vec![1.0, 0.0],  // identical direction, distance 0.0
        vec![-1.0, 0.0], // opposite, distance 2.0
    ]));
    let engine = ExactScanEngine::new(store);

    let hits = engine.search(&[1.0, 0.0], 2).expect("search");
    assert_eq!(hits.len(), 2);
    assert_eq!(hits[0].doc_id, 2);
    assert_eq!(hits[1].doc_id, 1);
    assert!(hits[0].score <= hits[1].score);
}

#[test]
fn exact_scan_ties_keep_scan_order() {
    let store = Arc::new(ScanStore::with_unit_vectors(vec![
        vec![0.0, 1.0],
        vec![0.0, 2.0], // same direction as the first: identical distance
    ]));
    let engine = ExactScanEngine::new(store);

    let hits = engine.search(&[1.0, 0.0], 10).expect("search");
    assert_eq!(hits.iter().map(|h| h.doc_id).collect::<Vec<_>>(), vec![1, 2]);
}

#[test]
fn select_engine_routes_approximate_to_backend() {
    let store = Arc::new(ScanStore::with_unit_vectors(vec![vec![1.0, 0.0]]));

    let exact = select_engine(DistanceMode::Exact, Arc::clone(&store));
    assert!(exact.search(&[1.0, 0.0], 1).is_ok());

    let approx = select_engine(DistanceMode::Approximate, store);
    match approx.search(&[1.0, 0.0], 1) {
        Err(Error::StorageUnavailable(_)) => {}
        other => panic!("expected backend delegation, got {other:?}"),
    }
}
