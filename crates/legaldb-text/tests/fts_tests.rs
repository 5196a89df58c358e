use legaldb_core::error::Result;
use legaldb_core::traits::FullTextStore;
use legaldb_core::types::{DocId, FtsHit, FtsMode, SearchArea};
use legaldb_text::dedup;
use legaldb_text::FullTextSearcher;
use std::sync::Arc;

fn meta_hit(doc_id: DocId, chunk_index: Option<u32>) -> FtsHit {
    FtsHit {
        doc_id,
        chunk_index,
        source: format!("corpus/{doc_id}.txt"),
        content: "body text".to_string(),
        text: "{\"court\":\"HCA\"}".to_string(),
        format: None,
        area: SearchArea::Metadata,
    }
}

fn doc_hit(doc_id: DocId) -> FtsHit {
    FtsHit {
        doc_id,
        chunk_index: None,
        source: format!("corpus/{doc_id}.txt"),
        content: "body text".to_string(),
        text: "body text".to_string(),
        format: Some("txt".to_string()),
        area: SearchArea::Documents,
    }
}

#[test]
fn metadata_ties_keep_lowest_chunk_index() {
    let reduced = dedup::reduce(vec![meta_hit(7, Some(3)), meta_hit(7, Some(1))], 10);
    assert_eq!(reduced.len(), 1);
    assert_eq!(reduced[0].chunk_index, Some(1));
}

#[test]
fn missing_chunk_index_always_loses_to_a_defined_one() {
    let reduced = dedup::reduce(vec![meta_hit(7, None), meta_hit(7, Some(5))], 10);
    assert_eq!(reduced[0].chunk_index, Some(5));

    // and never displaces one that's already there
    let reduced = dedup::reduce(vec![meta_hit(7, Some(5)), meta_hit(7, None)], 10);
    assert_eq!(reduced[0].chunk_index, Some(5));
}

#[test]
fn document_hits_are_never_displaced_by_metadata_hits() {
    let reduced = dedup::reduce(vec![doc_hit(4), meta_hit(4, Some(0))], 10);
    assert_eq!(reduced.len(), 1);
    assert_eq!(reduced[0].area, SearchArea::Documents);
}

#[test]
fn output_preserves_first_seen_key_order_and_truncates() {
    let hits = vec![doc_hit(3), doc_hit(1), doc_hit(2), meta_hit(3, Some(0))];
    let reduced = dedup::reduce(hits, 2);
    assert_eq!(reduced.iter().map(|h| h.doc_id).collect::<Vec<_>>(), vec![3, 1]);
}

struct AreaStore;

impl FullTextStore for AreaStore {
    fn fts_documents(&self, _query: &str, limit: usize) -> Result<Vec<FtsHit>> {
        assert_eq!(limit, 8, "documents side over-fetches top_k * 4");
        Ok(vec![doc_hit(1)])
    }

    fn fts_metadata(&self, _query: &str, limit: usize) -> Result<Vec<FtsHit>> {
        assert_eq!(limit, 16, "metadata side over-fetches top_k * 8");
        Ok(vec![meta_hit(1, Some(2)), meta_hit(2, Some(0))])
    }
}

#[test]
fn both_mode_merges_areas_with_document_precedence() {
    let searcher = FullTextSearcher::new(Arc::new(AreaStore), 4, 8);
    let results = searcher.search("hca", 2, FtsMode::Both).expect("search");
    assert_eq!(results.len(), 2);
    assert_eq!(results[0].doc_id, 1);
    assert_eq!(results[0].area, SearchArea::Documents);
    assert_eq!(results[1].doc_id, 2);
    assert_eq!(results[1].area, SearchArea::Metadata);
}

#[test]
fn single_area_modes_skip_the_other_scan() {
    struct DocsOnly;
    impl FullTextStore for DocsOnly {
        fn fts_documents(&self, _query: &str, _limit: usize) -> Result<Vec<FtsHit>> {
            Ok(vec![doc_hit(5)])
        }
        fn fts_metadata(&self, _query: &str, _limit: usize) -> Result<Vec<FtsHit>> {
            panic!("metadata scan must not run in Documents mode");
        }
    }
    let searcher = FullTextSearcher::new(Arc::new(DocsOnly), 4, 8);
    let results = searcher.search("hca", 5, FtsMode::Documents).expect("search");
    assert_eq!(results.len(), 1);
    assert_eq!(results[0].doc_id, 5);
}
