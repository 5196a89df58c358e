//! Paragraph-based document chunking for ingest.
//!
//! Splits a document's text on blank lines and packs paragraphs into
//! chunks of at most `max_chars`, so each chunk embeds independently.

use anyhow::Result;
use std::fs;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

#[derive(Debug, Clone)]
pub struct ChunkingConfig {
    pub max_chars: usize,
}

impl Default for ChunkingConfig {
    fn default() -> Self {
        Self { max_chars: 2000 }
    }
}

/// A document read from disk together with its chunked text.
#[derive(Debug, Clone)]
pub struct LoadedDocument {
    pub source: String,
    pub content: String,
    pub format: String,
    pub chunks: Vec<String>,
}

#[derive(Default)]
pub struct DocumentLoader {
    chunking: ChunkingConfig,
}

impl DocumentLoader {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(chunking: ChunkingConfig) -> Self {
        Self { chunking }
    }

    /// Read every `.txt` file under `data_dir` (recursively, sorted for
    /// deterministic ingest order) and chunk its content.
    pub fn load_directory(&self, data_dir: &Path) -> Result<Vec<LoadedDocument>> {
        let files = self.list_txt_files(data_dir);
        let mut docs = Vec::with_capacity(files.len());
        for file_path in &files {
            let content = self.read_file_content(file_path)?;
            let chunks = self.chunk_content(&content);
            docs.push(LoadedDocument {
                source: file_path.to_string_lossy().to_string(),
                content,
                format: "txt".to_string(),
                chunks,
            });
        }
        Ok(docs)
    }

    /// Pack blank-line-separated paragraphs into chunks of at most
    /// `max_chars`. A single oversized paragraph becomes its own chunk.
    pub fn chunk_content(&self, content: &str) -> Vec<String> {
        let mut chunks = Vec::new();
        let mut current = String::new();
        for paragraph in content.split("\n\n") {
            let paragraph = paragraph.trim();
            if paragraph.is_empty() {
                continue;
            }
            if !current.is_empty() && current.len() + paragraph.len() + 2 > self.chunking.max_chars {
                chunks.push(std::mem::take(&mut current));
            }
            if !current.is_empty() {
                current.push_str("\n\n");
            }
            current.push_str(paragraph);
        }
        if !current.is_empty() {
            chunks.push(current);
        }
        chunks
    }

    fn list_txt_files(&self, data_dir: &Path) -> Vec<PathBuf> {
        let mut files: Vec<PathBuf> = WalkDir::new(data_dir)
            .into_iter()
            .filter_map(std::result::Result::ok)
            .filter(|e| e.file_type().is_file())
            .map(|e| e.into_path())
            .filter(|p| p.extension().is_some_and(|ext| ext == "txt"))
            .collect();
        files.sort();
        files
    }

    fn read_file_content(&self, file_path: &Path) -> Result<String> {
        match fs::read_to_string(file_path) {
            Ok(content) => Ok(content),
            Err(_) => Ok(String::from_utf8_lossy(&fs::read(file_path)?).to_string()),
        }
    }
}
