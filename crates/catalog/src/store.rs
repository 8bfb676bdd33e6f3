//! Loading and querying exported snippet records.

use crate::{Category, Snippet};
use anyhow::{Context as _, Result, bail};
use log::{debug, warn};
use serde_json::from_slice;
use std::collections::HashMap;
use std::fs::{read, read_dir};
use std::path::{Path, PathBuf};

/// All snippets from one export, indexed by id.
#[derive(Clone, Debug, Default)]
pub struct Catalog {
    snippets: Vec<Snippet>,
    by_id: HashMap<String, usize>,
}

impl Catalog {
    /// Load an export from disk.
    ///
    /// `path` is either a JSON file holding an array of records, or a directory whose
    /// `*.json` files (read in file-name order) each hold one.
    ///
    /// # Errors
    /// Returns an error if a file cannot be read or parsed, or if two records share an id.
    pub fn load(path: &Path) -> Result<Self> {
        let snippets = if path.is_dir() {
            read_export_dir(path)?
        } else {
            read_export_file(path)?
        };
        debug!("catalog: loaded {} snippets from {}", snippets.len(), path.display());
        Self::from_snippets(snippets)
    }

    /// Build a catalog from records already in memory.
    ///
    /// # Errors
    /// Returns an error naming the first id that occurs twice.
    pub fn from_snippets(snippets: Vec<Snippet>) -> Result<Self> {
        let mut by_id: HashMap<String, usize> = HashMap::with_capacity(snippets.len());
        for (position, snippet) in snippets.iter().enumerate() {
            if by_id.insert(snippet.id.clone(), position).is_some() {
                bail!("duplicate snippet id '{}'", snippet.id);
            }
        }
        Ok(Self { snippets, by_id })
    }

    pub fn get(&self, id: &str) -> Option<&Snippet> {
        self.by_id
            .get(id)
            .and_then(|&position| self.snippets.get(position))
    }

    /// Snippets of one category, in export order.
    pub fn by_category(&self, category: Category) -> impl Iterator<Item = &Snippet> {
        self.snippets
            .iter()
            .filter(move |snippet| snippet.category == category)
    }

    /// Case-insensitive substring search over id, name and category.
    ///
    /// A blank query matches nothing.
    pub fn search(&self, query: &str) -> Vec<&Snippet> {
        let needle = query.trim().to_lowercase();
        if needle.is_empty() {
            return Vec::new();
        }
        self.snippets
            .iter()
            .filter(|snippet| {
                snippet.id.to_lowercase().contains(&needle)
                    || snippet.name.to_lowercase().contains(&needle)
                    || snippet.category.as_str().contains(&needle)
            })
            .collect()
    }

    /// All snippets, in export order.
    pub fn iter(&self) -> impl Iterator<Item = &Snippet> {
        self.snippets.iter()
    }

    pub fn len(&self) -> usize {
        self.snippets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.snippets.is_empty()
    }
}

/// Read one JSON file holding an array of records.
fn read_export_file(path: &Path) -> Result<Vec<Snippet>> {
    let data = read(path).with_context(|| format!("failed to read {}", path.display()))?;
    from_slice(&data)
        .with_context(|| format!("{} is not a JSON array of snippets", path.display()))
}

/// Read every `*.json` file of a directory, sorted by file name.
fn read_export_dir(dir: &Path) -> Result<Vec<Snippet>> {
    let mut files: Vec<PathBuf> = Vec::new();
    for entry in read_dir(dir).with_context(|| format!("failed to list {}", dir.display()))? {
        let path = entry?.path();
        if path.is_file() && path.extension().is_some_and(|ext| ext == "json") {
            files.push(path);
        }
    }
    files.sort();
    if files.is_empty() {
        warn!("catalog: no .json files in {}", dir.display());
    }
    let mut snippets = Vec::new();
    for file in files {
        snippets.extend(read_export_file(&file)?);
    }
    Ok(snippets)
}
