use crate::domain::ports::CatalogueSource;
use crate::utils::error::{MatchError, Result};
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::{Path, PathBuf};

/// Catalogue files living under a local data directory.
#[derive(Debug, Clone)]
pub struct LocalCatalogue {
    base_dir: PathBuf,
}

impl LocalCatalogue {
    pub fn new(base_dir: impl Into<PathBuf>) -> Self {
        Self {
            base_dir: base_dir.into(),
        }
    }
}

impl CatalogueSource for LocalCatalogue {
    fn resolve(&self, filename: &str) -> Result<PathBuf> {
        let full_path = self.base_dir.join(filename);
        if !full_path.is_file() {
            return Err(MatchError::invalid_input(
                "filename",
                format!("Could not locate file \"{filename}\""),
            ));
        }
        Ok(full_path)
    }

    fn open(&self, path: &Path) -> Result<Box<dyn BufRead>> {
        Ok(Box::new(BufReader::new(File::open(path)?)))
    }
}
