use crate::utils::error::Result;
use std::io::BufRead;
use std::path::{Path, PathBuf};

/// Where vendor catalogues live. Resolution happens once at order
/// construction, opening happens at match time; each match run gets its
/// own read handle.
pub trait CatalogueSource {
    /// Resolves a catalogue filename to a verified, readable path.
    fn resolve(&self, filename: &str) -> Result<PathBuf>;

    /// Opens a resolved catalogue for a single sequential scan.
    fn open(&self, path: &Path) -> Result<Box<dyn BufRead>>;
}
