//! Core runtime configuration.
//!
//! Configuration is resolved once at process startup and passed into
//! services by `Arc`; nothing here is re-read during request handling. The
//! static reference data (symptom catalog, doctor directory, drug formulary)
//! is built here exactly once and is immutable for the life of the process.

use crate::catalog::SymptomCatalog;
use crate::directory::DoctorDirectory;
use crate::error::{TriageError, TriageResult};
use crate::pharmacy::Formulary;
use std::path::{Path, PathBuf};

/// Core configuration resolved at startup.
#[derive(Debug)]
pub struct CoreConfig {
    data_dir: PathBuf,
    catalog: SymptomCatalog,
    directory: DoctorDirectory,
    formulary: Formulary,
}

impl CoreConfig {
    /// Create a new `CoreConfig`.
    ///
    /// # Errors
    ///
    /// Returns `TriageError::InvalidInput` if `data_dir` does not exist.
    pub fn new(data_dir: PathBuf) -> TriageResult<Self> {
        if !data_dir.is_dir() {
            return Err(TriageError::InvalidInput(format!(
                "data directory does not exist: {}",
                data_dir.display()
            )));
        }

        Ok(Self {
            data_dir,
            catalog: SymptomCatalog::builtin(),
            directory: DoctorDirectory::builtin(),
            formulary: Formulary::builtin(),
        })
    }

    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    pub fn catalog(&self) -> &SymptomCatalog {
        &self.catalog
    }

    pub fn directory(&self) -> &DoctorDirectory {
        &self.directory
    }

    pub fn formulary(&self) -> &Formulary {
        &self.formulary
    }
}
