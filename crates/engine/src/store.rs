//! JSON file persistence for the whole expense collection.
//!
//! The store holds a single JSON array. Every save rewrites the full array;
//! there is no locking, so concurrent writers can lose updates.

use std::{
    ffi::OsString,
    fs, io,
    path::{Path, PathBuf},
};

use serde::Serialize;
use serde_json::{Value, ser::PrettyFormatter};

use crate::{EngineError, Expense, ResultEngine};

pub const DEFAULT_STORE_PATH: &str = "expenses.json";

const INDENT: &[u8] = b"    ";

/// What `Store::load` found on disk.
///
/// Only [`LoadOutcome::Loaded`] carries records. The other variants all
/// present as an empty collection, but keep the cause around so callers can
/// tell absence from corruption.
#[derive(Debug)]
pub enum LoadOutcome {
    Loaded(Vec<Expense>),
    /// The file does not exist yet.
    Missing,
    /// The file is empty or not valid JSON.
    Corrupt(serde_json::Error),
    /// Any other read failure.
    Unreadable(io::Error),
}

impl LoadOutcome {
    /// User-facing message for outcomes that fall back to an empty list.
    pub fn notice(&self, path: &Path) -> Option<String> {
        let path = path.display();
        match self {
            Self::Loaded(_) => None,
            Self::Missing => Some(format!("{path} not found. Starting with an empty list.")),
            Self::Corrupt(_) => Some(format!(
                "{path} is empty or contains invalid JSON. Starting with an empty list."
            )),
            Self::Unreadable(_) => Some(format!(
                "An I/O error occurred while trying to read the file {path}."
            )),
        }
    }

    pub fn into_expenses(self) -> Vec<Expense> {
        match self {
            Self::Loaded(expenses) => expenses,
            Self::Missing | Self::Corrupt(_) | Self::Unreadable(_) => Vec::new(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Store {
    path: PathBuf,
}

impl Store {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Reads every record from the store file.
    ///
    /// Absent, empty, corrupt or unreadable files are not errors: they yield a
    /// non-`Loaded` outcome. A JSON root that is not an array, or a record
    /// missing one of its keys, is an error.
    pub fn load(&self) -> ResultEngine<LoadOutcome> {
        let bytes = match fs::read(&self.path) {
            Ok(bytes) => bytes,
            Err(err) if err.kind() == io::ErrorKind::NotFound => {
                tracing::debug!("store {} does not exist", self.path.display());
                return Ok(LoadOutcome::Missing);
            }
            Err(err) => {
                tracing::warn!("failed to read store {}: {err}", self.path.display());
                return Ok(LoadOutcome::Unreadable(err));
            }
        };

        let root: Value = match serde_json::from_slice(&bytes) {
            Ok(root) => root,
            Err(err) => {
                tracing::warn!("store {} is not valid JSON: {err}", self.path.display());
                return Ok(LoadOutcome::Corrupt(err));
            }
        };

        let Value::Array(items) = root else {
            return Err(EngineError::NotAList(self.path.display().to_string()));
        };

        let expenses = items
            .into_iter()
            .map(Expense::from_value)
            .collect::<ResultEngine<Vec<_>>>()?;
        tracing::debug!(
            "loaded {} expenses from {}",
            expenses.len(),
            self.path.display()
        );
        Ok(LoadOutcome::Loaded(expenses))
    }

    /// Rewrites the store file with the full collection.
    ///
    /// The payload goes to a sibling temporary file first and is then renamed
    /// over the store, so a crash mid-write leaves the previous content intact.
    pub fn save(&self, expenses: &[Expense]) -> ResultEngine<()> {
        let payload = to_pretty_json(expenses)?;

        if let Some(parent) = self.path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent)?;
        }

        let tmp = self.tmp_path();
        fs::write(&tmp, payload)?;
        if let Err(err) = fs::rename(&tmp, &self.path) {
            let _ = fs::remove_file(&tmp);
            return Err(err.into());
        }

        tracing::debug!(
            "saved {} expenses to {}",
            expenses.len(),
            self.path.display()
        );
        Ok(())
    }

    fn tmp_path(&self) -> PathBuf {
        let mut name = self
            .path
            .file_name()
            .map(OsString::from)
            .unwrap_or_else(|| OsString::from(DEFAULT_STORE_PATH));
        name.push(".tmp");
        self.path.with_file_name(name)
    }
}

fn to_pretty_json(expenses: &[Expense]) -> ResultEngine<Vec<u8>> {
    let mut buf = Vec::new();
    let mut serializer =
        serde_json::Serializer::with_formatter(&mut buf, PrettyFormatter::with_indent(INDENT));
    expenses.serialize(&mut serializer)?;
    Ok(buf)
}

/// Returns the id the next record gets: one past the highest id in use, or 1
/// for an empty collection.
///
/// Fails with [`EngineError::IdExhausted`] when the highest id is `u64::MAX`.
pub fn next_id(expenses: &[Expense]) -> ResultEngine<u64> {
    match expenses.iter().map(|expense| expense.id).max() {
        None => Ok(1),
        Some(max) => max.checked_add(1).ok_or(EngineError::IdExhausted(max)),
    }
}
