//! JSON file helpers
//!
//! Writes go to a sibling temp file which is synced and renamed over the
//! target, so a failed save never leaves a half-written workbook.

use std::fs::{self, File};
use std::io::{BufReader, BufWriter, Write};
use std::path::Path;

use serde::{de::DeserializeOwned, Serialize};

use crate::error::{BudgetError, BudgetResult};

fn storage_err(action: &str, path: &Path, e: impl std::fmt::Display) -> BudgetError {
    BudgetError::Storage(format!("Failed to {} {}: {}", action, path.display(), e))
}

/// Read a JSON document; `Ok(None)` when the file does not exist
pub fn read_json<T, P>(path: P) -> BudgetResult<Option<T>>
where
    T: DeserializeOwned,
    P: AsRef<Path>,
{
    let path = path.as_ref();
    if !path.exists() {
        return Ok(None);
    }

    let file = File::open(path).map_err(|e| storage_err("open", path, e))?;
    serde_json::from_reader(BufReader::new(file))
        .map(Some)
        .map_err(|e| storage_err("parse", path, e))
}

/// Replace `path` with pretty-printed JSON
pub fn write_json_atomic<T, P>(path: P, data: &T) -> BudgetResult<()>
where
    T: Serialize,
    P: AsRef<Path>,
{
    let path = path.as_ref();
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(|e| storage_err("create directory", parent, e))?;
    }

    // Same directory as the target, or the rename is not atomic.
    let temp_path = path.with_extension("json.tmp");

    let write = || -> BudgetResult<()> {
        let file = File::create(&temp_path).map_err(|e| storage_err("create", &temp_path, e))?;
        let mut writer = BufWriter::new(file);
        serde_json::to_writer_pretty(&mut writer, data)
            .map_err(|e| storage_err("serialize", &temp_path, e))?;
        writer
            .flush()
            .and_then(|_| writer.get_ref().sync_all())
            .map_err(|e| storage_err("sync", &temp_path, e))
    };

    let result = write().and_then(|_| {
        fs::rename(&temp_path, path).map_err(|e| storage_err("replace", path, e))
    });
    if result.is_err() {
        let _ = fs::remove_file(&temp_path);
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::BudgetModel;
    use crate::storage::Workbook;
    use tempfile::TempDir;

    #[test]
    fn test_missing_file_reads_none() {
        let temp_dir = TempDir::new().unwrap();
        let loaded: Option<Workbook> = read_json(temp_dir.path().join("budget.json")).unwrap();
        assert!(loaded.is_none());
    }

    #[test]
    fn test_write_then_read_workbook() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("data").join("budget.json");
        let workbook = Workbook::from_model(&BudgetModel::seed());

        write_json_atomic(&path, &workbook).unwrap();

        assert!(!temp_dir.path().join("data").join("budget.json.tmp").exists());
        let loaded: Option<Workbook> = read_json(&path).unwrap();
        assert_eq!(loaded, Some(workbook));
    }

    #[test]
    fn test_overwrite_replaces_contents() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("numbers.json");

        write_json_atomic(&path, &vec![1, 2, 3]).unwrap();
        write_json_atomic(&path, &vec![4]).unwrap();

        let loaded: Option<Vec<i32>> = read_json(&path).unwrap();
        assert_eq!(loaded, Some(vec![4]));
    }

    #[test]
    fn test_garbage_is_storage_error() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("budget.json");
        fs::write(&path, "{ months: oops").unwrap();

        let err = read_json::<Workbook, _>(&path).unwrap_err();
        assert!(matches!(err, BudgetError::Storage(_)));
    }
}
