//! File operations for assembly installation
//!
//! This module handles:
//! - Content hashing with BLAKE3 (hash_file)
//! - Directory creation (ensure_dir)
//! - Idempotent copying (copy_assembly)

use std::fs::{self, File};
use std::io::{BufReader, Read};
use std::path::Path;

use blake3::Hasher;

use crate::error::{Result, fs::read_error, fs::write_error};

/// Hash prefix for BLAKE3 digests
pub const HASH_PREFIX: &str = "blake3:";

/// What a copy actually did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CopyOutcome {
    Copied,
    /// Target already held the same bytes (or was the source itself)
    Unchanged,
}

/// BLAKE3 digest of a file's contents
pub fn hash_file(path: &Path) -> Result<String> {
    let file = File::open(path).map_err(|e| read_error(path, &e))?;

    let mut reader = BufReader::new(file);
    let mut hasher = Hasher::new();
    let mut buffer = [0u8; 8192];

    loop {
        let bytes_read = reader.read(&mut buffer).map_err(|e| read_error(path, &e))?;
        if bytes_read == 0 {
            break;
        }
        hasher.update(&buffer[..bytes_read]);
    }

    Ok(format!("{}{}", HASH_PREFIX, hasher.finalize().to_hex()))
}

pub fn ensure_dir(dir: &Path) -> Result<()> {
    fs::create_dir_all(dir).map_err(|e| write_error(dir, &e))
}

fn same_file(a: &Path, b: &Path) -> bool {
    match (dunce::canonicalize(a), dunce::canonicalize(b)) {
        (Ok(a), Ok(b)) => a == b,
        _ => false,
    }
}

/// Copy `source` to `target`, overwriting different content.
///
/// Copying a file onto itself, or onto a file with the same digest, succeeds
/// without writing.
pub fn copy_assembly(source: &Path, target: &Path) -> Result<CopyOutcome> {
    if target.is_file() && (same_file(source, target) || hash_file(source)? == hash_file(target)?) {
        return Ok(CopyOutcome::Unchanged);
    }

    if let Some(parent) = target.parent() {
        ensure_dir(parent)?;
    }
    fs::copy(source, target).map_err(|e| write_error(target, &e))?;
    Ok(CopyOutcome::Copied)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_hash_file() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("Tool.exe");
        fs::write(&path, "MZ").unwrap();

        let hash = hash_file(&path).unwrap();
        assert!(hash.starts_with(HASH_PREFIX));
        assert_eq!(hash, hash_file(&path).unwrap());
    }

    #[test]
    fn test_hash_file_not_found() {
        let result = hash_file(Path::new("/nonexistent/Tool.exe"));
        assert!(matches!(
            result,
            Err(crate::error::ClrError::FileReadFailed { .. })
        ));
    }

    #[test]
    fn test_copy_creates_target_dirs() {
        let temp = TempDir::new().unwrap();
        let source = temp.path().join("Lib.dll");
        fs::write(&source, "lib").unwrap();
        let target = temp.path().join("uac/gac_msil/Lib/1.0__acme/Lib.dll");

        assert_eq!(copy_assembly(&source, &target).unwrap(), CopyOutcome::Copied);
        assert_eq!(fs::read_to_string(&target).unwrap(), "lib");
    }

    #[test]
    fn test_copy_same_content_is_unchanged() {
        let temp = TempDir::new().unwrap();
        let source = temp.path().join("a.dll");
        let target = temp.path().join("b.dll");
        fs::write(&source, "same").unwrap();
        fs::write(&target, "same").unwrap();

        assert_eq!(copy_assembly(&source, &target).unwrap(), CopyOutcome::Unchanged);
    }

    #[test]
    fn test_copy_onto_itself() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("a.dll");
        fs::write(&path, "self").unwrap();

        assert_eq!(copy_assembly(&path, &path).unwrap(), CopyOutcome::Unchanged);
        assert_eq!(fs::read_to_string(&path).unwrap(), "self");
    }

    #[test]
    fn test_copy_overwrites_different_content() {
        let temp = TempDir::new().unwrap();
        let source = temp.path().join("a.dll");
        let target = temp.path().join("b.dll");
        fs::write(&source, "new").unwrap();
        fs::write(&target, "old").unwrap();

        assert_eq!(copy_assembly(&source, &target).unwrap(), CopyOutcome::Copied);
        assert_eq!(fs::read_to_string(&target).unwrap(), "new");
    }
}
