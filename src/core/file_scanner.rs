use std::path::{Path, PathBuf};

use glob::Pattern;
use walkdir::{DirEntry, WalkDir};

use crate::core::error::GenerateError;

/// Directory names never descended into.
pub const EXCLUDED_DIRS: &[&str] = &["vendor", "node_modules", "testdata"];

/// Prefix of files written by the generator itself.
pub const GENERATED_FILE_PREFIX: &str = "generated_";

const SOURCE_EXTENSION: &str = "go";
const TEST_FILE_SUFFIX: &str = "_test.go";

/// Collect Go source files under `root` in lexical walk order.
///
/// Hidden directories (except `root` itself), [`EXCLUDED_DIRS`], test files
/// and previous generator output are skipped, as is any path whose
/// project-relative form matches one of `ignores`.
///
/// # Errors
///
/// Any walk error (missing root, unreadable directory) aborts the scan.
pub fn scan_files(root: &Path, ignores: &[Pattern]) -> Result<Vec<PathBuf>, GenerateError> {
    let mut files = Vec::new();

    let walker = WalkDir::new(root)
        .sort_by_file_name()
        .into_iter()
        .filter_entry(|entry| !is_skipped_dir(entry) && !is_ignored(entry.path(), root, ignores));

    for entry in walker {
        let entry = entry?;
        if entry.file_type().is_file() && is_source_file(entry.path()) {
            files.push(entry.into_path());
        }
    }

    Ok(files)
}

/// Project-relative path with `/` separators.
pub fn relative_path(path: &Path, root: &Path) -> String {
    let relative = path.strip_prefix(root).unwrap_or(path);
    relative
        .components()
        .map(|component| component.as_os_str().to_string_lossy())
        .collect::<Vec<_>>()
        .join("/")
}

fn is_skipped_dir(entry: &DirEntry) -> bool {
    if entry.depth() == 0 || !entry.file_type().is_dir() {
        return false;
    }
    let name = entry.file_name().to_string_lossy();
    name.starts_with('.') || EXCLUDED_DIRS.contains(&name.as_ref())
}

fn is_ignored(path: &Path, root: &Path, ignores: &[Pattern]) -> bool {
    if ignores.is_empty() || path == root {
        return false;
    }
    let relative = relative_path(path, root);
    ignores.iter().any(|pattern| pattern.matches(&relative))
}

fn is_source_file(path: &Path) -> bool {
    let Some(name) = path.file_name().and_then(|n| n.to_str()) else {
        return false;
    };
    path.extension().and_then(|e| e.to_str()) == Some(SOURCE_EXTENSION)
        && !name.ends_with(TEST_FILE_SUFFIX)
        && !name.starts_with(GENERATED_FILE_PREFIX)
}
