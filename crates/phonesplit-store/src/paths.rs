use crate::error::{Result, StoreError};
use std::fs;
use std::path::{Path, PathBuf};

/// Creates the parent directory of `path` when missing and returns it.
pub fn ensure_parent_dir(path: &Path) -> Result<PathBuf> {
    let parent = parent_dir(path);
    if !parent.exists() {
        fs::create_dir_all(&parent).map_err(|source| StoreError::io(&parent, source))?;
    }
    Ok(parent)
}

/// Rejects output paths that would clobber each other or the input.
pub fn validate_output_paths(input: &Path, outputs: &[&Path]) -> Result<()> {
    let input_target = resolve_path(input)?;
    let mut seen: Vec<PathBuf> = Vec::with_capacity(outputs.len());
    for output in outputs {
        if output.as_os_str().is_empty() || output.file_name().is_none() {
            return Err(StoreError::InvalidOutputPath(format!(
                "not a file path: {}",
                output.display()
            )));
        }
        let target = resolve_path(output)?;
        if target == input_target {
            return Err(StoreError::InvalidOutputPath(format!(
                "{} would overwrite the input file",
                output.display()
            )));
        }
        if seen.contains(&target) {
            return Err(StoreError::InvalidOutputPath(format!(
                "{} is used for both outputs",
                output.display()
            )));
        }
        seen.push(target);
    }
    Ok(())
}

fn parent_dir(path: &Path) -> PathBuf {
    path.parent()
        .filter(|p| !p.as_os_str().is_empty())
        .unwrap_or_else(|| Path::new("."))
        .to_path_buf()
}

fn resolve_path(path: &Path) -> Result<PathBuf> {
    if path.exists() {
        return fs::canonicalize(path).map_err(|source| StoreError::io(path, source));
    }
    let parent = parent_dir(path);
    if let Some(file_name) = path.file_name() {
        if parent.exists() {
            let parent =
                fs::canonicalize(&parent).map_err(|source| StoreError::io(&parent, source))?;
            return Ok(parent.join(file_name));
        }
    }
    std::path::absolute(path).map_err(|source| StoreError::io(path, source))
}
