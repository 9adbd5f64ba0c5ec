use crate::error::{Result, StoreError};
use crate::paths;
use crate::table::write_table;
use phonesplit_core::domain::Table;
use std::fs;
use std::path::Path;
use tempfile::NamedTempFile;
use tracing::debug;

/// Writes every table to a temp file next to its destination, then renames
/// them into place once all of them were written. A failed write leaves the
/// existing destination files untouched.
pub fn write_tables(outputs: &[(&Path, &Table)]) -> Result<()> {
    let mut staged = Vec::with_capacity(outputs.len());
    for (path, table) in outputs {
        let dir = paths::ensure_parent_dir(path)?;
        let mut file =
            NamedTempFile::new_in(&dir).map_err(|source| StoreError::io(&dir, source))?;
        write_table(file.as_file_mut(), table).map_err(|source| StoreError::csv(*path, source))?;
        file.as_file()
            .sync_all()
            .map_err(|source| StoreError::io(file.path(), source))?;
        set_output_permissions(file.as_file()).map_err(|source| StoreError::io(*path, source))?;
        debug!(path = %path.display(), rows = table.len(), "staged output");
        staged.push((file, *path));
    }

    for (file, path) in staged {
        file.persist(path).map_err(|err| StoreError::io(path, err.error))?;
    }
    Ok(())
}

#[cfg(unix)]
fn set_output_permissions(file: &fs::File) -> std::io::Result<()> {
    use std::os::unix::fs::PermissionsExt;
    file.set_permissions(fs::Permissions::from_mode(0o644))
}

#[cfg(not(unix))]
fn set_output_permissions(_file: &fs::File) -> std::io::Result<()> {
    Ok(())
}
