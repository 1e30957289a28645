/*!
 * Root directory resolution
 *
 * The root is a fixed ancestor of the tool's own location: the parent of the
 * directory holding the executable. Installing the binary at
 * `<project>/tools/promptclip` resolves to `<project>`.
 */

use std::env;
use std::path::{Path, PathBuf};

use crate::ensure;
use crate::error::{PromptError, Result};

/// Return the parent of the parent of `anchor`
pub fn resolve_root(anchor: &Path) -> Result<PathBuf> {
    let root = anchor
        .parent()
        .and_then(Path::parent)
        .filter(|p| !p.as_os_str().is_empty())
        .ok_or_else(|| {
            PromptError::RootNotFound(format!("{} has no grandparent", anchor.display()))
        })?;

    validate_root(root)?;
    Ok(root.to_path_buf())
}

/// Resolve the root from the running executable
pub fn resolve_root_from_exe() -> Result<PathBuf> {
    let exe = env::current_exe().map_err(|e| {
        PromptError::RootNotFound(format!("Cannot locate current executable: {}", e))
    })?;
    log::debug!("Resolving root from executable {}", exe.display());
    resolve_root(&exe)
}

/// Check that `root` exists and is a directory
pub fn validate_root(root: &Path) -> Result<()> {
    ensure!(
        root.is_dir(),
        RootNotFound,
        "{} is not an existing directory",
        root.display()
    );
    Ok(())
}
