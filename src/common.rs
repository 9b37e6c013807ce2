use crate::RelaunchError::SelfPathUnresolved;
use crate::RelaunchResult;
use std::path::{Path, PathBuf};

/// Finds the running executable, `std::env::current_exe` unless replaced
pub type SelfPathResolver = fn() -> std::io::Result<PathBuf>;

pub(crate) trait MaybeHasSelfPath {
    fn get_self_path(&self) -> Option<&Path>;

    fn get_self_path_resolver(&self) -> SelfPathResolver;
}

/// Use the configured self path if there is one, otherwise ask the resolver where the running executable lives.
pub(crate) fn resolve_self_path(
    maybe_has_self_path: &dyn MaybeHasSelfPath,
) -> RelaunchResult<PathBuf> {
    match maybe_has_self_path.get_self_path() {
        Some(path) => Ok(path.to_path_buf()),
        None => {
            let resolver = maybe_has_self_path.get_self_path_resolver();
            resolver().map_err(SelfPathUnresolved)
        }
    }
}

/// Everything before the final separator, or an empty path when there is none.
pub(crate) fn base_directory(self_path: &Path) -> PathBuf {
    self_path.parent().map(Path::to_path_buf).unwrap_or_default()
}
