use std::{
  io,
  path::{Path, PathBuf},
};

/// The slice of file system access configuration assembly needs: existence
/// checks for required paths and a listing of emitted files for size hints.
pub trait FileSystem: Send + Sync {
  fn is_file(&self, path: &Path) -> bool;

  fn is_dir(&self, path: &Path) -> bool;

  fn file_size(&self, path: &Path) -> io::Result<u64>;

  /// Files directly inside `path`, sorted by path.
  fn read_dir_files(&self, path: &Path) -> io::Result<Vec<PathBuf>>;
}
