use std::{
  io,
  path::{Path, PathBuf},
};

use rustc_hash::{FxHashMap, FxHashSet};

use crate::FileSystem;

/// In-memory tree for callers that want assembly without touching disk.
#[derive(Debug, Default, Clone)]
pub struct MemoryFileSystem {
  files: FxHashMap<PathBuf, u64>,
  dirs: FxHashSet<PathBuf>,
}

impl MemoryFileSystem {
  pub fn new() -> Self {
    Self::default()
  }

  /// Adds a file of `size` bytes along with every ancestor directory.
  pub fn add_file(&mut self, path: impl Into<PathBuf>, size: u64) -> &mut Self {
    let path = path.into();
    self.add_ancestors(&path);
    self.files.insert(path, size);
    self
  }

  pub fn add_dir(&mut self, path: impl Into<PathBuf>) -> &mut Self {
    let path = path.into();
    self.add_ancestors(&path);
    self.dirs.insert(path);
    self
  }

  fn add_ancestors(&mut self, path: &Path) {
    for ancestor in path.ancestors().skip(1) {
      if ancestor.as_os_str().is_empty() {
        break;
      }
      self.dirs.insert(ancestor.to_path_buf());
    }
  }
}

impl FileSystem for MemoryFileSystem {
  fn is_file(&self, path: &Path) -> bool {
    self.files.contains_key(path)
  }

  fn is_dir(&self, path: &Path) -> bool {
    self.dirs.contains(path)
  }

  fn file_size(&self, path: &Path) -> io::Result<u64> {
    self.files.get(path).copied().ok_or_else(|| {
      io::Error::new(io::ErrorKind::NotFound, format!("{} does not exist", path.display()))
    })
  }

  fn read_dir_files(&self, path: &Path) -> io::Result<Vec<PathBuf>> {
    if !self.is_dir(path) {
      return Err(io::Error::new(
        io::ErrorKind::NotFound,
        format!("{} is not a directory", path.display()),
      ));
    }
    let mut files =
      self.files.keys().filter(|file| file.parent() == Some(path)).cloned().collect::<Vec<_>>();
    files.sort();
    Ok(files)
  }
}
