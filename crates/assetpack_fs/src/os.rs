use std::{
  fs, io,
  path::{Path, PathBuf},
};

use crate::FileSystem;

#[derive(Debug, Default, Clone, Copy)]
pub struct OsFileSystem;

impl FileSystem for OsFileSystem {
  fn is_file(&self, path: &Path) -> bool {
    path.is_file()
  }

  fn is_dir(&self, path: &Path) -> bool {
    path.is_dir()
  }

  fn file_size(&self, path: &Path) -> io::Result<u64> {
    Ok(fs::metadata(path)?.len())
  }

  fn read_dir_files(&self, path: &Path) -> io::Result<Vec<PathBuf>> {
    let mut files = vec![];
    for entry in fs::read_dir(path)? {
      let entry = entry?;
      if entry.file_type()?.is_file() {
        files.push(entry.path());
      }
    }
    files.sort();
    Ok(files)
  }
}
