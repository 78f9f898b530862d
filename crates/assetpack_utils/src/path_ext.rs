use std::{
  borrow::Cow,
  ffi::OsStr,
  path::{Path, PathBuf},
};

use sugar_path::SugarPath;

pub trait PathExt {
  /// Forward-slash form used when matching rule patterns, so the same pattern
  /// behaves identically on every platform.
  fn slash_lossy(&self) -> Cow<str>;

  fn representative_file_name(&self) -> Cow<str>;

  /// Joins `self` onto `base` unless it is already absolute, then collapses `.` and `..`.
  fn absolutize_from(&self, base: &Path) -> PathBuf;

  /// Collapses `.` and `..` without touching the file system.
  fn normalized(&self) -> PathBuf;
}

impl PathExt for Path {
  fn slash_lossy(&self) -> Cow<str> {
    self.to_slash_lossy()
  }

  /// It doesn't ensure the file name is a valid identifier in JS.
  fn representative_file_name(&self) -> Cow<str> {
    let file_name =
      self.file_stem().map_or_else(|| self.to_string_lossy(), |stem| stem.to_string_lossy());

    let file_name = match &*file_name {
      // "index": Node.js use `index` as a special name for directory import.
      "index" | "mod" => self
        .parent()
        .and_then(Self::file_stem)
        .map(OsStr::to_string_lossy)
        .map_or(file_name, |parent_dir_name| parent_dir_name),
      _ => file_name,
    };

    file_name
  }

  fn absolutize_from(&self, base: &Path) -> PathBuf {
    if self.is_absolute() {
      self.normalize()
    } else {
      base.join(self).normalize()
    }
  }

  fn normalized(&self) -> PathBuf {
    self.normalize()
  }
}

#[test]
fn test_representative_file_name() {
  let cwd = Path::new(".").join("project");
  let path = cwd.join("src").join("app.js");
  assert_eq!(path.representative_file_name(), "app");

  let path = cwd.join("admin").join("index.js");
  assert_eq!(path.representative_file_name(), "admin");
}

#[cfg(unix)]
#[test]
fn test_absolutize_from() {
  let root = Path::new("/srv/frontend");
  assert_eq!(
    Path::new("../assets/server/public/build").absolutize_from(root),
    PathBuf::from("/srv/assets/server/public/build")
  );
  assert_eq!(Path::new("./src/app.js").absolutize_from(root), PathBuf::from("/srv/frontend/src/app.js"));
  assert_eq!(Path::new("/opt/css").absolutize_from(root), PathBuf::from("/opt/css"));
}

#[cfg(unix)]
#[test]
fn test_normalized() {
  assert_eq!(
    Path::new("/srv/frontend/css/../src/components/x.css").normalized(),
    PathBuf::from("/srv/frontend/src/components/x.css")
  );
  assert_eq!(Path::new("/srv/frontend/./css/app.css").normalized(), PathBuf::from("/srv/frontend/css/app.css"));
}
