//! Filesystem helpers built on `cap-std` and `camino`.

use camino::Utf8Path;
use cap_std::{ambient_authority, fs_utf8};
use std::io;

/// Open a UTF-8 file path using ambient authority.
pub(crate) fn open_utf8_file(path: &Utf8Path) -> io::Result<fs_utf8::File> {
    fs_utf8::File::open_ambient(path, ambient_authority())
}

/// Return whether `path` exists and is a regular file.
pub(crate) fn file_is_file(path: &Utf8Path) -> io::Result<bool> {
    let parent = match path.parent() {
        Some(parent) if !parent.as_str().is_empty() => parent,
        _ => Utf8Path::new("."),
    };
    let name = path
        .file_name()
        .ok_or_else(|| io::Error::new(io::ErrorKind::NotFound, "path has no file name"))?;
    let dir = fs_utf8::Dir::open_ambient_dir(parent, ambient_authority())?;
    dir.metadata(name).map(|meta| meta.is_file())
}

#[cfg(test)]
mod tests {
    use super::*;
    use camino::Utf8PathBuf;
    use rstest::rstest;
    use tempfile::TempDir;

    fn root(tmp: &TempDir) -> Utf8PathBuf {
        Utf8PathBuf::from_path_buf(tmp.path().to_path_buf()).expect("utf-8 tempdir")
    }

    #[rstest]
    fn regular_files_are_files() {
        let tmp = TempDir::new().expect("tempdir");
        let path = root(&tmp).join("request.json");
        std::fs::write(&path, b"{}").expect("write file");
        assert!(file_is_file(&path).expect("inspect"));
        assert!(open_utf8_file(&path).is_ok());
    }

    #[rstest]
    fn directories_are_not_files() {
        let tmp = TempDir::new().expect("tempdir");
        let path = root(&tmp).join("nested");
        std::fs::create_dir(&path).expect("create dir");
        assert!(!file_is_file(&path).expect("inspect"));
    }

    #[rstest]
    fn missing_files_report_not_found() {
        let tmp = TempDir::new().expect("tempdir");
        let err = file_is_file(&root(&tmp).join("absent.json")).expect_err("missing");
        assert_eq!(err.kind(), io::ErrorKind::NotFound);
    }
}
