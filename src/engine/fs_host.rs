//! Plain-filesystem host.
//!
//! Elements are verified on-disk paths; the move primitive renames each
//! element into the destination directory, falling back to copy+remove when
//! rename fails (cross-filesystem moves). Reference discovery belongs to
//! richer hosts (an IDE's refactoring layer), so moves report no reference
//! records here and every unit takes the full-search path.

use anyhow::{Result, anyhow, bail};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};
use walkdir::WalkDir;

use crate::output;
use crate::selection::SelectedFile;

use super::host::{Host, SearchFlags};

/// Host implementation over the real filesystem.
#[derive(Debug, Default)]
pub struct FsHost {
    dry_run: bool,
}

impl FsHost {
    pub fn new(dry_run: bool) -> Self {
        Self { dry_run }
    }
}

impl Host for FsHost {
    type Element = PathBuf;
    type Reference = PathBuf;

    fn mkdirs(&mut self, path: &Path) -> Result<()> {
        if self.dry_run {
            info!(action = "mkdir -p", path = %path.display(), "dry-run");
            return Ok(());
        }
        fs::create_dir_all(path).map_err(io_error_with_help("create destination directory", path))
    }

    fn resolve_element(&self, file: &SelectedFile) -> Option<PathBuf> {
        let meta = fs::symlink_metadata(file.path()).ok()?;
        // The selection's directory flag must still match what is on disk.
        if meta.file_type().is_dir() != file.is_dir() {
            return None;
        }
        Some(file.path().to_path_buf())
    }

    fn is_writable(&self, element: &PathBuf) -> bool {
        fs::metadata(element)
            .map(|m| !m.permissions().readonly())
            .unwrap_or(false)
    }

    fn move_elements(
        &mut self,
        elements: &[PathBuf],
        destination: &Path,
        flags: SearchFlags,
        _preview_usages: bool,
    ) -> Result<Vec<PathBuf>> {
        if !flags.is_none() {
            debug!("reference search requested; this host discovers none");
        }
        for element in elements {
            let file_name = element
                .file_name()
                .ok_or_else(|| anyhow!("Element missing a file name: {}", element.display()))?;
            let dest = destination.join(file_name);
            if dest.exists() {
                bail!(
                    "Destination already exists: {} (refusing to overwrite)",
                    dest.display()
                );
            }
            if self.dry_run {
                info!(src = %element.display(), dest = %dest.display(), "dry-run: would move");
                continue;
            }
            if element.is_dir() {
                move_dir_tree(element, &dest)?;
            } else {
                move_file(element, &dest)?;
            }
        }
        Ok(Vec::new())
    }

    fn reference_resolves_to(&self, record: &PathBuf, _element: &PathBuf) -> Result<bool> {
        Ok(record.exists())
    }

    fn notify_error(&self, title: &str, message: &str) {
        output::print_error(&format!("{title}: {message}"));
    }
}

/// Move a single file: atomic rename first, copy+remove on failure.
fn move_file(src: &Path, dest: &Path) -> Result<()> {
    match fs::rename(src, dest) {
        Ok(()) => {
            info!(src = %src.display(), dest = %dest.display(), "renamed file atomically");
            Ok(())
        }
        Err(e) => {
            let hint = rename_failure_hint(&e);
            warn!(error = %e, hint, "atomic rename failed, using copy+remove");
            fs::copy(src, dest).map_err(io_error_with_help("copy file to destination", dest))?;
            fs::remove_file(src).map_err(io_error_with_help("remove original file", src))?;
            Ok(())
        }
    }
}

/// Move a directory: rename, else copy the tree and remove the source.
fn move_dir_tree(src: &Path, dest: &Path) -> Result<()> {
    if fs::rename(src, dest).is_ok() {
        info!(src = %src.display(), dest = %dest.display(), "renamed directory atomically");
        return Ok(());
    }

    for entry in WalkDir::new(src).into_iter().filter_map(Result::ok) {
        let rel = entry
            .path()
            .strip_prefix(src)
            .map_err(|e| anyhow!("walk produced a path outside the tree: {e}"))?;
        let target = dest.join(rel);
        if entry.file_type().is_dir() {
            fs::create_dir_all(&target)
                .map_err(io_error_with_help("create directory", &target))?;
        } else {
            if let Some(parent) = target.parent() {
                fs::create_dir_all(parent)
                    .map_err(io_error_with_help("create directory", parent))?;
            }
            fs::copy(entry.path(), &target)
                .map_err(io_error_with_help("copy file to destination", &target))?;
        }
    }

    fs::remove_dir_all(src).map_err(io_error_with_help("remove source directory", src))?;
    info!(src = %src.display(), dest = %dest.display(), "copied directory contents and removed source");
    Ok(())
}

fn rename_failure_hint(e: &io::Error) -> &'static str {
    #[cfg(unix)]
    {
        match e.raw_os_error() {
            Some(code) if code == libc::EXDEV => return "cross-filesystem; will copy instead",
            Some(code) if code == libc::EACCES || code == libc::EPERM => {
                return "permission denied; check destination perms";
            }
            _ => {}
        }
    }
    if e.kind() == io::ErrorKind::PermissionDenied {
        "permission denied; check destination perms"
    } else {
        "falling back to copy"
    }
}

/// Enrich an io::Error with the operation, the path, and a platform hint.
fn io_error_with_help<'a>(op: &'a str, path: &'a Path) -> impl FnOnce(io::Error) -> anyhow::Error + 'a {
    move |e: io::Error| {
        let mut msg = format!("{} '{}': {}", op, path.display(), e);
        match e.kind() {
            io::ErrorKind::PermissionDenied => {
                msg.push_str(" — permission denied; check ownership and write permissions.");
            }
            io::ErrorKind::NotFound => {
                msg.push_str(" — path not found; verify it exists.");
            }
            io::ErrorKind::AlreadyExists => {
                msg.push_str(" — already exists; remove or choose a unique name.");
            }
            _ => {}
        }
        anyhow!(msg)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn moves_file_into_destination() {
        let td = tempdir().unwrap();
        let src_dir = td.path().join("src");
        let dest_dir = td.path().join("dest");
        fs::create_dir_all(&src_dir).unwrap();
        fs::create_dir_all(&dest_dir).unwrap();
        let src = src_dir.join("a.png");
        fs::write(&src, b"png").unwrap();

        let mut host = FsHost::new(false);
        host.move_elements(&[src.clone()], &dest_dir, SearchFlags::all(), true)
            .unwrap();

        assert!(!src.exists());
        assert_eq!(fs::read(dest_dir.join("a.png")).unwrap(), b"png");
    }

    #[test]
    fn refuses_to_overwrite_existing_destination() {
        let td = tempdir().unwrap();
        let src_dir = td.path().join("src");
        let dest_dir = td.path().join("dest");
        fs::create_dir_all(&src_dir).unwrap();
        fs::create_dir_all(&dest_dir).unwrap();
        let src = src_dir.join("a.png");
        fs::write(&src, b"new").unwrap();
        fs::write(dest_dir.join("a.png"), b"old").unwrap();

        let mut host = FsHost::new(false);
        let err = host
            .move_elements(&[src.clone()], &dest_dir, SearchFlags::all(), true)
            .unwrap_err();
        assert!(err.to_string().contains("already exists"));
        assert!(src.exists(), "source untouched after refusal");
    }

    #[test]
    fn moves_directory_tree() {
        let td = tempdir().unwrap();
        let src = td.path().join("values-fr");
        fs::create_dir_all(src.join("nested")).unwrap();
        fs::write(src.join("strings.xml"), b"<resources/>").unwrap();
        fs::write(src.join("nested").join("extra.xml"), b"x").unwrap();
        let dest_dir = td.path().join("core-res");
        fs::create_dir_all(&dest_dir).unwrap();

        let mut host = FsHost::new(false);
        host.move_elements(&[src.clone()], &dest_dir, SearchFlags::all(), true)
            .unwrap();

        assert!(!src.exists());
        assert!(dest_dir.join("values-fr").join("strings.xml").exists());
        assert!(dest_dir.join("values-fr").join("nested").join("extra.xml").exists());
    }

    #[test]
    fn dry_run_touches_nothing() {
        let td = tempdir().unwrap();
        let src_dir = td.path().join("src");
        fs::create_dir_all(&src_dir).unwrap();
        let src = src_dir.join("a.png");
        fs::write(&src, b"png").unwrap();
        let dest_dir = td.path().join("dest");

        let mut host = FsHost::new(true);
        host.mkdirs(&dest_dir).unwrap();
        host.move_elements(&[src.clone()], &dest_dir, SearchFlags::all(), true)
            .unwrap();

        assert!(src.exists());
        assert!(!dest_dir.exists());
    }

    #[test]
    fn resolve_element_rejects_kind_mismatch() {
        let td = tempdir().unwrap();
        let file = td.path().join("plain.txt");
        fs::write(&file, b"x").unwrap();

        let host = FsHost::new(false);
        assert!(host.resolve_element(&SelectedFile::new(&file, false)).is_some());
        assert!(host.resolve_element(&SelectedFile::new(&file, true)).is_none());
        assert!(
            host.resolve_element(&SelectedFile::new(td.path().join("missing"), false))
                .is_none()
        );
    }
}
