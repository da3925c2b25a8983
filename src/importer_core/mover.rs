use std::fs::{self, OpenOptions};
use std::io;
use std::path::{Path, PathBuf};

/// How a file ended up at its destination.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveMethod {
    Rename,
    /// Source and destination are on different filesystems.
    CopyAndRemove,
}

/// Create `dir` and any missing parents. Existing directories are fine.
pub fn provision_dir(dir: &Path) -> io::Result<()> {
    if !dir.is_dir() {
        log::debug!("Creating directory {}", dir.display());
    }
    fs::create_dir_all(dir)
}

/// Move `source` to `destination` with a single rename, falling back to
/// copy-then-remove when the two paths live on different filesystems.
pub fn move_file(source: &Path, destination: &Path) -> io::Result<MoveMethod> {
    match fs::rename(source, destination) {
        Ok(()) => Ok(MoveMethod::Rename),
        Err(e) if e.kind() == io::ErrorKind::CrossesDevices => {
            log::debug!(
                "{} and {} are on different filesystems, copying instead",
                source.display(),
                destination.display()
            );
            copy_and_remove(source, destination)?;
            Ok(MoveMethod::CopyAndRemove)
        }
        Err(e) => Err(e),
    }
}

fn copy_and_remove(source: &Path, destination: &Path) -> io::Result<()> {
    let copied = (|| {
        let mut reader = fs::File::open(source)?;
        let mut writer = OpenOptions::new()
            .write(true)
            .create_new(true)
            .open(destination)?;
        io::copy(&mut reader, &mut writer)?;
        writer.sync_all()?;
        fs::set_permissions(destination, fs::metadata(source)?.permissions())
    })();

    if let Err(e) = copied {
        // Only clean up a partial copy we created ourselves.
        if e.kind() != io::ErrorKind::AlreadyExists {
            let _ = fs::remove_file(destination);
        }
        return Err(e);
    }

    fs::remove_file(source)
}

/// Whether `source` and `destination` name the same location on disk.
///
/// Parent directories are canonicalized when they exist so that relative
/// roots or symlinked directories still compare equal.
pub fn same_location(source: &Path, destination: &Path) -> bool {
    if source == destination {
        return true;
    }

    match (canonical_parent(source), canonical_parent(destination)) {
        (Some(a), Some(b)) => a == b,
        _ => false,
    }
}

fn canonical_parent(path: &Path) -> Option<PathBuf> {
    let parent = path.parent()?;
    let name = path.file_name()?;
    let parent = if parent.as_os_str().is_empty() {
        Path::new(".")
    } else {
        parent
    };
    fs::canonicalize(parent).ok().map(|p| p.join(name))
}

/// Whether anything at all (file, directory, dangling symlink) occupies `path`.
pub fn is_occupied(path: &Path) -> bool {
    fs::symlink_metadata(path).is_ok()
}
