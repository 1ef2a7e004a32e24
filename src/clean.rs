use std::fs;
use std::io;
use std::path::Path;

/// Artifacts removed from the working directory, in the order they are tried.
pub const TARGETS: [&str; 6] = [
    "node_modules",
    ".next",
    "node_modules_old",
    ".next_old",
    "bun.lockb",
    "package-lock.json",
];

/// What happened to a single target.
#[derive(Debug)]
pub enum Outcome {
    /// Nothing at the path; nothing reported.
    Skipped,
    DeletedDirectory,
    DeletedFile,
    Failed(io::Error),
}

impl Outcome {
    /// The line reported for `target`, or `None` when it was skipped.
    pub fn status_line(&self, target: &str) -> Option<String> {
        match self {
            Outcome::Skipped => None,
            Outcome::DeletedDirectory => Some(format!("Deleted directory: {target}")),
            Outcome::DeletedFile => Some(format!("Deleted file: {target}")),
            Outcome::Failed(e) => Some(format!("Failed to delete {target}: {e}")),
        }
    }
}

pub fn clean_targets(base: &Path) -> Vec<(&'static str, Outcome)> {
    clean_paths(base, &TARGETS)
}

/// Removes each of `targets` under `base`. A failure is recorded against its
/// entry and the remaining entries are still processed.
pub fn clean_paths<'a>(base: &Path, targets: &[&'a str]) -> Vec<(&'a str, Outcome)> {
    targets
        .iter()
        .map(|&target| (target, remove_target(&base.join(target))))
        .collect()
}

pub fn remove_target(path: &Path) -> Outcome {
    if !path.exists() {
        return Outcome::Skipped;
    }

    let is_symlink = match fs::symlink_metadata(path) {
        Ok(metadata) => metadata.file_type().is_symlink(),
        Err(e) => return Outcome::Failed(e),
    };

    if path.is_dir() {
        // A linked directory is left in place rather than unlinked or emptied.
        if is_symlink {
            return Outcome::Failed(io::Error::other(
                "refusing to remove a symbolic link to a directory",
            ));
        }
        match fs::remove_dir_all(path) {
            Ok(()) => Outcome::DeletedDirectory,
            Err(e) => Outcome::Failed(e),
        }
    } else {
        match fs::remove_file(path) {
            Ok(()) => Outcome::DeletedFile,
            Err(e) => Outcome::Failed(e),
        }
    }
}
