use std::path::Path;

use chrono::{DateTime, Utc};
use filetime::FileTime;
use walkdir::WalkDir;

use crate::error::RestampError;

/// Seam for the OS-level metadata mutation so tests can observe call order
/// without touching real file times.
pub trait EntryTimesLike {
    fn set_entry_times(&self, path: &Path, instant: DateTime<Utc>) -> Result<(), RestampError>;
}

/// Production setter: applies the instant as both access and modification
/// time through the filetime crate. Creation time is only settable where the
/// platform exposes it; a platform-specific impl of EntryTimesLike is the
/// place for that.
pub struct FileEntryTimes;

impl EntryTimesLike for FileEntryTimes {
    fn set_entry_times(&self, path: &Path, instant: DateTime<Utc>) -> Result<(), RestampError> {
        let ft = FileTime::from_unix_time(instant.timestamp(), instant.timestamp_subsec_nanos());
        filetime::set_file_times(path, ft, ft)?;
        Ok(())
    }
}

/// Apply one instant to every entry under a root folder and then to the root
/// itself. Contents go first and the root strictly last so mutating children
/// never bumps the root's own modify time back off the plan. A failure on
/// one path is logged and the walk continues; partial application across a
/// large tree is never thrown away for one locked entry.
pub fn apply_to_tree(
    setter: &impl EntryTimesLike,
    root: &Path,
    instant: DateTime<Utc>,
    verbose: bool,
) {
    for entry in WalkDir::new(root).min_depth(1).contents_first(true) {
        let entry = match entry {
            Ok(entry) => entry,
            Err(e) => {
                eprintln!("[WARN] Could not walk under {}: {}", root.display(), e);
                continue;
            }
        };
        match setter.set_entry_times(entry.path(), instant) {
            Ok(()) => {
                if verbose {
                    println!("[restamp] Set {}", entry.path().display());
                }
            }
            Err(e) => {
                eprintln!(
                    "[WARN] Could not set times for {}: {}",
                    entry.path().display(),
                    e
                );
            }
        }
    }

    match setter.set_entry_times(root, instant) {
        Ok(()) => {
            if verbose {
                println!("[restamp] Set root {}", root.display());
            }
        }
        Err(e) => {
            eprintln!("[WARN] Could not set times for root {}: {}", root.display(), e);
        }
    }
}
