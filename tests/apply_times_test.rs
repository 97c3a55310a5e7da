use std::cell::RefCell;
use std::fs;
use std::path::{Path, PathBuf};

use chrono::{DateTime, TimeZone, Utc};
use filetime::FileTime;
use restamp::RestampError;
use restamp::apply::{EntryTimesLike, FileEntryTimes, apply_to_tree};

/// Records every mutation instead of performing it, optionally failing for
/// one path to exercise the continue-on-error behavior.
struct RecordingEntryTimes {
    calls: RefCell<Vec<PathBuf>>,
    fail_on: Option<PathBuf>,
}

impl RecordingEntryTimes {
    fn new() -> Self {
        RecordingEntryTimes {
            calls: RefCell::new(Vec::new()),
            fail_on: None,
        }
    }

    fn failing_on(path: PathBuf) -> Self {
        RecordingEntryTimes {
            calls: RefCell::new(Vec::new()),
            fail_on: Some(path),
        }
    }
}

impl EntryTimesLike for RecordingEntryTimes {
    fn set_entry_times(&self, path: &Path, _instant: DateTime<Utc>) -> Result<(), RestampError> {
        if self.fail_on.as_deref() == Some(path) {
            return Err(RestampError::Other("simulated locked entry".to_string()));
        }
        self.calls.borrow_mut().push(path.to_path_buf());
        Ok(())
    }
}

fn build_tree(root: &str) -> PathBuf {
    let root = PathBuf::from(root);
    let _ = fs::remove_dir_all(&root);
    fs::create_dir_all(root.join("nested/deeper")).expect("Failed to create test tree");
    fs::write(root.join("a.bin"), b"a").expect("Failed to write test file");
    fs::write(root.join("nested/b.bin"), b"b").expect("Failed to write test file");
    fs::write(root.join("nested/deeper/c.bin"), b"c").expect("Failed to write test file");
    root
}

#[test]
fn test_root_is_mutated_last() {
    let root = build_tree("/tmp/restamp_test_apply_order");
    let setter = RecordingEntryTimes::new();
    let instant = Utc.with_ymd_and_hms(2099, 1, 1, 7, 59, 58).unwrap();

    apply_to_tree(&setter, &root, instant, false);

    let calls = setter.calls.borrow();
    assert_eq!(calls.len(), 6, "three files, two directories, one root");
    assert_eq!(calls.last().unwrap(), &root, "root must come last");

    // Every directory is mutated only after everything inside it.
    for (idx, path) in calls.iter().enumerate() {
        for later in &calls[idx + 1..] {
            assert!(
                !later.starts_with(path) || later == path,
                "{} was set before its child {}",
                path.display(),
                later.display()
            );
        }
    }

    let _ = fs::remove_dir_all(&root);
}

#[test]
fn test_one_locked_entry_does_not_stop_the_walk() {
    let root = build_tree("/tmp/restamp_test_apply_partial");
    let setter = RecordingEntryTimes::failing_on(root.join("nested/b.bin"));
    let instant = Utc.with_ymd_and_hms(2099, 1, 1, 7, 59, 58).unwrap();

    apply_to_tree(&setter, &root, instant, false);

    let calls = setter.calls.borrow();
    assert_eq!(calls.len(), 5, "the failing path is skipped, everything else proceeds");
    assert!(calls.contains(&root.join("nested/deeper/c.bin")));
    assert_eq!(calls.last().unwrap(), &root);

    let _ = fs::remove_dir_all(&root);
}

#[test]
fn test_file_entry_times_sets_the_planned_mtime() {
    let root = build_tree("/tmp/restamp_test_apply_real");
    let instant = Utc.with_ymd_and_hms(2098, 12, 31, 0, 0, 42).unwrap();

    apply_to_tree(&FileEntryTimes, &root, instant, false);

    for path in [
        root.clone(),
        root.join("a.bin"),
        root.join("nested"),
        root.join("nested/deeper/c.bin"),
    ] {
        let meta = fs::metadata(&path).expect("Failed to stat restamped entry");
        let mtime = FileTime::from_last_modification_time(&meta);
        assert_eq!(
            mtime.unix_seconds(),
            instant.timestamp(),
            "wrong mtime on {}",
            path.display()
        );
    }

    let _ = fs::remove_dir_all(&root);
}
