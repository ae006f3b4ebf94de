//! Edge case and error handling tests for canopy

mod harness;

use std::fs;
use std::os::unix::fs::{PermissionsExt, symlink};

use canopy::{ExportDocument, ScanConfig, export_data, scan};
use harness::{TestDir, run_canopy};

// ============================================================================
// Symlink Edge Cases
// ============================================================================

#[test]
fn test_broken_symlink_skipped() {
    let dir = TestDir::fixture();
    symlink(dir.path().join("missing.txt"), dir.path().join("dangling")).unwrap();

    let (stdout, _stderr, success) = run_canopy(dir.path(), &[]);
    assert!(success, "canopy should succeed with a broken symlink");
    assert!(!stdout.contains("dangling"), "{}", stdout);
    assert!(stdout.contains("1 folders, 2 files"));
}

#[test]
fn test_symlink_to_parent_no_infinite_loop() {
    let dir = TestDir::fixture();
    symlink("..", dir.path().join("sub").join("parent")).unwrap();

    let (stdout, _stderr, success) = run_canopy(dir.path(), &[]);
    assert!(success, "canopy should not hang on parent symlink");
    assert!(stdout.contains("parent"));
}

#[test]
fn test_self_referential_symlink() {
    let dir = TestDir::fixture();
    symlink("loop", dir.path().join("loop")).unwrap();

    let (_stdout, _stderr, success) = run_canopy(dir.path(), &[]);
    assert!(success, "canopy should skip a self-referential symlink");
}

#[test]
fn test_symlink_root_resolved() {
    let dir = TestDir::fixture();
    let link = dir.path().join("alias");
    symlink(dir.path().join("sub"), &link).unwrap();

    let result = scan(&link, &ScanConfig::default()).unwrap();
    assert_eq!(result.root().name(), "sub");
    assert_eq!(result.total_files(), 1);
}

// ============================================================================
// Permission Error Handling
// ============================================================================

#[test]
fn test_unreadable_directory() {
    let dir = TestDir::fixture();
    let unreadable = dir.add_dir("locked");
    fs::write(unreadable.join("inside.txt"), "secret").unwrap();

    let mut perms = fs::metadata(&unreadable).unwrap().permissions();
    perms.set_mode(0o000);
    fs::set_permissions(&unreadable, perms).unwrap();
    // Permission bits do not apply to root
    let enforced = fs::read_dir(&unreadable).is_err();

    let result = scan(dir.path(), &ScanConfig::default());
    let (stdout, _stderr, success) = run_canopy(dir.path(), &[]);

    // Restore permissions for cleanup
    let mut perms = fs::metadata(&unreadable).unwrap().permissions();
    perms.set_mode(0o755);
    fs::set_permissions(&unreadable, perms).unwrap();

    assert!(success, "canopy should handle unreadable directories gracefully");
    assert!(stdout.contains("b.py"));
    assert!(stdout.contains("locked"));

    let result = result.unwrap();
    if enforced {
        let locked = result
            .root()
            .children()
            .iter()
            .find(|n| n.name() == "locked")
            .unwrap();
        assert!(locked.children().is_empty());
        assert!(locked.is_incomplete());
        assert_eq!(result.total_files(), 2);
        assert!(!stdout.contains("inside.txt"));
    }
}

// ============================================================================
// Unusual Names
// ============================================================================

#[test]
fn test_filename_with_spaces() {
    let dir = TestDir::new();
    dir.add_file("my file.txt", "content");
    dir.add_file("folder with spaces/inner file.py", "x");

    let (stdout, _stderr, success) = run_canopy(dir.path(), &[]);
    assert!(success);
    assert!(stdout.contains("my file.txt"));
    assert!(stdout.contains("folder with spaces"));
    assert!(stdout.contains("inner file.py"));
}

#[test]
fn test_filename_with_unicode() {
    let dir = TestDir::new();
    dir.add_file("日本語.txt", "content");
    dir.add_file("émoji_🎉/ñ.md", "x");

    let (stdout, _stderr, success) = run_canopy(dir.path(), &[]);
    assert!(success);
    assert!(stdout.contains("日本語.txt"));
    assert!(stdout.contains("émoji_🎉"));
    assert!(stdout.contains("ñ.md"));
}

// Linux filesystems accept arbitrary bytes in names
#[cfg(target_os = "linux")]
#[test]
fn test_non_utf8_filename_exports() {
    use std::ffi::OsStr;
    use std::os::unix::ffi::OsStrExt;

    let dir = TestDir::new();
    dir.add_file("ok.txt", "1234");
    fs::write(dir.path().join(OsStr::from_bytes(b"bad\xffname.txt")), "abc").unwrap();

    let result = scan(dir.path(), &ScanConfig::default()).unwrap();
    assert_eq!(result.total_files(), 2);
    assert_eq!(result.total_size(), 7);

    let json = export_data(&result).to_json().unwrap();
    let restored = ExportDocument::from_json(&json).unwrap().into_scan_result();
    assert_eq!(restored.total_files(), 2);
    assert!(
        restored
            .root()
            .children()
            .iter()
            .any(|n| n.name() == "bad\u{FFFD}name.txt" && n.path().ends_with("bad\u{FFFD}name.txt"))
    );

    let out = dir.path().join("tree.json");
    let (_stdout, stderr, success) = run_canopy(dir.path(), &["--json", out.to_str().unwrap()]);
    assert!(success, "{}", stderr);
    assert!(fs::read_to_string(&out).unwrap().contains("bad\u{FFFD}name.txt"));
}

#[test]
fn test_empty_directory() {
    let dir = TestDir::new();
    let (stdout, _stderr, success) = run_canopy(dir.path(), &[]);
    assert!(success);
    assert!(stdout.contains("0 folders, 0 files, 0 B"), "{}", stdout);
}

#[test]
fn test_extensionless_files_with_filter() {
    let dir = TestDir::new();
    dir.add_file("Makefile", "all:");
    dir.add_file("notes.txt", "n");

    let (stdout, _stderr, success) = run_canopy(dir.path(), &["-e", "txt"]);
    assert!(success);
    assert!(stdout.contains("notes.txt"));
    assert!(!stdout.contains("Makefile"));
}
