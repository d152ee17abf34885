// The generate-word binary, run in a scratch working directory

use std::path::Path;
use std::process::{Command, Output};

fn run_in(dir: &Path) -> Output {
    Command::new(env!("CARGO_BIN_EXE_generate-word"))
        .current_dir(dir)
        .env_remove("RUST_LOG")
        .output()
        .expect("binary should start")
}

#[test]
fn test_prints_success_line_and_exits_zero() {
    let dir = tempfile::tempdir().unwrap();
    let output = run_in(dir.path());

    assert!(output.status.success());
    assert_eq!(
        String::from_utf8_lossy(&output.stdout),
        "Successfully generated Test_Document.docx\n"
    );
    assert!(dir.path().join("Test_Document.docx").is_file());
    assert!(dir.path().join("test_icon.png").is_file());
}

#[cfg(unix)]
#[test]
fn test_read_only_directory_fails_without_document() {
    use std::os::unix::fs::PermissionsExt;

    let dir = tempfile::tempdir().unwrap();
    std::fs::set_permissions(dir.path(), std::fs::Permissions::from_mode(0o555)).unwrap();

    // Privileged users write through 0o555; nothing to observe then
    let writable = std::fs::write(dir.path().join(".write_check"), b"").is_ok();
    if writable {
        let _ = std::fs::remove_file(dir.path().join(".write_check"));
        std::fs::set_permissions(dir.path(), std::fs::Permissions::from_mode(0o755)).unwrap();
        eprintln!("skipping: directory stays writable for this user");
        return;
    }

    let output = run_in(dir.path());
    std::fs::set_permissions(dir.path(), std::fs::Permissions::from_mode(0o755)).unwrap();

    assert!(!output.status.success());
    assert!(output.stdout.is_empty());
    assert!(String::from_utf8_lossy(&output.stderr).contains("error:"));
    assert!(!dir.path().join("Test_Document.docx").exists());
}

#[test]
fn test_blocked_document_path_exits_nonzero() {
    let dir = tempfile::tempdir().unwrap();
    // A directory in the document's place cannot be replaced by a file
    std::fs::create_dir(dir.path().join("Test_Document.docx")).unwrap();

    let output = run_in(dir.path());

    assert!(!output.status.success());
    assert!(output.stdout.is_empty());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("error: document serialization failed"));
    assert!(dir.path().join("Test_Document.docx").is_dir());

    // Only the icon and the blocking directory remain; no staging file
    let entries = std::fs::read_dir(dir.path()).unwrap().count();
    assert_eq!(entries, 2);
}

#[test]
fn test_blocked_icon_path_writes_nothing_else() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::create_dir(dir.path().join("test_icon.png")).unwrap();

    let output = run_in(dir.path());

    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("error: icon generation failed"));
    assert!(!dir.path().join("Test_Document.docx").exists());
}
