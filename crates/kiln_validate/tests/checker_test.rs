//! Checker outcome mapping, driven by small shell scripts.

use kiln_core::ValidationResult;
use kiln_interface::ArtifactChecker;
use kiln_validate::{CheckerConfig, TypeScriptChecker};
use std::path::Path;
use std::time::Duration;
use tempfile::TempDir;

fn setup() -> (TempDir, std::path::PathBuf) {
    let dir = tempfile::tempdir().expect("tempdir");
    std::fs::write(dir.path().join("tsconfig.json"), "{}").expect("write tsconfig");
    let artifact = dir.path().join("Widget.tsx");
    std::fs::write(&artifact, "export default function Widget() { return null; }")
        .expect("write artifact");
    (dir, artifact)
}

fn shell_checker(dir: &Path, script: &str, timeout: Duration) -> TypeScriptChecker {
    let config = CheckerConfig::builder()
        .program("sh")
        .args(vec!["-c".to_string(), script.to_string()])
        .working_dir(dir.to_path_buf())
        .config_file(dir.join("tsconfig.json"))
        .timeout(timeout)
        .build()
        .expect("valid config");
    TypeScriptChecker::new(config)
}

#[cfg(unix)]
#[tokio::test]
async fn test_zero_exit_is_clean() {
    let (dir, artifact) = setup();
    let checker = shell_checker(dir.path(), "exit 0", Duration::from_secs(10));
    assert_eq!(checker.check(&artifact).await, ValidationResult::Clean);
}

#[cfg(unix)]
#[tokio::test]
async fn test_nonzero_exit_returns_full_diagnostic() {
    let (dir, artifact) = setup();
    let long_line = "x".repeat(2000);
    let script = format!(
        "echo \"Widget.tsx(3,5): error TS2304: Cannot find name 'X'.\"; echo {long_line} >&2; exit 2"
    );
    let checker = shell_checker(dir.path(), &script, Duration::from_secs(10));

    let result = checker.check(&artifact).await;
    let diagnostic = result.diagnostic().expect("should fail");
    assert!(diagnostic.starts_with("Widget.tsx(3,5): error TS2304: Cannot find name 'X'."));
    assert!(diagnostic.ends_with(&long_line), "diagnostic must not be truncated");
}

#[cfg(unix)]
#[tokio::test]
async fn test_relative_artifact_path_resolves_from_working_dir() {
    let dir = tempfile::tempdir_in(".").expect("tempdir");
    let preview = dir.path().join("preview");
    std::fs::create_dir_all(&preview).expect("create preview");
    std::fs::write(preview.join("tsconfig.json"), "{}").expect("write tsconfig");
    let name = dir.path().file_name().expect("dir name");
    let relative = Path::new(name).join("Widget.tsx");
    std::fs::write(&relative, "export default function Widget() { return null; }")
        .expect("write artifact");

    let checker = shell_checker(&preview, "test -f \"$0\"", Duration::from_secs(10));
    assert_eq!(checker.check(&relative).await, ValidationResult::Clean);
}

#[cfg(unix)]
#[tokio::test]
async fn test_timeout_is_clean() {
    let (dir, artifact) = setup();
    let checker = shell_checker(dir.path(), "sleep 5; exit 1", Duration::from_millis(200));
    assert_eq!(checker.check(&artifact).await, ValidationResult::Clean);
}

#[tokio::test]
async fn test_missing_program_is_clean() {
    let (dir, artifact) = setup();
    let config = CheckerConfig::builder()
        .program("kiln-definitely-not-a-real-checker")
        .working_dir(dir.path().to_path_buf())
        .config_file(dir.path().join("tsconfig.json"))
        .build()
        .expect("valid config");
    let checker = TypeScriptChecker::new(config);
    assert_eq!(checker.check(&artifact).await, ValidationResult::Clean);
}

#[cfg(unix)]
#[tokio::test]
async fn test_missing_config_file_skips_run() {
    let (dir, artifact) = setup();
    std::fs::remove_file(dir.path().join("tsconfig.json")).expect("remove tsconfig");
    // Would fail if it ran.
    let checker = shell_checker(dir.path(), "exit 1", Duration::from_secs(10));
    assert_eq!(checker.check(&artifact).await, ValidationResult::Clean);
}

#[test]
fn test_typescript_defaults() {
    let config = CheckerConfig::typescript(Path::new("/project"));
    assert_eq!(config.program(), "npx");
    assert_eq!(config.args().first().map(String::as_str), Some("tsc"));
    assert!(config.args().iter().any(|a| a == "--noEmit"));
    assert!(config.args().iter().any(|a| a == "--skipLibCheck"));
    assert_eq!(*config.timeout(), Duration::from_secs(30));
}
