// tests/error_handling.rs

use std::path::PathBuf;

use tme::errors::LauncherError;

#[test]
fn terminal_errors_name_the_failing_precondition() {
    let build = LauncherError::BuildFailed {
        script: PathBuf::from("./build.sh"),
        code: 2,
    };
    assert_eq!(
        build.to_string(),
        "Build failed: ./build.sh exited with code 2"
    );

    let artifact = LauncherError::ArtifactMissing(PathBuf::from("./TradeMatchingEngine"));
    assert!(artifact.to_string().contains("./TradeMatchingEngine"));

    let input = LauncherError::InputMissing(PathBuf::from("tme_input.txt"));
    assert!(input.to_string().contains("'tme_input.txt' not found"));
}

#[test]
fn alternate_format_keeps_the_underlying_cause() {
    let io = std::io::Error::new(std::io::ErrorKind::NotFound, "No such file or directory");
    let err = LauncherError::from(anyhow::Error::new(io).context("spawning process ./build.sh"));

    assert_eq!(err.to_string(), "spawning process ./build.sh");
    assert_eq!(
        format!("{err:#}"),
        "spawning process ./build.sh: No such file or directory"
    );
}

#[tokio::test]
async fn spawn_failure_reports_os_error() {
    let missing = std::path::Path::new("./tme-no-such-program");
    let err = LauncherError::from(tme::exec::run_inherited(missing, &[]).await.unwrap_err());

    let rendered = format!("{err:#}");
    assert!(rendered.starts_with("spawning process ./tme-no-such-program: "));
}

#[cfg(unix)]
#[test]
fn exit_codes_map_like_a_shell() {
    use std::os::unix::process::ExitStatusExt;
    use std::process::ExitStatus;

    use tme::exec::exit_code;

    // Raw wait statuses: exit code in the high byte, signal in the low bits.
    assert_eq!(exit_code(ExitStatus::from_raw(0)), 0);
    assert_eq!(exit_code(ExitStatus::from_raw(7 << 8)), 7);
    // Killed by SIGKILL (9).
    assert_eq!(exit_code(ExitStatus::from_raw(9)), 137);
}
