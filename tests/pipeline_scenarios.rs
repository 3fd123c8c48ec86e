// tests/pipeline_scenarios.rs

use std::path::PathBuf;

use tme::errors::LauncherError;
use tme::fs::mock::MockFileSystem;
use tme::launcher::Launcher;
use tme::types::MapKind;
use tme_test_utils::builders::{RunConfigBuilder, SettingsBuilder};
use tme_test_utils::fake_backend::{FakeBackend, Invocation};
use tme_test_utils::init_tracing;

const EXE: &str = "./TradeMatchingEngine";
const SCRIPT: &str = "./build.sh";
const INPUT: &str = "tme_input.txt";

fn strings(args: &[&str]) -> Vec<String> {
    args.iter().map(|s| s.to_string()).collect()
}

#[tokio::test]
async fn ready_artifact_and_input_skip_build_and_pass_exit_code_through() {
    init_tracing();

    let fs = MockFileSystem::new();
    fs.add_executable(EXE);
    fs.add_file(INPUT);

    let backend = FakeBackend::new().with_engine_exit(3);
    let mut launcher = Launcher::new(SettingsBuilder::new().build(), fs, backend);

    // -n 100 -m btree_map
    let config = RunConfigBuilder::new()
        .orders(100)
        .map(MapKind::BTreeMap)
        .build();

    let exit = launcher.run(&config).await.unwrap();

    assert_eq!(exit.code, 3);
    assert_eq!(launcher.backend().build_count(), 0);
    assert_eq!(
        launcher.backend().calls(),
        &[Invocation::Engine {
            executable: PathBuf::from(EXE),
            args: strings(&["100", "btree_map", "0", "0"]),
        }]
    );
}

#[tokio::test]
async fn all_flags_force_build_and_bypass_input_check() {
    init_tracing();

    // Artifact already ready and no input file on disk.
    let fs = MockFileSystem::new();
    fs.add_executable(EXE);

    let backend = FakeBackend::new();
    let mut launcher = Launcher::new(SettingsBuilder::new().build(), fs, backend);

    // -n 50 -m std_map -d -g -b
    let config = RunConfigBuilder::new()
        .orders(50)
        .map(MapKind::StdMap)
        .debug(true)
        .generate_input(true)
        .force_build(true)
        .build();

    let exit = launcher.run(&config).await.unwrap();

    assert!(exit.success());
    assert_eq!(
        launcher.backend().calls(),
        &[
            Invocation::Build(PathBuf::from(SCRIPT)),
            Invocation::Engine {
                executable: PathBuf::from(EXE),
                args: strings(&["50", "std_map", "1", "1"]),
            },
        ]
    );
}

#[tokio::test]
async fn missing_artifact_is_built_exactly_once() {
    init_tracing();

    let fs = MockFileSystem::new();
    fs.add_file(INPUT);

    let backend = FakeBackend::new().producing(&fs, EXE);
    let mut launcher = Launcher::new(SettingsBuilder::new().build(), fs, backend);

    let config = RunConfigBuilder::new().orders(10).build();
    launcher.run(&config).await.unwrap();

    assert_eq!(launcher.backend().build_count(), 1);
    assert_eq!(
        launcher.backend().engine_runs(),
        vec![strings(&["10", "std_map", "0", "0"])]
    );
}

#[tokio::test]
async fn non_executable_artifact_triggers_build() {
    init_tracing();

    let fs = MockFileSystem::new();
    fs.add_file(EXE);
    fs.add_file(INPUT);

    let backend = FakeBackend::new().producing(&fs, EXE);
    let mut launcher = Launcher::new(SettingsBuilder::new().build(), fs, backend);

    launcher
        .run(&RunConfigBuilder::new().build())
        .await
        .unwrap();

    assert_eq!(launcher.backend().build_count(), 1);
    assert_eq!(launcher.backend().engine_runs().len(), 1);
}

#[tokio::test]
async fn failed_build_stops_before_engine() {
    init_tracing();

    let fs = MockFileSystem::new();
    fs.add_file(INPUT);

    let backend = FakeBackend::new().with_build_exit(2).producing(&fs, EXE);
    let mut launcher = Launcher::new(SettingsBuilder::new().build(), fs, backend);

    let err = launcher
        .run(&RunConfigBuilder::new().build())
        .await
        .unwrap_err();

    match err {
        LauncherError::BuildFailed { script, code } => {
            assert_eq!(script, PathBuf::from(SCRIPT));
            assert_eq!(code, 2);
        }
        other => panic!("expected BuildFailed, got {other:?}"),
    }
    assert!(launcher.backend().engine_runs().is_empty());
}

#[tokio::test]
async fn forced_build_failure_stops_even_with_ready_artifact() {
    init_tracing();

    let fs = MockFileSystem::new();
    fs.add_executable(EXE);
    fs.add_file(INPUT);

    let backend = FakeBackend::new().with_build_exit(1);
    let mut launcher = Launcher::new(SettingsBuilder::new().build(), fs, backend);

    let config = RunConfigBuilder::new().force_build(true).build();
    let err = launcher.run(&config).await.unwrap_err();

    assert!(matches!(err, LauncherError::BuildFailed { code: 1, .. }));
    assert!(launcher.backend().engine_runs().is_empty());
}

#[tokio::test]
async fn successful_build_without_artifact_is_reported_missing() {
    init_tracing();

    let fs = MockFileSystem::new();
    fs.add_file(INPUT);

    // Build "succeeds" but produces nothing.
    let backend = FakeBackend::new();
    let mut launcher = Launcher::new(SettingsBuilder::new().build(), fs, backend);

    let err = launcher
        .run(&RunConfigBuilder::new().build())
        .await
        .unwrap_err();

    match err {
        LauncherError::ArtifactMissing(path) => assert_eq!(path, PathBuf::from(EXE)),
        other => panic!("expected ArtifactMissing, got {other:?}"),
    }
    assert_eq!(launcher.backend().build_count(), 1);
    assert!(launcher.backend().engine_runs().is_empty());
}

#[tokio::test]
async fn build_leaving_non_executable_artifact_is_reported_missing() {
    init_tracing();

    let fs = MockFileSystem::new();
    fs.add_file(EXE);
    fs.add_file(INPUT);

    let backend = FakeBackend::new();
    let mut launcher = Launcher::new(SettingsBuilder::new().build(), fs, backend);

    let err = launcher
        .run(&RunConfigBuilder::new().build())
        .await
        .unwrap_err();

    assert!(matches!(err, LauncherError::ArtifactMissing(_)));
    assert!(launcher.backend().engine_runs().is_empty());
}

#[tokio::test]
async fn missing_input_stops_before_engine() {
    init_tracing();

    let fs = MockFileSystem::new();
    fs.add_executable(EXE);

    let backend = FakeBackend::new();
    let mut launcher = Launcher::new(SettingsBuilder::new().build(), fs, backend);

    let err = launcher
        .run(&RunConfigBuilder::new().orders(5).build())
        .await
        .unwrap_err();

    match err {
        LauncherError::InputMissing(path) => assert_eq!(path, PathBuf::from(INPUT)),
        other => panic!("expected InputMissing, got {other:?}"),
    }
    assert!(launcher.backend().calls().is_empty());
}

#[tokio::test]
async fn missing_input_is_checked_after_a_build() {
    init_tracing();

    let fs = MockFileSystem::new();
    let backend = FakeBackend::new().producing(&fs, EXE);
    let mut launcher = Launcher::new(SettingsBuilder::new().build(), fs, backend);

    let err = launcher
        .run(&RunConfigBuilder::new().build())
        .await
        .unwrap_err();

    assert!(matches!(err, LauncherError::InputMissing(_)));
    assert_eq!(launcher.backend().build_count(), 1);
    assert!(launcher.backend().engine_runs().is_empty());
}

#[tokio::test]
async fn custom_settings_paths_are_used() {
    init_tracing();

    let settings = SettingsBuilder::rooted_at("/opt/tme").build();
    let fs = MockFileSystem::new();
    fs.add_file("/opt/tme/tme_input.txt");

    let backend = FakeBackend::new().producing(&fs, "/opt/tme/TradeMatchingEngine");
    let mut launcher = Launcher::new(settings, fs, backend);

    launcher
        .run(&RunConfigBuilder::new().orders(1).build())
        .await
        .unwrap();

    assert_eq!(
        launcher.backend().calls(),
        &[
            Invocation::Build(PathBuf::from("/opt/tme/build.sh")),
            Invocation::Engine {
                executable: PathBuf::from("/opt/tme/TradeMatchingEngine"),
                args: strings(&["1", "std_map", "0", "0"]),
            },
        ]
    );
}
