use std::error::Error;
use std::sync::Arc;
use std::time::{Duration, SystemTime};

use watchr::engine::Supervisor;
use watchr::errors::WatchrError;
use watchr::fs::mock::MockFileSystem;
use watchr::types::FailurePolicy;
use watchr_test_utils::builders::RunConfigBuilder;
use watchr_test_utils::fake_runner::{FakeOutcome, FakeRunner};
use watchr_test_utils::{init_tracing, with_timeout};

type TestResult = Result<(), Box<dyn Error>>;

fn at(secs: u64) -> SystemTime {
    SystemTime::UNIX_EPOCH + Duration::from_secs(secs)
}

fn supervisor(
    builder: RunConfigBuilder,
    fs: &MockFileSystem,
    runner: &FakeRunner,
) -> Supervisor {
    init_tracing();
    Supervisor::new(
        builder.poll_interval(Duration::from_millis(10)).build(),
        Arc::new(fs.clone()),
        Arc::new(runner.clone()),
    )
}

#[tokio::test(start_paused = true)]
async fn healthy_tasks_keep_running() -> TestResult {
    let fs = MockFileSystem::new();
    let runner = FakeRunner::new();
    fs.set_modified("a.txt", at(1));
    fs.set_modified("b.txt", at(1));

    let sup = supervisor(
        RunConfigBuilder::new()
            .with_command("a.txt", "make a")
            .with_file("b.txt"),
        &fs,
        &runner,
    );

    let result = tokio::time::timeout(Duration::from_secs(60), sup.run()).await;
    assert!(result.is_err(), "supervisor returned: {result:?}");
    Ok(())
}

#[tokio::test(start_paused = true)]
async fn tasks_poll_independently() -> TestResult {
    let fs = MockFileSystem::new();
    let runner = FakeRunner::new();
    fs.set_modified("a.txt", at(1));
    fs.set_modified("b.txt", at(1));

    let sup = supervisor(
        RunConfigBuilder::new()
            .quiet(true)
            .with_command("a.txt", "touch-a")
            .with_command("b.txt", "touch-b"),
        &fs,
        &runner,
    );
    let handle = tokio::spawn(sup.run());
    tokio::time::sleep(Duration::from_millis(30)).await;

    fs.set_modified("b.txt", at(2));
    tokio::time::sleep(Duration::from_millis(50)).await;

    assert_eq!(runner.calls(), vec![vec!["touch-b".to_string()]]);
    assert!(!handle.is_finished());
    handle.abort();
    Ok(())
}

#[tokio::test(start_paused = true)]
async fn exit_policy_returns_first_failure() -> TestResult {
    let fs = MockFileSystem::new();
    let runner = FakeRunner::new();
    runner.push_outcome(FakeOutcome::ExitCode(3));
    fs.set_modified("a.txt", at(1));
    fs.set_modified("b.txt", at(1));

    let sup = supervisor(
        RunConfigBuilder::new()
            .with_command("a.txt", "false")
            .with_file("b.txt"),
        &fs,
        &runner,
    );
    let handle = tokio::spawn(sup.run());
    tokio::time::sleep(Duration::from_millis(30)).await;

    fs.set_modified("a.txt", at(2));
    let result = with_timeout(handle).await?;
    assert!(matches!(result, Err(WatchrError::CommandFailed { code: Some(3), .. })));
    Ok(())
}

#[tokio::test(start_paused = true)]
async fn exit_policy_fails_on_missing_file_at_startup() -> TestResult {
    let fs = MockFileSystem::new();
    let runner = FakeRunner::new();
    fs.set_modified("a.txt", at(1));

    let sup = supervisor(
        RunConfigBuilder::new().with_file("a.txt").with_file("missing.txt"),
        &fs,
        &runner,
    );

    let result = with_timeout(sup.run()).await;
    match result {
        Err(WatchrError::Stat { path, .. }) => assert!(path.ends_with("missing.txt")),
        other => panic!("expected stat error, got {other:?}"),
    }
    Ok(())
}

#[tokio::test(start_paused = true)]
async fn isolate_policy_keeps_survivors_running() -> TestResult {
    let fs = MockFileSystem::new();
    let runner = FakeRunner::new();
    fs.set_modified("a.txt", at(1));

    let sup = supervisor(
        RunConfigBuilder::new()
            .on_failure(FailurePolicy::Isolate)
            .with_file("a.txt")
            .with_file("missing.txt"),
        &fs,
        &runner,
    );

    let result = tokio::time::timeout(Duration::from_secs(60), sup.run()).await;
    assert!(result.is_err(), "supervisor returned: {result:?}");
    Ok(())
}

#[tokio::test(start_paused = true)]
async fn isolate_policy_fails_once_every_task_failed() -> TestResult {
    let fs = MockFileSystem::new();
    let runner = FakeRunner::new();
    fs.set_modified("a.txt", at(1));

    let sup = supervisor(
        RunConfigBuilder::new()
            .on_failure(FailurePolicy::Isolate)
            .with_file("a.txt")
            .with_file("missing.txt"),
        &fs,
        &runner,
    );
    let handle = tokio::spawn(sup.run());
    tokio::time::sleep(Duration::from_millis(30)).await;
    assert!(!handle.is_finished());

    fs.remove("a.txt");
    let result = with_timeout(handle).await?;
    assert!(matches!(result, Err(WatchrError::AllTasksFailed(2))));
    Ok(())
}
