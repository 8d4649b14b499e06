mod common;

use std::sync::atomic::Ordering;

use common::*;

use rsinstaller::android::installer_service::IInstallerService::IInstallerService;
use rsinstaller::installer::error::InstallError;
use rsinstaller::installer::flow;
use rsinstaller::installer::service::InstallerService;

#[test]
fn resolution_failure_names_system_services_and_touches_no_session() {
    init_test();
    let dir = test_dir("resolution_failure");
    // A full fake platform is wired up, but the resolver under test cannot
    // reach it, the way a missing service manager entry behaves.
    let platform = fake_platform(&dir.join("staged"), CommitBehavior::Deliver(success_intent()));
    let paths = vec![write_apk(&dir.join("src"), "app.apk", b"payload")];

    let err = flow::install(&broken_resolver(), &caps(), &cfg(), &paths).unwrap_err();
    match &err {
        InstallError::ServiceResolution(_) => {}
        other => panic!("expected a service resolution failure, got {:?}", other),
    }
    assert!(err.to_string().contains("system services"));

    assert_eq!(platform.log.sessions_created.load(Ordering::SeqCst), 0);
    assert_eq!(platform.log.abandons.load(Ordering::SeqCst), 0);
}

#[test]
fn missing_archive_abandons_the_session_exactly_once() {
    init_test();
    let dir = test_dir("missing_archive");
    let platform = fake_platform(&dir.join("staged"), CommitBehavior::Deliver(success_intent()));
    let paths = vec![format!(
        "{}/nonexistent.apk",
        dir.join("src").to_string_lossy()
    )];

    let err = flow::install(&platform.resolver, &caps(), &cfg(), &paths).unwrap_err();
    match &err {
        InstallError::Streaming { path, .. } => assert!(path.ends_with("nonexistent.apk")),
        other => panic!("expected a streaming failure, got {:?}", other),
    }
    assert!(err.to_string().contains("nonexistent.apk"));

    assert_eq!(platform.log.sessions_created.load(Ordering::SeqCst), 1);
    assert_eq!(platform.log.abandons.load(Ordering::SeqCst), 1);
    assert_eq!(platform.log.commits.load(Ordering::SeqCst), 0);
}

#[test]
fn session_creation_failure_is_terminal_with_nothing_to_abandon() {
    init_test();
    let dir = test_dir("create_failure");
    let platform = fake_platform_failing_create(&dir.join("staged"), "too many active sessions");
    let paths = vec![write_apk(&dir.join("src"), "app.apk", b"payload")];

    let err = flow::install(&platform.resolver, &caps(), &cfg(), &paths).unwrap_err();
    match &err {
        InstallError::SessionCreation(reason) => {
            assert!(reason.contains("too many active sessions"))
        }
        other => panic!("expected a session creation failure, got {:?}", other),
    }
    assert_eq!(platform.log.sessions_created.load(Ordering::SeqCst), 0);
    assert_eq!(platform.log.abandons.load(Ordering::SeqCst), 0);
}

#[test]
fn commit_refusal_abandons_the_session() {
    init_test();
    let dir = test_dir("commit_failure");
    let platform = fake_platform(
        &dir.join("staged"),
        CommitBehavior::Fail("device policy forbids installs".to_string()),
    );
    let paths = vec![write_apk(&dir.join("src"), "app.apk", b"payload")];

    let err = flow::install(&platform.resolver, &caps(), &cfg(), &paths).unwrap_err();
    match &err {
        InstallError::Commit(reason) => assert!(reason.contains("device policy forbids")),
        other => panic!("expected a commit failure, got {:?}", other),
    }
    assert_eq!(platform.log.abandons.load(Ordering::SeqCst), 1);
}

#[test]
fn dropped_callback_yields_the_no_result_outcome() {
    init_test();
    let dir = test_dir("dropped_callback");
    let platform = fake_platform(&dir.join("staged"), CommitBehavior::DropCallback);
    let paths = vec![write_apk(&dir.join("src"), "app.apk", b"payload")];

    let err = flow::install(&platform.resolver, &caps(), &cfg(), &paths).unwrap_err();
    assert_eq!(err, InstallError::NoResult);
    assert_eq!(
        err.to_string(),
        "Installation failed: no result from PackageInstaller."
    );
    assert_eq!(platform.log.commits.load(Ordering::SeqCst), 1);
    assert_eq!(platform.log.abandons.load(Ordering::SeqCst), 0);
}

#[test]
fn empty_path_list_is_rejected_before_any_platform_work() {
    init_test();
    // A resolver that would fail if it were ever consulted.
    let service = InstallerService::with_parts(Box::new(broken_resolver()), caps());

    let result = service.r#install(&[]).unwrap();
    let message = result.expect("an empty path list must produce a diagnostic");
    assert!(!message.is_empty());
    assert!(!message.contains("system services"));
}
