#![allow(dead_code)] // each test binary uses a subset of the helpers

use std::fs::File;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use rsbinder::{ParcelFileDescriptor, Strong};

use rsinstaller::android::intent::Intent;
use rsinstaller::android::intent_receiver::IIntentReceiver::IIntentReceiver;
use rsinstaller::android::package_installer::IPackageInstaller::{
    BnPackageInstaller, IPackageInstaller,
};
use rsinstaller::android::package_installer::IPackageInstallerSession::{
    BnPackageInstallerSession, IPackageInstallerSession,
};
use rsinstaller::android::package_installer::SessionParams;
use rsinstaller::android::package_manager::IPackageManager::{BnPackageManager, IPackageManager};
use rsinstaller::config::InstallerConfig;
use rsinstaller::consts::{EXTRA_STATUS, EXTRA_STATUS_MESSAGE, STATUS_FAILURE, STATUS_SUCCESS};
use rsinstaller::plat::caps::ApiCaps;
use rsinstaller::plat::services::ServiceResolver;

pub const SESSION_ID: i32 = 42;

pub fn init_test() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// Scratch directory per scenario, recreated on every run.
pub fn test_dir(tag: &str) -> PathBuf {
    let dir = PathBuf::from("__install_tests__").join(tag);
    std::fs::remove_dir_all(&dir).unwrap_or_default();
    std::fs::create_dir_all(&dir).expect("Failed to create test directory");
    dir
}

pub fn write_apk(dir: &Path, name: &str, bytes: &[u8]) -> String {
    std::fs::create_dir_all(dir).expect("Failed to create archive directory");
    let path = dir.join(name);
    let mut file = File::create(&path).expect("Failed to create archive");
    file.write_all(bytes).expect("Failed to write archive");
    path.to_string_lossy().into_owned()
}

pub fn caps() -> ApiCaps {
    ApiCaps::from_api_level(34)
}

pub fn cfg() -> InstallerConfig {
    InstallerConfig::default()
}

pub fn success_intent() -> Intent {
    let mut intent = Intent::new();
    intent.put_int_extra(EXTRA_STATUS, STATUS_SUCCESS);
    intent
}

pub fn failure_intent(message: &str) -> Intent {
    let mut intent = Intent::new();
    intent.put_int_extra(EXTRA_STATUS, STATUS_FAILURE);
    intent.put_string_extra(EXTRA_STATUS_MESSAGE, message);
    intent
}

/// How the fake session reacts to a commit.
pub enum CommitBehavior {
    /// Deliver the intent once from a platform-owned thread.
    Deliver(Intent),
    /// Deliver twice in order; the gate must keep the first.
    DeliverTwice(Intent, Intent),
    /// Keep no callback reference and never deliver.
    DropCallback,
    /// Refuse the commit outright.
    Fail(String),
}

/// Shape of the create-session call the flow issued.
#[derive(Debug, Clone, PartialEq)]
pub enum CreateShape {
    Attributed {
        params: SessionParams,
        installer_package_name: String,
        attribution_tag: Option<String>,
        user_id: i32,
    },
    Legacy {
        params: SessionParams,
        installer_package_name: String,
        user_id: i32,
    },
}

/// Observable record of everything the fake platform was asked to do.
#[derive(Default)]
pub struct PlatformLog {
    pub sessions_created: AtomicUsize,
    pub commits: AtomicUsize,
    pub abandons: AtomicUsize,
    /// (entry name, declared byte length) per openWrite call, in order.
    pub staged: Mutex<Vec<(String, i64)>>,
    pub create_shape: Mutex<Option<CreateShape>>,
}

struct FakeSession {
    log: Arc<PlatformLog>,
    dir: PathBuf,
    commit: Mutex<Option<CommitBehavior>>,
}

impl rsbinder::Interface for FakeSession {}

#[allow(non_snake_case)]
impl IPackageInstallerSession for FakeSession {
    fn r#openWrite(
        &self,
        name: &str,
        _offset_bytes: i64,
        length_bytes: i64,
    ) -> rsbinder::status::Result<ParcelFileDescriptor> {
        self.log
            .staged
            .lock()
            .unwrap()
            .push((name.to_string(), length_bytes));
        let file = File::create(self.dir.join(name)).map_err(|e| {
            rsbinder::Status::new_service_specific_error(-1, Some(e.to_string()))
        })?;
        Ok(ParcelFileDescriptor::new(file))
    }

    fn r#fsync(&self, _name: &str) -> rsbinder::status::Result<()> {
        Ok(())
    }

    fn r#commit(
        &self,
        callback: &Strong<dyn IIntentReceiver>,
    ) -> rsbinder::status::Result<()> {
        self.log.commits.fetch_add(1, Ordering::SeqCst);
        match self.commit.lock().unwrap().take() {
            Some(CommitBehavior::Deliver(intent)) => {
                deliver_later(callback.clone(), vec![intent]);
                Ok(())
            }
            Some(CommitBehavior::DeliverTwice(first, second)) => {
                deliver_later(callback.clone(), vec![first, second]);
                Ok(())
            }
            Some(CommitBehavior::DropCallback) | None => Ok(()),
            Some(CommitBehavior::Fail(message)) => Err(
                rsbinder::Status::new_service_specific_error(-1, Some(message)),
            ),
        }
    }

    fn r#abandon(&self) -> rsbinder::status::Result<()> {
        self.log.abandons.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }
}

fn deliver_later(callback: Strong<dyn IIntentReceiver>, intents: Vec<Intent>) {
    std::thread::spawn(move || {
        for intent in intents {
            let _ = callback.r#performReceive(&intent, 0, None, None, false, false, 0);
        }
    });
}

struct FakeInstaller {
    log: Arc<PlatformLog>,
    session: Strong<dyn IPackageInstallerSession>,
    fail_create: Option<String>,
}

impl rsbinder::Interface for FakeInstaller {}

#[allow(non_snake_case)]
impl IPackageInstaller for FakeInstaller {
    fn r#createSession(
        &self,
        params: &SessionParams,
        installer_package_name: &str,
        attribution_tag: Option<&str>,
        user_id: i32,
    ) -> rsbinder::status::Result<i32> {
        if let Some(message) = &self.fail_create {
            return Err(rsbinder::Status::new_service_specific_error(
                -1,
                Some(message.clone()),
            ));
        }
        *self.log.create_shape.lock().unwrap() = Some(CreateShape::Attributed {
            params: params.clone(),
            installer_package_name: installer_package_name.to_string(),
            attribution_tag: attribution_tag.map(str::to_string),
            user_id,
        });
        self.log.sessions_created.fetch_add(1, Ordering::SeqCst);
        Ok(SESSION_ID)
    }

    fn r#createSessionLegacy(
        &self,
        params: &SessionParams,
        installer_package_name: &str,
        user_id: i32,
    ) -> rsbinder::status::Result<i32> {
        if let Some(message) = &self.fail_create {
            return Err(rsbinder::Status::new_service_specific_error(
                -1,
                Some(message.clone()),
            ));
        }
        *self.log.create_shape.lock().unwrap() = Some(CreateShape::Legacy {
            params: params.clone(),
            installer_package_name: installer_package_name.to_string(),
            user_id,
        });
        self.log.sessions_created.fetch_add(1, Ordering::SeqCst);
        Ok(SESSION_ID)
    }

    fn r#openSession(
        &self,
        session_id: i32,
    ) -> rsbinder::status::Result<Strong<dyn IPackageInstallerSession>> {
        if session_id == SESSION_ID {
            Ok(self.session.clone())
        } else {
            Err(rsbinder::Status::new_service_specific_error(
                -1,
                Some(format!("no such session {}", session_id)),
            ))
        }
    }
}

struct FakePackageManager {
    installer: Strong<dyn IPackageInstaller>,
}

impl rsbinder::Interface for FakePackageManager {}

#[allow(non_snake_case)]
impl IPackageManager for FakePackageManager {
    fn r#getPackageInstaller(
        &self,
    ) -> rsbinder::status::Result<Strong<dyn IPackageInstaller>> {
        Ok(self.installer.clone())
    }
}

/// Resolver handing out the fake package manager, or failing when it has
/// none, the way a missing service manager entry would.
pub struct FakeResolver {
    pm: Option<Strong<dyn IPackageManager>>,
}

impl ServiceResolver for FakeResolver {
    fn package_manager(&self) -> anyhow::Result<Strong<dyn IPackageManager>> {
        self.pm
            .clone()
            .ok_or_else(|| anyhow::anyhow!("service manager has no package service"))
    }
}

pub fn broken_resolver() -> FakeResolver {
    FakeResolver { pm: None }
}

pub struct FakePlatform {
    pub log: Arc<PlatformLog>,
    pub resolver: FakeResolver,
    /// Directory the fake session stages archives into.
    pub staged_dir: PathBuf,
}

pub fn fake_platform(staged_dir: &Path, commit: CommitBehavior) -> FakePlatform {
    fake_platform_inner(staged_dir, commit, None)
}

pub fn fake_platform_failing_create(staged_dir: &Path, message: &str) -> FakePlatform {
    fake_platform_inner(
        staged_dir,
        CommitBehavior::DropCallback,
        Some(message.to_string()),
    )
}

fn fake_platform_inner(
    staged_dir: &Path,
    commit: CommitBehavior,
    fail_create: Option<String>,
) -> FakePlatform {
    std::fs::create_dir_all(staged_dir).expect("Failed to create staging directory");
    let log = Arc::new(PlatformLog::default());
    let session = BnPackageInstallerSession::new_binder(FakeSession {
        log: log.clone(),
        dir: staged_dir.to_path_buf(),
        commit: Mutex::new(Some(commit)),
    });
    let installer = BnPackageInstaller::new_binder(FakeInstaller {
        log: log.clone(),
        session,
        fail_create,
    });
    let pm = BnPackageManager::new_binder(FakePackageManager { installer });
    FakePlatform {
        log,
        resolver: FakeResolver { pm: Some(pm) },
        staged_dir: staged_dir.to_path_buf(),
    }
}
