//! The staged install flow: resolve the installer endpoints, create and open
//! a session, stream every archive into it, commit with a one-shot callback
//! and block until the platform reports the outcome.

use std::sync::mpsc::{sync_channel, Receiver, SyncSender};

use log::debug;
use rsbinder::Strong;

use crate::android::intent::Intent;
use crate::android::intent_receiver::IIntentReceiver::BnIntentReceiver;
use crate::android::package_installer::IPackageInstaller::IPackageInstaller;
use crate::android::package_installer::SessionParams;
use crate::config::InstallerConfig;
use crate::consts::{
    EXTRA_STATUS, EXTRA_STATUS_MESSAGE, INSTALL_REPLACE_EXISTING, PACKAGE_SOURCE_STORE,
    STATUS_FAILURE, STATUS_SUCCESS,
};
use crate::installer::error::InstallError;
use crate::installer::receiver::{IntentConsumer, IntentReceiverAdaptor};
use crate::installer::session::{PackageInstaller, Session};
use crate::plat::caps::ApiCaps;
use crate::plat::services::ServiceResolver;

/// Forwards the commit result into the wait-gate. The channel is bounded at
/// one and fed with `try_send`: the first delivery is recorded, anything
/// after that is dropped without blocking the oneway caller.
struct CommitGate(SyncSender<Intent>);

impl IntentConsumer for CommitGate {
    fn on_intent(&self, intent: Intent) {
        let _ = self.0.try_send(intent);
    }
}

/// Runs one staged install end to end.
///
/// A session that was created is never left open past this call: any failure
/// between session creation and commit abandons it before returning. The
/// interpreted platform outcome does not abandon; after commit the session
/// belongs to the platform.
///
/// Not idempotent: every call creates its own session, and repeating an
/// install may succeed or fail depending on what the platform already has.
pub fn install(
    resolver: &dyn ServiceResolver,
    caps: &ApiCaps,
    cfg: &InstallerConfig,
    apk_paths: &[String],
) -> Result<(), InstallError> {
    let installer = resolver
        .package_installer()
        .map_err(|e| InstallError::ServiceResolution(format!("{:#}", e)))?;

    let params = build_session_params(caps, cfg);
    let session_id = create_session(&installer, &params, caps, cfg)?;
    debug!("created install session {}", session_id);

    let wrapper = PackageInstaller::new(installer, &cfg.requesting_package_name, cfg.user_id);
    let session = wrapper.open_session(session_id)?;

    let gate = match stage_and_commit(&session, apk_paths) {
        Ok(gate) => gate,
        Err(e) => {
            session.abandon();
            return Err(e);
        }
    };

    // Blocks until the platform delivers the result. There is no timeout;
    // commit is expected to always signal eventually. If every callback
    // reference dies first the channel disconnects instead of hanging.
    let intent = gate.recv().map_err(|_| InstallError::NoResult)?;
    interpret(&intent)
}

fn build_session_params(caps: &ApiCaps, cfg: &InstallerConfig) -> SessionParams {
    let mut params = SessionParams::default();
    params.installFlags |= INSTALL_REPLACE_EXISTING;
    // Compatibility conveniences, not correctness requirements: each one is
    // applied only where the release understands it.
    if caps.set_package_source {
        params.packageSource = PACKAGE_SOURCE_STORE;
    }
    if caps.set_installer_package_name {
        params.installerPackageName = Some(cfg.installer_package_name.clone());
    }
    params
}

fn create_session(
    installer: &Strong<dyn IPackageInstaller>,
    params: &SessionParams,
    caps: &ApiCaps,
    cfg: &InstallerConfig,
) -> Result<i32, InstallError> {
    let result = if caps.attributed_create_session {
        installer.r#createSession(params, &cfg.installer_package_name, None, cfg.user_id)
    } else {
        installer.r#createSessionLegacy(params, &cfg.installer_package_name, cfg.user_id)
    };
    result.map_err(|e| InstallError::SessionCreation(format!("{:?}", e)))
}

fn stage_and_commit(
    session: &Session,
    apk_paths: &[String],
) -> Result<Receiver<Intent>, InstallError> {
    for path in apk_paths {
        session.write_archive(path)?;
    }

    let (tx, rx) = sync_channel(1);
    let callback = BnIntentReceiver::new_binder(IntentReceiverAdaptor::new(CommitGate(tx)));
    session.commit(&callback)?;
    // No local strong reference may outlive the commit: if the platform
    // drops the callback without delivering, the gate has to disconnect
    // instead of blocking the dispatch thread forever.
    drop(callback);
    Ok(rx)
}

fn interpret(intent: &Intent) -> Result<(), InstallError> {
    let status = intent.get_int_extra(EXTRA_STATUS, STATUS_FAILURE);
    if status == STATUS_SUCCESS {
        debug!("platform reported install success");
        Ok(())
    } else {
        let message = intent
            .get_string_extra(EXTRA_STATUS_MESSAGE)
            .unwrap_or_default()
            .to_string();
        Err(InstallError::Platform { status, message })
    }
}
