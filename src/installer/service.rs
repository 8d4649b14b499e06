//! Implementation of the installer endpoint this daemon publishes.

use log::{debug, warn};
use rsbinder::Strong;

use crate::android::installer_service::IInstallerService::{
    BnInstallerService, IInstallerService,
};
use crate::config::CONFIG;
use crate::installer::flow;
use crate::plat::caps::ApiCaps;
use crate::plat::services::{ServiceResolver, SystemServices};

/// Binder service that performs staged installs on behalf of callers that
/// cannot reach the package installer themselves. The paths are read with
/// this process's identity, which is the entire point of the indirection.
pub struct InstallerService {
    resolver: Box<dyn ServiceResolver>,
    caps: ApiCaps,
}

impl InstallerService {
    pub fn new() -> Self {
        Self::with_parts(Box::new(SystemServices), ApiCaps::detect())
    }

    pub fn with_parts(resolver: Box<dyn ServiceResolver>, caps: ApiCaps) -> Self {
        Self { resolver, caps }
    }

    /// Create the binder-ready service object.
    pub fn new_native_binder() -> Strong<dyn IInstallerService> {
        BnInstallerService::new_binder(Self::new())
    }
}

impl Default for InstallerService {
    fn default() -> Self {
        Self::new()
    }
}

impl rsbinder::Interface for InstallerService {}

impl IInstallerService for InstallerService {
    fn r#install(&self, apk_paths: &[String]) -> rsbinder::status::Result<Option<String>> {
        if apk_paths.is_empty() {
            return Ok(Some("No package archives were supplied.".to_string()));
        }
        debug!("install requested for {} archive(s)", apk_paths.len());

        let cfg = CONFIG.read().unwrap().installer.clone();
        // Every failure comes back as a diagnostic string; the status channel
        // stays reserved for transport faults.
        match flow::install(self.resolver.as_ref(), &self.caps, &cfg, apk_paths) {
            Ok(()) => Ok(None),
            Err(e) => {
                warn!("install failed: {}", e);
                Ok(Some(e.to_string()))
            }
        }
    }
}
