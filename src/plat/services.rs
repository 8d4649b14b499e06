use std::sync::{Arc, Mutex};

use anyhow::Result;
use log::debug;
use rsbinder::{hub, DeathRecipient, Strong};

use crate::android::package_installer::IPackageInstaller::IPackageInstaller;
use crate::android::package_manager::IPackageManager::IPackageManager;
use crate::consts::PACKAGE_SERVICE;
use crate::err;

/// Resolves the platform endpoints the install flow needs.
///
/// Every service-manager lookup lives behind this boundary; the flow itself
/// only ever sees typed interfaces.
pub trait ServiceResolver: Send + Sync {
    fn package_manager(&self) -> Result<Strong<dyn IPackageManager>>;

    fn package_installer(&self) -> Result<Strong<dyn IPackageInstaller>> {
        let pm = self.package_manager()?;
        pm.r#getPackageInstaller()
            .map_err(|e| anyhow::anyhow!(err!("getPackageInstaller failed: {:?}", e)))
    }
}

thread_local! {
    static PM: Mutex<Option<Strong<dyn IPackageManager>>> = Mutex::new(None);
}

struct PmDeathRecipient;

impl DeathRecipient for PmDeathRecipient {
    fn binder_died(&self, _who: &rsbinder::WIBinder) {
        PM.with(|p| {
            *p.lock().unwrap() = None;
        });
        debug!("package service died, cleared cached handle");
    }
}

/// Production resolver backed by the binder service manager.
#[derive(Default)]
pub struct SystemServices;

impl ServiceResolver for SystemServices {
    fn package_manager(&self) -> Result<Strong<dyn IPackageManager>> {
        PM.with(|p| {
            let mut guard = p.lock().unwrap();
            if let Some(pm) = guard.as_ref() {
                Ok(pm.clone())
            } else {
                let pm: Strong<dyn IPackageManager> = hub::get_interface(PACKAGE_SERVICE)?;
                let recipient = Arc::new(PmDeathRecipient {});

                pm.as_binder()
                    .link_to_death(Arc::downgrade(&(recipient as Arc<dyn DeathRecipient>)))?;

                *guard = Some(pm.clone());
                Ok(pm)
            }
        })
    }
}
