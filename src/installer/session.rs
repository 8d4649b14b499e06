use std::fs::File;
use std::io::{Read, Write};
use std::os::fd::{AsRawFd, FromRawFd};
use std::path::Path;

use log::{debug, warn};
use rsbinder::Strong;

use crate::android::intent_receiver::IIntentReceiver::IIntentReceiver;
use crate::android::package_installer::IPackageInstaller::IPackageInstaller;
use crate::android::package_installer::IPackageInstallerSession::IPackageInstallerSession;
use crate::consts::STREAM_BUFFER_SIZE;
use crate::installer::error::InstallError;

/// Typed front over the raw installer interface, standing in for the public
/// `PackageInstaller` wrapper the platform hands to regular apps. Session
/// operations go through this so nothing downstream touches a raw handle.
pub struct PackageInstaller {
    service: Strong<dyn IPackageInstaller>,
    requesting_package_name: String,
    user_id: i32,
}

impl PackageInstaller {
    pub fn new(
        service: Strong<dyn IPackageInstaller>,
        requesting_package_name: &str,
        user_id: i32,
    ) -> Self {
        Self {
            service,
            requesting_package_name: requesting_package_name.to_string(),
            user_id,
        }
    }

    pub fn open_session(&self, session_id: i32) -> Result<Session, InstallError> {
        debug!(
            "opening install session {} as {} (user {})",
            session_id, self.requesting_package_name, self.user_id
        );
        let session =
            self.service
                .r#openSession(session_id)
                .map_err(|e| InstallError::SessionOpen {
                    id: session_id,
                    reason: format!("{:?}", e),
                })?;
        Ok(Session { session })
    }
}

/// One in-progress install transaction. Written once per archive, committed
/// once; [`Session::abandon`] is the cleanup path for every failure after
/// the session exists.
pub struct Session {
    session: Strong<dyn IPackageInstallerSession>,
}

impl Session {
    /// Streams one archive into the session under its file name, sized to
    /// the exact byte length, and forces the staged data to stable storage
    /// before returning.
    pub fn write_archive(&self, path: &str) -> Result<(), InstallError> {
        let streaming = |reason: String| InstallError::Streaming {
            path: path.to_string(),
            reason,
        };

        let name = Path::new(path)
            .file_name()
            .and_then(|n| n.to_str())
            .ok_or_else(|| streaming("path has no file name".to_string()))?;

        let mut src = File::open(path).map_err(|e| streaming(e.to_string()))?;
        let length = src.metadata().map_err(|e| streaming(e.to_string()))?.len() as i64;

        let pfd = self
            .session
            .r#openWrite(name, 0, length)
            .map_err(|e| streaming(format!("openWrite failed: {:?}", e)))?;

        // The parcel wrapper keeps ownership of its descriptor; hand the
        // File a duplicate it can close on its own.
        let fd = unsafe { libc::dup(pfd.as_raw_fd()) };
        if fd < 0 {
            return Err(streaming(std::io::Error::last_os_error().to_string()));
        }
        // SAFETY: fd is a freshly duplicated descriptor owned by nothing else.
        let mut out = unsafe { File::from_raw_fd(fd) };

        let mut buffer = [0u8; STREAM_BUFFER_SIZE];
        loop {
            let count = src.read(&mut buffer).map_err(|e| streaming(e.to_string()))?;
            if count == 0 {
                break;
            }
            out.write_all(&buffer[..count])
                .map_err(|e| streaming(e.to_string()))?;
        }
        out.flush().map_err(|e| streaming(e.to_string()))?;
        drop(out);

        self.session
            .r#fsync(name)
            .map_err(|e| streaming(format!("fsync failed: {:?}", e)))?;

        debug!("staged {} ({} bytes)", name, length);
        Ok(())
    }

    pub fn commit(&self, callback: &Strong<dyn IIntentReceiver>) -> Result<(), InstallError> {
        self.session
            .r#commit(callback)
            .map_err(|e| InstallError::Commit(format!("{:?}", e)))
    }

    /// Best-effort: the call must still return the original outcome even if
    /// the platform refuses the abandon.
    pub fn abandon(&self) {
        if let Err(e) = self.session.r#abandon() {
            warn!("failed to abandon install session: {:?}", e);
        }
    }
}
