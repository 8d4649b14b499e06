/// Name this service registers itself under with the service manager.
pub const SERVICE_NAME: &str = "rsinstaller";

/// Service manager key for the platform package manager service.
pub const PACKAGE_SERVICE: &str = "package";

/// PackageInstaller.SessionParams.MODE_FULL_INSTALL: the session stages a
/// brand new package (or a full replacement), never a partial update.
pub const MODE_FULL_INSTALL: i32 = 1;

/// PackageManager.INSTALL_REPLACE_EXISTING. Hidden install flag, value is
/// stable since the first platform release that had sessions.
pub const INSTALL_REPLACE_EXISTING: i32 = 0x0000_0002;

/// PackageInstaller.PACKAGE_SOURCE_UNSPECIFIED.
pub const PACKAGE_SOURCE_UNSPECIFIED: i32 = 0;

/// PackageInstaller.PACKAGE_SOURCE_STORE. Declares the archives came from an
/// app store so the platform skips the sideload attribution path.
pub const PACKAGE_SOURCE_STORE: i32 = 2;

/// Intent extra carrying the numeric install status.
pub const EXTRA_STATUS: &str = "android.content.pm.extra.STATUS";

/// Intent extra carrying the human-readable failure message, if any.
pub const EXTRA_STATUS_MESSAGE: &str = "android.content.pm.extra.STATUS_MESSAGE";

/// PackageInstaller.STATUS_SUCCESS.
pub const STATUS_SUCCESS: i32 = 0;

/// PackageInstaller.STATUS_FAILURE.
pub const STATUS_FAILURE: i32 = 1;

/// Copy buffer used while staging an archive into a session write stream.
pub const STREAM_BUFFER_SIZE: usize = 8192;

/// Android 12 (S): createSession grew an attribution-tag argument.
pub const API_S: i32 = 31;

/// Android 13 (Tiramisu): SessionParams.packageSource exists.
pub const API_TIRAMISU: i32 = 33;

/// Android 14 (UpsideDownCake): installer-of-record on the params is honored
/// for callers holding INSTALL_PACKAGES.
pub const API_UPSIDE_DOWN_CAKE: i32 = 34;
