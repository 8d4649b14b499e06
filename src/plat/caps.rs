use crate::consts::{API_S, API_TIRAMISU, API_UPSIDE_DOWN_CAKE};

/// Install-flow behaviors that depend on the platform release.
///
/// Resolved once per install call from `ro.build.version.sdk` instead of
/// sprinkling version checks through the flow.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ApiCaps {
    pub api_level: i32,
    /// `SessionParams.packageSource` exists since Tiramisu.
    pub set_package_source: bool,
    /// Installer-of-record on the params is honored since UpsideDownCake.
    pub set_installer_package_name: bool,
    /// `createSession` grew an attribution-tag argument in S.
    pub attributed_create_session: bool,
}

impl ApiCaps {
    pub fn detect() -> Self {
        Self::from_api_level(rsproperties::get_or(
            "ro.build.version.sdk",
            API_UPSIDE_DOWN_CAKE,
        ))
    }

    pub fn from_api_level(api_level: i32) -> Self {
        Self {
            api_level,
            set_package_source: api_level >= API_TIRAMISU,
            set_installer_package_name: api_level >= API_UPSIDE_DOWN_CAKE,
            attributed_create_session: api_level >= API_S,
        }
    }
}
