use std::sync::RwLock;

use hotwatch::Hotwatch;
use serde::{Deserialize, Serialize};

lazy_static::lazy_static! {
    pub static ref CONFIG: RwLock<Config> = init_config();
}

#[cfg(target_os = "android")]
const CONFIG_PATH: &str = "/data/adb/rsinstaller/config.toml";

#[cfg(not(target_os = "android"))]
const CONFIG_PATH: &str = "./rsinstaller/config.toml";

fn init_config() -> RwLock<Config> {
    let config = std::fs::read_to_string(CONFIG_PATH);
    let config: Config = match config {
        Ok(s) => match toml::from_str(&s) {
            Ok(c) => c,
            Err(e) => {
                log::error!("Failed to parse config file, using default: {:?}", e);
                Config::default()
            }
        },
        Err(e) => {
            log::warn!("Failed to read config file, using default: {:?}", e);
            Config::default()
        }
    };

    // write back the config file to ensure it's always present
    let s = toml::to_string_pretty(&config).unwrap();
    if let Err(e) = std::fs::create_dir_all(std::path::Path::new(CONFIG_PATH).parent().unwrap()) {
        log::error!("Failed to create config directory: {:?}", e);
    } else if let Err(e) = std::fs::write(CONFIG_PATH, s) {
        // Installs must still work on a read-only data partition.
        log::error!("Failed to write config file: {:?}", e);
    }

    std::thread::spawn(|| {
        let mut watcher = match Hotwatch::new() {
            Ok(w) => w,
            Err(e) => {
                log::warn!("Failed to create config watcher: {:?}", e);
                return;
            }
        };
        if let Err(e) = watcher.watch(CONFIG_PATH, |event| {
            log::info!("Config file changed: {:?}", event);
            let config = std::fs::read_to_string(CONFIG_PATH);
            let config: Config = match config {
                Ok(s) => match toml::from_str(&s) {
                    Ok(c) => c,
                    Err(e) => {
                        log::error!("Failed to parse config file, ignoring change: {:?}", e);
                        return;
                    }
                },
                Err(e) => {
                    log::error!("Failed to read config file, ignoring change: {:?}", e);
                    return;
                }
            };
            let mut cfg = CONFIG.write().unwrap();
            *cfg = config;
            log::info!("Config updated");
        }) {
            log::warn!("Failed to watch config file: {:?}", e);
            return;
        }
        loop {
            std::thread::park();
        }
    });

    RwLock::new(config)
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    pub installer: InstallerConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InstallerConfig {
    /// Identity recorded as the installer of record on releases that honor
    /// it. Store attribution checks key off this.
    pub installer_package_name: String,
    /// Identity the install session is requested under.
    pub requesting_package_name: String,
    /// User profile the install targets.
    pub user_id: i32,
}

impl Default for InstallerConfig {
    fn default() -> Self {
        Self {
            installer_package_name: "com.android.vending".to_string(),
            requesting_package_name: "com.android.shell".to_string(),
            user_id: 0,
        }
    }
}
