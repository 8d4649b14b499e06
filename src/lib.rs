pub mod android;
pub mod config;
pub mod consts;
pub mod installer;
pub mod logging;
pub mod macros;
pub mod plat;
