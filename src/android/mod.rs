//! Hand-expanded binder interface definitions.
//!
//! The platform-side interfaces (`package_manager`, `package_installer`) are
//! not part of the public SDK surface; only the subset the install flow
//! drives is mirrored here. Everything else in the crate talks to these
//! typed traits and never touches a raw binder handle.

pub mod installer_service;
pub mod intent;
pub mod intent_receiver;
pub mod package_installer;
pub mod package_manager;
