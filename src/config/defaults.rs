// SPDX-License-Identifier: MPL-2.0
//! Default configuration values.
//!
//! Centralizes the fallback values used when a setting is absent from
//! `settings.toml` or the file does not exist at all.

/// Storage-relative namespace this application writes captures into and is
/// allowed to manage. Trailing slash is significant: locations are compared
/// in normalized (trailing-slash) form.
pub const DEFAULT_OWNED_LOCATION: &str = "DCIM/CameraRoll/";

/// File name of the persisted settings inside the app config directory.
pub const CONFIG_FILE: &str = "settings.toml";

/// Directory name under the platform config dir.
pub const APP_NAME: &str = "CameraRoll";
