// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the application.

use crate::ui::coordinate_entry;
use crate::ui::home;
use crate::ui::notifications;
use crate::ui::settings;
use std::time::Instant;

/// Top-level messages consumed by `App::update`. The variants forward
/// lower-level component messages while keeping a single update entrypoint.
#[derive(Debug, Clone)]
pub enum Message {
    Home(home::Message),
    CoordinateEntry(coordinate_entry::Message),
    Settings(settings::Message),
    Notification(notifications::NotificationMessage),
    /// Periodic tick driving notification auto-dismiss.
    Tick(Instant),
}

/// Runtime flags passed in from the CLI to tweak startup behavior.
#[derive(Debug, Default)]
pub struct Flags {
    /// Optional locale override in BCP-47 form (e.g. `fr`, `en-US`).
    pub lang: Option<String>,
    /// Optional config directory override (for settings.toml).
    /// Takes precedence over the `ICED_WAYPOINT_CONFIG_DIR` environment variable.
    pub config_dir: Option<String>,
}
