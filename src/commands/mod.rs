// src/commands/mod.rs

//! Command implementations: thin orchestration over the library core.

pub mod add;
pub mod diff;
pub mod init;
pub mod list;
pub mod remove;
pub mod status;
pub mod update;

pub use add::cmd_add;
pub use diff::cmd_diff;
pub use init::cmd_init;
pub use list::cmd_list;
pub use remove::cmd_remove;
pub use status::cmd_status;
pub use update::cmd_update;

use luman::{HttpRegistry, ProjectConfig};

/// Open a registry client for the configured endpoint, honoring a
/// command-line override.
pub(crate) fn open_registry(
    config: &ProjectConfig,
    override_url: Option<&str>,
) -> luman::Result<HttpRegistry> {
    HttpRegistry::new(override_url.unwrap_or(&config.registry))
}
