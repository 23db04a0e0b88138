//! User-facing console output.
//!
//! The tool never prompts; everything here is one-way reporting, styled with
//! `console` so colors drop out when stdout is not a terminal.

pub mod formatter;

pub use formatter::{
    display_boundary_warning, display_changelog_preview, display_error, display_proposed_version,
    display_status, display_success,
};

use std::path::Path;

use crate::version::ReleaseVersion;

/// Final confirmation after the changelog, commit and tag are done.
pub fn display_release_complete(changelog_path: &Path, version: &ReleaseVersion) {
    display_success(&format!(
        "已更新 {} 檔案、提交更改並建立標籤：{}",
        changelog_path.display(),
        version
    ));
}
