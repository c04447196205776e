#![allow(clippy::expect_used, clippy::unwrap_used)]

use assert_cmd::Command;
use serde_json::{Value, json};
use std::path::Path;
use std::time::Duration;

#[allow(dead_code)]
pub const CMD_TIMEOUT: Duration = Duration::from_secs(15);

/// Create a `slugs` command isolated from the caller's environment.
///
/// Runs inside `cwd` so no stray `.env` file is picked up.
#[allow(dead_code)]
pub fn slugs_cmd(cwd: &Path) -> Command {
    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("slugs"));
    cmd.timeout(CMD_TIMEOUT);
    cmd.current_dir(cwd);
    for key in [
        "API_BASE_URL",
        "API_KEY",
        "SLUGS_PER_PAGE",
        "SLUGS_TIMEOUT_SECS",
        "SLUGS_CONFIG",
        "SLUGS_FORMAT",
    ] {
        cmd.env_remove(key);
    }
    cmd
}

/// JSON body of one content page with the given raw slugs.
#[allow(dead_code)]
pub fn page_body(slugs: &[&str]) -> Value {
    let data: Vec<Value> = slugs
        .iter()
        .map(|slug| json!({"values": {"slug": {"value": slug}}}))
        .collect();
    json!({"success": true, "data": data})
}
