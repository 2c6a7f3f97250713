use std::{fs, path::Path};

use anyhow::{Context, Result};

use super::{CommandKind, CommandResult, CommandSummary, InitSummary};
use crate::config::{CONFIG_FILE_NAME, default_config_json};

pub fn init() -> Result<CommandResult> {
    let config_path = Path::new(CONFIG_FILE_NAME);

    if config_path.exists() {
        return Ok(CommandResult::rejected(
            CommandKind::Init,
            format!("{} already exists", CONFIG_FILE_NAME),
            Vec::new(),
            0,
        ));
    }

    fs::write(config_path, default_config_json()?)
        .with_context(|| format!("Failed to write {}", CONFIG_FILE_NAME))?;

    Ok(CommandResult {
        kind: CommandKind::Init,
        summary: Some(CommandSummary::Init(InitSummary {
            path: config_path.to_path_buf(),
        })),
        failure: None,
        diagnostics: Vec::new(),
        files_scanned: 0,
    })
}
