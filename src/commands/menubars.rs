use std::path::Path;

use anyhow::{Context, Result};
use metamodel::BootstrapUseCase;

use crate::cli::MenubarsFormat;
use crate::ui::json::{emit, emit_event, events::*};

pub fn cmd_menubars(project: Option<&Path>, format: MenubarsFormat, json: bool) -> Result<()> {
    let config = super::load_config(project)?;
    let metamodel = BootstrapUseCase::new(config).execute()?;
    let resolved = metamodel.resolved_menu_bars();

    if json {
        emit_event(&StartEvent::new("menubars"))?;
        emit(serde_json::json!({
            "event": "data",
            "command": "menubars",
            "source": format!("{:?}", resolved.source).to_lowercase(),
            "menu_bars": resolved.menu_bars,
        }))?;
        emit_event(&CompleteEvent::success("menubars"))?;
        return Ok(());
    }

    match format {
        MenubarsFormat::Outline => print!("{}", resolved.menu_bars.render()),
        MenubarsFormat::Toml => {
            let text = toml::to_string_pretty(&resolved.menu_bars)
                .context("serializing menu bars")?;
            print!("{}", text);
        }
    }
    Ok(())
}
