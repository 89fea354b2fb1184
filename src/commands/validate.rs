use std::path::Path;

use anyhow::Result;
use metamodel::{BootstrapUseCase, MetamodelError};

use crate::ui::json::{emit, emit_event, events::*};

pub fn cmd_validate(project: Option<&Path>, json: bool) -> Result<()> {
    if json {
        emit_event(&StartEvent::new("validate"))?;
    }

    let mut config = super::load_config(project)?;
    // report instead of failing on the first invalid bootstrap
    config.validation.fail_on_invalid = false;
    config.introspection.mode = metamodel::IntrospectionMode::Full;

    let metamodel = BootstrapUseCase::new(config).execute()?;
    let failures = metamodel.validation_failures().clone();

    if json {
        for failure in failures.iter() {
            emit(serde_json::json!({
                "event": "data",
                "command": "validate",
                "identifier": failure.identifier.to_string(),
                "message": failure.message,
            }))?;
        }
        let complete = if failures.is_empty() {
            CompleteEvent::success("validate")
        } else {
            CompleteEvent::failure("validate")
        };
        emit_event(&complete)?;
    } else if failures.is_empty() {
        println!(
            "metamodel is valid ({} specifications)",
            metamodel.loader().len()
        );
    }

    if failures.is_empty() {
        Ok(())
    } else {
        Err(MetamodelError::ModelInvalid(failures).into())
    }
}
