use std::path::Path;

use anyhow::Result;
use metamodel::BootstrapUseCase;
use serde::Serialize;

use crate::ui::json::{emit_event, events::*};

#[derive(Debug, Serialize)]
struct SpecSummary {
    class_name: String,
    logical_type: String,
    bean_sort: &'static str,
    singular_name: String,
    properties: usize,
    collections: usize,
    actions: usize,
}

pub fn cmd_specs(project: Option<&Path>, json: bool) -> Result<()> {
    if json {
        emit_event(&StartEvent::new("specs"))?;
    }

    let config = super::load_config(project)?;
    let metamodel = BootstrapUseCase::new(config).execute()?;

    let summaries: Vec<SpecSummary> = metamodel
        .loader()
        .specifications()
        .map(|spec| SpecSummary {
            class_name: spec.class_name().to_string(),
            logical_type: spec.logical_type_name().to_string(),
            bean_sort: spec.bean_sort().as_str(),
            singular_name: spec.singular_name(),
            properties: spec.properties().count(),
            collections: spec.collections().count(),
            actions: spec.actions().count(),
        })
        .collect();

    if json {
        for summary in &summaries {
            emit_event(&DataEvent::new("specs", summary))?;
        }
        emit_event(&CompleteEvent::success("specs"))?;
        return Ok(());
    }

    let width = summaries
        .iter()
        .map(|s| s.class_name.len())
        .max()
        .unwrap_or(0);
    for s in &summaries {
        println!(
            "{:<width$}  {:<10} {}  ({}p {}c {}a)",
            s.class_name,
            s.bean_sort,
            s.logical_type,
            s.properties,
            s.collections,
            s.actions,
            width = width
        );
    }
    println!("{} specifications", summaries.len());
    Ok(())
}
