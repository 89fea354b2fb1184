use std::path::Path;
use std::sync::Arc;

use anyhow::{Context, Result};
use metamodel::domain::value_objects::IconSize;
use metamodel::infrastructure::JsonEventTrace;
use metamodel::{BootstrapUseCase, ExplainUseCase, InMemoryEventBus, ManagedObject};

use crate::ui::json::{emit, emit_event, events::*};

pub fn cmd_explain(
    project: Option<&Path>,
    name: &str,
    member: Option<&str>,
    pojo: Option<&str>,
    trace_events: bool,
    json: bool,
) -> Result<()> {
    if json {
        emit_event(&StartEvent::new("explain"))?;
    }

    let config = super::load_config(project)?;
    let mut bootstrap = BootstrapUseCase::new(config);
    if trace_events {
        let inner = Arc::new(InMemoryEventBus::new());
        bootstrap =
            bootstrap.with_event_bus(Arc::new(JsonEventTrace::with_writer(inner, std::io::stderr())));
    }
    let mut metamodel = bootstrap.execute()?;

    let report = ExplainUseCase::execute(&mut metamodel, name, member)?;
    if json {
        emit_event(&DataEvent::new("explain", &report))?;
    } else {
        print!("{}", report.render());
    }

    if let Some(pojo) = pojo {
        let state: serde_json::Value =
            serde_json::from_str(pojo).context("parsing --pojo as JSON")?;
        let target = ManagedObject::new(report.logical_type.clone(), state);
        let title = metamodel.title(name, &target)?;
        let icon = metamodel.icon_name(name, &target, IconSize::default())?;
        let css_class = metamodel.css_class(name, &target)?;
        let layout = metamodel.layout(name, &target)?;

        if json {
            emit(serde_json::json!({
                "event": "data",
                "command": "explain",
                "title": title,
                "icon_name": icon,
                "css_class": css_class,
                "layout": layout,
            }))?;
        } else {
            println!("  evaluated:");
            println!("    title:     {}", title.as_deref().unwrap_or("-"));
            println!("    icon:      {}", icon.as_deref().unwrap_or("-"));
            println!("    css class: {}", css_class.as_deref().unwrap_or("-"));
            println!("    layout:    {}", layout.as_deref().unwrap_or("-"));
        }
    }

    if json {
        emit_event(&CompleteEvent::success("explain"))?;
    }
    Ok(())
}
