use std::path::Path;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use anyhow::{Context, Result};
use metamodel::application::WatchEvent;
use metamodel::WatchUseCase;

pub fn cmd_watch(project: Option<&Path>, json: bool) -> Result<()> {
    let config = super::load_config(project)?;
    if !config.prototyping.hot_reload {
        anyhow::bail!(
            "hot reload is disabled; set `prototyping.hot_reload = true` in metamodel.toml \
             or METAMODEL_HOT_RELOAD=1"
        );
    }

    // Set up Ctrl+C handler
    let running = Arc::new(AtomicBool::new(true));
    let running_clone = running.clone();
    ctrlc::set_handler(move || {
        running_clone.store(false, Ordering::SeqCst);
    })
    .context("setting Ctrl+C handler")?;

    WatchUseCase::new(config).start(running, |event| {
        if json {
            println!("{}", event.to_json());
            return;
        }
        match event {
            WatchEvent::WatchStarted {
                model_dir,
                layout_dir,
            } => println!("watching {} and {} (Ctrl+C to stop)", model_dir, layout_dir),
            WatchEvent::FilesChanged { paths } => {
                for path in paths {
                    println!("  changed {}", path);
                }
            }
            WatchEvent::Unchanged => println!("  sources unchanged"),
            WatchEvent::Reloaded {
                specs,
                failures,
                fingerprint,
            } => println!(
                "reloaded {} specifications, {} failures ({})",
                specs, failures, fingerprint
            ),
            WatchEvent::Error { message } => eprintln!("error: {}", message),
            WatchEvent::Shutdown => println!("stopped"),
        }
    })
}
