//! CLI smoke entry point.
//!
//! # Responsibility
//! - Verify `tagpath_core` linkage with one nested clamped accumulation.
//! - Keep output deterministic for quick local sanity checks.
//!
//! Set `TAGPATH_LOG_DIR` (absolute) to also write core events to rotated
//! log files; `TAGPATH_LOG_LEVEL` overrides the level.

use std::process::ExitCode;
use tagpath_core::{
    add_clamped, get, LoggingConfig, MemoryContainer, NamespacedKey, TagType, TagValue,
};

fn main() -> ExitCode {
    if let Some(config) = LoggingConfig::from_env() {
        if let Err(err) = tagpath_core::init_logging(&config) {
            eprintln!("tagpath logging disabled: {err}");
        }
    }

    println!("tagpath_core version={}", tagpath_core::core_version());
    match run_probe() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            log::error!("event=cli_probe module=cli status=error error={err}");
            eprintln!("tagpath probe failed: {err}");
            ExitCode::FAILURE
        }
    }
}

fn run_probe() -> Result<(), Box<dyn std::error::Error>> {
    let path: Vec<NamespacedKey> = ["probe:player", "probe:stats", "probe:hp"]
        .iter()
        .map(|value| value.parse::<NamespacedKey>())
        .collect::<Result<Vec<_>, _>>()?;

    let mut root: MemoryContainer = MemoryContainer::new();
    for _ in 0..3 {
        add_clamped(&mut root, 8i32, Some(0), Some(20), &path)?;
    }

    let stored = get(&root, TagType::Int, &path)?;
    let hp = match stored {
        Some(TagValue::Int(value)) => value.to_string(),
        _ => "missing".to_string(),
    };
    println!("tagpath_core probe path={} hp={hp}", render_path(&path));
    Ok(())
}

fn render_path(path: &[NamespacedKey]) -> String {
    path.iter()
        .map(NamespacedKey::to_string)
        .collect::<Vec<_>>()
        .join("/")
}
