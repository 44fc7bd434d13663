//! Backup inspection probe.
//!
//! # Responsibility
//! - Provide a minimal executable to verify `sully_core` linkage.
//! - Decode a backup file, run the shape-validation sweep and print a
//!   deterministic summary for quick local sanity checks.

use std::process::ExitCode;

use sully_core::FullBackupData;

fn main() -> ExitCode {
    let mut args = std::env::args().skip(1);
    let Some(path) = args.next() else {
        eprintln!("usage: sully_cli <backup.json>");
        eprintln!("sully_core version={}", sully_core::core_version());
        return ExitCode::FAILURE;
    };

    match inspect(&path) {
        Ok(summary) => {
            print!("{summary}");
            ExitCode::SUCCESS
        }
        Err(message) => {
            eprintln!("error: {message}");
            ExitCode::FAILURE
        }
    }
}

fn inspect(path: &str) -> Result<String, String> {
    let raw = std::fs::read_to_string(path).map_err(|err| format!("cannot read `{path}`: {err}"))?;
    let backup: FullBackupData =
        serde_json::from_str(&raw).map_err(|err| format!("`{path}` is not a backup file: {err}"))?;
    backup
        .validate()
        .map_err(|err| format!("backup failed shape validation: {err}"))?;

    let mut summary = String::new();
    summary.push_str(&format!("backup version={}\n", backup.version));
    summary.push_str(&format!("backup timestamp={}\n", backup.timestamp));
    summary.push_str(&format!("characters={}\n", count(&backup.characters)));
    summary.push_str(&format!("messages={}\n", count(&backup.messages)));
    summary.push_str(&format!("customThemes={}\n", count(&backup.custom_themes)));
    summary.push_str(&format!("galleryImages={}\n", count(&backup.gallery_images)));
    summary.push_str(&format!("diaries={}\n", count(&backup.diaries)));
    summary.push_str(&format!("tasks={}\n", count(&backup.tasks)));
    summary.push_str(&format!("anniversaries={}\n", count(&backup.anniversaries)));
    Ok(summary)
}

fn count<T>(collection: &Option<Vec<T>>) -> String {
    match collection {
        Some(items) => items.len().to_string(),
        None => "absent".to_string(),
    }
}
