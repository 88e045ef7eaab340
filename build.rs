use std::fs;
use std::path::{Path, PathBuf};
use std::time::{SystemTime, UNIX_EPOCH};

fn main() {
    // askama compiles templates in and sqlx::migrate! embeds the migrations;
    // neither change is visible to cargo without per-file hints.
    watch_files("templates", "html");
    watch_files("migrations", "sql");

    // Reported by /health/ so a deploy can be matched to a binary.
    let build_id = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs().to_string())
        .unwrap_or_else(|_| "dev".to_string());
    println!("cargo:rustc-env=PYLADIES_BUILD_ID={}", build_id);
}

/// Emits a rerun hint for the directory itself (new files) and for every
/// file below it with the given extension.
fn watch_files(root: impl AsRef<Path>, extension: &str) {
    let root = root.as_ref();
    if !root.is_dir() {
        return;
    }
    println!("cargo:rerun-if-changed={}", root.display());

    let mut pending: Vec<PathBuf> = vec![root.to_path_buf()];
    while let Some(dir) = pending.pop() {
        let Ok(entries) = fs::read_dir(&dir) else {
            continue;
        };
        for path in entries.flatten().map(|entry| entry.path()) {
            if path.is_dir() {
                pending.push(path);
            } else if path.extension().is_some_and(|ext| ext == extension) {
                println!("cargo:rerun-if-changed={}", path.display());
            }
        }
    }
}
