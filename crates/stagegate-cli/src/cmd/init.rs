use stagegate_core::{config::Config, io, paths};
use std::path::Path;

pub fn run(root: &Path) -> anyhow::Result<()> {
    io::ensure_dir(&paths::opportunities_dir(root))?;

    if paths::config_path(root).exists() {
        println!("Already initialized: {}", root.display());
        return Ok(());
    }

    let project = root
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| "project".to_string());
    Config::new(project).save(root)?;

    println!("Initialized stagegate in {}", root.display());
    println!("Next: stagegate opportunity create <slug> --title <title>");
    Ok(())
}
