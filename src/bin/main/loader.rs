use std::{
    fs,
    io::{self, Read},
    path::Path,
};

use anyhow::Context;
use log::info;

pub(super) const PASTE_TITLE: &str = "Pasted Text";
pub(super) const PASTE_SOURCE: &str = "Manual input";
const STDIN_TITLE: &str = "Standard Input";

/// Raw text plus the display strings handed to `load_content`.
#[derive(Debug)]
pub(super) struct LoadedText {
    pub(super) title: String,
    pub(super) source: String,
    pub(super) text: String,
}

/// Read the start-up text from a file, or stdin for `-`.
pub(super) fn load_path(path: &Path, title: Option<&str>) -> anyhow::Result<LoadedText> {
    if path.as_os_str() == "-" {
        let mut text = String::new();
        io::stdin()
            .read_to_string(&mut text)
            .context("failed to read text from stdin")?;
        info!("loader: read {} bytes from stdin", text.len());
        return Ok(LoadedText {
            title: title.unwrap_or(STDIN_TITLE).to_owned(),
            source: "stdin".to_owned(),
            text,
        });
    }

    let text = fs::read_to_string(path)
        .with_context(|| format!("failed to read {}", path.display()))?;
    info!("loader: read {} bytes from {}", text.len(), path.display());

    let title = title.map(str::to_owned).unwrap_or_else(|| {
        path.file_stem()
            .map(|stem| stem.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.display().to_string())
    });

    Ok(LoadedText {
        title,
        source: path.display().to_string(),
        text,
    })
}
