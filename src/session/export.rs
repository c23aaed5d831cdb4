//! Writing exported diagrams to disk.

use std::path::Path;

use log::info;

use crate::error::DiagramError;

/// Write `svg` to `path`, replacing any existing file.
pub async fn save_svg(path: &Path, svg: &str) -> Result<(), DiagramError> {
    tokio::fs::write(path, svg).await?;
    info!("[Export] Wrote {} bytes to {}", svg.len(), path.display());
    Ok(())
}
