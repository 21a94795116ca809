//! Writing rendered tiles to disk

use std::fs;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::error::GenerateError;
use crate::renderer::RenderedTile;

/// Files written by one generation run
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GenerationReport {
    /// Output directory
    pub directory: PathBuf,
    /// Written files, in generation order
    pub written: Vec<PathBuf>,
}

impl GenerationReport {
    /// File names of the written files
    pub fn file_names(&self) -> Vec<String> {
        self.written
            .iter()
            .filter_map(|path| path.file_name())
            .map(|name| name.to_string_lossy().into_owned())
            .collect()
    }
}

/// Write tiles into `directory`, creating it if needed
///
/// Existing files with the same name are overwritten. The first failure
/// aborts the run.
pub fn write_tiles(
    directory: &Path,
    tiles: &[RenderedTile],
) -> Result<GenerationReport, GenerateError> {
    fs::create_dir_all(directory).map_err(|e| GenerateError::io(directory, e))?;

    let mut report = GenerationReport {
        directory: directory.to_path_buf(),
        written: Vec::with_capacity(tiles.len()),
    };

    for tile in tiles {
        let path = directory.join(&tile.file_name);
        fs::write(&path, &tile.svg).map_err(|e| GenerateError::io(&path, e))?;
        debug!(path = %path.display(), "wrote tile");
        report.written.push(path);
    }

    Ok(report)
}
