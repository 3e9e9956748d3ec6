pub mod bodies;
pub mod constellations;
pub mod stars;

pub use bodies::load_body_table;
pub use constellations::load_constellations;
pub use stars::load_stars;

use flate2::read::GzDecoder;
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use crate::error::{ChartError, Result};

/// Open a data file, transparently decompressing `*.gz`.
pub(crate) fn open_maybe_gz(path: &Path, what: &str) -> Result<Box<dyn Read>> {
    let file = File::open(path)
        .map_err(|e| ChartError::data(what, format!("{}: {e}", path.display())))?;
    let reader = BufReader::new(file);
    if path.extension().is_some_and(|ext| ext == "gz") {
        Ok(Box::new(GzDecoder::new(reader)))
    } else {
        Ok(Box::new(reader))
    }
}
