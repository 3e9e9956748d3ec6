use csv::{Reader, ReaderBuilder, Trim};
use std::path::Path;
use tracing::{debug, info, warn};

use crate::catalog::{Star, StarCatalog};
use crate::data::open_maybe_gz;
use crate::error::{ChartError, Result};
use crate::types::parse_or;

// Column positions in the pipe-delimited Hipparcos main catalog (hip_main.dat)
const COL_HIP: usize = 1;
const COL_VMAG: usize = 5;
const COL_RA_DEG: usize = 8;
const COL_DEC_DEG: usize = 9;
const COL_PM_RA: usize = 12;
const COL_PM_DEC: usize = 13;

fn field(rec: &csv::StringRecord, i: usize) -> &str {
    rec.get(i).unwrap_or("").trim()
}

// Rows without a position or a magnitude cannot be charted and are skipped.
fn parse_stars_from_reader<R: std::io::Read>(mut rdr: Reader<R>) -> Result<StarCatalog> {
    let mut catalog = StarCatalog::new();
    let mut skipped = 0usize;

    for result in rdr.records() {
        let rec = result.map_err(|e| ChartError::data("star catalog", e))?;

        let hip = match field(&rec, COL_HIP).parse::<u32>() {
            Ok(h) => h,
            Err(_) => {
                skipped += 1;
                continue;
            }
        };
        let (ra, dec, mag) = match (
            field(&rec, COL_RA_DEG).parse::<f64>(),
            field(&rec, COL_DEC_DEG).parse::<f64>(),
            field(&rec, COL_VMAG).parse::<f64>(),
        ) {
            (Ok(ra), Ok(dec), Ok(mag)) => (ra, dec, mag),
            _ => {
                skipped += 1;
                continue;
            }
        };

        catalog.insert(Star {
            hip,
            magnitude: mag,
            ra_deg: ra,
            dec_deg: dec,
            pm_ra_mas_yr: parse_or(field(&rec, COL_PM_RA), 0.0),
            pm_dec_mas_yr: parse_or(field(&rec, COL_PM_DEC), 0.0),
        });
    }

    debug!(skipped, "rows without usable position or magnitude");
    Ok(catalog)
}

fn reader_builder() -> ReaderBuilder {
    let mut b = ReaderBuilder::new();
    b.has_headers(false).delimiter(b'|').flexible(true).trim(Trim::All);
    b
}

/// Load the Hipparcos main catalog from `hip_main.dat` or `hip_main.dat.gz`.
pub fn load_stars(path: &Path) -> Result<StarCatalog> {
    let rdr = reader_builder().from_reader(open_maybe_gz(path, "star catalog")?);
    let catalog = parse_stars_from_reader(rdr)?;
    if catalog.is_empty() {
        warn!(path = %path.display(), "star catalog has no usable rows");
    }
    info!(stars = catalog.len(), path = %path.display(), "loaded star catalog");
    Ok(catalog)
}
