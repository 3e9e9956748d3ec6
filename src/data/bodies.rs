use csv::{Reader, ReaderBuilder, Trim};
use std::path::Path;
use tracing::info;

use crate::config::{BodyStyle, BodyTable};
use crate::data::open_maybe_gz;
use crate::error::{ChartError, Result};

fn parse_bodies_from_reader<R: std::io::Read>(mut rdr: Reader<R>) -> Result<BodyTable> {
    let mut entries = Vec::new();
    for rec in rdr.deserialize() {
        let row: BodyStyle = rec.map_err(|e| ChartError::data("body table", e))?;
        entries.push(row);
    }
    if entries.is_empty() {
        return Err(ChartError::data("body table", "no bodies listed"));
    }
    Ok(BodyTable { entries })
}

/// Load a body table from CSV with header
/// `id,color,marker_size,label,show_motion_vector`.
pub fn load_body_table(path: &Path) -> Result<BodyTable> {
    let rdr = ReaderBuilder::new()
        .trim(Trim::All)
        .from_reader(open_maybe_gz(path, "body table")?);
    let table = parse_bodies_from_reader(rdr)?;
    info!(bodies = table.entries.len(), "loaded body table");
    Ok(table)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse_from_str(s: &str) -> Result<BodyTable> {
        let rdr = ReaderBuilder::new().trim(Trim::All).from_reader(s.as_bytes());
        parse_bodies_from_reader(rdr)
    }

    #[test]
    fn parses_rows_in_order() {
        let csv = "\
id,color,marker_size,label,show_motion_vector
sun, yellow, 10, Sun, true
mars,red,5,Mars,false
";
        let t = parse_from_str(csv).unwrap();
        assert_eq!(t.entries.len(), 2);
        assert_eq!(t.entries[0].id, "sun");
        assert_eq!(t.entries[0].color, "yellow");
        assert_eq!(t.entries[0].marker_size, 10.0);
        assert!(t.entries[0].show_motion_vector);
        assert_eq!(t.entries[1].label, "Mars");
        assert!(!t.entries[1].show_motion_vector);
    }

    #[test]
    fn bad_marker_size_is_data_error() {
        let csv = "id,color,marker_size,label,show_motion_vector\nsun,yellow,big,Sun,true\n";
        assert!(matches!(
            parse_from_str(csv),
            Err(ChartError::DataUnavailable { .. })
        ));
    }

    #[test]
    fn empty_table_is_rejected() {
        let csv = "id,color,marker_size,label,show_motion_vector\n";
        assert!(parse_from_str(csv).is_err());
    }
}
