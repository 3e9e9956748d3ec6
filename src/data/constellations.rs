use phf::phf_map;
use std::io::{BufRead, BufReader, Read};
use std::path::Path;
use tracing::{info, warn};

use crate::catalog::{ConstellationEdge, ConstellationFigure};
use crate::data::open_maybe_gz;
use crate::error::{ChartError, Result};

static CONSTELLATION_NAMES: phf::Map<&'static str, &'static str> = phf_map! {
    "And" => "Andromeda",
    "Ant" => "Antlia",
    "Aps" => "Apus",
    "Aqr" => "Aquarius",
    "Aql" => "Aquila",
    "Ara" => "Ara",
    "Ari" => "Aries",
    "Aur" => "Auriga",
    "Boo" => "Boötes",
    "Cae" => "Caelum",
    "Cam" => "Camelopardalis",
    "Cnc" => "Cancer",
    "CVn" => "Canes Venatici",
    "CMa" => "Canis Major",
    "CMi" => "Canis Minor",
    "Cap" => "Capricornus",
    "Car" => "Carina",
    "Cas" => "Cassiopeia",
    "Cen" => "Centaurus",
    "Cep" => "Cepheus",
    "Cet" => "Cetus",
    "Cha" => "Chamaeleon",
    "Cir" => "Circinus",
    "Col" => "Columba",
    "Com" => "Coma Berenices",
    "CrA" => "Corona Australis",
    "CrB" => "Corona Borealis",
    "Crv" => "Corvus",
    "Crt" => "Crater",
    "Cru" => "Crux",
    "Cyg" => "Cygnus",
    "Del" => "Delphinus",
    "Dor" => "Dorado",
    "Dra" => "Draco",
    "Equ" => "Equuleus",
    "Eri" => "Eridanus",
    "For" => "Fornax",
    "Gem" => "Gemini",
    "Gru" => "Grus",
    "Her" => "Hercules",
    "Hor" => "Horologium",
    "Hya" => "Hydra",
    "Hyi" => "Hydrus",
    "Ind" => "Indus",
    "Lac" => "Lacerta",
    "Leo" => "Leo",
    "LMi" => "Leo Minor",
    "Lep" => "Lepus",
    "Lib" => "Libra",
    "Lup" => "Lupus",
    "Lyn" => "Lynx",
    "Lyr" => "Lyra",
    "Men" => "Mensa",
    "Mic" => "Microscopium",
    "Mon" => "Monoceros",
    "Mus" => "Musca",
    "Nor" => "Norma",
    "Oct" => "Octans",
    "Oph" => "Ophiuchus",
    "Ori" => "Orion",
    "Pav" => "Pavo",
    "Peg" => "Pegasus",
    "Per" => "Perseus",
    "Phe" => "Phoenix",
    "Pic" => "Pictor",
    "Psc" => "Pisces",
    "PsA" => "Piscis Austrinus",
    "Pup" => "Puppis",
    "Pyx" => "Pyxis",
    "Ret" => "Reticulum",
    "Sge" => "Sagitta",
    "Sgr" => "Sagittarius",
    "Sco" => "Scorpius",
    "Scl" => "Sculptor",
    "Sct" => "Scutum",
    "Ser" => "Serpens",
    "Sex" => "Sextans",
    "Tau" => "Taurus",
    "Tel" => "Telescopium",
    "Tri" => "Triangulum",
    "TrA" => "Triangulum Australe",
    "Tuc" => "Tucana",
    "UMa" => "Ursa Major",
    "UMi" => "Ursa Minor",
    "Vel" => "Vela",
    "Vir" => "Virgo",
    "Vol" => "Volans",
    "Vul" => "Vulpecula",
};

/// Load constellation figures from a Stellarium `constellationship.fab`.
pub fn load_constellations(path: &Path) -> Result<Vec<ConstellationFigure>> {
    let figures = parse_constellations_from_reader(open_maybe_gz(path, "constellations")?)?;
    info!(
        figures = figures.len(),
        edges = figures.iter().map(|f| f.edges.len()).sum::<usize>(),
        "loaded constellations"
    );
    Ok(figures)
}

// One figure per line: the abbreviation, the number of edges, then that many
// pairs of Hipparcos numbers. Separators are runs of whitespace.
fn parse_constellations_from_reader<R: Read>(reader: R) -> Result<Vec<ConstellationFigure>> {
    let mut figures = Vec::new();

    for (lineno, line) in BufReader::new(reader).lines().enumerate() {
        let line = line.map_err(|e| ChartError::data("constellations", e))?;
        let fields: Vec<&str> = line.split_whitespace().collect();
        if fields.is_empty() || fields[0].starts_with('#') {
            continue;
        }

        let abbr = fields[0].to_string();
        let ids = fields
            .iter()
            .skip(2)
            .map(|f| f.parse::<u32>())
            .collect::<std::result::Result<Vec<u32>, _>>()
            .map_err(|e| {
                ChartError::data("constellations", format!("line {}: {e}", lineno + 1))
            })?;

        // Dangling id without a partner is ignored
        let edges: Vec<ConstellationEdge> = ids
            .chunks_exact(2)
            .map(|pair| ConstellationEdge {
                a: pair[0],
                b: pair[1],
            })
            .collect();

        if let Some(declared) = fields.get(1).and_then(|n| n.parse::<usize>().ok()) {
            if declared != edges.len() {
                warn!(%abbr, declared, found = edges.len(), "edge count mismatch");
            }
        }

        let name = CONSTELLATION_NAMES
            .get(abbr.as_str())
            .copied()
            .unwrap_or("");
        figures.push(ConstellationFigure {
            name: name.to_string(),
            abbr,
            edges,
        });
    }

    Ok(figures)
}
