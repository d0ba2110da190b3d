//! Reader for the CIF subset needed to screen a framework: cell parameters
//! and the `_atom_site` loop in fractional coordinates. Symmetry-expanded
//! (P1) files are expected; site labels like `Si1` fall back to their leading
//! element symbol when no type column is present.

use crate::core::models::cell::UnitCell;
use crate::core::models::structure::{Site, Structure};
use nalgebra::Vector3;
use std::path::Path;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CifError {
    #[error("Failed to read structure file '{path}': {source}")]
    Io {
        path: String,
        source: std::io::Error,
    },

    #[error("Missing cell parameter '{0}'")]
    MissingCellParameter(&'static str),

    #[error("No atom sites found in structure file")]
    NoAtomSites,

    #[error("Malformed CIF content at line {line}: {reason}")]
    Malformed { line: usize, reason: String },
}

pub fn load_structure(path: &Path) -> Result<Structure, CifError> {
    let content = std::fs::read_to_string(path).map_err(|e| CifError::Io {
        path: path.display().to_string(),
        source: e,
    })?;
    let name = path
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| "structure".to_string());
    parse_cif(&name, &content)
}

pub fn parse_cif(name: &str, content: &str) -> Result<Structure, CifError> {
    let mut cell_values: [Option<f64>; 6] = [None; 6];
    let mut sites = Vec::new();

    let lines: Vec<&str> = content.lines().collect();
    let mut i = 0;
    while i < lines.len() {
        let line = lines[i].trim();
        if line.is_empty() || line.starts_with('#') || line.starts_with("data_") {
            i += 1;
            continue;
        }
        if let Some((tag, value)) = split_tag_line(line) {
            if let Some(slot) = cell_slot(tag) {
                cell_values[slot] = Some(parse_numeric(value, i + 1)?);
            }
            i += 1;
            continue;
        }
        if line == "loop_" {
            let mut headers = Vec::new();
            i += 1;
            while i < lines.len() && lines[i].trim().starts_with('_') {
                headers.push(lines[i].trim().to_string());
                i += 1;
            }
            let columns = AtomSiteColumns::from_headers(&headers);
            while i < lines.len() {
                let row = lines[i].trim();
                if row.is_empty()
                    || row.starts_with('_')
                    || row.starts_with("loop_")
                    || row.starts_with("data_")
                    || row.starts_with('#')
                {
                    break;
                }
                if let Some(cols) = &columns {
                    sites.push(cols.parse_row(row, i + 1)?);
                }
                i += 1;
            }
            continue;
        }
        i += 1;
    }

    const CELL_TAGS: [&str; 6] = [
        "_cell_length_a",
        "_cell_length_b",
        "_cell_length_c",
        "_cell_angle_alpha",
        "_cell_angle_beta",
        "_cell_angle_gamma",
    ];
    let mut params = [0.0; 6];
    for (slot, value) in cell_values.iter().enumerate() {
        params[slot] = value.ok_or(CifError::MissingCellParameter(CELL_TAGS[slot]))?;
    }
    if sites.is_empty() {
        return Err(CifError::NoAtomSites);
    }

    Ok(Structure {
        name: name.to_string(),
        cell: UnitCell::new(
            params[0], params[1], params[2], params[3], params[4], params[5],
        ),
        sites,
    })
}

fn split_tag_line(line: &str) -> Option<(&str, &str)> {
    if !line.starts_with('_') {
        return None;
    }
    let mut parts = line.splitn(2, char::is_whitespace);
    let tag = parts.next()?;
    let value = parts.next()?.trim();
    if value.is_empty() { None } else { Some((tag, value)) }
}

fn cell_slot(tag: &str) -> Option<usize> {
    match tag {
        "_cell_length_a" => Some(0),
        "_cell_length_b" => Some(1),
        "_cell_length_c" => Some(2),
        "_cell_angle_alpha" => Some(3),
        "_cell_angle_beta" => Some(4),
        "_cell_angle_gamma" => Some(5),
        _ => None,
    }
}

/// Parses a CIF numeric token, dropping a trailing uncertainty like "9.87(3)".
fn parse_numeric(token: &str, line: usize) -> Result<f64, CifError> {
    let cleaned = match token.find('(') {
        Some(pos) => &token[..pos],
        None => token,
    };
    cleaned.parse::<f64>().map_err(|_| CifError::Malformed {
        line,
        reason: format!("expected a number, found '{token}'"),
    })
}

struct AtomSiteColumns {
    type_symbol: Option<usize>,
    label: Option<usize>,
    fract: [usize; 3],
}

impl AtomSiteColumns {
    fn from_headers(headers: &[String]) -> Option<Self> {
        let position = |tag: &str| headers.iter().position(|h| h == tag);
        let fract = [
            position("_atom_site_fract_x")?,
            position("_atom_site_fract_y")?,
            position("_atom_site_fract_z")?,
        ];
        Some(Self {
            type_symbol: position("_atom_site_type_symbol"),
            label: position("_atom_site_label"),
            fract,
        })
    }

    fn parse_row(&self, row: &str, line: usize) -> Result<Site, CifError> {
        let fields: Vec<&str> = row.split_whitespace().collect();
        let field = |col: usize| -> Result<&str, CifError> {
            fields.get(col).copied().ok_or_else(|| CifError::Malformed {
                line,
                reason: format!("atom site row has only {} columns", fields.len()),
            })
        };
        let element = match (self.type_symbol, self.label) {
            (Some(col), _) => field(col)?.to_string(),
            (None, Some(col)) => element_from_label(field(col)?),
            (None, None) => {
                return Err(CifError::Malformed {
                    line,
                    reason: "atom site loop carries neither type symbol nor label".to_string(),
                });
            }
        };
        let mut frac = [0.0; 3];
        for (axis, &col) in self.fract.iter().enumerate() {
            frac[axis] = parse_numeric(field(col)?, line)?;
        }
        Ok(Site {
            element,
            frac: Vector3::new(frac[0], frac[1], frac[2]),
        })
    }
}

/// "Si1" -> "Si", "O23" -> "O".
fn element_from_label(label: &str) -> String {
    label
        .chars()
        .take_while(|c| c.is_ascii_alphabetic())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    const SAMPLE: &str = "\
data_test
_cell_length_a    10.0
_cell_length_b    10.0(2)
_cell_length_c    12.5
_cell_angle_alpha 90.0
_cell_angle_beta  90.0
_cell_angle_gamma 90.0

loop_
_atom_site_label
_atom_site_type_symbol
_atom_site_fract_x
_atom_site_fract_y
_atom_site_fract_z
Si1 Si 0.0 0.0 0.0
O1  O  0.5 0.5 0.25
";

    #[test]
    fn parses_cell_and_sites() {
        let structure = parse_cif("test", SAMPLE).unwrap();
        assert_eq!(structure.name, "test");
        assert!((structure.cell.b - 10.0).abs() < 1e-12);
        assert!((structure.cell.c - 12.5).abs() < 1e-12);
        assert_eq!(structure.sites.len(), 2);
        assert_eq!(structure.sites[1].element, "O");
        assert!((structure.sites[1].frac.z - 0.25).abs() < 1e-12);
    }

    #[test]
    fn falls_back_to_label_for_element() {
        let without_type = SAMPLE
            .replace("_atom_site_type_symbol\n", "")
            .replace("Si1 Si", "Si1")
            .replace("O1  O ", "O1 ");
        let structure = parse_cif("test", &without_type).unwrap();
        assert_eq!(structure.sites[0].element, "Si");
        assert_eq!(structure.sites[1].element, "O");
    }

    #[test]
    fn missing_cell_parameter_is_reported() {
        let truncated = SAMPLE.replace("_cell_length_c    12.5\n", "");
        let result = parse_cif("test", &truncated);
        assert!(matches!(
            result,
            Err(CifError::MissingCellParameter("_cell_length_c"))
        ));
    }

    #[test]
    fn missing_sites_are_reported() {
        let header_only: String = SAMPLE.lines().take(7).collect::<Vec<_>>().join("\n");
        assert!(matches!(
            parse_cif("test", &header_only),
            Err(CifError::NoAtomSites)
        ));
    }

    #[test]
    fn load_reads_from_disk_and_names_by_stem() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("MFI.cif");
        let mut file = std::fs::File::create(&path).unwrap();
        file.write_all(SAMPLE.as_bytes()).unwrap();
        let structure = load_structure(&path).unwrap();
        assert_eq!(structure.name, "MFI");
    }
}
