use crate::core::io::traits::NucleiFile;
use crate::core::models::nucleus::Nucleus;
use crate::core::utils::elements::{canonical_symbol, nuclear_charge};
use nalgebra::Vector3;
use std::io::{self, BufRead, Write};
use thiserror::Error;

/// Bohr per ångström (the inverse of the CODATA 2018 Bohr radius in ångström).
pub const BOHR_PER_ANGSTROM: f64 = 1.0 / 0.529177210903;

/// Length unit of the coordinates in an XYZ file.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Units {
    #[default]
    Bohr,
    Angstrom,
}

impl Units {
    pub fn to_bohr(self, value: f64) -> f64 {
        match self {
            Units::Bohr => value,
            Units::Angstrom => value * BOHR_PER_ANGSTROM,
        }
    }

    pub fn from_bohr(self, value: f64) -> f64 {
        match self {
            Units::Bohr => value,
            Units::Angstrom => value / BOHR_PER_ANGSTROM,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct XyzMetadata {
    /// The free-form second line of the file.
    pub comment: String,
}

#[derive(Debug, Error)]
pub enum XyzError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
    #[error("Parse error on line {line}: {kind}")]
    Parse { line: usize, kind: XyzParseErrorKind },
}

#[derive(Debug, Error, PartialEq)]
pub enum XyzParseErrorKind {
    #[error("Invalid atom count '{value}'")]
    MalformedCount { value: String },
    #[error("Expected {expected} nuclei but found {found}")]
    CountMismatch { expected: usize, found: usize },
    #[error("Expected at least 4 fields but found {found}")]
    MissingFields { found: usize },
    #[error("Unknown element symbol '{symbol}'")]
    UnknownElement { symbol: String },
    #[error("Invalid float for {field} (value: '{value}')")]
    InvalidFloat { field: &'static str, value: String },
}

/// Reader and writer for the plain XYZ format.
///
/// The first line holds the number of nuclei, the second a comment, and each following line
/// `Symbol x y z [charge]`. When the optional fifth column is present it replaces the charge
/// looked up from the element symbol.
#[derive(Debug, Clone, Copy, Default)]
pub struct XyzFile {
    units: Units,
}

impl XyzFile {
    pub fn new(units: Units) -> Self {
        Self { units }
    }

    pub fn units(&self) -> Units {
        self.units
    }

    fn parse_nucleus(&self, line: &str, line_num: usize) -> Result<Nucleus, XyzError> {
        let parse_err = |kind| XyzError::Parse {
            line: line_num,
            kind,
        };

        let fields: Vec<&str> = line.split_whitespace().collect();
        if fields.len() < 4 {
            return Err(parse_err(XyzParseErrorKind::MissingFields {
                found: fields.len(),
            }));
        }

        let symbol = canonical_symbol(fields[0]);
        let tabulated = nuclear_charge(&symbol).ok_or_else(|| {
            parse_err(XyzParseErrorKind::UnknownElement {
                symbol: fields[0].to_string(),
            })
        })?;

        let parse_float = |field: &'static str, value: &str| {
            value
                .parse::<f64>()
                .map_err(|_| parse_err(XyzParseErrorKind::InvalidFloat {
                    field,
                    value: value.to_string(),
                }))
        };
        let x = parse_float("x", fields[1])?;
        let y = parse_float("y", fields[2])?;
        let z = parse_float("z", fields[3])?;
        let charge = match fields.get(4) {
            Some(value) => parse_float("charge", value)?,
            None => tabulated,
        };

        let coordinates = Vector3::new(x, y, z).map(|c| self.units.to_bohr(c));
        Ok(Nucleus::new(&symbol, charge, coordinates))
    }
}

impl NucleiFile for XyzFile {
    type Metadata = XyzMetadata;
    type Error = XyzError;

    fn read_from(
        &self,
        reader: &mut impl BufRead,
    ) -> Result<(Vec<Nucleus>, Self::Metadata), Self::Error> {
        let mut lines = reader.lines().enumerate().map(|(i, l)| (i + 1, l));

        let (count_line, expected) = match lines.next() {
            Some((line_num, line)) => {
                let line = line?;
                let value = line.trim();
                let expected = value.parse::<usize>().map_err(|_| XyzError::Parse {
                    line: line_num,
                    kind: XyzParseErrorKind::MalformedCount {
                        value: value.to_string(),
                    },
                })?;
                (line_num, expected)
            }
            None => {
                return Err(XyzError::Parse {
                    line: 1,
                    kind: XyzParseErrorKind::MalformedCount {
                        value: String::new(),
                    },
                });
            }
        };

        let mut metadata = XyzMetadata::default();
        let mut last_line = count_line;
        if let Some((line_num, line)) = lines.next() {
            metadata.comment = line?.trim_end().to_string();
            last_line = line_num;
        }

        let mut nuclei = Vec::with_capacity(expected);
        for (line_num, line) in lines {
            let line = line?;
            last_line = line_num;
            if line.trim().is_empty() {
                continue;
            }
            if nuclei.len() == expected {
                return Err(XyzError::Parse {
                    line: line_num,
                    kind: XyzParseErrorKind::CountMismatch {
                        expected,
                        found: expected + 1,
                    },
                });
            }
            nuclei.push(self.parse_nucleus(&line, line_num)?);
        }

        if nuclei.len() != expected {
            return Err(XyzError::Parse {
                line: last_line + 1,
                kind: XyzParseErrorKind::CountMismatch {
                    expected,
                    found: nuclei.len(),
                },
            });
        }

        Ok((nuclei, metadata))
    }

    fn write_to(
        &self,
        nuclei: &[Nucleus],
        metadata: &Self::Metadata,
        writer: &mut impl Write,
    ) -> Result<(), Self::Error> {
        writeln!(writer, "{}", nuclei.len())?;
        writeln!(writer, "{}", metadata.comment)?;
        for nucleus in nuclei {
            let c = nucleus.coordinates.map(|v| self.units.from_bohr(v));
            write!(
                writer,
                "{:<3}{:>18.10}{:>18.10}{:>18.10}",
                nucleus.element, c.x, c.y, c.z
            )?;
            // Only non-standard charges need the extra column to survive a re-read.
            if nuclear_charge(&nucleus.element) != Some(nucleus.charge) {
                write!(writer, "{:>12.6}", nucleus.charge)?;
            }
            writeln!(writer)?;
        }
        Ok(())
    }
}
