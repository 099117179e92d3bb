use crate::core::models::nucleus::Nucleus;
use std::error::Error;
use std::fs::File;
use std::io::{self, BufRead, BufReader, BufWriter, Write};
use std::path::Path;

/// Defines the interface for reading and writing files that describe a set of nuclei.
///
/// Implementors carry their own reading options (for example the length unit of the
/// coordinates), so every method takes `&self`. Nuclei handed to or returned from these
/// methods always have coordinates in bohr.
pub trait NucleiFile {
    /// The type of metadata carried alongside the nuclei (titles, comments).
    type Metadata;

    /// The error type for I/O operations.
    type Error: Error + From<io::Error>;

    /// Reads nuclei and metadata from a buffered reader.
    ///
    /// # Errors
    ///
    /// Returns an error if parsing fails or the reader fails.
    fn read_from(
        &self,
        reader: &mut impl BufRead,
    ) -> Result<(Vec<Nucleus>, Self::Metadata), Self::Error>;

    /// Writes nuclei and metadata to a writer.
    ///
    /// # Errors
    ///
    /// Returns an error if writing fails.
    fn write_to(
        &self,
        nuclei: &[Nucleus],
        metadata: &Self::Metadata,
        writer: &mut impl Write,
    ) -> Result<(), Self::Error>;

    /// Reads nuclei and metadata from a file path.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be opened or parsing fails.
    fn read_from_path<P: AsRef<Path>>(
        &self,
        path: P,
    ) -> Result<(Vec<Nucleus>, Self::Metadata), Self::Error> {
        let file = File::open(path)?;
        let mut reader = BufReader::new(file);
        self.read_from(&mut reader)
    }

    /// Writes nuclei and metadata to a file path, creating or truncating the file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be created or writing fails.
    fn write_to_path<P: AsRef<Path>>(
        &self,
        nuclei: &[Nucleus],
        metadata: &Self::Metadata,
        path: P,
    ) -> Result<(), Self::Error> {
        let file = File::create(path)?;
        let mut writer = BufWriter::new(file);
        self.write_to(nuclei, metadata, &mut writer)?;
        writer.flush()?;
        Ok(())
    }
}
