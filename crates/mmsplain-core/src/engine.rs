//! Conversion engine: files in, plain text out.

use std::fs;
use std::path::{Path, PathBuf};

use mmsplain_wsp::{CodeTables, Decoded, Env, LabelTranscoder};
use tracing::{info, warn};

use crate::config::EngineConfig;
use crate::error::Result;
use crate::{metadata, output};

/// Decodes MMS PDUs with one set of code tables.
#[derive(Debug, Clone)]
pub struct Engine {
    tables: CodeTables,
    transcoder: LabelTranscoder,
    include_body: bool,
}

impl Engine {
    /// Creates an engine from configuration, loading metadata if a
    /// directory is configured.
    ///
    /// # Errors
    ///
    /// Returns an error if the metadata directory is missing or holds an
    /// unreadable table file.
    pub fn new(config: &EngineConfig) -> Result<Self> {
        let tables = match &config.metadata_dir {
            Some(dir) => metadata::load_dir(dir)?,
            None => CodeTables::wsp_defaults(),
        };
        Ok(Self {
            include_body: config.include_body,
            ..Self::with_tables(tables)
        })
    }

    /// Creates an engine with the given code tables.
    #[must_use]
    pub const fn with_tables(tables: CodeTables) -> Self {
        Self {
            tables,
            transcoder: LabelTranscoder,
            include_body: true,
        }
    }

    /// The code tables in use.
    #[must_use]
    pub const fn tables(&self) -> &CodeTables {
        &self.tables
    }

    /// Decodes a PDU held in memory.
    ///
    /// # Errors
    ///
    /// Returns an error if the PDU is truncated or its header never ends.
    pub fn decode(&self, data: &[u8]) -> Result<Decoded> {
        let env = Env::new(&self.tables, &self.transcoder);
        let decoded = mmsplain_wsp::decode(&env, data)?;
        if !decoded.warnings.is_empty() {
            warn!(
                warnings = decoded.warnings.len(),
                "decoded with recoverable problems"
            );
        }
        Ok(decoded)
    }

    /// Reads and decodes a PDU file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or decoded.
    pub fn decode_file(&self, path: &Path) -> Result<Decoded> {
        let data = fs::read(path)?;
        info!(path = %path.display(), bytes = data.len(), "decoding");
        self.decode(&data)
    }

    /// Converts a PDU file to plain text, with part payloads if the engine
    /// is configured to include them.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or decoded.
    pub fn convert_to_plain(&self, input: &Path) -> Result<Vec<u8>> {
        Ok(self
            .decode_file(input)?
            .document
            .to_plain(self.include_body))
    }

    /// Converts a PDU file to a plain-text file, with part payloads if the
    /// engine is configured to include them.
    ///
    /// # Errors
    ///
    /// Returns an error if either file cannot be accessed or the input
    /// cannot be decoded.
    pub fn convert_to_plain_file(&self, input: &Path, output: &Path) -> Result<()> {
        let decoded = self.decode_file(input)?;
        output::write_plain_file(&decoded.document, output, self.include_body)
    }

    /// Converts a PDU file to a directory holding `header.txt` and one file
    /// per part payload.
    ///
    /// Returns the paths written.
    ///
    /// # Errors
    ///
    /// Returns an error if the input cannot be read or decoded, or the
    /// directory cannot be written.
    pub fn convert_to_plain_directory(&self, input: &Path, dir: &Path) -> Result<Vec<PathBuf>> {
        let decoded = self.decode_file(input)?;
        output::write_directory(&decoded.document, dir)
    }
}

impl Default for Engine {
    fn default() -> Self {
        Self::with_tables(CodeTables::wsp_defaults())
    }
}
