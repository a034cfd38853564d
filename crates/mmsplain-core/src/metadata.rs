//! Code tables loaded from metadata JSON files.
//!
//! A metadata directory holds one file per lookup table, each an array of
//! entries:
//!
//! ```json
//! [
//!     {"NAME": "M-Retrieve-Conf", "VALUE": 132},
//!     {"NAME": "Type", "VERSION": "1.2", "VALUE": 9}
//! ]
//! ```

use std::collections::HashMap;
use std::fs;
use std::io;
use std::path::Path;

use mmsplain_wsp::{CodeTables, Table};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use crate::error::{Error, Result};

/// One code-to-name binding in a metadata file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MetaEntry {
    /// Name bound to the code.
    #[serde(rename = "NAME")]
    pub name: String,
    /// WSP encoding version the binding belongs to, if versioned.
    #[serde(rename = "VERSION", default, skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
    /// The code.
    #[serde(rename = "VALUE")]
    pub value: u32,
}

impl MetaEntry {
    /// The name stored in `table`: parameter tables keep the version as
    /// `name,version`, other tables use the bare name.
    #[must_use]
    pub fn table_name(&self, table: Table) -> String {
        match (&self.version, table) {
            (Some(version), Table::ParameterField | Table::ParameterWellKnown) => {
                format!("{},{version}", self.name)
            }
            _ => self.name.clone(),
        }
    }
}

/// Returns the metadata file name for a table.
#[must_use]
pub const fn file_name(table: Table) -> &'static str {
    match table {
        Table::Charset => "character_sets_mibenum.json",
        Table::HeaderField => "mms_header_field.json",
        Table::ContentType => "mms_option_content_type.json",
        Table::DeliveryReport => "mms_option_delivery_report.json",
        Table::MessageClass => "mms_option_message_class.json",
        Table::MessageType => "mms_option_message_type.json",
        Table::Priority => "mms_option_priority.json",
        Table::ReadReply => "mms_option_read_reply.json",
        Table::ReportAllowed => "mms_option_report_allowed.json",
        Table::ResponseStatus => "mms_option_response_status.json",
        Table::ParameterField => "mms_param_field.json",
        Table::ParameterWellKnown => "mms_param_wellknown.json",
    }
}

/// Parses the entries of one metadata file into a table.
///
/// Later entries win when a code repeats.
///
/// # Errors
///
/// Returns an error if the text is not a JSON array of entries.
pub fn parse_table(json: &str, table: Table) -> serde_json::Result<HashMap<u32, String>> {
    let entries: Vec<MetaEntry> = serde_json::from_str(json)?;
    Ok(entries
        .iter()
        .map(|entry| (entry.value, entry.table_name(table)))
        .collect())
}

/// Loads every table from `dir`.
///
/// Tables whose file is missing keep their built-in entries.
///
/// # Errors
///
/// Returns [`Error::Config`] if `dir` is not a directory, and
/// [`Error::Metadata`] if a file cannot be read or parsed.
pub fn load_dir(dir: &Path) -> Result<CodeTables> {
    if !dir.is_dir() {
        return Err(Error::Config(format!(
            "metadata directory {} does not exist",
            dir.display()
        )));
    }

    let mut tables = CodeTables::wsp_defaults();
    let mut loaded = 0;
    for table in Table::ALL {
        let path = dir.join(file_name(table));
        let text = match fs::read_to_string(&path) {
            Ok(text) => text,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                warn!(file = %path.display(), %table, "metadata file missing, using built-in table");
                continue;
            }
            Err(e) => {
                return Err(Error::Metadata {
                    file: path,
                    message: e.to_string(),
                });
            }
        };

        let entries = parse_table(&text, table).map_err(|e| Error::Metadata {
            file: path.clone(),
            message: e.to_string(),
        })?;
        debug!(file = %path.display(), entries = entries.len(), "loaded metadata table");
        tables.replace(table, entries);
        loaded += 1;
    }

    info!(dir = %dir.display(), loaded, "metadata loaded");
    Ok(tables)
}
