//! Code-to-name lookup tables.
//!
//! The decoder never hard-codes enumerated names; it asks a [`Lookup`]
//! for the name bound to a numeric code.

mod defaults;

use std::collections::HashMap;
use std::fmt;

/// The lookup tables the decoder consults.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Table {
    /// Character sets by IANA MIBEnum.
    Charset,
    /// MMS header field names.
    HeaderField,
    /// Well-known content types.
    ContentType,
    /// Delivery-Report values.
    DeliveryReport,
    /// Message-Class identifiers.
    MessageClass,
    /// Message-Type values.
    MessageType,
    /// Priority values.
    Priority,
    /// Read-Reply values.
    ReadReply,
    /// Report-Allowed values.
    ReportAllowed,
    /// Response-Status values.
    ResponseStatus,
    /// WSP header field names used inside part headers.
    ParameterField,
    /// Well-known parameter tokens.
    ParameterWellKnown,
}

impl Table {
    /// All tables, in a stable order.
    pub const ALL: [Self; 12] = [
        Self::Charset,
        Self::HeaderField,
        Self::ContentType,
        Self::DeliveryReport,
        Self::MessageClass,
        Self::MessageType,
        Self::Priority,
        Self::ReadReply,
        Self::ReportAllowed,
        Self::ResponseStatus,
        Self::ParameterField,
        Self::ParameterWellKnown,
    ];
}

impl fmt::Display for Table {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Charset => "charset",
            Self::HeaderField => "header-field",
            Self::ContentType => "content-type",
            Self::DeliveryReport => "delivery-report",
            Self::MessageClass => "message-class",
            Self::MessageType => "message-type",
            Self::Priority => "priority",
            Self::ReadReply => "read-reply",
            Self::ReportAllowed => "report-allowed",
            Self::ResponseStatus => "response-status",
            Self::ParameterField => "parameter-field",
            Self::ParameterWellKnown => "parameter-wellknown",
        };
        f.write_str(name)
    }
}

/// Resolves numeric codes to names.
///
/// Implementations are read-only once built; `None` means the code has no
/// entry.
pub trait Lookup {
    /// Returns the name bound to `code` in `table`.
    fn find(&self, table: Table, code: u32) -> Option<&str>;
}

/// In-memory lookup tables.
#[derive(Debug, Clone, Default)]
pub struct CodeTables {
    tables: HashMap<Table, HashMap<u32, String>>,
}

impl CodeTables {
    /// Creates an empty set of tables.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates tables populated with the standard WSP and MMS assignments.
    #[must_use]
    pub fn wsp_defaults() -> Self {
        let mut tables = Self::new();
        for (table, entries) in defaults::ALL {
            for &(code, name) in *entries {
                tables.insert(*table, code, name);
            }
        }
        tables
    }

    /// Binds `name` to `code`, replacing any previous binding.
    pub fn insert(&mut self, table: Table, code: u32, name: impl Into<String>) {
        self.tables
            .entry(table)
            .or_default()
            .insert(code, name.into());
    }

    /// Replaces a whole table.
    pub fn replace(&mut self, table: Table, entries: HashMap<u32, String>) {
        self.tables.insert(table, entries);
    }

    /// Returns the number of entries in a table.
    #[must_use]
    pub fn len(&self, table: Table) -> usize {
        self.tables.get(&table).map_or(0, HashMap::len)
    }

    /// Returns true if no table has any entry.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tables.values().all(HashMap::is_empty)
    }
}

impl Lookup for CodeTables {
    fn find(&self, table: Table, code: u32) -> Option<&str> {
        self.tables
            .get(&table)
            .and_then(|entries| entries.get(&code))
            .map(String::as_str)
    }
}
