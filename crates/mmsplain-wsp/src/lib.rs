//! # mmsplain-wsp
//!
//! Decoder for MMS messages in their WAP-WSP binary encoding
//! (WAP-230-WSP, OMA MMS Encapsulation), with a MIME-like plain-text
//! renderer.
//!
//! ## Features
//!
//! - **Primitives**: every WSP value encoding the MMS header uses, from
//!   Uintvar-integers to Content-type-values with typed parameters
//! - **Header decoding**: field-by-field up to the terminating `Content-Type`
//! - **Body decoding**: multipart bodies with per-part headers and payloads
//! - **Lookups**: code-to-name tables behind the [`Lookup`] trait, with the
//!   standard assignments built in
//! - **Charsets**: encoded strings in non-UTF-8 charsets are converted
//!   through the [`Transcode`] trait
//! - **Diagnostics**: malformed input is recorded as [`DecodeWarning`]s
//!   instead of aborting the decode
//!
//! ## Quick Start
//!
//! ```ignore
//! use mmsplain_wsp::{CodeTables, Env, LabelTranscoder, decode};
//!
//! let tables = CodeTables::wsp_defaults();
//! let env = Env::new(&tables, &LabelTranscoder);
//!
//! let decoded = decode(&env, &std::fs::read("message.mms")?)?;
//! for warning in &decoded.warnings {
//!     eprintln!("{warning}");
//! }
//! std::io::stdout().write_all(&decoded.document.to_plain(true))?;
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![forbid(unsafe_code)]

mod charset;
mod cursor;
mod decode;
mod error;
mod lookup;
mod model;
mod warning;

pub mod body;
pub mod header;
pub mod names;
pub mod plain;
pub mod primitive;

pub use charset::{LabelTranscoder, Transcode, is_passthrough};
pub use cursor::Cursor;
pub use decode::{Decoded, decode};
pub use error::{Error, Result};
pub use lookup::{CodeTables, Lookup, Table};
pub use model::{Document, Field, Part, RETRIEVE_CONF};
pub use primitive::{Env, Parsed};
pub use warning::{DecodeWarning, WarningKind, Warnings};
