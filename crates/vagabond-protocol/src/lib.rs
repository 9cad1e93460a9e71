//! # vagabond-protocol
//!
//! Decoder for the output Vagrant prints when invoked with `--machine-readable`.
//!
//! Every line of that stream is one record:
//!
//! ```text
//! <timestamp>,<target>,<type>,<field1>,<field2>,...
//! ```
//!
//! `target` names the machine the record is about and is empty for global
//! records. Commas and line breaks inside a field are escaped by Vagrant so
//! that one record always fits on one line; [`decode_line`] reverses that.
//!
//! ## Quick Start
//!
//! ```
//! use vagabond_protocol::{decode_line, kinds};
//!
//! let record = decode_line("1534347044,default,metadata,provider,virtualbox").unwrap();
//! assert_eq!(record.target, "default");
//! assert_eq!(record.kind, kinds::METADATA);
//! assert_eq!(record.fields, vec!["provider", "virtualbox"]);
//! ```
//!
//! Consumers implement [`OutputHandler`] to turn records into typed results.

mod decode;
mod escape;
mod handler;
mod record;

pub use decode::{decode_line, DecodeError, FIELD_SEPARATOR};
pub use escape::{unescape, ESCAPED_COMMA};
pub use handler::OutputHandler;
pub use record::{kinds, Record};
