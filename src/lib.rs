//! Read and change the Windows attributes (read-only, hidden, system, archive ...) of a path by
//! running PowerShell and parsing the decimal value it prints.
//!
//! ```no_run
//! use win_file_attributes::{add_attributes, has_attribute, FileAttributes, WritableAttribute};
//!
//! add_attributes(r"C:\data\report.txt", &[WritableAttribute::Hidden])?;
//! assert!(has_attribute(r"C:\data\report.txt", FileAttributes::HIDDEN)?);
//! # Ok::<(), win_file_attributes::AttributeError>(())
//! ```

#[macro_use]
extern crate num_derive;
#[macro_use]
extern crate bitflags;

pub mod attributes;
pub mod command;
pub mod config;
pub mod error;
pub mod operations;

pub use crate::attributes::{FileAttributes, ATTRIBUTES, decode_to_flags, decode_to_names};
pub use crate::attributes::writable::WritableAttribute;
pub use crate::command::{CommandRunner, ShellRunner};
pub use crate::config::ShellConfig;
pub use crate::error::{AttributeError, CommandError, Result};
pub use crate::operations::{FileAttributesManager, get_raw_attributes, get_attributes, get_attribute_names,
                            set_attributes, add_attributes, remove_attributes, has_attributes, has_attribute};
