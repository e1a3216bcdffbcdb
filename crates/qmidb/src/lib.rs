//! qmidb - QMI data dictionary schema compiler.
//!
//! This crate provides a unified interface to the qmidb crates for turning
//! the exported QMI dictionary tables into C declarations.
//!
//! # Crates
//!
//! - [`qmidb_common`] - Column reading and number parsing
//! - [`qmidb_dictionary`] - Table loading, schema assembly, validation and export
//!
//! # Example
//!
//! ```no_run
//! use qmidb::prelude::*;
//!
//! let dictionary = Dictionary::open("data")?;
//! println!("{}", dictionary.counts());
//!
//! let schema = dictionary.into_schema();
//! let header = CHeaderExporter::new(&schema).export_all();
//! std::fs::write("qmi-dict.h", header)?;
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

// Re-export all sub-crates
pub use qmidb_common as common;
pub use qmidb_dictionary as dictionary;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use qmidb_common::LineReader;
    pub use qmidb_dictionary::{
        validate, CHeaderExporter, Diagnostic, Dictionary, EmitOptions, Schema, SchemaBuilder,
        TableCounts,
    };
}

/// Version information.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
