//! # auger-dialect
//!
//! The static Apache Drill dialect descriptor: everything the host
//! configuration system needs to know about the engine before a single
//! query runs. Column-definition text generation, connection URL
//! construction, identifier quoting, reserved words, and the
//! system-table set. Pure and deterministic throughout; no I/O.
//!
//! The interception layer that fixes the engine's driver at query time
//! lives in `auger-shim`; this crate only describes the engine.

mod descriptor;
mod drill;

pub use descriptor::{AccessMode, ColumnDescriptor, DialectPlugin, SemanticType};
pub use drill::{DrillDialect, LARGE_OBJECT_LENGTH};

/// Engine-specific metadata and SQL-text-generation rules, consumed by
/// the host at connection-configuration time.
///
/// Defaults are conservative: engines opt in to what they support.
pub trait DatabaseDialect: Send + Sync {
    /// Registration metadata identifying this dialect to the host.
    fn plugin(&self) -> DialectPlugin;

    /// The engine's default port, when it has one.
    fn default_port(&self) -> Option<u16> {
        None
    }

    /// The access modes the host may use to reach the engine.
    fn access_modes(&self) -> &'static [AccessMode];

    /// Registry identifier of the driver implementation satisfying the
    /// delegate surface, resolved once at startup.
    fn driver_id(&self) -> &'static str;

    /// Builds a connection URL from host, port, and schema. Absent or
    /// empty segments are omitted.
    fn url(&self, host: &str, port: Option<&str>, schema: Option<&str>) -> String;

    /// The opening identifier-quote sequence.
    fn start_quote(&self) -> &'static str {
        "\""
    }

    /// The closing identifier-quote sequence.
    fn end_quote(&self) -> &'static str {
        "\""
    }

    /// Words that must be quoted when used as identifiers.
    fn reserved_words(&self) -> &'static [&'static str] {
        &[]
    }

    /// Returns whether the named table belongs to the engine itself.
    fn is_system_table(&self, table: &str) -> bool {
        let _ = table;
        false
    }

    /// Returns whether the engine has a native boolean column type.
    fn supports_boolean_type(&self) -> bool {
        false
    }

    /// Builds the column-definition fragment for a generic column
    /// descriptor.
    ///
    /// `technical_key` and `primary_key` name the columns that must be
    /// generated as auto-increment keys; the match is
    /// case-insensitive. `add_field_name` prepends `"{name} "` and
    /// `add_newline` appends a line terminator.
    fn field_definition(
        &self,
        column: &ColumnDescriptor,
        technical_key: &str,
        primary_key: &str,
        add_field_name: bool,
        add_newline: bool,
    ) -> String;

    /// DDL for adding a column to an existing table, when the engine
    /// supports it.
    fn add_column_statement(&self, table: &str, column: &ColumnDescriptor) -> Option<String> {
        let _ = (table, column);
        None
    }

    /// DDL for modifying an existing column, when the engine supports
    /// it.
    fn modify_column_statement(&self, table: &str, column: &ColumnDescriptor) -> Option<String> {
        let _ = (table, column);
        None
    }
}
