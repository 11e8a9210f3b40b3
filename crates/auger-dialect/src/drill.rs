//! The Apache Drill dialect.

use crate::descriptor::{AccessMode, ColumnDescriptor, DialectPlugin, SemanticType};
use crate::DatabaseDialect;

/// String columns at or beyond this length become an unbounded `TEXT`
/// column rather than a bounded `VARCHAR`.
pub const LARGE_OBJECT_LENGTH: u32 = 9_999_999;

const SYSTEM_TABLES: &[&str] = &[
    "CATALOGS",
    "COLUMNS",
    "SCHEMATA",
    "TABLES",
    "VIEWS",
    "boot",
    "drillbits",
    "memory",
    "options",
    "threads",
    "version",
];

/// Dialect descriptor for Apache Drill.
#[derive(Debug, Clone, Copy, Default)]
pub struct DrillDialect;

impl DrillDialect {
    /// Creates a new Drill dialect.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

/// Picks the numeric column form. The technical/primary key check runs
/// first: a key column is always the auto-increment big integer, no
/// matter what length or precision says.
fn numeric_definition(
    column: &ColumnDescriptor,
    technical_key: &str,
    primary_key: &str,
) -> String {
    if column.name.eq_ignore_ascii_case(technical_key)
        || column.name.eq_ignore_ascii_case(primary_key)
    {
        return "BIGSERIAL".to_string();
    }
    match column.length {
        Some(length) if length > 0 => {
            let precision = column.precision.unwrap_or(0);
            if precision > 0 || length > 18 {
                // NUMERIC(precision, scale): precision is the total
                // length, scale the decimal places.
                format!("NUMERIC({}, {})", length + precision, precision)
            } else if length > 9 {
                "BIGINT".to_string()
            } else if length < 5 {
                "SMALLINT".to_string()
            } else {
                "INTEGER".to_string()
            }
        }
        _ => "DOUBLE PRECISION".to_string(),
    }
}

impl DatabaseDialect for DrillDialect {
    fn plugin(&self) -> DialectPlugin {
        DialectPlugin {
            id: "drill".to_string(),
            display_name: "Apache Drill".to_string(),
        }
    }

    fn access_modes(&self) -> &'static [AccessMode] {
        &[AccessMode::Native, AccessMode::Directory]
    }

    fn driver_id(&self) -> &'static str {
        "auger_shim::ShimDriver"
    }

    fn url(&self, host: &str, port: Option<&str>, schema: Option<&str>) -> String {
        let mut url = format!("jdbc:drill:zk={host}");
        if let Some(port) = port.filter(|p| !p.is_empty()) {
            url.push(':');
            url.push_str(port);
        }
        if let Some(schema) = schema.filter(|s| !s.is_empty()) {
            url.push_str(";schema=");
            url.push_str(schema);
        }
        url
    }

    fn start_quote(&self) -> &'static str {
        "`"
    }

    fn end_quote(&self) -> &'static str {
        "`"
    }

    fn reserved_words(&self) -> &'static [&'static str] {
        &["TABLES"]
    }

    fn is_system_table(&self, table: &str) -> bool {
        SYSTEM_TABLES.contains(&table)
    }

    fn field_definition(
        &self,
        column: &ColumnDescriptor,
        technical_key: &str,
        primary_key: &str,
        add_field_name: bool,
        add_newline: bool,
    ) -> String {
        let mut definition = String::new();
        if add_field_name {
            definition.push_str(&column.name);
            definition.push(' ');
        }

        let body = match column.semantic_type {
            SemanticType::Date => "TIMESTAMP".to_string(),
            SemanticType::Boolean => {
                if self.supports_boolean_type() {
                    "BOOLEAN".to_string()
                } else {
                    "CHAR(1)".to_string()
                }
            }
            SemanticType::Number | SemanticType::Integer | SemanticType::BigNumber => {
                numeric_definition(column, technical_key, primary_key)
            }
            SemanticType::String => match column.length {
                Some(length) if length > 0 && length < LARGE_OBJECT_LENGTH => {
                    format!("VARCHAR({length})")
                }
                _ => "TEXT".to_string(),
            },
            SemanticType::Binary => "UNKNOWN".to_string(),
        };
        definition.push_str(&body);

        if add_newline {
            definition.push('\n');
        }
        definition
    }
}
