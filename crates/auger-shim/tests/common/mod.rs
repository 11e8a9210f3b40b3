#![allow(dead_code)]

//! Fixture delegates with configurable holes, mimicking the Drill
//! driver builds the shim exists to paper over.

use std::sync::atomic::{AtomicBool, AtomicU32, Ordering};
use std::sync::{Arc, Mutex};

use auger_core::{
    Concurrency, Connection, CursorKind, DatabaseMetadata, Driver, DriverError, PreparedStatement,
    Result, ResultSet, RowMetadata, SqlType, SqlValue, Statement, METHOD_NOT_SUPPORTED,
};

/// The failure an incomplete driver reports for a missing operation.
pub fn unsupported() -> DriverError {
    DriverError::Engine {
        message: METHOD_NOT_SUPPORTED.to_string(),
    }
}

/// A column as described by the fake row metadata.
#[derive(Clone)]
pub struct FakeColumn {
    pub name: String,
    pub label: String,
    pub sql_type: SqlType,
}

pub fn column(name: &str, sql_type: SqlType) -> FakeColumn {
    FakeColumn {
        name: name.to_string(),
        label: name.to_string(),
        sql_type,
    }
}

#[derive(Clone)]
pub struct FakeRowMetadata {
    pub columns: Vec<FakeColumn>,
    /// When `false`, `is_signed` reports the unsupported sentinel.
    pub signedness_supported: bool,
}

impl FakeRowMetadata {
    pub fn new(columns: Vec<FakeColumn>) -> Self {
        Self {
            columns,
            signedness_supported: false,
        }
    }

    fn column(&self, index: u32) -> Result<&FakeColumn> {
        index
            .checked_sub(1)
            .and_then(|i| self.columns.get(i as usize))
            .ok_or(DriverError::InvalidColumn { index })
    }
}

impl RowMetadata for FakeRowMetadata {
    fn column_count(&self) -> Result<u32> {
        Ok(self.columns.len() as u32)
    }

    fn column_name(&self, index: u32) -> Result<String> {
        Ok(self.column(index)?.name.clone())
    }

    fn column_label(&self, index: u32) -> Result<String> {
        Ok(self.column(index)?.label.clone())
    }

    fn column_type(&self, index: u32) -> Result<SqlType> {
        Ok(self.column(index)?.sql_type)
    }

    fn column_type_name(&self, index: u32) -> Result<String> {
        Ok(format!("{:?}", self.column(index)?.sql_type))
    }

    fn is_nullable(&self, index: u32) -> Result<bool> {
        self.column(index)?;
        Ok(true)
    }

    fn is_signed(&self, index: u32) -> Result<bool> {
        if !self.signedness_supported {
            return Err(unsupported());
        }
        self.column(index)?;
        // A driver that does answer always claims unsigned, so tests
        // can tell the delegate's answer from the shim's inference.
        Ok(false)
    }
}

/// How the fake cursor's name-based lookup behaves.
#[derive(Clone, Copy, PartialEq, Eq)]
pub enum NameLookup {
    /// `get_string(name)` resolves the column itself.
    Native,
    /// `get_string(name)` raises the unsupported sentinel.
    Raises,
    /// `get_string(name)` succeeds but always reports NULL.
    ComesBackEmpty,
}

/// How the fake cursor behaves when closed.
#[derive(Clone, Copy, PartialEq, Eq)]
pub enum CloseBehavior {
    Clean,
    /// The benign double-unlock defect.
    LockState,
    /// A genuine engine failure.
    EngineFailure,
}

pub struct FakeResultSet {
    pub metadata: FakeRowMetadata,
    /// Current-row values by 1-based position.
    pub row: Vec<Option<String>>,
    pub name_lookup: NameLookup,
    pub close_behavior: CloseBehavior,
    /// When `false`, `statement()` reports the unsupported sentinel.
    pub statement_supported: bool,
    pub closed: AtomicBool,
}

impl FakeResultSet {
    pub fn new(metadata: FakeRowMetadata, row: Vec<Option<String>>) -> Self {
        Self {
            metadata,
            row,
            name_lookup: NameLookup::Native,
            close_behavior: CloseBehavior::Clean,
            statement_supported: false,
            closed: AtomicBool::new(false),
        }
    }

    pub fn empty() -> Self {
        Self::new(FakeRowMetadata::new(Vec::new()), Vec::new())
    }

    fn value_at(&self, index: u32) -> Option<String> {
        index
            .checked_sub(1)
            .and_then(|i| self.row.get(i as usize))
            .cloned()
            .flatten()
    }
}

impl ResultSet for FakeResultSet {
    fn next(&self) -> Result<bool> {
        Ok(false)
    }

    fn get_string(&self, column: &str) -> Result<Option<String>> {
        match self.name_lookup {
            NameLookup::Native => {
                let position = self
                    .metadata
                    .columns
                    .iter()
                    .position(|c| c.name == column)
                    .map(|i| i as u32 + 1);
                match position {
                    Some(index) => Ok(self.value_at(index)),
                    None => Err(DriverError::Engine {
                        message: format!("Unknown column: {column}"),
                    }),
                }
            }
            NameLookup::Raises => Err(unsupported()),
            NameLookup::ComesBackEmpty => Ok(None),
        }
    }

    fn get_string_at(&self, index: u32) -> Result<Option<String>> {
        self.metadata.column(index)?;
        Ok(self.value_at(index))
    }

    fn get_value_at(&self, index: u32) -> Result<SqlValue> {
        self.metadata.column(index)?;
        Ok(self
            .value_at(index)
            .map_or(SqlValue::Null, SqlValue::Text))
    }

    fn metadata(&self) -> Result<Arc<dyn RowMetadata>> {
        Ok(Arc::new(self.metadata.clone()))
    }

    fn cursor_kind(&self) -> Result<CursorKind> {
        // What the buggy driver claims; the shim must override it.
        Ok(CursorKind::ScrollInsensitive)
    }

    fn statement(&self) -> Result<Option<Arc<dyn Statement>>> {
        if self.statement_supported {
            Ok(None)
        } else {
            Err(unsupported())
        }
    }

    fn close(&self) -> Result<()> {
        match self.close_behavior {
            CloseBehavior::Clean => {
                self.closed.store(true, Ordering::SeqCst);
                Ok(())
            }
            CloseBehavior::LockState => Err(DriverError::LockState {
                message: "attempt to unlock lock not held by current thread".to_string(),
            }),
            CloseBehavior::EngineFailure => Err(DriverError::Engine {
                message: "cursor already released".to_string(),
            }),
        }
    }
}

pub struct FakeStatement {
    /// The currently open cursor, if an execute already ran.
    pub open_result: Option<Arc<FakeResultSet>>,
    /// When `false`, `metadata()` reports the unsupported sentinel.
    pub metadata_supported: bool,
    pub closed: AtomicBool,
}

impl FakeStatement {
    pub fn new() -> Self {
        Self {
            open_result: None,
            metadata_supported: false,
            closed: AtomicBool::new(false),
        }
    }

    pub fn with_open_result(result: Arc<FakeResultSet>) -> Self {
        Self {
            open_result: Some(result),
            ..Self::new()
        }
    }
}

impl Statement for FakeStatement {
    fn execute_query(&self, _sql: &str) -> Result<Arc<dyn ResultSet>> {
        match self.open_result.clone() {
            Some(result) => Ok(result),
            None => Ok(Arc::new(FakeResultSet::empty())),
        }
    }

    fn execute_update(&self, _sql: &str) -> Result<u64> {
        Ok(1)
    }

    fn result_set(&self) -> Result<Option<Arc<dyn ResultSet>>> {
        Ok(self.open_result.clone().map(|r| r as Arc<dyn ResultSet>))
    }

    fn metadata(&self) -> Result<Option<Arc<dyn RowMetadata>>> {
        if self.metadata_supported {
            Ok(self
                .open_result
                .as_ref()
                .map(|r| Arc::new(r.metadata.clone()) as Arc<dyn RowMetadata>))
        } else {
            Err(unsupported())
        }
    }

    fn close(&self) -> Result<()> {
        self.closed.store(true, Ordering::SeqCst);
        Ok(())
    }

    fn is_closed(&self) -> Result<bool> {
        Ok(self.closed.load(Ordering::SeqCst))
    }
}

/// A binding as the fake prepared statement recorded it.
#[derive(Debug, Clone, PartialEq)]
pub enum Binding {
    Object(SqlValue),
    Null(SqlType),
    Str(String),
    SmallInt(i16),
    Int(i32),
    BigInt(i64),
    Float(f32),
    Double(f64),
    Bool(bool),
    Byte(i8),
}

pub struct FakePreparedStatement {
    pub bindings: Mutex<Vec<(u32, Binding)>>,
    /// When `false`, the generic `set_object` path reports the
    /// unsupported sentinel.
    pub object_binding_supported: bool,
    /// When `false`, `set_null` reports the unsupported sentinel.
    pub null_binding_supported: bool,
    pub statement: FakeStatement,
}

impl FakePreparedStatement {
    pub fn new() -> Self {
        Self {
            bindings: Mutex::new(Vec::new()),
            object_binding_supported: false,
            null_binding_supported: false,
            statement: FakeStatement::new(),
        }
    }

    pub fn recorded(&self) -> Vec<(u32, Binding)> {
        self.bindings.lock().unwrap().clone()
    }

    fn record(&self, index: u32, binding: Binding) -> Result<()> {
        self.bindings.lock().unwrap().push((index, binding));
        Ok(())
    }
}

impl Statement for FakePreparedStatement {
    fn execute_query(&self, sql: &str) -> Result<Arc<dyn ResultSet>> {
        self.statement.execute_query(sql)
    }

    fn execute_update(&self, sql: &str) -> Result<u64> {
        self.statement.execute_update(sql)
    }

    fn result_set(&self) -> Result<Option<Arc<dyn ResultSet>>> {
        self.statement.result_set()
    }

    fn metadata(&self) -> Result<Option<Arc<dyn RowMetadata>>> {
        self.statement.metadata()
    }

    fn close(&self) -> Result<()> {
        self.statement.close()
    }

    fn is_closed(&self) -> Result<bool> {
        self.statement.is_closed()
    }
}

impl PreparedStatement for FakePreparedStatement {
    fn execute(&self) -> Result<Arc<dyn ResultSet>> {
        self.statement.execute_query("")
    }

    fn set_object(&self, index: u32, value: SqlValue) -> Result<()> {
        if !self.object_binding_supported {
            return Err(unsupported());
        }
        self.record(index, Binding::Object(value))
    }

    fn set_null(&self, index: u32, sql_type: SqlType) -> Result<()> {
        if !self.null_binding_supported {
            return Err(unsupported());
        }
        self.record(index, Binding::Null(sql_type))
    }

    fn set_string(&self, index: u32, value: &str) -> Result<()> {
        self.record(index, Binding::Str(value.to_string()))
    }

    fn set_smallint(&self, index: u32, value: i16) -> Result<()> {
        self.record(index, Binding::SmallInt(value))
    }

    fn set_int(&self, index: u32, value: i32) -> Result<()> {
        self.record(index, Binding::Int(value))
    }

    fn set_bigint(&self, index: u32, value: i64) -> Result<()> {
        self.record(index, Binding::BigInt(value))
    }

    fn set_float(&self, index: u32, value: f32) -> Result<()> {
        self.record(index, Binding::Float(value))
    }

    fn set_double(&self, index: u32, value: f64) -> Result<()> {
        self.record(index, Binding::Double(value))
    }

    fn set_bool(&self, index: u32, value: bool) -> Result<()> {
        self.record(index, Binding::Bool(value))
    }

    fn set_byte(&self, index: u32, value: i8) -> Result<()> {
        self.record(index, Binding::Byte(value))
    }
}

pub struct FakeMetadata {
    pub tables: Arc<FakeResultSet>,
}

impl FakeMetadata {
    pub fn new(tables: Arc<FakeResultSet>) -> Self {
        Self { tables }
    }
}

impl DatabaseMetadata for FakeMetadata {
    fn connection(&self) -> Result<Arc<dyn Connection>> {
        // The shim must answer from its back-reference, never from
        // here.
        Err(DriverError::Engine {
            message: "delegate connection() consulted".to_string(),
        })
    }

    fn identifier_quote(&self) -> Result<String> {
        // The wrong answer the fixed drivers report.
        Ok("'".to_string())
    }

    fn tables(&self, _schema: Option<&str>) -> Result<Arc<dyn ResultSet>> {
        Ok(self.tables.clone())
    }

    fn schemas(&self) -> Result<Arc<dyn ResultSet>> {
        Ok(self.tables.clone())
    }

    fn catalogs(&self) -> Result<Arc<dyn ResultSet>> {
        Ok(self.tables.clone())
    }

    fn product_name(&self) -> Result<String> {
        Ok("Apache Drill".to_string())
    }

    fn product_version(&self) -> Result<String> {
        Ok("1.2.0".to_string())
    }
}

pub struct FakeConnection {
    pub closed: AtomicBool,
    /// When `false`, zero-argument statement creation reports the
    /// unsupported sentinel.
    pub plain_statements_supported: bool,
    /// When `false`, statement creation with cursor hints reports the
    /// unsupported sentinel.
    pub hinted_statements_supported: bool,
    /// When `false`, the read-only and auto-commit settings report the
    /// unsupported sentinel.
    pub settings_supported: bool,
    /// Zero-argument statement creations observed.
    pub plain_creations: AtomicU32,
    pub statement: fn() -> FakeStatement,
    pub prepared: fn() -> FakePreparedStatement,
}

impl FakeConnection {
    pub fn new() -> Self {
        Self {
            closed: AtomicBool::new(false),
            plain_statements_supported: true,
            hinted_statements_supported: false,
            settings_supported: false,
            plain_creations: AtomicU32::new(0),
            statement: FakeStatement::new,
            prepared: FakePreparedStatement::new,
        }
    }
}

impl Connection for FakeConnection {
    fn create_statement(&self) -> Result<Arc<dyn Statement>> {
        if !self.plain_statements_supported {
            return Err(unsupported());
        }
        self.plain_creations.fetch_add(1, Ordering::SeqCst);
        Ok(Arc::new((self.statement)()))
    }

    fn create_statement_with(
        &self,
        _cursor: CursorKind,
        _concurrency: Concurrency,
    ) -> Result<Arc<dyn Statement>> {
        if !self.hinted_statements_supported {
            return Err(unsupported());
        }
        Ok(Arc::new((self.statement)()))
    }

    fn prepare_statement(&self, _sql: &str) -> Result<Arc<dyn PreparedStatement>> {
        Ok(Arc::new((self.prepared)()))
    }

    fn metadata(&self) -> Result<Arc<dyn DatabaseMetadata>> {
        Ok(Arc::new(FakeMetadata::new(Arc::new(FakeResultSet::empty()))))
    }

    fn is_read_only(&self) -> Result<bool> {
        if !self.settings_supported {
            return Err(unsupported());
        }
        // Distinguishable from the shim's corrected answer.
        Ok(true)
    }

    fn set_read_only(&self, _read_only: bool) -> Result<()> {
        if !self.settings_supported {
            return Err(unsupported());
        }
        Ok(())
    }

    fn auto_commit(&self) -> Result<bool> {
        Ok(true)
    }

    fn set_auto_commit(&self, _auto_commit: bool) -> Result<()> {
        if !self.settings_supported {
            return Err(unsupported());
        }
        Ok(())
    }

    fn commit(&self) -> Result<()> {
        Ok(())
    }

    fn rollback(&self) -> Result<()> {
        Ok(())
    }

    fn schema(&self) -> Result<Option<String>> {
        Ok(Some("dfs".to_string()))
    }

    fn set_schema(&self, _schema: &str) -> Result<()> {
        Ok(())
    }

    fn close(&self) -> Result<()> {
        self.closed.store(true, Ordering::SeqCst);
        Ok(())
    }

    fn is_closed(&self) -> Result<bool> {
        Ok(self.closed.load(Ordering::SeqCst))
    }
}

pub struct FakeDriver {
    pub connection: fn() -> FakeConnection,
}

impl FakeDriver {
    pub fn new() -> Self {
        Self {
            connection: FakeConnection::new,
        }
    }
}

impl Driver for FakeDriver {
    fn connect(&self, url: &str) -> Result<Arc<dyn Connection>> {
        if !url.starts_with("jdbc:drill:") {
            return Err(DriverError::Engine {
                message: format!("Unrecognized URL: {url}"),
            });
        }
        Ok(Arc::new((self.connection)()))
    }

    fn accepts_url(&self, url: &str) -> Result<bool> {
        Ok(url.starts_with("jdbc:drill:"))
    }

    fn version(&self) -> (u32, u32) {
        (1, 2)
    }
}
