// src/shared/db/store_fault.rs
use sea_orm::{DbErr, RuntimeErr};

/// PostgreSQL SQLSTATE codes the adapters care about.
pub mod sqlstate {
    pub const UNDEFINED_TABLE: &str = "42P01";
    pub const NOT_NULL_VIOLATION: &str = "23502";
    pub const FOREIGN_KEY_VIOLATION: &str = "23503";
    pub const UNIQUE_VIOLATION: &str = "23505";
    pub const CHECK_VIOLATION: &str = "23514";
}

/// Store-level fault, classified from the SQLSTATE the driver reports.
///
/// Adapters translate this into their own port error so callers can tell
/// "the table is gone" apart from "a constraint rejected the row" without
/// looking at message text.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StoreFault {
    #[error("Relation does not exist: {0}")]
    TableMissing(String),

    #[error("Unique constraint violated: {0}")]
    UniqueViolation(String),

    #[error("Constraint violated: {0}")]
    ConstraintViolation(String),

    #[error("Database error: {0}")]
    Other(String),
}

impl StoreFault {
    pub fn from_sqlstate(code: Option<&str>, message: String) -> Self {
        match code {
            Some(sqlstate::UNDEFINED_TABLE) => StoreFault::TableMissing(message),
            Some(sqlstate::UNIQUE_VIOLATION) => StoreFault::UniqueViolation(message),
            Some(
                sqlstate::NOT_NULL_VIOLATION
                | sqlstate::FOREIGN_KEY_VIOLATION
                | sqlstate::CHECK_VIOLATION,
            ) => StoreFault::ConstraintViolation(message),
            _ => StoreFault::Other(message),
        }
    }

    pub fn is_table_missing(&self) -> bool {
        matches!(self, StoreFault::TableMissing(_))
    }
}

impl From<&DbErr> for StoreFault {
    fn from(err: &DbErr) -> Self {
        let code = sqlstate_of(err);
        StoreFault::from_sqlstate(code.as_deref(), err.to_string())
    }
}

impl From<DbErr> for StoreFault {
    fn from(err: DbErr) -> Self {
        StoreFault::from(&err)
    }
}

fn sqlstate_of(err: &DbErr) -> Option<String> {
    let runtime = match err {
        DbErr::Conn(e) | DbErr::Exec(e) | DbErr::Query(e) => e,
        _ => return None,
    };

    match runtime {
        RuntimeErr::SqlxError(e) => database_code(e),
        _ => None,
    }
}

fn database_code(err: &sqlx::Error) -> Option<String> {
    err.as_database_error()
        .and_then(|db_err| db_err.code())
        .map(|code| code.into_owned())
}
