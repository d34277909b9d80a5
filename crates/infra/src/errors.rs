//! Conversions from external infrastructure errors into domain errors.

use r2d2::Error as PoolError;
use reqwest::Error as HttpError;
use rusqlite::Error as SqlError;
use zeitlog_domain::ZeitlogError;

/// Error newtype that keeps conversions on the infrastructure side and can
/// be converted back into the domain error.
#[derive(Debug)]
pub struct InfraError(pub ZeitlogError);

impl From<InfraError> for ZeitlogError {
    fn from(value: InfraError) -> Self {
        value.0
    }
}

impl From<ZeitlogError> for InfraError {
    fn from(value: ZeitlogError) -> Self {
        InfraError(value)
    }
}

impl From<SqlError> for InfraError {
    fn from(err: SqlError) -> Self {
        use rusqlite::ffi::ErrorCode;

        let mapped = match err {
            SqlError::SqliteFailure(code, maybe_message) => {
                let message = maybe_message.unwrap_or_default();
                match code.code {
                    ErrorCode::DatabaseBusy => ZeitlogError::Database("database is busy".into()),
                    ErrorCode::DatabaseLocked => {
                        ZeitlogError::Database("database is locked".into())
                    }
                    ErrorCode::ConstraintViolation => {
                        ZeitlogError::Conflict(format!("constraint violation: {message}"))
                    }
                    _ => ZeitlogError::Database(format!(
                        "sqlite failure {:?} (code {}): {message}",
                        code.code, code.extended_code
                    )),
                }
            }
            SqlError::QueryReturnedNoRows => {
                ZeitlogError::NotFound("no rows returned by query".into())
            }
            SqlError::FromSqlConversionFailure(_, _, cause) => {
                ZeitlogError::Database(format!("failed to convert sqlite value: {cause}"))
            }
            SqlError::InvalidColumnType(_, _, ty) => {
                ZeitlogError::Database(format!("invalid column type: {ty}"))
            }
            other => ZeitlogError::Database(other.to_string()),
        };
        InfraError(mapped)
    }
}

impl From<PoolError> for InfraError {
    fn from(err: PoolError) -> Self {
        InfraError(ZeitlogError::Database(format!("pool error: {err}")))
    }
}

impl From<HttpError> for InfraError {
    fn from(err: HttpError) -> Self {
        let mapped = if err.is_timeout() {
            ZeitlogError::Network("request timed out".into())
        } else if err.is_connect() {
            ZeitlogError::Network(format!("connection failed: {err}"))
        } else {
            ZeitlogError::Network(err.to_string())
        };
        InfraError(mapped)
    }
}
