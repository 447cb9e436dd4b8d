//! Persistence for the media lists and avatar assignments.
//!
//! Stores take the pool handle at construction and never log or retry: every
//! failure is returned to the caller as a [`StoreError`], and multi-statement
//! operations either commit fully or leave the database untouched.

pub mod avatar;
pub mod media_list;
pub mod transaction;

use sea_orm::{DbErr, RuntimeErr, SqlErr, sqlx};
use thiserror::Error;

pub use avatar::AvatarAssignmentStore;
pub use media_list::MediaListStore;
pub use transaction::run_in_transaction;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("not found: {0}")]
    NotFound(String),

    #[error("constraint violation: {0}")]
    ConstraintViolation(String),

    /// A single statement outside any transaction failed.
    #[error("query failed: {0}")]
    QueryFailure(#[source] DbErr),

    /// A statement failed before its transaction committed; nothing was applied.
    #[error("transaction failed: {0}")]
    TransactionFailure(#[source] DbErr),

    /// The pool had no connection to give, or the connection was lost mid-operation.
    #[error("connection failed: {0}")]
    ConnectionFailure(#[source] DbErr),

    /// The transaction body failed and the rollback issued after it failed too.
    #[error("{cause}; rollback failed: {rollback}")]
    RollbackFailure {
        cause: Box<StoreError>,
        #[source]
        rollback: DbErr,
    },
}

impl StoreError {
    /// Whether the caller can report this as a client-side problem (404/409)
    /// rather than an infrastructure failure.
    pub fn is_business(&self) -> bool {
        matches!(self, Self::NotFound(_) | Self::ConstraintViolation(_))
    }
}

impl From<DbErr> for StoreError {
    fn from(err: DbErr) -> Self {
        match err.sql_err() {
            Some(SqlErr::UniqueConstraintViolation(detail))
            | Some(SqlErr::ForeignKeyConstraintViolation(detail)) => {
                return StoreError::ConstraintViolation(detail);
            }
            _ => {}
        }

        if is_connection_error(&err) {
            StoreError::ConnectionFailure(err)
        } else {
            StoreError::QueryFailure(err)
        }
    }
}

/// Pool exhaustion, a closed pool, or a socket/TLS failure on the wire.
pub(crate) fn is_connection_error(err: &DbErr) -> bool {
    match err {
        DbErr::ConnectionAcquire(_) | DbErr::Conn(_) => true,
        DbErr::Query(RuntimeErr::SqlxError(e)) | DbErr::Exec(RuntimeErr::SqlxError(e)) => {
            matches!(
                e.as_ref(),
                sqlx::Error::Io(_)
                    | sqlx::Error::Tls(_)
                    | sqlx::Error::PoolClosed
                    | sqlx::Error::PoolTimedOut
                    | sqlx::Error::WorkerCrashed
            )
        }
        _ => false,
    }
}
