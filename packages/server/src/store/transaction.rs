use std::future::Future;
use std::pin::Pin;

use sea_orm::{DatabaseConnection, DatabaseTransaction, TransactionTrait};

use super::{StoreError, is_connection_error};

/// Boxed body of a transaction, borrowing the transaction for its lifetime.
pub type TxnFuture<'c, T> = Pin<Box<dyn Future<Output = Result<T, StoreError>> + Send + 'c>>;

/// Run `body` inside `BEGIN .. COMMIT` on a connection borrowed from the pool.
///
/// On `Ok` the transaction commits; on `Err` it is rolled back. A statement
/// failure inside the body is reported as [`StoreError::TransactionFailure`],
/// other body errors are returned unchanged. If the rollback itself fails, the
/// body's error becomes the cause of a [`StoreError::RollbackFailure`].
/// Dropping an open `DatabaseTransaction` also rolls it back, so the connection
/// goes back to the pool on a panic or cancellation inside `body`.
pub async fn run_in_transaction<T, F>(db: &DatabaseConnection, body: F) -> Result<T, StoreError>
where
    T: Send,
    F: for<'c> FnOnce(&'c DatabaseTransaction) -> TxnFuture<'c, T> + Send,
{
    let txn = db.begin().await.map_err(StoreError::ConnectionFailure)?;

    match body(&txn).await {
        Ok(value) => {
            txn.commit().await.map_err(|err| {
                if is_connection_error(&err) {
                    StoreError::ConnectionFailure(err)
                } else {
                    StoreError::TransactionFailure(err)
                }
            })?;
            Ok(value)
        }
        Err(err) => {
            let err = match err {
                StoreError::QueryFailure(db_err) => StoreError::TransactionFailure(db_err),
                other => other,
            };
            match txn.rollback().await {
                Ok(()) => Err(err),
                Err(rollback) => Err(StoreError::RollbackFailure {
                    cause: Box::new(err),
                    rollback,
                }),
            }
        }
    }
}
