//! Persistence ports consumed by the application services.
//!
//! The core only depends on these contracts; concrete backends (database,
//! in-memory store) implement them outside the crate. Cancelling an
//! in-flight call is done by dropping its future; keeping the store
//! consistent under cancellation is the implementation's concern.

use async_trait::async_trait;

use crate::domain::category::Category;

pub mod errors;
#[cfg(test)]
pub mod test;

pub use errors::{RepositoryError, RepositoryResult};

/// Write port for [`Category`] aggregates.
#[async_trait]
pub trait CategoryRepository {
    /// Appends the aggregate to the backing store without committing.
    async fn insert(&self, category: &Category) -> RepositoryResult<()>;
}

/// Transaction boundary over pending persistence work.
#[async_trait]
pub trait UnitOfWork {
    /// Durably finalizes every write issued since the last commit.
    async fn commit(&self) -> RepositoryResult<()>;
}
