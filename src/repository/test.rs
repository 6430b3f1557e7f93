use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;

use crate::domain::category::Category;
use crate::repository::{CategoryRepository, RepositoryError, RepositoryResult, UnitOfWork};

/// Simple in-memory repository used for unit tests.
///
/// Records every insert and commit, and can be told to fail either call to
/// exercise propagation paths.
#[derive(Default)]
pub struct TestRepository {
    categories: Mutex<Vec<Category>>,
    commits: AtomicUsize,
    fail_insert: Option<RepositoryError>,
    fail_commit: Option<RepositoryError>,
}

impl TestRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_failing_insert(mut self, error: RepositoryError) -> Self {
        self.fail_insert = Some(error);
        self
    }

    pub fn with_failing_commit(mut self, error: RepositoryError) -> Self {
        self.fail_commit = Some(error);
        self
    }

    /// Categories received through [`CategoryRepository::insert`].
    pub fn inserted(&self) -> Vec<Category> {
        self.categories.lock().unwrap().clone()
    }

    pub fn commit_count(&self) -> usize {
        self.commits.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl CategoryRepository for TestRepository {
    async fn insert(&self, category: &Category) -> RepositoryResult<()> {
        if let Some(error) = &self.fail_insert {
            return Err(error.clone());
        }
        self.categories.lock().unwrap().push(category.clone());
        Ok(())
    }
}

#[async_trait]
impl UnitOfWork for TestRepository {
    async fn commit(&self) -> RepositoryResult<()> {
        if let Some(error) = &self.fail_commit {
            return Err(error.clone());
        }
        self.commits.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }
}
