#![allow(dead_code)]

use async_trait::async_trait;
use std::collections::BTreeMap;
use std::sync::{Arc, Mutex};

use link_library::domain::entities::{Link, LinkInput};
use link_library::domain::repositories::LinkRepository;
use link_library::error::AppError;
use link_library::state::AppState;

/// In-process stand-in for the PostgreSQL table.
///
/// Ids come from a counter that is never rewound, matching a database
/// sequence.
#[derive(Default)]
pub struct MemoryLinkRepository {
    inner: Mutex<MemoryTable>,
}

#[derive(Default)]
struct MemoryTable {
    rows: BTreeMap<i64, Link>,
    last_id: i64,
}

impl MemoryLinkRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.inner.lock().unwrap().rows.len()
    }
}

#[async_trait]
impl LinkRepository for MemoryLinkRepository {
    async fn ensure_schema(&self) -> Result<(), AppError> {
        Ok(())
    }

    async fn ping(&self) -> Result<(), AppError> {
        Ok(())
    }

    async fn list(&self) -> Result<Vec<Link>, AppError> {
        let table = self.inner.lock().unwrap();
        Ok(table.rows.values().rev().cloned().collect())
    }

    async fn create(&self, input: LinkInput) -> Result<Link, AppError> {
        let mut table = self.inner.lock().unwrap();
        table.last_id += 1;
        let link = Link::new(table.last_id, input.title().into(), input.url().into());
        table.rows.insert(link.id, link.clone());
        Ok(link)
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Link>, AppError> {
        Ok(self.inner.lock().unwrap().rows.get(&id).cloned())
    }

    async fn update(&self, id: i64, input: LinkInput) -> Result<u64, AppError> {
        let mut table = self.inner.lock().unwrap();
        match table.rows.get_mut(&id) {
            Some(link) => {
                link.title = input.title().into();
                link.url = input.url().into();
                Ok(1)
            }
            None => Ok(0),
        }
    }

    async fn delete(&self, id: i64) -> Result<u64, AppError> {
        let removed = self.inner.lock().unwrap().rows.remove(&id);
        Ok(u64::from(removed.is_some()))
    }
}

/// Repository whose every call fails like a lost connection.
pub struct BrokenLinkRepository;

fn unavailable() -> AppError {
    AppError::from(sqlx::Error::PoolTimedOut)
}

#[async_trait]
impl LinkRepository for BrokenLinkRepository {
    async fn ensure_schema(&self) -> Result<(), AppError> {
        Err(unavailable())
    }

    async fn ping(&self) -> Result<(), AppError> {
        Err(unavailable())
    }

    async fn list(&self) -> Result<Vec<Link>, AppError> {
        Err(unavailable())
    }

    async fn create(&self, _input: LinkInput) -> Result<Link, AppError> {
        Err(unavailable())
    }

    async fn find_by_id(&self, _id: i64) -> Result<Option<Link>, AppError> {
        Err(unavailable())
    }

    async fn update(&self, _id: i64, _input: LinkInput) -> Result<u64, AppError> {
        Err(unavailable())
    }

    async fn delete(&self, _id: i64) -> Result<u64, AppError> {
        Err(unavailable())
    }
}

pub fn create_test_state() -> (AppState, Arc<MemoryLinkRepository>) {
    let repo = Arc::new(MemoryLinkRepository::new());
    (AppState::new(repo.clone()), repo)
}

pub fn create_broken_state() -> AppState {
    AppState::new(Arc::new(BrokenLinkRepository))
}
