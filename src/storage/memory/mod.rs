//! 内存存储实现
//!
//! 基于 DashMap 的进程内存储，按记录分片加锁，
//! `commit_class` 通过 entry API 在分片锁内完成版本比对与写入，
//! 对单条记录构成原子的 compare-and-swap。

use dashmap::DashMap;

use crate::errors::Result;
use crate::models::classes::entities::ClassRecord;

use super::{ClassStore, CommitOutcome, VersionedClass};

mod classes;

/// 存储内部的版本化记录
#[derive(Debug, Clone)]
pub(crate) struct StoredClass {
    pub version: u64,
    pub record: ClassRecord,
}

pub struct MemoryStorage {
    pub(crate) classes: DashMap<String, StoredClass>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self {
            classes: DashMap::new(),
        }
    }
}

impl Default for MemoryStorage {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait::async_trait]
impl ClassStore for MemoryStorage {
    async fn create_class(&self, record: ClassRecord) -> Result<ClassRecord> {
        self.create_class_impl(record).await
    }

    async fn get_class_by_id(&self, class_id: &str) -> Result<Option<VersionedClass>> {
        self.get_class_by_id_impl(class_id).await
    }

    async fn get_active_class_by_code(&self, code: &str) -> Result<Option<ClassRecord>> {
        self.get_active_class_by_code_impl(code).await
    }

    async fn find_active_codes_in(&self, candidates: &[String]) -> Result<Vec<String>> {
        self.find_active_codes_in_impl(candidates).await
    }

    async fn commit_class(
        &self,
        class_id: &str,
        expected_version: u64,
        record: ClassRecord,
    ) -> Result<CommitOutcome> {
        self.commit_class_impl(class_id, expected_version, record)
            .await
    }

    async fn update_enrollment_code(
        &self,
        class_id: &str,
        code: &str,
    ) -> Result<Option<ClassRecord>> {
        self.update_enrollment_code_impl(class_id, code).await
    }
}
