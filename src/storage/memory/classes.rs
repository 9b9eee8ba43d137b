//! 班级存储操作

use dashmap::mapref::entry::Entry;

use super::{MemoryStorage, StoredClass};
use crate::errors::Result;
use crate::models::classes::entities::ClassRecord;
use crate::storage::{CommitOutcome, VersionedClass};

impl MemoryStorage {
    /// 创建班级，分配 ID 与时间戳
    pub(crate) async fn create_class_impl(&self, mut record: ClassRecord) -> Result<ClassRecord> {
        let now = chrono::Utc::now();
        record.id = uuid::Uuid::new_v4().to_string();
        record.created_at = now;
        record.updated_at = now;

        self.classes.insert(
            record.id.clone(),
            StoredClass {
                version: 1,
                record: record.clone(),
            },
        );

        Ok(record)
    }

    /// 通过 ID 获取班级快照
    pub(crate) async fn get_class_by_id_impl(
        &self,
        class_id: &str,
    ) -> Result<Option<VersionedClass>> {
        Ok(self.classes.get(class_id).map(|stored| VersionedClass {
            version: stored.version,
            record: stored.record.clone(),
        }))
    }

    /// 通过加入码获取活跃班级
    pub(crate) async fn get_active_class_by_code_impl(
        &self,
        code: &str,
    ) -> Result<Option<ClassRecord>> {
        Ok(self
            .classes
            .iter()
            .find(|stored| stored.record.is_active && stored.record.enrollment_code == code)
            .map(|stored| stored.record.clone()))
    }

    /// 批量存在性查询：候选码中已被活跃班级占用的部分
    pub(crate) async fn find_active_codes_in_impl(
        &self,
        candidates: &[String],
    ) -> Result<Vec<String>> {
        Ok(self
            .classes
            .iter()
            .filter(|stored| {
                stored.record.is_active
                    && candidates.contains(&stored.record.enrollment_code)
            })
            .map(|stored| stored.record.enrollment_code.clone())
            .collect())
    }

    /// 带版本提交
    ///
    /// entry API 持有分片锁直到比对与写入完成，期间没有其他写者可以插队。
    pub(crate) async fn commit_class_impl(
        &self,
        class_id: &str,
        expected_version: u64,
        mut record: ClassRecord,
    ) -> Result<CommitOutcome> {
        match self.classes.entry(class_id.to_string()) {
            Entry::Occupied(mut entry) => {
                if entry.get().version != expected_version {
                    return Ok(CommitOutcome::Conflict);
                }
                // updated_at 由存储层在提交时赋值
                record.updated_at = chrono::Utc::now();
                entry.insert(StoredClass {
                    version: expected_version + 1,
                    record: record.clone(),
                });
                Ok(CommitOutcome::Committed(record))
            }
            Entry::Vacant(_) => Ok(CommitOutcome::Missing),
        }
    }

    /// 更新加入码（单字段盲写）
    pub(crate) async fn update_enrollment_code_impl(
        &self,
        class_id: &str,
        code: &str,
    ) -> Result<Option<ClassRecord>> {
        match self.classes.entry(class_id.to_string()) {
            Entry::Occupied(mut entry) => {
                let stored = entry.get_mut();
                stored.record.enrollment_code = code.to_string();
                stored.record.updated_at = chrono::Utc::now();
                stored.version += 1;
                Ok(Some(stored.record.clone()))
            }
            Entry::Vacant(_) => Ok(None),
        }
    }
}
