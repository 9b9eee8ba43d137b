//! 数据存储层
//!
//! 存储抽象只暴露四类原语：点查、按码查询、批量存在性查询、带版本提交。
//! 事务语义由 [`run_class_transaction`] 在原语之上实现：
//! 每次尝试重新读取快照，业务闭包在快照上做判定和修改，
//! 提交时校验版本，冲突则整体重跑闭包（乐观并发）。

use crate::errors::{ClassEnrollError, Result};
use crate::models::classes::entities::ClassRecord;

pub mod memory;

pub use memory::MemoryStorage;

/// 事务提交的最大尝试次数，超出按暂时性故障处理
const TXN_MAX_ATTEMPTS: u32 = 5;

/// 带提交版本的班级记录快照
#[derive(Debug, Clone)]
pub struct VersionedClass {
    pub version: u64,
    pub record: ClassRecord,
}

/// 带版本提交的结果
#[derive(Debug, Clone)]
pub enum CommitOutcome {
    /// 提交成功，携带存储层赋值 updated_at 后的记录
    Committed(ClassRecord),
    /// 版本不匹配，读取快照后记录已被其他事务修改
    Conflict,
    /// 记录不存在
    Missing,
}

#[async_trait::async_trait]
pub trait ClassStore: Send + Sync {
    // 创建班级，由存储层分配 ID 与时间戳
    async fn create_class(&self, record: ClassRecord) -> Result<ClassRecord>;
    // 通过ID获取班级快照（含提交版本）
    async fn get_class_by_id(&self, class_id: &str) -> Result<Option<VersionedClass>>;
    // 通过加入码获取班级（仅限活跃班级）
    async fn get_active_class_by_code(&self, code: &str) -> Result<Option<ClassRecord>>;
    // 批量存在性查询：返回候选码中已被活跃班级占用的那些（单次往返）
    async fn find_active_codes_in(&self, candidates: &[String]) -> Result<Vec<String>>;
    // 带版本提交：expected_version 不匹配时返回 Conflict，不做任何写入
    async fn commit_class(
        &self,
        class_id: &str,
        expected_version: u64,
        record: ClassRecord,
    ) -> Result<CommitOutcome>;
    // 单字段盲写：更新加入码（无跨字段不变量，无需事务）
    async fn update_enrollment_code(
        &self,
        class_id: &str,
        code: &str,
    ) -> Result<Option<ClassRecord>>;
}

/// 对单个班级记录执行读-改-写事务
///
/// `body` 在每次尝试中收到最新快照的可变副本：
/// - 返回 `Ok(true)` 表示需要写入，修改后的记录随版本校验一起提交；
/// - 返回 `Ok(false)` 表示只读结束，事务以快照原样成功返回（幂等空操作）；
/// - 返回 `Err` 表示业务性中止，立即向上传播，不触发重试。
///
/// 提交遇到版本冲突时整个 `body` 会针对新快照重跑，
/// 因此 `body` 不得包含外部副作用。
pub async fn run_class_transaction<F>(
    store: &dyn ClassStore,
    class_id: &str,
    mut body: F,
) -> Result<ClassRecord>
where
    F: FnMut(&mut ClassRecord) -> Result<bool>,
{
    for _attempt in 0..TXN_MAX_ATTEMPTS {
        // 事务内按 ID 重新读取，拿到一致性快照
        let snapshot = match store.get_class_by_id(class_id).await? {
            Some(versioned) => versioned,
            None => {
                return Err(ClassEnrollError::not_found(format!(
                    "class no longer exists: {class_id}"
                )));
            }
        };

        let mut record = snapshot.record.clone();
        if !body(&mut record)? {
            // 只读结束，没有写入需要提交
            return Ok(snapshot.record);
        }

        match store
            .commit_class(class_id, snapshot.version, record)
            .await?
        {
            CommitOutcome::Committed(committed) => return Ok(committed),
            CommitOutcome::Conflict => continue,
            CommitOutcome::Missing => {
                return Err(ClassEnrollError::not_found(format!(
                    "class no longer exists: {class_id}"
                )));
            }
        }
    }

    Err(ClassEnrollError::store_unavailable(format!(
        "transaction on class {class_id} aborted after {TXN_MAX_ATTEMPTS} conflicting attempts"
    )))
}
