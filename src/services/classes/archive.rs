use tracing::info;

use super::ClassService;
use crate::errors::{ClassEnrollError, Result};
use crate::storage::run_class_transaction;

/// 归档班级：置 is_active = false，不做物理删除
///
/// 归档后按码查询不再命中该班级，其加入码可被后续分配复用。
/// 班级不存在时返回 false。
pub async fn archive_class(service: &ClassService, class_id: &str) -> Result<bool> {
    let result = run_class_transaction(service.storage.as_ref(), class_id, |record| {
        if !record.is_active {
            // 已归档，幂等空操作
            return Ok(false);
        }
        record.is_active = false;
        Ok(true)
    })
    .await;

    match result {
        Ok(_) => {
            info!("Class {} archived", class_id);
            Ok(true)
        }
        Err(ClassEnrollError::NotFound(_)) => Ok(false),
        Err(e) => Err(e),
    }
}
