use tracing::info;

use super::ClassService;
use crate::errors::{ClassEnrollError, Result};
use crate::utils::retry_with_backoff;

/// 重新生成班级加入码
///
/// 单字段盲写，无跨字段不变量，无需事务。
/// 每次重试都会重新分配候选码，分配步骤本身没有副作用，重复执行安全。
pub async fn regenerate_code(service: &ClassService, class_id: &str) -> Result<String> {
    let updated = retry_with_backoff("regenerate_code", &service.retry_policy, || async move {
        let code = service.allocator.allocate().await?;
        match service
            .storage
            .update_enrollment_code(class_id, &code)
            .await?
        {
            Some(record) => Ok(record),
            None => Err(ClassEnrollError::not_found(format!(
                "class not found: {class_id}"
            ))),
        }
    })
    .await?;

    info!("Enrollment code regenerated for class {}", class_id);
    Ok(updated.enrollment_code)
}
