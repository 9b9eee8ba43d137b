use tracing::debug;

use super::EnrollmentService;
use crate::errors::{ClassEnrollError, Result};
use crate::storage::run_class_transaction;
use crate::utils::validate_student_id;

/// 学生退出班级
///
/// 幂等：成员不在班级中时按只读空操作成功返回。
pub async fn unenroll(
    service: &EnrollmentService,
    class_id: &str,
    student_id: &str,
) -> Result<()> {
    validate_student_id(student_id).map_err(ClassEnrollError::validation)?;

    run_class_transaction(service.storage.as_ref(), class_id, |record| {
        if !record.has_student(student_id) {
            return Ok(false);
        }
        record.student_ids.retain(|id| id != student_id);
        Ok(true)
    })
    .await?;

    debug!("Student {} unenrolled from class {}", student_id, class_id);
    Ok(())
}
