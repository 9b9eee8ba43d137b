use tracing::info;

use super::EnrollmentService;
use crate::errors::{ClassEnrollError, Result};
use crate::models::{classes::entities::ClassRecord, enrollments::requests::EnrollRequest};
use crate::storage::run_class_transaction;
use crate::utils::{validate_enrollment_code, validate_student_id};

/// 学生通过加入码加入班级
///
/// 两段式：事务外先按码解析班级（快速失败路径），
/// 事务内按 ID 重读快照再校验，防止解析与提交之间换码或归档。
pub async fn enroll(service: &EnrollmentService, request: EnrollRequest) -> Result<ClassRecord> {
    let EnrollRequest {
        enrollment_code,
        student_id,
    } = request;

    validate_student_id(&student_id).map_err(ClassEnrollError::validation)?;
    validate_enrollment_code(&enrollment_code).map_err(ClassEnrollError::validation)?;

    let class = service
        .storage
        .get_active_class_by_code(&enrollment_code)
        .await?
        .ok_or_else(|| ClassEnrollError::not_found("invalid enrollment code"))?;

    let committed = run_class_transaction(service.storage.as_ref(), &class.id, |record| {
        if !record.is_active {
            return Err(ClassEnrollError::not_found("class no longer exists"));
        }
        if record.has_student(&student_id) {
            // 重复加入不是幂等成功，明确拒绝
            return Err(ClassEnrollError::conflict("already enrolled"));
        }
        if record.is_full() {
            return Err(ClassEnrollError::capacity("class at maximum capacity"));
        }
        record.student_ids.push(student_id.clone());
        Ok(true)
    })
    .await?;

    info!(
        "Student {} enrolled in class {}",
        student_id, committed.id
    );
    Ok(committed)
}
