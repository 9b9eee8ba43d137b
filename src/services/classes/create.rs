use tracing::info;

use super::ClassService;
use crate::errors::{ClassEnrollError, Result};
use crate::models::classes::{entities::ClassRecord, requests::CreateClassRequest};
use crate::utils::retry_with_backoff;

pub async fn create_class(
    service: &ClassService,
    class_data: CreateClassRequest,
) -> Result<ClassRecord> {
    // 入参校验
    let name = class_data.name.trim();
    if name.is_empty() {
        return Err(ClassEnrollError::validation("Class name must not be empty"));
    }
    if class_data.teacher_id.trim().is_empty() {
        return Err(ClassEnrollError::validation("teacher_id must not be empty"));
    }
    if class_data.max_students == Some(0) {
        return Err(ClassEnrollError::validation(
            "max_students must be greater than zero",
        ));
    }

    // 分配未被占用的加入码，持久化由下面的创建操作完成
    let enrollment_code = service.allocator.allocate().await?;

    let record = ClassRecord {
        // ID 与时间戳由存储层在创建时赋值
        id: String::new(),
        class_name: name.to_string(),
        description: class_data.description,
        teacher_id: class_data.teacher_id.clone(),
        enrollment_code,
        student_ids: vec![],
        max_students: class_data.max_students,
        is_active: true,
        created_at: chrono::Utc::now(),
        updated_at: chrono::Utc::now(),
    };

    let created = retry_with_backoff("create_class", &service.retry_policy, || {
        let record = record.clone();
        let storage = service.storage.clone();
        async move { storage.create_class(record).await }
    })
    .await?;

    info!(
        "Class {} created successfully by {}",
        created.class_name, created.teacher_id
    );
    Ok(created)
}
