use super::ClassService;
use crate::errors::Result;
use crate::models::classes::entities::ClassRecord;

pub async fn get_class(service: &ClassService, class_id: &str) -> Result<Option<ClassRecord>> {
    Ok(service
        .storage
        .get_class_by_id(class_id)
        .await?
        .map(|versioned| versioned.record))
}

/// 按加入码查询只考虑活跃班级
pub async fn get_class_by_code(service: &ClassService, code: &str) -> Result<Option<ClassRecord>> {
    service.storage.get_active_class_by_code(code).await
}
