pub mod archive;
pub mod code_allocator;
pub mod create;
pub mod get;
pub mod regenerate_code;

use std::sync::Arc;

use crate::config::AppConfig;
use crate::errors::Result;
use crate::models::classes::{entities::ClassRecord, requests::CreateClassRequest};
use crate::storage::ClassStore;
use crate::utils::RetryPolicy;

pub use code_allocator::CodeAllocator;

pub struct ClassService {
    pub(crate) storage: Arc<dyn ClassStore>,
    pub(crate) allocator: CodeAllocator,
    pub(crate) retry_policy: RetryPolicy,
}

impl ClassService {
    pub fn new(storage: Arc<dyn ClassStore>) -> Self {
        Self {
            allocator: CodeAllocator::new(storage.clone()),
            retry_policy: RetryPolicy::from_config(&AppConfig::get().retry),
            storage,
        }
    }

    // 创建班级
    pub async fn create_class(&self, class_data: CreateClassRequest) -> Result<ClassRecord> {
        create::create_class(self, class_data).await
    }

    // 根据班级 ID 获取班级信息
    pub async fn get_class(&self, class_id: &str) -> Result<Option<ClassRecord>> {
        get::get_class(self, class_id).await
    }

    // 根据加入码获取活跃班级信息
    pub async fn get_class_by_code(&self, code: &str) -> Result<Option<ClassRecord>> {
        get::get_class_by_code(self, code).await
    }

    // 归档班级（软删除，加入码随之释放）
    pub async fn archive_class(&self, class_id: &str) -> Result<bool> {
        archive::archive_class(self, class_id).await
    }

    // 重新生成班级加入码
    pub async fn regenerate_code(&self, class_id: &str) -> Result<String> {
        regenerate_code::regenerate_code(self, class_id).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::ClassEnrollError;
    use crate::storage::MemoryStorage;
    use crate::utils::validate_enrollment_code;

    fn setup() -> ClassService {
        ClassService::new(Arc::new(MemoryStorage::new()))
    }

    fn request(name: &str) -> CreateClassRequest {
        CreateClassRequest {
            teacher_id: "teacher-1".to_string(),
            name: name.to_string(),
            description: Some("test class".to_string()),
            max_students: Some(30),
        }
    }

    #[tokio::test]
    async fn test_create_class_allocates_code() {
        let service = setup();
        let class = service.create_class(request("Algebra")).await.unwrap();

        assert!(!class.id.is_empty());
        assert!(validate_enrollment_code(&class.enrollment_code).is_ok());
        assert!(class.is_active);
        assert!(class.student_ids.is_empty());

        let by_code = service
            .get_class_by_code(&class.enrollment_code)
            .await
            .unwrap()
            .unwrap();
        assert_eq!(by_code.id, class.id);
    }

    // 唯一性：第二个码的分配会显式避开已持久化的第一个码
    #[tokio::test]
    async fn test_codes_unique_among_active_classes() {
        let service = setup();
        let first = service.create_class(request("Algebra")).await.unwrap();
        let second = service.create_class(request("Geometry")).await.unwrap();
        assert_ne!(first.enrollment_code, second.enrollment_code);
        assert_ne!(first.id, second.id);
    }

    #[tokio::test]
    async fn test_create_class_validation() {
        let service = setup();

        let mut bad = request("  ");
        let err = service.create_class(bad).await.unwrap_err();
        assert!(matches!(err, ClassEnrollError::Validation(_)));

        bad = request("Algebra");
        bad.teacher_id = "".to_string();
        let err = service.create_class(bad).await.unwrap_err();
        assert!(matches!(err, ClassEnrollError::Validation(_)));

        bad = request("Algebra");
        bad.max_students = Some(0);
        let err = service.create_class(bad).await.unwrap_err();
        assert!(matches!(err, ClassEnrollError::Validation(_)));
    }

    #[tokio::test]
    async fn test_regenerate_code_retires_old_code() {
        let service = setup();
        let class = service.create_class(request("Algebra")).await.unwrap();
        let old_code = class.enrollment_code.clone();

        let new_code = service.regenerate_code(&class.id).await.unwrap();
        assert_ne!(new_code, old_code);
        assert!(validate_enrollment_code(&new_code).is_ok());

        assert!(
            service
                .get_class_by_code(&old_code)
                .await
                .unwrap()
                .is_none()
        );
        assert!(
            service
                .get_class_by_code(&new_code)
                .await
                .unwrap()
                .is_some()
        );
    }

    #[tokio::test]
    async fn test_regenerate_code_missing_class() {
        let service = setup();
        let err = service.regenerate_code("no-such-id").await.unwrap_err();
        assert!(matches!(err, ClassEnrollError::NotFound(_)));
    }

    #[tokio::test]
    async fn test_archive_class() {
        let service = setup();
        let class = service.create_class(request("Algebra")).await.unwrap();

        assert!(service.archive_class(&class.id).await.unwrap());
        // 归档后按码不再可见，按 ID 仍可读
        assert!(
            service
                .get_class_by_code(&class.enrollment_code)
                .await
                .unwrap()
                .is_none()
        );
        let archived = service.get_class(&class.id).await.unwrap().unwrap();
        assert!(!archived.is_active);

        // 重复归档为幂等成功
        assert!(service.archive_class(&class.id).await.unwrap());
        // 不存在的班级返回 false
        assert!(!service.archive_class("no-such-id").await.unwrap());
    }
}
