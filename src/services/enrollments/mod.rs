pub mod enroll;
pub mod unenroll;

use std::sync::Arc;

use crate::errors::Result;
use crate::models::{classes::entities::ClassRecord, enrollments::requests::EnrollRequest};
use crate::storage::ClassStore;

pub struct EnrollmentService {
    pub(crate) storage: Arc<dyn ClassStore>,
}

impl EnrollmentService {
    pub fn new(storage: Arc<dyn ClassStore>) -> Self {
        Self { storage }
    }

    // 学生通过加入码加入班级
    pub async fn enroll(&self, request: EnrollRequest) -> Result<ClassRecord> {
        enroll::enroll(self, request).await
    }

    // 学生退出班级（幂等）
    pub async fn unenroll(&self, class_id: &str, student_id: &str) -> Result<()> {
        unenroll::unenroll(self, class_id, student_id).await
    }
}
