use serde::Deserialize;

// 学生通过加入码加入班级的请求
#[derive(Debug, Clone, Deserialize)]
pub struct EnrollRequest {
    pub enrollment_code: String,
    pub student_id: String,
}
