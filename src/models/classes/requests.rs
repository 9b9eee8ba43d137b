use serde::Deserialize;

// 创建班级请求
//
// # max_students 字段说明
// - 不填写则班级人数不设上限
// - 填写后，任何已提交状态下成员数都不会超过该值
#[derive(Debug, Clone, Deserialize)]
pub struct CreateClassRequest {
    pub teacher_id: String,
    pub name: String,
    pub description: Option<String>,
    pub max_students: Option<u32>,
}
