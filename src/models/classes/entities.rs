use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClassRecord {
    // 班级ID（创建时由存储层分配，之后不可变）
    pub id: String,
    // 班级名称
    pub class_name: String,
    // 班级描述
    pub description: Option<String>,
    // 教师ID（创建后不可变）
    pub teacher_id: String,
    // 加入码（仅在活跃班级间唯一，可由教师重新生成）
    pub enrollment_code: String,
    // 已加入学生ID集合（只允许事务层修改）
    pub student_ids: Vec<String>,
    // 班级人数上限（None 表示不限制）
    pub max_students: Option<u32>,
    // 是否活跃（归档置 false，记录不做物理删除）
    pub is_active: bool,
    // 创建时间
    pub created_at: chrono::DateTime<chrono::Utc>,
    // 更新时间（每次提交由存储层赋值，不使用调用方时钟）
    pub updated_at: chrono::DateTime<chrono::Utc>,
}

impl ClassRecord {
    /// 是否已达到人数上限
    pub fn is_full(&self) -> bool {
        match self.max_students {
            Some(max) => self.student_ids.len() >= max as usize,
            None => false,
        }
    }

    /// 学生是否已在班级中
    pub fn has_student(&self, student_id: &str) -> bool {
        self.student_ids.iter().any(|id| id == student_id)
    }
}
