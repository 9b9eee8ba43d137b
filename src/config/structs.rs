use serde::{Deserialize, Serialize};

/// 应用配置结构体
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    pub app: AppSettings,
    pub enrollment: EnrollmentConfig,
    pub retry: RetryConfig,
}

/// 应用设置
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppSettings {
    pub system_name: String,
    pub environment: String,
    pub log_level: String,
}

/// 加入码配置
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EnrollmentConfig {
    pub code_batch_size: usize, // 每轮生成的候选码数量（单次批量查询）
    pub code_max_rounds: usize, // 随机生成的最大轮数，超出走时间戳回退
}

/// 写重试配置
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RetryConfig {
    pub max_attempts: u32,       // 最大尝试次数
    pub initial_backoff_ms: u64, // 首次重试延迟 (毫秒)
    pub max_backoff_ms: u64,     // 单次延迟上限 (毫秒)
}
