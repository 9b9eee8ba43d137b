//! 统一错误处理模块
//!
//! 使用宏自动生成错误类型，支持错误代码和类型名称。

use std::fmt;

/// 定义错误类型的宏
///
/// 自动生成：
/// - enum 定义
/// - code() 方法 - 返回错误代码
/// - error_type() 方法 - 返回错误类型名称
/// - message() 方法 - 返回错误详情
/// - 便捷构造函数
macro_rules! define_classenroll_errors {
    ($(
        $variant:ident($code:literal, $type_name:literal)
    ),* $(,)?) => {
        #[derive(Debug, Clone)]
        pub enum ClassEnrollError {
            $($variant(String),)*
        }

        impl ClassEnrollError {
            /// 获取错误代码
            pub fn code(&self) -> &'static str {
                match self {
                    $(ClassEnrollError::$variant(_) => $code,)*
                }
            }

            /// 获取错误类型名称
            pub fn error_type(&self) -> &'static str {
                match self {
                    $(ClassEnrollError::$variant(_) => $type_name,)*
                }
            }

            /// 获取错误详情
            pub fn message(&self) -> &str {
                match self {
                    $(ClassEnrollError::$variant(msg) => msg,)*
                }
            }
        }

        // 生成便捷构造函数
        paste::paste! {
            impl ClassEnrollError {
                $(
                    pub fn [<$variant:snake>]<T: Into<String>>(msg: T) -> Self {
                        ClassEnrollError::$variant(msg.into())
                    }
                )*
            }
        }
    };
}

define_classenroll_errors! {
    NotFound("E001", "Resource Not Found"),
    Conflict("E002", "Enrollment Conflict"),
    Capacity("E003", "Class Capacity Exceeded"),
    StoreUnavailable("E004", "Store Unavailable"),
    Validation("E005", "Validation Error"),
    Serialization("E006", "Serialization Error"),
}

impl ClassEnrollError {
    /// 判断错误是否可重试
    ///
    /// 业务校验类错误（NotFound/Conflict/Capacity/Validation）是确定性结果，
    /// 只有暂时性的存储故障允许重试。
    pub fn is_retryable(&self) -> bool {
        matches!(self, ClassEnrollError::StoreUnavailable(_))
    }

    /// 格式化为彩色输出（用于开发环境）
    #[cfg(debug_assertions)]
    pub fn format_colored(&self) -> String {
        format!(
            "\x1b[1;31m[ERROR]\x1b[0m \x1b[33m{}\x1b[0m \x1b[31m{}\x1b[0m\n  {}",
            self.code(),
            self.error_type(),
            self.message()
        )
    }

    /// 格式化为简洁输出
    pub fn format_simple(&self) -> String {
        format!("{}: {}", self.error_type(), self.message())
    }
}

impl fmt::Display for ClassEnrollError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.format_simple())
    }
}

impl std::error::Error for ClassEnrollError {}

// 为常见的错误类型实现 From trait
impl From<serde_json::Error> for ClassEnrollError {
    fn from(err: serde_json::Error) -> Self {
        ClassEnrollError::Serialization(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, ClassEnrollError>;
