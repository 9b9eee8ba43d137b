//! 写路径的有界指数退避重试
//!
//! 只对 `is_retryable()` 的错误（暂时性存储故障）重试，
//! 业务校验错误立即向上传播，重试不会改变确定性结果。

use std::future::Future;
use std::time::Duration;

use tracing::warn;

use crate::config::RetryConfig;
use crate::errors::Result;

/// 重试策略
#[derive(Debug, Clone)]
pub struct RetryPolicy {
    pub max_attempts: u32,
    pub initial_backoff: Duration,
    pub max_backoff: Duration,
}

impl RetryPolicy {
    pub fn from_config(config: &RetryConfig) -> Self {
        Self {
            max_attempts: config.max_attempts.max(1),
            initial_backoff: Duration::from_millis(config.initial_backoff_ms),
            max_backoff: Duration::from_millis(config.max_backoff_ms),
        }
    }
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            max_attempts: 5,
            initial_backoff: Duration::from_millis(500),
            max_backoff: Duration::from_secs(3),
        }
    }
}

/// 对异步操作执行有界退避重试
///
/// 延迟从 `initial_backoff` 起每次翻倍，封顶 `max_backoff`；
/// 每次重试记录操作名、尝试序号与触发错误；
/// 尝试耗尽后返回最后一次的底层错误。
pub async fn retry_with_backoff<T, F, Fut>(
    op_name: &str,
    policy: &RetryPolicy,
    mut operation: F,
) -> Result<T>
where
    F: FnMut() -> Fut,
    Fut: Future<Output = Result<T>>,
{
    let mut delay = policy.initial_backoff;
    let mut attempt = 1u32;

    loop {
        match operation().await {
            Ok(value) => return Ok(value),
            Err(e) if e.is_retryable() && attempt < policy.max_attempts => {
                warn!(
                    operation = op_name,
                    attempt,
                    error = %e,
                    "Transient store error, retrying after backoff"
                );
                tokio::time::sleep(delay).await;
                delay = (delay * 2).min(policy.max_backoff);
                attempt += 1;
            }
            Err(e) => return Err(e),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::ClassEnrollError;
    use std::sync::atomic::{AtomicU32, Ordering};

    fn fast_policy(max_attempts: u32) -> RetryPolicy {
        RetryPolicy {
            max_attempts,
            initial_backoff: Duration::from_millis(1),
            max_backoff: Duration::from_millis(4),
        }
    }

    #[tokio::test]
    async fn test_succeeds_after_transient_failures() {
        let calls = AtomicU32::new(0);
        let result = retry_with_backoff("test_op", &fast_policy(5), || {
            let n = calls.fetch_add(1, Ordering::SeqCst);
            async move {
                if n < 2 {
                    Err(ClassEnrollError::store_unavailable("flaky"))
                } else {
                    Ok(42)
                }
            }
        })
        .await;

        assert_eq!(result.unwrap(), 42);
        assert_eq!(calls.load(Ordering::SeqCst), 3);
    }

    #[tokio::test]
    async fn test_validation_errors_never_retried() {
        let calls = AtomicU32::new(0);
        let result: Result<()> = retry_with_backoff("test_op", &fast_policy(5), || {
            calls.fetch_add(1, Ordering::SeqCst);
            async { Err(ClassEnrollError::capacity("class at maximum capacity")) }
        })
        .await;

        assert_eq!(result.unwrap_err().code(), "E003");
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_exhaustion_returns_last_error() {
        let calls = AtomicU32::new(0);
        let result: Result<()> = retry_with_backoff("test_op", &fast_policy(3), || {
            let n = calls.fetch_add(1, Ordering::SeqCst);
            async move { Err(ClassEnrollError::store_unavailable(format!("outage {n}"))) }
        })
        .await;

        let err = result.unwrap_err();
        assert_eq!(err.code(), "E004");
        assert!(err.message().contains("outage 2"));
        assert_eq!(calls.load(Ordering::SeqCst), 3);
    }

    #[test]
    fn test_policy_from_config() {
        let policy = RetryPolicy::from_config(&crate::config::RetryConfig {
            max_attempts: 0,
            initial_backoff_ms: 250,
            max_backoff_ms: 1000,
        });
        // max_attempts 至少为 1
        assert_eq!(policy.max_attempts, 1);
        assert_eq!(policy.initial_backoff, Duration::from_millis(250));
        assert_eq!(policy.max_backoff, Duration::from_millis(1000));
    }
}
