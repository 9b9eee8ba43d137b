//! 加入码分配器
//!
//! 每轮批量生成候选码并用一次查询检查占用情况，
//! 轮数耗尽后回退到时间戳编码的确定性码，保证分配必然终止。
//! 分配器本身不写存储，持久化由调用方完成。

use std::sync::Arc;

use rand::Rng;
use tracing::debug;

use crate::config::AppConfig;
use crate::errors::Result;
use crate::storage::ClassStore;

/// 加入码字母表：数字去掉 0/1，大写字母去掉 I/O，共 32 个无歧义字符
pub const CODE_ALPHABET: &[u8; 32] = b"23456789ABCDEFGHJKLMNPQRSTUVWXYZ";

/// 加入码固定长度（协议常量）
pub const CODE_LENGTH: usize = 6;

pub struct CodeAllocator {
    storage: Arc<dyn ClassStore>,
    batch_size: usize,
    max_rounds: usize,
}

impl CodeAllocator {
    pub fn new(storage: Arc<dyn ClassStore>) -> Self {
        let enrollment = &AppConfig::get().enrollment;
        Self::with_params(
            storage,
            enrollment.code_batch_size,
            enrollment.code_max_rounds,
        )
    }

    pub fn with_params(storage: Arc<dyn ClassStore>, batch_size: usize, max_rounds: usize) -> Self {
        Self {
            storage,
            batch_size: batch_size.max(1),
            max_rounds,
        }
    }

    /// 分配一个当前未被任何活跃班级占用的加入码
    pub async fn allocate(&self) -> Result<String> {
        for _round in 0..self.max_rounds {
            let batch: Vec<String> = (0..self.batch_size).map(|_| random_code()).collect();
            // 整批一次往返查询，而不是逐个候选查询
            let taken = self.storage.find_active_codes_in(&batch).await?;
            if let Some(code) = batch.into_iter().find(|code| !taken.contains(code)) {
                return Ok(code);
            }
        }

        debug!("Random code rounds exhausted, falling back to timestamp-derived code");
        Ok(fallback_code(chrono::Utc::now()))
    }
}

/// 用线程本地 CSPRNG 生成一个候选码
fn random_code() -> String {
    let mut rng = rand::rng();
    (0..CODE_LENGTH)
        .map(|_| CODE_ALPHABET[rng.random_range(0..CODE_ALPHABET.len())] as char)
        .collect()
}

/// 时间戳回退码：微秒级 Unix 时间按 32 进制编码，取低 CODE_LENGTH 位
///
/// 低位变化最快，同一微秒内发生两次回退才可能重码；
/// 该残余风险按设计接受，不再回查存储。
fn fallback_code(now: chrono::DateTime<chrono::Utc>) -> String {
    let mut value = now.timestamp_micros() as u64;
    let mut buf = [0u8; CODE_LENGTH];
    for slot in buf.iter_mut().rev() {
        *slot = CODE_ALPHABET[(value % CODE_ALPHABET.len() as u64) as usize];
        value /= CODE_ALPHABET.len() as u64;
    }
    buf.iter().map(|b| *b as char).collect()
}
