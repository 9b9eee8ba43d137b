//! ClassEnroll - 班级注册核心
//!
//! 面向教育平台的原子化班级注册子系统：
//! 无冲突加入码分配，以及并发安全的加入/退出事务。
//!
//! # 架构
//! - `config`: 配置管理
//! - `errors`: 统一错误处理
//! - `models`: 数据模型定义
//! - `services`: 业务逻辑层（加入码分配、班级管理、注册事务）
//! - `storage`: 数据存储层（版本化 compare-and-swap 原语）
//! - `utils`: 工具函数（重试、校验）

pub mod config;
pub mod errors;
pub mod models;
pub mod services;
pub mod storage;
pub mod utils;
