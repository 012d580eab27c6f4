//! # Core Module / 核心模块
//!
//! This module contains the core functionality of the runner:
//! data models, run configuration, platform conventions, test discovery
//! and sequential execution.
//!
//! 此模块包含运行器的核心功能：
//! 数据模型、运行配置、平台约定、测试发现以及顺序执行。

pub mod config;
pub mod discovery;
pub mod execution;
pub mod models;
pub mod platform;

// Re-exports
pub use config::RunConfiguration;
pub use execution::run_suite;
pub use models::{RunResult, TestResult};
pub use platform::Platform;
