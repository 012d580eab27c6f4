//! # Reporting Module / 报告模块
//!
//! This module prints the end-of-run summary and the details of failed tests
//! to the console. The XUnit XML reports are written by the test executables
//! themselves.
//!
//! 此模块在控制台打印运行结束时的摘要和失败测试的详细信息。
//! XUnit XML 报告由测试可执行文件自行写入。

pub mod console;

// Re-export common reporting functions
pub use console::{print_failure_details, print_summary};
