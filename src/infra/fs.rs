//! # File System Operations Module / 文件系统操作模块
//!
//! This module provides the file system operations the runner needs:
//! listing test subdirectories and preparing the report directory.
//!
//! 此模块提供运行器所需的文件系统操作：
//! 列出测试子目录以及准备报告目录。

use anyhow::{Context, Result};
use std::ffi::OsString;
use std::fs;
use std::path::{Path, PathBuf};

use crate::infra::t;

/// Lists the immediate subdirectories of `root`, sorted by name.
/// Symlinks to directories count as subdirectories. Plain files and
/// dangling links are ignored. Names are returned unaltered, even when they
/// are not valid UTF-8.
///
/// 列出 `root` 的直接子目录，按名称排序。
/// 指向目录的符号链接也算作子目录。普通文件和失效链接会被忽略。
/// 名称按原样返回，即使不是有效的 UTF-8。
///
/// # Arguments
/// * `root` - The test root directory
///
/// # Returns
/// `(name, path)` pairs, or an error if `root` itself cannot be read
pub fn list_subdirectories(root: &Path) -> Result<Vec<(OsString, PathBuf)>> {
    let entries = fs::read_dir(root)
        .with_context(|| t!("root_read_failed", path = root.display()).to_string())?;

    let mut dirs: Vec<(OsString, PathBuf)> = entries
        .filter_map(|entry| entry.ok())
        .map(|entry| (entry.file_name(), entry.path()))
        .filter(|(_, path)| path.is_dir())
        .collect();

    dirs.sort_by(|a, b| a.0.cmp(&b.0));
    Ok(dirs)
}

/// Creates the report directory, and any missing parents, if it does not
/// exist yet.
///
/// # Arguments
/// * `path` - The report directory
///
/// # Returns
/// A `Result` indicating success or failure
pub fn ensure_report_dir(path: &Path) -> Result<()> {
    if path.is_dir() {
        return Ok(());
    }
    fs::create_dir_all(path)
        .with_context(|| t!("report_dir_create_failed", path = path.display()).to_string())
}
