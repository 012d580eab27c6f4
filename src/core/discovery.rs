//! # Test Discovery Module / 测试发现模块
//!
//! Turns the subdirectories of the test root into `TestCase`s.
//!
//! 将测试根目录下的子目录转换为 `TestCase`。

use anyhow::Result;
use std::ffi::OsStr;
use std::path::Path;

use crate::core::{models::TestCase, platform::Platform};
use crate::infra::fs;

/// Builds the test case for the subdirectory `dir` named `name`.
/// The executable path is built from the raw directory name; only the
/// display name is converted lossily.
pub fn test_case_for(dir: &Path, name: &OsStr, platform: Platform) -> TestCase {
    TestCase::new(
        name.to_string_lossy(),
        dir.join(platform.executable_relative_path(name)),
    )
}

/// Discovers one `TestCase` per immediate subdirectory of `root`, sorted by
/// name. Cases are returned whether or not their executable exists; callers
/// check `TestCase::exists` before running.
///
/// 为 `root` 的每个直接子目录发现一个 `TestCase`，按名称排序。
/// 无论可执行文件是否存在都会返回用例；调用方在运行前检查 `TestCase::exists`。
pub fn discover_tests(root: &Path, platform: Platform) -> Result<Vec<TestCase>> {
    let cases = fs::list_subdirectories(root)?
        .into_iter()
        .map(|(name, dir)| test_case_for(&dir, &name, platform))
        .collect();
    Ok(cases)
}
