//! # Run Configuration Module / 运行配置模块
//!
//! The immutable settings for one invocation of the runner, built once from
//! the command line.
//!
//! 运行器单次调用的不可变设置，由命令行一次性构建。

use std::path::{Path, PathBuf};

use crate::core::platform::Platform;

/// Settings for a single run. Never mutated after construction.
/// 单次运行的设置。构建后不再修改。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunConfiguration {
    /// Directory whose immediate subdirectories are the test cases.
    /// 其直接子目录即为测试用例的目录。
    pub root_directory: PathBuf,
    /// Where XUnit reports go. `None` means tests run without report arguments.
    /// XUnit 报告的输出目录。`None` 表示运行测试时不传递报告参数。
    pub report_directory: Option<PathBuf>,
    /// Platform used to resolve executable names and the loader variable.
    pub platform: Platform,
}

impl RunConfiguration {
    pub fn new(root_directory: impl Into<PathBuf>, report_directory: Option<PathBuf>) -> Self {
        Self {
            root_directory: root_directory.into(),
            report_directory,
            platform: Platform::current(),
        }
    }

    /// The build-output directory holding the shared libraries the tests link
    /// against: `<root>/../src`.
    pub fn library_directory(&self) -> PathBuf {
        self.root_directory.join("..").join("src")
    }

    /// Report file for `test_name`, if a report directory is configured.
    /// 若配置了报告目录，返回 `test_name` 的报告文件路径。
    pub fn report_path(&self, test_name: &str) -> Option<PathBuf> {
        self.report_directory
            .as_deref()
            .map(|dir| report_file(dir, test_name))
    }
}

fn report_file(dir: &Path, test_name: &str) -> PathBuf {
    dir.join(format!("{test_name}.xml"))
}
