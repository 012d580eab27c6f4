//! # Data Models Module / 数据模型模块
//!
//! This module defines the data structures shared by discovery, execution and
//! reporting: the discovered test case, the outcome of running it, and the
//! aggregate result of a whole run.
//!
//! 此模块定义了发现、执行和报告之间共享的数据结构：
//! 已发现的测试用例、运行结果以及整个运行的汇总结果。

use crate::infra::t;
use std::fmt;
use std::path::PathBuf;
use std::process::ExitStatus;
use std::time::Duration;

/// A test subdirectory and the executable expected inside it.
/// 一个测试子目录及其中预期的可执行文件。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TestCase {
    /// The subdirectory name, which is also the test name.
    /// 子目录名称，同时也是测试名称。
    pub name: String,
    /// Full path of the platform-specific executable.
    /// 平台相关可执行文件的完整路径。
    pub executable_path: PathBuf,
}

impl TestCase {
    pub fn new(name: impl Into<String>, executable_path: impl Into<PathBuf>) -> Self {
        Self {
            name: name.into(),
            executable_path: executable_path.into(),
        }
    }

    /// Whether the expected executable is present on disk.
    /// Computed on every call; nothing is cached.
    pub fn exists(&self) -> bool {
        self.executable_path.is_file()
    }
}

/// Why a test case counts as failed.
/// 测试用例被判定为失败的原因。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureReason {
    /// The process ran and exited unsuccessfully. Holds the exit code, or
    /// `None` when it was terminated by a signal.
    /// 进程运行后以失败状态退出。保存退出码；若被信号终止则为 `None`。
    ExitStatus(Option<i32>),
    /// The process could not be spawned or waited on.
    /// 进程无法启动或无法等待其结束。
    LaunchFailed,
}

impl FailureReason {
    pub fn from_status(status: ExitStatus) -> Self {
        FailureReason::ExitStatus(status.code())
    }

    /// Short localized description, e.g. "exit code 3".
    pub fn describe(&self, locale: &str) -> String {
        match self {
            FailureReason::ExitStatus(Some(code)) => {
                t!("run.exit_code", locale = locale, code = code).to_string()
            }
            FailureReason::ExitStatus(None) => t!("run.killed_by_signal", locale = locale).to_string(),
            FailureReason::LaunchFailed => t!("report.status_launch_failed", locale = locale).to_string(),
        }
    }
}

/// Represents the final result of a single test case.
///
/// 表示单个测试用例的最终结果。
#[derive(Debug, Clone)]
pub enum TestResult {
    /// The executable exited with status 0.
    /// 可执行文件以状态 0 退出。
    Passed {
        case: TestCase,
        /// Combined stdout and stderr / 合并后的 stdout 和 stderr
        output: String,
        duration: Duration,
    },
    /// The executable failed or could not be launched.
    /// 可执行文件运行失败或无法启动。
    Failed {
        case: TestCase,
        output: String,
        reason: FailureReason,
        duration: Duration,
    },
    /// The subdirectory holds no matching executable. Never a failure.
    /// 子目录中没有匹配的可执行文件。永远不算失败。
    Skipped { case: TestCase },
}

impl TestResult {
    pub fn case(&self) -> &TestCase {
        match self {
            TestResult::Passed { case, .. }
            | TestResult::Failed { case, .. }
            | TestResult::Skipped { case } => case,
        }
    }

    pub fn case_name(&self) -> &str {
        &self.case().name
    }

    pub fn is_failure(&self) -> bool {
        matches!(self, TestResult::Failed { .. })
    }

    pub fn is_skipped(&self) -> bool {
        matches!(self, TestResult::Skipped { .. })
    }

    /// Gets the status of the test result as a string for display.
    /// 以字符串形式获取测试结果的状态以供显示。
    pub fn get_status_str(&self, locale: &str) -> String {
        match self {
            TestResult::Passed { .. } => t!("report.status_passed", locale = locale).to_string(),
            TestResult::Failed { reason: FailureReason::LaunchFailed, .. } => {
                t!("report.status_launch_failed", locale = locale).to_string()
            }
            TestResult::Failed { .. } => t!("report.status_failed", locale = locale).to_string(),
            TestResult::Skipped { .. } => t!("report.status_skipped", locale = locale).to_string(),
        }
    }

    /// Captured output. Empty for skipped cases.
    pub fn get_output(&self) -> &str {
        match self {
            TestResult::Passed { output, .. } | TestResult::Failed { output, .. } => output,
            TestResult::Skipped { .. } => "",
        }
    }

    /// Gets the duration of the test case. Returns None if it never ran.
    /// 获取测试用例的持续时间。如果未运行则返回 None。
    pub fn get_duration(&self) -> Option<Duration> {
        match self {
            TestResult::Passed { duration, .. } | TestResult::Failed { duration, .. } => Some(*duration),
            TestResult::Skipped { .. } => None,
        }
    }
}

impl fmt::Display for TestResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TestResult::Passed { case, .. } => write!(f, "{}: passed", case.name),
            TestResult::Failed { case, reason, .. } => write!(f, "{}: failed ({:?})", case.name, reason),
            TestResult::Skipped { case } => write!(f, "{}: skipped", case.name),
        }
    }
}

/// Aggregate outcome of a whole run, in visiting order.
/// 整个运行的汇总结果，按访问顺序排列。
#[derive(Debug, Clone, Default)]
pub struct RunResult {
    pub results: Vec<TestResult>,
}

impl RunResult {
    pub fn push(&mut self, result: TestResult) {
        self.results.push(result);
    }

    /// True iff at least one invoked test failed. Skipped cases never count.
    /// 当且仅当至少一个已运行的测试失败时为真。跳过的用例永不计入。
    pub fn any_failed(&self) -> bool {
        self.results.iter().any(TestResult::is_failure)
    }

    pub fn passed_count(&self) -> usize {
        self.results
            .iter()
            .filter(|r| matches!(r, TestResult::Passed { .. }))
            .count()
    }

    pub fn failed_count(&self) -> usize {
        self.results.iter().filter(|r| r.is_failure()).count()
    }

    pub fn skipped_count(&self) -> usize {
        self.results.iter().filter(|r| r.is_skipped()).count()
    }

    pub fn failures(&self) -> Vec<&TestResult> {
        self.results.iter().filter(|r| r.is_failure()).collect()
    }

    /// Number of cases whose executable was actually invoked.
    pub fn executed_count(&self) -> usize {
        self.results.len() - self.skipped_count()
    }
}
