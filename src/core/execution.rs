//! # Test Execution Engine Module / 测试执行引擎模块
//!
//! This module runs discovered test cases one after another and collects
//! their results. A failing or unlaunchable test never stops the run.
//!
//! 此模块依次运行已发现的测试用例并收集结果。
//! 失败或无法启动的测试永远不会中止整个运行。
//!
//! There is no timeout: a test process that never exits blocks the run.

use anyhow::Result;
use colored::*;
use std::time::Instant;

use crate::{
    core::{
        config::RunConfiguration,
        discovery::discover_tests,
        models::{FailureReason, RunResult, TestCase, TestResult},
    },
    infra::{command, fs, t},
};

/// Runs every test found under the configured root, sequentially.
///
/// The report directory is created before the first test starts. Setup
/// errors (unreadable root, report directory that cannot be created) are
/// returned as errors; per-test problems end up in the `RunResult`.
///
/// # Arguments
/// * `config` - The run configuration
/// * `locale` - The language locale to use for messages
///
/// # Returns
/// The per-test results in visiting order
pub async fn run_suite(config: &RunConfiguration, locale: &str) -> Result<RunResult> {
    if let Some(report_dir) = &config.report_directory {
        fs::ensure_report_dir(report_dir)?;
    }

    let cases = discover_tests(&config.root_directory, config.platform)?;

    let mut run_result = RunResult::default();
    for case in cases {
        let result = if case.exists() {
            run_test_case(case, config, locale).await
        } else {
            TestResult::Skipped { case }
        };
        run_result.push(result);
    }
    Ok(run_result)
}

/// Runs a single test executable and classifies the outcome.
/// A launch failure is reported as `FailureReason::LaunchFailed`, not as an error.
///
/// 运行单个测试可执行文件并对结果进行分类。
/// 启动失败会报告为 `FailureReason::LaunchFailed`，而不是错误。
pub async fn run_test_case(case: TestCase, config: &RunConfiguration, locale: &str) -> TestResult {
    println!(
        "{}",
        t!("run.running_test", locale = locale, name = &case.name).blue()
    );

    let cmd = command::build_test_command(&case.executable_path, &case.name, config);
    let command_log = format!(
        "{} {}\n",
        t!("run.command_prefix", locale = locale).blue(),
        render_command_line(&cmd)
    );

    let start_time = Instant::now();
    let (status_res, output) = command::spawn_and_capture(cmd).await;
    let duration = start_time.elapsed();

    let status = match status_res {
        Ok(status) => status,
        Err(e) => {
            println!(
                "{}",
                t!(
                    "run.test_launch_failed",
                    locale = locale,
                    name = &case.name,
                    error = &e
                )
                .red()
            );
            return TestResult::Failed {
                case,
                output: format!("{command_log}{e}\n"),
                reason: FailureReason::LaunchFailed,
                duration,
            };
        }
    };

    if !output.trim().is_empty() {
        println!("{}", output.trim_end());
    }
    let output = format!("{command_log}{output}");
    let duration_str = format!("{:.2}", duration.as_secs_f64());

    if status.success() {
        println!(
            "{}",
            t!(
                "run.test_passed",
                locale = locale,
                name = &case.name,
                duration = &duration_str
            )
            .green()
        );
        TestResult::Passed {
            case,
            output,
            duration,
        }
    } else {
        let reason = FailureReason::from_status(status);
        println!(
            "{}",
            t!(
                "run.test_failed",
                locale = locale,
                name = &case.name,
                duration = &duration_str,
                status = reason.describe(locale)
            )
            .red()
        );
        TestResult::Failed {
            case,
            output,
            reason,
            duration,
        }
    }
}

/// Renders the program and its arguments for the log line.
fn render_command_line(cmd: &tokio::process::Command) -> String {
    let std_cmd = cmd.as_std();
    std::iter::once(std_cmd.get_program())
        .chain(std_cmd.get_args())
        .map(|part| part.to_string_lossy().into_owned())
        .collect::<Vec<_>>()
        .join(" ")
}
