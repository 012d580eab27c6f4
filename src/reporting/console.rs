//! # Console Reporting Module / 控制台报告模块
//!
//! This module handles the generation and display of test reports in the console.
//! It provides functionality for printing colorful, formatted summaries with
//! internationalization support.
//!
//! 此模块处理控制台中测试报告的生成和显示。
//! 它提供打印彩色格式化摘要的功能，支持国际化。

use colored::*;
use crate::core::models::{RunResult, TestResult};
use crate::infra::t;

/// Prints a formatted summary of test results to the console.
/// Displays one line per test with status, name and duration, using color
/// coding to highlight different statuses, followed by the totals.
///
/// 在控制台打印格式化的测试结果摘要。
/// 每个测试一行，显示状态、名称和持续时间，使用颜色编码突出显示不同的状态，
/// 最后打印总计。
///
/// # Arguments / 参数
/// * `run` - The aggregate result of the run
///           整个运行的汇总结果
/// * `locale` - The language locale to use for messages
///              用于消息的语言区域设置
///
/// # Output Format / 输出格式
/// ```text
/// --- Test Summary ---
///   - Passed           | qxmppmessage                            |     1.23s
///   - Failed           | qxmppclient                             |     0.45s  (exit code 1)
///   - Skipped          | qxmppserver                             |       N/A
/// 1 passed, 1 failed, 1 skipped
/// ```
pub fn print_summary(run: &RunResult, locale: &str) {
    println!("\n{}", t!("test_summary_banner", locale = locale).bold());

    for result in &run.results {
        let status_str = result.get_status_str(locale);
        let duration_str = result
            .get_duration()
            .map(|d| format!("{:.2?}", d))
            .unwrap_or_else(|| "N/A".to_string());

        let (status_colored, detail) = match result {
            TestResult::Passed { .. } => (status_str.green(), String::new()),
            TestResult::Failed { reason, .. } => {
                (status_str.red(), format!(" ({})", reason.describe(locale)))
            }
            TestResult::Skipped { .. } => (status_str.dimmed(), String::new()),
        };

        println!(
            "  - {:<18} | {:<40} | {:>10} {}",
            status_colored,
            result.case_name(),
            duration_str,
            detail
        );
    }

    println!(
        "{}",
        t!(
            "summary_totals",
            locale = locale,
            passed = run.passed_count(),
            failed = run.failed_count(),
            skipped = run.skipped_count()
        )
    );
}

/// Prints the captured output of every failed test, so the cause can be read
/// without scrolling back through the whole run.
///
/// 打印每个失败测试的捕获输出，无需回滚整个运行日志即可查看失败原因。
pub fn print_failure_details(failures: &[&TestResult], locale: &str) {
    if failures.is_empty() {
        return;
    }

    println!("\n{}", t!("failure_banner", locale = locale).red().bold());
    println!("{}", "-".repeat(80));

    for (i, result) in failures.iter().enumerate() {
        println!(
            "[{}/{}] {} '{}'",
            i + 1,
            failures.len(),
            t!("report_header_failure", locale = locale).red(),
            result.case_name().cyan()
        );

        let output = result.get_output();
        println!("\n--- {} ---\n", t!("test_log", locale = locale).yellow());
        if output.trim().is_empty() {
            println!("{}", t!("no_output", locale = locale).dimmed());
        } else {
            println!("{}", output.trim_end());
        }
        println!("\n{}", "-".repeat(80));
    }
}
