//! # Run Command Module / 运行命令模块
//!
//! This module implements the run command: it announces the configuration,
//! executes every discovered test in order and prints the summary.
//!
//! 此模块实现运行命令：打印配置信息，按顺序执行所有已发现的测试并打印摘要。

use anyhow::Result;
use colored::*;

use crate::{
    core::{config::RunConfiguration, execution::run_suite, models::RunResult},
    infra::t,
    reporting::console::{print_failure_details, print_summary},
};

/// Executes the run command with the provided configuration.
///
/// # Arguments
/// * `config` - The immutable run configuration
/// * `locale` - The language locale to use for messages
///
/// # Returns
/// The aggregate result. The caller decides the exit code from
/// `RunResult::any_failed`; an `Err` means the run could not be set up.
pub async fn execute(config: &RunConfiguration, locale: &str) -> Result<RunResult> {
    println!(
        "{}",
        t!("root_detected", locale = locale, path = config.root_directory.display())
    );
    if let Some(report_dir) = &config.report_directory {
        println!(
            "{}",
            t!("report_dir_detected", locale = locale, path = report_dir.display())
        );
    }
    println!(
        "{}",
        t!(
            "library_path_set",
            locale = locale,
            var = config.platform.library_path_var(),
            path = config.library_directory().display()
        )
        .cyan()
    );

    let result = run_suite(config, locale).await?;

    if result.executed_count() == 0 {
        println!("{}", t!("no_tests_found", locale = locale).green());
        return Ok(result);
    }

    print_summary(&result, locale);

    if result.any_failed() {
        print_failure_details(&result.failures(), locale);
        println!(
            "\n{}",
            t!("tests_failed", locale = locale, count = result.failed_count())
                .red()
                .bold()
        );
    } else {
        println!("\n{}", t!("all_tests_passed", locale = locale).green().bold());
    }

    Ok(result)
}
