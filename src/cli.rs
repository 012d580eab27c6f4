//! # Command-Line Interface / 命令行接口
//!
//! Defines the command, turns arguments into a `RunConfiguration` and maps
//! the outcome of a run to a process exit code.
//!
//! 定义命令，将参数转换为 `RunConfiguration`，并将运行结果映射为进程退出码。

use clap::{Arg, ArgAction, Command, error::ErrorKind};
use std::ffi::OsString;
use std::path::PathBuf;
use std::process::ExitCode;

use crate::{core::config::RunConfiguration, infra::t};

pub mod commands;

/// No test failed.
pub const EXIT_SUCCESS: u8 = 0;
/// At least one test failed, or the run could not be set up.
pub const EXIT_FAILURE: u8 = 1;
/// The command line could not be parsed.
pub const EXIT_USAGE: u8 = 2;

pub fn build_cli(locale: &str) -> Command {
    Command::new("runtests")
        .about(t!("cli_about", locale = locale).to_string())
        .disable_help_flag(true)
        .arg(
            Arg::new("help")
                .short('h')
                .help(t!("arg_help", locale = locale).to_string())
                .action(ArgAction::Help),
        )
        .arg(
            Arg::new("report-dir")
                .short('x')
                .help(t!("arg_report_dir", locale = locale).to_string())
                .value_name("DIR")
                .value_parser(clap::value_parser!(PathBuf))
                .action(ArgAction::Set),
        )
        .arg(
            Arg::new("root")
                .help(t!("arg_root", locale = locale).to_string())
                .value_name("ROOT")
                .default_value(".")
                .value_parser(clap::value_parser!(PathBuf))
                .action(ArgAction::Set),
        )
}

/// Parses `args` (including the program name) into a run configuration.
///
/// 将 `args`（包括程序名）解析为运行配置。
pub fn parse_args_from<I, T>(args: I, locale: &str) -> Result<RunConfiguration, clap::Error>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    let matches = build_cli(locale).try_get_matches_from(args)?;

    let root = matches
        .get_one::<PathBuf>("root")
        .cloned()
        .unwrap_or_else(|| PathBuf::from("."));
    let report_dir = matches.get_one::<PathBuf>("report-dir").cloned();

    Ok(RunConfiguration::new(root, report_dir))
}

/// Entry point used by `main`: parse, run, and pick the exit code.
///
/// Help goes to stdout with exit 0. Parse errors also go to stdout, with the
/// usage line, and exit 2.
pub async fn run() -> ExitCode {
    let locale = rust_i18n::locale().to_string();

    let config = match parse_args_from(std::env::args_os(), &locale) {
        Ok(config) => config,
        Err(e) => return report_parse_error(e),
    };

    match commands::run::execute(&config, &locale).await {
        Ok(result) if result.any_failed() => ExitCode::from(EXIT_FAILURE),
        Ok(_) => ExitCode::from(EXIT_SUCCESS),
        Err(e) => {
            eprintln!("Error: {:#}", e);
            ExitCode::from(EXIT_FAILURE)
        }
    }
}

fn report_parse_error(e: clap::Error) -> ExitCode {
    match e.kind() {
        ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => {
            println!("{}", e.render());
            ExitCode::from(EXIT_SUCCESS)
        }
        _ => {
            println!("{}", e.render());
            ExitCode::from(EXIT_USAGE)
        }
    }
}
