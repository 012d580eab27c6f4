//! # Command Module Unit Tests / Command 模块单元测试
//!
//! Tests for building the test command line and environment, and for
//! `spawn_and_capture`.
//!
//! 测试命令行与环境变量的构建，以及 `spawn_and_capture`。

use runtests::core::config::RunConfiguration;
use runtests::infra::command::{build_test_command, child_env, report_args, spawn_and_capture};
use std::ffi::{OsStr, OsString};
use std::path::{Path, PathBuf};
use tokio::process::Command;

fn args_of(cmd: &Command) -> Vec<OsString> {
    cmd.as_std().get_args().map(OsStr::to_owned).collect()
}

#[cfg(test)]
mod build_command_tests {
    use super::*;

    #[test]
    fn test_report_args_are_exact() {
        let args = report_args(Path::new("reports/qxmppiq.xml"));
        assert_eq!(
            args,
            vec![
                OsString::from("-xunitxml"),
                OsString::from("-o"),
                OsString::from("reports/qxmppiq.xml"),
            ]
        );
    }

    #[test]
    fn test_no_arguments_without_report_dir() {
        let config = RunConfiguration::new("tests", None);
        let cmd = build_test_command(Path::new("tests/iq/tst_iq"), "iq", &config);
        assert!(args_of(&cmd).is_empty());
        assert_eq!(cmd.as_std().get_program(), OsStr::new("tests/iq/tst_iq"));
    }

    #[test]
    fn test_report_arguments_with_report_dir() {
        let config = RunConfiguration::new("tests", Some(PathBuf::from("reports")));
        let cmd = build_test_command(Path::new("tests/iq/tst_iq"), "iq", &config);
        let expected_report = Path::new("reports").join("iq.xml");
        assert_eq!(
            args_of(&cmd),
            vec![
                OsString::from("-xunitxml"),
                OsString::from("-o"),
                expected_report.into_os_string(),
            ]
        );
    }

    #[test]
    fn test_library_path_is_passed_per_command() {
        let config = RunConfiguration::new("build/tests", None);
        let var = config.platform.library_path_var();
        let cmd = build_test_command(Path::new("tst_x"), "x", &config);

        let value = cmd
            .as_std()
            .get_envs()
            .find(|(key, _)| *key == OsStr::new(var))
            .and_then(|(_, value)| value.map(OsStr::to_owned));
        assert_eq!(value, Some(config.library_directory().into_os_string()));
    }

    #[test]
    fn test_child_env_does_not_touch_process_env() {
        let config = RunConfiguration::new("some/unique/root", None);
        let var = config.platform.library_path_var();
        let before = std::env::var_os(var);

        let env = child_env(&config);

        assert_eq!(env.len(), 1);
        assert_eq!(env[0].0, var);
        assert_eq!(std::env::var_os(var), before);
    }
}

#[cfg(all(test, unix))]
mod spawn_and_capture_tests {
    use super::*;

    #[tokio::test]
    async fn test_captures_stdout_and_stderr() {
        let mut cmd = Command::new("sh");
        cmd.arg("-c").arg("echo out; echo err 1>&2");

        let (status, output) = spawn_and_capture(cmd).await;

        assert!(status.unwrap().success());
        assert!(output.contains("out\n"));
        assert!(output.contains("err\n"));
    }

    #[tokio::test]
    async fn test_reports_non_zero_exit() {
        let mut cmd = Command::new("sh");
        cmd.arg("-c").arg("exit 7");

        let (status, output) = spawn_and_capture(cmd).await;

        assert_eq!(status.unwrap().code(), Some(7));
        assert!(output.is_empty());
    }

    #[tokio::test]
    async fn test_non_utf8_output_is_decoded_lossily() {
        let mut cmd = Command::new("sh");
        cmd.arg("-c").arg("printf 'caf\\351\\n'; echo after; exit 0");

        let (status, output) = spawn_and_capture(cmd).await;

        assert!(status.unwrap().success());
        assert_eq!(output, "caf\u{FFFD}\nafter\n");
    }

    #[tokio::test]
    async fn test_spawn_error_is_returned() {
        let cmd = Command::new("this_command_definitely_does_not_exist_12345");

        let (status, output) = spawn_and_capture(cmd).await;

        assert!(status.is_err());
        assert!(output.is_empty());
    }
}
