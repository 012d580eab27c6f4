//! # Command Execution Module / 命令执行模块
//!
//! Builds the child-process command for a test executable and runs it with
//! its stdout and stderr captured.
//!
//! 为测试可执行文件构建子进程命令，并在捕获其 stdout 和 stderr 的同时运行它。

use std::ffi::OsString;
use std::path::Path;
use std::process::{ExitStatus, Stdio};
use std::sync::Arc;
use tokio::io::{AsyncBufReadExt, AsyncRead, BufReader};
use tokio::process::Command;

use crate::core::config::RunConfiguration;

/// Arguments asking a test executable to write an XUnit report to `report_path`.
/// 要求测试可执行文件将 XUnit 报告写入 `report_path` 的参数。
pub fn report_args(report_path: &Path) -> Vec<OsString> {
    vec![
        OsString::from("-xunitxml"),
        OsString::from("-o"),
        report_path.as_os_str().to_owned(),
    ]
}

/// The explicit environment entries passed to every test process.
/// Only the library search path is set; the rest is inherited unchanged.
///
/// 传递给每个测试进程的显式环境变量。
/// 仅设置库搜索路径，其余变量原样继承。
pub fn child_env(config: &RunConfiguration) -> Vec<(&'static str, OsString)> {
    vec![(
        config.platform.library_path_var(),
        config.library_directory().into_os_string(),
    )]
}

/// Creates the command that runs one test executable.
///
/// # Arguments
/// * `executable` - The test binary
/// * `test_name` - Used to name the report file
/// * `config` - The run configuration
pub fn build_test_command(executable: &Path, test_name: &str, config: &RunConfiguration) -> Command {
    let mut cmd = Command::new(executable);
    if let Some(report_path) = config.report_path(test_name) {
        cmd.args(report_args(&report_path));
    }
    cmd.envs(child_env(config)).kill_on_drop(true);
    cmd
}

/// Spawns a command, captures its stdout and stderr.
/// The output streams are read concurrently and combined into a single string.
///
/// # Arguments
/// * `cmd` - The `tokio::process::Command` to execute.
///
/// # Returns
/// A tuple containing:
/// - The `ExitStatus` of the process wrapped in an `io::Result`. A spawn error
///   is returned here too, with empty output.
/// - The combined stdout and stderr as a `String`.
///
/// 派生一个命令，捕获其 stdout 和 stderr。
/// 输出流被并发读取并合并到一个字符串中。
pub async fn spawn_and_capture(mut cmd: Command) -> (std::io::Result<ExitStatus>, String) {
    cmd.stdout(Stdio::piped()).stderr(Stdio::piped());

    let mut child = match cmd.spawn() {
        Ok(child) => child,
        Err(e) => return (Err(e), String::new()),
    };

    let stdout = child.stdout.take();
    let stderr = child.stderr.take();

    // stdout and stderr tasks append to the same buffer.
    // stdout 和 stderr 任务写入同一个缓冲区。
    let output = Arc::new(tokio::sync::Mutex::new(String::new()));

    let stdout_handle = tokio::spawn(collect_output(stdout, Arc::clone(&output)));
    let stderr_handle = tokio::spawn(collect_output(stderr, Arc::clone(&output)));

    let status = child.wait().await;

    // Drain both readers so no trailing output is lost.
    // 等待两个读取任务完成，确保不丢失末尾输出。
    if let Err(e) = stdout_handle.await {
        eprintln!("Failed to join stdout task: {}", e);
    }
    if let Err(e) = stderr_handle.await {
        eprintln!("Failed to join stderr task: {}", e);
    }

    let captured = output.lock().await.clone();
    (status, captured)
}

/// Appends every line read from `pipe` to `output` until end of file.
/// Lines are read as raw bytes and decoded lossily, so output that is not
/// valid UTF-8 never stops the reader. The pipe is always read to EOF.
///
/// 将从 `pipe` 读取的每一行追加到 `output`，直到文件结束。
/// 按原始字节读取并有损解码，非 UTF-8 输出不会使读取中断。
async fn collect_output<R>(pipe: Option<R>, output: Arc<tokio::sync::Mutex<String>>)
where
    R: AsyncRead + Unpin,
{
    let Some(pipe) = pipe else {
        return;
    };
    let mut reader = BufReader::new(pipe);
    let mut line = Vec::new();
    loop {
        line.clear();
        match reader.read_until(b'\n', &mut line).await {
            Ok(0) => break,
            Ok(_) => {
                let text = String::from_utf8_lossy(&line);
                let mut output = output.lock().await;
                output.push_str(text.trim_end_matches(['\r', '\n']));
                output.push('\n');
            }
            Err(e) => {
                eprintln!("Failed to read child output: {}", e);
                break;
            }
        }
    }
}
