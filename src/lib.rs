//! # runtests Library / runtests 库
//!
//! This library provides the functionality behind the `runtests` tool, which
//! runs the `tst_<name>` executables found in the subdirectories of a test
//! root one after another and reports an aggregate exit status.
//!
//! 此库为 `runtests` 工具提供功能：依次运行测试根目录各子目录中的
//! `tst_<name>` 可执行文件，并返回汇总的退出状态。
//!
//! ## Modules / 模块
//!
//! - `core` - Data models, configuration, platform conventions, discovery and execution
//! - `infra` - Child-process execution and file system operations
//! - `reporting` - Console summary of a run
//! - `cli` - Command-line interface
//!
//! - `core` - 数据模型、配置、平台约定、测试发现与执行
//! - `infra` - 子进程执行和文件系统操作
//! - `reporting` - 运行结果的控制台摘要
//! - `cli` - 命令行接口

pub mod cli;
pub mod core;
pub mod infra;
pub mod reporting;

// Re-export commonly used items
pub use crate::core::config;
pub use crate::core::execution;
pub use crate::core::models;

/// Initializes the application's internationalization (i18n) based on the system locale.
///
/// This function detects the user's system locale and sets the appropriate
/// language for the application's user interface. It attempts to match the full
/// locale (e.g., "zh-CN"), then just the language code (e.g., "en"), and
/// finally falls back to the default language ("en").
pub fn init() {
    let locale = sys_locale::get_locale().unwrap_or_else(|| "en".to_string());
    let available_locales = rust_i18n::available_locales!();

    let lang = if available_locales.contains(&locale.as_str()) {
        &locale
    } else {
        locale
            .split('-')
            .next()
            .filter(|lang_code| available_locales.contains(lang_code))
            .unwrap_or("en")
    };

    rust_i18n::set_locale(lang);
}

rust_i18n::i18n!("locales", fallback = "en");
