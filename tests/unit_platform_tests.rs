//! # Platform Module Unit Tests / Platform 模块单元测试
//!
//! Executable naming and loader variable for every platform family.
//!
//! 各平台族的可执行文件命名规则和动态链接器变量。

use runtests::core::platform::{EXECUTABLE_PREFIX, Platform};
use std::path::Path;

#[cfg(test)]
mod executable_path_tests {
    use super::*;

    #[test]
    fn test_macos_uses_application_bundle() {
        let path = Platform::MacOs.executable_relative_path("qxmppmessage");
        assert_eq!(
            path,
            Path::new("tst_qxmppmessage.app")
                .join("Contents")
                .join("MacOS")
                .join("tst_qxmppmessage")
        );
    }

    #[test]
    fn test_windows_appends_exe_suffix() {
        let path = Platform::Windows.executable_relative_path("qxmppmessage");
        assert_eq!(path, Path::new("tst_qxmppmessage.exe"));
    }

    #[test]
    fn test_other_platforms_use_bare_name() {
        let path = Platform::Other.executable_relative_path("qxmppmessage");
        assert_eq!(path, Path::new("tst_qxmppmessage"));
    }

    #[test]
    fn test_every_platform_uses_prefix() {
        for platform in [Platform::MacOs, Platform::Windows, Platform::Other] {
            let path = platform.executable_relative_path("dataform");
            let first = path.components().next().unwrap();
            assert!(
                first.as_os_str().to_string_lossy().starts_with(EXECUTABLE_PREFIX),
                "{platform}: {}",
                path.display()
            );
        }
    }

    #[test]
    fn test_name_is_used_verbatim() {
        let path = Platform::Other.executable_relative_path("with-dash.and.dot");
        assert_eq!(path, Path::new("tst_with-dash.and.dot"));
    }
}

#[cfg(test)]
mod library_path_var_tests {
    use super::*;

    #[test]
    fn test_macos_uses_dyld() {
        assert_eq!(Platform::MacOs.library_path_var(), "DYLD_LIBRARY_PATH");
    }

    #[test]
    fn test_others_use_ld() {
        assert_eq!(Platform::Other.library_path_var(), "LD_LIBRARY_PATH");
        assert_eq!(Platform::Windows.library_path_var(), "LD_LIBRARY_PATH");
    }

    #[test]
    fn test_current_matches_target() {
        let current = Platform::current();
        if cfg!(target_os = "macos") {
            assert_eq!(current, Platform::MacOs);
        } else if cfg!(windows) {
            assert_eq!(current, Platform::Windows);
        } else {
            assert_eq!(current, Platform::Other);
        }
    }

    #[test]
    fn test_display_tags() {
        assert_eq!(Platform::MacOs.to_string(), "macos");
        assert_eq!(Platform::Windows.to_string(), "windows");
        assert_eq!(Platform::Other.to_string(), "other");
    }
}
