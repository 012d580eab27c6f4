//! # Platform Conventions Module / 平台约定模块
//!
//! Pure functions describing where a test executable lives inside its test
//! subdirectory and which environment variable the dynamic loader reads,
//! for each supported platform family.
//!
//! 描述各平台上测试可执行文件在测试子目录中的位置，
//! 以及动态链接器读取的环境变量名称的纯函数。

use std::ffi::{OsStr, OsString};
use std::fmt;
use std::path::PathBuf;

/// Prefix shared by every test executable name.
pub const EXECUTABLE_PREFIX: &str = "tst_";

/// The platform families that lay out test executables differently.
/// 以不同方式布局测试可执行文件的平台族。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Platform {
    /// Executables are application bundles: `tst_x.app/Contents/MacOS/tst_x`.
    MacOs,
    /// Executables carry the `.exe` suffix.
    Windows,
    /// Bare executable name.
    Other,
}

impl Platform {
    /// The platform this binary was compiled for.
    /// 编译此二进制文件时的目标平台。
    pub fn current() -> Self {
        if cfg!(target_os = "macos") {
            Platform::MacOs
        } else if cfg!(windows) {
            Platform::Windows
        } else {
            Platform::Other
        }
    }

    /// Path of the test executable for `test_name`, relative to its test
    /// subdirectory. The name is used byte for byte.
    ///
    /// 测试 `test_name` 的可执行文件路径，相对于其测试子目录。
    ///
    /// ```
    /// use runtests::core::platform::Platform;
    /// use std::path::Path;
    ///
    /// assert_eq!(
    ///     Platform::MacOs.executable_relative_path("message"),
    ///     Path::new("tst_message.app/Contents/MacOS/tst_message")
    /// );
    /// assert_eq!(Platform::Windows.executable_relative_path("message"), Path::new("tst_message.exe"));
    /// assert_eq!(Platform::Other.executable_relative_path("message"), Path::new("tst_message"));
    /// ```
    pub fn executable_relative_path(self, test_name: impl AsRef<OsStr>) -> PathBuf {
        let mut stem = OsString::from(EXECUTABLE_PREFIX);
        stem.push(test_name);
        match self {
            Platform::MacOs => {
                let mut bundle = stem.clone();
                bundle.push(".app");
                PathBuf::from(bundle).join("Contents").join("MacOS").join(stem)
            }
            Platform::Windows => {
                stem.push(".exe");
                PathBuf::from(stem)
            }
            Platform::Other => PathBuf::from(stem),
        }
    }

    /// Name of the variable the dynamic loader searches for shared libraries.
    pub fn library_path_var(self) -> &'static str {
        match self {
            Platform::MacOs => "DYLD_LIBRARY_PATH",
            Platform::Windows | Platform::Other => "LD_LIBRARY_PATH",
        }
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let tag = match self {
            Platform::MacOs => "macos",
            Platform::Windows => "windows",
            Platform::Other => "other",
        };
        f.write_str(tag)
    }
}
