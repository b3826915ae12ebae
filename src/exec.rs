//! # 执行器模块
//!
//! 定位 `atomsk` 可执行文件并以子进程方式同步调用。
//!
//! ## 设计
//! - [`Atomsk::new`] 只在构造时解析一次路径，之后句柄只读，
//!   不使用模块级全局状态
//! - 调用为全同步阻塞，不提供超时与重试，
//!   瞬时失败由调用方决定是否重试
//!
//! ## 依赖关系
//! - 被 `modes.rs`, `options.rs`, `commands/` 使用
//! - 使用 `args.rs`, `error.rs`

use crate::args::{self, Arg};
use crate::error::{AtomskError, Result};

use std::env;
use std::io;
use std::path::{Path, PathBuf};
use std::process::Command;

/// 外部工具的可执行文件名
pub const ATOMSK_EXECUTABLE: &str = "atomsk";

/// 环境变量覆盖：指向 atomsk 可执行文件的完整路径
pub const ATOMSK_PATH_ENV: &str = "ATOMSK_PATH";

/// 已解析的 Atomsk 可执行文件句柄
///
/// 路径解析一次后缓存于句柄中；解析失败则整个系统不可用。
#[derive(Debug, Clone)]
pub struct Atomsk {
    exec: PathBuf,
}

impl Atomsk {
    /// 在 PATH 中定位 atomsk 并构造句柄
    ///
    /// 若设置了 `ATOMSK_PATH` 环境变量，则优先使用其指向的路径。
    pub fn new() -> Result<Self> {
        if let Some(p) = env::var_os(ATOMSK_PATH_ENV) {
            return Self::with_executable(PathBuf::from(p));
        }
        locate_in_path(ATOMSK_EXECUTABLE).map(|exec| Self { exec })
    }

    /// 使用显式指定的可执行文件路径构造句柄
    pub fn with_executable(path: impl Into<PathBuf>) -> Result<Self> {
        let exec = path.into();
        if exec.is_file() {
            Ok(Self { exec })
        } else {
            Err(AtomskError::ExecutableNotFound {
                name: exec.display().to_string(),
            })
        }
    }

    /// 已解析的可执行文件路径
    pub fn executable(&self) -> &Path {
        &self.exec
    }

    /// 以给定参数同步调用 atomsk，返回捕获的标准输出
    ///
    /// 参数序列不包含可执行文件本身，由本方法前置。
    /// 非零退出码返回 [`AtomskError::CommandFailed`]，
    /// 附带退出码与捕获的标准错误。
    pub fn run(&self, run_args: &[Arg]) -> Result<String> {
        let tokens = args::prepare(run_args)?;

        let output = Command::new(&self.exec)
            .args(&tokens)
            .output()
            .map_err(|e| match e.kind() {
                io::ErrorKind::NotFound => AtomskError::ExecutableNotFound {
                    name: self.exec.display().to_string(),
                },
                _ => AtomskError::LaunchFailed {
                    command: self.command_line(&tokens),
                    source: e,
                },
            })?;

        if output.status.success() {
            Ok(String::from_utf8_lossy(&output.stdout).into_owned())
        } else {
            Err(AtomskError::CommandFailed {
                command: self.command_line(&tokens),
                code: output.status.code(),
                stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
            })
        }
    }

    /// 返回 atomsk 自身报告的版本信息
    pub fn version(&self) -> Result<String> {
        Ok(self.run(&[Arg::from("--version")])?.trim().to_string())
    }

    /// 完整命令行文本，用于错误诊断
    fn command_line(&self, tokens: &[String]) -> String {
        let mut line = self.exec.display().to_string();
        for t in tokens {
            line.push(' ');
            line.push_str(t);
        }
        line
    }
}

/// 在 PATH 环境变量的各目录中查找可执行文件
fn locate_in_path(name: &str) -> Result<PathBuf> {
    let not_found = || AtomskError::ExecutableNotFound {
        name: name.to_string(),
    };

    let path_var = env::var_os("PATH").ok_or_else(not_found)?;

    for dir in env::split_paths(&path_var) {
        let candidate = dir.join(name);
        if candidate.is_file() {
            return Ok(candidate);
        }
        #[cfg(windows)]
        {
            let candidate = dir.join(format!("{}.exe", name));
            if candidate.is_file() {
                return Ok(candidate);
            }
        }
    }

    Err(not_found())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_executable_is_a_configuration_error() {
        let err = Atomsk::with_executable("/nonexistent/atomsk").unwrap_err();
        assert!(matches!(err, AtomskError::ExecutableNotFound { .. }));
    }

    #[cfg(unix)]
    #[test]
    fn run_captures_stdout_on_success() {
        let tool = Atomsk::with_executable("/bin/sh").unwrap();
        let out = tool
            .run(&[Arg::from("-c"), Arg::from("echo hello")])
            .unwrap();
        assert_eq!(out.trim(), "hello");
    }

    #[cfg(unix)]
    #[test]
    fn run_surfaces_exit_code_and_stderr() {
        let tool = Atomsk::with_executable("/bin/sh").unwrap();
        let err = tool
            .run(&[Arg::from("-c"), Arg::from("echo broken >&2; exit 3")])
            .unwrap_err();
        match err {
            AtomskError::CommandFailed { code, stderr, .. } => {
                assert_eq!(code, Some(3));
                assert!(stderr.contains("broken"));
            }
            other => panic!("unexpected error: {other}"),
        }
    }
}
