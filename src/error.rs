//! # 统一错误处理模块
//!
//! 定义 ratomsk 的所有错误类型，使用 `thiserror` 派生。
//!
//! ## 依赖关系
//! - 被所有其他模块使用
//! - 无外部模块依赖

use thiserror::Error;

/// ratomsk 统一错误类型
#[derive(Error, Debug)]
pub enum AtomskError {
    // ─────────────────────────────────────────────────────────────
    // 配置错误（启动时致命）
    // ─────────────────────────────────────────────────────────────
    #[error("Could not find the '{name}' executable in PATH.\nPlease ensure Atomsk is installed, or set ATOMSK_PATH to the executable.")]
    ExecutableNotFound { name: String },

    // ─────────────────────────────────────────────────────────────
    // 参数错误（调用方错误，进程启动前抛出）
    // ─────────────────────────────────────────────────────────────
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("Failed to resolve path: {path}")]
    PathResolve {
        path: String,
        #[source]
        source: path_abs::Error,
    },

    // ─────────────────────────────────────────────────────────────
    // 前置条件错误（进程启动前抛出）
    // ─────────────────────────────────────────────────────────────
    #[error("The output file '{path}' already exists.")]
    FileExists { path: String },

    #[error("Input file format ({input}) and output file format ({output}) do not match.")]
    FormatMismatch { input: String, output: String },

    // ─────────────────────────────────────────────────────────────
    // 外部命令错误
    // ─────────────────────────────────────────────────────────────
    #[error("Failed to launch external command: {command}")]
    LaunchFailed {
        command: String,
        #[source]
        source: std::io::Error,
    },

    #[error("External command failed: {command} (exit code {code:?})\n{stderr}")]
    CommandFailed {
        command: String,
        code: Option<i32>,
        stderr: String,
    },
}

/// Result 类型别名
pub type Result<T> = std::result::Result<T, AtomskError>;
