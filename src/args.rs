//! # 参数规范化模块
//!
//! 将调用方提供的异构值（文本、整数、浮点数、路径）规范化为
//! 传递给外部进程的字符串 token 序列。
//!
//! ## 设计
//! - 用带标签的枚举 [`Arg`] 替代运行时类型嗅探，
//!   不受支持的类型在编译期即不可表示
//! - 路径统一转换为绝对形式（使用 `path_abs`，
//!   输出路径可能尚不存在，不能用 `canonicalize`）
//!
//! ## 依赖关系
//! - 被 `exec.rs`, `modes.rs`, `options.rs` 使用
//! - 使用 `error.rs`, `path_abs` crate

use crate::error::{AtomskError, Result};

use path_abs::PathAbs;
use std::path::{Path, PathBuf};

/// 单个命令行参数
///
/// 文本、整数和浮点数按其标准文本形式输出；
/// 路径输出为绝对、词法解析后的形式，使外部进程
/// 不依赖调用方的工作目录。
#[derive(Debug, Clone, PartialEq)]
pub enum Arg {
    /// 纯文本 token（模式名、选项名、元素符号等）
    Text(String),
    /// 整数（重复次数、手性指数等）
    Int(i64),
    /// 浮点数（晶格常数、应变量等）
    Float(f64),
    /// 文件系统路径（输入/输出结构文件）
    Path(PathBuf),
}

impl Arg {
    /// 转换为进程调用使用的文本 token
    pub fn to_token(&self) -> Result<String> {
        match self {
            Arg::Text(s) => Ok(s.clone()),
            Arg::Int(n) => Ok(n.to_string()),
            Arg::Float(x) => Ok(x.to_string()),
            Arg::Path(p) => {
                let abs = PathAbs::new(p).map_err(|e| AtomskError::PathResolve {
                    path: p.display().to_string(),
                    source: e,
                })?;
                Ok(abs.as_path().to_string_lossy().into_owned())
            }
        }
    }
}

/// 将参数序列规范化为 token 序列
pub fn prepare(args: &[Arg]) -> Result<Vec<String>> {
    args.iter().map(Arg::to_token).collect()
}

impl From<&str> for Arg {
    fn from(s: &str) -> Self {
        Arg::Text(s.to_string())
    }
}

impl From<String> for Arg {
    fn from(s: String) -> Self {
        Arg::Text(s)
    }
}

impl From<i64> for Arg {
    fn from(n: i64) -> Self {
        Arg::Int(n)
    }
}

impl From<i32> for Arg {
    fn from(n: i32) -> Self {
        Arg::Int(n as i64)
    }
}

impl From<u32> for Arg {
    fn from(n: u32) -> Self {
        Arg::Int(n as i64)
    }
}

impl From<f64> for Arg {
    fn from(x: f64) -> Self {
        Arg::Float(x)
    }
}

impl From<&Path> for Arg {
    fn from(p: &Path) -> Self {
        Arg::Path(p.to_path_buf())
    }
}

impl From<PathBuf> for Arg {
    fn from(p: PathBuf) -> Self {
        Arg::Path(p)
    }
}
