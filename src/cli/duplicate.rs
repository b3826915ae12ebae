//! # duplicate 子命令 CLI 定义
//!
//! 沿三个晶胞方向复制体系
//!
//! ## 依赖关系
//! - 被 `cli/mod.rs` 使用
//! - 参数传递给 `commands/duplicate.rs`

use clap::Args;
use std::path::PathBuf;

/// duplicate 子命令参数
#[derive(Args, Debug)]
pub struct DuplicateArgs {
    /// Input structure file
    pub input: PathBuf,

    /// Repeat count along x
    #[arg(long, default_value_t = 1)]
    pub nx: u32,

    /// Repeat count along y
    #[arg(long, default_value_t = 1)]
    pub ny: u32,

    /// Repeat count along z
    #[arg(long, default_value_t = 1)]
    pub nz: u32,

    /// Output file path (defaults to the input name with a '_dup' suffix)
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}
