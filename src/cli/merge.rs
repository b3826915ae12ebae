//! # merge 子命令 CLI 定义
//!
//! 合并多个体系为一个
//!
//! ## 依赖关系
//! - 被 `cli/mod.rs` 使用
//! - 参数传递给 `commands/merge.rs`

use crate::modes::Direction;

use clap::Args;
use std::path::PathBuf;

/// merge 子命令参数
#[derive(Args, Debug)]
pub struct MergeArgs {
    /// Input structure files (at least two, same format as the output)
    #[arg(required = true, num_args = 2..)]
    pub inputs: Vec<PathBuf>,

    /// Output file path
    #[arg(short, long)]
    pub output: PathBuf,

    /// Stacking direction: x, y or z (case-insensitive)
    #[arg(short, long)]
    pub direction: Option<Direction>,

    /// Extra atomsk option tokens appended verbatim
    #[arg(long, num_args = 1.., allow_hyphen_values = true)]
    pub options: Vec<String>,

    /// Additional output format specifiers (e.g. cfg, lmp, xsf)
    #[arg(short, long, num_args = 1..)]
    pub formats: Vec<String>,
}
