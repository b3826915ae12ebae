//! # nanotube 子命令 CLI 定义
//!
//! 以手性指数 (m, n) 生成纳米管结构
//!
//! ## 依赖关系
//! - 被 `cli/mod.rs` 使用
//! - 参数传递给 `commands/nanotube.rs`

use clap::Args;
use std::path::PathBuf;

/// nanotube 子命令参数
#[derive(Args, Debug)]
pub struct NanotubeArgs {
    /// Base atomic spacing a0 in Angstroms
    #[arg(long)]
    pub a0: f64,

    /// Chiral index m
    #[arg(short, long)]
    pub m: i32,

    /// Chiral index n
    #[arg(short, long)]
    pub n: i32,

    /// Atomic species (at least one element symbol)
    #[arg(short, long, num_args = 1.., required = true)]
    pub species: Vec<String>,

    /// Extra atomsk option tokens appended verbatim
    #[arg(long, num_args = 1.., allow_hyphen_values = true)]
    pub options: Vec<String>,

    /// Output file path (omit to run without writing a file)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Additional output format specifiers (e.g. cfg, lmp, xsf)
    #[arg(short, long, num_args = 1..)]
    pub formats: Vec<String>,
}
