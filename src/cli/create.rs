//! # create 子命令 CLI 定义
//!
//! 生成标准晶格结构 (fcc, bcc, hcp, diamond, ...)
//!
//! ## 依赖关系
//! - 被 `cli/mod.rs` 使用
//! - 参数传递给 `commands/create.rs`

use clap::Args;
use std::path::PathBuf;

/// create 子命令参数
#[derive(Args, Debug)]
pub struct CreateArgs {
    /// Lattice type (e.g. fcc, bcc, hcp, diamond, rocksalt)
    #[arg(short, long)]
    pub lattice: String,

    /// Lattice constant a in Angstroms
    #[arg(short, long)]
    pub a: f64,

    /// Second lattice constant c in Angstroms (hcp and related lattices)
    #[arg(short, long)]
    pub c: Option<f64>,

    /// Atomic species (at least one element symbol)
    #[arg(short, long, num_args = 1.., required = true)]
    pub species: Vec<String>,

    /// Crystallographic orientation: three Miller vectors 'h,k,l'
    #[arg(long, num_args = 3, value_name = "H,K,L")]
    pub orient: Option<Vec<String>>,

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
