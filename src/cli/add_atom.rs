//! # add-atom 子命令 CLI 定义
//!
//! 向既有体系添加一个或多个原子
//!
//! ## 依赖关系
//! - 被 `cli/mod.rs` 使用
//! - 参数传递给 `commands/add_atom.rs`

use crate::options::Position;

use clap::Args;
use std::path::PathBuf;

/// add-atom 子命令参数
#[derive(Args, Debug)]
pub struct AddAtomArgs {
    /// Input structure file
    pub input: PathBuf,

    /// Atomic species of the atom(s) to add (element symbol)
    #[arg(short, long)]
    pub species: String,

    /// Placement: 'x,y,z' coordinates, an atom index, or 'random <N>'
    #[arg(short, long)]
    pub position: Position,

    /// Output file path (defaults to the input name with an '_add' suffix)
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}
