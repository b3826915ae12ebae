//! # 命令执行模块
//!
//! 实现各子命令的业务逻辑：由 CLI 参数构建请求结构体，
//! 调用库操作并打印结果。
//!
//! ## 依赖关系
//! - 被 `main.rs` 调用
//! - 使用 `cli/`, `exec.rs`, `modes.rs`, `options.rs`, `utils/`
//! - 子模块: create, nanotube, merge, add_atom, duplicate, deform, version

pub mod add_atom;
pub mod create;
pub mod deform;
pub mod duplicate;
pub mod merge;
pub mod nanotube;
pub mod version;

use crate::cli::{Cli, Commands};
use crate::error::Result;
use crate::exec::Atomsk;

/// 执行命令
pub fn run(cli: Cli) -> Result<()> {
    // 可执行文件只在此处解析一次，句柄传入各命令
    let tool = match &cli.atomsk_path {
        Some(path) => Atomsk::with_executable(path)?,
        None => Atomsk::new()?,
    };

    match cli.command {
        Commands::Create(args) => create::execute(&tool, args),
        Commands::Nanotube(args) => nanotube::execute(&tool, args),
        Commands::Merge(args) => merge::execute(&tool, args),
        Commands::AddAtom(args) => add_atom::execute(&tool, args),
        Commands::Duplicate(args) => duplicate::execute(&tool, args),
        Commands::Deform(args) => deform::execute(&tool, args),
        Commands::Version => version::execute(&tool),
    }
}
