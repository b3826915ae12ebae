//! # version 命令实现
//!
//! 显示已解析的可执行文件路径与 atomsk 报告的版本。
//!
//! ## 依赖关系
//! - 使用 `exec.rs`, `utils/output.rs`

use crate::error::Result;
use crate::exec::Atomsk;
use crate::utils::output;

/// 执行 version 命令
pub fn execute(tool: &Atomsk) -> Result<()> {
    output::print_info(&format!("Executable: {}", tool.executable().display()));
    println!("{}", tool.version()?);
    Ok(())
}
