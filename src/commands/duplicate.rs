//! # duplicate 命令实现
//!
//! 沿三个晶胞方向复制体系。
//!
//! ## 依赖关系
//! - 使用 `cli/duplicate.rs` 定义的参数
//! - 使用 `options.rs`, `utils/output.rs`

use crate::cli::duplicate::DuplicateArgs;
use crate::error::Result;
use crate::exec::Atomsk;
use crate::options::{self, Duplicate};
use crate::utils::output;

/// 执行 duplicate 命令
pub fn execute(tool: &Atomsk, args: DuplicateArgs) -> Result<()> {
    output::print_header("Duplicate system");
    output::print_info(&format!(
        "{} x {} x {} copies of {}",
        args.nx,
        args.ny,
        args.nz,
        args.input.display()
    ));

    let req = Duplicate {
        input: args.input,
        nx: args.nx,
        ny: args.ny,
        nz: args.nz,
        output: args.output,
    };

    let path = options::duplicate(tool, &req)?;
    output::print_success(&format!("Wrote structure: {}", path.display()));
    Ok(())
}
