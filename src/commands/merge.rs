//! # merge 命令实现
//!
//! 合并多个体系为一个。
//!
//! ## 依赖关系
//! - 使用 `cli/merge.rs` 定义的参数
//! - 使用 `modes.rs`, `utils/output.rs`

use crate::args::Arg;
use crate::cli::merge::MergeArgs;
use crate::error::Result;
use crate::exec::Atomsk;
use crate::modes::{self, Merge};
use crate::utils::output;

/// 执行 merge 命令
pub fn execute(tool: &Atomsk, args: MergeArgs) -> Result<()> {
    output::print_header("Merge systems");
    output::print_info(&format!("Merging {} input files", args.inputs.len()));

    let req = Merge {
        inputs: args.inputs,
        output: args.output,
        direction: args.direction,
        options: args.options.into_iter().map(Arg::from).collect(),
        formats: args.formats,
    };

    let path = modes::merge(tool, &req)?;
    output::print_success(&format!("Merged structure: {}", path.display()));
    Ok(())
}
