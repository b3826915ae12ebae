//! # add-atom 命令实现
//!
//! 向既有体系添加原子。
//!
//! ## 依赖关系
//! - 使用 `cli/add_atom.rs` 定义的参数
//! - 使用 `options.rs`, `utils/output.rs`

use crate::cli::add_atom::AddAtomArgs;
use crate::error::Result;
use crate::exec::Atomsk;
use crate::options::{self, AddAtom};
use crate::utils::output;

/// 执行 add-atom 命令
pub fn execute(tool: &Atomsk, args: AddAtomArgs) -> Result<()> {
    output::print_header("Add atom");
    output::print_info(&format!(
        "Adding {} to {}",
        args.species,
        args.input.display()
    ));

    let req = AddAtom {
        input: args.input,
        species: args.species,
        position: args.position,
        output: args.output,
    };

    let path = options::add_atom(tool, &req)?;
    output::print_success(&format!("Wrote structure: {}", path.display()));
    Ok(())
}
