//! # deform 命令实现
//!
//! 对体系施加单轴或剪切形变。
//!
//! ## 依赖关系
//! - 使用 `cli/deform.rs` 定义的参数
//! - 使用 `options.rs`, `utils/output.rs`

use crate::cli::deform::DeformArgs;
use crate::error::Result;
use crate::exec::Atomsk;
use crate::options::{self, Deform, Strain};
use crate::utils::output;

/// 执行 deform 命令
pub fn execute(tool: &Atomsk, args: DeformArgs) -> Result<()> {
    output::print_header("Deform system");
    let strain_text = match args.strain {
        Strain::Amount(x) => x.to_string(),
        Strain::Untilt => "untilt".to_string(),
    };
    output::print_info(&format!(
        "Component {} with strain {} on {}",
        args.component,
        strain_text,
        args.input.display()
    ));

    let req = Deform {
        input: args.input,
        component: args.component,
        strain: args.strain,
        poisson: args.poisson,
        output: args.output,
    };

    let path = options::deform(tool, &req)?;
    output::print_success(&format!("Wrote structure: {}", path.display()));
    Ok(())
}
