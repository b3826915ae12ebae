//! # nanotube 命令实现
//!
//! 生成纳米管结构。
//!
//! ## 依赖关系
//! - 使用 `cli/nanotube.rs` 定义的参数
//! - 使用 `modes.rs`, `utils/output.rs`

use crate::args::Arg;
use crate::cli::nanotube::NanotubeArgs;
use crate::error::Result;
use crate::exec::Atomsk;
use crate::modes::{self, CreateNanotube};
use crate::utils::output;

/// 执行 nanotube 命令
pub fn execute(tool: &Atomsk, args: NanotubeArgs) -> Result<()> {
    output::print_header("Create nanotube");
    output::print_info(&format!(
        "Chirality: ({}, {}), a0 = {}, species: {}",
        args.m,
        args.n,
        args.a0,
        args.species.join(" ")
    ));

    let req = CreateNanotube {
        a0: args.a0,
        m: args.m,
        n: args.n,
        species: args.species,
        options: args.options.into_iter().map(Arg::from).collect(),
        output: args.output,
        formats: args.formats,
    };

    match modes::create_nanotube(tool, &req)? {
        Some(path) => output::print_success(&format!("Created nanotube: {}", path.display())),
        None => output::print_success("Nanotube created (no output file requested)"),
    }
    Ok(())
}
