//! # create 命令实现
//!
//! 生成标准晶格结构。
//!
//! ## 依赖关系
//! - 使用 `cli/create.rs` 定义的参数
//! - 使用 `modes.rs`, `utils/output.rs`

use crate::args::Arg;
use crate::cli::create::CreateArgs;
use crate::error::{AtomskError, Result};
use crate::exec::Atomsk;
use crate::modes::{self, CreateLattice};
use crate::utils::output;

/// 执行 create 命令
pub fn execute(tool: &Atomsk, args: CreateArgs) -> Result<()> {
    output::print_header("Create lattice");
    output::print_info(&format!(
        "Lattice: {} (a = {}), species: {}",
        args.lattice,
        args.a,
        args.species.join(" ")
    ));

    // 解析取向向量
    let orient = match &args.orient {
        Some(vectors) => Some(parse_orient(vectors)?),
        None => None,
    };

    let req = CreateLattice {
        lattice: args.lattice,
        a: args.a,
        c: args.c,
        species: args.species,
        orient,
        options: args.options.into_iter().map(Arg::from).collect(),
        output: args.output,
        formats: args.formats,
    };

    match modes::create(tool, &req)? {
        Some(path) => output::print_success(&format!("Created structure: {}", path.display())),
        None => output::print_success("Structure created (no output file requested)"),
    }
    Ok(())
}

/// 解析三个 'h,k,l' 形式的 Miller 指数向量
fn parse_orient(vectors: &[String]) -> Result<[[i32; 3]; 3]> {
    let mut orient = [[0i32; 3]; 3];
    for (row, text) in orient.iter_mut().zip(vectors) {
        *row = parse_miller(text)?;
    }
    Ok(orient)
}

fn parse_miller(text: &str) -> Result<[i32; 3]> {
    let indices: Vec<i32> = text
        .split(',')
        .map(|t| t.trim().parse::<i32>())
        .collect::<std::result::Result<_, _>>()
        .map_err(|_| invalid_miller(text))?;

    indices.try_into().map_err(|_| invalid_miller(text))
}

fn invalid_miller(text: &str) -> AtomskError {
    AtomskError::InvalidArgument(format!(
        "Invalid Miller vector '{text}'. Use three comma-separated integers, e.g. '0,-1,1'."
    ))
}
