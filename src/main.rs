//! # ratomsk 命令行入口
//!
//! 解析命令行参数并执行对应的子命令。
//!
//! ## 依赖关系
//! - 使用 `cli/`, `commands/`, `utils/output.rs`

use clap::Parser;
use ratomsk::cli::Cli;
use ratomsk::utils::output;

fn main() {
    // Initialize colored output for Windows compatibility
    #[cfg(windows)]
    colored::control::set_virtual_terminal(true).ok();

    let cli = Cli::parse();

    if let Err(e) = ratomsk::commands::run(cli) {
        output::print_error(&format!("{}", e));
        std::process::exit(1);
    }
}
