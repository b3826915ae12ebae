//! # ratomsk - Atomsk 结构生成工具的便捷封装
//!
//! 对第三方 `atomsk` 可执行文件的薄封装层：定位可执行文件、
//! 将结构化请求翻译为按 atomsk 语法排序的命令行参数、
//! 执行轻量前置校验、同步调用子进程并透传其输出与退出状态。
//! 所有科学计算都发生在未经修改的外部二进制内部。
//!
//! ## 模块结构
//! ```text
//! lib.rs
//!   ├── cli/        (命令行参数定义)
//!   ├── commands/   (命令执行逻辑)
//!   ├── modes.rs    (生成模式: create, nanotube, merge)
//!   ├── options.rs  (变换选项: add-atom, duplicate, deform)
//!   ├── exec.rs     (可执行文件定位与子进程调用)
//!   ├── args.rs     (参数规范化)
//!   ├── utils/      (前置检查与美化输出)
//!   └── error.rs    (错误处理)
//! ```
//!
//! ## 库用法
//! ```no_run
//! use ratomsk::{Atomsk, CreateLattice};
//!
//! # fn main() -> ratomsk::Result<()> {
//! let tool = Atomsk::new()?;
//! let req = CreateLattice {
//!     output: Some("al.cfg".into()),
//!     ..CreateLattice::new("fcc", 4.02, vec!["Al".to_string()])
//! };
//! let path = ratomsk::create(&tool, &req)?;
//! # Ok(())
//! # }
//! ```

pub mod args;
pub mod cli;
pub mod commands;
pub mod error;
pub mod exec;
pub mod modes;
pub mod options;
pub mod utils;

pub use args::Arg;
pub use error::{AtomskError, Result};
pub use exec::Atomsk;
pub use modes::{create, create_nanotube, merge, CreateLattice, CreateNanotube, Direction, Merge};
pub use options::{
    add_atom, deform, duplicate, AddAtom, Component, Deform, Duplicate, Position, Strain,
};
