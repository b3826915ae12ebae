//! # 工具函数模块
//!
//! 提供前置条件检查与美化输出工具。
//!
//! ## 依赖关系
//! - 被 `modes.rs`, `options.rs`, `commands/` 模块使用
//! - 子模块: checks, output

pub mod checks;
pub mod output;
