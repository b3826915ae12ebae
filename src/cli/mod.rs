//! # CLI 模块
//!
//! 使用 `clap` 定义命令行参数和子命令。
//!
//! ## 命令结构
//! - `create`: 生成标准晶格
//! - `nanotube`: 生成纳米管
//! - `merge`: 合并多个体系
//! - `add-atom`: 添加原子
//! - `duplicate`: 复制体系
//! - `deform`: 施加形变
//! - `version`: 显示 atomsk 版本
//!
//! ## 依赖关系
//! - 被 `main.rs` 使用
//! - 子模块: create, nanotube, merge, add_atom, duplicate, deform

pub mod add_atom;
pub mod create;
pub mod deform;
pub mod duplicate;
pub mod merge;
pub mod nanotube;

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// ratomsk - Atomsk 结构生成工具的便捷封装
#[derive(Parser)]
#[command(name = "ratomsk")]
#[command(version)]
#[command(about = "A thin convenience layer over the Atomsk structure-building tool", long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Path to the atomsk executable (overrides PATH lookup)
    #[arg(long, global = true, env = "ATOMSK_PATH", value_name = "PATH")]
    pub atomsk_path: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

/// 可用的子命令
#[derive(Subcommand)]
pub enum Commands {
    /// Create a standard lattice structure (fcc, bcc, hcp, ...)
    Create(create::CreateArgs),

    /// Create a nanotube from chiral indices (m, n)
    Nanotube(nanotube::NanotubeArgs),

    /// Merge two or more systems into one
    Merge(merge::MergeArgs),

    /// Add one or more atoms to an existing system
    AddAtom(add_atom::AddAtomArgs),

    /// Duplicate a system along the three cell vectors
    Duplicate(duplicate::DuplicateArgs),

    /// Apply uniaxial or shear deformation to a system
    Deform(deform::DeformArgs),

    /// Show the version reported by the atomsk executable
    Version,
}
