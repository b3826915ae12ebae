//! # deform 子命令 CLI 定义
//!
//! 对体系施加单轴或剪切形变
//!
//! ## 依赖关系
//! - 被 `cli/mod.rs` 使用
//! - 参数传递给 `commands/deform.rs`

use crate::options::{Component, Strain};

use clap::Args;
use std::path::PathBuf;

/// deform 子命令参数
#[derive(Args, Debug)]
pub struct DeformArgs {
    /// Input structure file
    pub input: PathBuf,

    /// Deformation component: x, y, z (uniaxial) or xy, xz, yz, yx, zx, zy (shear)
    #[arg(short, long)]
    pub component: Component,

    /// Strain value (e.g. 0.06 for 6%) or 'untilt' for shear tilt correction
    #[arg(short, long, allow_hyphen_values = true)]
    pub strain: Strain,

    /// Poisson's ratio (uniaxial deformation only)
    #[arg(short, long, allow_hyphen_values = true)]
    pub poisson: Option<f64>,

    /// Output file path (defaults to the input name with a '_def' suffix)
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}
