//! # 结构生成模式模块
//!
//! 对应 atomsk 的运行模式 (`--create`, `--merge`)：
//! 从零生成晶格/纳米管，或合并多个体系。
//!
//! 每个操作由一个命名字段的请求结构体描述，
//! 构建器为纯函数：校验请求、按 atomsk 语法顺序
//! 生成 token 序列、交由执行器调用，返回输出路径。
//!
//! ## 依赖关系
//! - 被 `commands/` 模块与库调用方使用
//! - 使用 `args.rs`, `exec.rs`, `error.rs`, `utils/checks.rs`

use crate::args::Arg;
use crate::error::{AtomskError, Result};
use crate::exec::Atomsk;
use crate::utils::checks;

use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

/// merge 的堆叠方向
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    X,
    Y,
    Z,
}

impl FromStr for Direction {
    type Err = AtomskError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "x" => Ok(Direction::X),
            "y" => Ok(Direction::Y),
            "z" => Ok(Direction::Z),
            other => Err(AtomskError::InvalidArgument(format!(
                "Direction must be 'x', 'y', or 'z', got '{other}'."
            ))),
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Direction::X => write!(f, "x"),
            Direction::Y => write!(f, "y"),
            Direction::Z => write!(f, "z"),
        }
    }
}

// ─────────────────────────────────────────────────────────────
// create：标准晶格
// ─────────────────────────────────────────────────────────────

/// 标准晶格生成请求
#[derive(Debug, Clone)]
pub struct CreateLattice {
    /// 晶格类型（如 "fcc", "bcc", "hcp", "diamond"）
    pub lattice: String,
    /// 晶格常数 a（Å）
    pub a: f64,
    /// 第二晶格常数 c（仅部分晶格类型需要，如 hcp）
    pub c: Option<f64>,
    /// 原子种类列表（至少一个元素符号）
    pub species: Vec<String>,
    /// 晶体学取向，三个 Miller 指数向量
    pub orient: Option<[[i32; 3]; 3]>,
    /// 追加的 atomsk 选项 token
    pub options: Vec<Arg>,
    /// 输出文件路径；缺省时 atomsk 不写出文件
    pub output: Option<PathBuf>,
    /// 额外的输出格式说明符（如 "cfg", "lmp"）
    pub formats: Vec<String>,
}

impl CreateLattice {
    /// 以必填字段构造请求，其余字段取默认值
    pub fn new(lattice: impl Into<String>, a: f64, species: Vec<String>) -> Self {
        CreateLattice {
            lattice: lattice.into(),
            a,
            c: None,
            species,
            orient: None,
            options: Vec::new(),
            output: None,
            formats: Vec::new(),
        }
    }

    fn build_args(&self) -> Result<Vec<Arg>> {
        if self.species.is_empty() {
            return Err(AtomskError::InvalidArgument(
                "At least one atomic species must be specified.".to_string(),
            ));
        }
        if let Some(output) = &self.output {
            checks::check_no_clobber(output)?;
        }

        let mut cmd = vec![Arg::from("--create"), Arg::from(self.lattice.as_str()), Arg::from(self.a)];
        if let Some(c) = self.c {
            cmd.push(Arg::from(c));
        }
        cmd.extend(self.species.iter().map(|s| Arg::from(s.as_str())));

        if let Some(orient) = &self.orient {
            cmd.push(Arg::from("orient"));
            for vec in orient {
                cmd.push(Arg::Text(orient_token(vec)));
            }
        }

        cmd.extend(self.options.iter().cloned());

        if let Some(output) = &self.output {
            cmd.push(Arg::from(output.clone()));
        }
        cmd.extend(self.formats.iter().map(|f| Arg::from(f.as_str())));

        Ok(cmd)
    }
}

/// 生成标准晶格结构
///
/// 返回请求中的输出路径；未指定输出时返回 `None`。
pub fn create(tool: &Atomsk, req: &CreateLattice) -> Result<Option<PathBuf>> {
    let cmd = req.build_args()?;
    tool.run(&cmd)?;
    Ok(req.output.clone())
}

/// Miller 指数向量的 atomsk 文本形式，如 `[0-11]`
fn orient_token(vec: &[i32; 3]) -> String {
    format!("[{}{}{}]", vec[0], vec[1], vec[2])
}

// ─────────────────────────────────────────────────────────────
// create nanotube：纳米管
// ─────────────────────────────────────────────────────────────

/// 纳米管生成请求
#[derive(Debug, Clone)]
pub struct CreateNanotube {
    /// 基础原子间距 a0（Å）
    pub a0: f64,
    /// 手性指数 m
    pub m: i32,
    /// 手性指数 n
    pub n: i32,
    /// 原子种类列表（至少一个元素符号）
    pub species: Vec<String>,
    /// 追加的 atomsk 选项 token
    pub options: Vec<Arg>,
    /// 输出文件路径；缺省时 atomsk 不写出文件
    pub output: Option<PathBuf>,
    /// 额外的输出格式说明符
    pub formats: Vec<String>,
}

impl CreateNanotube {
    /// 以必填字段构造请求，其余字段取默认值
    pub fn new(a0: f64, m: i32, n: i32, species: Vec<String>) -> Self {
        CreateNanotube {
            a0,
            m,
            n,
            species,
            options: Vec::new(),
            output: None,
            formats: Vec::new(),
        }
    }

    fn build_args(&self) -> Result<Vec<Arg>> {
        if self.species.is_empty() {
            return Err(AtomskError::InvalidArgument(
                "At least one atomic species must be specified.".to_string(),
            ));
        }
        if let Some(output) = &self.output {
            checks::check_no_clobber(output)?;
        }

        let mut cmd = vec![
            Arg::from("--create"),
            Arg::from("nanotube"),
            Arg::from(self.a0),
            Arg::from(self.m),
            Arg::from(self.n),
        ];
        cmd.extend(self.species.iter().map(|s| Arg::from(s.as_str())));
        cmd.extend(self.options.iter().cloned());

        if let Some(output) = &self.output {
            cmd.push(Arg::from(output.clone()));
        }
        cmd.extend(self.formats.iter().map(|f| Arg::from(f.as_str())));

        Ok(cmd)
    }
}

/// 以手性指数 (m, n) 生成纳米管结构
pub fn create_nanotube(tool: &Atomsk, req: &CreateNanotube) -> Result<Option<PathBuf>> {
    let cmd = req.build_args()?;
    tool.run(&cmd)?;
    Ok(req.output.clone())
}

// ─────────────────────────────────────────────────────────────
// merge：合并多个体系
// ─────────────────────────────────────────────────────────────

/// 体系合并请求
#[derive(Debug, Clone)]
pub struct Merge {
    /// 输入文件列表（至少两个）
    pub inputs: Vec<PathBuf>,
    /// 输出文件路径
    pub output: PathBuf,
    /// 可选的堆叠方向
    pub direction: Option<Direction>,
    /// 追加的 atomsk 选项 token
    pub options: Vec<Arg>,
    /// 额外的输出格式说明符
    pub formats: Vec<String>,
}

impl Merge {
    /// 以必填字段构造请求，其余字段取默认值
    pub fn new(inputs: Vec<PathBuf>, output: impl Into<PathBuf>) -> Self {
        Merge {
            inputs,
            output: output.into(),
            direction: None,
            options: Vec::new(),
            formats: Vec::new(),
        }
    }

    fn build_args(&self) -> Result<Vec<Arg>> {
        if self.inputs.len() < 2 {
            return Err(AtomskError::InvalidArgument(format!(
                "At least two input files are required to merge, got {}.",
                self.inputs.len()
            )));
        }
        checks::check_no_clobber(&self.output)?;
        for input in &self.inputs {
            checks::check_formats_match(input, &self.output)?;
        }

        let mut cmd = vec![Arg::from("--merge")];
        if let Some(direction) = self.direction {
            cmd.push(Arg::Text(direction.to_string()));
        }
        cmd.push(Arg::from(self.inputs.len() as i64));
        cmd.extend(self.inputs.iter().cloned().map(Arg::from));
        cmd.push(Arg::from(self.output.clone()));
        cmd.extend(self.formats.iter().map(|f| Arg::from(f.as_str())));
        cmd.extend(self.options.iter().cloned());

        Ok(cmd)
    }
}

/// 合并多个体系为一个
pub fn merge(tool: &Atomsk, req: &Merge) -> Result<PathBuf> {
    let cmd = req.build_args()?;
    tool.run(&cmd)?;
    Ok(req.output.clone())
}
