//! # 结构变换选项模块
//!
//! 对应作用于既有输入文件的 atomsk 选项
//! (`-add-atom`, `-duplicate`, `-deform`)。
//!
//! 与 `modes.rs` 相同：请求结构体 + 纯构建器。
//! 松散的多形态参数（位置、应变分量）以带标签的枚举表达，
//! 在构造/解析时即校验，而非调用时按形态嗅探。
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

// ─────────────────────────────────────────────────────────────
// add-atom：添加原子
// ─────────────────────────────────────────────────────────────

/// 新原子的放置位置
#[derive(Debug, Clone, PartialEq)]
pub enum Position {
    /// 绝对坐标 (x, y, z)，单位 Å
    At { x: f64, y: f64, z: f64 },
    /// 靠近指定序号的原子
    Near(u64),
    /// 随机插入 count 个原子
    Random(u32),
}

impl Position {
    fn to_args(&self) -> Vec<Arg> {
        match *self {
            Position::At { x, y, z } => {
                vec![Arg::from("at"), Arg::from(x), Arg::from(y), Arg::from(z)]
            }
            Position::Near(index) => vec![Arg::from("near"), Arg::Int(index as i64)],
            Position::Random(count) => vec![Arg::from("random"), Arg::from(count)],
        }
    }
}

impl FromStr for Position {
    type Err = AtomskError;

    /// 解析 CLI 位置参数：`x,y,z`、原子序号或 `random <N>`
    fn from_str(s: &str) -> Result<Self> {
        let s = s.trim();

        if let Some(rest) = s.strip_prefix("random") {
            let count: u32 = rest.trim().parse().map_err(|_| {
                AtomskError::InvalidArgument(format!(
                    "Invalid 'random' position format: '{s}'. Use 'random <N>' where <N> is a positive integer."
                ))
            })?;
            return Ok(Position::Random(count));
        }

        if let Ok(index) = s.parse::<u64>() {
            return Ok(Position::Near(index));
        }

        let coords: Vec<&str> = s.split(',').map(str::trim).collect();
        if coords.len() == 3 {
            let parse = |c: &str| {
                c.parse::<f64>().map_err(|_| {
                    AtomskError::InvalidArgument(format!(
                        "Invalid coordinate '{c}' in position '{s}'."
                    ))
                })
            };
            return Ok(Position::At {
                x: parse(coords[0])?,
                y: parse(coords[1])?,
                z: parse(coords[2])?,
            });
        }

        Err(AtomskError::InvalidArgument(format!(
            "Invalid position format: '{s}'. Use 'x,y,z' coordinates, an atom index, or 'random <N>'."
        )))
    }
}

/// 添加原子请求
#[derive(Debug, Clone)]
pub struct AddAtom {
    /// 输入结构文件
    pub input: PathBuf,
    /// 要添加的原子种类（元素符号）
    pub species: String,
    /// 放置位置
    pub position: Position,
    /// 输出文件路径；缺省时由输入路径加 `_add` 后缀派生
    pub output: Option<PathBuf>,
}

impl AddAtom {
    /// 以必填字段构造请求
    pub fn new(input: impl Into<PathBuf>, species: impl Into<String>, position: Position) -> Self {
        AddAtom {
            input: input.into(),
            species: species.into(),
            position,
            output: None,
        }
    }

    fn build_args(&self) -> Result<(Vec<Arg>, PathBuf)> {
        let output = self
            .output
            .clone()
            .unwrap_or_else(|| checks::default_output_path(&self.input, "_add"));

        checks::check_no_clobber(&output)?;
        checks::check_formats_match(&self.input, &output)?;

        let mut cmd = vec![
            Arg::from(self.input.clone()),
            Arg::from("-add-atom"),
            Arg::from(self.species.as_str()),
        ];
        cmd.extend(self.position.to_args());
        cmd.push(Arg::from(output.clone()));

        Ok((cmd, output))
    }
}

/// 向体系中添加一个或多个原子
pub fn add_atom(tool: &Atomsk, req: &AddAtom) -> Result<PathBuf> {
    let (cmd, output) = req.build_args()?;
    tool.run(&cmd)?;
    Ok(output)
}

// ─────────────────────────────────────────────────────────────
// duplicate：复制体系
// ─────────────────────────────────────────────────────────────

/// 体系复制请求
#[derive(Debug, Clone)]
pub struct Duplicate {
    /// 输入结构文件
    pub input: PathBuf,
    /// x 方向重复次数
    pub nx: u32,
    /// y 方向重复次数
    pub ny: u32,
    /// z 方向重复次数
    pub nz: u32,
    /// 输出文件路径；缺省时由输入路径加 `_dup` 后缀派生
    pub output: Option<PathBuf>,
}

impl Duplicate {
    /// 以输入文件构造请求，重复次数默认为 1
    pub fn new(input: impl Into<PathBuf>) -> Self {
        Duplicate {
            input: input.into(),
            nx: 1,
            ny: 1,
            nz: 1,
            output: None,
        }
    }

    fn build_args(&self) -> Result<(Vec<Arg>, PathBuf)> {
        let output = self
            .output
            .clone()
            .unwrap_or_else(|| checks::default_output_path(&self.input, "_dup"));

        checks::check_no_clobber(&output)?;
        checks::check_formats_match(&self.input, &output)?;

        let cmd = vec![
            Arg::from(self.input.clone()),
            Arg::from("-duplicate"),
            Arg::from(self.nx),
            Arg::from(self.ny),
            Arg::from(self.nz),
            Arg::from(output.clone()),
        ];

        Ok((cmd, output))
    }
}

/// 沿三个方向复制体系
pub fn duplicate(tool: &Atomsk, req: &Duplicate) -> Result<PathBuf> {
    let (cmd, output) = req.build_args()?;
    tool.run(&cmd)?;
    Ok(output)
}

// ─────────────────────────────────────────────────────────────
// deform：施加形变
// ─────────────────────────────────────────────────────────────

/// 形变分量：单轴 (x, y, z) 或剪切 (xy, xz, yz, yx, zx, zy)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Component {
    X,
    Y,
    Z,
    Xy,
    Xz,
    Yz,
    Yx,
    Zx,
    Zy,
}

impl Component {
    /// 是否为剪切分量
    pub fn is_shear(self) -> bool {
        !matches!(self, Component::X | Component::Y | Component::Z)
    }
}

impl FromStr for Component {
    type Err = AtomskError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "x" => Ok(Component::X),
            "y" => Ok(Component::Y),
            "z" => Ok(Component::Z),
            "xy" => Ok(Component::Xy),
            "xz" => Ok(Component::Xz),
            "yz" => Ok(Component::Yz),
            "yx" => Ok(Component::Yx),
            "zx" => Ok(Component::Zx),
            "zy" => Ok(Component::Zy),
            other => Err(AtomskError::InvalidArgument(format!(
                "Invalid deformation component '{other}'. Use x, y, z, xy, xz, yz, yx, zx or zy."
            ))),
        }
    }
}

impl fmt::Display for Component {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Component::X => "x",
            Component::Y => "y",
            Component::Z => "z",
            Component::Xy => "xy",
            Component::Xz => "xz",
            Component::Yz => "yz",
            Component::Yx => "yx",
            Component::Zx => "zx",
            Component::Zy => "zy",
        };
        write!(f, "{s}")
    }
}

/// 应变量：数值（如 0.06 表示 6%）或 `untilt` 字面量
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Strain {
    /// 应变数值
    Amount(f64),
    /// 剪切倾斜校正
    Untilt,
}

impl Strain {
    fn to_arg(self) -> Arg {
        match self {
            Strain::Amount(x) => Arg::from(x),
            Strain::Untilt => Arg::from("untilt"),
        }
    }
}

impl FromStr for Strain {
    type Err = AtomskError;

    fn from_str(s: &str) -> Result<Self> {
        if s.eq_ignore_ascii_case("untilt") {
            return Ok(Strain::Untilt);
        }
        s.parse::<f64>().map(Strain::Amount).map_err(|_| {
            AtomskError::InvalidArgument(format!(
                "Invalid strain '{s}'. Use a number (e.g. 0.06) or 'untilt'."
            ))
        })
    }
}

/// 形变请求
#[derive(Debug, Clone)]
pub struct Deform {
    /// 输入结构文件
    pub input: PathBuf,
    /// 形变分量
    pub component: Component,
    /// 应变量
    pub strain: Strain,
    /// 泊松比（仅单轴形变有效）
    pub poisson: Option<f64>,
    /// 输出文件路径；缺省时由输入路径加 `_def` 后缀派生
    pub output: Option<PathBuf>,
}

impl Deform {
    /// 以必填字段构造请求
    pub fn new(input: impl Into<PathBuf>, component: Component, strain: Strain) -> Self {
        Deform {
            input: input.into(),
            component,
            strain,
            poisson: None,
            output: None,
        }
    }

    fn build_args(&self) -> Result<(Vec<Arg>, PathBuf)> {
        if self.poisson.is_some() && self.component.is_shear() {
            return Err(AtomskError::InvalidArgument(format!(
                "Poisson's ratio is only valid for uniaxial deformation, not shear component '{}'.",
                self.component
            )));
        }

        let output = self
            .output
            .clone()
            .unwrap_or_else(|| checks::default_output_path(&self.input, "_def"));

        checks::check_no_clobber(&output)?;
        checks::check_formats_match(&self.input, &output)?;

        let mut cmd = vec![
            Arg::from(self.input.clone()),
            Arg::from("-deform"),
            Arg::Text(self.component.to_string()),
            self.strain.to_arg(),
        ];
        if let Some(poisson) = self.poisson {
            cmd.push(Arg::from(poisson));
        }
        cmd.push(Arg::from(output.clone()));

        Ok((cmd, output))
    }
}

/// 对体系施加单轴或剪切形变
pub fn deform(tool: &Atomsk, req: &Deform) -> Result<PathBuf> {
    let (cmd, output) = req.build_args()?;
    tool.run(&cmd)?;
    Ok(output)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;

    #[test]
    fn position_coordinates_dispatch_to_at() {
        let pos: Position = "1.0, 2.0, 3.0".parse().unwrap();
        assert_eq!(
            pos,
            Position::At {
                x: 1.0,
                y: 2.0,
                z: 3.0
            }
        );
        assert_eq!(
            pos.to_args(),
            vec![
                Arg::from("at"),
                Arg::from(1.0),
                Arg::from(2.0),
                Arg::from(3.0),
            ]
        );
    }

    #[test]
    fn position_index_dispatches_to_near() {
        let pos: Position = "5".parse().unwrap();
        assert_eq!(pos, Position::Near(5));
        assert_eq!(pos.to_args(), vec![Arg::from("near"), Arg::from(5)]);
    }

    #[test]
    fn position_random_count_dispatches_to_random() {
        let pos: Position = "random 10".parse().unwrap();
        assert_eq!(pos, Position::Random(10));
        assert_eq!(pos.to_args(), vec![Arg::from("random"), Arg::from(10u32)]);
    }

    #[test]
    fn malformed_positions_are_rejected() {
        assert!("random abc".parse::<Position>().is_err());
        assert!("random -3".parse::<Position>().is_err());
        assert!("1.0,2.0".parse::<Position>().is_err());
        assert!("somewhere".parse::<Position>().is_err());
    }

    #[test]
    fn add_atom_token_order() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("al.cfg");

        let req = AddAtom::new(&input, "Al", Position::Near(5));
        let (cmd, output) = req.build_args().unwrap();

        assert_eq!(output, dir.path().join("al_add.cfg"));
        assert_eq!(
            cmd,
            vec![
                Arg::from(input),
                Arg::from("-add-atom"),
                Arg::from("Al"),
                Arg::from("near"),
                Arg::from(5),
                Arg::from(output),
            ]
        );
    }

    #[test]
    fn duplicate_derives_suffixed_output() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("al.cfg");

        let req = Duplicate {
            nx: 2,
            ny: 2,
            ..Duplicate::new(&input)
        };
        let (cmd, output) = req.build_args().unwrap();

        assert_eq!(output, dir.path().join("al_dup.cfg"));
        assert_eq!(
            cmd,
            vec![
                Arg::from(input),
                Arg::from("-duplicate"),
                Arg::from(2u32),
                Arg::from(2u32),
                Arg::from(1u32),
                Arg::from(output),
            ]
        );
    }

    #[test]
    fn duplicate_rejects_extension_mismatch() {
        let req = Duplicate {
            output: Some(PathBuf::from("/w/al.lmp")),
            ..Duplicate::new("/w/al.cfg")
        };
        assert!(matches!(
            req.build_args().unwrap_err(),
            AtomskError::FormatMismatch { .. }
        ));
    }

    #[test]
    fn deform_shear_omits_poisson_token() {
        let req = Deform::new("/w/al.cfg", Component::Xy, Strain::Amount(0.05));
        let (cmd, _) = req.build_args().unwrap();
        assert_eq!(
            cmd,
            vec![
                Arg::from(Path::new("/w/al.cfg")),
                Arg::from("-deform"),
                Arg::from("xy"),
                Arg::from(0.05),
                Arg::from(Path::new("/w/al_def.cfg")),
            ]
        );
    }

    #[test]
    fn deform_uniaxial_includes_poisson_token() {
        let req = Deform {
            poisson: Some(0.0),
            ..Deform::new("/w/al.cfg", Component::X, Strain::Amount(0.0125))
        };
        let (cmd, _) = req.build_args().unwrap();
        assert_eq!(
            cmd,
            vec![
                Arg::from(Path::new("/w/al.cfg")),
                Arg::from("-deform"),
                Arg::from("x"),
                Arg::from(0.0125),
                Arg::from(0.0),
                Arg::from(Path::new("/w/al_def.cfg")),
            ]
        );
    }

    #[test]
    fn deform_rejects_poisson_with_shear() {
        let req = Deform {
            poisson: Some(0.3),
            ..Deform::new("/w/al.cfg", Component::Yz, Strain::Amount(0.05))
        };
        assert!(matches!(
            req.build_args().unwrap_err(),
            AtomskError::InvalidArgument(_)
        ));
    }

    #[test]
    fn untilt_strain_is_a_literal_token() {
        let strain: Strain = "untilt".parse().unwrap();
        assert_eq!(strain.to_arg(), Arg::from("untilt"));
        assert_eq!("0.06".parse::<Strain>().unwrap(), Strain::Amount(0.06));
        assert!("stretchy".parse::<Strain>().is_err());
    }

    #[test]
    fn component_parsing_is_case_insensitive() {
        assert_eq!("XY".parse::<Component>().unwrap(), Component::Xy);
        assert!(Component::Zy.is_shear());
        assert!(!Component::Z.is_shear());
        assert!("xx".parse::<Component>().is_err());
    }
}
