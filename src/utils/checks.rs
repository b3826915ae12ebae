//! # 前置条件检查工具
//!
//! 操作构建器在启动外部进程前执行的轻量检查。
//!
//! ## 依赖关系
//! - 被 `modes.rs`, `options.rs` 使用
//! - 使用 `error.rs`

use crate::error::{AtomskError, Result};

use std::ffi::OsStr;
use std::path::{Path, PathBuf};

/// 若输出文件已存在则报错
///
/// atomsk 本身不防止静默覆盖既有结果，由本层强制 no-clobber。
/// 只防护既有文件，不协调并发写入同一路径的调用方。
pub fn check_no_clobber(output: &Path) -> Result<()> {
    if output.exists() {
        return Err(AtomskError::FileExists {
            path: output.display().to_string(),
        });
    }
    Ok(())
}

/// 检查输入与输出文件的扩展名是否一致（大小写不敏感）
///
/// 仅比较文件名扩展名，不读取文件内容；
/// 权威的格式校验由 atomsk 自身完成。
pub fn check_formats_match(input: &Path, output: &Path) -> Result<()> {
    if extension_lower(input) != extension_lower(output) {
        return Err(AtomskError::FormatMismatch {
            input: suffix_of(input),
            output: suffix_of(output),
        });
    }
    Ok(())
}

/// 由输入路径派生默认输出路径：在扩展名前插入操作后缀
///
/// 例如 `al.cfg` + `_dup` -> `al_dup.cfg`，目录与扩展名保持不变。
pub fn default_output_path(input: &Path, suffix: &str) -> PathBuf {
    let stem = input
        .file_stem()
        .map(OsStr::to_string_lossy)
        .unwrap_or_default();

    let name = match input.extension() {
        Some(ext) => format!("{}{}.{}", stem, suffix, ext.to_string_lossy()),
        None => format!("{}{}", stem, suffix),
    };

    input.with_file_name(name)
}

fn extension_lower(path: &Path) -> Option<String> {
    path.extension()
        .map(|e| e.to_string_lossy().to_ascii_lowercase())
}

fn suffix_of(path: &Path) -> String {
    match path.extension() {
        Some(ext) => format!(".{}", ext.to_string_lossy()),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_clobber_rejects_existing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("al.cfg");
        std::fs::write(&path, "").unwrap();

        let err = check_no_clobber(&path).unwrap_err();
        assert!(matches!(err, AtomskError::FileExists { .. }));
    }

    #[test]
    fn no_clobber_accepts_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        assert!(check_no_clobber(&dir.path().join("fresh.cfg")).is_ok());
    }

    #[test]
    fn formats_match_is_case_insensitive() {
        assert!(check_formats_match(Path::new("AL.CFG"), Path::new("al.cfg")).is_ok());
    }

    #[test]
    fn formats_mismatch_is_rejected() {
        let err = check_formats_match(Path::new("al.cfg"), Path::new("al.lmp")).unwrap_err();
        match err {
            AtomskError::FormatMismatch { input, output } => {
                assert_eq!(input, ".cfg");
                assert_eq!(output, ".lmp");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn default_output_inserts_suffix_before_extension() {
        assert_eq!(
            default_output_path(Path::new("/data/al.cfg"), "_dup"),
            PathBuf::from("/data/al_dup.cfg")
        );
        assert_eq!(
            default_output_path(Path::new("POSCAR"), "_def"),
            PathBuf::from("POSCAR_def")
        );
    }
}
