//! ファイル名のリストを順に検査し、結果を出力するモジュール。
//!
//! 1ファイルの失敗は全体を止めません。出力先への書き込みに失敗した場合だけ
//! エラーを呼び出し元へ返します。

use super::image_report::ImageReport;
use log::{debug, warn};
use std::fmt;
use std::io::{self, Write};
use std::path::Path;

/// 1ファイル分の検査結果。
#[derive(Debug)]
pub enum InspectionOutcome {
    /// ファイルが存在しなかった
    NotFound { file_name: String },
    /// デコードに成功した
    Inspected {
        file_name: String,
        report: ImageReport,
    },
    /// ファイルはあったが読めなかった
    Failed { file_name: String, message: String },
}

impl fmt::Display for InspectionOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InspectionOutcome::NotFound { file_name } => write!(f, "{} not found", file_name),
            InspectionOutcome::Inspected { file_name, report } => {
                let (w, h) = report.dimensions();
                writeln!(f, "{}: Mode={}, Size=({}, {})", file_name, report.mode(), w, h)?;
                write!(f, "  Corners: {}", report.corners())
            }
            InspectionOutcome::Failed { file_name, message } => {
                write!(f, "  Error reading {}: {}", file_name, message)
            }
        }
    }
}

/// 実行全体の集計。
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct InspectionSummary {
    pub inspected: usize,
    pub not_found: usize,
    pub failed: usize,
}

/// `base_dir` と `file_name` を結合したパスを検査します。
///
/// 結合と読み込みは元のパスのまま行い、表示用の名前だけを文字列にします。
pub fn inspect_file(base_dir: &Path, file_name: &Path) -> InspectionOutcome {
    let path = base_dir.join(file_name);
    let file_name = file_name.display().to_string();
    debug!("inspecting {}", path.display());

    if !path.exists() {
        return InspectionOutcome::NotFound { file_name };
    }

    match ImageReport::from_path(&path) {
        Ok(report) => InspectionOutcome::Inspected { file_name, report },
        Err(e) => {
            warn!("failed to read {}: {}", path.display(), e);
            InspectionOutcome::Failed {
                file_name,
                message: e.to_string(),
            }
        }
    }
}

/// リストの順に全ファイルを検査し、結果を `out` に1件ずつ書き出します。
///
/// # 戻り値
/// * `Ok(InspectionSummary)`: すべてのファイルを処理した場合（個々の失敗を含む）。
/// * `Err(io::Error)`: `out` への書き込みに失敗した場合。
pub fn inspect_files<P, W>(
    base_dir: &Path,
    file_names: &[P],
    out: &mut W,
) -> io::Result<InspectionSummary>
where
    P: AsRef<Path>,
    W: Write,
{
    let mut summary = InspectionSummary::default();
    for name in file_names {
        let outcome = inspect_file(base_dir, name.as_ref());
        match &outcome {
            InspectionOutcome::NotFound { .. } => summary.not_found += 1,
            InspectionOutcome::Inspected { .. } => summary.inspected += 1,
            InspectionOutcome::Failed { .. } => summary.failed += 1,
        }
        writeln!(out, "{}", outcome)?;
    }
    Ok(summary)
}
