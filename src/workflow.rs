//! アプリケーションのメインワークフローを定義するモジュール。
//!
//! CLI の引数（`cli`）から検査対象のファイル名を決め、ドメイン層（`domain`）の
//! 検査処理に渡して結果を標準出力へ書き出します。

use crate::cli::Args;
use image_corner_inspector::domain::inspection::inspect_files;
use image_corner_inspector::domain::source::base_directory::BaseDirectory;
use image_corner_inspector::error::AppError;
use log::info;
use std::io::{self, Write};
use std::path::PathBuf;

/// アプリケーションのメインロジックを実行します。
///
/// 個々のファイルの失敗は出力に書かれるだけで、`Err` にはなりません。
///
/// # 戻り値
/// * `Ok(())`: すべてのファイルを処理した場合。
/// * `Err(AppError)`: 標準出力への書き込みや `--scan` 時の走査に失敗した場合。
pub fn run(args: Args) -> Result<(), AppError> {
    let stdout = io::stdout();
    let mut out = stdout.lock();
    run_with_output(&args, &mut out)?;
    out.flush()?;
    Ok(())
}

fn run_with_output<W: Write>(args: &Args, out: &mut W) -> Result<(), AppError> {
    // 1. 検査するファイル名を決める
    let file_names = if args.scan {
        // 走査では基準ディレクトリが実在する必要がある
        let base = BaseDirectory::new(&args.base_dir)?;
        let names = base.image_files(args.max_depth)?;
        if names.is_empty() {
            return Err(AppError::NoImagesFound(base.to_string()));
        }
        names
    } else {
        // リスト指定時は基準ディレクトリを検証しない（無ければ全件 not found になる）
        args.file_names().into_iter().map(PathBuf::from).collect()
    };

    // 2. 順に検査して出力
    let summary = inspect_files(&args.base_dir, &file_names, out)?;
    info!(
        "inspected {}, not found {}, failed {}",
        summary.inspected, summary.not_found, summary.failed
    );
    Ok(())
}
