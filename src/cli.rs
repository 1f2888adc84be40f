use clap::Parser;
use std::path::PathBuf;

/// 既定で検査するファイル名（この順に出力される）
pub const DEFAULT_FILES: &[&str] = &[
    "saver.webp",
    "comfort.webp",
    "vip.webp",
    "taxi.webp",
    "scooter.webp",
];

/// 既定の基準ディレクトリ
pub const DEFAULT_BASE_DIR: &str = r"e:\sm-new\smart-v2\smartline-app\src\assets\images";

/// 画像ファイルのカラーモード・サイズ・四隅のピクセル値を表示する診断ツール
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// 検査するファイル名 (省略時は組み込みのリスト)
    pub files: Vec<String>,

    /// ファイル名を結合する基準ディレクトリ
    #[arg(short, long, default_value = DEFAULT_BASE_DIR)]
    pub base_dir: PathBuf,

    /// ファイル名のリストの代わりに、基準ディレクトリ配下の画像ファイルをすべて検査する
    #[arg(short, long, conflicts_with = "files")]
    pub scan: bool,

    /// --scan 時の走査の深さ (省略時は無制限)
    #[arg(long, requires = "scan")]
    pub max_depth: Option<usize>,
}

impl Args {
    /// 実際に検査するファイル名のリストを返します。
    pub fn file_names(&self) -> Vec<String> {
        if self.files.is_empty() {
            DEFAULT_FILES.iter().map(|s| s.to_string()).collect()
        } else {
            self.files.clone()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn verify_cli() {
        Args::command().debug_assert();
    }

    #[test]
    fn no_arguments_uses_builtin_list_and_base_dir() {
        let args = Args::try_parse_from(["inspect"]).unwrap();
        assert_eq!(args.base_dir, PathBuf::from(DEFAULT_BASE_DIR));
        assert_eq!(args.file_names(), DEFAULT_FILES);
        assert!(!args.scan);
    }

    #[test]
    fn explicit_files_replace_builtin_list() {
        let args = Args::try_parse_from(["inspect", "-b", "/tmp/assets", "a.png", "b.webp"]).unwrap();
        assert_eq!(args.base_dir, PathBuf::from("/tmp/assets"));
        assert_eq!(args.file_names(), vec!["a.png", "b.webp"]);
    }

    #[test]
    fn scan_conflicts_with_files() {
        assert!(Args::try_parse_from(["inspect", "--scan", "a.png"]).is_err());
    }

    #[test]
    fn max_depth_requires_scan() {
        assert!(Args::try_parse_from(["inspect", "--max-depth", "2"]).is_err());
        let args = Args::try_parse_from(["inspect", "--scan", "--max-depth", "2"]).unwrap();
        assert_eq!(args.max_depth, Some(2));
    }
}
