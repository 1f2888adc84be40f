use super::path_error::PathError;
use std::fmt;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// 走査対象として扱う画像の拡張子（小文字）
const IMAGE_EXTENSIONS: &[&str] = &[
    "jpg", "jpeg", "png", "gif", "bmp", "webp", "tif", "tiff", "ico",
];

// 検証済みの基準ディレクトリ
#[derive(Debug)]
pub struct BaseDirectory {
    pub path: PathBuf,
}

impl BaseDirectory {
    // パスが存在し、ディレクトリであることを検証する
    pub fn new<P: AsRef<Path>>(path: P) -> Result<Self, PathError> {
        let path = path.as_ref();

        if !path.exists() {
            return Err(PathError::InvalidPath(format!(
                "'{}' does not exist",
                path.display()
            )));
        }
        if !path.is_dir() {
            return Err(PathError::InvalidPath(format!(
                "'{}' is not a directory",
                path.display()
            )));
        }

        Ok(Self {
            path: path.to_path_buf(),
        })
    }

    /// 配下の画像ファイルを再帰的に集め、基準ディレクトリからの相対パスで返します。
    ///
    /// 各ディレクトリ内をファイル名順に辿るため、実行ごとに出力順が変わりません。
    /// シンボリックリンクはリンク先がファイルであれば対象に含めます。
    /// `max_depth` が `None` のときは深さ無制限です。
    pub fn image_files(&self, max_depth: Option<usize>) -> Result<Vec<PathBuf>, PathError> {
        let mut walker = WalkDir::new(&self.path).min_depth(1).sort_by_file_name();
        if let Some(depth) = max_depth {
            walker = walker.max_depth(depth);
        }

        let mut names = Vec::new();
        for entry in walker {
            let entry = entry?;
            // `Path::is_file` はリンクを辿る
            if !entry.path().is_file() || !is_image_file(entry.path()) {
                continue;
            }
            // 起点配下のエントリなので strip_prefix は成功する
            if let Ok(rel) = entry.path().strip_prefix(&self.path) {
                names.push(rel.to_path_buf());
            }
        }
        Ok(names)
    }
}

/// 拡張子で画像ファイルかどうかを簡易判定します。
pub fn is_image_file(path: &Path) -> bool {
    match path.extension().and_then(|s| s.to_str()) {
        Some(ext) => IMAGE_EXTENSIONS.contains(&ext.to_lowercase().as_str()),
        None => false,
    }
}

impl fmt::Display for BaseDirectory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.path.display())
    }
}
