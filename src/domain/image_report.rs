use super::color_mode::ColorMode;
use super::pixel_value::CornerSamples;
use image::{DynamicImage, GenericImageView, ImageReader};
use log::debug;
use std::path::Path;
use thiserror::Error;

/// 1ファイルの検査中に発生しうるエラー。
///
/// 表示文字列はそのまま `Error reading <ファイル名>: <説明>` の説明部分になるため、
/// 下位のエラーメッセージを加工せずに出します。
#[derive(Debug, Error)]
pub enum InspectError {
    #[error("{0}")]
    Io(#[from] std::io::Error),

    #[error("{0}")]
    Decode(#[from] image::ImageError),

    #[error("image has no pixels ({width}x{height})")]
    EmptyImage { width: u32, height: u32 },
}

/// デコードに成功した画像の検査結果。
#[derive(Debug, Clone, PartialEq)]
pub struct ImageReport {
    mode: ColorMode,
    width: u32,
    height: u32,
    corners: CornerSamples,
}

impl ImageReport {
    /// ファイルを開いてデコードし、検査結果を作ります。
    ///
    /// フォーマットは拡張子ではなくファイルの中身から判定します。
    /// ファイルハンドルとデコード済み画像はこの関数を抜けた時点で解放されます。
    pub fn from_path(path: &Path) -> Result<Self, InspectError> {
        let reader = ImageReader::open(path)?.with_guessed_format()?;
        debug!("{}: detected format {:?}", path.display(), reader.format());
        let image = reader.decode()?;
        Self::from_image(&image)
    }

    pub fn from_image(image: &DynamicImage) -> Result<Self, InspectError> {
        let (width, height) = image.dimensions();
        let corners =
            CornerSamples::from_image(image).ok_or(InspectError::EmptyImage { width, height })?;
        Ok(Self {
            mode: ColorMode::from(image.color()),
            width,
            height,
            corners,
        })
    }

    // --- ゲッターメソッド ---

    pub fn mode(&self) -> ColorMode {
        self.mode
    }
    pub fn dimensions(&self) -> (u32, u32) {
        (self.width, self.height)
    }
    pub fn corners(&self) -> &CornerSamples {
        &self.corners
    }
}
