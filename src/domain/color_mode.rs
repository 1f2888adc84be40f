use image::ColorType;
use std::fmt;

/// デコード後の画像のチャンネル構成を表す短いコード。
///
/// パレット（インデックスカラー）画像はデコーダによって展開されるため、
/// ここでは展開後の構成が報告されます。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorMode {
    /// 8bit グレースケール
    L,
    /// 8bit グレースケール + アルファ
    La,
    /// 8bit RGB
    Rgb,
    /// 8bit RGBA
    Rgba,
    /// 16bit グレースケール
    L16,
    /// 16bit グレースケール + アルファ
    La16,
    /// 16bit RGB
    Rgb16,
    /// 16bit RGBA
    Rgba16,
    /// 32bit 浮動小数点 RGB
    Rgb32F,
    /// 32bit 浮動小数点 RGBA
    Rgba32F,
    /// 上記以外（将来 `image` クレートに追加される型など）
    Unknown,
}

impl ColorMode {
    /// 表示用のモードコードを返します。
    pub fn code(&self) -> &'static str {
        match self {
            ColorMode::L => "L",
            ColorMode::La => "LA",
            ColorMode::Rgb => "RGB",
            ColorMode::Rgba => "RGBA",
            ColorMode::L16 => "I;16",
            ColorMode::La16 => "LA;16",
            ColorMode::Rgb16 => "RGB;16",
            ColorMode::Rgba16 => "RGBA;16",
            ColorMode::Rgb32F => "RGB;F",
            ColorMode::Rgba32F => "RGBA;F",
            ColorMode::Unknown => "?",
        }
    }
}

impl From<ColorType> for ColorMode {
    fn from(color: ColorType) -> Self {
        // ColorType は non_exhaustive のため、末尾のワイルドカードが必要
        match color {
            ColorType::L8 => ColorMode::L,
            ColorType::La8 => ColorMode::La,
            ColorType::Rgb8 => ColorMode::Rgb,
            ColorType::Rgba8 => ColorMode::Rgba,
            ColorType::L16 => ColorMode::L16,
            ColorType::La16 => ColorMode::La16,
            ColorType::Rgb16 => ColorMode::Rgb16,
            ColorType::Rgba16 => ColorMode::Rgba16,
            ColorType::Rgb32F => ColorMode::Rgb32F,
            ColorType::Rgba32F => ColorMode::Rgba32F,
            _ => ColorMode::Unknown,
        }
    }
}

impl fmt::Display for ColorMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn eight_bit_layouts_map_to_short_codes() {
        assert_eq!(ColorMode::from(ColorType::L8).to_string(), "L");
        assert_eq!(ColorMode::from(ColorType::La8).to_string(), "LA");
        assert_eq!(ColorMode::from(ColorType::Rgb8).to_string(), "RGB");
        assert_eq!(ColorMode::from(ColorType::Rgba8).to_string(), "RGBA");
    }

    /// 16bit と浮動小数点の構成は 8bit と区別できること
    #[test]
    fn wide_layouts_are_distinguished() {
        assert_eq!(ColorMode::from(ColorType::L16).code(), "I;16");
        assert_eq!(ColorMode::from(ColorType::Rgba16).code(), "RGBA;16");
        assert_eq!(ColorMode::from(ColorType::Rgb32F).code(), "RGB;F");
        assert_ne!(
            ColorMode::from(ColorType::Rgb16),
            ColorMode::from(ColorType::Rgb8)
        );
    }
}
