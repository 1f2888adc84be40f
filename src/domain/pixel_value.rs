use image::{DynamicImage, GenericImageView, Pixel};
use std::fmt;

/// 1チャンネル分の値。16bit までの整数と 32bit 浮動小数点を区別して保持します。
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Channel {
    Int(u16),
    Float(f32),
}

impl fmt::Display for Channel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Channel::Int(v) => write!(f, "{}", v),
            // `{:?}` なら 1.0 のような整数値でも小数点付きで表示される
            Channel::Float(v) => write!(f, "{:?}", v),
        }
    }
}

/// 1ピクセルの値（チャンネルの並び）。
///
/// 表示形式はチャンネル数で変わります。
/// - 1チャンネル: `128`
/// - 複数チャンネル: `(255, 0, 0, 255)`
#[derive(Debug, Clone, PartialEq)]
pub struct PixelValue(Vec<Channel>);

impl PixelValue {
    pub fn from_ints<T: Copy + Into<u16>>(channels: &[T]) -> Self {
        Self(channels.iter().map(|&c| Channel::Int(c.into())).collect())
    }

    pub fn from_floats(channels: &[f32]) -> Self {
        Self(channels.iter().map(|&c| Channel::Float(c)).collect())
    }

    /// 画像の (x, y) にあるピクセル値を、デコード時のチャンネル構成のまま読み取ります。
    ///
    /// 座標は呼び出し側で範囲内であることを保証してください。
    pub fn at(image: &DynamicImage, x: u32, y: u32) -> Self {
        match image {
            DynamicImage::ImageLuma8(buf) => Self::from_ints(buf.get_pixel(x, y).channels()),
            DynamicImage::ImageLumaA8(buf) => Self::from_ints(buf.get_pixel(x, y).channels()),
            DynamicImage::ImageRgb8(buf) => Self::from_ints(buf.get_pixel(x, y).channels()),
            DynamicImage::ImageRgba8(buf) => Self::from_ints(buf.get_pixel(x, y).channels()),
            DynamicImage::ImageLuma16(buf) => Self::from_ints(buf.get_pixel(x, y).channels()),
            DynamicImage::ImageLumaA16(buf) => Self::from_ints(buf.get_pixel(x, y).channels()),
            DynamicImage::ImageRgb16(buf) => Self::from_ints(buf.get_pixel(x, y).channels()),
            DynamicImage::ImageRgba16(buf) => Self::from_ints(buf.get_pixel(x, y).channels()),
            DynamicImage::ImageRgb32F(buf) => Self::from_floats(buf.get_pixel(x, y).channels()),
            DynamicImage::ImageRgba32F(buf) => Self::from_floats(buf.get_pixel(x, y).channels()),
            // 未知のバリアントは RGBA8 に変換して読む
            other => Self::from_ints(other.get_pixel(x, y).channels()),
        }
    }
}

impl fmt::Display for PixelValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let [single] = self.0.as_slice() {
            return write!(f, "{}", single);
        }
        write!(f, "(")?;
        for (i, c) in self.0.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", c)?;
        }
        write!(f, ")")
    }
}

/// 画像の四隅のピクセル値。並びは 左上, 右上, 左下, 右下 の順です。
#[derive(Debug, Clone, PartialEq)]
pub struct CornerSamples {
    pub top_left: PixelValue,
    pub top_right: PixelValue,
    pub bottom_left: PixelValue,
    pub bottom_right: PixelValue,
}

impl CornerSamples {
    /// 四隅をサンプリングします。幅か高さが 0 の画像では `None` を返します。
    pub fn from_image(image: &DynamicImage) -> Option<Self> {
        let (w, h) = image.dimensions();
        if w == 0 || h == 0 {
            return None;
        }
        let (right, bottom) = (w - 1, h - 1);
        Some(Self {
            top_left: PixelValue::at(image, 0, 0),
            top_right: PixelValue::at(image, right, 0),
            bottom_left: PixelValue::at(image, 0, bottom),
            bottom_right: PixelValue::at(image, right, bottom),
        })
    }

    pub fn as_array(&self) -> [&PixelValue; 4] {
        [
            &self.top_left,
            &self.top_right,
            &self.bottom_left,
            &self.bottom_right,
        ]
    }
}

impl fmt::Display for CornerSamples {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [a, b, c, d] = self.as_array();
        write!(f, "[{}, {}, {}, {}]", a, b, c, d)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{GrayImage, ImageBuffer, Luma, Rgb, RgbImage, Rgba, Rgba32FImage};

    #[test]
    fn single_channel_prints_bare_number() {
        let v = PixelValue::from_ints(&[42u8]);
        assert_eq!(v.to_string(), "42");
    }

    #[test]
    fn multi_channel_prints_tuple() {
        let v = PixelValue::from_ints(&[255u8, 0, 10, 128]);
        assert_eq!(v.to_string(), "(255, 0, 10, 128)");
    }

    #[test]
    fn float_channels_keep_decimal_point() {
        let v = PixelValue::from_floats(&[1.0, 0.5, 0.0]);
        assert_eq!(v.to_string(), "(1.0, 0.5, 0.0)");
    }

    /// 四隅がそれぞれ正しい座標から読まれていること
    #[test]
    fn corners_are_read_from_extreme_coordinates() {
        let img = RgbImage::from_fn(4, 3, |x, y| Rgb([x as u8, y as u8, 7]));
        let samples = CornerSamples::from_image(&DynamicImage::ImageRgb8(img)).unwrap();

        assert_eq!(samples.top_left.to_string(), "(0, 0, 7)");
        assert_eq!(samples.top_right.to_string(), "(3, 0, 7)");
        assert_eq!(samples.bottom_left.to_string(), "(0, 2, 7)");
        assert_eq!(samples.bottom_right.to_string(), "(3, 2, 7)");
        assert_eq!(
            samples.to_string(),
            "[(0, 0, 7), (3, 0, 7), (0, 2, 7), (3, 2, 7)]"
        );
    }

    #[test]
    fn one_pixel_image_repeats_the_same_value() {
        let img = GrayImage::from_pixel(1, 1, Luma([9]));
        let samples = CornerSamples::from_image(&DynamicImage::ImageLuma8(img)).unwrap();
        assert_eq!(samples.to_string(), "[9, 9, 9, 9]");
    }

    #[test]
    fn sixteen_bit_values_are_not_truncated() {
        let img: ImageBuffer<Luma<u16>, Vec<u16>> = ImageBuffer::from_pixel(2, 2, Luma([60000]));
        let v = PixelValue::at(&DynamicImage::ImageLuma16(img), 1, 1);
        assert_eq!(v, PixelValue(vec![Channel::Int(60000)]));
        assert_eq!(v.to_string(), "60000");
    }

    #[test]
    fn float_image_is_sampled_as_floats() {
        let img = Rgba32FImage::from_pixel(2, 2, Rgba([0.25, 0.5, 0.75, 1.0]));
        let v = PixelValue::at(&DynamicImage::ImageRgba32F(img), 0, 1);
        assert_eq!(v.to_string(), "(0.25, 0.5, 0.75, 1.0)");
    }

    #[test]
    fn empty_image_has_no_corners() {
        let img = RgbImage::new(0, 0);
        assert!(CornerSamples::from_image(&DynamicImage::ImageRgb8(img)).is_none());
    }
}
