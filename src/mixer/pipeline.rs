//! # 解码与重编码流水线模块
//!
//! ## 设计思路
//!
//! 将"字节 → 图像 → 画布 → 字节"的过程集中管理。
//! 解码后统一拓宽到 16 位 RGBA 画布，保证无论源图内部是什么颜色模型，
//! 改写阶段面对的都是同一种像素表示；未被改写像素因此会经历一次
//! 精度拓宽往返，这是有意为之的取舍而非缺陷。
//!
//! ## 实现思路
//!
//! 1. `image::load_from_memory` 解码，失败即 `MixError::Decode`
//! 2. `to_rgba16` 经通用颜色访问器逐像素拓宽
//! 3. `scramble_pixels` 随机改写（见 `mutate` 模块）
//! 4. PNG 重编码，失败即 `MixError::Encode`
//!
//! 各阶段耗时记入 debug 日志，便于诊断大图耗时。

use std::io::Cursor;
use std::time::Instant;

use image::{DynamicImage, GenericImageView, ImageBuffer, ImageFormat, Rgba};

use super::mutate::{scramble_pixels, MUTATED_PIXEL_COUNT};
use super::MixError;

/// 混淆阶段操作的统一画布：16 位 RGBA。
pub type Canvas = ImageBuffer<Rgba<u16>, Vec<u16>>;

/// 将编码字节解码为图像。
pub fn decode_image(bytes: &[u8]) -> Result<DynamicImage, MixError> {
    image::load_from_memory(bytes)
        .map_err(|e| MixError::Decode(format!("图片解码失败：{}", e)))
}

/// 经通用颜色访问器把任意颜色模型的图像拓宽为 16 位 RGBA 画布。
///
/// 画布尺寸与源图完全一致。
pub fn widen_to_rgba16(image: &DynamicImage) -> Canvas {
    image.to_rgba16()
}

/// 将画布重编码为 PNG 字节。
pub fn encode_png(canvas: Canvas) -> Result<Vec<u8>, MixError> {
    let mut buf = Cursor::new(Vec::new());
    DynamicImage::ImageRgba16(canvas)
        .write_to(&mut buf, ImageFormat::Png)
        .map_err(|e| MixError::Encode(format!("PNG 编码失败：{}", e)))?;
    Ok(buf.into_inner())
}

/// 完整混淆流程：解码 → 拓宽 → 随机改写 → 重编码。
///
/// 输出图像与输入图像尺寸一致，至多 [`MUTATED_PIXEL_COUNT`] 个像素
/// 的 RGB 被改写，其余像素仅经历精度拓宽。
pub fn mix_image_bytes(bytes: &[u8]) -> Result<Vec<u8>, MixError> {
    let started = Instant::now();

    let decoded = decode_image(bytes)?;
    let (width, height) = decoded.dimensions();
    let decode_cost = started.elapsed();

    let mut canvas = widen_to_rgba16(&decoded);
    drop(decoded);

    let mut rng = rand::rng();
    scramble_pixels(&mut canvas, MUTATED_PIXEL_COUNT, &mut rng);

    let encode_started = Instant::now();
    let encoded = encode_png(canvas)?;

    log::debug!(
        "⏱️ 混淆阶段耗时 - decode: {:?} encode: {:?}",
        decode_cost,
        encode_started.elapsed()
    );
    log::info!(
        "✅ 混淆完成 - {}x{}，输入 {} 字节，输出 {} 字节，总耗时 {:?}",
        width,
        height,
        bytes.len(),
        encoded.len(),
        started.elapsed()
    );

    Ok(encoded)
}

#[cfg(test)]
mod tests {
    use image::{DynamicImage, GenericImageView, Rgba, RgbaImage};

    use super::{decode_image, mix_image_bytes, widen_to_rgba16};
    use crate::mixer::MixError;

    /// 将 8 位 RGBA 图像编码为 PNG 字节。
    fn png_bytes_of(image: RgbaImage) -> Vec<u8> {
        let mut buf = std::io::Cursor::new(Vec::new());
        DynamicImage::ImageRgba8(image)
            .write_to(&mut buf, image::ImageFormat::Png)
            .unwrap();
        buf.into_inner()
    }

    #[test]
    fn decode_rejects_garbage_bytes() {
        let result = decode_image(b"definitely not a png");
        assert!(matches!(result, Err(MixError::Decode(_))));
    }

    #[test]
    fn decode_rejects_truncated_png() {
        let mut bytes = png_bytes_of(RgbaImage::from_pixel(4, 4, Rgba([1, 2, 3, 255])));
        bytes.truncate(bytes.len() / 2);
        assert!(matches!(decode_image(&bytes), Err(MixError::Decode(_))));
    }

    #[test]
    fn mix_keeps_dimensions_of_2x2_red_raster() {
        // 2x2 不透明红色图：输出尺寸 2x2，alpha 全部保持不透明。
        let input = png_bytes_of(RgbaImage::from_pixel(2, 2, Rgba([255, 0, 0, 255])));

        let output = mix_image_bytes(&input).unwrap();
        let mixed = decode_image(&output).unwrap();

        assert_eq!((mixed.width(), mixed.height()), (2, 2));
        for pixel in mixed.to_rgba16().pixels() {
            assert_eq!(pixel[3], 0xffff, "alpha must stay fully opaque");
        }
    }

    #[test]
    fn mix_changes_at_most_ten_pixels() {
        let source = RgbaImage::from_pixel(16, 16, Rgba([10, 200, 30, 255]));
        let widened = widen_to_rgba16(&DynamicImage::ImageRgba8(source.clone()));
        let input = png_bytes_of(source);

        let output = mix_image_bytes(&input).unwrap();
        let mixed = decode_image(&output).unwrap().to_rgba16();

        let changed = widened
            .pixels()
            .zip(mixed.pixels())
            .filter(|(before, after)| before != after)
            .count();
        assert!(changed <= 10, "changed {} pixels", changed);
        assert!(changed >= 1, "expected at least one pixel to change");
    }

    #[test]
    fn mix_output_survives_repeated_mixing() {
        // 保存再混淆的往返稳定性：混淆产物必须仍可解码并再次混淆。
        let input = png_bytes_of(RgbaImage::from_pixel(6, 4, Rgba([0, 128, 255, 200])));

        let first = mix_image_bytes(&input).unwrap();
        let second = mix_image_bytes(&first).unwrap();
        let decoded = decode_image(&second).unwrap();

        assert_eq!((decoded.width(), decoded.height()), (6, 4));
    }
}
