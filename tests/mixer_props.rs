//! 混淆流水线的性质测试
//!
//! 对随机生成的小尺寸图像验证三条核心不变量：
//! 尺寸不变、改动像素数不超过上限、alpha 通道逐像素保持。
//! 未被改写的像素与"精度拓宽后的原图"逐位一致。

use image::{DynamicImage, RgbaImage};
use proptest::prelude::*;

use pixel_mix::mixer::{
    decode_image, mix_image_bytes, widen_to_rgba16, MUTATED_PIXEL_COUNT,
};

/// 将 RGBA8 像素数据编码为 PNG 字节。
fn png_bytes_of(width: u32, height: u32, pixels: Vec<u8>) -> Vec<u8> {
    let image = RgbaImage::from_raw(width, height, pixels).expect("valid pixel buffer");
    let mut buf = std::io::Cursor::new(Vec::new());
    DynamicImage::ImageRgba8(image)
        .write_to(&mut buf, image::ImageFormat::Png)
        .expect("png encoding of a valid buffer");
    buf.into_inner()
}

/// 随机小尺寸 RGBA 图像：1..=16 × 1..=16，像素内容任意。
fn raster_strategy() -> impl Strategy<Value = (u32, u32, Vec<u8>)> {
    (1u32..=16, 1u32..=16).prop_flat_map(|(width, height)| {
        prop::collection::vec(any::<u8>(), (width * height * 4) as usize)
            .prop_map(move |pixels| (width, height, pixels))
    })
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(48))]

    #[test]
    fn mix_preserves_dimensions((width, height, pixels) in raster_strategy()) {
        let input = png_bytes_of(width, height, pixels);

        let output = mix_image_bytes(&input).expect("mixing a valid png");
        let mixed = decode_image(&output).expect("mixed output must decode");

        prop_assert_eq!(mixed.to_rgba16().dimensions(), (width, height));
    }

    #[test]
    fn mix_touches_at_most_the_pixel_budget((width, height, pixels) in raster_strategy()) {
        let source = RgbaImage::from_raw(width, height, pixels.clone()).expect("valid buffer");
        let widened = widen_to_rgba16(&DynamicImage::ImageRgba8(source));
        let input = png_bytes_of(width, height, pixels);

        let output = mix_image_bytes(&input).expect("mixing a valid png");
        let mixed = decode_image(&output).expect("mixed output must decode").to_rgba16();

        let changed = widened
            .pixels()
            .zip(mixed.pixels())
            .filter(|(before, after)| before != after)
            .count();
        prop_assert!(
            changed <= MUTATED_PIXEL_COUNT,
            "{} pixels changed, budget is {}",
            changed,
            MUTATED_PIXEL_COUNT
        );
    }

    #[test]
    fn mix_preserves_alpha_channel((width, height, pixels) in raster_strategy()) {
        let source = RgbaImage::from_raw(width, height, pixels.clone()).expect("valid buffer");
        let widened = widen_to_rgba16(&DynamicImage::ImageRgba8(source));
        let input = png_bytes_of(width, height, pixels);

        let output = mix_image_bytes(&input).expect("mixing a valid png");
        let mixed = decode_image(&output).expect("mixed output must decode").to_rgba16();

        for (before, after) in widened.pixels().zip(mixed.pixels()) {
            prop_assert_eq!(before[3], after[3], "alpha must be preserved per pixel");
        }
    }
}

#[test]
fn corrupted_png_fails_with_decode_error() {
    // 合法 PNG 签名 + 损坏的块数据：解码必须失败，不得 panic。
    let mut bytes = vec![0x89, b'P', b'N', b'G', 0x0d, 0x0a, 0x1a, 0x0a];
    bytes.extend_from_slice(&[0xde; 32]);
    assert!(mix_image_bytes(&bytes).is_err());
}

#[test]
fn repeated_mixing_stays_decodable() {
    // 多轮"混淆产物再混淆"的编解码往返稳定性。
    let mut bytes = png_bytes_of(8, 8, vec![127u8; 8 * 8 * 4]);

    for _ in 0..5 {
        bytes = mix_image_bytes(&bytes).expect("each round must re-encode");
        let decoded = decode_image(&bytes).expect("each round must decode");
        assert_eq!(decoded.to_rgba16().dimensions(), (8, 8));
    }
}
