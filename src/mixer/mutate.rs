//! # 随机像素改写模块
//!
//! ## 设计思路
//!
//! 在统一的 16 位 RGBA 画布上随机挑选固定数量的坐标，
//! 丢弃其颜色并替换为全新的随机 RGB 值，alpha 按读取时的原值保留。
//!
//! ## 实现思路
//!
//! - 坐标在 `[0,width) × [0,height)` 上逐轴独立均匀抽取，允许重复；
//!   同一坐标被抽中多次时后写覆盖先写，不做去重。
//! - 随机通道按 8 位生成后拓宽到 16 位（`v * 257`），
//!   与画布的拓宽规则保持一致。
//! - RNG 由调用方注入，测试中可传入固定种子的 `StdRng` 复现结果。

use image::Rgba;
use rand::Rng;

use super::pipeline::Canvas;

/// 每次混淆改写的像素数量。
pub const MUTATED_PIXEL_COUNT: usize = 10;

/// 将 8 位通道值拓宽到 16 位全量程。
fn widen_channel(value: u8) -> u16 {
    u16::from(value) * 257
}

/// 在画布上随机改写 `count` 个像素的 RGB 通道。
///
/// alpha 通道保留被改写像素在改写时刻的原值。
/// 空画布直接跳过（正常解码不会产生，防御性处理）。
pub fn scramble_pixels(canvas: &mut Canvas, count: usize, rng: &mut impl Rng) {
    let (width, height) = canvas.dimensions();
    if width == 0 || height == 0 {
        log::warn!("⚠️ 画布为空（{}x{}），跳过像素改写", width, height);
        return;
    }

    for _ in 0..count {
        let x = rng.random_range(0..width);
        let y = rng.random_range(0..height);

        let alpha = canvas.get_pixel(x, y)[3];
        let r = widen_channel(rng.random::<u8>());
        let g = widen_channel(rng.random::<u8>());
        let b = widen_channel(rng.random::<u8>());

        canvas.put_pixel(x, y, Rgba([r, g, b, alpha]));
    }
}
