//! # 剪贴板读写模块
//!
//! ## 设计思路
//!
//! 将与系统剪贴板交互的逻辑独立出来，对上层只暴露两个操作：
//! 读出图像（统一编码为 PNG 字节）与写回图像（PNG 字节解码后落盘剪贴板）。
//! 混淆核心因此只消费一种固定的字节格式，与剪贴板实现解耦。
//!
//! ## 实现思路
//!
//! - `arboard` 以原始 RGBA 像素交换剪贴板图像，读出后在本模块内
//!   编码为 PNG，写回前再解码还原为 RGBA。
//! - 剪贴板为空或内容不是图像统一归为 `AppError::Clipboard`。
//! - 读与写之间不持有剪贴板锁：操作期间外部程序改写剪贴板的竞争
//!   是已接受的行为，不检测也不重试。

use std::borrow::Cow;
use std::io::Cursor;

use image::{DynamicImage, ImageFormat, RgbaImage};

use crate::error::AppError;

/// 读取剪贴板中的图像并编码为 PNG 字节。
///
/// 剪贴板为空或内容不是图像时返回 `AppError::Clipboard`。
pub fn read_image_bytes() -> Result<Vec<u8>, AppError> {
    let mut clipboard = arboard::Clipboard::new()
        .map_err(|e| AppError::Clipboard(format!("无法访问剪贴板：{}", e)))?;

    let image_data = clipboard
        .get_image()
        .map_err(|e| AppError::Clipboard(format!("复制的不是图像：{}", e)))?;

    let width = image_data.width as u32;
    let height = image_data.height as u32;
    let image = RgbaImage::from_raw(width, height, image_data.bytes.into_owned())
        .ok_or_else(|| AppError::Clipboard("创建图像缓冲区失败".to_string()))?;

    let mut buf = Cursor::new(Vec::new());
    DynamicImage::ImageRgba8(image)
        .write_to(&mut buf, ImageFormat::Png)
        .map_err(|e| AppError::Clipboard(format!("剪贴板图像编码失败：{}", e)))?;

    log::debug!("📋 读取剪贴板图像 - {}x{}", width, height);
    Ok(buf.into_inner())
}

/// 将 PNG 字节解码后写回系统剪贴板。
pub fn write_image_bytes(bytes: &[u8]) -> Result<(), AppError> {
    let decoded = image::load_from_memory(bytes)
        .map_err(|e| AppError::Clipboard(format!("待写回的图像无法解码：{}", e)))?;

    let rgba = decoded.to_rgba8();
    let (width, height) = rgba.dimensions();

    let mut clipboard = arboard::Clipboard::new()
        .map_err(|e| AppError::Clipboard(format!("无法访问剪贴板：{}", e)))?;

    clipboard
        .set_image(arboard::ImageData {
            width: width as usize,
            height: height as usize,
            bytes: Cow::Owned(rgba.into_raw()),
        })
        .map_err(|e| AppError::Clipboard(format!("写回剪贴板失败：{}", e)))?;

    log::info!("✅ 已写回剪贴板 - {}x{}", width, height);
    Ok(())
}
