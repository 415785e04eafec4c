//! # 菜单动作模块
//!
//! ## 设计思路
//!
//! 三个菜单动作（混淆 / 保存 / 关于）各自串联库内模块完成一次操作。
//! 动作在事件循环线程上同步执行到底，不可取消、无超时。
//! 任何失败只终止当前操作：记一条错误日志，弹一次窗告知类别，然后丢弃。
//!
//! ## 实现思路
//!
//! - `run_*` 封装"执行 + 通知"外壳，内部函数返回 `Result` 便于测试与组合。
//! - 保存对话框被取消是正常控制流，静默返回，不弹窗也不报错。

use std::path::PathBuf;

use chrono::Local;

use crate::clipboard;
use crate::error::AppError;
use crate::mixer;
use crate::platform::dialog;

const ABOUT_TITLE: &str = "关于";
const ABOUT_TEXT: &str = "本程序从剪切板读取图像（jpg、png、bmp、webp 截图均可），\
随机修改 10 个像素后写回剪切板。\n\
混淆不改变图像尺寸；可用\"保存\"把剪切板图像另存为 PNG 文件。";

/// 混淆动作：读剪贴板 → 混淆 → 写回。
pub fn run_mix() {
    if let Err(err) = mix_clipboard_image() {
        log::error!("❌ 混淆失败：{}", err);
        dialog::notify(err.user_title(), &err.to_string());
    }
}

fn mix_clipboard_image() -> Result<(), AppError> {
    let bytes = clipboard::read_image_bytes()?;
    let mixed = mixer::mix_image_bytes(&bytes)?;
    clipboard::write_image_bytes(&mixed)?;
    Ok(())
}

/// 保存动作：读剪贴板 → 另存为对话框 → 原样写入文件。
pub fn run_save() {
    if let Err(err) = save_clipboard_image() {
        log::error!("❌ 保存失败：{}", err);
        dialog::notify(err.user_title(), &err.to_string());
    }
}

fn save_clipboard_image() -> Result<(), AppError> {
    let bytes = clipboard::read_image_bytes()?;
    let prompt_result = dialog::prompt_save_path(&default_save_name());
    write_saved_bytes(&bytes, prompt_result)
}

/// 将字节原样写入用户选定的路径。
///
/// 对话框被取消（`None`）时无事发生：不写文件、不报错。
fn write_saved_bytes(bytes: &[u8], path: Option<PathBuf>) -> Result<(), AppError> {
    let Some(path) = path else {
        log::info!("💾 保存对话框已取消");
        return Ok(());
    };

    std::fs::write(&path, bytes)?;
    log::info!("💾 图像已保存到 {}", path.display());
    Ok(())
}

/// 关于动作：弹窗展示程序说明。
pub fn run_about() {
    dialog::notify(ABOUT_TITLE, ABOUT_TEXT);
}

/// 默认保存文件名：毫秒时间戳 + `.png`。
fn default_save_name() -> String {
    format!("{}.png", Local::now().timestamp_millis())
}
