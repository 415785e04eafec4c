//! # 原生对话框模块
//!
//! ## 设计思路
//!
//! 两个只发不收的原生交互：消息弹窗（通知错误或关于信息）
//! 与保存文件对话框（用户取消时返回 `None`，上层按无事发生处理）。

use std::path::PathBuf;

/// 弹出一个阻塞的消息框。发出即忘，不消费返回值。
pub fn notify(title: &str, message: &str) {
    rfd::MessageDialog::new()
        .set_level(rfd::MessageLevel::Info)
        .set_title(title)
        .set_description(message)
        .set_buttons(rfd::MessageButtons::Ok)
        .show();
}

/// 弹出"另存为"对话框，返回用户选择的路径。
///
/// 用户取消时返回 `None`，不视为错误。
pub fn prompt_save_path(default_name: &str) -> Option<PathBuf> {
    rfd::FileDialog::new()
        .set_file_name(default_name)
        .add_filter("PNG 图片 (*.png)", &["png"])
        .save_file()
}
