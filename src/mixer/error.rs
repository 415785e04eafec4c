//! # 错误模型模块
//!
//! ## 设计思路
//!
//! 使用单一错误枚举承载混淆链路中的所有错误来源，
//! 通过 `thiserror` 保持人类可读错误，同时让调用侧可按分支匹配。

/// 混淆流水线统一错误类型。
///
/// 该类型会在上层被上转为 `AppError`，最终以弹窗形式呈现给用户。
#[derive(Debug, thiserror::Error)]
pub enum MixError {
    /// 输入字节不是合法的 PNG 图像
    #[error("解码错误：{0}")]
    Decode(String),

    /// 混淆后的画布无法重编码
    #[error("编码错误：{0}")]
    Encode(String),
}
