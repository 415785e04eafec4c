//! 统一错误类型模块
//!
//! # 设计思路
//!
//! 定义全局统一的 `AppError` 枚举，所有可失败的操作统一返回
//! `Result<T, AppError>`，避免各处 `.map_err(|e| e.to_string())` 的
//! 不一致模式。核心流水线的 `MixError` 通过 `From` 上转，无需手动 map。
//!
//! # 实现思路
//!
//! - 使用 `thiserror` 派生可读错误消息。
//! - 每类错误对应一个固定的弹窗标题（`user_title`），动作层据此通知用户。
//! - 对话框取消与单实例冲突不属于错误，走各自的控制流。

use crate::mixer::MixError;

/// 应用级统一错误类型。
///
/// 所有错误仅终止当前操作，不终止进程；通过一次消息弹窗告知用户后丢弃。
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// 剪贴板为空、内容不是图像，或剪贴板本身不可访问
    #[error("剪贴板操作失败：{0}")]
    Clipboard(String),

    /// 混淆流水线错误（解码 / 编码）
    #[error("{0}")]
    Mix(#[from] MixError),

    /// 文件系统 I/O 错误（保存图像时）
    #[error("文件系统错误：{0}")]
    Io(#[from] std::io::Error),

    /// 托盘 / 事件循环等外壳初始化失败
    #[error("系统外壳错误：{0}")]
    Shell(String),
}

impl AppError {
    /// 通知弹窗使用的标题。
    pub fn user_title(&self) -> &'static str {
        match self {
            AppError::Clipboard(_) => "错误",
            AppError::Mix(MixError::Decode(_)) => "解析图像错误",
            AppError::Mix(MixError::Encode(_)) => "失败",
            AppError::Io(_) => "保存失败",
            AppError::Shell(_) => "错误",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::AppError;
    use crate::mixer::MixError;

    #[test]
    fn user_title_matches_error_category() {
        assert_eq!(
            AppError::Mix(MixError::Decode("bad".into())).user_title(),
            "解析图像错误"
        );
        assert_eq!(
            AppError::Mix(MixError::Encode("bad".into())).user_title(),
            "失败"
        );
        assert_eq!(AppError::Clipboard("empty".into()).user_title(), "错误");
    }

    #[test]
    fn mix_error_converts_via_from() {
        let err: AppError = MixError::Decode("not a png".into()).into();
        assert!(matches!(err, AppError::Mix(MixError::Decode(_))));
    }
}
