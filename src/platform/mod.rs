//! # 平台外壳模块（platform）
//!
//! ## 设计思路
//!
//! 收拢所有与桌面系统原生能力打交道的薄封装：
//!
//! - `singleton`：命名互斥体单实例检测（Win32 `CreateMutexW`）
//! - `dialog`：消息弹窗与保存文件对话框（`rfd`）
//!
//! 混淆核心不依赖本模块的任何类型，平台能力只在动作层与入口处消费。

pub mod dialog;
pub mod singleton;
