//! # 图片像素混淆器 — 库入口
//!
//! ## 架构总览
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────┐
//! │                 托盘外壳 (main.rs, Windows)               │
//! │                                                          │
//! │  winit 事件循环 ── 托盘菜单 (混淆 / 保存 / 关于 / 退出)   │
//! │       │                                                  │
//! └───────┼──────────────────────────────────────────────────┘
//!         ↓ 逐个派发，动作串行执行
//! ┌───────┼──────────────────────────────────────────────────┐
//! │       ↓              库 (跨平台核心)                      │
//! │                                                          │
//! │  ┌─ actions ──── 菜单动作编排（错误 → 弹窗通知）          │
//! │  │                                                       │
//! │  ├─ mixer ────── 解码 · 拓宽 · 随机改写 · 重编码          │
//! │  ├─ clipboard ── 剪贴板读写（arboard ⇄ PNG 字节）        │
//! │  ├─ platform ─── 单实例互斥体 / 弹窗 / 保存对话框         │
//! │  ├─ tray ─────── 托盘图标与菜单构建                       │
//! │  └─ error ────── AppError (统一错误类型)                  │
//! └──────────────────────────────────────────────────────────┘
//! ```
//!
//! ## 模块职责
//!
//! | 模块 | 职责 |
//! |------|------|
//! | [`error`] | 统一错误类型 `AppError` 及用户可见的弹窗标题 |
//! | [`mixer`] | 核心流水线：PNG 解码 → 16 位画布 → 随机像素改写 → 重编码 |
//! | [`clipboard`] | 系统剪贴板图像的读出（编码为 PNG）与写回 |
//! | [`platform`] | 单实例检测、消息弹窗、保存文件对话框（仅 Windows） |
//! | [`tray`] | 托盘图标、四项菜单与菜单 ID（仅 Windows） |
//! | [`actions`] | 混淆 / 保存 / 关于 三个菜单动作的串联（仅 Windows） |

pub mod clipboard;
pub mod error;
pub mod mixer;

#[cfg(target_os = "windows")]
pub mod actions;
#[cfg(target_os = "windows")]
pub mod platform;
#[cfg(target_os = "windows")]
pub mod tray;
