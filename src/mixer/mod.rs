//! # 像素混淆模块（mixer）
//!
//! ## 设计思路
//!
//! 该模块将"字节 → 图像 → 16 位画布 → 随机改写 → 字节"的过程按职责拆分，
//! 与平台完全解耦：不触碰剪贴板，不依赖任何窗口或托盘类型，
//! 因此可以在任意平台上完整地单元测试。
//!
//! - `pipeline`：解码、拓宽、重编码与整条流程的编排
//! - `mutate`：随机像素改写（核心算法）
//! - `error`：`MixError` 错误模型
//!
//! ## 实现思路
//!
//! 调用链固定为：
//!
//! ```text
//! mix_image_bytes(PNG 字节)
//!    ↓
//! decode_image          （image::load_from_memory）
//!    ↓
//! widen_to_rgba16       （统一到 16 位 RGBA 画布）
//!    ↓
//! scramble_pixels       （随机改写 10 个像素，保留 alpha）
//!    ↓
//! encode_png            （重编码，尺寸不变）
//! ```

mod error;
mod mutate;
mod pipeline;

pub use error::MixError;
pub use mutate::{scramble_pixels, MUTATED_PIXEL_COUNT};
pub use pipeline::{decode_image, encode_png, mix_image_bytes, widen_to_rgba16, Canvas};
