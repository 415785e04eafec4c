//! # 单实例检测模块
//!
//! ## 设计思路
//!
//! 进程启动时创建一个固定名称的 Win32 命名互斥体，持有到进程退出
//! （进程崩溃时由系统回收）。`ERROR_ALREADY_EXISTS` 即表示
//! 已有实例在运行，调用方据此通知一次后立即退出。
//!
//! ## 实现思路
//!
//! - 互斥体创建本身失败（权限等原因）不阻止程序运行，
//!   记一条警告后按"未在运行"处理。
//! - `SingletonGuard` 以 RAII 方式持有句柄，Drop 时显式关闭。

/// 互斥体名称。`Local\` 前缀限定在当前会话命名空间。
const MUTEX_NAME: &str = "Local\\pixel-mix-single-instance";

/// 单实例检测结果。
pub enum SingletonState {
    /// 本进程是唯一实例，守卫负责持有互斥体到进程退出。
    Acquired(SingletonGuard),
    /// 已有另一实例在运行。
    AlreadyRunning,
}

/// 互斥体句柄守卫。
pub struct SingletonGuard {
    handle: Option<windows::Win32::Foundation::HANDLE>,
}

fn to_wide(s: &str) -> Vec<u16> {
    use std::ffi::OsStr;
    use std::os::windows::ffi::OsStrExt;

    OsStr::new(s)
        .encode_wide()
        .chain(std::iter::once(0))
        .collect()
}

/// 尝试获取单实例互斥体。
pub fn acquire() -> SingletonState {
    use windows::core::PCWSTR;
    use windows::Win32::Foundation::{CloseHandle, GetLastError, ERROR_ALREADY_EXISTS};
    use windows::Win32::System::Threading::CreateMutexW;

    let wide_name = to_wide(MUTEX_NAME);

    unsafe {
        match CreateMutexW(None, false, PCWSTR(wide_name.as_ptr())) {
            Ok(handle) => {
                if GetLastError() == ERROR_ALREADY_EXISTS {
                    let _ = CloseHandle(handle);
                    log::info!("🔒 检测到已有实例在运行");
                    SingletonState::AlreadyRunning
                } else {
                    log::debug!("🔓 单实例互斥体已持有");
                    SingletonState::Acquired(SingletonGuard {
                        handle: Some(handle),
                    })
                }
            }
            Err(err) => {
                log::warn!("⚠️ 创建单实例互斥体失败，跳过检测：{}", err);
                SingletonState::Acquired(SingletonGuard { handle: None })
            }
        }
    }
}

impl Drop for SingletonGuard {
    fn drop(&mut self) {
        if let Some(handle) = self.handle.take() {
            unsafe {
                let _ = windows::Win32::Foundation::CloseHandle(handle);
            }
        }
    }
}
