// 防止在 Windows 发布版本中显示额外的控制台窗口，不要删除！
#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

//! # 图片像素混淆器 — 应用入口
//!
//! 本文件仅负责日志初始化、单实例检测与托盘事件循环的派发。
//! 业务逻辑分布在各子模块中，详见 `lib.rs` 架构文档。

#[cfg(target_os = "windows")]
fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    use pixel_mix::platform::singleton::{self, SingletonState};

    // 单实例检测：冲突时通知一次后立即退出。
    let _guard = match singleton::acquire() {
        SingletonState::AlreadyRunning => {
            pixel_mix::platform::dialog::notify("错误", "程序已运行。看右下角系统托盘");
            return;
        }
        SingletonState::Acquired(guard) => guard,
    };

    if let Err(err) = shell::run() {
        log::error!("❌ 启动失败：{}", err);
        pixel_mix::platform::dialog::notify(err.user_title(), &err.to_string());
    }
}

#[cfg(target_os = "windows")]
mod shell {
    use std::time::{Duration, Instant};

    use pixel_mix::error::AppError;
    use pixel_mix::{actions, tray};
    use tray_icon::menu::MenuEvent;
    use winit::application::ApplicationHandler;
    use winit::event::WindowEvent;
    use winit::event_loop::{ActiveEventLoop, ControlFlow, EventLoop};

    /// 菜单事件轮询间隔。muda 的事件走独立通道，不会唤醒 winit，
    /// 因此以短间隔的 WaitUntil 代替纯阻塞等待。
    const MENU_POLL_INTERVAL: Duration = Duration::from_millis(100);

    struct App {
        // 托盘图标必须存活到事件循环结束，否则图标会从托盘消失。
        _tray: tray_icon::TrayIcon,
        menu_ids: tray::TrayMenuIds,
    }

    impl ApplicationHandler for App {
        fn resumed(&mut self, _event_loop: &ActiveEventLoop) {}

        fn window_event(
            &mut self,
            _event_loop: &ActiveEventLoop,
            _window_id: winit::window::WindowId,
            _event: WindowEvent,
        ) {
        }

        fn about_to_wait(&mut self, event_loop: &ActiveEventLoop) {
            // 逐个取出菜单事件；动作同步执行完才处理下一个。
            while let Ok(event) = MenuEvent::receiver().try_recv() {
                if event.id == self.menu_ids.mix {
                    actions::run_mix();
                } else if event.id == self.menu_ids.save {
                    actions::run_save();
                } else if event.id == self.menu_ids.about {
                    actions::run_about();
                } else if event.id == self.menu_ids.quit {
                    log::info!("👋 退出程序");
                    event_loop.exit();
                    return;
                }
            }

            event_loop.set_control_flow(ControlFlow::WaitUntil(
                Instant::now() + MENU_POLL_INTERVAL,
            ));
        }
    }

    /// 构建托盘并运行事件循环，直到用户选择退出。
    pub fn run() -> Result<(), AppError> {
        let event_loop = EventLoop::new()
            .map_err(|e| AppError::Shell(format!("创建事件循环失败：{}", e)))?;

        let (tray, menu_ids) = tray::build_tray()?;
        log::info!("✅ 托盘就绪");

        let mut app = App {
            _tray: tray,
            menu_ids,
        };
        event_loop
            .run_app(&mut app)
            .map_err(|e| AppError::Shell(format!("事件循环运行失败：{}", e)))?;

        Ok(())
    }
}

#[cfg(not(target_os = "windows"))]
fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    log::error!("❌ 本程序的托盘外壳目前仅支持 Windows");
    std::process::exit(1);
}
