//! # 托盘图标与菜单模块
//!
//! ## 设计思路
//!
//! 构建托盘图标与四项菜单（混淆 / 保存 / 关于 / 退出），
//! 把各菜单项的 `MenuId` 交还给事件循环做派发匹配。
//! 图标在内存中直接绘制，免去二进制资源文件。

use tray_icon::menu::{Menu, MenuId, MenuItem, PredefinedMenuItem};
use tray_icon::{Icon, TrayIcon, TrayIconBuilder};

use crate::error::AppError;

const TOOLTIP: &str = "图片像素混淆器";
const ICON_SIZE: u32 = 64;

/// 菜单项 ID 集合，事件循环按此匹配菜单事件。
pub struct TrayMenuIds {
    pub mix: MenuId,
    pub save: MenuId,
    pub about: MenuId,
    pub quit: MenuId,
}

fn shell_err(context: &str) -> impl Fn(tray_icon::menu::Error) -> AppError + '_ {
    move |e| AppError::Shell(format!("{}：{}", context, e))
}

/// 在内存中绘制一枚 64x64 的圆形图标。
fn make_icon() -> Result<Icon, AppError> {
    let size = ICON_SIZE;
    let mut rgba = vec![0u8; (size * size * 4) as usize];

    // 青色圆盘，中心带一个深色方形"像素"点缀。
    let center = (size / 2) as f64;
    let radius = 28.0f64;

    for y in 0..size {
        for x in 0..size {
            let dx = x as f64 - center;
            let dy = y as f64 - center;
            let idx = ((y * size + x) * 4) as usize;

            if dx * dx + dy * dy <= radius * radius {
                rgba[idx] = 0x1e;
                rgba[idx + 1] = 0xa8;
                rgba[idx + 2] = 0xb8;
                rgba[idx + 3] = 0xff;
            }
            if dx.abs() <= 8.0 && dy.abs() <= 8.0 {
                rgba[idx] = 0x20;
                rgba[idx + 1] = 0x2a;
                rgba[idx + 2] = 0x33;
                rgba[idx + 3] = 0xff;
            }
        }
    }

    Icon::from_rgba(rgba, size, size)
        .map_err(|e| AppError::Shell(format!("托盘图标创建失败：{}", e)))
}

/// 构建托盘图标与菜单。
pub fn build_tray() -> Result<(TrayIcon, TrayMenuIds), AppError> {
    let menu = Menu::new();
    let mix = MenuItem::new("混淆", true, None);
    let save = MenuItem::new("保存", true, None);
    let about = MenuItem::new("关于", true, None);
    let quit = MenuItem::new("退出", true, None);

    let menu_ids = TrayMenuIds {
        mix: mix.id().clone(),
        save: save.id().clone(),
        about: about.id().clone(),
        quit: quit.id().clone(),
    };

    menu.append(&mix).map_err(shell_err("添加菜单项 混淆"))?;
    menu.append(&save).map_err(shell_err("添加菜单项 保存"))?;
    menu.append(&about).map_err(shell_err("添加菜单项 关于"))?;
    menu.append(&PredefinedMenuItem::separator())
        .map_err(shell_err("添加菜单分隔线"))?;
    menu.append(&quit).map_err(shell_err("添加菜单项 退出"))?;

    let tray = TrayIconBuilder::new()
        .with_icon(make_icon()?)
        .with_tooltip(TOOLTIP)
        .with_menu(Box::new(menu))
        .build()
        .map_err(|e| AppError::Shell(format!("托盘图标构建失败：{}", e)))?;

    Ok((tray, menu_ids))
}
