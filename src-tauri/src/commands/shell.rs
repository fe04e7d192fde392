//! # 路由 Tauri Commands
//!
//! 前端的每次路由跳转（链接点击、浏览器前进后退、启动时的初始地址）都经由 `navigate`，
//! 由 Rust 端决定渲染哪个屏幕。

use tauri::State;

use crate::models::display::ShellView;
use crate::services::app_state::AppState;

/// 导航到指定路径
///
/// 离开 `/dashboard` 时阅读页和聊天组件随之卸载。
///
/// # 参数
/// - `path` - 路由路径（`/`、`/login`、`/signup`、`/dashboard`），未知路径渲染落地页
#[tauri::command]
pub async fn navigate(path: String, state: State<'_, AppState>) -> Result<ShellView, String> {
    state.navigate(&path)
}

#[tauri::command]
pub async fn get_shell_view(state: State<'_, AppState>) -> Result<ShellView, String> {
    state.shell.view(&state.session)
}

/// 凭据页内切换登录/注册模式
#[tauri::command]
pub async fn toggle_auth_mode(state: State<'_, AppState>) -> Result<ShellView, String> {
    state.shell.toggle_auth_mode(&state.session)
}
