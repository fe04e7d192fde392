//! # 阅读导航 Tauri Commands
//!
//! 所有 command 都需要已登录，并返回操作后的完整 `ReaderView`，
//! 前端直接用返回值替换本地渲染状态。

use tauri::State;

use crate::models::display::ReaderView;
use crate::services::app_state::AppState;

#[tauri::command]
pub async fn get_reader_view(state: State<'_, AppState>) -> Result<ReaderView, String> {
    state.reader_view()
}

/// 翻转侧边栏中模块的展开状态
///
/// # 错误
/// 未登录或模块 ID 不存在
#[tauri::command]
pub async fn toggle_module(
    module_id: String,
    state: State<'_, AppState>,
) -> Result<ReaderView, String> {
    state.require_reader()?;
    state.navigation.toggle_module(&module_id)?;
    state.reader_view()
}

/// 选择章节（同时关闭移动端侧边栏浮层）
///
/// # 错误
/// 未登录或章节 ID 不存在
#[tauri::command]
pub async fn select_chapter(
    chapter_id: String,
    state: State<'_, AppState>,
) -> Result<ReaderView, String> {
    state.require_reader()?;
    state.navigation.select_chapter(&chapter_id)?;
    state.reader_view()
}

#[tauri::command]
pub async fn toggle_locale(state: State<'_, AppState>) -> Result<ReaderView, String> {
    state.require_reader()?;
    state.navigation.toggle_locale()?;
    state.reader_view()
}

#[tauri::command]
pub async fn toggle_sidebar(state: State<'_, AppState>) -> Result<ReaderView, String> {
    state.require_reader()?;
    state.navigation.toggle_sidebar()?;
    state.reader_view()
}
