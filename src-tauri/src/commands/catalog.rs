//! # 课程目录 Tauri Commands
//!
//! 只读查询，不需要登录（落地页也会展示模块列表）。

use tauri::State;

use crate::models::catalog::Module;
use crate::models::display::RenderedContent;
use crate::models::navigation::Locale;
use crate::services::app_state::AppState;
use crate::services::reader;

#[tauri::command]
pub async fn list_modules(state: State<'_, AppState>) -> Result<Vec<Module>, String> {
    Ok(state.catalog().modules().to_vec())
}

/// 获取章节正文
///
/// 章节没有自己的正文时返回默认章节的内容，并标记 `isFallback`。
///
/// # 参数
/// - `chapter_id` - 章节 ID
/// - `locale` - 语言，缺省时使用当前导航状态中的语言
#[tauri::command]
pub async fn get_chapter_content(
    chapter_id: String,
    locale: Option<Locale>,
    state: State<'_, AppState>,
) -> Result<RenderedContent, String> {
    let locale = match locale {
        Some(locale) => locale,
        None => state.navigation.snapshot()?.locale,
    };
    Ok(reader::render_content(&state.catalog(), &chapter_id, locale))
}
