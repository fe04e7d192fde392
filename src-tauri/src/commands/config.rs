//! # 配置 Tauri Commands

use tauri::State;

use crate::services::app_state::AppState;
use crate::services::config::ReaderConfig;
use crate::utils::path;

/// 读取启动时加载的配置（只读）
#[tauri::command]
pub async fn read_reader_config(state: State<'_, AppState>) -> Result<ReaderConfig, String> {
    Ok(state.config().clone())
}

/// 获取配置文件的绝对路径（文件可能尚不存在）
#[tauri::command]
pub async fn get_reader_config_path() -> Result<String, String> {
    let path = path::get_reader_config_path()?;
    Ok(path.to_string_lossy().to_string())
}
