//! # 路径工具函数
//!
//! 提供与配置文件路径相关的工具函数：
//! - 获取阅读器配置目录（`<config_dir>/phyai-reader/`）
//! - 获取阅读器配置文件路径（`reader-config.json`）

use std::path::PathBuf;

/// 配置目录名
pub const APP_CONFIG_DIR_NAME: &str = "phyai-reader";

/// 配置文件名
pub const READER_CONFIG_FILE_NAME: &str = "reader-config.json";

/// 获取阅读器配置目录的绝对路径
///
/// 使用 `dirs` crate 获取跨平台的用户配置目录。
///
/// # 返回值
/// 返回 `<config_dir>/phyai-reader/` 的绝对路径。
///
/// # 错误
/// 如果无法确定用户配置目录（极端情况，如无 HOME 环境变量），返回错误信息。
///
/// # 示例
/// - Windows: `C:\Users\username\AppData\Roaming\phyai-reader`
/// - Linux: `/home/username/.config/phyai-reader`
/// - macOS: `/Users/username/Library/Application Support/phyai-reader`
pub fn get_app_config_dir() -> Result<PathBuf, String> {
    let base = dirs::config_dir()
        .ok_or_else(|| "Unable to locate the user config directory".to_string())?;
    Ok(base.join(APP_CONFIG_DIR_NAME))
}

/// 获取阅读器配置文件的绝对路径
pub fn get_reader_config_path() -> Result<PathBuf, String> {
    Ok(get_app_config_dir()?.join(READER_CONFIG_FILE_NAME))
}
