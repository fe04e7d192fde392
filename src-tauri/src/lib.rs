//! # PhyAI 课程阅读器 - Tauri 应用核心初始化模块
//!
//! 本模块负责 Tauri 应用的完整初始化流程，包括：
//! - 注册自定义 Tauri commands
//! - 加载只读配置、注册日志插件并初始化应用根状态（`AppState`）
//! - 把聊天组件的异步回复桥接为 `chat:update` 事件
//!
//! ## 架构说明
//! 通过将核心逻辑放在 `lib.rs` 而非 `main.rs` 中，
//! Tauri 可以在桌面端（`main.rs`）和移动端入口之间共享此初始化代码。
//!
//! 状态机（`models` / `services`）不依赖 Tauri，可以在没有 WebView 的环境下单独测试；
//! IPC 层（`commands`）和 `run()` 只在启用 `desktop` feature 时编译。
//!
//! ## 模块结构
//! - `commands/` - Tauri command 处理函数（IPC 接口层）
//! - `models/` - 数据模型（对应前端 TypeScript 类型）
//! - `services/` - 核心业务逻辑（目录、会话、导航、聊天、路由）
//! - `utils/` - 通用工具函数

#[cfg(feature = "desktop")]
mod commands;
pub mod models;
pub mod services;
pub mod utils;

/// 聊天快照推送事件名
pub const CHAT_UPDATE_EVENT: &str = "chat:update";

#[cfg(feature = "desktop")]
#[cfg_attr(mobile, tauri::mobile_entry_point)]
/// Tauri 应用启动函数
///
/// 在 `setup` 钩子中按顺序完成：
/// 1. 加载 `reader-config.json`（缺失或损坏时使用默认值）
/// 2. 按配置的级别注册日志插件，再记录配置加载结果
/// 3. 创建 `AppState` 并注册为 managed state
/// 4. 把聊天组件的状态变化桥接为 `chat:update` 事件
///
/// 之后生成应用上下文并启动主事件循环。
///
/// # Panics
/// Tauri 应用启动失败（例如窗口创建失败，或内置课程目录为空导致 `setup` 返回错误）时 panic。
pub fn run() {
    use tauri::{Emitter, Manager};

    use services::app_state::AppState;
    use services::config::{self, ConfigLoad};

    tauri::Builder::default()
        .invoke_handler(tauri::generate_handler![
            // 会话
            commands::session::get_session,
            commands::session::submit_credentials,
            commands::session::logout,
            // 路由
            commands::shell::navigate,
            commands::shell::get_shell_view,
            commands::shell::toggle_auth_mode,
            // 阅读导航
            commands::navigation::get_reader_view,
            commands::navigation::toggle_module,
            commands::navigation::select_chapter,
            commands::navigation::toggle_locale,
            commands::navigation::toggle_sidebar,
            // 课程目录
            commands::catalog::list_modules,
            commands::catalog::get_chapter_content,
            // 聊天组件
            commands::chat::get_chat_state,
            commands::chat::toggle_chat,
            commands::chat::update_chat_input,
            commands::chat::send_chat_message,
            commands::chat::submit_chat_input,
            commands::chat::remount_chat,
            // 配置
            commands::config::read_reader_config,
            commands::config::get_reader_config_path,
        ])
        .setup(|app| {
            let ConfigLoad { config, source } = config::load_reader_config();

            // 日志级别来自配置，因此配置加载结果只能在插件注册之后补记
            app.handle().plugin(
                tauri_plugin_log::Builder::default()
                    .level(config.log_level_filter())
                    .build(),
            )?;
            source.log();
            if let Err(e) = config.parse_log_level() {
                log::warn!("{}", e);
            }

            app.manage(AppState::new(config)?);

            // 模拟回复在后台任务中送达，需要主动推送给前端
            let handle = app.handle().clone();
            app.state::<AppState>().chat.set_listener(move |snapshot| {
                if let Err(e) = handle.emit(CHAT_UPDATE_EVENT, snapshot) {
                    log::warn!("推送聊天快照失败: {}", e);
                }
            });

            log::info!("PhyAI 阅读器已启动");
            Ok(())
        })
        .run(tauri::generate_context!())
        .expect("error while running tauri application");
}
