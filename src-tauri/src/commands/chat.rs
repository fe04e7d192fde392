//! # 聊天组件 Tauri Commands
//!
//! 模拟回复在后台定时任务中追加，届时通过 `chat:update` 事件推送最新快照
//! （事件监听器在 `lib.rs` 的 `setup` 中注册）。
//!
//! 聊天组件属于阅读页，所有 command 都需要已登录。
//! 这些 command 必须是 async：定时任务需要在 Tauri 的 tokio 运行时上调度。

use tauri::State;

use crate::models::chat::{ChatSnapshot, SendOutcome};
use crate::services::app_state::AppState;

#[tauri::command]
pub async fn get_chat_state(state: State<'_, AppState>) -> Result<ChatSnapshot, String> {
    state.reader_chat()?.snapshot()
}

#[tauri::command]
pub async fn toggle_chat(state: State<'_, AppState>) -> Result<ChatSnapshot, String> {
    state.reader_chat()?.toggle_open()
}

#[tauri::command]
pub async fn update_chat_input(
    text: String,
    state: State<'_, AppState>,
) -> Result<ChatSnapshot, String> {
    state.reader_chat()?.update_input(&text)
}

/// 发送一条消息
///
/// # 返回值
/// - `sent` - 已追加用户消息，回复将在延迟后通过事件送达
/// - `empty_input` - 去除空白后为空，未做任何改动
/// - `reply_pending` - 上一条回复仍在等待中，未做任何改动
#[tauri::command]
pub async fn send_chat_message(
    text: String,
    state: State<'_, AppState>,
) -> Result<SendOutcome, String> {
    state.reader_chat()?.send(&text)
}

/// 发送输入框中的当前内容（回车键）
#[tauri::command]
pub async fn submit_chat_input(state: State<'_, AppState>) -> Result<SendOutcome, String> {
    state.reader_chat()?.submit()
}

/// 重新挂载组件：取消待发送的回复并恢复到仅含欢迎语的初始状态
#[tauri::command]
pub async fn remount_chat(state: State<'_, AppState>) -> Result<ChatSnapshot, String> {
    state.reader_chat()?.remount()
}
