//! # 聊天组件数据模型
//!
//! 定义了聊天消息（ChatMessage）、发送结果（SendOutcome）和组件快照（ChatSnapshot）。
//! 快照通过 Tauri 事件 `chat:update` 推送给前端。

use serde::Serialize;

/// 消息角色
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ChatRole {
    User,
    Assistant,
}

/// 单条聊天消息
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ChatMessage {
    pub role: ChatRole,
    pub text: String,
}

impl ChatMessage {
    pub fn user(text: impl Into<String>) -> Self {
        Self {
            role: ChatRole::User,
            text: text.into(),
        }
    }

    pub fn assistant(text: impl Into<String>) -> Self {
        Self {
            role: ChatRole::Assistant,
            text: text.into(),
        }
    }
}

/// `send` 的结果
///
/// 前置条件不满足时不是错误，而是一次无操作，通过此枚举告知调用方原因。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SendOutcome {
    /// 用户消息已追加，模拟回复已排队
    Sent,
    /// 输入为空或只含空白
    EmptyInput,
    /// 上一条回复仍在等待中
    ReplyPending,
}

/// 聊天组件快照
///
/// 对应前端 TypeScript 接口：
/// ```typescript
/// interface ChatSnapshot {
///   open: boolean;
///   input: string;
///   messages: { role: 'user' | 'assistant'; text: string }[];
///   replyPending: boolean;
///   scrollToLatest: boolean;
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChatSnapshot {
    pub open: bool,
    /// 输入框缓冲区
    pub input: String,
    pub messages: Vec<ChatMessage>,
    /// 为 true 时前端禁用发送按钮并显示 "正在输入" 动画
    pub reply_pending: bool,
    /// 前端收到为 true 的快照时应滚动到最新消息
    pub scroll_to_latest: bool,
}
