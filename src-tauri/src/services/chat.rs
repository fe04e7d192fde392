//! # 聊天组件服务
//!
//! 独立于阅读导航的对话组件，只有一个模拟回复者：
//! - `toggle_open`：在 Closed / Open 之间切换，打开时提示前端滚动到最新消息
//! - `send`：追加用户消息 → 清空输入框 → 进入等待状态 → 固定延迟后追加一条固定回复
//!
//! ## 延迟回复任务
//! 回复通过 tokio 任务调度（`tokio::time::sleep` + 回复者），任务的 `AbortHandle`
//! 保存在组件状态中。组件重新挂载（`remount`）或被销毁时中止任务；
//! 另有代际计数器 `generation`，保证已越过 sleep 的任务也不会改写已重置的状态。
//!
//! ## 回复者
//! `Responder` trait 是接入真实模型服务的接缝：提交一段文本，拿回一条回复。
//! 当前唯一实现 `SimulatedResponder` 返回固定文本，不发起任何推理请求。

use std::sync::{Arc, Mutex, MutexGuard, RwLock};
use std::time::Duration;

use tokio::task::AbortHandle;

use crate::models::chat::{ChatMessage, ChatSnapshot, SendOutcome};

/// 组件挂载时的欢迎语
pub const GREETING: &str = "Hello! I am your AI tutor. Ask me anything about ROS 2, robotic kinematics, or how to set up your simulation environment.";

/// 模拟回复者的固定回复
pub const SIMULATED_REPLY: &str = "I'm a simulated AI response. The actual AI connection is disabled to prevent system instability.";

/// 默认回复延迟
pub const DEFAULT_REPLY_DELAY: Duration = Duration::from_millis(1000);

/// 回复者：接收用户输入，产出一条助手回复
pub trait Responder: Send + Sync {
    fn reply(&self, prompt: &str) -> String;
}

/// 模拟回复者：无论输入是什么都返回 `SIMULATED_REPLY`
pub struct SimulatedResponder;

impl Responder for SimulatedResponder {
    fn reply(&self, _prompt: &str) -> String {
        SIMULATED_REPLY.to_string()
    }
}

/// 状态变化监听器，桌面端用它推送 `chat:update` 事件
pub type ChatListener = Arc<dyn Fn(&ChatSnapshot) + Send + Sync>;

struct WidgetState {
    open: bool,
    input: String,
    messages: Vec<ChatMessage>,
    reply_pending: bool,
    /// 每次重新挂载加一；回复任务只在代际匹配时写入
    generation: u64,
    pending: Option<AbortHandle>,
}

impl WidgetState {
    fn mounted() -> Self {
        Self {
            open: false,
            input: String::new(),
            messages: vec![ChatMessage::assistant(GREETING)],
            reply_pending: false,
            generation: 0,
            pending: None,
        }
    }

    fn snapshot(&self, scroll_to_latest: bool) -> ChatSnapshot {
        ChatSnapshot {
            open: self.open,
            input: self.input.clone(),
            messages: self.messages.clone(),
            reply_pending: self.reply_pending,
            scroll_to_latest,
        }
    }
}

struct Shared {
    state: Mutex<WidgetState>,
    responder: Arc<dyn Responder>,
    delay: Duration,
    listener: RwLock<Option<ChatListener>>,
}

impl Shared {
    fn lock(&self) -> Result<MutexGuard<'_, WidgetState>, String> {
        self.state
            .lock()
            .map_err(|e| format!("Chat state lock poisoned: {}", e))
    }

    fn notify(&self, snapshot: &ChatSnapshot) {
        // 先克隆出监听器再调用，避免回调期间持有锁
        let listener = self.listener.read().ok().and_then(|l| l.clone());
        if let Some(listener) = listener {
            listener(snapshot);
        }
    }

    async fn deliver_reply(self: Arc<Self>, generation: u64, prompt: String) {
        tokio::time::sleep(self.delay).await;
        let reply = self.responder.reply(&prompt);

        let snapshot = {
            let Ok(mut state) = self.state.lock() else {
                return;
            };
            if state.generation != generation {
                return;
            }
            state.messages.push(ChatMessage::assistant(reply));
            state.reply_pending = false;
            state.pending = None;
            state.snapshot(state.open)
        };

        log::debug!("模拟回复已送达（共 {} 条消息）", snapshot.messages.len());
        self.notify(&snapshot);
    }
}

/// 聊天组件
///
/// 由 `AppState` 持有。销毁时中止尚未送达的回复任务。
pub struct ChatWidget {
    shared: Arc<Shared>,
}

impl ChatWidget {
    /// 使用模拟回复者创建组件
    pub fn new(delay: Duration) -> Self {
        Self::with_responder(delay, Arc::new(SimulatedResponder))
    }

    pub fn with_responder(delay: Duration, responder: Arc<dyn Responder>) -> Self {
        Self {
            shared: Arc::new(Shared {
                state: Mutex::new(WidgetState::mounted()),
                responder,
                delay,
                listener: RwLock::new(None),
            }),
        }
    }

    /// 注册状态变化监听器（替换已有的监听器）
    pub fn set_listener(&self, listener: impl Fn(&ChatSnapshot) + Send + Sync + 'static) {
        if let Ok(mut slot) = self.shared.listener.write() {
            *slot = Some(Arc::new(listener));
        }
    }

    pub fn snapshot(&self) -> Result<ChatSnapshot, String> {
        let state = self.shared.lock()?;
        Ok(state.snapshot(false))
    }

    /// 在 Closed / Open 之间切换
    ///
    /// 切换到 Open 时返回的快照带有 `scroll_to_latest = true`。
    pub fn toggle_open(&self) -> Result<ChatSnapshot, String> {
        let snapshot = {
            let mut state = self.shared.lock()?;
            state.open = !state.open;
            state.snapshot(state.open)
        };
        self.shared.notify(&snapshot);
        Ok(snapshot)
    }

    /// 替换输入框缓冲区
    pub fn update_input(&self, text: &str) -> Result<ChatSnapshot, String> {
        let mut state = self.shared.lock()?;
        state.input = text.to_string();
        Ok(state.snapshot(false))
    }

    /// 发送一条消息
    ///
    /// 前置条件：去除首尾空白后非空，且没有等待中的回复。
    /// 不满足时返回对应的 `SendOutcome`，状态完全不变（包括输入框）。
    ///
    /// # 错误
    /// 当前线程不在 tokio 运行时内，无法调度回复任务（此时状态也不变）
    pub fn send(&self, text: &str) -> Result<SendOutcome, String> {
        self.dispatch(Some(text))
    }

    /// 发送输入框缓冲区中的内容（对应前端回车键）
    pub fn submit(&self) -> Result<SendOutcome, String> {
        self.dispatch(None)
    }

    /// 重新挂载：中止等待中的回复，消息记录重置为欢迎语，输入框清空，组件关闭
    pub fn remount(&self) -> Result<ChatSnapshot, String> {
        let snapshot = {
            let mut state = self.shared.lock()?;
            if let Some(pending) = state.pending.take() {
                pending.abort();
                log::debug!("重新挂载，已取消等待中的回复");
            }
            let generation = state.generation.wrapping_add(1);
            *state = WidgetState::mounted();
            state.generation = generation;
            state.snapshot(false)
        };
        self.shared.notify(&snapshot);
        Ok(snapshot)
    }

    fn dispatch(&self, text: Option<&str>) -> Result<SendOutcome, String> {
        let snapshot = {
            let mut state = self.shared.lock()?;
            if state.reply_pending {
                return Ok(SendOutcome::ReplyPending);
            }

            let message = text.unwrap_or(&state.input).trim().to_string();
            if message.is_empty() {
                return Ok(SendOutcome::EmptyInput);
            }

            let runtime = tokio::runtime::Handle::try_current()
                .map_err(|e| format!("No async runtime available for chat reply: {}", e))?;

            state.messages.push(ChatMessage::user(message.clone()));
            state.input.clear();
            state.reply_pending = true;

            let shared = Arc::clone(&self.shared);
            let generation = state.generation;
            let task = runtime.spawn(shared.deliver_reply(generation, message));
            state.pending = Some(task.abort_handle());

            state.snapshot(state.open)
        };

        log::info!("聊天消息已发送，等待模拟回复");
        self.shared.notify(&snapshot);
        Ok(SendOutcome::Sent)
    }
}

impl Drop for ChatWidget {
    fn drop(&mut self) {
        if let Ok(mut state) = self.shared.state.lock() {
            state.generation = state.generation.wrapping_add(1);
            if let Some(pending) = state.pending.take() {
                pending.abort();
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::chat::ChatRole;

    const DELAY: Duration = Duration::from_millis(1000);

    async fn wait_for_reply() {
        tokio::time::sleep(DELAY + Duration::from_millis(1)).await;
    }

    #[tokio::test(start_paused = true)]
    async fn test_send_appends_user_message_then_reply() {
        let chat = ChatWidget::new(DELAY);
        chat.toggle_open().unwrap();
        chat.update_input("hello").unwrap();

        assert_eq!(chat.send("hello").unwrap(), SendOutcome::Sent);
        let after_send = chat.snapshot().unwrap();
        assert_eq!(after_send.messages.len(), 2);
        assert_eq!(after_send.messages[1], ChatMessage::user("hello"));
        assert!(after_send.input.is_empty());
        assert!(after_send.reply_pending);

        wait_for_reply().await;
        let after_reply = chat.snapshot().unwrap();
        assert_eq!(after_reply.messages.len(), 3);
        assert_eq!(after_reply.messages[2].role, ChatRole::Assistant);
        assert_eq!(after_reply.messages[2].text, SIMULATED_REPLY);
        assert!(!after_reply.reply_pending);
    }

    #[tokio::test(start_paused = true)]
    async fn test_send_trims_input() {
        let chat = ChatWidget::new(DELAY);
        chat.send("  what is ROS?  ").unwrap();
        assert_eq!(chat.snapshot().unwrap().messages[1].text, "what is ROS?");
    }

    #[tokio::test(start_paused = true)]
    async fn test_empty_or_whitespace_send_is_noop() {
        let chat = ChatWidget::new(DELAY);
        let before = chat.snapshot().unwrap();
        assert_eq!(chat.send("").unwrap(), SendOutcome::EmptyInput);
        assert_eq!(chat.send(" \t\n").unwrap(), SendOutcome::EmptyInput);
        assert_eq!(chat.snapshot().unwrap(), before);
    }

    #[tokio::test(start_paused = true)]
    async fn test_send_while_reply_pending_is_noop() {
        let chat = ChatWidget::new(DELAY);
        chat.send("first").unwrap();
        chat.update_input("second").unwrap();

        assert_eq!(chat.send("second").unwrap(), SendOutcome::ReplyPending);
        assert_eq!(chat.submit().unwrap(), SendOutcome::ReplyPending);
        let snapshot = chat.snapshot().unwrap();
        assert_eq!(snapshot.messages.len(), 2);
        // 输入框保持原样
        assert_eq!(snapshot.input, "second");

        wait_for_reply().await;
        assert_eq!(chat.submit().unwrap(), SendOutcome::Sent);
        assert_eq!(chat.snapshot().unwrap().messages[3].text, "second");
    }

    #[tokio::test(start_paused = true)]
    async fn test_remount_cancels_pending_reply() {
        let chat = ChatWidget::new(DELAY);
        chat.toggle_open().unwrap();
        chat.send("hello").unwrap();

        let remounted = chat.remount().unwrap();
        assert!(!remounted.open);
        assert!(!remounted.reply_pending);

        wait_for_reply().await;
        let snapshot = chat.snapshot().unwrap();
        assert_eq!(snapshot.messages, vec![ChatMessage::assistant(GREETING)]);

        // 重新挂载后可以立即再次发送
        assert_eq!(chat.send("again").unwrap(), SendOutcome::Sent);
    }

    #[tokio::test(start_paused = true)]
    async fn test_listener_sees_reply() {
        let chat = ChatWidget::new(DELAY);
        let seen: Arc<Mutex<Vec<ChatSnapshot>>> = Arc::new(Mutex::new(Vec::new()));
        let sink = Arc::clone(&seen);
        chat.set_listener(move |snapshot| sink.lock().unwrap().push(snapshot.clone()));

        chat.toggle_open().unwrap();
        chat.send("hello").unwrap();
        wait_for_reply().await;

        let seen = seen.lock().unwrap();
        assert_eq!(seen.len(), 3);
        assert!(seen[0].scroll_to_latest);
        assert!(seen[1].reply_pending);
        assert_eq!(seen[2].messages.last().unwrap().text, SIMULATED_REPLY);
    }

    #[test]
    fn test_toggle_open_requests_scroll_only_when_opening() {
        let chat = ChatWidget::new(DELAY);
        let opened = chat.toggle_open().unwrap();
        assert!(opened.open);
        assert!(opened.scroll_to_latest);

        let closed = chat.toggle_open().unwrap();
        assert!(!closed.open);
        assert!(!closed.scroll_to_latest);
    }

    #[test]
    fn test_send_outside_runtime_fails_without_side_effects() {
        let chat = ChatWidget::new(DELAY);
        assert!(chat.send("hello").is_err());
        let snapshot = chat.snapshot().unwrap();
        assert_eq!(snapshot.messages.len(), 1);
        assert!(!snapshot.reply_pending);
    }

    struct EchoResponder;

    impl Responder for EchoResponder {
        fn reply(&self, prompt: &str) -> String {
            format!("echo: {prompt}")
        }
    }

    #[tokio::test(start_paused = true)]
    async fn test_custom_responder() {
        let chat = ChatWidget::with_responder(DELAY, Arc::new(EchoResponder));
        chat.send("ping").unwrap();
        wait_for_reply().await;
        assert_eq!(chat.snapshot().unwrap().messages[2].text, "echo: ping");
    }
}
