//! # 应用根状态
//!
//! `AppState` 是唯一持有全部状态机的根对象：会话、导航、外壳路由和聊天组件。
//! 通过 Tauri 的 `manage()` 注册一次，所有 command 通过 `State<AppState>` 参数按引用访问，
//! 不存在任何全局可变状态。
//!
//! 跨状态机的流程也在这里编排：
//! - 凭据提交成功 → 导航到 `/dashboard`
//! - 离开 `/dashboard` 或登出 → 阅读页卸载：重置导航状态、重新挂载聊天组件
//! - 登出 → 按当前路由重新渲染
//!
//! 聊天组件只存在于阅读页中，未登录时所有聊天操作都被拒绝。

use crate::models::display::{ReaderView, Route, ShellView};
use crate::models::session::CredentialForm;
use crate::services::catalog::Catalog;
use crate::services::chat::ChatWidget;
use crate::services::config::ReaderConfig;
use crate::services::navigation::NavigationStore;
use crate::services::reader;
use crate::services::session::SessionStore;
use crate::services::shell::ViewShell;

/// 应用全局状态
///
/// # 线程安全
/// 各个 store 内部自带锁，`AppState` 本身只需共享引用。
pub struct AppState {
    config: ReaderConfig,
    pub session: SessionStore,
    pub navigation: NavigationStore,
    pub shell: ViewShell,
    pub chat: ChatWidget,
}

impl AppState {
    /// 使用内置课程目录创建根状态
    pub fn new(config: ReaderConfig) -> Result<Self, String> {
        Self::with_catalog(config, Catalog::builtin())
    }

    pub fn with_catalog(config: ReaderConfig, catalog: Catalog) -> Result<Self, String> {
        let navigation = NavigationStore::new(catalog, &config.navigation_defaults())?;
        let chat = ChatWidget::new(config.chat_reply_delay());
        Ok(Self {
            config,
            session: SessionStore::new(),
            navigation,
            shell: ViewShell::new(),
            chat,
        })
    }

    pub fn config(&self) -> &ReaderConfig {
        &self.config
    }

    pub fn catalog(&self) -> Catalog {
        self.navigation.catalog()
    }

    /// 提交凭据并跳转到阅读页
    ///
    /// # 错误
    /// 表单校验失败（会话和路由均不变）
    pub fn submit_credentials(&self, form: &CredentialForm) -> Result<ShellView, String> {
        self.session.submit_credentials(form)?;
        self.shell.navigate("/dashboard", &self.session)
    }

    /// 导航到指定路径
    ///
    /// 从 `/dashboard` 离开时阅读页随之卸载，再次进入时从初始状态开始。
    pub fn navigate(&self, path: &str) -> Result<ShellView, String> {
        let previous = self.shell.route()?;
        let view = self.shell.navigate(path, &self.session)?;
        if previous == Route::Dashboard && view.route != Route::Dashboard {
            self.unmount_reader()?;
        }
        Ok(view)
    }

    /// 登出
    ///
    /// 阅读页和聊天组件随之卸载。
    /// 仍停留在 `/dashboard` 时，返回的视图是登录模式的凭据页。
    pub fn logout(&self) -> Result<ShellView, String> {
        if self.session.logout()? {
            self.unmount_reader()?;
        }
        self.shell.refresh(&self.session)
    }

    /// 导航状态回到初始值，聊天记录重置为欢迎语（等待中的回复被取消）
    fn unmount_reader(&self) -> Result<(), String> {
        self.navigation.reset(&self.config.navigation_defaults())?;
        self.chat.remount()?;
        log::debug!("阅读页已卸载");
        Ok(())
    }

    /// 阅读页访问守卫
    ///
    /// # 错误
    /// 未登录
    pub fn require_reader(&self) -> Result<(), String> {
        if self.session.is_authenticated() {
            Ok(())
        } else {
            Err("Sign in to open the reader".to_string())
        }
    }

    /// 阅读页内的聊天组件（需要已登录）
    pub fn reader_chat(&self) -> Result<&ChatWidget, String> {
        self.require_reader()?;
        Ok(&self.chat)
    }

    /// 组装当前阅读页视图（需要已登录）
    pub fn reader_view(&self) -> Result<ReaderView, String> {
        let user = self
            .session
            .current_user()
            .ok_or_else(|| "Sign in to open the reader".to_string())?;
        let snapshot = self.navigation.snapshot()?;
        reader::build_reader_view(&self.catalog(), &snapshot, Some(user.name))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::chat::SendOutcome;
    use crate::models::display::Screen;
    use crate::models::navigation::Locale;
    use crate::models::session::AuthMode;
    use crate::services::chat::{GREETING, SIMULATED_REPLY};
    use std::time::Duration;

    fn app() -> AppState {
        AppState::new(ReaderConfig::default()).unwrap()
    }

    #[test]
    fn test_signup_then_dashboard_renders_reader() {
        let app = app();
        app.shell.navigate("/signup", &app.session).unwrap();

        let view = app
            .submit_credentials(&CredentialForm::new(AuthMode::Signup, "new@lab.io", "pw"))
            .unwrap();
        assert!(matches!(view.screen, Screen::Dashboard { .. }));

        // 之后再次导航到 /dashboard 仍然是阅读页
        let again = app.shell.navigate("/dashboard", &app.session).unwrap();
        assert!(matches!(again.screen, Screen::Dashboard { .. }));
        assert_eq!(app.reader_view().unwrap().user_name.as_deref(), Some("Future Roboticist"));
    }

    #[test]
    fn test_anonymous_dashboard_shows_login() {
        let app = app();
        let view = app.shell.navigate("/dashboard", &app.session).unwrap();
        match view.screen {
            Screen::Auth(screen) => assert_eq!(screen.mode, AuthMode::Login),
            other => panic!("expected auth screen, got {:?}", other),
        }
        assert!(app.reader_view().is_err());
        assert!(app.require_reader().is_err());
    }

    #[test]
    fn test_failed_submission_keeps_route() {
        let app = app();
        app.shell.navigate("/login", &app.session).unwrap();
        assert!(app
            .submit_credentials(&CredentialForm::new(AuthMode::Login, "", "pw"))
            .is_err());
        assert_eq!(app.shell.route().unwrap().path(), "/login");
    }

    #[test]
    fn test_logout_from_dashboard_resets_reader() {
        let app = app();
        app.submit_credentials(&CredentialForm::new(AuthMode::Login, "a@b.c", "pw"))
            .unwrap();
        app.navigation.select_chapter("c7").unwrap();

        let view = app.logout().unwrap();
        match view.screen {
            Screen::Auth(screen) => assert_eq!(screen.mode, AuthMode::Login),
            other => panic!("expected auth screen, got {:?}", other),
        }
        assert!(!view.navbar.authenticated);
        assert_eq!(app.navigation.snapshot().unwrap().active_chapter_id, "c1");
    }

    #[tokio::test(start_paused = true)]
    async fn test_chat_scenario() {
        let app = app();
        app.submit_credentials(&CredentialForm::new(AuthMode::Login, "a@b.c", "pw"))
            .unwrap();
        app.chat.toggle_open().unwrap();
        assert_eq!(app.chat.send("hello").unwrap(), SendOutcome::Sent);
        assert!(app.chat.snapshot().unwrap().input.is_empty());

        tokio::time::sleep(Duration::from_millis(1001)).await;
        let messages = app.chat.snapshot().unwrap().messages;
        assert_eq!(messages.len(), 3);
        assert_eq!(messages[0].text, GREETING);
        assert_eq!(messages[1].text, "hello");
        assert_eq!(messages[2].text, SIMULATED_REPLY);
    }

    #[tokio::test(start_paused = true)]
    async fn test_logout_cancels_pending_reply() {
        let app = app();
        app.submit_credentials(&CredentialForm::new(AuthMode::Login, "a@b.c", "pw"))
            .unwrap();
        app.chat.send("hello").unwrap();
        app.logout().unwrap();

        tokio::time::sleep(Duration::from_millis(1001)).await;
        assert_eq!(app.chat.snapshot().unwrap().messages.len(), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn test_leaving_dashboard_remounts_reader_and_chat() {
        let app = app();
        app.submit_credentials(&CredentialForm::new(AuthMode::Login, "a@b.c", "pw"))
            .unwrap();
        app.navigation.select_chapter("c7").unwrap();
        app.navigation.toggle_locale().unwrap();
        app.chat.send("hello").unwrap();

        let away = app.navigate("/").unwrap();
        assert_eq!(away.screen, Screen::Landing);

        tokio::time::sleep(Duration::from_millis(1001)).await;
        let back = app.navigate("/dashboard").unwrap();
        assert!(matches!(back.screen, Screen::Dashboard { .. }));

        let chat = app.chat.snapshot().unwrap();
        assert_eq!(chat.messages.len(), 1);
        assert_eq!(chat.messages[0].text, GREETING);
        assert!(!chat.reply_pending);

        let nav = app.navigation.snapshot().unwrap();
        assert_eq!(nav.active_chapter_id, "c1");
        assert_eq!(nav.locale, Locale::En);
        assert_eq!(nav.expanded_module_ids, vec!["m1"]);
        assert!(nav.sidebar_open);
    }

    #[test]
    fn test_staying_on_dashboard_keeps_reader_state() {
        let app = app();
        app.submit_credentials(&CredentialForm::new(AuthMode::Login, "a@b.c", "pw"))
            .unwrap();
        app.navigation.select_chapter("c7").unwrap();

        app.navigate("/dashboard").unwrap();
        assert_eq!(app.navigation.snapshot().unwrap().active_chapter_id, "c7");
    }

    #[tokio::test(start_paused = true)]
    async fn test_chat_is_closed_to_anonymous_users() {
        let app = app();
        assert!(app.reader_chat().is_err());

        app.submit_credentials(&CredentialForm::new(AuthMode::Login, "a@b.c", "pw"))
            .unwrap();
        let chat = app.reader_chat().unwrap();
        assert_eq!(chat.send("hello").unwrap(), SendOutcome::Sent);

        app.logout().unwrap();
        assert!(app.reader_chat().is_err());
    }
}
