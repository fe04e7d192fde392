//! # 视图外壳（路由表）
//!
//! 根据当前路由和会话状态决定渲染哪个屏幕：
//!
//! | 路由 | 屏幕 |
//! |------|------|
//! | `/` | 落地页（无需登录） |
//! | `/login` | 凭据页，登录模式 |
//! | `/signup` | 凭据页，注册模式 |
//! | `/dashboard` | 已登录：阅读页；未登录：凭据页，登录模式 |
//!
//! 未登录访问 `/dashboard` 是终止性守卫，不记录 "登录后返回" 的目标。
//! 凭据页内的登录/注册切换（"Don't have an account? Sign Up"）也由这里维护。

use std::sync::RwLock;

use crate::models::display::{AuthScreen, NavLink, NavbarView, Route, Screen, ShellView};
use crate::models::session::{AuthMode, User};
use crate::services::session::SessionStore;
use crate::services::ui_text::{self, HARDWARE_OPTIONS, SOFTWARE_OPTIONS};

struct ShellState {
    route: Route,
    auth_mode: AuthMode,
}

/// 视图外壳
pub struct ViewShell {
    state: RwLock<ShellState>,
}

impl ViewShell {
    /// 初始位于落地页
    pub fn new() -> Self {
        Self {
            state: RwLock::new(ShellState {
                route: Route::Landing,
                auth_mode: AuthMode::Login,
            }),
        }
    }

    /// 导航到指定路径
    ///
    /// `/login`、`/signup` 会把凭据页预置为对应模式；`/dashboard` 预置为登录模式，
    /// 供路由守卫重定向时使用。
    ///
    /// # 参数
    /// - `path` - 路由路径，允许带 `#` 前缀
    /// - `session` - 会话存储，用于路由守卫
    pub fn navigate(&self, path: &str, session: &SessionStore) -> Result<ShellView, String> {
        let route = Route::parse(path);
        let mut state = self
            .state
            .write()
            .map_err(|e| format!("Shell state lock poisoned: {}", e))?;
        state.route = route;
        match route {
            Route::Login | Route::Dashboard => state.auth_mode = AuthMode::Login,
            Route::Signup => state.auth_mode = AuthMode::Signup,
            Route::Landing => {}
        }
        log::debug!("导航到 {}", route.path());
        Ok(render(state.route, state.auth_mode, session.current_user()))
    }

    /// 在凭据页切换登录/注册模式
    pub fn toggle_auth_mode(&self, session: &SessionStore) -> Result<ShellView, String> {
        let mut state = self
            .state
            .write()
            .map_err(|e| format!("Shell state lock poisoned: {}", e))?;
        state.auth_mode = state.auth_mode.toggled();
        Ok(render(state.route, state.auth_mode, session.current_user()))
    }

    /// 按当前路由重新导航（会话状态变化后调用）
    pub fn refresh(&self, session: &SessionStore) -> Result<ShellView, String> {
        let route = self.route()?;
        self.navigate(route.path(), session)
    }

    /// 当前视图（不改变任何状态）
    pub fn view(&self, session: &SessionStore) -> Result<ShellView, String> {
        let state = self
            .state
            .read()
            .map_err(|e| format!("Shell state lock poisoned: {}", e))?;
        Ok(render(state.route, state.auth_mode, session.current_user()))
    }

    pub fn route(&self) -> Result<Route, String> {
        self.state
            .read()
            .map(|state| state.route)
            .map_err(|e| format!("Shell state lock poisoned: {}", e))
    }
}

impl Default for ViewShell {
    fn default() -> Self {
        Self::new()
    }
}

fn render(route: Route, auth_mode: AuthMode, user: Option<User>) -> ShellView {
    let navbar = navbar(user.is_some());
    let screen = match (route, user) {
        (Route::Landing, _) => Screen::Landing,
        (Route::Dashboard, Some(user)) => Screen::Dashboard { user },
        (Route::Login | Route::Signup | Route::Dashboard, _) => {
            Screen::Auth(auth_screen(auth_mode))
        }
    };
    ShellView {
        route,
        screen,
        navbar,
    }
}

fn auth_screen(mode: AuthMode) -> AuthScreen {
    AuthScreen {
        mode,
        strings: ui_text::auth_strings(mode),
        show_signup_fields: mode == AuthMode::Signup,
        software_options: SOFTWARE_OPTIONS,
        hardware_options: HARDWARE_OPTIONS,
    }
}

fn navbar(authenticated: bool) -> NavbarView {
    let links = if authenticated {
        vec![NavLink {
            label: "Dashboard",
            route: Route::Dashboard,
        }]
    } else {
        vec![
            NavLink {
                label: "Log In",
                route: Route::Login,
            },
            NavLink {
                label: "Get Started",
                route: Route::Signup,
            },
        ]
    };
    NavbarView {
        authenticated,
        links,
        show_logout: authenticated,
    }
}
