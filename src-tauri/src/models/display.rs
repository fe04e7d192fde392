//! # 显示层数据模型
//!
//! 定义了前端渲染所需的独立数据结构。前端只做纯渲染：
//! 所有文本（含语言选择）、展开/激活标记和路由守卫结果都已在 Rust 端确定。
//!
//! ## 数据流
//! ```text
//! Catalog + NavigationStore + ui_text → reader::build_reader_view → ReaderView → IPC
//! Route + SessionStore + AuthMode     → ViewShell::view           → ShellView  → IPC
//! ```

use serde::Serialize;

use crate::models::navigation::{Locale, TextDirection};
use crate::models::session::{AuthMode, User};

// ============ 固定文案 ============

/// 阅读页固定文案（已按语言选定）
///
/// 对应前端 TypeScript 接口：`ReaderStrings`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReaderStrings {
    /// 面包屑（"Dashboard / Reader"）
    pub breadcrumb: &'static str,
    pub personalize: &'static str,
    /// 语言切换按钮：显示的是 **切换后** 的目标语言
    pub translate_toggle: &'static str,
    pub summary_heading: &'static str,
    pub takeaways_heading: &'static str,
    /// 占位区主提示
    pub compiling_notice: &'static str,
    /// 占位区副提示
    pub simulation_loading: &'static str,
    /// 侧边栏标题
    pub sidebar_heading: &'static str,
}

/// 凭据页文案
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthStrings {
    pub heading: &'static str,
    pub subheading: &'static str,
    pub submit_label: &'static str,
    /// "Don't have an account?"
    pub toggle_prompt: &'static str,
    /// "Sign Up"
    pub toggle_action: &'static str,
}

// ============ 路由与屏幕 ============

/// 路由表中的一项
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Route {
    Landing,
    Login,
    Signup,
    Dashboard,
}

impl Route {
    /// 解析路径
    ///
    /// 兼容哈希路由写法（`#/dashboard`），忽略尾部斜杠、查询串和片段；
    /// 空路径和未知路径都解析为落地页。
    pub fn parse(path: &str) -> Route {
        let path = path.trim().trim_start_matches('#');
        let path = path.split(['?', '#']).next().unwrap_or("");
        match path.trim_end_matches('/') {
            "/login" => Route::Login,
            "/signup" => Route::Signup,
            "/dashboard" => Route::Dashboard,
            _ => Route::Landing,
        }
    }

    pub fn path(self) -> &'static str {
        match self {
            Route::Landing => "/",
            Route::Login => "/login",
            Route::Signup => "/signup",
            Route::Dashboard => "/dashboard",
        }
    }
}

/// 凭据页渲染模型
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthScreen {
    pub mode: AuthMode,
    pub strings: AuthStrings,
    /// 注册模式额外展示姓名和两项经验下拉框
    pub show_signup_fields: bool,
    pub software_options: &'static [&'static str],
    pub hardware_options: &'static [&'static str],
}

/// 当前应渲染的屏幕
///
/// 序列化为带 `kind` 标签的对象，如 `{ "kind": "auth", "mode": "login", ... }`。
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum Screen {
    Landing,
    Auth(AuthScreen),
    Dashboard { user: User },
}

/// 导航栏中的一个链接
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct NavLink {
    pub label: &'static str,
    pub route: Route,
}

/// 导航栏渲染模型
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NavbarView {
    pub authenticated: bool,
    /// 未登录："Log In" / "Get Started"；已登录："Dashboard"
    pub links: Vec<NavLink>,
    /// 已登录时展示登出按钮
    pub show_logout: bool,
}

/// 外壳渲染模型：路由 + 屏幕 + 导航栏
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ShellView {
    /// 用户请求的路由（路由守卫重定向时与 `screen` 不一致）
    pub route: Route,
    pub screen: Screen,
    pub navbar: NavbarView,
}

// ============ 阅读页 ============

/// 侧边栏中的章节节点
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ChapterNode {
    pub id: &'static str,
    pub title: &'static str,
    pub active: bool,
}

/// 侧边栏中的模块节点
///
/// `chapters` 总是完整列出；前端仅在 `expanded` 为 true 时渲染。
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ModuleNode {
    pub id: &'static str,
    pub title: &'static str,
    pub short_title: &'static str,
    pub expanded: bool,
    pub chapters: Vec<ChapterNode>,
}

/// 已按语言选定的小节
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RenderedSection {
    pub title: &'static str,
    pub body: &'static str,
}

/// 已按语言选定的章节正文
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RenderedContent {
    pub summary: &'static str,
    pub sections: Vec<RenderedSection>,
    pub takeaways: Vec<&'static str>,
    /// 实际提供正文的章节 ID
    pub source_chapter_id: &'static str,
    /// 激活章节没有自己的正文，展示的是默认章节的内容
    pub is_fallback: bool,
}

/// 当前激活章节
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ActiveChapter {
    pub id: &'static str,
    pub title: &'static str,
    pub module_id: &'static str,
    pub module_title: &'static str,
}

/// 阅读页渲染模型
///
/// 对应前端 TypeScript 接口：`ReaderView`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReaderView {
    pub modules: Vec<ModuleNode>,
    pub active_chapter: ActiveChapter,
    pub locale: Locale,
    /// 正文区域的 `dir` 属性
    pub direction: TextDirection,
    pub strings: ReaderStrings,
    pub content: RenderedContent,
    pub sidebar_open: bool,
    /// 已登录用户的显示名
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_name: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_route_parse() {
        assert_eq!(Route::parse("/"), Route::Landing);
        assert_eq!(Route::parse(""), Route::Landing);
        assert_eq!(Route::parse("/login"), Route::Login);
        assert_eq!(Route::parse("#/signup"), Route::Signup);
        assert_eq!(Route::parse("/dashboard/"), Route::Dashboard);
        assert_eq!(Route::parse("/dashboard?chapter=c3"), Route::Dashboard);
        assert_eq!(Route::parse("/nowhere"), Route::Landing);
    }

    #[test]
    fn test_route_path_round_trip() {
        for route in [Route::Landing, Route::Login, Route::Signup, Route::Dashboard] {
            assert_eq!(Route::parse(route.path()), route);
        }
    }

    #[test]
    fn test_screen_serializes_with_kind_tag() {
        let value = serde_json::to_value(Screen::Landing).unwrap();
        assert_eq!(value, serde_json::json!({ "kind": "landing" }));
    }
}
