//! # 会话与登录表单数据模型
//!
//! 定义了用户（User）、技术背景（Background）、登录/注册模式（AuthMode）
//! 以及凭据表单（CredentialForm）的 Rust 结构体，
//! 对应前端 TypeScript 中的 `User` 接口和登录页表单字段。

use serde::{Deserialize, Serialize};

/// 用户技术背景
///
/// 对应注册表单中的两个下拉框："Coding Exp" 与 "Robotics Exp"。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Background {
    /// 软件经验（Beginner / Intermediate / Advanced）
    pub software: String,
    /// 硬件/机器人经验（None / Hobbyist / Pro）
    pub hardware: String,
}

/// 用户数据结构
///
/// 由一次成功的凭据提交合成，登出时销毁。整个进程中最多存在一个。
///
/// 对应前端 TypeScript 接口：
/// ```typescript
/// interface User {
///   email: string;
///   name?: string;
///   background?: { software: string; hardware: string };
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub email: String,
    pub name: String,
    pub background: Background,
}

/// 凭据页面模式
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AuthMode {
    Login,
    Signup,
}

impl AuthMode {
    pub fn toggled(self) -> Self {
        match self {
            AuthMode::Login => AuthMode::Signup,
            AuthMode::Signup => AuthMode::Login,
        }
    }
}

/// 凭据表单数据结构（前端 → Rust）
///
/// 登录模式只填写邮箱和密码；注册模式额外包含姓名和两项经验选择。
/// 所有可选字段缺省时由 `SessionStore` 使用默认值补齐。
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CredentialForm {
    pub mode: AuthMode,
    pub email: String,
    pub password: String,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub software: Option<String>,
    #[serde(default)]
    pub hardware: Option<String>,
}

impl CredentialForm {
    /// 构造仅含邮箱和密码的表单
    pub fn new(mode: AuthMode, email: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            mode,
            email: email.into(),
            password: password.into(),
            name: None,
            software: None,
            hardware: None,
        }
    }
}
