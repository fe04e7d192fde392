//! # 会话门控服务
//!
//! 两状态状态机：`Anonymous` ⇄ `Authenticated(user)`。
//!
//! - `submit_credentials`：只做必填项校验，不做任何身份验证，合成一个用户记录
//! - `logout`：无条件回到 `Anonymous`
//!
//! 会话只存在于内存中，进程重启即丢失；全进程最多一个会话。
//!
//! ## 线程安全
//! 使用 `std::sync::RwLock`：Tauri command 可能在不同线程上并发执行。

use std::sync::RwLock;

use crate::models::session::{AuthMode, Background, CredentialForm, User};
use crate::services::ui_text::{HARDWARE_OPTIONS, SOFTWARE_OPTIONS};

/// 未填写姓名时合成的显示名
pub const DEFAULT_USER_NAME: &str = "Future Roboticist";
/// 未选择时合成的软件经验
pub const DEFAULT_SOFTWARE_EXPERIENCE: &str = "Intermediate";
/// 未选择时合成的硬件经验
pub const DEFAULT_HARDWARE_EXPERIENCE: &str = "Beginner";

/// 会话存储
///
/// 由 `AppState` 持有，通过引用注入到各个 command。
pub struct SessionStore {
    current: RwLock<Option<User>>,
}

impl SessionStore {
    /// 创建处于 `Anonymous` 状态的存储
    pub fn new() -> Self {
        Self {
            current: RwLock::new(None),
        }
    }

    /// 提交凭据
    ///
    /// 校验必填项后合成用户记录并进入 `Authenticated` 状态。
    /// 已登录时再次提交会替换当前用户。
    ///
    /// # 参数
    /// - `form` - 登录/注册表单
    ///
    /// # 返回值
    /// 合成的用户记录
    ///
    /// # 错误
    /// - 邮箱或密码为空（去除首尾空白后）
    /// - 注册模式下经验选项不在固定列表中
    ///
    /// 校验失败时状态不变。
    pub fn submit_credentials(&self, form: &CredentialForm) -> Result<User, String> {
        let user = synthesize_user(form)?;

        let mut current = self
            .current
            .write()
            .map_err(|e| format!("Session state lock poisoned: {}", e))?;
        *current = Some(user.clone());

        log::info!("用户已登录: {} ({:?})", user.email, form.mode);
        Ok(user)
    }

    /// 登出，无条件回到 `Anonymous`
    ///
    /// # 返回值
    /// 登出前是否处于已登录状态
    pub fn logout(&self) -> Result<bool, String> {
        let mut current = self
            .current
            .write()
            .map_err(|e| format!("Session state lock poisoned: {}", e))?;
        let was_authenticated = current.take().is_some();
        if was_authenticated {
            log::info!("用户已登出");
        }
        Ok(was_authenticated)
    }

    /// 当前用户（`Anonymous` 时为 None）
    pub fn current_user(&self) -> Option<User> {
        self.current.read().ok()?.clone()
    }

    pub fn is_authenticated(&self) -> bool {
        self.current
            .read()
            .map(|current| current.is_some())
            .unwrap_or(false)
    }
}

impl Default for SessionStore {
    fn default() -> Self {
        Self::new()
    }
}

/// 校验表单并合成用户记录
///
/// 登录模式忽略姓名和经验字段；注册模式使用填写的值，缺省时使用默认值。
fn synthesize_user(form: &CredentialForm) -> Result<User, String> {
    let email = form.email.trim();
    if email.is_empty() {
        return Err("Email address is required".to_string());
    }
    if form.password.trim().is_empty() {
        return Err("Password is required".to_string());
    }

    // 登录模式不展示注册字段，只沿用默认背景
    let (name, software, hardware) = match form.mode {
        AuthMode::Login => (None, None, None),
        AuthMode::Signup => (
            non_blank(form.name.as_deref()),
            non_blank(form.software.as_deref()),
            non_blank(form.hardware.as_deref()),
        ),
    };

    if let Some(software) = software {
        check_option("Coding experience", software, SOFTWARE_OPTIONS)?;
    }
    if let Some(hardware) = hardware {
        check_option("Robotics experience", hardware, HARDWARE_OPTIONS)?;
    }

    Ok(User {
        email: email.to_string(),
        name: name.unwrap_or(DEFAULT_USER_NAME).to_string(),
        background: Background {
            software: software.unwrap_or(DEFAULT_SOFTWARE_EXPERIENCE).to_string(),
            hardware: hardware.unwrap_or(DEFAULT_HARDWARE_EXPERIENCE).to_string(),
        },
    })
}

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}

fn check_option(field: &str, value: &str, options: &[&str]) -> Result<(), String> {
    if options.contains(&value) {
        Ok(())
    } else {
        Err(format!(
            "{} must be one of {}, got '{}'",
            field,
            options.join(", "),
            value
        ))
    }
}
