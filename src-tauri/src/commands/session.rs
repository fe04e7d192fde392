//! # 会话 Tauri Commands
//!
//! - `get_session` - 当前登录用户（未登录为 `null`）
//! - `submit_credentials` - 提交登录/注册表单，成功后跳转到阅读页
//! - `logout` - 登出并按当前路由重新渲染

use tauri::State;

use crate::models::display::ShellView;
use crate::models::session::{CredentialForm, User};
use crate::services::app_state::AppState;

#[tauri::command]
pub async fn get_session(state: State<'_, AppState>) -> Result<Option<User>, String> {
    Ok(state.session.current_user())
}

/// 提交凭据表单
///
/// 不做任何真实校验：邮箱和密码非空即视为成功，任意非空组合都能登录。
///
/// # 参数
/// - `form` - 前端表单内容，`mode` 决定登录或注册
///
/// # 返回值
/// 跳转到 `/dashboard` 后的外壳视图
///
/// # 错误
/// 邮箱或密码为空，或注册表单的经验选项不在可选列表中
#[tauri::command]
pub async fn submit_credentials(
    form: CredentialForm,
    state: State<'_, AppState>,
) -> Result<ShellView, String> {
    state.submit_credentials(&form)
}

#[tauri::command]
pub async fn logout(state: State<'_, AppState>) -> Result<ShellView, String> {
    state.logout()
}
