//! # 业务逻辑服务模块
//!
//! 包含核心业务逻辑的实现，与 Tauri command 层解耦：
//! - `catalog` - 固定课程目录和章节正文查找（含回退）
//! - `ui_text` - 双语固定文案和注册表单选项
//! - `session` - 会话门禁（匿名 / 已登录）
//! - `navigation` - 阅读导航状态机
//! - `reader` - 阅读页渲染模型组装
//! - `shell` - 路由表和路由守卫
//! - `chat` - 聊天组件和延迟模拟回复
//! - `config` - 只读启动配置
//! - `app_state` - 持有全部状态机的根对象

pub mod app_state;
pub mod catalog;
pub mod chat;
pub mod config;
pub mod navigation;
pub mod reader;
pub mod session;
pub mod shell;
pub mod ui_text;
