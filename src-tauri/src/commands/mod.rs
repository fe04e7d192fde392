//! # Tauri Command 处理模块
//!
//! 本模块包含所有注册到 Tauri 的 command 处理函数。
//! 每个子模块对应一个功能域：
//! - `session` - 登录、注册、登出
//! - `shell` - 路由跳转和凭据页模式切换
//! - `navigation` - 阅读页的模块展开、章节选择、语言切换
//! - `catalog` - 课程目录和章节正文查询
//! - `chat` - 聊天组件
//! - `config` - 只读配置

pub mod catalog;
pub mod chat;
pub mod config;
pub mod navigation;
pub mod session;
pub mod shell;
