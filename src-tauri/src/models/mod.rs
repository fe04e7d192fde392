//! # 数据模型模块
//!
//! 定义了与前端 TypeScript 类型一一对应的 Rust 数据结构，用于 Tauri IPC 传输。
//! - `catalog` - 课程模块、章节和双语正文
//! - `navigation` - 语言、文字方向和导航状态快照
//! - `session` - 用户、背景信息和凭据表单
//! - `chat` - 聊天消息和组件快照
//! - `display` - 前端渲染模型（外壳视图、阅读页视图）

pub mod catalog;
pub mod chat;
pub mod display;
pub mod navigation;
pub mod session;
