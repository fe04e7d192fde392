//! # PhyAI Reader - Tauri 桌面应用原生入口点
//!
//! `main.rs` 仅负责启动应用，核心逻辑位于 `lib.rs` 中。

// Prevents additional console window on Windows in release, DO NOT REMOVE!!
#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

/// 应用程序主入口函数
///
/// 调用 `app_lib::run()` 启动 Tauri 应用引擎。
fn main() {
    app_lib::run();
}
