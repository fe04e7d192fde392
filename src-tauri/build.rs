//! # PhyAI Reader - Tauri Cargo 构建脚本
//!
//! 仅在启用 `desktop` feature 时调用 `tauri_build::build()`，
//! 生成 Tauri 运行时所需的资源绑定代码（读取 `tauri.conf.json`、图标和权限清单）。
//! 未启用时（如运行状态核心的单元测试），构建脚本不做任何事情。

/// 构建脚本入口函数
fn main() {
    #[cfg(feature = "desktop")]
    tauri_build::build()
}
