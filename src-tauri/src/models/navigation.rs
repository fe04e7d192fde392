//! # 阅读导航数据模型
//!
//! 定义语言（Locale）、文字方向（TextDirection）和导航状态快照（NavigationSnapshot）。

use serde::{Deserialize, Serialize};

/// 界面语言
///
/// 两个固定的展示变体，文本均为预先手写的字面量。
/// 序列化为 `"en"` / `"ur"`，与配置文件和前端保持一致。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    /// 英语（从左到右）
    #[default]
    En,
    /// 乌尔都语（从右到左）
    Ur,
}

impl Locale {
    /// 切换到另一种语言
    pub fn toggled(self) -> Self {
        match self {
            Locale::En => Locale::Ur,
            Locale::Ur => Locale::En,
        }
    }

    /// 该语言对应的文字方向
    pub fn direction(self) -> TextDirection {
        match self {
            Locale::En => TextDirection::Ltr,
            Locale::Ur => TextDirection::Rtl,
        }
    }
}

/// 文字方向，直接对应 HTML 的 `dir` 属性
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TextDirection {
    Ltr,
    Rtl,
}

/// 导航状态快照
///
/// `NavigationStore` 内部状态的只读拷贝，用于渲染和测试断言。
///
/// 对应前端 TypeScript 接口：
/// ```typescript
/// interface NavigationSnapshot {
///   activeChapterId: string;
///   expandedModuleIds: string[];
///   locale: 'en' | 'ur';
///   sidebarOpen: boolean;
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NavigationSnapshot {
    /// 当前激活的章节 ID：始终指向目录中真实存在的章节
    pub active_chapter_id: String,
    /// 已展开的模块 ID（按 ID 排序）；不在列表中即为折叠
    pub expanded_module_ids: Vec<String>,
    pub locale: Locale,
    /// 移动端侧边栏浮层是否打开
    pub sidebar_open: bool,
}
