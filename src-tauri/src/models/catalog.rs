//! # 课程目录数据模型
//!
//! 定义了课程模块（Module）、章节（Chapter）和章节正文（ChapterContent）的 Rust 结构体，
//! 对应前端 TypeScript 中的 `Module` 和 `Chapter` 接口。
//!
//! 课程目录在编译期固定：所有字段均为 `&'static` 引用，运行时不会创建或销毁任何条目。
//! 结构体只派生 `Serialize`（Rust → JS），前端从不回传完整的目录结构。

use serde::Serialize;

use crate::models::navigation::Locale;

/// 章节数据结构
///
/// 课程内容的最小可寻址单元，通过稳定的 `id`（如 `"c1"`）标识。
///
/// 对应前端 TypeScript 接口：
/// ```typescript
/// interface Chapter {
///   id: string;
///   title: string;
/// }
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Chapter {
    /// 章节 ID：在整个目录中唯一
    pub id: &'static str,
    /// 章节标题（如 "Chapter 1: Introduction to Physical AI"）
    pub title: &'static str,
}

/// 课程模块数据结构
///
/// 一组有序章节的命名集合。每个章节只属于一个模块。
///
/// 对应前端 TypeScript 接口：
/// ```typescript
/// interface Module {
///   id: string;
///   title: string;
///   chapters: Chapter[];
/// }
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Module {
    /// 模块 ID（如 `"m1"`）
    pub id: &'static str,
    /// 完整模块标题（如 "Module 1: Introduction to Physical AI"）
    pub title: &'static str,
    /// 模块下的章节列表，按课程顺序排列；允许为空
    pub chapters: &'static [Chapter],
}

impl Module {
    /// 侧边栏使用的短标题：完整标题中第一个 `:` 之前的部分
    ///
    /// 标题中没有 `:` 时返回完整标题。
    ///
    /// # 示例
    /// `"Module 1: Introduction to Physical AI"` → `"Module 1"`
    pub fn short_title(&self) -> &'static str {
        match self.title.split_once(':') {
            Some((head, _)) => head.trim_end(),
            None => self.title,
        }
    }
}

/// 双语文本：两个语言版本均为手写的字面量，不做任何动态翻译
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct LocalizedText {
    pub en: &'static str,
    pub ur: &'static str,
}

impl LocalizedText {
    pub const fn new(en: &'static str, ur: &'static str) -> Self {
        Self { en, ur }
    }

    /// 按语言选择对应的字面量
    pub fn get(&self, locale: Locale) -> &'static str {
        match locale {
            Locale::En => self.en,
            Locale::Ur => self.ur,
        }
    }
}

/// 章节正文中的一个小节
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct LessonSection {
    pub title: LocalizedText,
    pub body: LocalizedText,
}

/// 章节正文数据结构
///
/// 以章节 ID 为键存放在独立的正文表中。并非每个章节都有正文条目，
/// 查找时的回退规则见 `services::catalog::Catalog::resolve_content`。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ChapterContent {
    /// 章节摘要（阅读页顶部 "AI Generated Summary" 卡片）
    pub summary: LocalizedText,
    /// 有序小节列表
    pub sections: &'static [LessonSection],
    /// 要点列表
    pub takeaways: &'static [LocalizedText],
}
