//! # 课程目录服务
//!
//! 只读的课程目录：模块/章节层级结构 + 以章节 ID 为键的双语正文表。
//!
//! ## 正文回退规则
//! 正文表不保证覆盖每个章节。`resolve_content` 对没有条目的章节
//! **显式回退**到指定的默认章节（`lessons::DEFAULT_CONTENT_CHAPTER_ID`）的正文，
//! 并在返回值中标注 `is_fallback`，前端据此展示 "内容编写中" 提示，而不是渲染空白页。
//! 未知 ID 同样走回退分支，不产生错误。

mod curriculum;
mod lessons;

use crate::models::catalog::{Chapter, ChapterContent, Module};

pub use lessons::DEFAULT_CONTENT_CHAPTER_ID;

/// 正文查找结果
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ContentLookup {
    pub content: &'static ChapterContent,
    /// 实际提供正文的章节 ID（回退时为默认章节 ID）
    pub source_chapter_id: &'static str,
    /// 请求的章节没有自己的正文条目
    pub is_fallback: bool,
}

/// 课程目录
///
/// 由若干 `&'static` 表组成的轻量值类型，可以按值复制传给各个 store。
/// 生产环境使用 `Catalog::builtin()`；测试可以用 `Catalog::new` 装配自定义表
/// （例如包含零章节模块的目录）。
#[derive(Debug, Clone, Copy)]
pub struct Catalog {
    modules: &'static [Module],
    lessons: &'static [(&'static str, ChapterContent)],
    default_content_id: &'static str,
}

impl Catalog {
    /// 装配一个目录
    ///
    /// `default_content_id` 必须在 `lessons` 中有条目；否则回退会再回退到 `lessons` 的第一项。
    /// `modules` 至少要包含一个章节，导航状态的初始章节依赖于此。
    pub const fn new(
        modules: &'static [Module],
        lessons: &'static [(&'static str, ChapterContent)],
        default_content_id: &'static str,
    ) -> Self {
        Self {
            modules,
            lessons,
            default_content_id,
        }
    }

    /// 应用内置的课程目录
    pub const fn builtin() -> Self {
        Self::new(
            curriculum::BOOK_MODULES,
            lessons::LESSONS,
            DEFAULT_CONTENT_CHAPTER_ID,
        )
    }

    /// 所有模块，按课程顺序
    pub fn modules(&self) -> &'static [Module] {
        self.modules
    }

    pub fn find_module(&self, module_id: &str) -> Option<&'static Module> {
        self.modules.iter().find(|m| m.id == module_id)
    }

    /// 查找章节及其所属模块
    pub fn find_chapter(&self, chapter_id: &str) -> Option<(&'static Module, &'static Chapter)> {
        self.modules.iter().find_map(|m| {
            m.chapters
                .iter()
                .find(|c| c.id == chapter_id)
                .map(|c| (m, c))
        })
    }

    /// 第一个模块的第一个章节（导航状态的初始激活章节）
    ///
    /// 跳过零章节模块；整个目录没有章节时返回 `None`。
    pub fn first_chapter(&self) -> Option<&'static Chapter> {
        self.modules.iter().flat_map(|m| m.chapters.iter()).next()
    }

    /// 获取章节正文（总是成功）
    ///
    /// 等价于 `resolve_content(chapter_id).content`。
    pub fn content(&self, chapter_id: &str) -> &'static ChapterContent {
        self.resolve_content(chapter_id).content
    }

    /// 获取章节正文，并说明是否发生了回退
    ///
    /// # 参数
    /// - `chapter_id` - 章节 ID；无需存在于目录或正文表中
    ///
    /// # 返回值
    /// - 正文表中有该章节：返回其正文，`is_fallback = false`
    /// - 否则：返回默认章节的正文，`is_fallback = true`
    pub fn resolve_content(&self, chapter_id: &str) -> ContentLookup {
        if let Some((id, content)) = self.lessons.iter().find(|(id, _)| *id == chapter_id) {
            return ContentLookup {
                content,
                source_chapter_id: *id,
                is_fallback: false,
            };
        }

        log::debug!(
            "章节 {} 没有正文条目，回退到 {}",
            chapter_id,
            self.default_content_id
        );

        let (id, content) = self
            .lessons
            .iter()
            .find(|(id, _)| *id == self.default_content_id)
            .or_else(|| self.lessons.first())
            .map(|(id, content)| (*id, content))
            .unwrap_or((self.default_content_id, &EMPTY_CONTENT));

        ContentLookup {
            content,
            source_chapter_id: id,
            is_fallback: true,
        }
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::builtin()
    }
}

// 仅当自定义目录的正文表为空时使用
static EMPTY_CONTENT: ChapterContent = ChapterContent {
    summary: crate::models::catalog::LocalizedText::new("", ""),
    sections: &[],
    takeaways: &[],
};
