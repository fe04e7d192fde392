//! # 阅读页视图组装
//!
//! 将课程目录、导航状态快照和固定文案组装为 `ReaderView`。
//! 纯函数，不持有任何状态。

use crate::models::catalog::Module;
use crate::models::display::{
    ActiveChapter, ChapterNode, ModuleNode, ReaderView, RenderedContent, RenderedSection,
};
use crate::models::navigation::{Locale, NavigationSnapshot};
use crate::services::catalog::Catalog;
use crate::services::ui_text;

/// 组装阅读页渲染模型
///
/// # 参数
/// - `catalog` - 课程目录
/// - `nav` - 导航状态快照
/// - `user_name` - 已登录用户的显示名
///
/// # 错误
/// 快照中的激活章节不在目录中（`NavigationStore` 保证不会发生）
pub fn build_reader_view(
    catalog: &Catalog,
    nav: &NavigationSnapshot,
    user_name: Option<String>,
) -> Result<ReaderView, String> {
    let (module, chapter) = catalog.find_chapter(&nav.active_chapter_id).ok_or_else(|| {
        format!(
            "Active chapter '{}' is not in the catalog",
            nav.active_chapter_id
        )
    })?;

    let locale = nav.locale;
    let content = render_content(catalog, chapter.id, locale);

    Ok(ReaderView {
        modules: catalog
            .modules()
            .iter()
            .map(|m| module_node(m, nav))
            .collect(),
        active_chapter: ActiveChapter {
            id: chapter.id,
            title: chapter.title,
            module_id: module.id,
            module_title: module.title,
        },
        locale,
        direction: locale.direction(),
        strings: ui_text::reader_strings(locale),
        content,
        sidebar_open: nav.sidebar_open,
        user_name,
    })
}

/// 按语言渲染章节正文（含回退）
pub fn render_content(catalog: &Catalog, chapter_id: &str, locale: Locale) -> RenderedContent {
    let lookup = catalog.resolve_content(chapter_id);
    RenderedContent {
        summary: lookup.content.summary.get(locale),
        sections: lookup
            .content
            .sections
            .iter()
            .map(|s| RenderedSection {
                title: s.title.get(locale),
                body: s.body.get(locale),
            })
            .collect(),
        takeaways: lookup
            .content
            .takeaways
            .iter()
            .map(|t| t.get(locale))
            .collect(),
        source_chapter_id: lookup.source_chapter_id,
        is_fallback: lookup.is_fallback,
    }
}

fn module_node(module: &'static Module, nav: &NavigationSnapshot) -> ModuleNode {
    ModuleNode {
        id: module.id,
        title: module.title,
        short_title: module.short_title(),
        expanded: nav.expanded_module_ids.iter().any(|id| id == module.id),
        chapters: module
            .chapters
            .iter()
            .map(|c| ChapterNode {
                id: c.id,
                title: c.title,
                active: c.id == nav.active_chapter_id,
            })
            .collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::navigation::TextDirection;
    use crate::services::navigation::{NavigationDefaults, NavigationStore};

    fn view_of(nav: &NavigationStore) -> ReaderView {
        build_reader_view(&nav.catalog(), &nav.snapshot().unwrap(), None).unwrap()
    }

    #[test]
    fn test_initial_view() {
        let nav = NavigationStore::new(Catalog::builtin(), &NavigationDefaults::default()).unwrap();
        let view = view_of(&nav);

        assert_eq!(view.modules.len(), 6);
        assert!(view.modules[0].expanded);
        assert!(!view.modules[1].expanded);
        assert_eq!(view.modules[0].short_title, "Module 1");
        assert!(view.modules[0].chapters[0].active);
        assert_eq!(view.active_chapter.module_id, "m1");
        assert_eq!(view.direction, TextDirection::Ltr);
        assert!(!view.content.is_fallback);
        assert_eq!(view.strings.summary_heading, "AI Generated Summary");
    }

    #[test]
    fn test_urdu_view_is_rtl_and_localized() {
        let nav = NavigationStore::new(Catalog::builtin(), &NavigationDefaults::default()).unwrap();
        nav.toggle_locale().unwrap();
        let view = view_of(&nav);

        assert_eq!(view.locale, Locale::Ur);
        assert_eq!(view.direction, TextDirection::Rtl);
        assert_eq!(view.strings.breadcrumb, "ڈیش بورڈ / مطالعہ");
        assert_eq!(
            view.content.summary,
            Catalog::builtin().content("c1").summary.ur
        );
    }

    #[test]
    fn test_fallback_is_marked() {
        let nav = NavigationStore::new(Catalog::builtin(), &NavigationDefaults::default()).unwrap();
        nav.select_chapter("c16").unwrap();
        let view = view_of(&nav);

        assert_eq!(view.active_chapter.id, "c16");
        assert_eq!(view.active_chapter.module_id, "m6");
        assert!(view.content.is_fallback);
        assert_eq!(view.content.source_chapter_id, "c1");
        assert!(!view.sidebar_open);
        // 侧边栏中只有被选中的章节标记为激活
        let active: Vec<&str> = view
            .modules
            .iter()
            .flat_map(|m| m.chapters.iter())
            .filter(|c| c.active)
            .map(|c| c.id)
            .collect();
        assert_eq!(active, vec!["c16"]);
    }

    #[test]
    fn test_render_content_unknown_chapter_falls_back() {
        let content = render_content(&Catalog::builtin(), "nope", Locale::En);
        assert!(content.is_fallback);
        assert_eq!(content.summary, Catalog::builtin().content("c1").summary.en);
    }
}
