//! # 阅读导航状态机
//!
//! 状态为 `(activeChapterId, expandedModuleIds, locale)` 的笛卡尔积，外加移动端侧边栏浮层标志：
//! - `toggle_module`：翻转模块的展开状态，连续两次等于无操作；允许同时展开多个模块
//! - `select_chapter`：切换激活章节并关闭侧边栏浮层；展开状态保持不变
//! - `toggle_locale`：在英语和乌尔都语之间切换，永不失败
//! - `toggle_sidebar`：翻转移动端侧边栏浮层
//!
//! ## 封闭 ID 空间
//! 章节和模块 ID 来自固定目录。传入目录中不存在的 ID 属于调用方的编程错误；
//! 由于 ID 经由 IPC 从前端传入，这里不 panic，而是返回 `Err` 并保持状态不变。

use std::collections::BTreeSet;
use std::sync::RwLock;

use crate::models::navigation::{Locale, NavigationSnapshot};
use crate::services::catalog::Catalog;

/// 导航初始设置（来自 `ReaderConfig`）
#[derive(Debug, Clone)]
pub struct NavigationDefaults {
    pub locale: Locale,
    /// 启动时展开的模块 ID；目录中不存在的 ID 会被忽略
    pub expanded_modules: Vec<String>,
}

impl Default for NavigationDefaults {
    fn default() -> Self {
        Self {
            locale: Locale::En,
            expanded_modules: vec!["m1".to_string()],
        }
    }
}

struct NavigationState {
    active_chapter_id: &'static str,
    expanded: BTreeSet<&'static str>,
    locale: Locale,
    sidebar_open: bool,
}

/// 导航存储
///
/// 由 `AppState` 持有，通过引用注入到各个 command。
pub struct NavigationStore {
    catalog: Catalog,
    state: RwLock<NavigationState>,
}

impl NavigationStore {
    /// 创建导航存储
    ///
    /// 激活章节初始化为目录中第一个模块的第一个章节，侧边栏浮层初始为打开。
    ///
    /// # 错误
    /// 目录中没有任何章节时返回错误（激活章节无从初始化）
    pub fn new(catalog: Catalog, defaults: &NavigationDefaults) -> Result<Self, String> {
        let first = catalog
            .first_chapter()
            .ok_or_else(|| "Catalog contains no chapters".to_string())?;

        let mut expanded = BTreeSet::new();
        for id in &defaults.expanded_modules {
            match catalog.find_module(id) {
                Some(module) => {
                    expanded.insert(module.id);
                }
                None => log::warn!("忽略配置中不存在的模块 ID: {}", id),
            }
        }

        Ok(Self {
            catalog,
            state: RwLock::new(NavigationState {
                active_chapter_id: first.id,
                expanded,
                locale: defaults.locale,
                sidebar_open: true,
            }),
        })
    }

    /// 恢复到初始状态（登出时调用，下次登录从第一章开始）
    pub fn reset(&self, defaults: &NavigationDefaults) -> Result<(), String> {
        let fresh = Self::new(self.catalog, defaults)?;
        let fresh_state = fresh
            .state
            .into_inner()
            .map_err(|e| format!("Navigation state lock poisoned: {}", e))?;
        *self.write()? = fresh_state;
        Ok(())
    }

    pub fn catalog(&self) -> Catalog {
        self.catalog
    }

    /// 翻转模块展开状态
    ///
    /// # 返回值
    /// 翻转后该模块是否处于展开状态
    ///
    /// # 错误
    /// 模块 ID 不在目录中
    pub fn toggle_module(&self, module_id: &str) -> Result<bool, String> {
        let module = self
            .catalog
            .find_module(module_id)
            .ok_or_else(|| format!("Unknown module id '{}'", module_id))?;

        let mut state = self.write()?;
        let expanded = if state.expanded.remove(module.id) {
            false
        } else {
            state.expanded.insert(module.id);
            true
        };
        log::debug!("模块 {} 展开状态: {}", module.id, expanded);
        Ok(expanded)
    }

    /// 选择章节
    ///
    /// 设置激活章节并关闭移动端侧边栏浮层。选择当前章节时仅关闭浮层。
    ///
    /// # 错误
    /// 章节 ID 不在目录中（状态不变，浮层也不关闭）
    pub fn select_chapter(&self, chapter_id: &str) -> Result<(), String> {
        let (_, chapter) = self
            .catalog
            .find_chapter(chapter_id)
            .ok_or_else(|| format!("Unknown chapter id '{}'", chapter_id))?;

        let mut state = self.write()?;
        if state.active_chapter_id != chapter.id {
            log::info!("切换章节: {} -> {}", state.active_chapter_id, chapter.id);
            state.active_chapter_id = chapter.id;
        }
        state.sidebar_open = false;
        Ok(())
    }

    /// 切换语言
    ///
    /// # 返回值
    /// 切换后的语言
    pub fn toggle_locale(&self) -> Result<Locale, String> {
        let mut state = self.write()?;
        state.locale = state.locale.toggled();
        log::info!("界面语言切换为 {:?}", state.locale);
        Ok(state.locale)
    }

    /// 翻转移动端侧边栏浮层
    pub fn toggle_sidebar(&self) -> Result<bool, String> {
        let mut state = self.write()?;
        state.sidebar_open = !state.sidebar_open;
        Ok(state.sidebar_open)
    }

    /// 当前状态的只读快照
    pub fn snapshot(&self) -> Result<NavigationSnapshot, String> {
        let state = self
            .state
            .read()
            .map_err(|e| format!("Navigation state lock poisoned: {}", e))?;
        Ok(NavigationSnapshot {
            active_chapter_id: state.active_chapter_id.to_string(),
            expanded_module_ids: state.expanded.iter().map(|id| id.to_string()).collect(),
            locale: state.locale,
            sidebar_open: state.sidebar_open,
        })
    }

    fn write(&self) -> Result<std::sync::RwLockWriteGuard<'_, NavigationState>, String> {
        self.state
            .write()
            .map_err(|e| format!("Navigation state lock poisoned: {}", e))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::catalog::{Chapter, ChapterContent, LocalizedText, Module};
    use crate::models::navigation::TextDirection;

    fn is_expanded(nav: &NavigationStore, module_id: &str) -> bool {
        nav.snapshot()
            .unwrap()
            .expanded_module_ids
            .iter()
            .any(|id| id == module_id)
    }

    fn store() -> NavigationStore {
        NavigationStore::new(Catalog::builtin(), &NavigationDefaults::default()).unwrap()
    }

    #[test]
    fn test_initial_state() {
        let snapshot = store().snapshot().unwrap();
        assert_eq!(snapshot.active_chapter_id, "c1");
        assert_eq!(snapshot.expanded_module_ids, vec!["m1".to_string()]);
        assert_eq!(snapshot.locale, Locale::En);
        assert!(snapshot.sidebar_open);
    }

    #[test]
    fn test_toggle_module_membership_follows_parity() {
        for calls in 0..6 {
            let nav = store();
            for _ in 0..calls {
                nav.toggle_module("m3").unwrap();
            }
            assert_eq!(is_expanded(&nav, "m3"), calls % 2 == 1, "调用 {} 次", calls);
        }
    }

    #[test]
    fn test_multiple_modules_may_be_expanded() {
        let nav = store();
        assert!(nav.toggle_module("m2").unwrap());
        assert!(nav.toggle_module("m5").unwrap());
        let snapshot = nav.snapshot().unwrap();
        assert_eq!(snapshot.expanded_module_ids, vec!["m1", "m2", "m5"]);
    }

    #[test]
    fn test_unknown_ids_leave_state_untouched() {
        let nav = store();
        let before = nav.snapshot().unwrap();
        assert!(nav.toggle_module("m42").is_err());
        assert!(nav.select_chapter("c42").is_err());
        assert_eq!(nav.snapshot().unwrap(), before);
    }

    #[test]
    fn test_select_chapter_closes_overlay_and_keeps_expansion() {
        let nav = store();
        nav.toggle_module("m4").unwrap();
        nav.select_chapter("c11").unwrap();

        let snapshot = nav.snapshot().unwrap();
        assert_eq!(snapshot.active_chapter_id, "c11");
        assert!(!snapshot.sidebar_open);
        assert_eq!(snapshot.expanded_module_ids, vec!["m1", "m4"]);
    }

    #[test]
    fn test_reselecting_active_chapter_only_closes_overlay() {
        let nav = store();
        nav.select_chapter("c1").unwrap();
        let snapshot = nav.snapshot().unwrap();
        assert_eq!(snapshot.active_chapter_id, "c1");
        assert!(!snapshot.sidebar_open);

        assert!(nav.toggle_sidebar().unwrap());
        nav.select_chapter("c1").unwrap();
        assert!(!nav.snapshot().unwrap().sidebar_open);
    }

    #[test]
    fn test_toggle_locale_twice_restores_direction() {
        let nav = store();
        assert_eq!(nav.toggle_locale().unwrap(), Locale::Ur);
        assert_eq!(Locale::Ur.direction(), TextDirection::Rtl);
        assert_eq!(nav.toggle_locale().unwrap(), Locale::En);
        assert_eq!(nav.snapshot().unwrap().locale.direction(), TextDirection::Ltr);
    }

    #[test]
    fn test_reset_restores_initial_state() {
        let nav = store();
        let initial = nav.snapshot().unwrap();
        nav.toggle_module("m2").unwrap();
        nav.select_chapter("c5").unwrap();
        nav.toggle_locale().unwrap();

        nav.reset(&NavigationDefaults::default()).unwrap();
        assert_eq!(nav.snapshot().unwrap(), initial);
    }

    #[test]
    fn test_defaults_ignore_unknown_modules() {
        let defaults = NavigationDefaults {
            locale: Locale::Ur,
            expanded_modules: vec!["m2".into(), "bogus".into()],
        };
        let nav = NavigationStore::new(Catalog::builtin(), &defaults).unwrap();
        let snapshot = nav.snapshot().unwrap();
        assert_eq!(snapshot.expanded_module_ids, vec!["m2"]);
        assert_eq!(snapshot.locale, Locale::Ur);
    }

    static EMPTY_MODULE_CATALOG: &[Module] = &[
        Module {
            id: "intro",
            title: "Intro: Coming soon",
            chapters: &[],
        },
        Module {
            id: "core",
            title: "Core",
            chapters: &[Chapter { id: "k1", title: "Kinematics" }],
        },
    ];

    static ONE_LESSON: &[(&str, ChapterContent)] = &[(
        "k1",
        ChapterContent {
            summary: LocalizedText::new("summary", "خلاصہ"),
            sections: &[],
            takeaways: &[],
        },
    )];

    #[test]
    fn test_module_with_zero_chapters_can_be_expanded() {
        let catalog = Catalog::new(EMPTY_MODULE_CATALOG, ONE_LESSON, "k1");
        let nav = NavigationStore::new(catalog, &NavigationDefaults::default()).unwrap();

        // 初始章节跳过空模块
        assert_eq!(nav.snapshot().unwrap().active_chapter_id, "k1");
        assert!(nav.toggle_module("intro").unwrap());
        assert!(is_expanded(&nav, "intro"));
    }

    #[test]
    fn test_catalog_without_chapters_is_rejected() {
        static NO_CHAPTERS: &[Module] = &[Module {
            id: "x",
            title: "X",
            chapters: &[],
        }];
        let catalog = Catalog::new(NO_CHAPTERS, ONE_LESSON, "k1");
        assert!(NavigationStore::new(catalog, &NavigationDefaults::default()).is_err());
    }
}
