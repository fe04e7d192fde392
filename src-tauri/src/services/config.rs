//! # 阅读器配置服务
//!
//! 启动时从 `<config_dir>/phyai-reader/reader-config.json` 读取一次只读配置。
//! 应用从不写入该文件：会话、导航和聊天状态都不持久化。
//!
//! - 文件不存在：使用默认配置
//! - 文件存在但无法读取或解析：使用默认配置，并在日志中给出警告
//! - 字段缺失：逐字段补齐默认值（`#[serde(default)]`）
//!
//! 配置在日志插件注册之前加载（日志级别本身来自配置），
//! 因此加载函数不直接写日志，而是返回 `ConfigSource`，由调用方在日志就绪后调用 `log()`。

use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::models::navigation::Locale;
use crate::services::chat::DEFAULT_REPLY_DELAY;
use crate::services::navigation::NavigationDefaults;
use crate::utils::path;

/// 阅读器配置数据结构
///
/// 对应前端 TypeScript 接口：
/// ```typescript
/// interface ReaderConfig {
///   chatReplyDelayMs: number;
///   defaultLocale: 'en' | 'ur';
///   initiallyExpandedModules: string[];
///   logLevel: string;
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ReaderConfig {
    /// 模拟回复的延迟（毫秒）
    pub chat_reply_delay_ms: u64,
    /// 启动时的界面语言
    pub default_locale: Locale,
    /// 启动时展开的模块 ID
    pub initially_expanded_modules: Vec<String>,
    /// 日志级别：`error` / `warn` / `info` / `debug` / `trace` / `off`
    pub log_level: String,
}

impl Default for ReaderConfig {
    fn default() -> Self {
        Self {
            chat_reply_delay_ms: DEFAULT_REPLY_DELAY.as_millis() as u64,
            default_locale: Locale::En,
            initially_expanded_modules: vec!["m1".to_string()],
            log_level: "info".to_string(),
        }
    }
}

impl ReaderConfig {
    pub fn chat_reply_delay(&self) -> Duration {
        Duration::from_millis(self.chat_reply_delay_ms)
    }

    pub fn navigation_defaults(&self) -> NavigationDefaults {
        NavigationDefaults {
            locale: self.default_locale,
            expanded_modules: self.initially_expanded_modules.clone(),
        }
    }

    /// 解析日志级别
    ///
    /// # 错误
    /// 无法识别的级别名
    pub fn parse_log_level(&self) -> Result<log::LevelFilter, String> {
        self.log_level
            .parse()
            .map_err(|_| format!("无法识别的日志级别 '{}'，使用 info", self.log_level))
    }

    /// 日志级别，无法识别时回退到 `Info`
    pub fn log_level_filter(&self) -> log::LevelFilter {
        self.parse_log_level().unwrap_or(log::LevelFilter::Info)
    }
}

/// 配置的来源（加载结果）
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigSource {
    /// 成功读取并解析了配置文件
    File(PathBuf),
    /// 配置文件不存在
    Missing(PathBuf),
    /// 配置文件存在但读取失败
    Unreadable { path: PathBuf, error: String },
    /// 配置文件不是合法的配置 JSON
    Malformed { path: PathBuf, error: String },
    /// 无法确定配置目录
    NoConfigDir(String),
}

impl ConfigSource {
    /// 是否回退到了默认配置
    pub fn is_default(&self) -> bool {
        !matches!(self, ConfigSource::File(_))
    }

    /// 记录加载结果（需在日志后端注册之后调用）
    pub fn log(&self) {
        match self {
            ConfigSource::File(path) => log::info!("已加载配置文件 {}", path.display()),
            ConfigSource::Missing(path) => {
                log::debug!("配置文件 {} 不存在，使用默认配置", path.display())
            }
            ConfigSource::Unreadable { path, error } => {
                log::warn!("读取配置文件 {} 失败: {}，使用默认配置", path.display(), error)
            }
            ConfigSource::Malformed { path, error } => {
                log::warn!("解析配置文件 {} 失败: {}，使用默认配置", path.display(), error)
            }
            ConfigSource::NoConfigDir(error) => log::warn!("{}，使用默认配置", error),
        }
    }
}

/// 配置加载结果：生效的配置及其来源
#[derive(Debug, Clone)]
pub struct ConfigLoad {
    pub config: ReaderConfig,
    pub source: ConfigSource,
}

impl ConfigLoad {
    fn defaults(source: ConfigSource) -> Self {
        Self {
            config: ReaderConfig::default(),
            source,
        }
    }
}

/// 从默认位置加载配置
///
/// 无法确定配置目录时同样回退到默认配置。
pub fn load_reader_config() -> ConfigLoad {
    match path::get_reader_config_path() {
        Ok(config_path) => load_reader_config_from(&config_path),
        Err(e) => ConfigLoad::defaults(ConfigSource::NoConfigDir(e)),
    }
}

/// 从指定路径加载配置
///
/// # 参数
/// - `config_path` - 配置文件路径
///
/// # 返回值
/// 解析成功时返回文件中的配置，其余情况返回默认配置；`source` 说明是哪种情况
pub fn load_reader_config_from(config_path: &Path) -> ConfigLoad {
    let path = config_path.to_path_buf();
    if !config_path.exists() {
        return ConfigLoad::defaults(ConfigSource::Missing(path));
    }

    let content = match std::fs::read_to_string(config_path) {
        Ok(content) => content,
        Err(e) => {
            return ConfigLoad::defaults(ConfigSource::Unreadable {
                path,
                error: e.to_string(),
            });
        }
    };

    match serde_json::from_str(&content) {
        Ok(config) => ConfigLoad {
            config,
            source: ConfigSource::File(path),
        },
        Err(e) => ConfigLoad::defaults(ConfigSource::Malformed {
            path,
            error: e.to_string(),
        }),
    }
}
