//! Display language for user-visible labels.

use serde::{Deserialize, Serialize};

/// Language used for labels, headings and relative times.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    /// English.
    #[default]
    En,
    /// Simplified Chinese.
    Zh,
}

impl Locale {
    pub fn overall_status(&self) -> &'static str {
        match self {
            Locale::En => "Overall status",
            Locale::Zh => "总体状态",
        }
    }

    pub fn components_heading(&self, count: usize) -> String {
        match self {
            Locale::En => format!("Components ({})", count),
            Locale::Zh => format!("组件状态 ({})", count),
        }
    }

    pub fn incidents_heading(&self) -> &'static str {
        match self {
            Locale::En => "Recent incidents",
            Locale::Zh => "最新事件",
        }
    }

    pub fn maintenance_heading(&self) -> &'static str {
        match self {
            Locale::En => "Scheduled maintenance",
            Locale::Zh => "预定维护",
        }
    }

    /// Error shown inside a single provider's card.
    pub fn provider_failed(&self, error: &str) -> String {
        match self {
            Locale::En => format!("Failed to fetch: {}", error),
            Locale::Zh => format!("获取失败: {}", error),
        }
    }

    /// Error shown in place of all cards.
    pub fn load_failed(&self, error: &str) -> String {
        match self {
            Locale::En => format!("Unable to load status: {}", error),
            Locale::Zh => format!("无法加载状态信息: {}", error),
        }
    }

    pub fn invalid_data(&self) -> &'static str {
        match self {
            Locale::En => "Invalid data structure",
            Locale::Zh => "无效的数据结构",
        }
    }

    /// Hint attached to errors from scraped providers.
    pub fn scraper_hint(&self) -> &'static str {
        match self {
            Locale::En => "Tip: the scraper may have hit a problem; wait for the next update.",
            Locale::Zh => "提示：可能是本地爬虫出现了问题，请等待自动更新或联系我。",
        }
    }

    /// Note attached to scraped providers.
    pub fn scraper_note(&self) -> &'static str {
        match self {
            Locale::En => "Collected by web scraper; data may be delayed",
            Locale::Zh => "通过网页爬虫获取，数据更新可能有延迟",
        }
    }

    pub fn refresh(&self) -> &'static str {
        match self {
            Locale::En => "Refresh",
            Locale::Zh => "刷新状态",
        }
    }

    pub fn fetching(&self) -> &'static str {
        match self {
            Locale::En => "Fetching...",
            Locale::Zh => "获取中...",
        }
    }

    pub fn loading(&self) -> &'static str {
        match self {
            Locale::En => "Loading...",
            Locale::Zh => "加载中...",
        }
    }

    pub fn updated(&self) -> &'static str {
        match self {
            Locale::En => "Updated",
            Locale::Zh => "更新于",
        }
    }

    /// "N units ago" for a whole number of seconds, minutes, hours or days.
    pub fn ago(&self, value: i64, unit: TimeUnit) -> String {
        match self {
            Locale::En => {
                let name = match unit {
                    TimeUnit::Second => "second",
                    TimeUnit::Minute => "minute",
                    TimeUnit::Hour => "hour",
                    TimeUnit::Day => "day",
                };
                let plural = if value == 1 { "" } else { "s" };
                format!("{} {}{} ago", value, name, plural)
            }
            Locale::Zh => {
                let name = match unit {
                    TimeUnit::Second => "秒",
                    TimeUnit::Minute => "分钟",
                    TimeUnit::Hour => "小时",
                    TimeUnit::Day => "天",
                };
                format!("{}{}前", value, name)
            }
        }
    }
}

/// Buckets used for relative times.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimeUnit {
    Second,
    Minute,
    Hour,
    Day,
}
