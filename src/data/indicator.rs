//! Status normalization.
//!
//! Maps raw indicator codes from status pages (overall indicators such as
//! `none`/`minor`/`critical` and component statuses such as
//! `degraded_performance`) onto a small set of display classes with a
//! localized label.

use serde::Serialize;

use super::Locale;

/// Display class for a status code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum StatusClass {
    Operational,
    Maintenance,
    Degraded,
    PartialOutage,
    MajorOutage,
    CriticalOutage,
    Unknown,
}

impl StatusClass {
    /// Stylesheet class name, as used by the web frontend.
    pub fn css_class(&self) -> &'static str {
        match self {
            StatusClass::Operational => "status-operational",
            StatusClass::Maintenance => "status-maintenance",
            StatusClass::Degraded => "status-degraded",
            StatusClass::PartialOutage => "status-partial-outage",
            StatusClass::MajorOutage => "status-major-outage",
            StatusClass::CriticalOutage => "status-critical-outage",
            StatusClass::Unknown => "status-unknown",
        }
    }

    /// Returns a short symbol for display.
    pub fn symbol(&self) -> &'static str {
        match self {
            StatusClass::Operational => "●",
            StatusClass::Maintenance => "◆",
            StatusClass::Degraded => "▲",
            StatusClass::PartialOutage => "▲",
            StatusClass::MajorOutage => "✖",
            StatusClass::CriticalOutage => "✖",
            StatusClass::Unknown => "?",
        }
    }
}

/// Display metadata for one status code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct StatusInfo {
    pub class: StatusClass,
    pub label: &'static str,
}

struct Entry {
    code: &'static str,
    class: StatusClass,
    en: &'static str,
    zh: &'static str,
}

const UNKNOWN: Entry = Entry {
    code: "unknown",
    class: StatusClass::Unknown,
    en: "Unknown",
    zh: "未知状态",
};

/// Known indicator codes.
const INDICATORS: &[Entry] = &[
    Entry {
        code: "none",
        class: StatusClass::Operational,
        en: "All Systems Operational",
        zh: "所有系统正常",
    },
    Entry {
        code: "minor",
        class: StatusClass::Degraded,
        en: "Degraded Performance / Partial Outage",
        zh: "性能下降/部分中断",
    },
    Entry {
        code: "major",
        class: StatusClass::MajorOutage,
        en: "Major Outage",
        zh: "重大中断",
    },
    Entry {
        code: "critical",
        class: StatusClass::CriticalOutage,
        en: "Critical Outage",
        zh: "严重中断",
    },
    Entry {
        code: "maintenance",
        class: StatusClass::Maintenance,
        en: "Under Maintenance",
        zh: "维护中",
    },
    Entry {
        code: "operational",
        class: StatusClass::Operational,
        en: "Operational",
        zh: "运行中",
    },
    Entry {
        code: "degraded_performance",
        class: StatusClass::Degraded,
        en: "Degraded Performance",
        zh: "性能下降",
    },
    Entry {
        code: "partial_outage",
        class: StatusClass::PartialOutage,
        en: "Partial Outage",
        zh: "部分中断",
    },
    Entry {
        code: "major_outage",
        class: StatusClass::MajorOutage,
        en: "Major Outage",
        zh: "重大中断",
    },
    Entry {
        code: "under_maintenance",
        class: StatusClass::Maintenance,
        en: "Under Maintenance",
        zh: "维护中",
    },
    UNKNOWN,
];

impl Entry {
    fn info(&self, locale: Locale) -> StatusInfo {
        let label = match locale {
            Locale::En => self.en,
            Locale::Zh => self.zh,
        };
        StatusInfo { class: self.class, label }
    }
}

/// Normalize a raw indicator code.
///
/// Lookup is case-insensitive and ignores surrounding whitespace. Empty or
/// unrecognized codes map to the "unknown" entry.
pub fn normalize(indicator: &str, locale: Locale) -> StatusInfo {
    let code = indicator.trim();
    INDICATORS
        .iter()
        .find(|entry| entry.code.eq_ignore_ascii_case(code))
        .unwrap_or(&UNKNOWN)
        .info(locale)
}
