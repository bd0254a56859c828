#![forbid(unsafe_code)]

//! The static document catalog.
//!
//! Entries are defined once at compile time and never mutated. The catalog is
//! small by design; every search pass is a full scan, which keeps the ranking
//! path a pure function of the entry table plus the caller's state.

use crate::locale::{Locale, LocalizedText};

/// Base address joined with entry paths to form outbound URLs.
pub const DOCS_BASE: &str = "https://github.com/frostport-labs/frostport/blob/main";

/// Fully-qualified URL for a catalog path.
#[must_use]
pub fn doc_url(path: &str) -> String {
    format!("{DOCS_BASE}/{path}")
}

/// Document category. The set is fixed; filters add an `All` wildcard on top.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DocCategory {
    GettingStarted,
    Configuration,
    Channels,
    Operations,
    Security,
    Reference,
}

impl DocCategory {
    pub const ALL: [DocCategory; 6] = [
        DocCategory::GettingStarted,
        DocCategory::Configuration,
        DocCategory::Channels,
        DocCategory::Operations,
        DocCategory::Security,
        DocCategory::Reference,
    ];

    /// Display label, localized. Participates in scoring as a match field.
    #[must_use]
    pub fn label(self, locale: Locale) -> &'static str {
        match self {
            DocCategory::GettingStarted => LocalizedText::new("Getting Started", "快速开始"),
            DocCategory::Configuration => LocalizedText::new("Configuration", "配置"),
            DocCategory::Channels => LocalizedText::new("Channels", "渠道集成"),
            DocCategory::Operations => LocalizedText::new("Operations", "运维"),
            DocCategory::Security => LocalizedText::new("Security", "安全"),
            DocCategory::Reference => LocalizedText::new("Reference", "参考资料"),
        }
        .get(locale)
    }
}

/// Depth level of a document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DocLevel {
    Core,
    Advanced,
}

impl DocLevel {
    #[must_use]
    pub fn label(self, locale: Locale) -> &'static str {
        match self {
            DocLevel::Core => LocalizedText::new("Core", "核心").get(locale),
            DocLevel::Advanced => LocalizedText::new("Advanced", "进阶").get(locale),
        }
    }
}

/// One immutable catalog record. The `path` is the unique key.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DocEntry {
    pub title: LocalizedText,
    pub path: &'static str,
    pub category: DocCategory,
    pub summary: LocalizedText,
    pub level: DocLevel,
    pub featured: bool,
    pub keywords: &'static [&'static str],
}

impl DocEntry {
    /// Outbound URL for this entry.
    #[must_use]
    pub fn url(&self) -> String {
        doc_url(self.path)
    }
}

/// Read-only view over the static catalog.
#[derive(Debug, Clone, Copy)]
pub struct CatalogIndex {
    entries: &'static [DocEntry],
}

impl CatalogIndex {
    /// The built-in portal catalog.
    #[must_use]
    pub fn builtin() -> Self {
        Self { entries: CATALOG }
    }

    /// Lookup by unique path key.
    #[must_use]
    pub fn get(&self, path: &str) -> Option<&'static DocEntry> {
        self.entries.iter().find(|doc| doc.path == path)
    }

    #[must_use]
    pub fn entries(&self) -> &'static [DocEntry] {
        self.entries
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries flagged featured, in catalog order, capped for the shortcut
    /// strip.
    #[must_use]
    pub fn featured(&self, cap: usize) -> Vec<&'static DocEntry> {
        self.entries.iter().filter(|doc| doc.featured).take(cap).collect()
    }
}

impl Default for CatalogIndex {
    fn default() -> Self {
        Self::builtin()
    }
}

const fn bi(en: &'static str, zh: &'static str) -> LocalizedText {
    LocalizedText::new(en, zh)
}

/// The portal catalog. Paths are unique; both locales are always present.
pub static CATALOG: &[DocEntry] = &[
    DocEntry {
        title: bi("Docs Home", "文档首页"),
        path: "docs/README.md",
        category: DocCategory::GettingStarted,
        summary: bi(
            "Main documentation hub with starting points and structure.",
            "文档总入口，包含起步路径与结构索引。",
        ),
        level: DocLevel::Core,
        featured: true,
        keywords: &["docs", "home", "文档", "入口"],
    },
    DocEntry {
        title: bi("Getting Started", "快速开始"),
        path: "docs/getting-started/README.md",
        category: DocCategory::GettingStarted,
        summary: bi(
            "Installation and first-run onboarding references.",
            "安装与首次运行的引导说明。",
        ),
        level: DocLevel::Core,
        featured: true,
        keywords: &["install", "onboarding", "安装", "起步"],
    },
    DocEntry {
        title: bi("One-click Bootstrap", "一键初始化"),
        path: "docs/one-click-bootstrap.md",
        category: DocCategory::GettingStarted,
        summary: bi(
            "Fast bootstrap flow for new environments.",
            "面向新环境的快速初始化流程。",
        ),
        level: DocLevel::Core,
        featured: false,
        keywords: &["bootstrap", "new env", "初始化"],
    },
    DocEntry {
        title: bi("Network Deployment", "网络部署"),
        path: "docs/network-deployment.md",
        category: DocCategory::GettingStarted,
        summary: bi(
            "Gateway and callback deployment topology guidance.",
            "网关与回调部署拓扑指南。",
        ),
        level: DocLevel::Advanced,
        featured: false,
        keywords: &["network", "deployment", "网关", "部署"],
    },
    DocEntry {
        title: bi("Config Reference", "配置参考"),
        path: "docs/config-reference.md",
        category: DocCategory::Configuration,
        summary: bi(
            "Canonical runtime and provider configuration schema.",
            "标准运行时与模型提供方配置结构。",
        ),
        level: DocLevel::Core,
        featured: true,
        keywords: &["config", "schema", "配置"],
    },
    DocEntry {
        title: bi("Commands Reference", "命令参考"),
        path: "docs/commands-reference.md",
        category: DocCategory::Configuration,
        summary: bi(
            "CLI command map and behavior details.",
            "CLI 命令清单与行为细节。",
        ),
        level: DocLevel::Core,
        featured: false,
        keywords: &["commands", "cli", "命令"],
    },
    DocEntry {
        title: bi("Custom Providers", "自定义提供方"),
        path: "docs/custom-providers.md",
        category: DocCategory::Configuration,
        summary: bi(
            "How to wire custom inference provider integrations.",
            "如何接入自定义模型提供方。",
        ),
        level: DocLevel::Advanced,
        featured: false,
        keywords: &["provider", "integration", "提供方", "集成"],
    },
    DocEntry {
        title: bi("Channels Reference", "渠道参考"),
        path: "docs/channels-reference.md",
        category: DocCategory::Channels,
        summary: bi(
            "Unified channel setup, routing, and troubleshooting.",
            "统一渠道配置、路由与排障指南。",
        ),
        level: DocLevel::Core,
        featured: true,
        keywords: &["channels", "routing", "渠道", "路由"],
    },
    DocEntry {
        title: bi("Mattermost Setup", "Mattermost 配置"),
        path: "docs/mattermost-setup.md",
        category: DocCategory::Channels,
        summary: bi(
            "Mattermost integration runbook and expected behavior.",
            "Mattermost 集成操作手册与预期行为。",
        ),
        level: DocLevel::Advanced,
        featured: false,
        keywords: &["mattermost", "integration", "集成"],
    },
    DocEntry {
        title: bi("Nextcloud Talk Setup", "Nextcloud Talk 配置"),
        path: "docs/nextcloud-talk-setup.md",
        category: DocCategory::Channels,
        summary: bi(
            "Native Nextcloud Talk webhook and bot setup.",
            "原生 Nextcloud Talk webhook 与机器人配置。",
        ),
        level: DocLevel::Advanced,
        featured: false,
        keywords: &["nextcloud", "talk", "webhook"],
    },
    DocEntry {
        title: bi("Operations Hub", "运维中心"),
        path: "docs/operations/README.md",
        category: DocCategory::Operations,
        summary: bi(
            "Operational runbooks and recovery procedures.",
            "运维手册与故障恢复流程。",
        ),
        level: DocLevel::Core,
        featured: false,
        keywords: &["operations", "runbook", "运维", "恢复"],
    },
    DocEntry {
        title: bi("Connectivity Probes Runbook", "连通性探针手册"),
        path: "docs/operations/connectivity-probes-runbook.md",
        category: DocCategory::Operations,
        summary: bi(
            "Probe strategy, diagnostics, and alerting actions.",
            "探针策略、诊断流程与告警动作。",
        ),
        level: DocLevel::Advanced,
        featured: false,
        keywords: &["probe", "diagnostics", "告警", "探针"],
    },
    DocEntry {
        title: bi("Security Overview", "安全总览"),
        path: "docs/security/README.md",
        category: DocCategory::Security,
        summary: bi(
            "Security policy, process, and advisory handling.",
            "安全策略、流程与公告处理规范。",
        ),
        level: DocLevel::Core,
        featured: false,
        keywords: &["security", "policy", "安全"],
    },
    DocEntry {
        title: bi("Sandboxing", "沙箱机制"),
        path: "docs/sandboxing.md",
        category: DocCategory::Security,
        summary: bi(
            "Isolation modes, boundaries, and tradeoffs.",
            "隔离模式、边界与权衡。",
        ),
        level: DocLevel::Advanced,
        featured: false,
        keywords: &["sandbox", "isolation", "沙箱", "隔离"],
    },
    DocEntry {
        title: bi("Agnostic Security", "跨提供方安全"),
        path: "docs/agnostic-security.md",
        category: DocCategory::Security,
        summary: bi(
            "Cross-provider security posture and design rationale.",
            "跨模型提供方的安全姿态与设计依据。",
        ),
        level: DocLevel::Advanced,
        featured: false,
        keywords: &["agnostic", "cross-provider", "跨提供方"],
    },
    DocEntry {
        title: bi("Reference Index", "参考索引"),
        path: "docs/reference/README.md",
        category: DocCategory::Reference,
        summary: bi(
            "Reference material index for deeper lookup.",
            "用于深入查阅的参考资料索引。",
        ),
        level: DocLevel::Core,
        featured: false,
        keywords: &["reference", "index", "索引"],
    },
    DocEntry {
        title: bi("Docs Inventory", "文档清单"),
        path: "docs/docs-inventory.md",
        category: DocCategory::Reference,
        summary: bi(
            "Inventory and ownership view of documentation assets.",
            "文档资产与归属的清单视图。",
        ),
        level: DocLevel::Advanced,
        featured: false,
        keywords: &["inventory", "ownership", "文档清单"],
    },
    DocEntry {
        title: bi("Resource Limits", "资源限制"),
        path: "docs/resource-limits.md",
        category: DocCategory::Reference,
        summary: bi(
            "Runtime and deployment resource limit guidance.",
            "运行时与部署资源限制建议。",
        ),
        level: DocLevel::Advanced,
        featured: false,
        keywords: &["resource", "limits", "资源"],
    },
    DocEntry {
        title: bi("Repository README", "仓库 README"),
        path: "README.md",
        category: DocCategory::Reference,
        summary: bi(
            "Project overview, features, and quick commands.",
            "项目概览、能力说明与快速命令。",
        ),
        level: DocLevel::Core,
        featured: true,
        keywords: &["readme", "project", "仓库", "项目"],
    },
];
