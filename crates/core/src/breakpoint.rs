//! 响应式断点
//!
//! 固定四个断点，各自对应一个最小视口宽度，
//! 输出为 `@media screen and (min-width: ...)`。

use phf::phf_map;
use serde::{Deserialize, Serialize};
use std::fmt;

/// 断点名 → `min-width` 阈值
static BREAKPOINT_MAP: phf::Map<&'static str, &'static str> = phf_map! {
    "sm" => "640px",
    "md" => "768px",
    "lg" => "1024px",
    "xl" => "1280px",
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Breakpoint {
    Sm,
    Md,
    Lg,
    Xl,
}

impl Breakpoint {
    /// 全部断点，从窄到宽；输出顺序以此为准
    pub const ALL: [Breakpoint; 4] = [
        Breakpoint::Sm,
        Breakpoint::Md,
        Breakpoint::Lg,
        Breakpoint::Xl,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Breakpoint::Sm => "sm",
            Breakpoint::Md => "md",
            Breakpoint::Lg => "lg",
            Breakpoint::Xl => "xl",
        }
    }

    /// `"md"` → `"768px"`
    pub fn min_width(self) -> &'static str {
        // 每个断点在表中都有条目
        BREAKPOINT_MAP.get(self.name()).copied().unwrap_or("0px")
    }

    /// `"md"` → `"@media screen and (min-width: 768px)"`
    pub fn media_query(self) -> String {
        format!("@media screen and (min-width: {})", self.min_width())
    }
}

impl fmt::Display for Breakpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
