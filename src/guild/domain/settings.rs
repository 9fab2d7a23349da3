//! Per-guild feature toggles stored as a bit set.

use serde::{Deserialize, Serialize};
use std::fmt;

/// One toggleable guild feature.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum SettingFlag {
    /// Automatic part-list previews for pasted links.
    AutoPcpp,
    /// Price lines in part previews.
    Price,
    /// Specification lines in part previews.
    Specs,
}

impl SettingFlag {
    /// Every flag, in display order.
    pub const ALL: [Self; 3] = [Self::AutoPcpp, Self::Price, Self::Specs];

    /// The flag's bit in [`GuildSettings`].
    #[must_use]
    pub const fn bit(self) -> u32 {
        match self {
            Self::AutoPcpp => 1,
            Self::Price => 2,
            Self::Specs => 4,
        }
    }

    /// Name users type to address the flag.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::AutoPcpp => "autopcpp",
            Self::Price => "price",
            Self::Specs => "specs",
        }
    }

    /// Parses a flag name case-insensitively.
    #[must_use]
    pub fn parse(name: &str) -> Option<Self> {
        let folded = name.to_lowercase();
        Self::ALL.into_iter().find(|flag| flag.name() == folded)
    }
}

impl fmt::Display for SettingFlag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Bit set of enabled [`SettingFlag`]s.
///
/// New guilds start with every flag on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct GuildSettings(u32);

impl GuildSettings {
    /// Wraps raw stored bits. Unknown bits are kept untouched.
    #[must_use]
    pub const fn from_bits(bits: u32) -> Self {
        Self(bits)
    }

    /// Settings with every flag off.
    #[must_use]
    pub const fn empty() -> Self {
        Self(0)
    }

    /// Raw bits for persistence.
    #[must_use]
    pub const fn bits(self) -> u32 {
        self.0
    }

    /// Returns `true` when `flag` is on.
    #[must_use]
    pub const fn contains(self, flag: SettingFlag) -> bool {
        self.0 & flag.bit() != 0
    }

    /// Returns a copy with `flag` switched on.
    #[must_use]
    pub const fn with(self, flag: SettingFlag) -> Self {
        Self(self.0 | flag.bit())
    }

    /// Returns a copy with `flag` switched off.
    #[must_use]
    pub const fn without(self, flag: SettingFlag) -> Self {
        Self(self.0 & !flag.bit())
    }

    /// Returns a copy with `flag` set to `enabled`.
    #[must_use]
    pub const fn set(self, flag: SettingFlag, enabled: bool) -> Self {
        if enabled {
            self.with(flag)
        } else {
            self.without(flag)
        }
    }
}

impl Default for GuildSettings {
    fn default() -> Self {
        SettingFlag::ALL
            .into_iter()
            .fold(Self::empty(), Self::with)
    }
}
