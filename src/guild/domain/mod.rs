//! Guild settings and records.

mod record;
mod settings;

pub use record::GuildRecord;
pub use settings::{GuildSettings, SettingFlag};
