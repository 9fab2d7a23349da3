//! Guild state driven through commands and join events.

use partsbot::dispatch::domain::GuildId;
use partsbot::guild::domain::{GuildSettings, SettingFlag};
use rstest::rstest;

use crate::in_memory::helpers::{GUILD, OWNER, TestBot, bot};

async fn settings(bot: &TestBot) -> GuildSettings {
    bot.guilds
        .settings(&GuildId::new(GUILD))
        .await
        .expect("settings lookup should succeed")
}

#[rstest]
#[tokio::test]
async fn rejoining_keeps_existing_settings(bot: TestBot) {
    let guild = GuildId::new(GUILD);
    assert!(bot.guilds.ensure_registered(&guild).await.expect("join"));

    bot.send("7", "!settings autopcpp off").await;
    let rejoined = bot.guilds.ensure_registered(&guild).await.expect("rejoin");

    assert!(!rejoined);
    assert_eq!(
        settings(&bot).await,
        GuildSettings::default().without(SettingFlag::AutoPcpp)
    );
}

#[rstest]
#[tokio::test]
async fn toggles_accumulate(bot: TestBot) {
    bot.send("7", "!settings price off").await;
    bot.send("7", "!settings specs off").await;
    bot.send("7", "!settings PRICE on").await;

    assert_eq!(
        settings(&bot).await,
        GuildSettings::default().without(SettingFlag::Specs)
    );
}

#[rstest]
#[tokio::test]
async fn request_counter_tracks_lookups(bot: TestBot) {
    let guild = GuildId::new(GUILD);
    bot.guilds.ensure_registered(&guild).await.expect("join");

    for _ in 0..3 {
        bot.guilds
            .increment_requests(&guild)
            .await
            .expect("increment should succeed");
    }

    let record = bot
        .guilds
        .find(&guild)
        .await
        .expect("lookup should succeed")
        .expect("record should exist");
    assert_eq!(record.requests(), 3);
}

#[rstest]
#[tokio::test]
async fn clearing_guilds_resets_to_defaults(bot: TestBot) {
    bot.send("7", "!settings specs off").await;

    bot.send("7", "!cleardb guilds").await;
    assert_eq!(
        settings(&bot).await,
        GuildSettings::default().without(SettingFlag::Specs)
    );

    bot.send(OWNER, "!cleardb guilds").await;
    assert_eq!(settings(&bot).await, GuildSettings::default());
    let sent = bot.sent();
    assert!(sent.last().is_some_and(|reply| reply.contains("Deleted 1 document(s)")));
}
