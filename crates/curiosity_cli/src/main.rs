//! CLI smoke probe.
//!
//! Opens the configured store file and prints a one-screen summary of its
//! state. Exit code is non-zero when the store cannot be read.

use curiosity_core::{
    core_version, init_logging, ping, FeedOrder, LocalSocialStore, SocialConfig, SqliteStore,
};
use std::process::ExitCode;

fn main() -> ExitCode {
    let config = SocialConfig::from_env();
    if let Some(log_dir) = config.log_dir.as_deref() {
        if let Err(err) = init_logging(&config.log_level, log_dir) {
            eprintln!("logging disabled: {err}");
        }
    }

    println!("curiosity_core ping={}", ping());
    println!("curiosity_core version={}", core_version());
    println!("store path={}", config.db_path.display());

    match summarize(&config) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("store summary failed: {err}");
            ExitCode::FAILURE
        }
    }
}

fn summarize(config: &SocialConfig) -> Result<(), Box<dyn std::error::Error>> {
    let store = LocalSocialStore::new(SqliteStore::open(&config.db_path)?);
    let accounts = store.list_accounts()?;
    let popular = store.feed(FeedOrder::Popular)?;

    println!("accounts={} posts={}", accounts.len(), popular.len());
    match store.current_account()? {
        Some(account) => println!("session account_id={}", account.account_id),
        None => println!("session none"),
    }
    for post in popular.iter().take(3) {
        println!(
            "top post_id={} likes={} author={}",
            post.post_id, post.likes, post.username
        );
    }
    Ok(())
}
