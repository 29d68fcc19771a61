use tracing::info;

use crate::constants::WIKI_COMMAND;
use crate::dbpedia::fetch_abstract::AbstractFetcher;

// Slackのメッセージから解釈したコマンド
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WikiCommand {
    // "!wiki <検索語>"
    Lookup(String),
    // "!wiki" のみ
    Random,
}

impl WikiCommand {
    // メンション文字列を削除済みの本文からコマンドを解釈する
    pub fn parse(text: &str) -> Option<Self> {
        let rest = text.strip_prefix(WIKI_COMMAND)?;
        if rest.is_empty() {
            return Some(WikiCommand::Random);
        }
        // "!wikipedia" などは別のコマンド
        if !rest.starts_with(char::is_whitespace) {
            return None;
        }
        // "!wiki " のように空白だけ続く場合は空の検索語になる
        Some(WikiCommand::Lookup(rest.trim().to_string()))
    }

    // コマンドを実行してSlackに返信する文字列を返す
    pub async fn run(&self, fetcher: &AbstractFetcher) -> String {
        let result = match self {
            WikiCommand::Lookup(name) => {
                info!("Request: {}", name);
                fetcher.lookup(name).await
            }
            WikiCommand::Random => {
                info!("Request a random page");
                fetcher.fetch_random_abstract().await
            }
        };

        let response = match result {
            Ok(text) => text,
            Err(err) => {
                info!("Lookup failed: {}", err);
                err.reply_message().to_string()
            }
        };
        info!("Response: {}", response);
        response
    }
}
