// URLs
pub const SLACK_POST_URL: &str = "https://slack.com/api/chat.postMessage";
pub const DEFAULT_SPARQL_ENDPOINT: &str = "http://fr.dbpedia.org/sparql";
pub const SPARQL_RESULTS_JSON: &str = "application/sparql-results+json";

// コマンド
pub const WIKI_COMMAND: &str = "!wiki";

// エラー時にSlackに投稿するメッセージ
pub const SERVER_UNAVAILABLE_MESSAGE: &str = "Server unavailable :confused:";
pub const BAD_REQUEST_MESSAGE: &str = "Bad request :unamused:";
pub const NO_CONTENT_MESSAGE: &str = "No content.";

// 検索語の最大文字数
pub const MAX_QUERY_CHARS: usize = 34;

// ランダム取得時のOFFSETの上限 (全件数だと重すぎる)
pub const RANDOM_OFFSET_CEILING: u32 = 10_000;

// Slackのリクエストとして受け付ける時刻のずれ(秒)
pub const SLACK_REQUEST_MAX_AGE_SECS: i64 = 60 * 5;
