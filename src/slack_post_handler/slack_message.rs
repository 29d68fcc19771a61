use std::fmt;

use regex::Regex;
use serde_derive::Deserialize;

#[derive(Deserialize, Clone, Debug)]
pub struct SlackMessage {
    #[serde(default)]
    pub text: String,
    pub thread_ts: Option<String>,

    #[serde(rename = "type")]
    pub type_name: String,
    pub subtype: Option<String>,
    // bot_messageなどはuserが無い
    pub user: Option<String>,
    pub channel: Option<String>,
    pub ts: String,
}

impl SlackMessage {
    // スレッド内のメッセージかどうか
    pub fn is_in_thread(&self) -> bool {
        self.thread_ts.is_some()
    }

    // メッセージの送信者が指定したユーザーかどうか
    pub fn is_from(&self, user_id: &str) -> bool {
        self.user.as_deref() == Some(user_id)
    }

    // 先頭のメンション文字列を削除したメッセージ本文
    // 末尾の空白は "!wiki " の判定に使うので残す
    pub fn pure_text(&self) -> String {
        // メンション文字列
        let re = Regex::new(r"^\s*<@[^>]+>\s*").expect("valid mention regex");
        re.replace(&self.text, "").trim_start().to_string()
    }

    // 返信のthread_tsを決定する
    pub fn new_message_thread_ts(&self) -> Option<String> {
        // スレッド内の場合はスレッドに返信し、スレッド外の場合はチャンネルにそのまま返信する
        self.thread_ts.clone()
    }

    pub fn reply_required(&self, bot_id: &str) -> bool {
        // typeがメッセージで、subtype無し、Bot自身のメッセージでない場合、処理を続行する
        let is_message_type = self.type_name == "message";
        let has_no_subtype = self.subtype.is_none();
        let is_not_from_bot = !self.is_from(bot_id);

        is_message_type && has_no_subtype && is_not_from_bot
    }
}

impl fmt::Display for SlackMessage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "SlackMessage {{ ts: {}, channel: {:?}, user: {:?}, text: {:?} }}",
            self.ts, self.channel, self.user, self.text
        )
    }
}
