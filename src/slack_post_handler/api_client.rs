use anyhow::{anyhow, Context, Result};
use reqwest::{header, Client};
use serde_json::Value;

use crate::constants::SLACK_POST_URL;

#[derive(Debug, Clone)]
pub struct ApiClient {
    client: Client,
    slack_token: String,
    post_url: String,
}

impl ApiClient {
    pub fn new(slack_token: &str) -> Self {
        Self::with_post_url(slack_token, SLACK_POST_URL)
    }

    // 投稿先のURLを指定する (テスト用)
    pub fn with_post_url(slack_token: &str, post_url: &str) -> Self {
        ApiClient {
            client: Client::new(),
            slack_token: slack_token.to_string(),
            post_url: post_url.to_string(),
        }
    }

    // slack headers
    fn headers_for_slack(&self) -> Result<header::HeaderMap> {
        let mut headers = header::HeaderMap::new();
        headers.insert(
            header::CONTENT_TYPE,
            header::HeaderValue::from_static("application/json; charset=utf-8"),
        );
        headers.insert(
            header::AUTHORIZATION,
            format!("Bearer {}", self.slack_token)
                .parse()
                .context("invalid slack token")?,
        );
        Ok(headers)
    }

    // slackにメッセージを投稿する
    pub async fn post_message(
        &self,
        channel: &str,
        text: &str,
        thread_ts: Option<&str>,
    ) -> Result<()> {
        let json = serde_json::json!({
            "channel": channel,
            "text": text,
            "thread_ts": thread_ts,
        });
        let res = self
            .client
            .post(&self.post_url)
            .headers(self.headers_for_slack()?)
            .json(&json)
            .send()
            .await?;

        // エラーハンドリング
        if !res.status().is_success() {
            return Err(anyhow!("Slack post error: {}", res.status()));
        }

        let res_text = res.text().await?;
        let res_json: Value = serde_json::from_str(&res_text)?;
        if res_json["ok"] != true {
            return Err(anyhow!("Slack post error: {}", res_text));
        }
        Ok(())
    }
}
