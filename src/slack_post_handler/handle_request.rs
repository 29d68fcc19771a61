use anyhow::{anyhow, Context, Result};
use aws_config::{BehaviorVersion, Region};
use aws_sdk_ssm::Client;
use lambda_http::{Body, Request};
use serde_derive::Deserialize;
use std::time::{Duration, SystemTime, UNIX_EPOCH};
use tracing::{error, info, warn};

use crate::constants::DEFAULT_SPARQL_ENDPOINT;
use crate::dbpedia::fetch_abstract::{AbstractFetcher, BasicAuth};
use crate::dbpedia::summary::SummaryLimits;
use crate::slack_post_handler::api_client::ApiClient;
use crate::slack_post_handler::command::WikiCommand;
use crate::slack_post_handler::slack_message::SlackMessage;
use crate::slack_post_handler::validate_slack_signature::validate_slack_signature;

// 環境変数
#[derive(Deserialize, Debug)]
struct Env {
    parameter_store_name: String,
    #[serde(default = "default_aws_region")]
    aws_region: String,
    #[serde(default = "default_sparql_endpoint")]
    sparql_endpoint: String,
    #[serde(default = "default_abstract_lang")]
    abstract_lang: String,
    #[serde(default = "default_timeout_ms")]
    timeout_ms: u64,
    #[serde(default = "default_max_chars")]
    max_chars: usize,
    #[serde(default = "default_max_sentences")]
    max_sentences: usize,
    #[serde(default = "default_warning_chars")]
    warning_chars: usize,
}

fn default_aws_region() -> String {
    "ap-northeast-1".to_string()
}

fn default_sparql_endpoint() -> String {
    DEFAULT_SPARQL_ENDPOINT.to_string()
}

fn default_abstract_lang() -> String {
    "fr".to_string()
}

fn default_timeout_ms() -> u64 {
    5000
}

fn default_max_chars() -> usize {
    1000
}

fn default_max_sentences() -> usize {
    3
}

fn default_warning_chars() -> usize {
    300
}

impl Env {
    fn summary_limits(&self) -> SummaryLimits {
        SummaryLimits {
            max_chars: self.max_chars,
            max_sentences: self.max_sentences,
            warning_chars: self.warning_chars,
        }
    }
}

// ParameterStoreに保存している秘密情報
#[derive(Deserialize)]
struct Parameters {
    bot_member_id: String,
    slack_auth_token: String,
    slack_signing_secret: String,
    sparql_user: Option<String>,
    sparql_password: Option<String>,
}

#[derive(Deserialize, Debug)]
struct SlackEvent {
    #[serde(rename = "type")]
    type_name: String,
    event: Option<SlackMessage>,
    challenge: Option<String>,
}

// 1リクエストの処理に必要なもの
struct BotContext {
    bot_member_id: String,
    api_client: ApiClient,
    fetcher: AbstractFetcher,
}

impl BotContext {
    fn new(env: &Env, parameters: &Parameters) -> Result<Self> {
        let auth = match (&parameters.sparql_user, &parameters.sparql_password) {
            (Some(user), Some(password)) => Some(BasicAuth {
                user: user.clone(),
                password: password.clone(),
            }),
            _ => None,
        };
        let fetcher = AbstractFetcher::new(
            &env.sparql_endpoint,
            &env.abstract_lang,
            Duration::from_millis(env.timeout_ms),
            auth,
            env.summary_limits(),
        )?;
        Ok(BotContext {
            bot_member_id: parameters.bot_member_id.clone(),
            api_client: ApiClient::new(&parameters.slack_auth_token),
            fetcher,
        })
    }
}

// Slackイベントに応じて処理
async fn handle_slack_event(slack_event: SlackEvent, context: &BotContext) -> Result<String> {
    match slack_event.type_name.as_str() {
        // Slackの認証(初回のみ)
        "url_verification" => slack_event
            .challenge
            .ok_or_else(|| anyhow!("url_verification without challenge")),
        "event_callback" => {
            let Some(trigger_message) = slack_event.event else {
                warn!("event_callback without event");
                return Ok("OK".to_string());
            };
            // 反応不要のメッセージの場合は終了
            if !trigger_message.reply_required(&context.bot_member_id) {
                return Ok("OK".to_string());
            }
            // !wikiコマンド以外は無視する
            let Some(command) = WikiCommand::parse(&trigger_message.pure_text()) else {
                return Ok("OK".to_string());
            };

            let Some(channel) = trigger_message.channel.as_deref() else {
                warn!("channel is none. trigger_message: {}", trigger_message);
                return Ok("OK".to_string());
            };
            if trigger_message.is_in_thread() {
                info!("Reply in thread: {}", trigger_message);
            }
            let thread_ts = trigger_message.new_message_thread_ts();

            // DBpediaから取得した要約をSlackに送る
            let response_text = command.run(&context.fetcher).await;
            context
                .api_client
                .post_message(channel, &response_text, thread_ts.as_deref())
                .await?;
            Ok("OK".to_string())
        }
        _ => Ok("OK".to_string()),
    }
}

// ParameterStoreのパラメータを取得する
async fn get_parameters(env: &Env) -> Result<Parameters> {
    let shared_config = aws_config::defaults(BehaviorVersion::v2023_11_09())
        .region(Region::new(env.aws_region.clone()))
        .load()
        .await;
    let client = Client::new(&shared_config);

    let resp = client
        .get_parameter()
        .with_decryption(true)
        .name(&env.parameter_store_name)
        .send()
        .await
        .context("cannot get parameter")?;

    let value = resp
        .parameter()
        .and_then(|p| p.value())
        .ok_or_else(|| anyhow!("parameter {} has no value", env.parameter_store_name))?;
    let parameters: Parameters = serde_json::from_str(value).context("cannot parse parameter")?;

    Ok(parameters)
}

fn unix_now() -> Result<i64> {
    Ok(SystemTime::now().duration_since(UNIX_EPOCH)?.as_secs() as i64)
}

pub async fn handle_request(event: Request) -> Result<String> {
    let body_str = match event.body() {
        Body::Text(s) => s.as_str(),
        Body::Binary(b) => std::str::from_utf8(b).unwrap_or(""),
        Body::Empty => "",
    };

    let env = envy::from_env::<Env>().context("cannot read environment variables")?;
    let parameters = get_parameters(&env).await?;

    // signatureの検証
    if !validate_slack_signature(
        event.headers(),
        body_str,
        &parameters.slack_signing_secret,
        unix_now()?,
    )? {
        error!("invalid slack signature");
        return Ok("NG".to_string());
    }
    // retryの場合は、OKを返して処理を終了する
    if event.headers().get("x-slack-retry-num").is_some() {
        return Ok("OK".to_string());
    }
    let slack_event: SlackEvent = match serde_json::from_str(body_str) {
        Ok(j) => j,
        Err(err) => {
            warn!("cannot parse slack event: {}", err);
            return Ok("NG".to_string());
        }
    };

    let context = BotContext::new(&env, &parameters)?;
    handle_slack_event(slack_event, &context).await
}
