use reqwest::{header, Client};
use std::time::Duration;
use tracing::{info, warn};

use super::error::WikiError;
use super::sanitize::{escape_query, has_letter, title_case};
use super::sparql_query::SparqlQuery;
use super::sparql_res_body::SparqlResBody;
use super::summary::{limit_text, SummaryLimits};
use crate::constants::SPARQL_RESULTS_JSON;

#[derive(Debug, Clone)]
pub struct BasicAuth {
    pub user: String,
    pub password: String,
}

// DBpediaのSPARQLエンドポイントからabstractを取得する
#[derive(Debug, Clone)]
pub struct AbstractFetcher {
    client: Client,
    endpoint: String,
    lang: String,
    auth: Option<BasicAuth>,
    limits: SummaryLimits,
}

impl AbstractFetcher {
    pub fn new(
        endpoint: &str,
        lang: &str,
        timeout: Duration,
        auth: Option<BasicAuth>,
        limits: SummaryLimits,
    ) -> Result<Self, WikiError> {
        let client = Client::builder().timeout(timeout).build()?;
        Ok(AbstractFetcher {
            client,
            endpoint: endpoint.to_string(),
            lang: lang.to_string(),
            auth,
            limits,
        })
    }

    // !wiki <name>: 完全一致 -> 単語の先頭を大文字にして完全一致 -> 部分一致 の順に探す
    pub async fn lookup(&self, name: &str) -> Result<String, WikiError> {
        match self.fetch_abstract(name, false).await {
            Err(WikiError::NoContent) => {}
            result => return result,
        }

        info!("No content, trying Title Case");
        match self.fetch_abstract(&title_case(name), false).await {
            Err(WikiError::NoContent) => {}
            result => return result,
        }

        info!("No content, trying fault tolerance");
        self.fetch_abstract(name, true).await
    }

    pub async fn fetch_abstract(
        &self,
        query: &str,
        fault_tolerant: bool,
    ) -> Result<String, WikiError> {
        let query = escape_query(query);
        info!("Escaped query: {}", query);
        if !has_letter(&query) {
            return Err(WikiError::BadRequest);
        }

        let sparql = SparqlQuery::new(&query, &self.lang, fault_tolerant);
        let res = self.query(&sparql).await?;

        let text = res.first_value("abstract").ok_or(WikiError::NoContent)?;
        self.summarize(text)
    }

    // !wiki: ランダムなページの "ラベル : abstract" を返す
    pub async fn fetch_random_abstract(&self) -> Result<String, WikiError> {
        let sparql = SparqlQuery::random(&self.lang);
        if let SparqlQuery::Random { offset, .. } = &sparql {
            info!("Random number generated: {}", offset);
        }
        let res = self.query(&sparql).await?;

        match (res.first_value("label"), res.first_value("abstract")) {
            (Some(label), Some(text)) => self.summarize(&format!("{} : {}", label, text)),
            _ => Err(WikiError::NoContent),
        }
    }

    // 要約が空になった場合はSlackに投稿できないのでNoContent扱いにする
    fn summarize(&self, text: &str) -> Result<String, WikiError> {
        let summary = limit_text(text, &self.limits);
        if summary.is_empty() {
            return Err(WikiError::NoContent);
        }
        Ok(summary)
    }

    // SPARQLエンドポイントにクエリを投げる
    async fn query(&self, sparql: &SparqlQuery) -> Result<SparqlResBody, WikiError> {
        let query_string = sparql.to_query_string();
        let params = [
            ("query", query_string.as_str()),
            ("format", SPARQL_RESULTS_JSON),
        ];

        let mut req = self
            .client
            .get(&self.endpoint)
            .header(header::ACCEPT, SPARQL_RESULTS_JSON)
            .query(&params);
        if let Some(auth) = &self.auth {
            req = req.basic_auth(&auth.user, Some(&auth.password));
        }
        let res = req.send().await?;

        // エラーハンドリング
        if !res.status().is_success() {
            let status = res.status();
            let body = res.text().await.unwrap_or_default();
            warn!("Error from SPARQL endpoint: {} {}", status, body);
            return Err(WikiError::ServerUnavailable(format!("Error: {}", status)));
        }

        let body = res.text().await?;
        serde_json::from_str(&body).map_err(|err| {
            warn!("Cannot parse SPARQL response: {}", err);
            WikiError::ServerUnavailable(err.to_string())
        })
    }
}
