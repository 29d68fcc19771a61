mod constants;
mod dbpedia;
mod slack_post_handler;

use lambda_http::{run, service_fn, Body, Error, Request, Response};
use tracing::error;

use crate::slack_post_handler::handle_request::handle_request;

/// Slack Events APIから呼ばれるLambdaのエントリーポイント
/// `!wiki <検索語>` でDBpediaのabstractを、`!wiki` でランダムなページを返信する
async fn function_handler(event: Request) -> Result<Response<Body>, Error> {
    let message = match handle_request(event).await {
        Ok(message) => message,
        Err(err) => {
            error!("{:#}", err);
            "NG".to_string()
        }
    };

    // Return something that implements IntoResponse.
    // It will be serialized to the right response event automatically by the runtime
    let resp = Response::builder()
        .status(200)
        .header("content-type", "text/plain")
        .body(message.into())
        .map_err(Box::new)?;
    Ok(resp)
}

#[tokio::main]
async fn main() -> Result<(), Error> {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        // disable printing the name of the module in every log line.
        .with_target(false)
        // disabling time is handy because CloudWatch will add the ingestion time.
        .without_time()
        .init();

    run(service_fn(function_handler)).await
}
