pub mod api_client;
pub mod command;
pub mod handle_request;
pub mod slack_message;
pub mod validate_slack_signature;
