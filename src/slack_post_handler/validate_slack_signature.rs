use anyhow::{anyhow, Context, Result};
use hmac::{Hmac, Mac};
use lambda_http::http::header::HeaderMap;
use sha2::Sha256;

use crate::constants::SLACK_REQUEST_MAX_AGE_SECS;

const SIGNATURE_HEADER: &str = "X-Slack-Signature";
const TIMESTAMP_HEADER: &str = "X-Slack-Request-Timestamp";

fn header_str<'a>(headers: &'a HeaderMap, name: &str) -> Result<&'a str> {
    headers
        .get(name)
        .with_context(|| format!("{} missing", name))?
        .to_str()
        .with_context(|| format!("{} parse error", name))
}

// https://api.slack.com/authentication/verifying-requests-from-slack
// nowはUNIX時間(秒)
pub fn validate_slack_signature(
    headers: &HeaderMap,
    body: &str,
    slack_signing_secret: &str,
    now: i64,
) -> Result<bool> {
    type HmacSha256 = Hmac<Sha256>;

    let signature = header_str(headers, SIGNATURE_HEADER)?;
    let timestamp = header_str(headers, TIMESTAMP_HEADER)?;

    // リプレイ攻撃対策として古いリクエストは拒否する
    let requested_at: i64 = timestamp
        .parse()
        .with_context(|| format!("{} is not a number", TIMESTAMP_HEADER))?;
    if (now - requested_at).abs() > SLACK_REQUEST_MAX_AGE_SECS {
        return Ok(false);
    }

    let Some(signature_hex) = signature.strip_prefix("v0=") else {
        return Ok(false);
    };
    let Ok(signature_bytes) = hex::decode(signature_hex) else {
        return Ok(false);
    };
    let basestring = format!("v0:{}:{}", timestamp, body);

    // Slack Signing SecretをkeyとしてbasestringをHMAC SHA256でhashにする
    let mut mac = HmacSha256::new_from_slice(slack_signing_secret.as_bytes())
        .map_err(|_| anyhow!("Invalid Slack Signing Secret"))?;
    mac.update(basestring.as_bytes());

    // 期待するsignatureと一致するか確認する
    Ok(mac.verify_slice(&signature_bytes).is_ok())
}

#[cfg(test)]
mod tests {
    use super::*;
    use lambda_http::http::header::HeaderValue;

    const SECRET: &str = "1234567890abcdef1234567890abcdef";
    const TIMESTAMP: i64 = 1234567890;

    fn headers(signature: &str) -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(SIGNATURE_HEADER, HeaderValue::from_str(signature).unwrap());
        headers.insert(TIMESTAMP_HEADER, HeaderValue::from_static("1234567890"));
        headers
    }

    // テスト用に正しいsignatureを作る
    fn sign(body: &str) -> String {
        let mut mac = Hmac::<Sha256>::new_from_slice(SECRET.as_bytes()).unwrap();
        mac.update(format!("v0:{}:{}", TIMESTAMP, body).as_bytes());
        format!("v0={}", hex::encode(mac.finalize().into_bytes()))
    }

    #[test]
    fn test_validate_slack_signature() {
        let headers = headers(&sign("test"));
        assert!(validate_slack_signature(&headers, "test", SECRET, TIMESTAMP + 10).unwrap());
        // bodyが改ざんされている
        assert!(!validate_slack_signature(&headers, "tested", SECRET, TIMESTAMP).unwrap());
    }

    #[test]
    fn test_rejects_old_request() {
        let headers = headers(&sign("test"));
        assert!(!validate_slack_signature(
            &headers,
            "test",
            SECRET,
            TIMESTAMP + SLACK_REQUEST_MAX_AGE_SECS + 1
        )
        .unwrap());
    }

    #[test]
    fn test_rejects_malformed_signature() {
        let headers = headers("v1=zz");
        assert!(!validate_slack_signature(&headers, "test", SECRET, TIMESTAMP).unwrap());
    }

    #[test]
    fn test_missing_header() {
        let headers = HeaderMap::new();
        assert!(validate_slack_signature(&headers, "test", SECRET, TIMESTAMP).is_err());
    }
}
