// --- File: crates/scheduler_tables/src/sigv4.rs ---
//! AWS Signature Version 4 for single-shot JSON POST requests.
//!
//! Only what the table store protocol needs: no query string, a fixed set of
//! signed headers and a fully buffered body.

use chrono::{DateTime, Utc};
use hmac::{Hmac, Mac};
use sha2::{Digest, Sha256};

use crate::error::TableStoreError;

type HmacSha256 = Hmac<Sha256>;

const ALGORITHM: &str = "AWS4-HMAC-SHA256";
const SIGNED_HEADERS: &str = "content-type;host;x-amz-date;x-amz-target";

/// Static signing inputs.
#[derive(Debug, Clone)]
pub struct SigningParams<'a> {
    pub access_key_id: &'a str,
    pub secret_access_key: &'a str,
    pub region: &'a str,
    pub service: &'a str,
}

/// Per-request inputs.
#[derive(Debug, Clone)]
pub struct SignableRequest<'a> {
    /// `host[:port]` exactly as sent in the `Host` header
    pub host: &'a str,
    pub path: &'a str,
    pub content_type: &'a str,
    pub target: &'a str,
    pub body: &'a [u8],
}

/// Headers to attach to the signed request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SignedHeaders {
    pub amz_date: String,
    pub authorization: String,
}

/// Signs a request at the given instant.
pub fn sign(
    params: &SigningParams<'_>,
    request: &SignableRequest<'_>,
    now: DateTime<Utc>,
) -> Result<SignedHeaders, TableStoreError> {
    let amz_date = now.format("%Y%m%dT%H%M%SZ").to_string();
    let date = now.format("%Y%m%d").to_string();
    let scope = format!("{}/{}/{}/aws4_request", date, params.region, params.service);

    let canonical_request = format!(
        "POST\n{path}\n\ncontent-type:{ct}\nhost:{host}\nx-amz-date:{amz_date}\nx-amz-target:{target}\n\n{signed}\n{payload}",
        path = request.path,
        ct = request.content_type,
        host = request.host,
        amz_date = amz_date,
        target = request.target,
        signed = SIGNED_HEADERS,
        payload = hex::encode(Sha256::digest(request.body)),
    );

    let string_to_sign = format!(
        "{}\n{}\n{}\n{}",
        ALGORITHM,
        amz_date,
        scope,
        hex::encode(Sha256::digest(canonical_request.as_bytes()))
    );

    let key = signing_key(params.secret_access_key, &date, params.region, params.service)?;
    let signature = hex::encode(hmac(&key, string_to_sign.as_bytes())?);

    Ok(SignedHeaders {
        authorization: format!(
            "{} Credential={}/{}, SignedHeaders={}, Signature={}",
            ALGORITHM, params.access_key_id, scope, SIGNED_HEADERS, signature
        ),
        amz_date,
    })
}

/// Derives the per-day signing key.
pub fn signing_key(
    secret_access_key: &str,
    date: &str,
    region: &str,
    service: &str,
) -> Result<Vec<u8>, TableStoreError> {
    let k_date = hmac(format!("AWS4{}", secret_access_key).as_bytes(), date.as_bytes())?;
    let k_region = hmac(&k_date, region.as_bytes())?;
    let k_service = hmac(&k_region, service.as_bytes())?;
    hmac(&k_service, b"aws4_request")
}

fn hmac(key: &[u8], data: &[u8]) -> Result<Vec<u8>, TableStoreError> {
    let mut mac = HmacSha256::new_from_slice(key)
        .map_err(|e| TableStoreError::SigningError(e.to_string()))?;
    mac.update(data);
    Ok(mac.finalize().into_bytes().to_vec())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn params() -> SigningParams<'static> {
        SigningParams {
            access_key_id: "dummy",
            secret_access_key: "dummy",
            region: "us-east-1",
            service: "dynamodb",
        }
    }

    fn request(body: &[u8]) -> SignableRequest<'_> {
        SignableRequest {
            host: "localhost:8000",
            path: "/",
            content_type: "application/x-amz-json-1.0",
            target: "DynamoDB_20120810.Scan",
            body,
        }
    }

    #[test]
    fn test_signing_key_matches_published_example() {
        let key = signing_key(
            "wJalrXUtnFEMI/K7MDENG+bPxRfiCYEXAMPLEKEY",
            "20120215",
            "us-east-1",
            "iam",
        )
        .unwrap();

        assert_eq!(
            hex::encode(key),
            "f4780e2d9f65fa895f9c67b32ce1baf0b0d8a43505a000a1a9e090d414db404d"
        );
    }

    #[test]
    fn test_authorization_header_layout() {
        let now = Utc.with_ymd_and_hms(2026, 10, 17, 9, 30, 0).unwrap();
        let signed = sign(&params(), &request(b"{}"), now).unwrap();

        assert_eq!(signed.amz_date, "20261017T093000Z");
        let prefix = "AWS4-HMAC-SHA256 Credential=dummy/20261017/us-east-1/dynamodb/aws4_request, \
                      SignedHeaders=content-type;host;x-amz-date;x-amz-target, Signature=";
        assert!(signed.authorization.starts_with(prefix));
        let signature = &signed.authorization[prefix.len()..];
        assert_eq!(signature.len(), 64);
        assert!(signature.chars().all(|c| c.is_ascii_hexdigit()));
    }

    #[test]
    fn test_signature_depends_on_body() {
        let now = Utc.with_ymd_and_hms(2026, 10, 17, 9, 30, 0).unwrap();
        let a = sign(&params(), &request(br#"{"TableName":"venues"}"#), now).unwrap();
        let b = sign(&params(), &request(br#"{"TableName":"users"}"#), now).unwrap();
        let again = sign(&params(), &request(br#"{"TableName":"venues"}"#), now).unwrap();

        assert_ne!(a.authorization, b.authorization);
        assert_eq!(a, again);
    }
}
