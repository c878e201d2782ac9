// -------------------------------------------------------------------------------------------------
//  Copyright (C) 2015-2025 Nautech Systems Pty Ltd. All rights reserved.
//  https://nautechsystems.io
//
//  Licensed under the GNU Lesser General Public License Version 3.0 (the "License");
//  You may not use this file except in compliance with the License.
//  You may obtain a copy of the License at https://www.gnu.org/licenses/lgpl-3.0.en.html
//
//  Unless required by applicable law or agreed to in writing, software
//  distributed under the License is distributed on an "AS IS" BASIS,
//  WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
//  See the License for the specific language governing permissions and
//  limitations under the License.
// -------------------------------------------------------------------------------------------------


//! Bybit v5 request signing and response validation.

use std::collections::HashMap;

use kestrel_cryptography::DigestAlgorithm;
use kestrel_rest::{
    BusinessError, Credential, PreparedRequest, RequestSigner, ResponseValidator, RestError,
    SignedRequest, response::check_ret_code,
};
use serde_json::Value;

use super::consts::{
    BYBIT_DEFAULT_RECV_WINDOW_MS, BYBIT_HEADER_API_KEY, BYBIT_HEADER_RECV_WINDOW,
    BYBIT_HEADER_SIGN, BYBIT_HEADER_TIMESTAMP,
};

/// Signs requests with HMAC-SHA256 over `timestamp + api_key + recv_window + payload`.
///
/// The payload is the JSON body when one is sent, otherwise the query string.
#[derive(Clone, Copy, Debug)]
pub struct BybitSigner {
    recv_window_ms: u64,
}

impl Default for BybitSigner {
    fn default() -> Self {
        Self::new(BYBIT_DEFAULT_RECV_WINDOW_MS)
    }
}

impl BybitSigner {
    /// Creates a new [`BybitSigner`] with the given receive window.
    #[must_use]
    pub const fn new(recv_window_ms: u64) -> Self {
        Self { recv_window_ms }
    }

    /// Returns the receive window in milliseconds.
    #[must_use]
    pub const fn recv_window_ms(&self) -> u64 {
        self.recv_window_ms
    }

    /// Returns the string that is signed for `request` at `timestamp`.
    #[must_use]
    pub fn canonical_string(
        &self,
        api_key: &str,
        request: &PreparedRequest,
        timestamp: u64,
    ) -> String {
        let payload = match &request.body {
            Some(body) => body.as_str(),
            None => request.query.as_str(),
        };
        format!("{timestamp}{api_key}{}{payload}", self.recv_window_ms)
    }
}

impl RequestSigner for BybitSigner {
    fn sign(
        &self,
        credential: &Credential,
        request: PreparedRequest,
        nonce: u64,
    ) -> Result<SignedRequest, RestError> {
        let api_key = credential.api_key().as_str();
        let payload = self.canonical_string(api_key, &request, nonce);
        let signature = credential.sign(&payload, DigestAlgorithm::Sha256)?;

        let headers = HashMap::from([
            (BYBIT_HEADER_API_KEY.to_string(), api_key.to_string()),
            (BYBIT_HEADER_TIMESTAMP.to_string(), nonce.to_string()),
            (BYBIT_HEADER_SIGN.to_string(), signature.clone()),
            (
                BYBIT_HEADER_RECV_WINDOW.to_string(),
                self.recv_window_ms.to_string(),
            ),
        ]);

        Ok(SignedRequest {
            request,
            timestamp: nonce,
            signature: Some(signature),
            headers,
        })
    }
}

/// Reports `retCode != 0` envelopes as business failures carrying `retMsg`.
#[derive(Clone, Copy, Debug, Default)]
pub struct BybitValidator;

impl ResponseValidator for BybitValidator {
    fn check(&self, body: &Value) -> Option<BusinessError> {
        check_ret_code(body)
    }
}

////////////////////////////////////////////////////////////////////////////////
// Tests
////////////////////////////////////////////////////////////////////////////////

#[cfg(test)]
mod tests {
    use kestrel_rest::{Params, RequestSpec};
    use rstest::rstest;
    use serde_json::json;

    use super::*;

    const API_KEY: &str = "test_api_key";
    const API_SECRET: &str = "test_secret";
    const TIMESTAMP: u64 = 1_700_000_000_000;

    fn credential() -> Credential {
        Credential::new(API_KEY, API_SECRET)
    }

    #[rstest]
    fn test_sign_get_covers_query_string() {
        let request = RequestSpec::get(
            "/v5/order/realtime",
            Params::new()
                .with("category", "linear")
                .with("symbol", "BTCUSDT"),
        )
        .prepare()
        .unwrap();

        let signed = BybitSigner::default()
            .sign(&credential(), request, TIMESTAMP)
            .unwrap();

        assert_eq!(
            signed.signature.as_deref(),
            Some("fd4f31228a46109dc6673062328693696df9a96c7ff04e6491a45e7f63a0fdd7")
        );
        assert_eq!(signed.headers[BYBIT_HEADER_API_KEY], API_KEY);
        assert_eq!(signed.headers[BYBIT_HEADER_TIMESTAMP], "1700000000000");
        assert_eq!(signed.headers[BYBIT_HEADER_RECV_WINDOW], "5000");
        assert_eq!(signed.request.query, "category=linear&symbol=BTCUSDT");
    }

    #[rstest]
    fn test_sign_post_covers_body() {
        let request = RequestSpec::post(
            "/v5/order/create",
            Params::new()
                .with("category", "linear")
                .with("symbol", "BTCUSDT")
                .with("side", "Buy"),
        )
        .prepare()
        .unwrap();

        assert_eq!(
            request.body.as_deref(),
            Some(r#"{"category":"linear","symbol":"BTCUSDT","side":"Buy"}"#)
        );

        let signed = BybitSigner::default()
            .sign(&credential(), request, TIMESTAMP)
            .unwrap();

        assert_eq!(
            signed.headers[BYBIT_HEADER_SIGN],
            "84bfd35697c02f46cf2b9540383ad3ce7f037843b61188501063d8f80a4a3630"
        );
    }

    #[rstest]
    fn test_recv_window_is_part_of_payload() {
        let request = RequestSpec::get("/v5/account/info", Params::new())
            .prepare()
            .unwrap();
        let payload = BybitSigner::new(10_000).canonical_string(API_KEY, &request, TIMESTAMP);
        assert_eq!(payload, "1700000000000test_api_key10000");
    }

    #[rstest]
    fn test_empty_secret_is_configuration_error() {
        let request = RequestSpec::get("/v5/account/info", Params::new())
            .prepare()
            .unwrap();
        let result = BybitSigner::default().sign(&Credential::new(API_KEY, ""), request, TIMESTAMP);
        assert!(matches!(result, Err(RestError::Configuration(_))));
    }

    #[rstest]
    #[case(json!({"retCode": 0, "retMsg": "OK", "result": {}}), None)]
    #[case(json!({"retCode": 10001, "retMsg": "params error"}), Some(10001))]
    #[case(json!({"result": []}), None)]
    fn test_validator(#[case] body: Value, #[case] expected_code: Option<i64>) {
        let error = BybitValidator.check(&body);
        assert_eq!(error.as_ref().and_then(|e| e.code), expected_code);
        if let Some(error) = error {
            assert_eq!(error.message, "params error");
        }
    }
}
