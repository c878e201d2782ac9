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


//! Binance query-string signing and response validation.

use std::collections::HashMap;

use kestrel_cryptography::DigestAlgorithm;
use kestrel_rest::{
    BusinessError, Credential, PreparedRequest, RequestSigner, ResponseValidator, RestError,
    SignedRequest, response::check_negative_code,
};
use serde_json::Value;

use super::consts::BINANCE_HEADER_API_KEY;

/// Signs requests by appending `recvWindow` (when configured) and `timestamp` to the query, then
/// an HMAC-SHA256 `signature` over the query followed by any body.
#[derive(Clone, Copy, Debug, Default)]
pub struct BinanceSigner {
    recv_window_ms: Option<u64>,
}

impl BinanceSigner {
    /// Creates a new [`BinanceSigner`].
    #[must_use]
    pub const fn new(recv_window_ms: Option<u64>) -> Self {
        Self { recv_window_ms }
    }

    #[must_use]
    pub const fn recv_window_ms(&self) -> Option<u64> {
        self.recv_window_ms
    }
}

impl RequestSigner for BinanceSigner {
    fn sign(
        &self,
        credential: &Credential,
        mut request: PreparedRequest,
        nonce: u64,
    ) -> Result<SignedRequest, RestError> {
        if let Some(recv_window) = self.recv_window_ms {
            request.append_query("recvWindow", &recv_window.to_string())?;
        }
        request.append_query("timestamp", &nonce.to_string())?;

        let payload = format!("{}{}", request.query, request.body_str());
        let signature = credential.sign(&payload, DigestAlgorithm::Sha256)?;
        request.append_query("signature", &signature)?;

        let headers = HashMap::from([(
            BINANCE_HEADER_API_KEY.to_string(),
            credential.api_key().to_string(),
        )]);

        Ok(SignedRequest {
            request,
            timestamp: nonce,
            signature: Some(signature),
            headers,
        })
    }
}

/// Reports `{"code": <negative>, "msg": ...}` bodies as business failures.
#[derive(Clone, Copy, Debug, Default)]
pub struct BinanceValidator;

impl ResponseValidator for BinanceValidator {
    fn check(&self, body: &Value) -> Option<BusinessError> {
        check_negative_code(body)
    }
}

////////////////////////////////////////////////////////////////////////////////
// Tests
////////////////////////////////////////////////////////////////////////////////

#[cfg(test)]
mod tests {
    use kestrel_rest::{Params, RequestSpec, request::ParamLocation};
    use rstest::rstest;
    use serde_json::json;

    use super::*;

    // Published Binance signature examples
    const TEST_SECRET: &str = "NhqPtmdSJYdKjVHjA7PZj4Mge3R5YNiP1e3UZjInClVN65XAbvqqM6A7H5fATj0j";

    fn credential() -> Credential {
        Credential::new("test_key", TEST_SECRET)
    }

    #[rstest]
    fn test_sign_timestamp_only() {
        let request = RequestSpec::get("/api/v3/account", Params::new())
            .prepare()
            .unwrap();

        let signed = BinanceSigner::default()
            .sign(&credential(), request, 1_578_963_600_000)
            .unwrap();

        assert_eq!(
            signed.request.query,
            "timestamp=1578963600000&signature=d84e6641b1e328e7b418fff030caed655c266299c9355e36ce801ed14631eed4"
        );
        assert_eq!(signed.headers[BINANCE_HEADER_API_KEY], "test_key");
    }

    #[rstest]
    fn test_sign_order_with_recv_window() {
        let params = Params::new()
            .with("symbol", "LTCBTC")
            .with("side", "BUY")
            .with("type", "LIMIT")
            .with("timeInForce", "GTC")
            .with("quantity", "1")
            .with("price", "0.1");
        let request = RequestSpec::post("/api/v3/order", params)
            .with_param_location(ParamLocation::Query)
            .prepare()
            .unwrap();
        assert_eq!(request.body, None);

        let signed = BinanceSigner::new(Some(5000))
            .sign(&credential(), request, 1_499_827_319_559)
            .unwrap();

        assert_eq!(
            signed.signature.as_deref(),
            Some("c8db56825ae71d6d79447849e617115f4a920fa2acdcab2b053c4b2838bd6b71")
        );
        assert!(signed.request.query.ends_with(
            "&recvWindow=5000&timestamp=1499827319559&signature=c8db56825ae71d6d79447849e617115f4a920fa2acdcab2b053c4b2838bd6b71"
        ));
    }

    #[rstest]
    #[case(json!({"code": -1121, "msg": "Invalid symbol."}), Some((Some(-1121), "Invalid symbol.")))]
    #[case(json!({"code": 200, "msg": "success"}), None)]
    #[case(json!([[1499040000000_i64, "0.01634790"]]), None)]
    fn test_validator(#[case] body: Value, #[case] expected: Option<(Option<i64>, &str)>) {
        let error = BinanceValidator.check(&body);
        assert_eq!(
            error.as_ref().map(|e| (e.code, e.message.as_str())),
            expected
        );
    }
}
