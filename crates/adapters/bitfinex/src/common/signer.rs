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


//! Bitfinex v2 request signing and response validation.

use std::collections::HashMap;

use kestrel_cryptography::DigestAlgorithm;
use kestrel_rest::{
    BusinessError, Credential, PreparedRequest, RequestSigner, ResponseValidator, RestError,
    SignedRequest,
};
use serde_json::Value;

use super::consts::{
    BITFINEX_HEADER_API_KEY, BITFINEX_HEADER_NONCE, BITFINEX_HEADER_SIGNATURE,
    BITFINEX_SIGNATURE_PREFIX,
};

/// Signs requests with HMAC-SHA384 over `/api{path}{nonce}{body}`.
///
/// The nonce is sent in microseconds, derived from the millisecond clock value.
#[derive(Clone, Copy, Debug, Default)]
pub struct BitfinexSigner;

impl BitfinexSigner {
    /// Converts the millisecond clock value into the nonce sent on the wire.
    #[must_use]
    pub const fn wire_nonce(nonce_ms: u64) -> u64 {
        nonce_ms.saturating_mul(1_000)
    }

    /// Returns the string that is signed for `request` with the wire nonce.
    #[must_use]
    pub fn canonical_string(request: &PreparedRequest, wire_nonce: u64) -> String {
        format!(
            "{BITFINEX_SIGNATURE_PREFIX}{}{wire_nonce}{}",
            request.path_with_query(),
            request.body_str()
        )
    }
}

impl RequestSigner for BitfinexSigner {
    fn sign(
        &self,
        credential: &Credential,
        request: PreparedRequest,
        nonce: u64,
    ) -> Result<SignedRequest, RestError> {
        let wire_nonce = Self::wire_nonce(nonce);
        let payload = Self::canonical_string(&request, wire_nonce);
        let signature = credential.sign(&payload, DigestAlgorithm::Sha384)?;

        let headers = HashMap::from([
            (BITFINEX_HEADER_NONCE.to_string(), wire_nonce.to_string()),
            (
                BITFINEX_HEADER_API_KEY.to_string(),
                credential.api_key().to_string(),
            ),
            (BITFINEX_HEADER_SIGNATURE.to_string(), signature.clone()),
        ]);

        Ok(SignedRequest {
            request,
            timestamp: nonce,
            signature: Some(signature),
            headers,
        })
    }
}

/// Reports `["error", code, "message"]` bodies as business failures.
#[derive(Clone, Copy, Debug, Default)]
pub struct BitfinexValidator;

impl ResponseValidator for BitfinexValidator {
    fn check(&self, body: &Value) -> Option<BusinessError> {
        let row = body.as_array()?;
        if row.first().and_then(Value::as_str) != Some("error") {
            return None;
        }

        let code = row.get(1).and_then(Value::as_i64);
        let message = row
            .get(2)
            .and_then(Value::as_str)
            .unwrap_or("unknown error");
        Some(BusinessError::new(code, message))
    }
}

////////////////////////////////////////////////////////////////////////////////
// Tests
////////////////////////////////////////////////////////////////////////////////

#[cfg(test)]
mod tests {
    use kestrel_rest::{EmptyBodyPolicy, Params, RequestSpec};
    use rstest::rstest;
    use serde_json::json;

    use super::*;

    const NONCE_MS: u64 = 1_700_000_000_000;

    fn credential() -> Credential {
        Credential::new("bfx_key", "bfx_secret")
    }

    #[rstest]
    fn test_sign_wallets_with_empty_object_body() {
        let request = RequestSpec::post("/v2/auth/r/wallets", Params::new())
            .prepare()
            .unwrap();
        let signed = BitfinexSigner.sign(&credential(), request, NONCE_MS).unwrap();

        assert_eq!(signed.headers[BITFINEX_HEADER_NONCE], "1700000000000000");
        assert_eq!(signed.headers[BITFINEX_HEADER_API_KEY], "bfx_key");
        assert_eq!(
            signed.headers[BITFINEX_HEADER_SIGNATURE],
            "990a57bc013455b367ca34eeb411857729a098384b8a296ed63731d1b44aab134b68cbbf83292c04c292a81641af79b1"
        );
    }

    #[rstest]
    fn test_sign_active_orders_with_omitted_body() {
        let request = RequestSpec::post("/v2/auth/r/orders/tBTCUSD", Params::new())
            .with_empty_body(EmptyBodyPolicy::Omit)
            .prepare()
            .unwrap();
        assert_eq!(request.body, None);

        let signed = BitfinexSigner.sign(&credential(), request, NONCE_MS).unwrap();
        assert_eq!(
            signed.signature.as_deref(),
            Some(
                "e213c8fe3a7483c549d14728863885dfea3f08a96611c90ad9a346b7be77dd25b2615cd303057edb8c6f3815c4342f64"
            )
        );
    }

    #[rstest]
    #[case(json!(["error", 10020, "limit: invalid"]), Some((Some(10020), "limit: invalid")))]
    #[case(json!(["error"]), Some((None, "unknown error")))]
    #[case(json!([["exchange", "USD", 100.0, 0, 100.0, null, null]]), None)]
    #[case(json!([1, 2, 3]), None)]
    #[case(json!({"error": "ignored"}), None)]
    fn test_validator(#[case] body: Value, #[case] expected: Option<(Option<i64>, &str)>) {
        let error = BitfinexValidator.check(&body);
        assert_eq!(
            error.as_ref().map(|e| (e.code, e.message.as_str())),
            expected
        );
    }
}
