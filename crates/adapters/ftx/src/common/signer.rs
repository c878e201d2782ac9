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


//! FTX request signing and response validation.

use std::collections::HashMap;

use kestrel_cryptography::DigestAlgorithm;
use kestrel_rest::{
    BusinessError, Credential, PreparedRequest, RequestSigner, ResponseValidator, RestError,
    SignedRequest, response::check_success_flag,
};
use serde_json::Value;

use super::consts::{FTX_HEADER_KEY, FTX_HEADER_SIGN, FTX_HEADER_SUBACCOUNT, FTX_HEADER_TS};

/// Signs requests with HMAC-SHA256 over `timestamp + METHOD + path_with_query + body`.
#[derive(Clone, Copy, Debug, Default)]
pub struct FtxSigner;

impl FtxSigner {
    /// Returns the string that is signed for `request` at `timestamp`.
    #[must_use]
    pub fn canonical_string(request: &PreparedRequest, timestamp: u64) -> String {
        format!(
            "{timestamp}{}{}{}",
            request.method.as_str(),
            request.path_with_query(),
            request.body_str()
        )
    }
}

impl RequestSigner for FtxSigner {
    fn sign(
        &self,
        credential: &Credential,
        request: PreparedRequest,
        nonce: u64,
    ) -> Result<SignedRequest, RestError> {
        let payload = Self::canonical_string(&request, nonce);
        let signature = credential.sign(&payload, DigestAlgorithm::Sha256)?;

        let mut headers = HashMap::from([
            (FTX_HEADER_KEY.to_string(), credential.api_key().to_string()),
            (FTX_HEADER_SIGN.to_string(), signature.clone()),
            (FTX_HEADER_TS.to_string(), nonce.to_string()),
        ]);
        if let Some(subaccount) = credential.subaccount() {
            headers.insert(
                FTX_HEADER_SUBACCOUNT.to_string(),
                urlencoding::encode(subaccount).into_owned(),
            );
        }

        Ok(SignedRequest {
            request,
            timestamp: nonce,
            signature: Some(signature),
            headers,
        })
    }
}

/// Reports `success: false` envelopes as business failures carrying `error`.
#[derive(Clone, Copy, Debug, Default)]
pub struct FtxValidator;

impl ResponseValidator for FtxValidator {
    fn check(&self, body: &Value) -> Option<BusinessError> {
        check_success_flag(body)
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

    const TIMESTAMP: u64 = 1_700_000_000_000;

    fn credential() -> Credential {
        Credential::new("ftx_key", "ftx_secret")
    }

    #[rstest]
    fn test_sign_get_without_params() {
        let request = RequestSpec::get("/api/wallet/balances", Params::new())
            .prepare()
            .unwrap();

        let signed = FtxSigner.sign(&credential(), request, TIMESTAMP).unwrap();

        assert_eq!(
            signed.headers[FTX_HEADER_SIGN],
            "3cd5112017868eac0b4530e791b23da277354b8801c8cf737d44427400c81184"
        );
        assert_eq!(signed.headers[FTX_HEADER_KEY], "ftx_key");
        assert_eq!(signed.headers[FTX_HEADER_TS], "1700000000000");
        assert!(!signed.headers.contains_key(FTX_HEADER_SUBACCOUNT));
    }

    #[rstest]
    fn test_sign_post_covers_body() {
        let request = RequestSpec::post(
            "/api/orders",
            Params::new()
                .with("market", "XRP/USD")
                .with("side", "buy")
                .with("price", 0.5)
                .with("size", 10.0),
        )
        .prepare()
        .unwrap();

        let signed = FtxSigner.sign(&credential(), request, TIMESTAMP).unwrap();

        assert_eq!(
            signed.signature.as_deref(),
            Some("227637f90d2db497263f13c57c0b5fbd9a9096df8e118e9e322a631b22fac3db")
        );
    }

    #[rstest]
    fn test_sign_delete_uses_method_name() {
        let request = RequestSpec::delete("/api/orders/123", Params::new())
            .prepare()
            .unwrap();

        assert_eq!(
            FtxSigner::canonical_string(&request, TIMESTAMP),
            "1700000000000DELETE/api/orders/123"
        );
        let signed = FtxSigner.sign(&credential(), request, TIMESTAMP).unwrap();
        assert_eq!(
            signed.headers[FTX_HEADER_SIGN],
            "197e3935fbcf0cae9dba655e14f727ec6f2621a87d37b9422a8d98988bca7c89"
        );
    }

    #[rstest]
    fn test_subaccount_header_is_percent_encoded() {
        let request = RequestSpec::get("/api/orders", Params::new())
            .prepare()
            .unwrap();
        let credential = credential().with_subaccount(Some("my sub".to_string()));

        let signed = FtxSigner.sign(&credential, request, TIMESTAMP).unwrap();

        assert_eq!(signed.headers[FTX_HEADER_SUBACCOUNT], "my%20sub");
    }

    #[rstest]
    #[case(json!({"success": true, "result": []}), None)]
    #[case(json!({"success": false, "error": "Not logged in"}), Some("Not logged in"))]
    fn test_validator(#[case] body: Value, #[case] expected: Option<&str>) {
        let error = FtxValidator.check(&body);
        assert_eq!(error.as_ref().map(|e| e.message.as_str()), expected);
    }
}
