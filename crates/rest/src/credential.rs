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

//! API credential storage.

#![allow(unused_assignments)] // Fields are used in methods, false positive from nightly

use std::fmt::Debug;

use kestrel_core::env::get_or_env_var_opt;
use kestrel_cryptography::{DigestAlgorithm, sign};
use ustr::Ustr;
use zeroize::ZeroizeOnDrop;

use crate::error::RestError;

/// API credentials used to sign requests for one client instance.
///
/// The secret is wiped from memory on drop and never appears in `Debug` output.
#[derive(Clone, ZeroizeOnDrop)]
pub struct Credential {
    #[zeroize(skip)]
    api_key: Ustr,
    api_secret: Box<[u8]>,
    #[zeroize(skip)]
    subaccount: Option<String>,
}

impl Debug for Credential {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credential")
            .field("api_key", &self.api_key)
            .field("api_secret", &"<redacted>")
            .field("subaccount", &self.subaccount)
            .finish()
    }
}

impl Credential {
    /// Creates a new [`Credential`] instance from the API key and secret.
    #[must_use]
    pub fn new(api_key: impl Into<String>, api_secret: impl Into<String>) -> Self {
        let api_key = Ustr::from(api_key.into().as_str());
        let api_secret = api_secret.into().into_bytes().into_boxed_slice();

        Self {
            api_key,
            api_secret,
            subaccount: None,
        }
    }

    /// Returns this credential scoped to the given subaccount.
    #[must_use]
    pub fn with_subaccount(mut self, subaccount: Option<String>) -> Self {
        self.subaccount = subaccount.filter(|s| !s.is_empty());
        self
    }

    /// Resolves a credential from explicit values, falling back to environment variables.
    ///
    /// Returns `None` unless both the key and the secret are available.
    #[must_use]
    pub fn resolve(
        api_key: Option<String>,
        api_secret: Option<String>,
        api_key_var: &str,
        api_secret_var: &str,
    ) -> Option<Self> {
        let api_key = get_or_env_var_opt(api_key, api_key_var)?;
        let api_secret = get_or_env_var_opt(api_secret, api_secret_var)?;
        Some(Self::new(api_key, api_secret))
    }

    /// Returns the API key associated with this credential.
    #[must_use]
    pub fn api_key(&self) -> &Ustr {
        &self.api_key
    }

    /// Returns the subaccount, if any.
    #[must_use]
    pub fn subaccount(&self) -> Option<&str> {
        self.subaccount.as_deref()
    }

    /// Signs `message` with the API secret and returns the lowercase hex digest.
    ///
    /// # Errors
    ///
    /// Returns [`RestError::Configuration`] if the secret is empty.
    pub fn sign(&self, message: &str, algorithm: DigestAlgorithm) -> Result<String, RestError> {
        sign(&self.api_secret, message.as_bytes(), algorithm).map_err(RestError::from)
    }
}

////////////////////////////////////////////////////////////////////////////////
// Tests
////////////////////////////////////////////////////////////////////////////////

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    #[rstest]
    fn test_debug_redacts_secret() {
        let credential = Credential::new("my_key", "super_secret_value");
        let debug = format!("{credential:?}");

        assert!(debug.contains("my_key"));
        assert!(debug.contains("<redacted>"));
        assert!(!debug.contains("super_secret_value"));
    }

    #[rstest]
    fn test_sign_matches_primitive() {
        let credential = Credential::new("k", "mysecretkey");
        let signature = credential
            .sign("data-to-sign", DigestAlgorithm::Sha256)
            .unwrap();
        assert_eq!(
            signature,
            "19ed21a8b2a6b847d7d7aea059ab3134cd58f13c860cfbe89338c718685fe077"
        );
    }

    #[rstest]
    fn test_empty_secret_is_configuration_error() {
        let credential = Credential::new("k", "");
        let result = credential.sign("payload", DigestAlgorithm::Sha384);
        assert!(matches!(result, Err(RestError::Configuration(_))));
    }

    #[rstest]
    #[case(Some("trading".to_string()), Some("trading"))]
    #[case(Some(String::new()), None)]
    #[case(None, None)]
    fn test_subaccount(#[case] input: Option<String>, #[case] expected: Option<&str>) {
        let credential = Credential::new("k", "s").with_subaccount(input);
        assert_eq!(credential.subaccount(), expected);
    }

    #[rstest]
    fn test_resolve_requires_both_parts() {
        let resolved = Credential::resolve(
            Some("key".to_string()),
            None,
            "KESTREL_TEST_UNSET_KEY",
            "KESTREL_TEST_UNSET_SECRET",
        );
        assert!(resolved.is_none());

        let resolved = Credential::resolve(
            Some("key".to_string()),
            Some("secret".to_string()),
            "KESTREL_TEST_UNSET_KEY",
            "KESTREL_TEST_UNSET_SECRET",
        )
        .unwrap();
        assert_eq!(resolved.api_key().as_str(), "key");
    }
}
