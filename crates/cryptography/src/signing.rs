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

//! HMAC signing over canonical request strings.

use aws_lc_rs::hmac;
use strum::{AsRefStr, Display, EnumString};

/// The digest used as the underlying hash function of an HMAC signature.
#[derive(Clone, Copy, Debug, Display, AsRefStr, EnumString, PartialEq, Eq, Hash)]
#[strum(ascii_case_insensitive, serialize_all = "UPPERCASE")]
pub enum DigestAlgorithm {
    Sha256,
    Sha384,
    Sha512,
}

impl DigestAlgorithm {
    fn hmac_algorithm(self) -> hmac::Algorithm {
        match self {
            Self::Sha256 => hmac::HMAC_SHA256,
            Self::Sha384 => hmac::HMAC_SHA384,
            Self::Sha512 => hmac::HMAC_SHA512,
        }
    }
}

/// Errors raised while signing a request.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SigningError {
    /// The secret was empty.
    #[error("API secret is missing or empty")]
    MissingSecret,
}

/// Computes the HMAC of `message` keyed by `secret` and returns it as lowercase hex.
///
/// # Errors
///
/// Returns [`SigningError::MissingSecret`] if `secret` is empty.
pub fn sign(
    secret: &[u8],
    message: &[u8],
    algorithm: DigestAlgorithm,
) -> Result<String, SigningError> {
    if secret.is_empty() {
        return Err(SigningError::MissingSecret);
    }

    let key = hmac::Key::new(algorithm.hmac_algorithm(), secret);
    let tag = hmac::sign(&key, message);
    Ok(hex::encode(tag.as_ref()))
}

////////////////////////////////////////////////////////////////////////////////
// Tests
////////////////////////////////////////////////////////////////////////////////
#[cfg(test)]
mod tests {
    use std::str::FromStr;

    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case(
        "mysecretkey",
        "data-to-sign",
        DigestAlgorithm::Sha256,
        "19ed21a8b2a6b847d7d7aea059ab3134cd58f13c860cfbe89338c718685fe077"
    )]
    #[case(
        "anothersecretkey",
        "somedata",
        DigestAlgorithm::Sha256,
        "fb44dab41435775b44a96aa008af58cbf1fa1cea32f4605562c586b98f7326c5"
    )]
    #[case(
        "mysecretkey",
        "data-to-sign",
        DigestAlgorithm::Sha384,
        "532ea1338d6c01107baab89d17508eeb4e73fa33321ce774e22e07d0ea1af61012941deffa822e4a476e93eece4cfb77"
    )]
    #[case(
        "anothersecretkey",
        "somedata",
        DigestAlgorithm::Sha384,
        "4f6c548024bb2a05539ac963915a66d83a92e2953113ce8bd20057feaa151d07d571f8c6bb79711cc73e78085eb6e079"
    )]
    #[case(
        "mysecretkey",
        "data-to-sign",
        DigestAlgorithm::Sha512,
        "56cf60a7ff46670198acbb7acebcdc09ca2aafc095c8ffde559804293eb290a15371e3ba920f2e3ab5cb8d87a5c6e065ee1d0006ac9c83502fd7b007a1d6cd7c"
    )]
    fn test_sign_reference_vectors(
        #[case] secret: &str,
        #[case] data: &str,
        #[case] algorithm: DigestAlgorithm,
        #[case] expected: &str,
    ) {
        let result = sign(secret.as_bytes(), data.as_bytes(), algorithm).unwrap();
        assert_eq!(result, expected);
    }

    #[rstest]
    #[case(DigestAlgorithm::Sha256, 64)]
    #[case(DigestAlgorithm::Sha384, 96)]
    #[case(DigestAlgorithm::Sha512, 128)]
    fn test_sign_empty_message_hex_length(
        #[case] algorithm: DigestAlgorithm,
        #[case] expected_len: usize,
    ) {
        let result = sign(b"secret", b"", algorithm).unwrap();
        assert_eq!(result.len(), expected_len);
        assert!(result.chars().all(|c| c.is_ascii_hexdigit() && !c.is_ascii_uppercase()));
    }

    #[rstest]
    fn test_sign_empty_secret_fails() {
        let result = sign(b"", b"payload", DigestAlgorithm::Sha256);
        assert_eq!(result, Err(SigningError::MissingSecret));
    }

    #[rstest]
    #[case("sha384", DigestAlgorithm::Sha384)]
    #[case("SHA512", DigestAlgorithm::Sha512)]
    fn test_digest_from_str(#[case] input: &str, #[case] expected: DigestAlgorithm) {
        assert_eq!(DigestAlgorithm::from_str(input).unwrap(), expected);
        assert_eq!(expected.to_string(), input.to_uppercase());
    }
}
