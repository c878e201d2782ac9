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

//! The per-exchange request authentication contract.

use std::fmt::Debug;

use crate::{
    credential::Credential,
    error::RestError,
    request::{PreparedRequest, SignedRequest},
};

/// Builds the authentication material for one outbound request.
///
/// Implementations compute an HMAC over an exchange-specific canonical string built from the
/// prepared request and `nonce`, and return the request together with the headers to send. A
/// signer may also extend the query string (for schemes that carry the signature there), in which
/// case the returned [`SignedRequest::request`] is what goes on the wire.
pub trait RequestSigner: Send + Sync + Debug {
    /// Signs `request` with `credential` using `nonce` (milliseconds since the UNIX epoch).
    ///
    /// # Errors
    ///
    /// Returns [`RestError::Configuration`] if the credential secret is empty, or
    /// [`RestError::Serialization`] if the request cannot be extended.
    fn sign(
        &self,
        credential: &Credential,
        request: PreparedRequest,
        nonce: u64,
    ) -> Result<SignedRequest, RestError>;
}
