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

//! Signed-request dispatch and cursor pagination shared by the Kestrel exchange clients.
//!
//! Every exchange adapter in the workspace is a thin layer over the pieces in this crate:
//!
//! - [`params::Params`]: an insertion-ordered parameter bag encoded once into a query string or
//!   JSON body.
//! - [`request`]: the request model, from [`request::RequestSpec`] to the exact wire form in
//!   [`request::PreparedRequest`] and its authenticated [`request::SignedRequest`].
//! - [`signer::RequestSigner`]: the per-exchange authentication scheme.
//! - [`dispatcher::HttpDispatcher`]: sends one request and classifies the outcome.
//! - [`paginator`]: walks cursor-paginated endpoints into a single sequence.
//! - [`client::RestClient`]: the dispatcher plus an idempotency-aware retry policy.

#![warn(rustc::all)]
#![deny(unsafe_code)]
#![deny(nonstandard_style)]
#![deny(missing_debug_implementations)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod client;
pub mod config;
pub mod credential;
pub mod dispatcher;
pub mod error;
pub mod paginator;
pub mod params;
pub mod request;
pub mod response;
pub mod signer;

pub use crate::{
    client::RestClient,
    config::RestClientConfig,
    credential::Credential,
    dispatcher::HttpDispatcher,
    error::RestError,
    paginator::{Page, fetch_all_pages},
    params::Params,
    request::{EmptyBodyPolicy, PreparedRequest, RequestSpec, SignedRequest},
    response::{ApiBody, ApiResponse, BusinessError, GenericValidator, ResponseValidator},
    signer::RequestSigner,
};
pub use kestrel_network::http::Method;
