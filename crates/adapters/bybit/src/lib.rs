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


//! Kestrel client for the [Bybit](https://www.bybit.com/) cryptocurrency exchange.
//!
//! The `kestrel-bybit` crate wraps the **Bybit v5 REST API** on top of the shared
//! [`kestrel_rest`] signed-request core:
//!
//! - [`common::signer::BybitSigner`] implements the `X-BAPI-*` HMAC-SHA256 scheme.
//! - [`common::signer::BybitValidator`] turns a non-zero `retCode` into a business error.
//! - [`http::client::BybitHttpClient`] exposes the market, trade, position, account, asset and
//!   spot margin endpoints, with `*_all` variants that walk `nextPageCursor` pagination.
//!
//! The official Bybit API reference can be found at <https://bybit-exchange.github.io/docs/v5/intro>.

#![warn(rustc::all)]
#![deny(unsafe_code)]
#![deny(nonstandard_style)]
#![deny(missing_debug_implementations)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod common;
pub mod config;
pub mod http;
