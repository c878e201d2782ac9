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


//! Kestrel client for the [Bitfinex](https://www.bitfinex.com/) cryptocurrency exchange.
//!
//! Public market data is served from `api-pub.bitfinex.com` and authenticated endpoints from
//! `api.bitfinex.com`, so [`http::client::BitfinexHttpClient`] holds one REST client per host.
//! Authenticated requests are signed with HMAC-SHA384 by [`common::signer::BitfinexSigner`].
//!
//! The official Bitfinex API reference can be found at <https://docs.bitfinex.com/docs/rest-general>.

#![warn(rustc::all)]
#![deny(unsafe_code)]
#![deny(nonstandard_style)]
#![deny(missing_debug_implementations)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod common;
pub mod config;
pub mod http;
