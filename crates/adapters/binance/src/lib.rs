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


//! Kestrel client for the [Binance](https://www.binance.com) spot and margin REST API.
//!
//! Signed endpoints carry their parameters in the query string, followed by `timestamp` and an
//! HMAC-SHA256 `signature` over everything before it. The API key travels in `X-MBX-APIKEY`.
//!
//! Kline history longer than one page can be fetched with
//! [`http::client::BinanceHttpClient::http_get_klines_all`], and rows can be turned into
//! named fields with UTC dates through [`http::parse`].

#![warn(rustc::all)]
#![deny(unsafe_code)]
#![deny(nonstandard_style)]
#![deny(missing_debug_implementations)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod common;
pub mod config;
pub mod http;
