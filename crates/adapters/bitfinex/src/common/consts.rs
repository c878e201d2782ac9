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


//! Core constants shared across the Bitfinex adapter components.

pub const BITFINEX: &str = "BITFINEX";

pub const BITFINEX_PUBLIC_HTTP_URL: &str = "https://api-pub.bitfinex.com";
pub const BITFINEX_PRIVATE_HTTP_URL: &str = "https://api.bitfinex.com";

pub const BITFINEX_API_KEY_VAR: &str = "BITFINEX_API_KEY";
pub const BITFINEX_API_SECRET_VAR: &str = "BITFINEX_API_SECRET";

pub const BITFINEX_HEADER_NONCE: &str = "bfx-nonce";
pub const BITFINEX_HEADER_API_KEY: &str = "bfx-apikey";
pub const BITFINEX_HEADER_SIGNATURE: &str = "bfx-signature";

/// Prefix prepended to the request path in the signed payload.
pub const BITFINEX_SIGNATURE_PREFIX: &str = "/api";

/// Page size used by the history walkers when the caller does not set `limit`.
pub const BITFINEX_HISTORY_PAGE_LIMIT: u64 = 2_500;

/// Position of `MTS_CREATE` in an order row.
pub const BITFINEX_ORDER_MTS_INDEX: usize = 4;
/// Position of `MTS_CREATE` in a trade row.
pub const BITFINEX_TRADE_MTS_INDEX: usize = 2;
