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


//! Binance venue constants.

/// Binance spot and margin HTTP API base URL.
pub const BINANCE_SPOT_HTTP_URL: &str = "https://api.binance.com";

/// Binance spot testnet HTTP API base URL.
pub const BINANCE_SPOT_TESTNET_HTTP_URL: &str = "https://testnet.binance.vision";

pub const BINANCE_API_KEY_VAR: &str = "BINANCE_API_KEY";
pub const BINANCE_API_SECRET_VAR: &str = "BINANCE_API_SECRET";

pub const BINANCE_HEADER_API_KEY: &str = "X-MBX-APIKEY";

/// Server-side default when `limit` is omitted from a klines request.
pub const BINANCE_KLINES_DEFAULT_LIMIT: u32 = 500;

/// Largest page the klines endpoint returns.
pub const BINANCE_KLINES_MAX_LIMIT: u32 = 1000;
