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


//! Core constants shared across the Bybit adapter components.

pub const BYBIT: &str = "BYBIT";

pub const BYBIT_HTTP_URL: &str = "https://api.bybit.com";
pub const BYBIT_HTTP_TESTNET_URL: &str = "https://api-testnet.bybit.com";
pub const BYBIT_HTTP_DEMO_URL: &str = "https://api-demo.bybit.com";

/// Default receive window sent with authenticated requests.
pub const BYBIT_DEFAULT_RECV_WINDOW_MS: u64 = 5_000;

pub const BYBIT_API_KEY_VAR: &str = "BYBIT_API_KEY";
pub const BYBIT_API_SECRET_VAR: &str = "BYBIT_API_SECRET";

pub const BYBIT_HEADER_API_KEY: &str = "X-BAPI-API-KEY";
pub const BYBIT_HEADER_TIMESTAMP: &str = "X-BAPI-TIMESTAMP";
pub const BYBIT_HEADER_SIGN: &str = "X-BAPI-SIGN";
pub const BYBIT_HEADER_RECV_WINDOW: &str = "X-BAPI-RECV-WINDOW";

/// Query key carrying the page cursor on paginated endpoints.
pub const BYBIT_CURSOR_PARAM: &str = "cursor";
