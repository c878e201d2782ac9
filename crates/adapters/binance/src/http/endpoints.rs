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


//! Binance REST endpoint paths.

// Spot market data
pub const SERVER_TIME: &str = "/api/v3/time";
pub const KLINES: &str = "/api/v3/klines";

// Spot account and trading
pub const ACCOUNT: &str = "/api/v3/account";
pub const ORDER: &str = "/api/v3/order";
pub const OPEN_ORDERS: &str = "/api/v3/openOrders";

// Isolated margin
pub const ISOLATED_MARGIN_DATA: &str = "/sapi/v1/margin/isolatedMarginData";
pub const ISOLATED_MARGIN_TIER: &str = "/sapi/v1/margin/isolatedMarginTier";
