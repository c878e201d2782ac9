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


pub const FTX_HTTP_URL: &str = "https://ftx.com";

pub const FTX_API_KEY_VAR: &str = "FTX_API_KEY";
pub const FTX_API_SECRET_VAR: &str = "FTX_API_SECRET";
pub const FTX_SUBACCOUNT_VAR: &str = "FTX_SUBACCOUNT";

pub const FTX_HEADER_KEY: &str = "FTX-KEY";
pub const FTX_HEADER_SIGN: &str = "FTX-SIGN";
pub const FTX_HEADER_TS: &str = "FTX-TS";
pub const FTX_HEADER_SUBACCOUNT: &str = "FTX-SUBACCOUNT";

/// Query key that bounds order history from above, in unix seconds.
pub const FTX_END_TIME_PARAM: &str = "end_time";
