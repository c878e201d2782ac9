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


//! Command handlers, one module per exchange.
//!
//! Every handler returns the rendered output so it can be printed by the caller or inspected
//! in tests.

pub mod binance;
pub mod bitfinex;
pub mod bybit;
pub mod ftx;

use std::num::NonZeroU32;

use kestrel_rest::RestClientConfig;
use serde::Serialize;

use crate::opt::KestrelCli;

/// Options shared by every exchange command.
#[derive(Clone, Debug)]
pub struct Context {
    pub json: bool,
    pub max_pages: NonZeroU32,
    pub rest: RestClientConfig,
}

impl Context {
    /// Builds the shared options from parsed command-line arguments.
    #[must_use]
    pub fn from_cli(cli: &KestrelCli) -> Self {
        let rest = RestClientConfig {
            base_url: cli.base_url.clone(),
            timeout_secs: cli.timeout_secs,
            ..RestClientConfig::default()
        };
        Self {
            json: cli.json,
            max_pages: cli.max_pages,
            rest,
        }
    }

    /// Renders `value` as pretty JSON when `--json` is set, otherwise with `table`.
    pub fn render<T: Serialize + ?Sized>(
        &self,
        value: &T,
        table: impl FnOnce(&T) -> String,
    ) -> anyhow::Result<String> {
        if self.json {
            Ok(serde_json::to_string_pretty(value)?)
        } else {
            Ok(table(value))
        }
    }
}

/// Formats an optional float, leaving absent values blank.
pub(crate) fn opt_f64(value: Option<f64>) -> String {
    value.map(|v| v.to_string()).unwrap_or_default()
}

////////////////////////////////////////////////////////////////////////////////
// Tests
////////////////////////////////////////////////////////////////////////////////
