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


//! Command-line interface over the Kestrel exchange REST clients.

#![warn(rustc::all)]
#![deny(unsafe_code)]
#![deny(nonstandard_style)]
#![deny(missing_debug_implementations)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod commands;
pub mod display;
pub mod opt;

use crate::{
    commands::Context,
    opt::{Commands, KestrelCli},
};

/// Executes the parsed command and returns its rendered output.
///
/// # Errors
///
/// Returns an error if the client cannot be built, the request fails, or the output cannot be
/// rendered.
pub async fn execute(cli: KestrelCli) -> anyhow::Result<String> {
    let ctx = Context::from_cli(&cli);
    match cli.command {
        Commands::Bybit(opt) => commands::bybit::run(&ctx, opt).await,
        Commands::Bitfinex(opt) => commands::bitfinex::run(&ctx, opt).await,
        Commands::Ftx(opt) => commands::ftx::run(&ctx, opt).await,
        Commands::Binance(opt) => commands::binance::run(&ctx, opt).await,
    }
}

/// Executes the parsed command and prints its output to stdout.
///
/// # Errors
///
/// Returns any error from [`execute`].
pub async fn run(cli: KestrelCli) -> anyhow::Result<()> {
    let output = execute(cli).await?;
    println!("{output}");
    Ok(())
}
