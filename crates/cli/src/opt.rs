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


use std::num::NonZeroU32;

use clap::Parser;
use kestrel_binance::common::enums::BinanceKlineInterval;
use kestrel_bitfinex::common::enums::BitfinexBookPrecision;
use kestrel_bybit::common::enums::{
    BybitAccountType, BybitEnvironment, BybitKlineInterval, BybitProductType,
};

/// Main CLI structure for parsing command-line arguments and options.
///
/// Credentials are read from the exchange environment variables (`BYBIT_API_KEY`,
/// `BITFINEX_API_KEY`, `FTX_API_KEY`, `BINANCE_API_KEY` and their secrets), which may also be
/// provided through a `.env` file.
#[derive(Debug, Parser)]
#[clap(version, about, author)]
pub struct KestrelCli {
    /// Log filter directive, overriding `RUST_LOG` (for example `debug` or `kestrel_rest=trace`).
    #[arg(long, global = true)]
    pub log_level: Option<String>,
    /// Print raw JSON instead of tables.
    #[arg(long, global = true)]
    pub json: bool,
    /// Page ceiling for commands that walk pagination.
    #[arg(long, global = true, default_value = "10")]
    pub max_pages: NonZeroU32,
    /// Transport timeout in seconds.
    #[arg(long, global = true, default_value_t = 10)]
    pub timeout_secs: u64,
    /// Override the exchange base URL.
    #[arg(long, global = true)]
    pub base_url: Option<String>,
    #[clap(subcommand)]
    pub command: Commands,
}

/// Available top-level commands, one per exchange.
#[derive(Parser, Debug)]
pub enum Commands {
    Bybit(BybitOpt),
    Bitfinex(BitfinexOpt),
    Ftx(FtxOpt),
    Binance(BinanceOpt),
}

#[derive(Parser, Debug)]
#[command(about = "Bybit v5 REST operations", long_about = None)]
pub struct BybitOpt {
    #[arg(long, default_value = "mainnet")]
    pub environment: BybitEnvironment,
    #[clap(subcommand)]
    pub command: BybitCommand,
}

#[derive(Parser, Debug, Clone)]
pub enum BybitCommand {
    /// Prints the server time.
    ServerTime,
    /// Prints tickers for a category, optionally one symbol.
    Tickers {
        #[arg(long, default_value = "linear")]
        category: BybitProductType,
        #[arg(long)]
        symbol: Option<String>,
    },
    /// Prints recent klines.
    Klines {
        #[arg(long, default_value = "linear")]
        category: BybitProductType,
        #[arg(long)]
        symbol: String,
        /// Interval code (1, 3, 5, 15, 30, 60, 120, 240, 360, 720, D, W, M).
        #[arg(long, default_value = "60")]
        interval: BybitKlineInterval,
        #[arg(long)]
        limit: Option<u32>,
    },
    /// Prints open orders (authenticated).
    OpenOrders {
        #[arg(long, default_value = "linear")]
        category: BybitProductType,
        #[arg(long)]
        symbol: Option<String>,
        /// Follow `nextPageCursor` up to `--max-pages`.
        #[arg(long)]
        all: bool,
    },
    /// Prints coin balances of a wallet (authenticated).
    WalletBalance {
        #[arg(long, default_value = "UNIFIED")]
        account_type: BybitAccountType,
    },
}

#[derive(Parser, Debug)]
#[command(about = "Bitfinex v2 REST operations", long_about = None)]
pub struct BitfinexOpt {
    #[clap(subcommand)]
    pub command: BitfinexCommand,
}

#[derive(Parser, Debug, Clone)]
pub enum BitfinexCommand {
    /// Prints the ticker of a trading pair such as `tBTCUSD`.
    Ticker {
        #[arg(long)]
        symbol: String,
    },
    /// Prints the order book.
    Book {
        #[arg(long)]
        symbol: String,
        #[arg(long, default_value = "P0")]
        precision: BitfinexBookPrecision,
        /// Number of price points (1, 25 or 100).
        #[arg(long)]
        len: Option<u32>,
    },
    /// Prints wallet balances (authenticated).
    Wallets,
    /// Prints trade history (authenticated).
    Trades {
        #[arg(long)]
        symbol: Option<String>,
        #[arg(long)]
        limit: Option<u64>,
        /// Walk history backwards up to `--max-pages`.
        #[arg(long)]
        all: bool,
    },
}

#[derive(Parser, Debug)]
#[command(about = "FTX REST operations", long_about = None)]
pub struct FtxOpt {
    /// Subaccount to scope authenticated requests to.
    #[arg(long, env = "FTX_SUBACCOUNT")]
    pub subaccount: Option<String>,
    #[clap(subcommand)]
    pub command: FtxCommand,
}

#[derive(Parser, Debug, Clone)]
pub enum FtxCommand {
    /// Prints all markets.
    Markets,
    /// Prints the best levels of a market's order book.
    Orderbook {
        #[arg(long)]
        market: String,
        #[arg(long, default_value_t = 5)]
        depth: u32,
    },
    /// Prints wallet balances (authenticated).
    Balances,
    /// Prints open orders (authenticated).
    OpenOrders {
        #[arg(long)]
        market: Option<String>,
    },
    /// Prints order history (authenticated).
    OrderHistory {
        #[arg(long)]
        market: Option<String>,
        /// Walk history backwards up to `--max-pages`.
        #[arg(long)]
        all: bool,
    },
}

#[derive(Parser, Debug)]
#[command(about = "Binance spot and margin REST operations", long_about = None)]
pub struct BinanceOpt {
    /// Use the spot testnet.
    #[arg(long)]
    pub testnet: bool,
    #[clap(subcommand)]
    pub command: BinanceCommand,
}

#[derive(Parser, Debug, Clone)]
pub enum BinanceCommand {
    /// Prints the server time.
    ServerTime,
    /// Prints klines from a UTC start date (`YYYY-MM-DD HH:MM`).
    Klines {
        #[arg(long)]
        symbol: String,
        #[arg(long, default_value = "1m")]
        interval: BinanceKlineInterval,
        #[arg(long)]
        start: String,
        #[arg(long)]
        end: Option<String>,
        #[arg(long)]
        limit: Option<u32>,
        /// Walk forward across pages up to `--max-pages`.
        #[arg(long)]
        all: bool,
    },
    /// Prints non-zero balances (authenticated).
    Account,
    /// Prints open orders (authenticated).
    OpenOrders {
        #[arg(long)]
        symbol: Option<String>,
    },
    /// Prints isolated margin interest rates (authenticated).
    MarginData {
        #[arg(long)]
        symbol: Option<String>,
        #[arg(long)]
        vip_level: Option<u32>,
    },
}

////////////////////////////////////////////////////////////////////////////////
// Tests
////////////////////////////////////////////////////////////////////////////////

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    #[rstest]
    fn test_parse_bybit_open_orders() {
        let cli = KestrelCli::try_parse_from([
            "kestrel",
            "--max-pages",
            "3",
            "bybit",
            "--environment",
            "testnet",
            "open-orders",
            "--symbol",
            "BTCUSDT",
            "--all",
        ])
        .unwrap();

        assert_eq!(cli.max_pages.get(), 3);
        let Commands::Bybit(opt) = cli.command else {
            panic!("expected bybit command");
        };
        assert_eq!(opt.environment, BybitEnvironment::Testnet);
        match opt.command {
            BybitCommand::OpenOrders {
                category,
                symbol,
                all,
            } => {
                assert_eq!(category, BybitProductType::Linear);
                assert_eq!(symbol.as_deref(), Some("BTCUSDT"));
                assert!(all);
            }
            other => panic!("unexpected command {other:?}"),
        }
    }

    #[rstest]
    fn test_parse_binance_klines_with_global_flag_after_subcommand() {
        let cli = KestrelCli::try_parse_from([
            "kestrel",
            "binance",
            "klines",
            "--symbol",
            "BTCUSDT",
            "--interval",
            "1h",
            "--start",
            "2024-01-01 00:00",
            "--json",
        ])
        .unwrap();

        assert!(cli.json);
        assert_eq!(cli.max_pages.get(), 10);
        let Commands::Binance(opt) = cli.command else {
            panic!("expected binance command");
        };
        assert!(!opt.testnet);
        assert!(matches!(
            opt.command,
            BinanceCommand::Klines {
                interval: BinanceKlineInterval::Hour1,
                ..
            }
        ));
    }

    #[rstest]
    #[case(&["kestrel", "--max-pages", "0", "ftx", "markets"])]
    #[case(&["kestrel", "bybit", "--environment", "staging", "server-time"])]
    #[case(&["kestrel", "bitfinex", "book", "--symbol", "tBTCUSD", "--precision", "P9"])]
    fn test_rejects_invalid_values(#[case] args: &[&str]) {
        assert!(KestrelCli::try_parse_from(args).is_err());
    }
}
