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


//! Bybit v5 REST endpoint paths.

// Market
pub const MARKET_SERVER_TIME: &str = "/v5/market/time";
pub const MARKET_KLINE: &str = "/v5/market/kline";
pub const MARKET_MARK_PRICE_KLINE: &str = "/v5/market/mark-price-kline";
pub const MARKET_INDEX_PRICE_KLINE: &str = "/v5/market/index-price-kline";
pub const MARKET_PREMIUM_INDEX_PRICE_KLINE: &str = "/v5/market/premium-index-price-kline";
pub const MARKET_INSTRUMENTS_INFO: &str = "/v5/market/instruments-info";
pub const MARKET_ORDERBOOK: &str = "/v5/market/orderbook";
pub const MARKET_TICKERS: &str = "/v5/market/tickers";
pub const MARKET_FUNDING_HISTORY: &str = "/v5/market/funding/history";
pub const MARKET_RECENT_TRADE: &str = "/v5/market/recent-trade";
pub const MARKET_OPEN_INTEREST: &str = "/v5/market/open-interest";
pub const MARKET_HISTORICAL_VOLATILITY: &str = "/v5/market/historical-volatility";
pub const MARKET_INSURANCE: &str = "/v5/market/insurance";
pub const MARKET_RISK_LIMIT: &str = "/v5/market/risk-limit";
pub const MARKET_DELIVERY_PRICE: &str = "/v5/market/delivery-price";
pub const MARKET_ACCOUNT_RATIO: &str = "/v5/market/account-ratio";

// Trade
pub const ORDER_CREATE: &str = "/v5/order/create";
pub const ORDER_AMEND: &str = "/v5/order/amend";
pub const ORDER_CANCEL: &str = "/v5/order/cancel";
pub const ORDER_REALTIME: &str = "/v5/order/realtime";
pub const ORDER_CANCEL_ALL: &str = "/v5/order/cancel-all";
pub const ORDER_HISTORY: &str = "/v5/order/history";
pub const ORDER_CREATE_BATCH: &str = "/v5/order/create-batch";
pub const ORDER_AMEND_BATCH: &str = "/v5/order/amend-batch";
pub const ORDER_CANCEL_BATCH: &str = "/v5/order/cancel-batch";
pub const ORDER_SPOT_BORROW_CHECK: &str = "/v5/order/spot-borrow-check";

// Position
pub const POSITION_LIST: &str = "/v5/position/list";
pub const POSITION_SET_LEVERAGE: &str = "/v5/position/set-leverage";
pub const POSITION_SWITCH_ISOLATED: &str = "/v5/position/switch-isolated";
pub const POSITION_SWITCH_MODE: &str = "/v5/position/switch-mode";
pub const POSITION_TRADING_STOP: &str = "/v5/position/trading-stop";
pub const POSITION_SET_AUTO_ADD_MARGIN: &str = "/v5/position/set-auto-add-margin";
pub const POSITION_CLOSED_PNL: &str = "/v5/position/closed-pnl";
pub const EXECUTION_LIST: &str = "/v5/execution/list";

// Account
pub const ACCOUNT_WALLET_BALANCE: &str = "/v5/account/wallet-balance";
pub const ACCOUNT_BORROW_HISTORY: &str = "/v5/account/borrow-history";
pub const ACCOUNT_QUICK_REPAYMENT: &str = "/v5/account/quick-repayment";
pub const ACCOUNT_COLLATERAL_INFO: &str = "/v5/account/collateral-info";
pub const ACCOUNT_SET_COLLATERAL_SWITCH: &str = "/v5/account/set-collateral-switch";
pub const ACCOUNT_SET_COLLATERAL_SWITCH_BATCH: &str = "/v5/account/set-collateral-switch-batch";
pub const ACCOUNT_FEE_RATE: &str = "/v5/account/fee-rate";
pub const ACCOUNT_INFO: &str = "/v5/account/info";
pub const ACCOUNT_TRANSACTION_LOG: &str = "/v5/account/transaction-log";
pub const ACCOUNT_CONTRACT_TRANSACTION_LOG: &str = "/v5/account/contract-transaction-log";
pub const ACCOUNT_SET_MARGIN_MODE: &str = "/v5/account/set-margin-mode";

// Asset
pub const ASSET_EXCHANGE_ORDER_RECORD: &str = "/v5/asset/exchange/order-record";
pub const ASSET_SETTLEMENT_RECORD: &str = "/v5/asset/settlement-record";
pub const ASSET_ACCOUNT_COIN_BALANCE: &str = "/v5/asset/transfer/query-account-coin-balance";
pub const ASSET_TRANSFER_COIN_LIST: &str = "/v5/asset/transfer/query-transfer-coin-list";
pub const ASSET_INTER_TRANSFER: &str = "/v5/asset/transfer/inter-transfer";
pub const ASSET_INTER_TRANSFER_LIST: &str = "/v5/asset/transfer/query-inter-transfer-list";

// Spot margin (unified account)
pub const SPOT_MARGIN_DATA: &str = "/v5/spot-margin-trade/data";
pub const SPOT_MARGIN_SWITCH_MODE: &str = "/v5/spot-margin-trade/switch-mode";
pub const SPOT_MARGIN_SET_LEVERAGE: &str = "/v5/spot-margin-trade/set-leverage";
pub const SPOT_MARGIN_STATE: &str = "/v5/spot-margin-trade/state";

// Crypto loan (normal account)
pub const CRYPTO_LOAN_LOANABLE_DATA: &str = "/v5/crypto-loan/loanable-data";
pub const CRYPTO_LOAN_COLLATERAL_DATA: &str = "/v5/crypto-loan/collateral-data";
pub const CRYPTO_LOAN_BORROWABLE_COLLATERALISABLE: &str =
    "/v5/crypto-loan/borrowable-collateralisable-number";
pub const CRYPTO_LOAN_ONGOING_ORDERS: &str = "/v5/crypto-loan/ongoing-orders";
pub const CRYPTO_LOAN_BORROW: &str = "/v5/crypto-loan/borrow";
pub const CRYPTO_LOAN_REPAY: &str = "/v5/crypto-loan/repay";
pub const CRYPTO_LOAN_BORROW_HISTORY: &str = "/v5/crypto-loan/borrow-history";
pub const CRYPTO_LOAN_REPAYMENT_HISTORY: &str = "/v5/crypto-loan/repayment-history";
pub const CRYPTO_LOAN_MAX_COLLATERAL_AMOUNT: &str = "/v5/crypto-loan/max-collateral-amount";
pub const CRYPTO_LOAN_ADJUST_LTV: &str = "/v5/crypto-loan/adjust-ltv";
pub const CRYPTO_LOAN_ADJUSTMENT_HISTORY: &str = "/v5/crypto-loan/adjustment-history";
