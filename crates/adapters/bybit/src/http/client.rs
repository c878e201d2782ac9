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


//! Bybit v5 HTTP client.
//!
//! Single-page methods return the full response envelope (`retCode`, `retMsg`, `result`, ...).
//! Methods ending in `_all` walk the `nextPageCursor` chain and return the concatenated
//! `result.list` items, bounded by `max_pages`.
//!
//! Free-form endpoints accept a [`Params`] bag whose keys are passed through verbatim, so callers
//! use the camelCase names from the Bybit documentation (`category`, `symbol`, `limit`, ...).

use std::{num::NonZeroU32, sync::Arc};

use kestrel_rest::{Page, Params, RequestSpec, RestClient, RestError, fetch_all_pages};
use serde::de::DeserializeOwned;
use serde_json::Value;

use super::{
    endpoints::*,
    models::{
        BybitCancelOrderResponse, BybitKlinesResponse, BybitPlaceOrderResponse,
        BybitServerTimeResponse, BybitTickersResponse,
    },
    query::{BybitCancelOrderParams, BybitKlinesParams, BybitPlaceOrderParams},
};
use crate::{
    common::{
        consts::BYBIT_CURSOR_PARAM,
        enums::BybitProductType,
        models::BybitCursorListResponse,
        signer::{BybitSigner, BybitValidator},
        urls::bybit_http_base_url,
    },
    config::BybitHttpConfig,
};

/// Provides a HTTP client for connecting to the [Bybit](https://bybit.com) REST API.
///
/// Clones share the underlying connection pool and nonce clock.
#[derive(Clone, Debug)]
pub struct BybitHttpClient {
    inner: Arc<RestClient>,
    recv_window_ms: u64,
}

impl BybitHttpClient {
    /// Creates a new [`BybitHttpClient`] from `config`.
    ///
    /// Credentials are optional; without them only public endpoints can be called.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client or retry manager cannot be created.
    pub fn new(config: &BybitHttpConfig) -> Result<Self, RestError> {
        let inner = RestClient::from_config(
            &config.rest,
            bybit_http_base_url(config.environment),
            config.credential(),
            Arc::new(BybitSigner::new(config.recv_window_ms)),
            Arc::new(BybitValidator),
        )?;

        Ok(Self {
            inner: Arc::new(inner),
            recv_window_ms: config.recv_window_ms,
        })
    }

    /// Returns the base URL used for requests.
    #[must_use]
    pub fn base_url(&self) -> &str {
        self.inner.base_url()
    }

    /// Returns true if the client can call authenticated endpoints.
    #[must_use]
    pub fn has_credential(&self) -> bool {
        self.inner.has_credential()
    }

    /// Returns the receive window in milliseconds.
    #[must_use]
    pub const fn recv_window_ms(&self) -> u64 {
        self.recv_window_ms
    }

    async fn get(&self, path: &str, params: &Params, auth: bool) -> Result<Value, RestError> {
        self.inner
            .send(RequestSpec::get(path, params.clone()).with_auth(auth))
            .await
    }

    async fn post(&self, path: &str, params: &Params) -> Result<Value, RestError> {
        self.inner
            .send(RequestSpec::post(path, params.clone()).authenticated())
            .await
    }

    async fn get_all(
        &self,
        path: &str,
        params: &Params,
        auth: bool,
        max_pages: NonZeroU32,
    ) -> Result<Vec<Value>, RestError> {
        let inner = &self.inner;
        let initial_cursor = params.get_str(BYBIT_CURSOR_PARAM).map(str::to_string);
        tracing::debug!(path, max_pages = max_pages.get(), "Fetching cursor pages");

        fetch_all_pages(
            move |cursor: Option<String>| {
                let mut page_params = params.clone();
                if let Some(cursor) = cursor {
                    page_params.set(BYBIT_CURSOR_PARAM, cursor);
                }
                let spec = RequestSpec::get(path, page_params).with_auth(auth);
                async move { parse_cursor_page(inner.send(spec).await?) }
            },
            initial_cursor,
            max_pages,
        )
        .await
    }

    // =========================================================================
    // Market
    // =========================================================================

    /// Fetches the current server time from Bybit.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the response cannot be parsed.
    ///
    /// # References
    ///
    /// - <https://bybit-exchange.github.io/docs/v5/market/time>
    pub async fn http_get_server_time(&self) -> Result<BybitServerTimeResponse, RestError> {
        self.inner
            .send_json(RequestSpec::get(MARKET_SERVER_TIME, Params::new()))
            .await
    }

    /// Fetches klines for a symbol.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the response cannot be parsed.
    ///
    /// # References
    ///
    /// - <https://bybit-exchange.github.io/docs/v5/market/kline>
    pub async fn http_get_klines(
        &self,
        params: &BybitKlinesParams,
    ) -> Result<BybitKlinesResponse, RestError> {
        let params = Params::from_serializable(params)?;
        self.inner
            .send_json(RequestSpec::get(MARKET_KLINE, params))
            .await
    }

    /// Fetches mark price klines.
    ///
    /// # References
    ///
    /// - <https://bybit-exchange.github.io/docs/v5/market/mark-kline>
    pub async fn http_get_mark_price_klines(&self, params: &Params) -> Result<Value, RestError> {
        self.get(MARKET_MARK_PRICE_KLINE, params, false).await
    }

    /// Fetches index price klines.
    ///
    /// # References
    ///
    /// - <https://bybit-exchange.github.io/docs/v5/market/index-kline>
    pub async fn http_get_index_price_klines(&self, params: &Params) -> Result<Value, RestError> {
        self.get(MARKET_INDEX_PRICE_KLINE, params, false).await
    }

    /// Fetches premium index price klines (linear contracts only).
    ///
    /// # References
    ///
    /// - <https://bybit-exchange.github.io/docs/v5/market/premium-index-kline>
    pub async fn http_get_premium_index_price_klines(
        &self,
        params: &Params,
    ) -> Result<Value, RestError> {
        self.get(MARKET_PREMIUM_INDEX_PRICE_KLINE, params, false)
            .await
    }

    /// Fetches instrument specifications (`category` required).
    ///
    /// # References
    ///
    /// - <https://bybit-exchange.github.io/docs/v5/market/instrument>
    pub async fn http_get_instruments_info(&self, params: &Params) -> Result<Value, RestError> {
        self.get(MARKET_INSTRUMENTS_INFO, params, false).await
    }

    /// Fetches instrument specifications across up to `max_pages` pages.
    pub async fn http_get_instruments_info_all(
        &self,
        params: &Params,
        max_pages: NonZeroU32,
    ) -> Result<Vec<Value>, RestError> {
        self.get_all(MARKET_INSTRUMENTS_INFO, params, false, max_pages)
            .await
    }

    /// Fetches the order book (`category`, `symbol`, optional `limit`).
    ///
    /// # References
    ///
    /// - <https://bybit-exchange.github.io/docs/v5/market/orderbook>
    pub async fn http_get_orderbook(&self, params: &Params) -> Result<Value, RestError> {
        self.get(MARKET_ORDERBOOK, params, false).await
    }

    /// Fetches the latest price snapshot, best bid/ask and 24h volume.
    ///
    /// # References
    ///
    /// - <https://bybit-exchange.github.io/docs/v5/market/tickers>
    pub async fn http_get_tickers(&self, params: &Params) -> Result<Value, RestError> {
        self.get(MARKET_TICKERS, params, false).await
    }

    /// Returns the last traded price for `symbol`.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails, no ticker is returned, or `lastPrice` is not a
    /// number.
    pub async fn http_get_last_price(
        &self,
        category: BybitProductType,
        symbol: &str,
    ) -> Result<f64, RestError> {
        let params = Params::new()
            .with("category", category.to_string())
            .with("symbol", symbol);
        let response: BybitTickersResponse = self
            .inner
            .send_json(RequestSpec::get(MARKET_TICKERS, params))
            .await?;

        let ticker = response.result.list.first().ok_or_else(|| {
            RestError::Serialization(format!("No ticker returned for {symbol}"))
        })?;
        ticker.last_price.parse::<f64>().map_err(|e| {
            RestError::Serialization(format!("Invalid lastPrice '{}': {e}", ticker.last_price))
        })
    }

    /// Fetches historical funding rates.
    ///
    /// # References
    ///
    /// - <https://bybit-exchange.github.io/docs/v5/market/history-fund-rate>
    pub async fn http_get_funding_rate_history(
        &self,
        params: &Params,
    ) -> Result<Value, RestError> {
        self.get(MARKET_FUNDING_HISTORY, params, false).await
    }

    /// Fetches recent public trades.
    ///
    /// # References
    ///
    /// - <https://bybit-exchange.github.io/docs/v5/market/recent-trade>
    pub async fn http_get_recent_trades(&self, params: &Params) -> Result<Value, RestError> {
        self.get(MARKET_RECENT_TRADE, params, false).await
    }

    /// Fetches open interest (`category`, `symbol`, `intervalTime`).
    ///
    /// # References
    ///
    /// - <https://bybit-exchange.github.io/docs/v5/market/open-interest>
    pub async fn http_get_open_interest(&self, params: &Params) -> Result<Value, RestError> {
        self.get(MARKET_OPEN_INTEREST, params, false).await
    }

    /// Fetches open interest across up to `max_pages` pages.
    pub async fn http_get_open_interest_all(
        &self,
        params: &Params,
        max_pages: NonZeroU32,
    ) -> Result<Vec<Value>, RestError> {
        self.get_all(MARKET_OPEN_INTEREST, params, false, max_pages)
            .await
    }

    /// Fetches option historical volatility.
    ///
    /// # References
    ///
    /// - <https://bybit-exchange.github.io/docs/v5/market/iv>
    pub async fn http_get_historical_volatility(
        &self,
        params: &Params,
    ) -> Result<Value, RestError> {
        self.get(MARKET_HISTORICAL_VOLATILITY, params, false).await
    }

    /// Fetches insurance pool data.
    ///
    /// # References
    ///
    /// - <https://bybit-exchange.github.io/docs/v5/market/insurance>
    pub async fn http_get_insurance(&self, params: &Params) -> Result<Value, RestError> {
        self.get(MARKET_INSURANCE, params, false).await
    }

    /// Fetches the risk limit tiers.
    ///
    /// # References
    ///
    /// - <https://bybit-exchange.github.io/docs/v5/market/risk-limit>
    pub async fn http_get_risk_limit(&self, params: &Params) -> Result<Value, RestError> {
        self.get(MARKET_RISK_LIMIT, params, false).await
    }

    /// Fetches risk limit tiers across up to `max_pages` pages.
    pub async fn http_get_risk_limit_all(
        &self,
        params: &Params,
        max_pages: NonZeroU32,
    ) -> Result<Vec<Value>, RestError> {
        self.get_all(MARKET_RISK_LIMIT, params, false, max_pages)
            .await
    }

    /// Fetches delivery prices for expiring contracts.
    ///
    /// # References
    ///
    /// - <https://bybit-exchange.github.io/docs/v5/market/delivery-price>
    pub async fn http_get_delivery_price(&self, params: &Params) -> Result<Value, RestError> {
        self.get(MARKET_DELIVERY_PRICE, params, false).await
    }

    /// Fetches delivery prices across up to `max_pages` pages.
    pub async fn http_get_delivery_price_all(
        &self,
        params: &Params,
        max_pages: NonZeroU32,
    ) -> Result<Vec<Value>, RestError> {
        self.get_all(MARKET_DELIVERY_PRICE, params, false, max_pages)
            .await
    }

    /// Fetches the long/short account ratio.
    ///
    /// # References
    ///
    /// - <https://bybit-exchange.github.io/docs/v5/market/long-short-ratio>
    pub async fn http_get_long_short_ratio(&self, params: &Params) -> Result<Value, RestError> {
        self.get(MARKET_ACCOUNT_RATIO, params, false).await
    }

    /// Fetches the long/short account ratio across up to `max_pages` pages.
    pub async fn http_get_long_short_ratio_all(
        &self,
        params: &Params,
        max_pages: NonZeroU32,
    ) -> Result<Vec<Value>, RestError> {
        self.get_all(MARKET_ACCOUNT_RATIO, params, false, max_pages)
            .await
    }

    // =========================================================================
    // Trade
    // =========================================================================

    /// Submits a new order.
    ///
    /// # Errors
    ///
    /// Returns an error if credentials are missing, the request fails, or Bybit rejects the
    /// order.
    ///
    /// # References
    ///
    /// - <https://bybit-exchange.github.io/docs/v5/order/create-order>
    pub async fn http_place_order(
        &self,
        params: &BybitPlaceOrderParams,
    ) -> Result<BybitPlaceOrderResponse, RestError> {
        let params = Params::from_serializable(params)?;
        self.inner
            .send_json(RequestSpec::post(ORDER_CREATE, params).authenticated())
            .await
    }

    /// Amends an open order.
    ///
    /// # References
    ///
    /// - <https://bybit-exchange.github.io/docs/v5/order/amend-order>
    pub async fn http_amend_order(&self, params: &Params) -> Result<Value, RestError> {
        self.post(ORDER_AMEND, params).await
    }

    /// Cancels an open order by `orderId` or `orderLinkId`.
    ///
    /// # References
    ///
    /// - <https://bybit-exchange.github.io/docs/v5/order/cancel-order>
    pub async fn http_cancel_order(
        &self,
        params: &BybitCancelOrderParams,
    ) -> Result<BybitCancelOrderResponse, RestError> {
        let params = Params::from_serializable(params)?;
        self.inner
            .send_json(RequestSpec::post(ORDER_CANCEL, params).authenticated())
            .await
    }

    /// Fetches unfilled or partially filled orders.
    ///
    /// # References
    ///
    /// - <https://bybit-exchange.github.io/docs/v5/order/open-order>
    pub async fn http_get_open_orders(&self, params: &Params) -> Result<Value, RestError> {
        self.get(ORDER_REALTIME, params, true).await
    }

    /// Fetches open orders across up to `max_pages` pages.
    pub async fn http_get_open_orders_all(
        &self,
        params: &Params,
        max_pages: NonZeroU32,
    ) -> Result<Vec<Value>, RestError> {
        self.get_all(ORDER_REALTIME, params, true, max_pages).await
    }

    /// Cancels all open orders matching the filter.
    ///
    /// # References
    ///
    /// - <https://bybit-exchange.github.io/docs/v5/order/cancel-all>
    pub async fn http_cancel_all_orders(&self, params: &Params) -> Result<Value, RestError> {
        self.post(ORDER_CANCEL_ALL, params).await
    }

    /// Fetches order history.
    ///
    /// # References
    ///
    /// - <https://bybit-exchange.github.io/docs/v5/order/order-list>
    pub async fn http_get_order_history(&self, params: &Params) -> Result<Value, RestError> {
        self.get(ORDER_HISTORY, params, true).await
    }

    /// Fetches order history across up to `max_pages` pages.
    pub async fn http_get_order_history_all(
        &self,
        params: &Params,
        max_pages: NonZeroU32,
    ) -> Result<Vec<Value>, RestError> {
        self.get_all(ORDER_HISTORY, params, true, max_pages).await
    }

    /// Places a batch of orders (`category`, `request` list).
    ///
    /// # References
    ///
    /// - <https://bybit-exchange.github.io/docs/v5/order/batch-place>
    pub async fn http_batch_place_order(&self, params: &Params) -> Result<Value, RestError> {
        self.post(ORDER_CREATE_BATCH, params).await
    }

    /// Amends a batch of orders.
    ///
    /// # References
    ///
    /// - <https://bybit-exchange.github.io/docs/v5/order/batch-amend>
    pub async fn http_batch_amend_order(&self, params: &Params) -> Result<Value, RestError> {
        self.post(ORDER_AMEND_BATCH, params).await
    }

    /// Cancels a batch of orders.
    ///
    /// # References
    ///
    /// - <https://bybit-exchange.github.io/docs/v5/order/batch-cancel>
    pub async fn http_batch_cancel_order(&self, params: &Params) -> Result<Value, RestError> {
        self.post(ORDER_CANCEL_BATCH, params).await
    }

    /// Fetches the spot margin borrow quota for a symbol and side.
    ///
    /// # References
    ///
    /// - <https://bybit-exchange.github.io/docs/v5/order/spot-borrow-quota>
    pub async fn http_get_borrow_quota(&self, params: &Params) -> Result<Value, RestError> {
        self.get(ORDER_SPOT_BORROW_CHECK, params, true).await
    }

    // =========================================================================
    // Position
    // =========================================================================

    /// Fetches position information.
    ///
    /// # References
    ///
    /// - <https://bybit-exchange.github.io/docs/v5/position>
    pub async fn http_get_positions(&self, params: &Params) -> Result<Value, RestError> {
        self.get(POSITION_LIST, params, true).await
    }

    /// Fetches positions across up to `max_pages` pages.
    pub async fn http_get_positions_all(
        &self,
        params: &Params,
        max_pages: NonZeroU32,
    ) -> Result<Vec<Value>, RestError> {
        self.get_all(POSITION_LIST, params, true, max_pages).await
    }

    /// Sets the leverage for a symbol (`buyLeverage`, `sellLeverage`).
    ///
    /// # References
    ///
    /// - <https://bybit-exchange.github.io/docs/v5/position/leverage>
    pub async fn http_set_leverage(&self, params: &Params) -> Result<Value, RestError> {
        self.post(POSITION_SET_LEVERAGE, params).await
    }

    /// Switches between cross and isolated margin for a symbol.
    ///
    /// # References
    ///
    /// - <https://bybit-exchange.github.io/docs/v5/position/cross-isolate>
    pub async fn http_switch_margin_mode(&self, params: &Params) -> Result<Value, RestError> {
        self.post(POSITION_SWITCH_ISOLATED, params).await
    }

    /// Switches between one-way and hedge position mode.
    ///
    /// # References
    ///
    /// - <https://bybit-exchange.github.io/docs/v5/position/position-mode>
    pub async fn http_switch_position_mode(&self, params: &Params) -> Result<Value, RestError> {
        self.post(POSITION_SWITCH_MODE, params).await
    }

    /// Sets take profit, stop loss or trailing stop for a position.
    ///
    /// # References
    ///
    /// - <https://bybit-exchange.github.io/docs/v5/position/trading-stop>
    pub async fn http_set_trading_stop(&self, params: &Params) -> Result<Value, RestError> {
        self.post(POSITION_TRADING_STOP, params).await
    }

    /// Toggles automatic margin top-up for an isolated position.
    ///
    /// # References
    ///
    /// - <https://bybit-exchange.github.io/docs/v5/position/auto-add-margin>
    pub async fn http_set_auto_add_margin(&self, params: &Params) -> Result<Value, RestError> {
        self.post(POSITION_SET_AUTO_ADD_MARGIN, params).await
    }

    /// Fetches user executions.
    ///
    /// # References
    ///
    /// - <https://bybit-exchange.github.io/docs/v5/order/execution>
    pub async fn http_get_executions(&self, params: &Params) -> Result<Value, RestError> {
        self.get(EXECUTION_LIST, params, true).await
    }

    /// Fetches executions across up to `max_pages` pages.
    pub async fn http_get_executions_all(
        &self,
        params: &Params,
        max_pages: NonZeroU32,
    ) -> Result<Vec<Value>, RestError> {
        self.get_all(EXECUTION_LIST, params, true, max_pages).await
    }

    /// Fetches closed profit and loss records.
    ///
    /// # References
    ///
    /// - <https://bybit-exchange.github.io/docs/v5/position/close-pnl>
    pub async fn http_get_closed_pnl(&self, params: &Params) -> Result<Value, RestError> {
        self.get(POSITION_CLOSED_PNL, params, true).await
    }

    /// Fetches closed PnL records across up to `max_pages` pages.
    pub async fn http_get_closed_pnl_all(
        &self,
        params: &Params,
        max_pages: NonZeroU32,
    ) -> Result<Vec<Value>, RestError> {
        self.get_all(POSITION_CLOSED_PNL, params, true, max_pages)
            .await
    }

    // =========================================================================
    // Account
    // =========================================================================

    /// Fetches wallet balances (`accountType` required).
    ///
    /// # References
    ///
    /// - <https://bybit-exchange.github.io/docs/v5/account/wallet-balance>
    pub async fn http_get_wallet_balance(&self, params: &Params) -> Result<Value, RestError> {
        self.get(ACCOUNT_WALLET_BALANCE, params, true).await
    }

    /// Fetches interest records.
    ///
    /// # References
    ///
    /// - <https://bybit-exchange.github.io/docs/v5/account/borrow-history>
    pub async fn http_get_borrow_history(&self, params: &Params) -> Result<Value, RestError> {
        self.get(ACCOUNT_BORROW_HISTORY, params, true).await
    }

    /// Fetches interest records across up to `max_pages` pages.
    pub async fn http_get_borrow_history_all(
        &self,
        params: &Params,
        max_pages: NonZeroU32,
    ) -> Result<Vec<Value>, RestError> {
        self.get_all(ACCOUNT_BORROW_HISTORY, params, true, max_pages)
            .await
    }

    /// Repays liabilities using assets in the unified account.
    ///
    /// # References
    ///
    /// - <https://bybit-exchange.github.io/docs/v5/account/repay-liability>
    pub async fn http_repay_liability(&self, params: &Params) -> Result<Value, RestError> {
        self.post(ACCOUNT_QUICK_REPAYMENT, params).await
    }

    /// Fetches collateral information for the current unified account.
    ///
    /// # References
    ///
    /// - <https://bybit-exchange.github.io/docs/v5/account/collateral-info>
    pub async fn http_get_collateral_info(&self, params: &Params) -> Result<Value, RestError> {
        self.get(ACCOUNT_COLLATERAL_INFO, params, true).await
    }

    /// Enables or disables a coin as collateral.
    ///
    /// # References
    ///
    /// - <https://bybit-exchange.github.io/docs/v5/account/set-collateral>
    pub async fn http_set_collateral_coin(&self, params: &Params) -> Result<Value, RestError> {
        self.post(ACCOUNT_SET_COLLATERAL_SWITCH, params).await
    }

    /// Enables or disables several coins as collateral at once.
    ///
    /// # References
    ///
    /// - <https://bybit-exchange.github.io/docs/v5/account/batch-set-collateral>
    pub async fn http_batch_set_collateral_coin(
        &self,
        params: &Params,
    ) -> Result<Value, RestError> {
        self.post(ACCOUNT_SET_COLLATERAL_SWITCH_BATCH, params).await
    }

    /// Fetches trading fee rates.
    ///
    /// # References
    ///
    /// - <https://bybit-exchange.github.io/docs/v5/account/fee-rate>
    pub async fn http_get_fee_rates(&self, params: &Params) -> Result<Value, RestError> {
        self.get(ACCOUNT_FEE_RATE, params, true).await
    }

    /// Fetches account margin mode and status.
    ///
    /// # References
    ///
    /// - <https://bybit-exchange.github.io/docs/v5/account/account-info>
    pub async fn http_get_account_info(&self) -> Result<Value, RestError> {
        self.get(ACCOUNT_INFO, &Params::new(), true).await
    }

    /// Fetches the unified account transaction log.
    ///
    /// # References
    ///
    /// - <https://bybit-exchange.github.io/docs/v5/account/transaction-log>
    pub async fn http_get_transaction_log(&self, params: &Params) -> Result<Value, RestError> {
        self.get(ACCOUNT_TRANSACTION_LOG, params, true).await
    }

    /// Fetches the transaction log across up to `max_pages` pages.
    pub async fn http_get_transaction_log_all(
        &self,
        params: &Params,
        max_pages: NonZeroU32,
    ) -> Result<Vec<Value>, RestError> {
        self.get_all(ACCOUNT_TRANSACTION_LOG, params, true, max_pages)
            .await
    }

    /// Fetches the classic contract account transaction log.
    ///
    /// # References
    ///
    /// - <https://bybit-exchange.github.io/docs/v5/account/contract-transaction-log>
    pub async fn http_get_contract_transaction_log(
        &self,
        params: &Params,
    ) -> Result<Value, RestError> {
        self.get(ACCOUNT_CONTRACT_TRANSACTION_LOG, params, true)
            .await
    }

    /// Fetches the contract transaction log across up to `max_pages` pages.
    pub async fn http_get_contract_transaction_log_all(
        &self,
        params: &Params,
        max_pages: NonZeroU32,
    ) -> Result<Vec<Value>, RestError> {
        self.get_all(ACCOUNT_CONTRACT_TRANSACTION_LOG, params, true, max_pages)
            .await
    }

    /// Sets the unified account margin mode (`setMarginMode`).
    ///
    /// # References
    ///
    /// - <https://bybit-exchange.github.io/docs/v5/account/set-margin-mode>
    pub async fn http_set_margin_mode(&self, params: &Params) -> Result<Value, RestError> {
        self.post(ACCOUNT_SET_MARGIN_MODE, params).await
    }

    // =========================================================================
    // Asset
    // =========================================================================

    /// Fetches coin exchange records.
    ///
    /// # References
    ///
    /// - <https://bybit-exchange.github.io/docs/v5/asset/exchange>
    pub async fn http_get_coin_exchange_records(
        &self,
        params: &Params,
    ) -> Result<Value, RestError> {
        self.get(ASSET_EXCHANGE_ORDER_RECORD, params, true).await
    }

    /// Fetches coin exchange records across up to `max_pages` pages.
    pub async fn http_get_coin_exchange_records_all(
        &self,
        params: &Params,
        max_pages: NonZeroU32,
    ) -> Result<Vec<Value>, RestError> {
        self.get_all(ASSET_EXCHANGE_ORDER_RECORD, params, true, max_pages)
            .await
    }

    /// Fetches USDC contract settlement records.
    ///
    /// # References
    ///
    /// - <https://bybit-exchange.github.io/docs/v5/asset/settlement>
    pub async fn http_get_usdc_contract_settlement(
        &self,
        params: &Params,
    ) -> Result<Value, RestError> {
        self.get(ASSET_SETTLEMENT_RECORD, params, true).await
    }

    /// Fetches USDC settlement records across up to `max_pages` pages.
    pub async fn http_get_usdc_contract_settlement_all(
        &self,
        params: &Params,
        max_pages: NonZeroU32,
    ) -> Result<Vec<Value>, RestError> {
        self.get_all(ASSET_SETTLEMENT_RECORD, params, true, max_pages)
            .await
    }

    /// Fetches the balance of a single coin (`accountType`, `coin`).
    ///
    /// # References
    ///
    /// - <https://bybit-exchange.github.io/docs/v5/asset/balance/account-coin-balance>
    pub async fn http_get_coin_balance(&self, params: &Params) -> Result<Value, RestError> {
        self.get(ASSET_ACCOUNT_COIN_BALANCE, params, true).await
    }

    /// Fetches coin balances across up to `max_pages` pages.
    pub async fn http_get_coin_balance_all(
        &self,
        params: &Params,
        max_pages: NonZeroU32,
    ) -> Result<Vec<Value>, RestError> {
        self.get_all(ASSET_ACCOUNT_COIN_BALANCE, params, true, max_pages)
            .await
    }

    /// Fetches the coins transferable between two account types.
    ///
    /// # References
    ///
    /// - <https://bybit-exchange.github.io/docs/v5/asset/transfer/transferable-coin>
    pub async fn http_get_transferable_coins(&self, params: &Params) -> Result<Value, RestError> {
        self.get(ASSET_TRANSFER_COIN_LIST, params, true).await
    }

    /// Fetches transferable coins across up to `max_pages` pages.
    pub async fn http_get_transferable_coins_all(
        &self,
        params: &Params,
        max_pages: NonZeroU32,
    ) -> Result<Vec<Value>, RestError> {
        self.get_all(ASSET_TRANSFER_COIN_LIST, params, true, max_pages)
            .await
    }

    /// Transfers funds between account types of the same UID.
    ///
    /// # References
    ///
    /// - <https://bybit-exchange.github.io/docs/v5/asset/transfer/create-inter-transfer>
    pub async fn http_create_internal_transfer(
        &self,
        params: &Params,
    ) -> Result<Value, RestError> {
        self.post(ASSET_INTER_TRANSFER, params).await
    }

    /// Fetches internal transfer records.
    ///
    /// # References
    ///
    /// - <https://bybit-exchange.github.io/docs/v5/asset/transfer/inter-transfer-list>
    pub async fn http_get_internal_transfer_records(
        &self,
        params: &Params,
    ) -> Result<Value, RestError> {
        self.get(ASSET_INTER_TRANSFER_LIST, params, true).await
    }

    /// Fetches internal transfer records across up to `max_pages` pages.
    pub async fn http_get_internal_transfer_records_all(
        &self,
        params: &Params,
        max_pages: NonZeroU32,
    ) -> Result<Vec<Value>, RestError> {
        self.get_all(ASSET_INTER_TRANSFER_LIST, params, true, max_pages)
            .await
    }

    // =========================================================================
    // Spot margin
    // =========================================================================

    /// Fetches VIP margin data (public).
    ///
    /// # References
    ///
    /// - <https://bybit-exchange.github.io/docs/v5/spot-margin-uta/vip-margin>
    pub async fn http_get_vip_margin_data(&self, params: &Params) -> Result<Value, RestError> {
        self.get(SPOT_MARGIN_DATA, params, false).await
    }

    /// Turns spot margin trading on or off (`spotMarginMode` = `"1"` | `"0"`).
    ///
    /// # References
    ///
    /// - <https://bybit-exchange.github.io/docs/v5/spot-margin-uta/switch-mode>
    pub async fn http_toggle_margin_trade(&self, params: &Params) -> Result<Value, RestError> {
        self.post(SPOT_MARGIN_SWITCH_MODE, params).await
    }

    /// Sets the spot margin leverage.
    ///
    /// # References
    ///
    /// - <https://bybit-exchange.github.io/docs/v5/spot-margin-uta/set-leverage>
    pub async fn http_set_spot_margin_leverage(
        &self,
        params: &Params,
    ) -> Result<Value, RestError> {
        self.post(SPOT_MARGIN_SET_LEVERAGE, params).await
    }

    /// Fetches the spot margin status and leverage.
    ///
    /// # References
    ///
    /// - <https://bybit-exchange.github.io/docs/v5/spot-margin-uta/status>
    pub async fn http_get_spot_margin_state(&self) -> Result<Value, RestError> {
        self.get(SPOT_MARGIN_STATE, &Params::new(), true).await
    }

    /// Fetches borrowable coins for crypto loans (public).
    ///
    /// # References
    ///
    /// - <https://bybit-exchange.github.io/docs/v5/crypto-loan/loan-coin>
    pub async fn http_get_borrowable_coins(&self, params: &Params) -> Result<Value, RestError> {
        self.get(CRYPTO_LOAN_LOANABLE_DATA, params, false).await
    }

    /// Fetches collateral coins for crypto loans (public).
    ///
    /// # References
    ///
    /// - <https://bybit-exchange.github.io/docs/v5/crypto-loan/collateral-coin>
    pub async fn http_get_collateral_coins(&self, params: &Params) -> Result<Value, RestError> {
        self.get(CRYPTO_LOAN_COLLATERAL_DATA, params, false).await
    }

    /// Fetches the account borrowable and collateralizable limits (`loanCurrency`,
    /// `collateralCurrency`).
    ///
    /// # References
    ///
    /// - <https://bybit-exchange.github.io/docs/v5/crypto-loan/acct-borrow-collateral>
    pub async fn http_get_borrow_collateral_limit(
        &self,
        params: &Params,
    ) -> Result<Value, RestError> {
        self.get(CRYPTO_LOAN_BORROWABLE_COLLATERALISABLE, params, true)
            .await
    }

    /// Fetches unpaid loan orders.
    ///
    /// # References
    ///
    /// - <https://bybit-exchange.github.io/docs/v5/crypto-loan/unpaid-loan-order>
    pub async fn http_get_unpaid_loan_orders(&self, params: &Params) -> Result<Value, RestError> {
        self.get(CRYPTO_LOAN_ONGOING_ORDERS, params, true).await
    }

    /// Borrows against collateral.
    ///
    /// # References
    ///
    /// - <https://bybit-exchange.github.io/docs/v5/crypto-loan/borrow>
    pub async fn http_borrow(&self, params: &Params) -> Result<Value, RestError> {
        self.post(CRYPTO_LOAN_BORROW, params).await
    }

    /// Repays a loan order.
    ///
    /// # References
    ///
    /// - <https://bybit-exchange.github.io/docs/v5/crypto-loan/repay>
    pub async fn http_repay(&self, params: &Params) -> Result<Value, RestError> {
        self.post(CRYPTO_LOAN_REPAY, params).await
    }

    /// Fetches completed loan orders.
    ///
    /// # References
    ///
    /// - <https://bybit-exchange.github.io/docs/v5/crypto-loan/comleted-loan-order>
    pub async fn http_get_loan_order_history(&self, params: &Params) -> Result<Value, RestError> {
        self.get(CRYPTO_LOAN_BORROW_HISTORY, params, true).await
    }

    /// Fetches completed loan orders across up to `max_pages` pages.
    pub async fn http_get_loan_order_history_all(
        &self,
        params: &Params,
        max_pages: NonZeroU32,
    ) -> Result<Vec<Value>, RestError> {
        self.get_all(CRYPTO_LOAN_BORROW_HISTORY, params, true, max_pages)
            .await
    }

    /// Fetches loan repayment transactions.
    ///
    /// # References
    ///
    /// - <https://bybit-exchange.github.io/docs/v5/crypto-loan/repay-transaction>
    pub async fn http_get_repayment_history(&self, params: &Params) -> Result<Value, RestError> {
        self.get(CRYPTO_LOAN_REPAYMENT_HISTORY, params, true).await
    }

    /// Fetches repayment transactions across up to `max_pages` pages.
    pub async fn http_get_repayment_history_all(
        &self,
        params: &Params,
        max_pages: NonZeroU32,
    ) -> Result<Vec<Value>, RestError> {
        self.get_all(CRYPTO_LOAN_REPAYMENT_HISTORY, params, true, max_pages)
            .await
    }

    /// Fetches the maximum collateral that can be withdrawn from a loan (`orderId`).
    ///
    /// # References
    ///
    /// - <https://bybit-exchange.github.io/docs/v5/crypto-loan/reduce-max-collateral-amt>
    pub async fn http_get_max_reduction_collateral_amount(
        &self,
        params: &Params,
    ) -> Result<Value, RestError> {
        self.get(CRYPTO_LOAN_MAX_COLLATERAL_AMOUNT, params, true)
            .await
    }

    /// Adds or removes collateral on a loan (`orderId`, `amount`, `direction`).
    ///
    /// # References
    ///
    /// - <https://bybit-exchange.github.io/docs/v5/crypto-loan/adjust-collateral>
    pub async fn http_adjust_collateral_amount(
        &self,
        params: &Params,
    ) -> Result<Value, RestError> {
        self.post(CRYPTO_LOAN_ADJUST_LTV, params).await
    }

    /// Fetches collateral adjustment history.
    ///
    /// # References
    ///
    /// - <https://bybit-exchange.github.io/docs/v5/crypto-loan/ltv-adjust-history>
    pub async fn http_get_loan_adjustment_history(
        &self,
        params: &Params,
    ) -> Result<Value, RestError> {
        self.get(CRYPTO_LOAN_ADJUSTMENT_HISTORY, params, true).await
    }

    /// Fetches collateral adjustment history across up to `max_pages` pages.
    pub async fn http_get_loan_adjustment_history_all(
        &self,
        params: &Params,
        max_pages: NonZeroU32,
    ) -> Result<Vec<Value>, RestError> {
        self.get_all(CRYPTO_LOAN_ADJUSTMENT_HISTORY, params, true, max_pages)
            .await
    }
}

/// Extracts `result.list` and the non-empty `result.nextPageCursor` from a page envelope.
fn parse_cursor_page<T: DeserializeOwned>(body: Value) -> Result<Page<T, String>, RestError> {
    let response: BybitCursorListResponse<T> = serde_json::from_value(body)?;
    let next_cursor = response.result.next_cursor().map(str::to_string);
    Ok(Page::new(response.result.list, next_cursor))
}

////////////////////////////////////////////////////////////////////////////////
// Tests
////////////////////////////////////////////////////////////////////////////////

#[cfg(test)]
mod tests {
    use rstest::rstest;
    use serde_json::json;

    use super::*;

    #[rstest]
    fn test_parse_cursor_page() {
        let page: Page<Value, String> = parse_cursor_page(json!({
            "retCode": 0,
            "retMsg": "OK",
            "result": {"list": [{"id": 1}, {"id": 2}], "nextPageCursor": "c2"}
        }))
        .unwrap();
        assert_eq!(page.items.len(), 2);
        assert_eq!(page.next_cursor.as_deref(), Some("c2"));
    }

    #[rstest]
    fn test_parse_cursor_page_last() {
        let page: Page<Value, String> = parse_cursor_page(json!({
            "retCode": 0,
            "retMsg": "OK",
            "result": {"list": [], "nextPageCursor": ""}
        }))
        .unwrap();
        assert!(page.items.is_empty());
        assert_eq!(page.next_cursor, None);
    }

    #[rstest]
    fn test_parse_cursor_page_rejects_missing_result() {
        let result: Result<Page<Value, String>, _> =
            parse_cursor_page(json!({"retCode": 0, "retMsg": "OK"}));
        assert!(matches!(result, Err(RestError::Serialization(_))));
    }

    #[rstest]
    fn test_client_without_credentials() {
        let client = BybitHttpClient::new(&BybitHttpConfig::default()).unwrap();
        assert_eq!(client.base_url(), "https://api.bybit.com");
        assert_eq!(client.recv_window_ms(), 5_000);
    }
}
