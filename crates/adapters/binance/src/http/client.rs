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


//! Binance spot and margin HTTP client.

use std::{num::NonZeroU32, sync::Arc};

use kestrel_rest::{
    Page, Params, RequestSpec, RestClient, RestError, fetch_all_pages, request::ParamLocation,
};
use serde::de::DeserializeOwned;

use super::{
    endpoints::{
        ACCOUNT, ISOLATED_MARGIN_DATA, ISOLATED_MARGIN_TIER, KLINES, OPEN_ORDERS, ORDER,
        SERVER_TIME,
    },
    models::{
        BinanceAccountInfo, BinanceIsolatedMarginData, BinanceIsolatedMarginTier, BinanceKline,
        BinanceOrder, BinanceServerTime,
    },
    query::{BinanceCancelOrderParams, BinanceKlinesParams, BinanceNewOrderParams},
};
use crate::{
    common::{
        consts::BINANCE_KLINES_DEFAULT_LIMIT,
        signer::{BinanceSigner, BinanceValidator},
        urls::binance_http_base_url,
    },
    config::BinanceHttpConfig,
};

/// Provides a HTTP client for connecting to the [Binance](https://binance.com) REST API.
#[derive(Clone, Debug)]
pub struct BinanceHttpClient {
    inner: Arc<RestClient>,
}

impl BinanceHttpClient {
    /// Creates a new [`BinanceHttpClient`] from `config`.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be created.
    pub fn new(config: &BinanceHttpConfig) -> Result<Self, RestError> {
        let inner = RestClient::from_config(
            &config.rest,
            binance_http_base_url(config.environment()),
            config.credential(),
            Arc::new(BinanceSigner::new(config.recv_window_ms)),
            Arc::new(BinanceValidator),
        )?;

        Ok(Self {
            inner: Arc::new(inner),
        })
    }

    /// Returns the base URL used for requests.
    #[must_use]
    pub fn base_url(&self) -> &str {
        self.inner.base_url()
    }

    /// Returns true if the client can call signed endpoints.
    #[must_use]
    pub fn has_credential(&self) -> bool {
        self.inner.has_credential()
    }

    async fn signed<T: DeserializeOwned>(
        &self,
        spec: RequestSpec,
    ) -> Result<T, RestError> {
        let spec = spec
            .authenticated()
            .with_param_location(ParamLocation::Query);
        self.inner.send_json(spec).await
    }

    // =========================================================================
    // Market data
    // =========================================================================

    /// Fetches the server time.
    ///
    /// # References
    ///
    /// - <https://developers.binance.com/docs/binance-spot-api-docs/rest-api/general-endpoints>
    pub async fn http_get_server_time(&self) -> Result<BinanceServerTime, RestError> {
        self.inner
            .send_json(RequestSpec::get(SERVER_TIME, Params::new()))
            .await
    }

    /// Fetches one page of klines.
    ///
    /// # References
    ///
    /// - <https://developers.binance.com/docs/binance-spot-api-docs/rest-api/market-data-endpoints>
    pub async fn http_get_klines(
        &self,
        params: &BinanceKlinesParams,
    ) -> Result<Vec<BinanceKline>, RestError> {
        let params = Params::from_serializable(params)?;
        self.inner.send_json(RequestSpec::get(KLINES, params)).await
    }

    /// Fetches klines from `start_time` forwards across up to `max_pages` pages.
    ///
    /// Each following page starts one millisecond after the last open time seen. The walk ends
    /// on a page shorter than `limit` or once `end_time` has been passed.
    pub async fn http_get_klines_all(
        &self,
        params: &BinanceKlinesParams,
        max_pages: NonZeroU32,
    ) -> Result<Vec<BinanceKline>, RestError> {
        let base = Params::from_serializable(params)?;
        let limit = params.limit.unwrap_or(BINANCE_KLINES_DEFAULT_LIMIT) as usize;
        let end_time = params.end_time;
        let inner = &self.inner;
        let base = &base;
        tracing::debug!(
            symbol = %params.symbol,
            interval = %params.interval,
            limit,
            "Fetching kline range"
        );

        fetch_all_pages(
            move |start_time: Option<i64>| {
                let mut page_params = base.clone();
                if let Some(start_time) = start_time {
                    page_params.set("startTime", start_time);
                }
                let spec = RequestSpec::get(KLINES, page_params);
                async move {
                    let klines: Vec<BinanceKline> = inner.send_json(spec).await?;
                    Ok(klines_page(klines, limit, end_time))
                }
            },
            params.start_time,
            max_pages,
        )
        .await
    }

    // =========================================================================
    // Account and trading
    // =========================================================================

    /// Fetches account information and balances.
    ///
    /// # References
    ///
    /// - <https://developers.binance.com/docs/binance-spot-api-docs/rest-api/account-endpoints>
    pub async fn http_get_account(&self) -> Result<BinanceAccountInfo, RestError> {
        self.signed(RequestSpec::get(ACCOUNT, Params::new())).await
    }

    /// Places a new order.
    ///
    /// # References
    ///
    /// - <https://developers.binance.com/docs/binance-spot-api-docs/rest-api/trading-endpoints>
    pub async fn http_new_order(
        &self,
        params: &BinanceNewOrderParams,
    ) -> Result<BinanceOrder, RestError> {
        let params = Params::from_serializable(params)?;
        self.signed(RequestSpec::post(ORDER, params)).await
    }

    /// Cancels an active order.
    pub async fn http_cancel_order(
        &self,
        params: &BinanceCancelOrderParams,
    ) -> Result<BinanceOrder, RestError> {
        let params = Params::from_serializable(params)?;
        self.signed(RequestSpec::delete(ORDER, params)).await
    }

    /// Fetches open orders, for one symbol or across all symbols.
    pub async fn http_get_open_orders(
        &self,
        symbol: Option<&str>,
    ) -> Result<Vec<BinanceOrder>, RestError> {
        let params = Params::new().with_opt("symbol", symbol);
        self.signed(RequestSpec::get(OPEN_ORDERS, params)).await
    }

    // =========================================================================
    // Isolated margin
    // =========================================================================

    /// Fetches isolated margin interest and borrow limits for a VIP level.
    ///
    /// # References
    ///
    /// - <https://developers.binance.com/docs/margin_trading/account/Query-Isolated-Margin-Fee-Data>
    pub async fn http_get_isolated_margin_data(
        &self,
        symbol: Option<&str>,
        vip_level: Option<u32>,
    ) -> Result<Vec<BinanceIsolatedMarginData>, RestError> {
        let params = Params::new()
            .with_opt("vipLevel", vip_level)
            .with_opt("symbol", symbol);
        self.signed(RequestSpec::get(ISOLATED_MARGIN_DATA, params))
            .await
    }

    /// Fetches isolated margin tiers, including the liquidation risk ratio.
    ///
    /// # References
    ///
    /// - <https://developers.binance.com/docs/margin_trading/market-data/Query-Isolated-Margin-Tier-Data>
    pub async fn http_get_isolated_margin_tier(
        &self,
        symbol: &str,
        tier: Option<u32>,
    ) -> Result<Vec<BinanceIsolatedMarginTier>, RestError> {
        let params = Params::new()
            .with("symbol", symbol)
            .with_opt("tier", tier);
        self.signed(RequestSpec::get(ISOLATED_MARGIN_TIER, params))
            .await
    }
}

fn klines_page(
    klines: Vec<BinanceKline>,
    limit: usize,
    end_time: Option<i64>,
) -> Page<BinanceKline, i64> {
    let next_start = match klines.last() {
        Some(last) if klines.len() >= limit => last.open_time + 1,
        _ => return Page::last(klines),
    };

    if end_time.is_some_and(|end| next_start > end) {
        return Page::last(klines);
    }
    Page::new(klines, Some(next_start))
}

////////////////////////////////////////////////////////////////////////////////
// Tests
////////////////////////////////////////////////////////////////////////////////

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    fn kline(open_time: i64) -> BinanceKline {
        BinanceKline {
            open_time,
            open: "1".to_string(),
            high: "1".to_string(),
            low: "1".to_string(),
            close: "1".to_string(),
            volume: "0".to_string(),
            close_time: open_time + 59_999,
            quote_volume: "0".to_string(),
            trade_count: 0,
            taker_buy_base_volume: "0".to_string(),
            taker_buy_quote_volume: "0".to_string(),
        }
    }

    #[rstest]
    fn test_full_page_continues_after_last_open() {
        let page = klines_page(vec![kline(0), kline(60_000)], 2, None);
        assert_eq!(page.next_cursor, Some(60_001));
    }

    #[rstest]
    fn test_short_page_is_last() {
        let page = klines_page(vec![kline(0)], 2, None);
        assert_eq!(page.next_cursor, None);
        assert_eq!(klines_page(Vec::new(), 2, None).next_cursor, None);
    }

    #[rstest]
    fn test_page_past_end_time_is_last() {
        let page = klines_page(vec![kline(0), kline(60_000)], 2, Some(60_000));
        assert_eq!(page.next_cursor, None);
        assert_eq!(page.items.len(), 2);
    }
}
