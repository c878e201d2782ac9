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


//! FTX HTTP client.
//!
//! Typed methods unwrap the `result` field of the response envelope. Order history can be walked
//! backwards in time with [`FtxHttpClient::http_get_order_history_all`].

use std::{collections::HashSet, num::NonZeroU32, sync::Arc};

use kestrel_rest::{Page, Params, RequestSpec, RestClient, RestError, fetch_all_pages};
use serde::de::DeserializeOwned;
use serde_json::Value;

use super::{
    endpoints::{MARKETS, ORDERS, ORDERS_HISTORY, WALLET_BALANCES, order_path, orderbook_path},
    models::{FtxBalance, FtxMarket, FtxOrder, FtxOrderbook, FtxResponse},
    query::{FtxOrderHistoryParams, FtxPlaceOrderParams},
};
use crate::{
    common::{
        consts::{FTX_END_TIME_PARAM, FTX_HTTP_URL},
        signer::{FtxSigner, FtxValidator},
    },
    config::FtxHttpConfig,
};

/// Provides a HTTP client for connecting to the FTX REST API.
#[derive(Clone, Debug)]
pub struct FtxHttpClient {
    inner: Arc<RestClient>,
}

impl FtxHttpClient {
    /// Creates a new [`FtxHttpClient`] from `config`.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be created.
    pub fn new(config: &FtxHttpConfig) -> Result<Self, RestError> {
        let inner = RestClient::from_config(
            &config.rest,
            FTX_HTTP_URL,
            config.credential(),
            Arc::new(FtxSigner),
            Arc::new(FtxValidator),
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

    /// Returns true if the client can call authenticated endpoints.
    #[must_use]
    pub fn has_credential(&self) -> bool {
        self.inner.has_credential()
    }

    async fn send_result<T: DeserializeOwned>(&self, spec: RequestSpec) -> Result<T, RestError> {
        let response: FtxResponse<T> = self.inner.send_json(spec).await?;
        Ok(response.result)
    }

    /// Fetches all markets.
    ///
    /// # References
    ///
    /// - <https://docs.ftx.com/#get-markets>
    pub async fn http_get_markets(&self) -> Result<Vec<FtxMarket>, RestError> {
        self.send_result(RequestSpec::get(MARKETS, Params::new()))
            .await
    }

    /// Fetches the order book for `market`, `depth` levels per side.
    ///
    /// # References
    ///
    /// - <https://docs.ftx.com/#get-orderbook>
    pub async fn http_get_orderbook(
        &self,
        market: &str,
        depth: Option<u32>,
    ) -> Result<FtxOrderbook, RestError> {
        let params = Params::new().with_opt("depth", depth);
        self.send_result(RequestSpec::get(orderbook_path(market), params))
            .await
    }

    /// Fetches wallet balances.
    ///
    /// # References
    ///
    /// - <https://docs.ftx.com/#get-balances>
    pub async fn http_get_balances(&self) -> Result<Vec<FtxBalance>, RestError> {
        self.send_result(RequestSpec::get(WALLET_BALANCES, Params::new()).authenticated())
            .await
    }

    /// Places an order.
    ///
    /// # References
    ///
    /// - <https://docs.ftx.com/#place-order>
    pub async fn http_place_order(
        &self,
        params: &FtxPlaceOrderParams,
    ) -> Result<FtxOrder, RestError> {
        let params = Params::from_serializable(params)?;
        self.send_result(RequestSpec::post(ORDERS, params).authenticated())
            .await
    }

    /// Fetches open orders, optionally for one market.
    ///
    /// # References
    ///
    /// - <https://docs.ftx.com/#get-open-orders>
    pub async fn http_get_open_orders(
        &self,
        market: Option<&str>,
    ) -> Result<Vec<FtxOrder>, RestError> {
        let params = Params::new().with_opt("market", market);
        self.send_result(RequestSpec::get(ORDERS, params).authenticated())
            .await
    }

    /// Fetches a single order by id.
    ///
    /// # References
    ///
    /// - <https://docs.ftx.com/#get-order-status>
    pub async fn http_get_order_status(&self, order_id: u64) -> Result<FtxOrder, RestError> {
        self.send_result(RequestSpec::get(order_path(order_id), Params::new()).authenticated())
            .await
    }

    /// Requests cancellation of an order and returns the exchange acknowledgement.
    ///
    /// # References
    ///
    /// - <https://docs.ftx.com/#cancel-order>
    pub async fn http_cancel_order(&self, order_id: u64) -> Result<String, RestError> {
        self.send_result(RequestSpec::delete(order_path(order_id), Params::new()).authenticated())
            .await
    }

    /// Fetches one page of order history, newest first.
    ///
    /// Returns the envelope so callers can read `has_more_data`.
    ///
    /// # References
    ///
    /// - <https://docs.ftx.com/#get-order-history>
    pub async fn http_get_order_history(
        &self,
        params: &FtxOrderHistoryParams,
    ) -> Result<FtxResponse<Vec<FtxOrder>>, RestError> {
        let params = Params::from_serializable(params)?;
        self.inner
            .send_json(RequestSpec::get(ORDERS_HISTORY, params).authenticated())
            .await
    }

    /// Walks order history backwards in time while the exchange reports more data.
    ///
    /// Each following page ends at the oldest `createdAt` seen so far. The end time is inclusive,
    /// so orders from that second are requested again and repeats are dropped by `id`.
    ///
    /// # Errors
    ///
    /// Returns [`RestError::PaginationStalled`] if a page cannot move the end time backwards.
    pub async fn http_get_order_history_all(
        &self,
        params: &FtxOrderHistoryParams,
        max_pages: NonZeroU32,
    ) -> Result<Vec<FtxOrder>, RestError> {
        let base = Params::from_serializable(params)?;
        let inner = &self.inner;
        let base = &base;
        tracing::debug!(max_pages = max_pages.get(), "Walking order history");

        let orders = fetch_all_pages(
            move |end_time: Option<i64>| {
                let mut page_params = base.clone();
                if let Some(end_time) = end_time {
                    page_params.set(FTX_END_TIME_PARAM, end_time);
                }
                let spec = RequestSpec::get(ORDERS_HISTORY, page_params).authenticated();
                async move { history_page(inner.send(spec).await?) }
            },
            params.end_time,
            max_pages,
        )
        .await?;
        Ok(dedup_orders(orders))
    }
}

fn history_page(body: Value) -> Result<Page<FtxOrder, i64>, RestError> {
    let response: FtxResponse<Vec<FtxOrder>> = serde_json::from_value(body)?;
    if !response.has_more_data {
        return Ok(Page::last(response.result));
    }

    let oldest = response
        .result
        .iter()
        .map(|order| order.created_at.timestamp())
        .min();
    Ok(Page::new(response.result, oldest))
}

/// Keeps the first occurrence of each order id, preserving order.
fn dedup_orders(mut orders: Vec<FtxOrder>) -> Vec<FtxOrder> {
    let mut seen = HashSet::with_capacity(orders.len());
    orders.retain(|order| seen.insert(order.id));
    orders
}

////////////////////////////////////////////////////////////////////////////////
// Tests
////////////////////////////////////////////////////////////////////////////////

#[cfg(test)]
mod tests {
    use rstest::rstest;
    use serde_json::json;

    use super::*;

    fn order(id: u64, created_at: &str) -> Value {
        json!({
            "id": id,
            "market": "BTC/USD",
            "type": "limit",
            "side": "buy",
            "price": 20000.0,
            "size": 0.1,
            "filledSize": 0.1,
            "status": "closed",
            "createdAt": created_at
        })
    }

    #[rstest]
    fn test_history_page_uses_oldest_created_at() {
        let page = history_page(json!({
            "success": true,
            "hasMoreData": true,
            "result": [
                order(2, "2020-09-13T12:26:45+00:00"),
                order(1, "2020-09-13T12:26:40+00:00")
            ]
        }))
        .unwrap();

        assert_eq!(page.items.len(), 2);
        assert_eq!(page.next_cursor, Some(1_600_000_000));
    }

    #[rstest]
    fn test_history_page_without_more_data_is_last() {
        let page = history_page(json!({
            "success": true,
            "hasMoreData": false,
            "result": [order(1, "2020-09-13T12:26:40+00:00")]
        }))
        .unwrap();

        assert_eq!(page.next_cursor, None);
    }

    #[rstest]
    fn test_dedup_orders_keeps_first_occurrence() {
        let orders: Vec<FtxOrder> = serde_json::from_value(json!([
            order(3, "2020-09-13T12:28:20+00:00"),
            order(2, "2020-09-13T12:27:30+00:00"),
            order(2, "2020-09-13T12:27:30+00:00"),
            order(1, "2020-09-13T12:26:50+00:00")
        ]))
        .unwrap();

        let ids: Vec<u64> = dedup_orders(orders).iter().map(|o| o.id).collect();

        assert_eq!(ids, vec![3, 2, 1]);
    }
}
