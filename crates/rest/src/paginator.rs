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

//! Sequential cursor pagination.
//!
//! [`fetch_all_pages`] calls a page-fetch function repeatedly, feeding each call the cursor returned
//! by the previous page, and concatenates the items in fetch order. It stops when a page returns no
//! cursor or when `max_pages` pages have been fetched. An empty page that still carries a cursor
//! does not stop the walk. A page that returns the cursor it was fetched with would loop forever,
//! so it fails with [`RestError::PaginationStalled`] instead.

use std::{fmt::Display, future::Future, num::NonZeroU32};

use crate::error::RestError;

/// One page of results plus the cursor for the next page.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Page<T, C> {
    /// The items in exchange order.
    pub items: Vec<T>,
    /// The cursor for the next page, `None` when this is the last page.
    pub next_cursor: Option<C>,
}

impl<T, C> Page<T, C> {
    /// Creates a new [`Page`].
    #[must_use]
    pub const fn new(items: Vec<T>, next_cursor: Option<C>) -> Self {
        Self { items, next_cursor }
    }

    /// Creates a final page with no further cursor.
    #[must_use]
    pub const fn last(items: Vec<T>) -> Self {
        Self {
            items,
            next_cursor: None,
        }
    }
}

/// Fetches pages sequentially and returns all items in fetch order.
///
/// `fetch` receives `None` for the first page unless `initial_cursor` is provided.
///
/// # Errors
///
/// Returns the first error raised by `fetch`, or [`RestError::PaginationStalled`] when a page
/// returns the cursor that was used to fetch it.
pub async fn fetch_all_pages<T, C, F, Fut>(
    mut fetch: F,
    initial_cursor: Option<C>,
    max_pages: NonZeroU32,
) -> Result<Vec<T>, RestError>
where
    C: Clone + PartialEq + Display,
    F: FnMut(Option<C>) -> Fut,
    Fut: Future<Output = Result<Page<T, C>, RestError>>,
{
    let mut items = Vec::new();
    let mut cursor = initial_cursor;
    let mut pages_fetched: u32 = 0;

    loop {
        let page = fetch(cursor.clone()).await?;
        pages_fetched += 1;

        tracing::debug!(
            page = pages_fetched,
            items = page.items.len(),
            has_next = page.next_cursor.is_some(),
            "Fetched page"
        );
        items.extend(page.items);

        let Some(next_cursor) = page.next_cursor else {
            break;
        };

        if cursor.as_ref() == Some(&next_cursor) {
            tracing::warn!(
                cursor = %next_cursor,
                pages_fetched,
                "Pagination stalled on repeated cursor"
            );
            return Err(RestError::PaginationStalled {
                cursor: next_cursor.to_string(),
                pages_fetched,
            });
        }

        if pages_fetched >= max_pages.get() {
            tracing::debug!(max_pages = max_pages.get(), "Reached page ceiling");
            break;
        }

        cursor = Some(next_cursor);
    }

    Ok(items)
}

////////////////////////////////////////////////////////////////////////////////
// Tests
////////////////////////////////////////////////////////////////////////////////
