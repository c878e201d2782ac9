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

//! Core utilities shared by the Kestrel exchange clients.
//!
//! The `kestrel-core` crate holds the small pieces every other crate in the workspace depends on:
//!
//! - A monotonic, strictly increasing nonce clock used to stamp signed requests.
//! - Environment variable helpers used by configuration loading.
//! - Logging initialization for binaries.
//! - Shared constants such as the HTTP user agent.

#![warn(rustc::all)]
#![deny(unsafe_code)]
#![deny(nonstandard_style)]
#![deny(missing_debug_implementations)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod consts;
pub mod env;
pub mod logging;
pub mod time;

pub use crate::time::AtomicNonce;
