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

//! The request model, from an endpoint call to the exact bytes on the wire.
//!
//! A [`RequestSpec`] is built per call. [`RequestSpec::prepare`] encodes its parameters exactly once
//! into a [`PreparedRequest`]; signers sign the strings it holds and the dispatcher sends those same
//! strings. A [`SignedRequest`] adds the nonce, signature and headers and is never reused.

use std::collections::HashMap;

use kestrel_network::http::Method;

use crate::{error::RestError, params::Params};

/// What to send when a body-carrying request has no parameters.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum EmptyBodyPolicy {
    /// POST sends `{}`, every other method sends no body.
    #[default]
    MethodDefault,
    /// Always send `{}`.
    EmptyObject,
    /// Never send a body.
    Omit,
}

/// Where the parameters of a request are encoded.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ParamLocation {
    /// Query string for GET, JSON body for every other method.
    #[default]
    MethodDefault,
    /// Always the query string.
    Query,
    /// Always the JSON body.
    Body,
}

/// A logical request against one endpoint.
#[derive(Clone, Debug)]
pub struct RequestSpec {
    /// The HTTP method.
    pub method: Method,
    /// The endpoint path relative to the base URL, starting with `/`.
    pub path: String,
    /// The request parameters.
    pub params: Params,
    /// Whether the request must be signed.
    pub requires_auth: bool,
    /// Per-request transport timeout override in seconds.
    pub timeout_secs: Option<u64>,
    /// Body policy when `params` is empty.
    pub empty_body: EmptyBodyPolicy,
    /// Where `params` are encoded.
    pub param_location: ParamLocation,
}

impl RequestSpec {
    /// Creates a new [`RequestSpec`] with default policies and no authentication.
    #[must_use]
    pub fn new(method: Method, path: impl Into<String>, params: Params) -> Self {
        Self {
            method,
            path: path.into(),
            params,
            requires_auth: false,
            timeout_secs: None,
            empty_body: EmptyBodyPolicy::default(),
            param_location: ParamLocation::default(),
        }
    }

    /// Creates a GET request.
    #[must_use]
    pub fn get(path: impl Into<String>, params: Params) -> Self {
        Self::new(Method::GET, path, params)
    }

    /// Creates a POST request.
    #[must_use]
    pub fn post(path: impl Into<String>, params: Params) -> Self {
        Self::new(Method::POST, path, params)
    }

    /// Creates a DELETE request.
    #[must_use]
    pub fn delete(path: impl Into<String>, params: Params) -> Self {
        Self::new(Method::DELETE, path, params)
    }

    /// Marks this request as requiring a signature.
    #[must_use]
    pub fn authenticated(mut self) -> Self {
        self.requires_auth = true;
        self
    }

    /// Sets whether this request requires a signature.
    #[must_use]
    pub fn with_auth(mut self, requires_auth: bool) -> Self {
        self.requires_auth = requires_auth;
        self
    }

    /// Overrides the transport timeout for this request.
    #[must_use]
    pub fn with_timeout_secs(mut self, timeout_secs: Option<u64>) -> Self {
        self.timeout_secs = timeout_secs;
        self
    }

    /// Sets the empty body policy.
    #[must_use]
    pub fn with_empty_body(mut self, policy: EmptyBodyPolicy) -> Self {
        self.empty_body = policy;
        self
    }

    /// Sets where parameters are encoded.
    #[must_use]
    pub fn with_param_location(mut self, location: ParamLocation) -> Self {
        self.param_location = location;
        self
    }

    /// Encodes this request into its wire form.
    ///
    /// # Errors
    ///
    /// Returns [`RestError::InvalidRequest`] if the path is not absolute, or
    /// [`RestError::Serialization`] if the parameters cannot be encoded.
    pub fn prepare(&self) -> Result<PreparedRequest, RestError> {
        if !self.path.starts_with('/') {
            return Err(RestError::InvalidRequest(format!(
                "path must start with '/', was '{}'",
                self.path
            )));
        }

        let in_query = match self.param_location {
            ParamLocation::Query => true,
            ParamLocation::Body => false,
            ParamLocation::MethodDefault => self.method == Method::GET,
        };

        let (query, body) = if in_query {
            (self.params.to_query_string()?, self.empty_body_for_query())
        } else if self.params.is_empty() {
            (String::new(), self.empty_body())
        } else {
            (String::new(), Some(self.params.to_json_body()?))
        };

        Ok(PreparedRequest {
            method: self.method.clone(),
            path: self.path.clone(),
            query,
            body,
            timeout_secs: self.timeout_secs,
        })
    }

    fn empty_body(&self) -> Option<String> {
        match self.empty_body {
            EmptyBodyPolicy::EmptyObject => Some("{}".to_string()),
            EmptyBodyPolicy::Omit => None,
            EmptyBodyPolicy::MethodDefault => {
                (self.method == Method::POST).then(|| "{}".to_string())
            }
        }
    }

    fn empty_body_for_query(&self) -> Option<String> {
        // Query-encoded requests only carry a body when explicitly asked to
        match self.empty_body {
            EmptyBodyPolicy::EmptyObject => Some("{}".to_string()),
            EmptyBodyPolicy::MethodDefault | EmptyBodyPolicy::Omit => None,
        }
    }
}

/// A request encoded to its exact wire form.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PreparedRequest {
    /// The HTTP method.
    pub method: Method,
    /// The endpoint path, starting with `/`.
    pub path: String,
    /// The encoded query string without the leading `?` (may be empty).
    pub query: String,
    /// The encoded body, if any.
    pub body: Option<String>,
    /// Per-request transport timeout override in seconds.
    pub timeout_secs: Option<u64>,
}

impl PreparedRequest {
    /// Returns the path followed by `?query` when the query is non-empty.
    #[must_use]
    pub fn path_with_query(&self) -> String {
        if self.query.is_empty() {
            self.path.clone()
        } else {
            format!("{}?{}", self.path, self.query)
        }
    }

    /// Returns the body, or an empty string when there is none.
    #[must_use]
    pub fn body_str(&self) -> &str {
        self.body.as_deref().unwrap_or_default()
    }

    /// Appends `key=value` to the query string, form-urlencoding both.
    ///
    /// # Errors
    ///
    /// Returns [`RestError::Serialization`] if encoding fails.
    pub fn append_query(&mut self, key: &str, value: &str) -> Result<(), RestError> {
        let pairs = [(key, value)];
        let pair = serde_urlencoded::to_string(&pairs[..])
            .map_err(|e| RestError::Serialization(format!("failed to encode query: {e}")))?;
        if self.query.is_empty() {
            self.query = pair;
        } else {
            self.query.push('&');
            self.query.push_str(&pair);
        }
        Ok(())
    }
}

/// A prepared request plus its authentication material.
#[derive(Clone, Debug)]
pub struct SignedRequest {
    /// The wire form that was signed.
    pub request: PreparedRequest,
    /// The nonce or timestamp (milliseconds) covered by the signature, zero if unsigned.
    pub timestamp: u64,
    /// The hex signature, if signed.
    pub signature: Option<String>,
    /// The headers to send.
    pub headers: HashMap<String, String>,
}

impl SignedRequest {
    /// Wraps a request that does not need authentication.
    #[must_use]
    pub fn unsigned(request: PreparedRequest) -> Self {
        Self {
            request,
            timestamp: 0,
            signature: None,
            headers: HashMap::new(),
        }
    }

    /// Returns true if this request carries a signature.
    #[must_use]
    pub const fn is_signed(&self) -> bool {
        self.signature.is_some()
    }
}

////////////////////////////////////////////////////////////////////////////////
// Tests
////////////////////////////////////////////////////////////////////////////////
