// Copyright 2025 Google LLC
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     https://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Traits to mock the clients in this library.
//!
//! Application developers may need to mock the clients in this library to test
//! how their application works with different (and sometimes hard to trigger)
//! client and service behavior. Such test can define mocks implementing the
//! trait(s) defined in this module, initialize the client with an instance of
//! this mock in their tests, and verify their application responds as
//! expected.

pub(crate) mod dynamic;

/// Defines the trait used to implement [super::client::SecurityCenter].
///
/// Application developers may need to implement this trait to mock
/// `client::SecurityCenter`. In other use-cases, application developers only
/// use `client::SecurityCenter` and need not be concerned with this trait or
/// its implementations.
///
/// Services gain new RPCs routinely. Consequently, this trait gains new methods
/// too. To avoid breaking applications the trait provides a default
/// implementation of each method. Most of these implementations just return an
/// error.
pub trait SecurityCenter: std::fmt::Debug + Send + Sync {
    /// Implements [super::client::SecurityCenter::list_assets].
    fn list_assets(
        &self,
        _req: crate::model::ListAssetsRequest,
        _options: gax::options::RequestOptions,
    ) -> impl std::future::Future<
        Output = crate::Result<gax::response::Response<crate::model::ListAssetsResponse>>,
    > + Send {
        unimplemented_stub()
    }
}

async fn unimplemented_stub<T: Send>() -> crate::Result<gax::response::Response<T>> {
    unimplemented!(concat!(
        "to prevent breaking changes as services gain new RPCs, the stub ",
        "traits provide default implementations of each method. In this ",
        "library, all implementations of the traits override all methods. ",
        "Therefore, this error should not appear in normal code. The only ",
        "expected context for this error is test code mocking the client. If ",
        "that is how you got this error, verify that you have mocked all ",
        "methods used in your test."
    ));
}
