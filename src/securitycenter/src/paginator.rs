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

//! Adapters for list RPCs.
//!
//! The `ListAssets` RPC returns its results in pages. Each page carries a
//! token to fetch the next one, an empty token marks the last page. See
//! [AIP-4233](https://google.aip.dev/client-libraries/4233).
//!
//! [Paginator] turns the RPC into a stream of pages, and [ItemPaginator]
//! flattens those pages into a stream of items.

use futures::stream::unfold;
use futures::{Stream, StreamExt};
use pin_project::pin_project;
use std::future::Future;
use std::pin::Pin;

/// Describes a type that can be iterated over asyncly when used with [Paginator].
pub trait PageableResponse {
    type PageItem: Send;

    /// Consumes the page, returning the items it contains.
    fn items(self) -> Vec<Self::PageItem>;

    /// The token to fetch the next page. Empty on the last page.
    fn next_page_token(&self) -> String;
}

type ControlFlow = std::ops::ControlFlow<(), String>;

/// An adapter that converts a list RPC into a [futures::Stream] of pages.
#[pin_project]
pub struct Paginator<T, E> {
    #[pin]
    stream: Pin<Box<dyn Stream<Item = Result<T, E>> + Send>>,
}

impl<T, E> Paginator<T, E>
where
    T: PageableResponse + Send + 'static,
    E: Send + 'static,
{
    /// Creates a new [Paginator] given the initial page token and a function
    /// to fetch the next [PageableResponse].
    pub fn new<F>(seed_token: String, execute: impl Fn(String) -> F + Clone + Send + 'static) -> Self
    where
        F: Future<Output = Result<T, E>> + Send + 'static,
    {
        let stream = unfold(ControlFlow::Continue(seed_token), move |state| {
            let execute = execute.clone();
            async move {
                let token = match state {
                    ControlFlow::Continue(token) => token,
                    ControlFlow::Break(_) => return None,
                };
                match execute(token).await {
                    Ok(page) => {
                        let tok = page.next_page_token();
                        let next_state = if tok.is_empty() {
                            ControlFlow::Break(())
                        } else {
                            ControlFlow::Continue(tok)
                        };
                        Some((Ok(page), next_state))
                    }
                    Err(e) => Some((Err(e), ControlFlow::Break(()))),
                }
            }
        });
        Self {
            stream: Box::pin(stream),
        }
    }

    /// Returns the next page, or `None` when there are no more pages.
    pub fn next(&mut self) -> futures::stream::Next<'_, Self> {
        StreamExt::next(self)
    }

    /// Converts the paginator into an [ItemPaginator].
    pub fn items(self) -> ItemPaginator<T, E> {
        ItemPaginator::new(self)
    }
}

impl<T, E> Stream for Paginator<T, E> {
    type Item = Result<T, E>;

    fn poll_next(
        self: Pin<&mut Self>,
        cx: &mut std::task::Context<'_>,
    ) -> std::task::Poll<Option<Self::Item>> {
        self.project().stream.poll_next(cx)
    }
}

impl<T, E> std::fmt::Debug for Paginator<T, E> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Paginator").finish_non_exhaustive()
    }
}

/// An adapter that yields the items of each page of a list RPC.
///
/// The sequence is lazy: a page is only requested once all the items of the
/// previous page are consumed. It is also finite and non-restartable. After
/// an error the adapter returns `None`.
pub struct ItemPaginator<T, E>
where
    T: PageableResponse,
{
    pages: Paginator<T, E>,
    current: std::vec::IntoIter<T::PageItem>,
    done: bool,
}

impl<T, E> ItemPaginator<T, E>
where
    T: PageableResponse + Send + 'static,
    E: Send + 'static,
{
    fn new(pages: Paginator<T, E>) -> Self {
        Self {
            pages,
            current: Vec::new().into_iter(),
            done: false,
        }
    }

    /// Returns the next item, fetching more pages as needed.
    pub async fn next(&mut self) -> Option<Result<T::PageItem, E>> {
        loop {
            if let Some(item) = self.current.next() {
                return Some(Ok(item));
            }
            if self.done {
                return None;
            }
            match self.pages.next().await {
                None => {
                    self.done = true;
                    return None;
                }
                Some(Err(e)) => {
                    self.done = true;
                    return Some(Err(e));
                }
                Some(Ok(page)) => {
                    self.current = page.items().into_iter();
                }
            }
        }
    }

    /// Converts the adapter into a [futures::Stream] of items.
    pub fn into_stream(self) -> impl Stream<Item = Result<T::PageItem, E>> + Send
    where
        T::PageItem: 'static,
    {
        unfold(self, |mut paginator| async move {
            paginator.next().await.map(|item| (item, paginator))
        })
    }
}

impl<T, E> std::fmt::Debug for ItemPaginator<T, E>
where
    T: PageableResponse,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ItemPaginator")
            .field("done", &self.done)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::VecDeque;
    use std::sync::{Arc, Mutex};

    #[derive(Clone, Debug, PartialEq)]
    struct TestResponse {
        items: Vec<String>,
        next_page_token: String,
    }

    impl PageableResponse for TestResponse {
        type PageItem = String;

        fn items(self) -> Vec<String> {
            self.items
        }

        fn next_page_token(&self) -> String {
            self.next_page_token.clone()
        }
    }

    type TestError = String;

    fn page(items: &[&str], token: &str) -> TestResponse {
        TestResponse {
            items: items.iter().map(|s| s.to_string()).collect(),
            next_page_token: token.to_string(),
        }
    }

    // Returns a paginator over `responses`, verifying each page token in
    // sequence matches `expected_tokens`.
    fn make_paginator(
        seed: &str,
        responses: Vec<Result<TestResponse, TestError>>,
        expected_tokens: Vec<&str>,
    ) -> Paginator<TestResponse, TestError> {
        let responses = Arc::new(Mutex::new(VecDeque::from(responses)));
        let tokens = Arc::new(Mutex::new(
            expected_tokens
                .into_iter()
                .map(str::to_string)
                .collect::<VecDeque<_>>(),
        ));
        let execute = move |token: String| {
            let expected = tokens.lock().unwrap().pop_front().unwrap();
            assert_eq!(token, expected);
            let response = responses.lock().unwrap().pop_front().unwrap();
            async move { response }
        };
        Paginator::new(seed.to_string(), execute)
    }

    #[tokio::test]
    async fn pages() {
        let mut paginator = make_paginator(
            "",
            vec![Ok(page(&["a1", "a2"], "token2")), Ok(page(&["a3"], ""))],
            vec!["", "token2"],
        );
        let mut got = Vec::new();
        while let Some(p) = paginator.next().await {
            got.push(p.unwrap());
        }
        assert_eq!(got, vec![page(&["a1", "a2"], "token2"), page(&["a3"], "")]);
    }

    #[tokio::test]
    async fn pages_seed_token() {
        let mut paginator = make_paginator("seed", vec![Ok(page(&["a1"], ""))], vec!["seed"]);
        assert_eq!(paginator.next().await, Some(Ok(page(&["a1"], ""))));
        assert_eq!(paginator.next().await, None);
    }

    #[tokio::test]
    async fn pages_stop_after_error() {
        let mut paginator = make_paginator(
            "",
            vec![Ok(page(&["a1"], "token2")), Err("uh-oh".to_string())],
            vec!["", "token2"],
        );
        assert_eq!(paginator.next().await, Some(Ok(page(&["a1"], "token2"))));
        assert_eq!(paginator.next().await, Some(Err("uh-oh".to_string())));
        assert_eq!(paginator.next().await, None);
    }

    #[tokio::test]
    async fn items_across_pages() {
        let mut items = make_paginator(
            "",
            vec![
                Ok(page(&["a1", "a2"], "token2")),
                Ok(page(&[], "token3")),
                Ok(page(&["a3"], "")),
            ],
            vec!["", "token2", "token3"],
        )
        .items();
        let mut got = Vec::new();
        while let Some(item) = items.next().await {
            got.push(item.unwrap());
        }
        assert_eq!(got, ["a1", "a2", "a3"]);
    }

    #[tokio::test]
    async fn items_empty() {
        let mut items = make_paginator("", vec![Ok(page(&[], ""))], vec![""]).items();
        assert_eq!(items.next().await, None);
        assert_eq!(items.next().await, None);
    }

    #[tokio::test]
    async fn items_yield_partial_results_before_error() {
        let mut items = make_paginator(
            "",
            vec![Ok(page(&["a1", "a2"], "token2")), Err("uh-oh".to_string())],
            vec!["", "token2"],
        )
        .items();
        assert_eq!(items.next().await, Some(Ok("a1".to_string())));
        assert_eq!(items.next().await, Some(Ok("a2".to_string())));
        assert_eq!(items.next().await, Some(Err("uh-oh".to_string())));
        assert_eq!(items.next().await, None);
    }

    #[tokio::test]
    async fn items_as_stream() {
        let stream = make_paginator(
            "",
            vec![Ok(page(&["a1"], "token2")), Ok(page(&["a2"], ""))],
            vec!["", "token2"],
        )
        .items()
        .into_stream();
        let got = stream.collect::<Vec<_>>().await;
        assert_eq!(got, vec![Ok("a1".to_string()), Ok("a2".to_string())]);
    }
}
