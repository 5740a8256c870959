//! Record stream utilities.
//!
//! This module provides the [`RecordStream`] abstraction used by the
//! execution layer to return selected records lazily.

use std::pin::Pin;

use futures::stream::Stream;

use common_error::VantageResult;
use vantage_core::Record;

/// A pull-based stream of selected records.
///
/// This is the primary data exchange type between the record store and
/// the query executor.
pub type RecordStream = Pin<Box<dyn Stream<Item = VantageResult<Record>> + Send>>;

/// Create an empty `RecordStream`.
pub fn empty_stream() -> RecordStream {
    Box::pin(futures::stream::empty())
}

/// Create a `RecordStream` from a vector of records.
pub fn vec_stream(records: Vec<Record>) -> RecordStream {
    Box::pin(futures::stream::iter(records.into_iter().map(Ok)))
}

/// Create a `RecordStream` from a fallible iterator.
pub fn iter_stream<I>(iter: I) -> RecordStream
where
    I: IntoIterator<Item = VantageResult<Record>> + Send + 'static,
    I::IntoIter: Send,
{
    Box::pin(futures::stream::iter(iter))
}

/// Extension trait for `RecordStream`.
pub trait RecordStreamExt {
    /// Collect all records into a vector, stopping at the first error.
    fn collect_vec(
        self,
    ) -> Pin<Box<dyn std::future::Future<Output = VantageResult<Vec<Record>>> + Send>>;
}

impl RecordStreamExt for RecordStream {
    fn collect_vec(
        self,
    ) -> Pin<Box<dyn std::future::Future<Output = VantageResult<Vec<Record>>> + Send>> {
        use futures::StreamExt;

        Box::pin(async move {
            let mut records = Vec::new();
            let mut stream = self;

            while let Some(result) = stream.next().await {
                records.push(result?);
            }

            Ok(records)
        })
    }
}
