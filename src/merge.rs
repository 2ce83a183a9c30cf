//! Combine two fallible record streams into one.

use futures::future;
use futures::stream::{self, Stream, StreamExt};

use crate::PipelineError;

/// Interleave `a` and `b` into a single stream.
///
/// Both inputs are polled from the calling task, alternating between them
/// whenever both have an item ready. Every item of each input appears
/// exactly once and in its original order; the interleaving between the two
/// inputs is otherwise unspecified. The merged stream ends once both inputs
/// end.
///
/// The first error from either input is yielded and then the merged stream
/// ends, dropping whatever remains of both inputs.
///
/// # Examples
/// ```
/// use futures::{TryStreamExt, stream};
/// use iconmap::merge::merge;
///
/// # tokio::runtime::Runtime::new().expect("runtime").block_on(async {
/// let a = stream::iter([Ok(1), Ok(2)]);
/// let b = stream::iter([Ok(10)]);
/// let mut items: Vec<i32> = merge(a, b).try_collect().await.expect("merge");
/// items.sort_unstable();
/// assert_eq!(items, vec![1, 2, 10]);
/// # });
/// ```
pub fn merge<A, B, T>(a: A, b: B) -> impl Stream<Item = Result<T, PipelineError>>
where
    A: Stream<Item = Result<T, PipelineError>>,
    B: Stream<Item = Result<T, PipelineError>>,
{
    stream::select(a, b).scan(false, |failed, item| {
        if *failed {
            return future::ready(None);
        }
        *failed = item.is_err();
        future::ready(Some(item))
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::TryStreamExt;
    use rstest::rstest;

    fn oks(items: &[u32]) -> Vec<Result<u32, PipelineError>> {
        items.iter().copied().map(Ok).collect()
    }

    #[rstest]
    #[case(&[], &[])]
    #[case(&[1, 2, 3], &[])]
    #[case(&[], &[10, 20])]
    #[case(&[1, 2, 3, 4, 5], &[10, 20])]
    #[case(&[1], &[10, 20, 30, 40])]
    #[tokio::test]
    async fn keeps_every_item_in_source_order(#[case] a: &[u32], #[case] b: &[u32]) {
        let merged: Vec<u32> = merge(stream::iter(oks(a)), stream::iter(oks(b)))
            .try_collect()
            .await
            .expect("merge");

        assert_eq!(merged.len(), a.len() + b.len());
        let from_a: Vec<u32> = merged.iter().copied().filter(|n| *n < 10).collect();
        let from_b: Vec<u32> = merged.iter().copied().filter(|n| *n >= 10).collect();
        assert_eq!(from_a, a);
        assert_eq!(from_b, b);
    }

    #[tokio::test]
    async fn first_error_ends_the_stream() {
        let a = stream::iter(vec![
            Ok(1),
            Err(PipelineError::malformed("bad", "boom")),
            Ok(3),
        ]);
        let b = stream::iter(oks(&[10, 20, 30, 40]));

        let items: Vec<_> = merge(a, b).collect().await;

        assert!(matches!(items.last(), Some(Err(_))), "{items:?}");
        assert_eq!(items.iter().filter(|i| i.is_err()).count(), 1);
        assert!(!items.iter().any(|i| matches!(i, Ok(3))));
    }

    #[tokio::test]
    async fn error_from_second_input_propagates() {
        let a = stream::iter(oks(&[1, 2]));
        let b = stream::iter(vec![Err(PipelineError::malformed("bad", "boom"))]);

        let result: Result<Vec<u32>, _> = merge(a, b).try_collect().await;

        assert!(matches!(
            result,
            Err(PipelineError::MalformedRecord { .. })
        ));
    }
}
