//! Lazy line streams read from listing files.
//!
//! [`open_lines`] does no I/O until first polled. The open file lives in the
//! stream state, so dropping the stream at any point closes it.

use std::path::PathBuf;

use futures::future;
use futures::stream::{self, Stream, TryStreamExt};
use log::debug;
use tokio::fs::File;
use tokio::io::{AsyncBufReadExt, BufReader, Lines};

use crate::PipelineError;

enum State {
    Unopened(PathBuf),
    Reading {
        path: PathBuf,
        lines: Lines<BufReader<File>>,
    },
    Finished,
}

/// Stream the non-empty lines of the file at `path`.
///
/// If the file cannot be opened the stream yields a single
/// [`PipelineError::ResourceUnavailable`] and ends. A read failure part way
/// through yields [`PipelineError::Read`] and ends the stream.
///
/// # Examples
/// ```
/// use futures::TryStreamExt;
/// use iconmap::line_source::open_lines;
///
/// # tokio::runtime::Runtime::new().expect("runtime").block_on(async {
/// let dir = tempfile::tempdir().expect("tempdir");
/// let path = dir.path().join("logolist.info");
/// std::fs::write(&path, "Name\tIcon\n\nRoku\troku.png\n").expect("write");
/// let lines: Vec<String> = open_lines(&path).try_collect().await.expect("lines");
/// assert_eq!(lines, ["Name\tIcon", "Roku\troku.png"]);
/// # });
/// ```
pub fn open_lines(
    path: impl Into<PathBuf>,
) -> impl Stream<Item = Result<String, PipelineError>> + Send + 'static {
    stream::unfold(State::Unopened(path.into()), advance)
}

async fn advance(state: State) -> Option<(Result<String, PipelineError>, State)> {
    let (path, mut lines) = match state {
        State::Finished => return None,
        State::Reading { path, lines } => (path, lines),
        State::Unopened(path) => {
            let opened = File::open(&path).await;
            match opened {
                Ok(file) => {
                    debug!("opened {}", path.display());
                    (path, BufReader::new(file).lines())
                }
                Err(source) => {
                    let err = PipelineError::ResourceUnavailable { path, source };
                    return Some((Err(err), State::Finished));
                }
            }
        }
    };
    loop {
        match lines.next_line().await {
            Ok(Some(line)) if line.is_empty() => {}
            Ok(Some(line)) => return Some((Ok(line), State::Reading { path, lines })),
            Ok(None) => {
                debug!("finished {}", path.display());
                return None;
            }
            Err(source) => {
                return Some((Err(PipelineError::Read { path, source }), State::Finished));
            }
        }
    }
}

/// Drop the first `count` successful items of `lines`.
///
/// Errors are passed through and never count towards `count`, so a file
/// that fails to open still reports the failure.
pub fn skip_header<S, T>(lines: S, count: usize) -> impl Stream<Item = Result<T, PipelineError>>
where
    S: Stream<Item = Result<T, PipelineError>>,
{
    let mut remaining = count;
    lines.try_filter(move |_| {
        let keep = remaining == 0;
        remaining = remaining.saturating_sub(1);
        future::ready(keep)
    })
}
