//! Chew delay: hold the eating animation for a minimum duration.

use std::future::Future;

use gloo_timers::future::TimeoutFuture;

use crate::config::CHEW_DELAY_MS;

/// Wait for both `work` and `floor`, returning the output of `work`.
///
/// Whichever finishes first, nothing is returned until the other one has
/// finished too.
pub async fn chew<F, D>(work: F, floor: D) -> F::Output
where
    F: Future,
    D: Future<Output = ()>,
{
    let (output, ()) = futures::join!(work, floor);
    output
}

/// [`chew`] with the standard browser timer as the floor.
pub async fn chew_for_delay<F: Future>(work: F) -> F::Output {
    chew(work, TimeoutFuture::new(CHEW_DELAY_MS)).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::channel::oneshot;
    use futures::FutureExt;

    #[test]
    fn test_instant_work_waits_for_floor() {
        let (done, floor) = oneshot::channel::<()>();
        let mut joined = Box::pin(chew(async { 42 }, async move {
            let _ = floor.await;
        }));

        assert_eq!((&mut joined).now_or_never(), None);

        done.send(()).unwrap();
        assert_eq!(joined.now_or_never(), Some(42));
    }

    #[test]
    fn test_slow_work_outlasts_floor() {
        let (respond, response) = oneshot::channel::<&str>();
        let mut joined = Box::pin(chew(
            async move { response.await.unwrap_or("dropped") },
            async {},
        ));

        assert_eq!((&mut joined).now_or_never(), None);

        respond.send("stored ok").unwrap();
        assert_eq!(joined.now_or_never(), Some("stored ok"));
    }

    #[test]
    fn test_failed_work_is_gated_too() {
        let (done, floor) = oneshot::channel::<()>();
        let mut joined = Box::pin(chew(
            async { Err::<(), _>("connection refused") },
            async move {
                let _ = floor.await;
            },
        ));

        assert_eq!((&mut joined).now_or_never(), None);

        done.send(()).unwrap();
        assert_eq!(joined.now_or_never(), Some(Err("connection refused")));
    }
}
