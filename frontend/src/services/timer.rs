use std::time::Duration;

use futures::future::{FutureExt, LocalBoxFuture};
use gloo_timers::future::TimeoutFuture;
use shared::Clock;

/// `setTimeout`-backed clock.
#[derive(Debug, Clone, Copy, Default)]
pub struct GlooClock;

impl Clock for GlooClock {
    fn sleep(&self, duration: Duration) -> LocalBoxFuture<'static, ()> {
        let millis = u32::try_from(duration.as_millis()).unwrap_or(u32::MAX);
        TimeoutFuture::new(millis).boxed_local()
    }
}
