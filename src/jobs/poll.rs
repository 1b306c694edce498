use chrono::Utc;
use tokio::time::{Duration, sleep};

use crate::notifier::MessageSink;
use crate::poller::{PollState, run_cycle};
use crate::practicum::HomeworkSource;

/// Runs poll cycles forever, sleeping `retry_period` after each one.
pub async fn run_poll_job<S, M>(source: S, sink: M, mut state: PollState, retry_period: Duration)
where
    S: HomeworkSource,
    M: MessageSink,
{
    let mut previous_tick = None;

    loop {
        let now = Utc::now();

        if let Some(previous) = previous_tick {
            let elapsed_secs = now.signed_duration_since(previous).num_seconds().max(0);
            let threshold_secs = (retry_period.as_secs() * 2) as i64;
            if elapsed_secs > threshold_secs {
                log::warn!(
                    "poll_loop_delayed elapsed_secs={} threshold_secs={}",
                    elapsed_secs,
                    threshold_secs
                );
            }
        }

        previous_tick = Some(now);

        run_cycle(&source, &sink, &mut state).await;

        sleep(retry_period).await;
    }
}
