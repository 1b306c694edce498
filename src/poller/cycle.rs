use crate::error::PollError;
use crate::homework::{check_response, parse_status};
use crate::notifier::{MessageSink, send_message};
use crate::practicum::HomeworkSource;

use super::state::PollState;

const FAILURE_PREFIX: &str = "Сбой в работе программы";

/// Result of one fetch/validate/notify pass.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CycleOutcome {
    Completed {
        homeworks: usize,
        delivered: usize,
        cursor: i64,
    },
    Failed {
        message: String,
        notified: bool,
    },
}

struct CycleReport {
    homeworks: usize,
    delivered: usize,
    current_date: i64,
}

pub fn failure_message(error: &PollError) -> String {
    format!("{}: {}", FAILURE_PREFIX, error)
}

pub async fn run_cycle<S, M>(source: &S, sink: &M, state: &mut PollState) -> CycleOutcome
where
    S: HomeworkSource,
    M: MessageSink,
{
    let from_date = state.cursor();

    let outcome = match poll_homeworks(source, sink, from_date).await {
        Ok(report) => {
            state.advance_cursor(report.current_date);
            CycleOutcome::Completed {
                homeworks: report.homeworks,
                delivered: report.delivered,
                cursor: state.cursor(),
            }
        }
        Err(error) => report_failure(sink, state, &error).await,
    };

    match &outcome {
        CycleOutcome::Completed {
            homeworks,
            delivered,
            cursor,
        } => {
            tracing::info!(
                target: "poller",
                module = "poller",
                from_date,
                cursor = *cursor,
                homeworks = *homeworks,
                delivered = *delivered,
                outcome = "completed",
                "poll_cycle"
            );
        }
        CycleOutcome::Failed { notified, .. } => {
            tracing::info!(
                target: "poller",
                module = "poller",
                from_date,
                cursor = state.cursor(),
                notified = *notified,
                outcome = "failed",
                "poll_cycle"
            );
        }
    }

    outcome
}

async fn poll_homeworks<S, M>(source: &S, sink: &M, from_date: i64) -> Result<CycleReport, PollError>
where
    S: HomeworkSource,
    M: MessageSink,
{
    let raw = source.fetch(from_date).await?;
    let response = check_response(raw)?;

    if response.homeworks.is_empty() {
        log::debug!("no_status_changes from_date={}", from_date);
    }

    let mut delivered = 0;
    for homework in &response.homeworks {
        let message = parse_status(homework)?;
        if send_message(sink, &message).await {
            delivered += 1;
        }
    }

    Ok(CycleReport {
        homeworks: response.homeworks.len(),
        delivered,
        current_date: response.current_date,
    })
}

async fn report_failure<M: MessageSink>(
    sink: &M,
    state: &mut PollState,
    error: &PollError,
) -> CycleOutcome {
    let message = failure_message(error);
    log::error!("{}", message);

    if state.is_repeat_error(&message) {
        log::debug!("failure_notification_suppressed reason=repeat");
        return CycleOutcome::Failed {
            message,
            notified: false,
        };
    }

    let notified = send_message(sink, &message).await;
    state.remember_error(message.clone());

    CycleOutcome::Failed { message, notified }
}
