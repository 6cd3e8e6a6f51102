//! Fixed-period status polls.
//!
//! A loop sleeps one period, re-checks its lease, issues one request and
//! applies the result. It ends when the state reports `PollStep::Stop`, when
//! its lease is no longer live, or when the session signal has been disposed
//! together with its component.

use super::api::ChatApi;
use super::state::{GenerationLease, IngestionLease, PollStep};
use super::ui::ChatSessionVm;
use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;

pub fn spawn_ingestion_poll(vm: ChatSessionVm, api: ChatApi, lease: IngestionLease) {
    let interval_ms = vm.poll_interval_ms;
    spawn_local(async move {
        log::debug!("ingestion poll started: {:?}", lease);
        loop {
            TimeoutFuture::new(interval_ms).await;

            let Some(Some(file_name)) = vm.state.try_with_untracked(|s| s.ingestion_target(lease))
            else {
                break;
            };

            let step = match api.fetch_ingestion_status(&file_name).await {
                Ok(status) => vm
                    .state
                    .try_update(|s| s.apply_ingestion_status(lease, status)),
                Err(e) => vm.state.try_update(|s| s.ingestion_poll_failed(lease, &e)),
            };
            if step != Some(PollStep::Continue) {
                break;
            }
        }
        log::debug!("ingestion poll stopped: {:?}", lease);
    });
}

pub fn spawn_generation_poll(vm: ChatSessionVm, api: ChatApi, lease: GenerationLease) {
    let interval_ms = vm.poll_interval_ms;
    spawn_local(async move {
        log::debug!("generation poll started: {:?}", lease);
        loop {
            TimeoutFuture::new(interval_ms).await;

            let Some(Some(file_name)) =
                vm.state.try_with_untracked(|s| s.generation_target(lease))
            else {
                break;
            };

            let step = match api.fetch_generation_status(&file_name).await {
                Ok(body) => vm
                    .state
                    .try_update(|s| s.apply_generation_status(lease, &body)),
                Err(e) => vm.state.try_update(|s| s.generation_poll_failed(lease, &e)),
            };
            if step != Some(PollStep::Continue) {
                break;
            }
        }
        log::debug!("generation poll stopped: {:?}", lease);
    });
}
