//! Glue between the reducer and the browser: actions that start async work or touch the DOM.

use gloo_timers::future::TimeoutFuture;
use leptos::{SignalWithUntracked, spawn_local};

use crate::application::use_cases::SubmitLeadUseCase;
use crate::config;
use crate::domain::{Action, content::Section, leads::LeadKind, logging::LogComponent};
use crate::global_state::{dispatch, globals};
use crate::infrastructure::{Web3FormsRelay, dom};
use crate::log_debug;

/// Scrolls to a section and records it as active.
pub fn navigate(section: Section) {
    dispatch(Action::NavigateTo(section));
    dom::scroll_to_section(section);
}

/// Validates through the reducer, then posts the form if it entered `Submitting`.
pub fn submit_lead(kind: LeadKind) {
    let state = globals().state;
    if state.with_untracked(|s| s.submission(kind).is_submitting()) {
        log_debug!(LogComponent::Application("Coordinator"), "{:?} already in flight", kind);
        return;
    }

    dispatch(Action::SubmitLead(kind));
    let (submitting, form) =
        state.with_untracked(|s| (s.submission(kind).is_submitting(), s.lead_form(kind)));
    if !submitting {
        return;
    }

    spawn_local(async move {
        let use_case = SubmitLeadUseCase::new(
            Web3FormsRelay::new(),
            config::relay_access_key(),
            config::RELAY_RETRIES,
        );
        let outcome = use_case.execute(&form).await.map_err(|e| e.user_message());
        dispatch(Action::LeadSubmitted { kind, outcome });
    });
}

/// Sends the chat draft and schedules the consultant's reply.
pub fn send_chat() {
    let state = globals().state;
    let before = state.with_untracked(|s| s.chat.pending_len());
    dispatch(Action::SendChat);
    let queued = state.with_untracked(|s| s.chat.pending_len()) > before;
    if queued {
        spawn_local(async {
            TimeoutFuture::new(config::CHAT_REPLY_DELAY_MS).await;
            dispatch(Action::DeliverChatReply);
        });
    }
}
