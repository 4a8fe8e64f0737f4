use gloo_timers::callback::Interval;
use yew::prelude::*;

use crate::hooks::use_session::SessionAction;
use crate::models::Session;
use crate::utils::storage::{load_raw, SESSION_KEY};

const POLL_INTERVAL_MS: u32 = 1_000;

/// Re-check the persisted session key for a freshly-written, structurally
/// valid token and promote it into in-memory state. A login performed in
/// another tab (same storage, different browsing context) is picked up
/// without cross-tab messaging, at the cost of up to one second of
/// staleness. Absent, malformed, or ill-structured values skip the tick.
///
/// The interval handle lives in the effect and is dropped on teardown, so
/// the poller does not outlive the component tree.
#[hook]
pub fn use_token_poller(session: UseReducerHandle<Session>) {
    let interval_handle = use_mut_ref(|| None::<Interval>);

    let has_token = session.has_token();
    use_effect_with(has_token, move |has_token| {
        interval_handle.borrow_mut().take();

        if !*has_token {
            // One immediate pass restores a persisted session without
            // waiting out the first tick
            revalidate(&session);

            let session = session.clone();
            *interval_handle.borrow_mut() = Some(Interval::new(POLL_INTERVAL_MS, move || {
                revalidate(&session);
            }));
        }

        move || {
            interval_handle.borrow_mut().take();
        }
    });
}

fn revalidate(session: &UseReducerHandle<Session>) {
    let Some(raw) = load_raw(SESSION_KEY) else {
        return;
    };
    if let Some(stored) = Session::from_stored_json(&raw) {
        log::info!("💾 Valid session found in storage, promoting");
        session.dispatch(SessionAction::Restore(stored));
    }
}
