use std::rc::Rc;

use yew::prelude::*;

use crate::models::Session;
use crate::utils::storage::{clear_storage, save_to_storage, SESSION_KEY};

pub enum SessionAction {
    /// Wholesale replacement, e.g. after login. No validation here.
    Replace(Session),
    /// Promotion of a validated stored session; ignored while a token is
    /// already in memory so the poller cannot clobber a fresh login.
    Restore(Session),
    /// Back to the all-null placeholder.
    Clear,
}

impl Reducible for Session {
    type Action = SessionAction;

    fn reduce(self: Rc<Self>, action: SessionAction) -> Rc<Self> {
        match action {
            SessionAction::Replace(next) => Rc::new(next),
            SessionAction::Restore(next) => {
                if self.has_token() {
                    self
                } else {
                    Rc::new(next)
                }
            }
            SessionAction::Clear => Rc::new(Session::default()),
        }
    }
}

#[derive(Clone, PartialEq)]
pub struct UseSessionHandle {
    pub session: UseReducerHandle<Session>,
    pub replace: Callback<Session>,
    pub clear: Callback<()>,
}

#[hook]
pub fn use_session() -> UseSessionHandle {
    let session = use_reducer(Session::default);

    // Replace: persist to the session key, then update in-memory state.
    // Validation of externally-written credentials is the poller's job.
    let replace = {
        let session = session.clone();
        Callback::from(move |next: Session| {
            if let Err(e) = save_to_storage(SESSION_KEY, &next) {
                log::error!("❌ Error persisting session: {}", e);
            }
            session.dispatch(SessionAction::Replace(next));
        })
    };

    // Clear: wipe local storage entirely, reset to the placeholder
    let clear = {
        let session = session.clone();
        Callback::from(move |_| {
            clear_storage();
            log::info!("👋 Session cleared");
            session.dispatch(SessionAction::Clear);
        })
    };

    UseSessionHandle {
        session,
        replace,
        clear,
    }
}
