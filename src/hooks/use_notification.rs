use std::rc::Rc;

use gloo_timers::callback::Timeout;
use yew::prelude::*;

use crate::state::{Notification, NotifyStatus};

const NOTIFY_TIMEOUT_MS: u32 = 4_000;

pub enum NotificationAction {
    Show {
        status: NotifyStatus,
        text: String,
        generation: u64,
    },
    Dismiss,
    Expire(u64),
}

impl Reducible for Notification {
    type Action = NotificationAction;

    fn reduce(self: Rc<Self>, action: NotificationAction) -> Rc<Self> {
        match action {
            NotificationAction::Show {
                status,
                text,
                generation,
            } => Rc::new(self.shown(status, text, generation)),
            NotificationAction::Dismiss => Rc::new(self.dismissed()),
            NotificationAction::Expire(generation) => Rc::new(self.expired(generation)),
        }
    }
}

#[derive(Clone, PartialEq)]
pub struct UseNotificationHandle {
    pub notification: UseReducerHandle<Notification>,
    pub show: Callback<(NotifyStatus, String)>,
    pub dismiss: Callback<()>,
}

#[hook]
pub fn use_notification() -> UseNotificationHandle {
    let notification = use_reducer(Notification::default);
    let generation_counter = use_mut_ref(|| 0u64);

    // Show: overwrite whatever is displayed and arm a fresh auto-clear.
    // Each show gets its own generation; a timer armed for an overwritten
    // notification no-ops in the reducer.
    let show = {
        let notification = notification.clone();
        Callback::from(move |(status, text): (NotifyStatus, String)| {
            let generation = {
                let mut counter = generation_counter.borrow_mut();
                *counter += 1;
                *counter
            };
            notification.dispatch(NotificationAction::Show {
                status,
                text,
                generation,
            });

            let notification = notification.clone();
            Timeout::new(NOTIFY_TIMEOUT_MS, move || {
                notification.dispatch(NotificationAction::Expire(generation));
            })
            .forget();
        })
    };

    let dismiss = {
        let notification = notification.clone();
        Callback::from(move |_| {
            notification.dispatch(NotificationAction::Dismiss);
        })
    };

    UseNotificationHandle {
        notification,
        show,
        dismiss,
    }
}
