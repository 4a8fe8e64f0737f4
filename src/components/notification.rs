use yew::prelude::*;

use crate::state::Notification;

#[derive(Properties, PartialEq)]
pub struct NotificationToastProps {
    pub notification: Notification,
    pub on_dismiss: Callback<()>,
}

/// The single ambient toast. Auto-expiry is handled by the holder; this
/// only renders the current message and wires the manual dismiss.
#[function_component(NotificationToast)]
pub fn notification_toast(props: &NotificationToastProps) -> Html {
    let (Some(status), Some(text)) = (props.notification.status, props.notification.text.as_ref())
    else {
        return html! {};
    };

    let onclick = {
        let on_dismiss = props.on_dismiss.clone();
        Callback::from(move |_: MouseEvent| on_dismiss.emit(()))
    };

    html! {
        <div class={format!("notification notification-{}", status.as_str())}>
            <span>{ text.clone() }</span>
            <button class="notification-dismiss" {onclick}>{"×"}</button>
        </div>
    }
}
