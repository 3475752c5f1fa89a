use std::rc::Rc;

use yew::prelude::*;

use crate::config;
use crate::utils::scheduler::{BrowserScheduler, Scheduler, ScopedTimer};

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Toast {
    pub id: u64,
    pub message: String,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ToastQueue {
    next_id: u64,
    toasts: Vec<Toast>,
}

pub enum ToastAction {
    Push(String),
    Dismiss(u64),
}

impl ToastQueue {
    pub fn push(&mut self, message: impl Into<String>) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        self.toasts.push(Toast {
            id,
            message: message.into(),
        });
        id
    }

    pub fn dismiss(&mut self, id: u64) {
        self.toasts.retain(|toast| toast.id != id);
    }

    /// Newest first, at most `MAX_VISIBLE_TOASTS`.
    pub fn visible(&self) -> impl Iterator<Item = &Toast> {
        self.toasts.iter().rev().take(config::MAX_VISIBLE_TOASTS)
    }

    pub fn len(&self) -> usize {
        self.toasts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.toasts.is_empty()
    }
}

impl Reducible for ToastQueue {
    type Action = ToastAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut queue = (*self).clone();
        match action {
            ToastAction::Push(message) => {
                queue.push(message);
            }
            ToastAction::Dismiss(id) => queue.dismiss(id),
        }
        Rc::new(queue)
    }
}

/// Mount-time effect of a toast: reports `id` once `TOAST_DURATION_MS` has
/// passed. The returned teardown cancels the timer if the toast goes first.
pub fn auto_dismiss_effect<S, F>(scheduler: S, id: u64, on_dismiss: F) -> impl FnOnce() + 'static
where
    S: Scheduler + 'static,
    S::Handle: 'static,
    F: FnOnce(u64) + 'static,
{
    let mut timer = ScopedTimer::new(scheduler);
    timer.start_once(config::TOAST_DURATION_MS, Box::new(move || on_dismiss(id)));
    move || {
        timer.stop();
    }
}

#[derive(Properties, PartialEq, Clone)]
struct ToastItemProps {
    toast: Toast,
    on_dismiss: Callback<u64>,
}

#[function_component]
fn ToastItem(props: &ToastItemProps) -> Html {
    {
        let id = props.toast.id;
        let on_dismiss = props.on_dismiss.clone();
        use_effect_with_deps(
            move |_| auto_dismiss_effect(BrowserScheduler, id, move |id| on_dismiss.emit(id)),
            (),
        );
    }

    let onclick = {
        let id = props.toast.id;
        let on_dismiss = props.on_dismiss.clone();
        Callback::from(move |_: MouseEvent| on_dismiss.emit(id))
    };

    html! {
        <li class="toast" role="status" {onclick}>
            {&props.toast.message}
        </li>
    }
}

#[derive(Properties, PartialEq, Clone)]
pub struct ToasterProps {
    pub queue: ToastQueue,
    pub on_dismiss: Callback<u64>,
}

#[function_component]
pub fn Toaster(props: &ToasterProps) -> Html {
    let toaster_css = r#"
        .toaster {
            position: fixed;
            right: 1.5rem;
            bottom: 1.5rem;
            z-index: 100;
            display: flex;
            flex-direction: column;
            gap: 0.5rem;
            list-style: none;
            margin: 0;
            padding: 0;
        }
        .toast {
            min-width: 18rem;
            padding: 1rem 1.25rem;
            border-radius: 0.5rem;
            border: 1px solid rgba(0, 0, 0, 0.08);
            background: #fff;
            color: #0f172a;
            box-shadow: 0 4px 12px rgba(0, 0, 0, 0.1);
            cursor: pointer;
            animation: toast-in 0.3s ease;
        }
        .dark .toast {
            background: #0f172a;
            color: #f0f9ff;
            border-color: rgba(255, 255, 255, 0.1);
        }
        @keyframes toast-in {
            from { opacity: 0; transform: translateY(1rem); }
            to { opacity: 1; transform: translateY(0); }
        }
    "#;

    html! {
        <ol class="toaster">
            <style>{toaster_css}</style>
            {
                props.queue.visible().map(|toast| html! {
                    <ToastItem
                        key={toast.id.to_string()}
                        toast={toast.clone()}
                        on_dismiss={props.on_dismiss.clone()}
                    />
                }).collect::<Html>()
            }
        </ol>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::scheduler::manual::ManualScheduler;
    use std::cell::RefCell;

    fn messages(queue: &ToastQueue) -> Vec<&str> {
        queue.visible().map(|toast| toast.message.as_str()).collect()
    }

    #[test]
    fn shows_newest_first_and_caps_the_stack() {
        let mut queue = ToastQueue::default();
        for message in ["one", "two", "three", "four"] {
            queue.push(message);
        }
        assert_eq!(messages(&queue), vec!["four", "three", "two"]);
        assert_eq!(queue.len(), 4);
    }

    #[test]
    fn dismiss_removes_only_the_matching_toast() {
        let mut queue = ToastQueue::default();
        let first = queue.push("first");
        queue.push("second");
        queue.dismiss(first);
        queue.dismiss(99);
        assert_eq!(messages(&queue), vec!["second"]);
    }

    #[test]
    fn ids_are_not_reused_after_dismissal() {
        let mut queue = ToastQueue::default();
        let first = queue.push("a");
        queue.dismiss(first);
        assert!(queue.is_empty());
        assert_ne!(queue.push("b"), first);
    }

    #[test]
    fn reducer_pushes_and_dismisses() {
        let queue = Rc::new(ToastQueue::default());
        let queue = queue.reduce(ToastAction::Push("hello".into()));
        assert_eq!(messages(&queue), vec!["hello"]);
        let queue = queue.reduce(ToastAction::Dismiss(0));
        assert!(queue.is_empty());
    }

    #[test]
    fn toast_dismisses_itself_after_its_duration() {
        let scheduler = ManualScheduler::new();
        let queue = Rc::new(RefCell::new(ToastQueue::default()));
        let id = queue.borrow_mut().push("Subscribed");

        let target = queue.clone();
        let _teardown = auto_dismiss_effect(scheduler.clone(), id, move |id| {
            target.borrow_mut().dismiss(id)
        });

        scheduler.advance(u64::from(config::TOAST_DURATION_MS) - 1);
        assert_eq!(queue.borrow().len(), 1);
        scheduler.advance(1);
        assert!(queue.borrow().is_empty());
        assert_eq!(scheduler.pending(), 0);
    }

    #[test]
    fn unmounting_early_cancels_the_auto_dismiss() {
        let scheduler = ManualScheduler::new();
        let dismissed = Rc::new(RefCell::new(Vec::new()));

        let sink = dismissed.clone();
        let teardown = auto_dismiss_effect(scheduler.clone(), 7, move |id| sink.borrow_mut().push(id));
        assert_eq!(scheduler.pending(), 1);
        teardown();
        assert_eq!(scheduler.pending(), 0);

        scheduler.advance(u64::from(config::TOAST_DURATION_MS) * 2);
        assert!(dismissed.borrow().is_empty());
    }
}
