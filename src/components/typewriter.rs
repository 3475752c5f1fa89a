use std::rc::Rc;

use yew::prelude::*;

use crate::config;
use crate::utils::scheduler::{BrowserScheduler, Scheduler, ScopedTimer};

#[derive(Clone, Debug, PartialEq)]
pub struct Word {
    pub text: String,
    pub class: Option<String>,
}

impl Word {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            class: None,
        }
    }
}

pub fn total_chars(words: &[Word]) -> usize {
    words.iter().map(|word| word.text.chars().count()).sum()
}

/// Splits the first `revealed` characters across the words they belong to.
/// Words that have not started yet are left out.
pub fn reveal(words: &[Word], revealed: usize) -> Vec<(usize, String)> {
    let mut remaining = revealed;
    let mut visible = Vec::new();
    for (index, word) in words.iter().enumerate() {
        if remaining == 0 {
            break;
        }
        let shown: String = word.text.chars().take(remaining).collect();
        remaining -= shown.chars().count();
        visible.push((index, shown));
    }
    visible
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
struct Progress {
    revealed: usize,
    total: usize,
}

impl Progress {
    fn start(total: usize) -> Self {
        Self { revealed: 0, total }
    }

    fn is_done(&self) -> bool {
        self.revealed >= self.total
    }
}

enum Typing {
    Step,
    /// New words: start over from the first character.
    Restart(usize),
}

impl Reducible for Progress {
    type Action = Typing;

    fn reduce(self: Rc<Self>, action: Typing) -> Rc<Self> {
        match action {
            Typing::Step if self.is_done() => self,
            Typing::Step => Rc::new(Progress {
                revealed: self.revealed + 1,
                ..*self
            }),
            Typing::Restart(total) if *self == Progress::start(total) => self,
            Typing::Restart(total) => Rc::new(Progress::start(total)),
        }
    }
}

/// Runs `step` every `TYPEWRITER_STEP_MS` until the text is fully shown.
/// Once `done`, no timer is held at all.
pub fn typing_effect<S, F>(scheduler: S, done: bool, step: F) -> impl FnOnce() + 'static
where
    S: Scheduler + 'static,
    S::Handle: 'static,
    F: FnMut() + 'static,
{
    let mut timer = ScopedTimer::new(scheduler);
    if !done {
        timer.start_repeating(config::TYPEWRITER_STEP_MS, Box::new(step));
    }
    move || {
        timer.stop();
    }
}

#[derive(Properties, PartialEq, Clone)]
pub struct TypewriterProps {
    pub words: Vec<Word>,
    #[prop_or_default]
    pub class: Classes,
    #[prop_or_default]
    pub cursor_class: Classes,
}

#[function_component]
pub fn TypewriterText(props: &TypewriterProps) -> Html {
    let total = total_chars(&props.words);
    let progress = use_reducer(move || Progress::start(total));

    {
        let dispatcher = progress.dispatcher();
        use_effect_with_deps(
            move |words: &Vec<Word>| {
                dispatcher.dispatch(Typing::Restart(total_chars(words)));
                || ()
            },
            props.words.clone(),
        );
    }

    {
        let dispatcher = progress.dispatcher();
        use_effect_with_deps(
            move |done: &bool| typing_effect(BrowserScheduler, *done, move || dispatcher.dispatch(Typing::Step)),
            progress.is_done(),
        );
    }

    let typewriter_css = r#"
        .typewriter {
            display: flex;
            align-items: center;
            gap: 0.25rem;
            margin: 1.5rem 0;
        }
        .typewriter-text {
            white-space: nowrap;
        }
        .typewriter-word {
            margin-right: 0.5rem;
        }
        .typewriter-cursor {
            display: inline-block;
            width: 4px;
            height: 2.5rem;
            border-radius: 2px;
            background: #3b82f6;
            animation: typewriter-blink 0.8s step-end infinite;
        }
        @keyframes typewriter-blink {
            50% { opacity: 0; }
        }
    "#;

    html! {
        <div class={classes!("typewriter", props.class.clone())}>
            <style>{typewriter_css}</style>
            <div class="typewriter-text">
                {
                    reveal(&props.words, progress.revealed).into_iter().map(|(index, shown)| {
                        let class = props.words[index].class.clone();
                        html! {
                            <span class={classes!("typewriter-word", class)}>{shown}</span>
                        }
                    }).collect::<Html>()
                }
            </div>
            <span class={classes!("typewriter-cursor", props.cursor_class.clone())}></span>
        </div>
    }
}
