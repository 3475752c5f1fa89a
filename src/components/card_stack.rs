use std::rc::Rc;

use yew::prelude::*;

use crate::config;
use crate::utils::scheduler::{BrowserScheduler, Scheduler, ScopedTimer};

#[derive(Clone, PartialEq)]
pub struct DisplayCard {
    pub id: u32,
    pub category: Option<String>,
    pub image: String,
    pub content: Option<Html>,
}

impl DisplayCard {
    pub fn new(id: u32, image: impl Into<String>) -> Self {
        Self {
            id,
            category: None,
            image: image.into(),
            content: None,
        }
    }

    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }
}

/// Where a card sits in the stack: `top` in px, `scale`, and `z_index`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct StackPlacement {
    pub top: f64,
    pub scale: f64,
    pub z_index: usize,
}

/// Position 0 is the top of the stack. Deep stacks can reach a zero or
/// negative scale; that is left as is.
pub fn placement(position: usize, stack_size: usize, offset: f64, scale_factor: f64) -> StackPlacement {
    let depth = position as f64;
    StackPlacement {
        top: depth * -offset,
        scale: 1.0 - depth * scale_factor,
        z_index: stack_size.saturating_sub(position),
    }
}

/// Returns a copy of `items` with the last element moved to the front.
pub fn rotate_last_to_front<T: Clone>(items: &[T]) -> Vec<T> {
    let mut rotated = items.to_vec();
    if !rotated.is_empty() {
        rotated.rotate_right(1);
    }
    rotated
}

/// Order of the cards currently on screen.
#[derive(Clone, PartialEq)]
pub struct RotationState {
    cards: Vec<DisplayCard>,
}

pub enum StackAction {
    Rotate,
    /// The parent handed over a different card set.
    Replace(Vec<DisplayCard>),
}

impl RotationState {
    pub fn new(cards: Vec<DisplayCard>) -> Self {
        Self { cards }
    }

    pub fn cards(&self) -> &[DisplayCard] {
        &self.cards
    }

    pub fn rotated(&self) -> Self {
        Self {
            cards: rotate_last_to_front(&self.cards),
        }
    }
}

impl Reducible for RotationState {
    type Action = StackAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        match action {
            StackAction::Rotate if self.cards.len() > 1 => Rc::new(self.rotated()),
            StackAction::Rotate => self,
            StackAction::Replace(cards) if cards != self.cards => Rc::new(RotationState::new(cards)),
            StackAction::Replace(_) => self,
        }
    }
}

/// Drives the periodic shuffle of one mounted stack.
pub struct RotationDriver<S: Scheduler> {
    timer: ScopedTimer<S>,
    period_ms: u32,
    rotate: Rc<dyn Fn()>,
}

impl<S: Scheduler> RotationDriver<S> {
    pub fn new(scheduler: S, period_ms: u32, rotate: impl Fn() + 'static) -> Self {
        Self {
            timer: ScopedTimer::new(scheduler),
            period_ms,
            rotate: Rc::new(rotate),
        }
    }

    pub fn is_active(&self) -> bool {
        self.timer.is_active()
    }

    /// Acquires the interval. Does nothing while one is already held.
    pub fn activate(&mut self) {
        let rotate = self.rotate.clone();
        if self.timer.start_repeating(self.period_ms, Box::new(move || rotate())) {
            log::debug!("card stack rotation started ({} ms)", self.period_ms);
        }
    }

    pub fn deactivate(&mut self) {
        if self.timer.stop() {
            log::debug!("card stack rotation stopped");
        }
    }
}

/// Mount-time effect of `CardStack`: starts rotating and returns the teardown
/// that stops it.
pub fn rotation_effect<S, F>(scheduler: S, rotate: F) -> impl FnOnce() + 'static
where
    S: Scheduler + 'static,
    S::Handle: 'static,
    F: Fn() + 'static,
{
    let mut driver = RotationDriver::new(scheduler, config::ROTATION_PERIOD_MS, rotate);
    driver.activate();
    move || driver.deactivate()
}

/// Cards in a fixed order (by id), each paired with where the current
/// rotation puts it. Keeping the element order stable means only the inline
/// styles change between rotations, so the CSS transitions run.
pub fn stable_layout(cards: &[DisplayCard], offset: f64, scale_factor: f64) -> Vec<(&DisplayCard, StackPlacement)> {
    let stack_size = cards.len();
    let mut layout: Vec<_> = cards
        .iter()
        .enumerate()
        .map(|(position, card)| (card, placement(position, stack_size, offset, scale_factor)))
        .collect();
    layout.sort_by_key(|(card, _)| card.id);
    layout
}

#[derive(Properties, PartialEq, Clone)]
pub struct CardStackProps {
    pub items: Vec<DisplayCard>,
    #[prop_or(config::DEFAULT_CARD_OFFSET)]
    pub offset: f64,
    #[prop_or(config::DEFAULT_SCALE_FACTOR)]
    pub scale_factor: f64,
}

#[function_component]
pub fn CardStack(props: &CardStackProps) -> Html {
    let items = props.items.clone();
    let state = use_reducer(move || RotationState::new(items));

    {
        let dispatcher = state.dispatcher();
        use_effect_with_deps(
            move |_| {
                rotation_effect(BrowserScheduler, move || {
                    dispatcher.dispatch(StackAction::Rotate);
                })
            },
            (),
        );
    }

    {
        let dispatcher = state.dispatcher();
        use_effect_with_deps(
            move |items: &Vec<DisplayCard>| {
                dispatcher.dispatch(StackAction::Replace(items.clone()));
                || ()
            },
            props.items.clone(),
        );
    }

    let stack_css = r#"
        .card-stack {
            position: relative;
            height: 24rem;
            width: 24rem;
            max-width: 100%;
        }
        .stack-card {
            position: absolute;
            margin-top: 9rem;
            height: 15rem;
            width: 100%;
            display: flex;
            flex-direction: column;
            justify-content: space-between;
            border-radius: 1.5rem;
            border: 1px solid rgba(229, 229, 229, 1);
            background: #38bdf8;
            box-shadow: 0 20px 25px -5px rgba(0, 0, 0, 0.1);
            transform-origin: top center;
            transition: top 0.5s ease, transform 0.5s ease;
        }
        .dark .stack-card {
            border-color: rgba(255, 255, 255, 0.1);
            background: #000;
            box-shadow: 0 20px 25px -5px rgba(255, 255, 255, 0.05);
        }
        .stack-card-body {
            height: 100%;
            transform: translateY(-7rem);
            border-radius: 0.75rem;
            background: #64748b;
            padding: 0 0.75rem;
        }
        .dark .stack-card-body {
            background: #1f2937;
        }
        .stack-card-body img {
            height: 100%;
            width: 100%;
            object-fit: contain;
            border-radius: 0.75rem;
        }
        .stack-card-category {
            position: absolute;
            bottom: 0.75rem;
            left: 1rem;
            font-weight: 600;
            color: #f0f9ff;
        }
    "#;

    html! {
        <div class="card-stack">
            <style>{stack_css}</style>
            {
                stable_layout(state.cards(), props.offset, props.scale_factor).into_iter().map(|(card, place)| {
                    let style = format!(
                        "top: {}px; transform: scale({}); z-index: {};",
                        place.top, place.scale, place.z_index
                    );
                    html! {
                        <div key={card.id.to_string()} class="stack-card" style={style}>
                            <div class="stack-card-body">
                                <img src={card.image.clone()} alt="thumbnail" loading="lazy" />
                            </div>
                            if let Some(category) = &card.category {
                                <span class="stack-card-category">{category}</span>
                            }
                            if let Some(content) = &card.content {
                                {content.clone()}
                            }
                        </div>
                    }
                }).collect::<Html>()
            }
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::scheduler::manual::ManualScheduler;
    use std::cell::RefCell;

    fn cards(n: u32) -> Vec<DisplayCard> {
        (0..n)
            .map(|id| DisplayCard::new(id, format!("/shoes/{id}.png")))
            .collect()
    }

    fn ids(cards: &[DisplayCard]) -> Vec<u32> {
        cards.iter().map(|card| card.id).collect()
    }

    #[test]
    fn rotate_moves_last_card_to_the_front() {
        let state = RotationState::new(cards(4)).rotated();
        assert_eq!(ids(state.cards()), vec![3, 0, 1, 2]);
    }

    #[test]
    fn rotate_keeps_every_card_exactly_once() {
        for n in 0..8 {
            let rotated = rotate_last_to_front(&cards(n));
            let mut seen = ids(&rotated);
            seen.sort_unstable();
            assert_eq!(seen, (0..n).collect::<Vec<_>>());
        }
    }

    #[test]
    fn rotating_n_times_restores_the_original_order() {
        let original = cards(5);
        let mut state = RotationState::new(original.clone());
        for _ in 0..original.len() {
            state = state.rotated();
        }
        assert_eq!(ids(state.cards()), ids(&original));
        assert!(state.cards() == original.as_slice());
    }

    #[test]
    fn rotating_empty_and_single_stacks_is_a_no_op() {
        assert!(rotate_last_to_front::<DisplayCard>(&[]).is_empty());
        assert_eq!(ids(&rotate_last_to_front(&cards(1))), vec![0]);
    }

    #[test]
    fn reducer_rotates_on_each_action() {
        let state = Rc::new(RotationState::new(cards(3)));
        let state = state.reduce(StackAction::Rotate);
        let state = state.reduce(StackAction::Rotate);
        assert_eq!(ids(state.cards()), vec![1, 2, 0]);
    }

    #[test]
    fn placement_offsets_and_shrinks_deeper_cards() {
        let top = placement(0, 4, 15.0, 0.06);
        assert_eq!(top, StackPlacement { top: 0.0, scale: 1.0, z_index: 4 });

        let third = placement(2, 4, 15.0, 0.06);
        assert_eq!(third.top, -30.0);
        assert!((third.scale - 0.88).abs() < 1e-12);
        assert_eq!(third.z_index, 2);
    }

    #[test]
    fn deep_stacks_may_scale_below_zero() {
        let deep = placement(20, 21, 10.0, 0.06);
        assert!(deep.scale < 0.0);
        assert_eq!(deep.z_index, 1);
    }

    #[test]
    fn replace_swaps_in_the_new_card_set() {
        let state = Rc::new(RotationState::new(cards(3))).reduce(StackAction::Rotate);
        let fresh: Vec<DisplayCard> = (10..14)
            .map(|id| DisplayCard::new(id, format!("/shoes/{id}.png")))
            .collect();
        let state = state.reduce(StackAction::Replace(fresh));
        assert_eq!(ids(state.cards()), vec![10, 11, 12, 13]);
    }

    #[test]
    fn replacing_with_the_current_order_keeps_the_state() {
        let state = Rc::new(RotationState::new(cards(3)));
        let next = state.clone().reduce(StackAction::Replace(cards(3)));
        assert!(Rc::ptr_eq(&state, &next));
    }

    #[test]
    fn layout_keeps_element_order_and_moves_placements() {
        let state = RotationState::new(cards(4));
        let before = stable_layout(state.cards(), 15.0, 0.06);
        let rotated = state.rotated();
        let after = stable_layout(rotated.cards(), 15.0, 0.06);

        let before_order: Vec<u32> = before.iter().map(|(card, _)| card.id).collect();
        let after_order: Vec<u32> = after.iter().map(|(card, _)| card.id).collect();
        assert_eq!(before_order, vec![0, 1, 2, 3]);
        assert_eq!(after_order, vec![0, 1, 2, 3]);

        // Card 3 was at the back and is now on top.
        assert_eq!(before[3].1, placement(3, 4, 15.0, 0.06));
        assert_eq!(after[3].1, placement(0, 4, 15.0, 0.06));
        assert_eq!(after[0].1, placement(1, 4, 15.0, 0.06));
    }

    #[test]
    fn rotation_ticks_on_the_period_and_stops_on_teardown() {
        let scheduler = ManualScheduler::new();
        let state = Rc::new(RefCell::new(RotationState::new(cards(4))));

        let target = state.clone();
        let teardown = rotation_effect(scheduler.clone(), move || {
            let next = target.borrow().rotated();
            *target.borrow_mut() = next;
        });

        scheduler.advance(4_999);
        assert_eq!(ids(state.borrow().cards()), vec![0, 1, 2, 3]);
        scheduler.advance(1);
        assert_eq!(ids(state.borrow().cards()), vec![3, 0, 1, 2]);
        scheduler.advance(10_000);
        assert_eq!(ids(state.borrow().cards()), vec![1, 2, 3, 0]);

        teardown();
        assert_eq!(scheduler.pending(), 0);
        scheduler.advance(20_000);
        assert_eq!(ids(state.borrow().cards()), vec![1, 2, 3, 0]);
    }

    #[test]
    fn activating_twice_keeps_a_single_timer() {
        let scheduler = ManualScheduler::new();
        let mut driver = RotationDriver::new(scheduler.clone(), config::ROTATION_PERIOD_MS, || {});

        driver.activate();
        driver.activate();
        assert!(driver.is_active());
        assert_eq!(scheduler.pending(), 1);

        driver.deactivate();
        assert!(!driver.is_active());
        assert_eq!(scheduler.pending(), 0);
    }

    #[test]
    fn repeated_mount_cycles_never_accumulate_timers() {
        let scheduler = ManualScheduler::new();
        let rotations = Rc::new(RefCell::new(0));
        for _ in 0..5 {
            let counter = rotations.clone();
            let teardown = rotation_effect(scheduler.clone(), move || *counter.borrow_mut() += 1);
            assert_eq!(scheduler.pending(), 1);
            teardown();
            assert_eq!(scheduler.pending(), 0);
        }
        scheduler.advance(60_000);
        assert_eq!(*rotations.borrow(), 0);
    }
}
