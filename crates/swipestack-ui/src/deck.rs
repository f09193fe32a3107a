//! A swipeable deck: one stack, one gesture session, and the two shared signals
//! every card projection reads.
//!
//! Only the front card accepts a new gesture. A committed swipe advances the stack
//! after the fly-off settles; the new front index resets the drag offset to rest so
//! the next card starts untouched.

use std::cell::RefCell;
use std::rc::Rc;

use smallvec::SmallVec;
use swipestack_animation::Animatable;
use swipestack_core::{ObserverRegistration, ReadOnlyValue, RuntimeHandle, SharedValue};
use swipestack_foundation::{
    GesturePhase, PointerEvent, PointerEventKind, SwipeDirection, SwipeGestureSession,
};

use crate::config::DeckConfig;
use crate::error::DeckError;
use crate::overlay::{indicator_opacity, IndicatorOpacity};
use crate::projection::{project_card, CardLayer, ProjectionParams};
use crate::stack::{CardStack, Item, ItemId};

/// Reported once per committed swipe, after the stack has advanced.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SwipeCompleted {
    pub direction: SwipeDirection,
    pub dismissed: ItemId,
    /// Front index after advancing.
    pub front: usize,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CardFrame {
    pub item_id: ItemId,
    pub index: usize,
    pub relative_position: usize,
    pub layer: CardLayer,
}

/// Everything a renderer needs for one frame.
#[derive(Clone, Debug, PartialEq)]
pub struct DeckFrame {
    /// One entry per item, in item order.
    pub cards: SmallVec<[CardFrame; 4]>,
    pub indicators: IndicatorOpacity,
    pub drag_offset: f32,
    pub front_index: usize,
}

impl DeckFrame {
    pub fn front(&self) -> Option<&CardFrame> {
        self.cards.iter().find(|card| card.relative_position == 0)
    }

    pub fn visible(&self) -> impl Iterator<Item = &CardFrame> {
        self.cards.iter().filter(|card| card.layer.is_visible())
    }

    /// Visible cards back to front.
    pub fn draw_order(&self) -> SmallVec<[CardFrame; 4]> {
        let mut ordered: SmallVec<[CardFrame; 4]> = self.visible().copied().collect();
        ordered.sort_by_key(|card| card.layer.z_index);
        ordered
    }
}

type CompletionListener = Rc<dyn Fn(&SwipeCompleted)>;
type Listeners = Rc<RefCell<SmallVec<[CompletionListener; 2]>>>;

pub struct SwipeDeck {
    config: DeckConfig,
    projection: ProjectionParams,
    stack: CardStack,
    drag_offset: SharedValue<f32>,
    indicator_gate: SharedValue<f32>,
    offset_animation: Animatable,
    gate_animation: Animatable,
    session: SwipeGestureSession,
    listeners: Listeners,
    _front_observer: ObserverRegistration,
}

impl SwipeDeck {
    pub fn new(
        items: Vec<Item>,
        config: DeckConfig,
        runtime: RuntimeHandle,
    ) -> Result<Self, DeckError> {
        if let Err(err) = config.validate() {
            log::warn!("deck: rejected config: {err}");
            return Err(err);
        }
        let stack = CardStack::new(items)?;

        let drag_offset = SharedValue::new(0.0f32);
        let indicator_gate = SharedValue::new(0.0f32);
        let offset = Animatable::new("offset", drag_offset.clone(), runtime.clone());
        let gate = Animatable::new("gate", indicator_gate.clone(), runtime);

        // Every advance is a write, so a one-card stack still comes back to rest.
        let front_observer = {
            let offset = offset.clone();
            stack.front_index_value().observe(move |_| offset.snap_to(0.0))
        };

        let listeners: Listeners = Rc::default();
        let session = {
            let stack = stack.clone();
            let listeners = Rc::clone(&listeners);
            SwipeGestureSession::new(
                config.swipe_config(),
                offset.clone(),
                gate.clone(),
                move |direction| {
                    let dismissed = stack.front_item().id;
                    stack.advance();
                    let event = SwipeCompleted {
                        direction,
                        dismissed,
                        front: stack.front_index(),
                    };
                    log::info!(
                        "deck: swiped {:?} on item {} -> front {}",
                        event.direction,
                        event.dismissed,
                        event.front
                    );
                    let snapshot: SmallVec<[CompletionListener; 2]> =
                        listeners.borrow().iter().cloned().collect();
                    for listener in snapshot {
                        listener(&event);
                    }
                },
            )
        };

        log::debug!("deck: built {stack:?} with width {}", config.reference_width);
        Ok(Self {
            projection: config.projection_params(),
            config,
            stack,
            drag_offset,
            indicator_gate,
            offset_animation: offset,
            gate_animation: gate,
            session,
            listeners,
            _front_observer: front_observer,
        })
    }

    /// Route an event that landed on the card for `item_id`.
    ///
    /// A press is only accepted on the front card. Returns whether the event was
    /// used; used events are consumed.
    pub fn pointer_input(&self, item_id: ItemId, event: &PointerEvent) -> bool {
        if event.kind == PointerEventKind::Down {
            let Some(index) = self.stack.index_of(item_id) else {
                log::debug!("deck: press on unknown item {item_id}");
                return false;
            };
            if self.stack.relative_position(index) != 0 {
                log::trace!("deck: press on background item {item_id} ignored");
                return false;
            }
        }
        self.session.pointer_input(event)
    }

    /// Route an event to whichever card is currently in front.
    pub fn front_pointer_input(&self, event: &PointerEvent) -> bool {
        self.pointer_input(self.stack.front_item().id, event)
    }

    /// Listen for committed swipes. Listeners live as long as the deck.
    pub fn on_swipe_complete(&self, listener: impl Fn(&SwipeCompleted) + 'static) {
        self.listeners.borrow_mut().push(Rc::new(listener));
    }

    pub fn frame(&self) -> DeckFrame {
        let offset = self.drag_offset.get();
        let front_index = self.stack.front_index();
        let total = self.stack.total_cards();
        let cards = self
            .stack
            .items()
            .iter()
            .enumerate()
            .map(|(index, item)| {
                let relative_position = crate::stack::relative_position(index, front_index, total);
                CardFrame {
                    item_id: item.id,
                    index,
                    relative_position,
                    layer: project_card(relative_position, offset, &self.projection),
                }
            })
            .collect();
        DeckFrame {
            cards,
            indicators: indicator_opacity(
                offset,
                self.indicator_gate.get(),
                self.config.indicator_distance(),
            ),
            drag_offset: offset,
            front_index,
        }
    }

    pub fn drag_offset(&self) -> ReadOnlyValue<f32> {
        self.drag_offset.read_only()
    }

    pub fn indicator_gate(&self) -> ReadOnlyValue<f32> {
        self.indicator_gate.read_only()
    }

    pub fn stack(&self) -> &CardStack {
        &self.stack
    }

    pub fn phase(&self) -> GesturePhase {
        self.session.phase()
    }

    pub fn config(&self) -> &DeckConfig {
        &self.config
    }

    /// No drag in progress and neither the offset nor the gate spring running.
    pub fn is_settled(&self) -> bool {
        self.session.phase() == GesturePhase::Idle
            && !self.offset_animation.is_running()
            && !self.gate_animation.is_running()
    }
}

impl std::fmt::Debug for SwipeDeck {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SwipeDeck")
            .field("stack", &self.stack)
            .field("phase", &self.phase())
            .field("drag_offset", &self.drag_offset.get())
            .finish()
    }
}
