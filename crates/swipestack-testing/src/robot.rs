//! Robot-style driver for a [`SwipeDeck`].
//!
//! The robot owns the runtime, so frame time only moves when a test pumps it.
//!
//! ```
//! use swipestack_testing::DeckRobot;
//!
//! let mut robot = DeckRobot::with_sample_items(375.0);
//! robot.swipe(200.0);
//! robot.settle();
//! assert_eq!(robot.deck().stack().front_index(), 1);
//! ```

use std::cell::RefCell;
use std::rc::Rc;

use swipestack_core::{Runtime, FRAME_NANOS_60HZ};
use swipestack_ui::{
    Color, DeckConfig, DeckError, DeckFrame, ImageRef, Item, ItemId, Point, PointerEvent,
    SwipeCompleted, SwipeDeck,
};

/// Where every scripted gesture starts.
pub const GESTURE_ORIGIN: Point = Point { x: 200.0, y: 300.0 };

/// Upper bound on frames [`DeckRobot::settle`] will pump.
pub const MAX_SETTLE_FRAMES: usize = 2_000;

const DRAG_STEPS: usize = 4;

/// Three distinct items, ids 1..=3.
pub fn sample_items() -> Vec<Item> {
    vec![
        Item::new(1, "Indigo", Color::from_rgb_u8(0x63, 0x66, 0xF1), ImageRef::new("card1")),
        Item::new(2, "Emerald", Color::from_rgb_u8(0x10, 0xB9, 0x81), ImageRef::new("card2")),
        Item::new(3, "Rose", Color::from_rgb_u8(0xF4, 0x3F, 0x5E), ImageRef::new("card3")),
    ]
}

pub struct DeckRobot {
    runtime: Runtime,
    deck: SwipeDeck,
    completions: Rc<RefCell<Vec<SwipeCompleted>>>,
    frame_time_nanos: u64,
    pointer: u64,
    position: Point,
}

impl DeckRobot {
    pub fn new(items: Vec<Item>, config: DeckConfig) -> Result<Self, DeckError> {
        let runtime = Runtime::default();
        let deck = SwipeDeck::new(items, config, runtime.handle())?;
        let completions = Rc::new(RefCell::new(Vec::new()));
        {
            let completions = Rc::clone(&completions);
            deck.on_swipe_complete(move |event| completions.borrow_mut().push(*event));
        }
        Ok(Self {
            runtime,
            deck,
            completions,
            frame_time_nanos: 0,
            pointer: 0,
            position: GESTURE_ORIGIN,
        })
    }

    /// [`sample_items`] with the default config for `width`.
    ///
    /// # Panics
    ///
    /// If `width` is not a usable reference width.
    pub fn with_sample_items(width: f32) -> Self {
        match Self::new(sample_items(), DeckConfig::new(width)) {
            Ok(robot) => robot,
            Err(err) => panic!("sample deck rejected: {err}"),
        }
    }

    pub fn deck(&self) -> &SwipeDeck {
        &self.deck
    }

    pub fn runtime(&self) -> &Runtime {
        &self.runtime
    }

    pub fn frame(&self) -> DeckFrame {
        self.deck.frame()
    }

    pub fn completions(&self) -> Vec<SwipeCompleted> {
        self.completions.borrow().clone()
    }

    pub fn frame_time_nanos(&self) -> u64 {
        self.frame_time_nanos
    }

    /// Press the front card with a fresh pointer id.
    pub fn press(&mut self) -> bool {
        let front = self.deck.stack().front_item().id;
        self.press_on(front)
    }

    /// Press the card showing `item_id`, whether or not it is in front.
    pub fn press_on(&mut self, item_id: ItemId) -> bool {
        self.pointer += 1;
        self.position = GESTURE_ORIGIN;
        let event = PointerEvent::down(self.position.x, self.position.y).with_id(self.pointer);
        self.deck.pointer_input(item_id, &event)
    }

    /// Move the active pointer to `dx` from the gesture origin.
    pub fn move_to(&mut self, dx: f32) -> bool {
        self.position = Point::new(GESTURE_ORIGIN.x + dx, GESTURE_ORIGIN.y);
        let event = PointerEvent::moved(self.position.x, self.position.y).with_id(self.pointer);
        self.deck.front_pointer_input(&event)
    }

    /// Move to `dx` over a few intermediate events.
    pub fn drag_to(&mut self, dx: f32) -> bool {
        let mut handled = true;
        for step in 1..=DRAG_STEPS {
            handled &= self.move_to(dx * step as f32 / DRAG_STEPS as f32);
        }
        handled
    }

    pub fn release(&mut self) -> bool {
        let event = PointerEvent::up(self.position.x, self.position.y).with_id(self.pointer);
        self.deck.front_pointer_input(&event)
    }

    pub fn cancel(&mut self) -> bool {
        let event = PointerEvent::cancel().with_id(self.pointer);
        self.deck.front_pointer_input(&event)
    }

    /// Press, drag to `dx` and release. Returns whether the press was accepted.
    pub fn swipe(&mut self, dx: f32) -> bool {
        if !self.press() {
            return false;
        }
        self.drag_to(dx);
        self.release()
    }

    /// Advance frame time by one 60 Hz frame and run the callbacks due.
    pub fn pump_frame(&mut self) {
        self.advance_time(FRAME_NANOS_60HZ);
    }

    pub fn advance_time(&mut self, nanos: u64) {
        self.frame_time_nanos += nanos;
        self.runtime.drain_frame_callbacks(self.frame_time_nanos);
    }

    /// Pump frames until nothing is scheduled. Returns the number of frames pumped.
    ///
    /// # Panics
    ///
    /// If the deck is still animating after [`MAX_SETTLE_FRAMES`].
    pub fn settle(&mut self) -> usize {
        let mut frames = 0;
        while self.runtime.needs_frame() {
            assert!(
                frames < MAX_SETTLE_FRAMES,
                "deck still animating after {frames} frames"
            );
            self.pump_frame();
            frames += 1;
        }
        log::trace!("robot: settled after {frames} frames");
        frames
    }
}
