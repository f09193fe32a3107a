use std::time::Duration;

use anyhow::{bail, Context, Result};
use swipestack_core::Runtime;
use swipestack_ui::{Color, DeckConfig, DeckFrame, ImageRef, Item, PointerEvent, SwipeDeck};
use web_time::Instant;

mod cards;

/// Logical width of the phone-sized screen the deck is laid out for.
const SCREEN_WIDTH: f32 = 375.0;
const FRAME_INTERVAL: Duration = Duration::from_micros(16_667);
const MAX_FRAMES: usize = 600;
const TOUCH_Y: f32 = 320.0;

struct Driver {
    runtime: Runtime,
    deck: SwipeDeck,
    clock: Instant,
    pointer: u64,
}

impl Driver {
    fn frame_nanos(&self) -> u64 {
        u64::try_from(self.clock.elapsed().as_nanos()).unwrap_or(u64::MAX)
    }

    fn swipe(&mut self, label: &str, dx: f32) -> Result<()> {
        log::info!("--- {label}: drag {dx:+.0}");
        self.pointer += 1;
        let start_x = SCREEN_WIDTH / 2.0;
        let down = PointerEvent::down(start_x, TOUCH_Y).with_id(self.pointer);
        if !self.deck.front_pointer_input(&down) {
            bail!("{label}: front card did not accept the press");
        }
        for step in 1..=6 {
            let x = start_x + dx * step as f32 / 6.0;
            self.deck
                .front_pointer_input(&PointerEvent::moved(x, TOUCH_Y).with_id(self.pointer));
            self.pump_frame();
            if step == 3 {
                log_frame(&self.deck.frame());
            }
        }
        let up = PointerEvent::up(start_x + dx, TOUCH_Y).with_id(self.pointer);
        self.deck.front_pointer_input(&up);
        self.settle().with_context(|| format!("{label}: deck did not settle"))?;
        log_frame(&self.deck.frame());
        Ok(())
    }

    fn pump_frame(&self) {
        std::thread::sleep(FRAME_INTERVAL);
        self.runtime.drain_frame_callbacks(self.frame_nanos());
    }

    fn settle(&self) -> Result<usize> {
        let started = Instant::now();
        let mut frames = 0;
        while self.runtime.needs_frame() {
            if frames == MAX_FRAMES {
                bail!("still animating after {frames} frames");
            }
            self.pump_frame();
            frames += 1;
        }
        log::info!(
            "settled after {frames} frames ({:.0} ms)",
            started.elapsed().as_secs_f64() * 1000.0
        );
        Ok(frames)
    }
}

fn log_frame(frame: &DeckFrame) {
    log::info!(
        "offset {:+8.2}  reject {:.2}  accept {:.2}",
        frame.drag_offset,
        frame.indicators.reject,
        frame.indicators.accept
    );
    for card in frame.draw_order() {
        let layer = card.layer;
        log::info!(
            "  item {} (pos {}): x {:+8.2} rot {:+6.2} scale {:.3} z {}",
            card.item_id,
            card.relative_position,
            layer.translation_x,
            layer.rotation_degrees,
            layer.scale,
            layer.z_index
        );
    }
}

fn build_items() -> Result<Vec<Item>> {
    cards::CARDS
        .iter()
        .map(|card| {
            let color = Color::from_hex(card.color)
                .with_context(|| format!("card {} has bad color {:?}", card.id, card.color))?;
            Ok(Item::new(card.id, card.name, color, ImageRef::new(card.image)))
        })
        .collect()
}

fn main() -> Result<()> {
    #[cfg(feature = "logging")]
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format_timestamp_millis()
        .init();

    let runtime = Runtime::default();
    let items = build_items()?;
    let deck = SwipeDeck::new(items, DeckConfig::new(SCREEN_WIDTH), runtime.handle())
        .context("building deck")?;
    {
        let stack = deck.stack().clone();
        deck.on_swipe_complete(move |event| {
            let front = stack.front_item();
            log::info!(
                "swiped {:?}: item {} gone, now showing {} ({}, {})",
                event.direction,
                event.dismissed,
                front.label,
                front.color,
                front.image.as_str()
            );
        });
    }

    let mut driver = Driver {
        runtime,
        deck,
        clock: Instant::now(),
        pointer: 0,
    };
    log_frame(&driver.deck.frame());

    driver.swipe("commit right", 200.0)?;
    driver.swipe("cancel", 50.0)?;
    driver.swipe("commit left", -180.0)?;

    log::info!(
        "done: front index {} of {}",
        driver.deck.stack().front_index(),
        driver.deck.stack().total_cards()
    );
    Ok(())
}
