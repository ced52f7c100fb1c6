mod script;

use anyhow::{Context, Result};
use cardstack::{CardStack, CardVisual, DeckConfig, DeckEvent, ManualClock, Point, Size};
use clap::Parser;
use script::{parse_script, Step};
use std::path::PathBuf;

const FRAME_MILLIS: u64 = 16;
const DRAG_FRAMES: usize = 6;
const MAX_SETTLE_FRAMES: usize = 600;
const DEFAULT_SCRIPT: &str =
    "drag:40,10 drag:-160,20 right wait:300 undo wait:300 drag:30,-220 tap up down wait:400";

#[derive(Debug, Parser)]
#[command(
    name = "deck-demo",
    about = "Run a scripted swipe session against a headless card deck",
    version
)]
struct Cli {
    /// TOML deck preset; defaults apply to missing fields.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Number of cards in the deck.
    #[arg(long, default_value_t = 12, value_parser = clap::value_parser!(u32).range(1..))]
    cards: u32,

    #[arg(long, default_value_t = 360.0)]
    width: f32,

    #[arg(long, default_value_t = 640.0)]
    height: f32,

    /// Whitespace separated steps, e.g. "drag:-150,0 wait:300 undo".
    #[arg(long, default_value = DEFAULT_SCRIPT)]
    script: String,

    /// Print the effective config as TOML and exit.
    #[arg(long)]
    dump_config: bool,

    /// Print every card transform after each step.
    #[arg(long)]
    visuals: bool,
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format_timestamp_millis()
        .init();

    let cli = Cli::parse();
    let config = match &cli.config {
        Some(path) => DeckConfig::load(path)
            .with_context(|| format!("loading deck config {}", path.display()))?,
        None => DeckConfig::default(),
    };
    if cli.dump_config {
        print!("{}", config.to_toml_string()?);
        return Ok(());
    }
    let steps = parse_script(&cli.script)?;

    let cards: Vec<String> = (1..=cli.cards).map(|n| format!("card-{n:02}")).collect();
    let clock = ManualClock::new();
    let mut session = Session::new(cards, config, clock, Size::new(cli.width, cli.height))?;

    println!("=== cardstack scripted session ===");
    session.report("start", cli.visuals);
    for step in steps {
        session.run(step);
        session.report(&format!("{step:?}"), cli.visuals);
    }
    session.settle();
    session.report("settled", cli.visuals);
    Ok(())
}

struct Session {
    stack: CardStack<String, ManualClock>,
    clock: ManualClock,
    _subscription: cardstack::Subscription,
}

impl Session {
    fn new(cards: Vec<String>, config: DeckConfig, clock: ManualClock, size: Size) -> Result<Self> {
        let mut stack = CardStack::with_clock(cards, config, clock.clone())?;
        stack.set_container_size(size);
        stack.on_swipe(|card, direction| log::info!("swiped {card} {direction:?}"));
        stack.on_undo(|card| log::info!("restored {card}"));
        let subscription = stack.subscribe(|event| match event {
            DeckEvent::DetailVisibilityChanged(visible) => {
                log::info!("detail view {}", if *visible { "shown" } else { "hidden" })
            }
            other => log::debug!("{other:?}"),
        });
        Ok(Self {
            stack,
            clock,
            _subscription: subscription,
        })
    }

    fn run(&mut self, step: Step) {
        match step {
            Step::Swipe(direction) => {
                if !self.stack.swipe(direction) {
                    log::warn!("swipe {direction:?} had no effect");
                }
            }
            Step::Drag(target) => {
                self.drag_to(target);
                let committed = self.stack.on_drag_ended(target, None);
                log::info!("released at {target:?}: {committed:?}");
            }
            Step::Hold(target) => {
                self.drag_to(target);
                let hold = self.stack.deck().config().hold_duration_millis;
                self.advance(hold + FRAME_MILLIS);
                self.stack.on_drag_ended(target, None);
            }
            Step::Cancel(target) => {
                self.drag_to(target);
                self.stack.on_drag_cancelled();
            }
            Step::Undo => {
                if !self.stack.undo() {
                    log::warn!("undo had no effect");
                }
            }
            Step::Tap => {
                self.stack.on_tap();
            }
            Step::Wait(millis) => self.advance(millis),
        }
    }

    fn drag_to(&mut self, target: Point) {
        for frame in 1..=DRAG_FRAMES {
            let t = frame as f32 / DRAG_FRAMES as f32;
            self.stack
                .on_drag_changed(Point::new(target.x * t, target.y * t));
            self.frame();
        }
    }

    fn frame(&mut self) -> bool {
        self.clock.advance_millis(FRAME_MILLIS);
        self.stack.tick()
    }

    fn advance(&mut self, millis: u64) {
        for _ in 0..millis.div_ceil(FRAME_MILLIS) {
            self.frame();
        }
    }

    fn settle(&mut self) {
        for _ in 0..MAX_SETTLE_FRAMES {
            if !self.frame() {
                return;
            }
        }
        log::warn!("deck still busy after {MAX_SETTLE_FRAMES} frames");
    }

    fn report(&self, label: &str, visuals: bool) {
        let window: Vec<usize> = self
            .stack
            .renderable_window()
            .into_iter()
            .map(|(_, index)| index)
            .collect();
        println!(
            "[{:>5}ms] {label:<28} top={:<8} window={window:?} history={}",
            self.clock.elapsed().as_millis(),
            self.stack.top_item().map(String::as_str).unwrap_or("-"),
            self.stack.deck().history().len(),
        );
        if visuals {
            for visual in self.stack.visuals() {
                print_visual(&visual);
            }
        }
    }
}

fn print_visual(visual: &CardVisual) {
    let layer = visual.layer;
    let overlay = visual
        .overlay
        .map(|overlay| format!("{:?} {:.2}", overlay.direction, overlay.opacity))
        .unwrap_or_default();
    println!(
        "    #{:<3} z={} offset=({:>7.1},{:>7.1}) rot={:>5.1} scale={:.3} alpha={:.2} {}{}",
        visual.index,
        visual.z_index,
        layer.translation_x,
        layer.translation_y,
        layer.rotation_z,
        layer.scale,
        layer.alpha,
        overlay,
        if visual.interactive { " *" } else { "" },
    );
}
