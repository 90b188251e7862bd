use std::collections::HashMap;
use std::thread;
use std::time::{Duration, Instant};

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use danpung_core::{InputState, SCREEN_H, SCREEN_W, TICK_RATE};
use danpung_scene::SceneState;
use rand::rngs::ThreadRng;
use ratatui::{
    DefaultTerminal, Frame,
    layout::{Constraint, Layout},
    style::{Color, Stylize},
    symbols::Marker,
    text::Line,
    widgets::{Block, canvas::Canvas},
};

mod audio;
use audio::Footsteps;

/// Duration of one tick of the fixed-rate loop.
const TICK: Duration = Duration::from_millis(1000 / TICK_RATE);

/// A key counts as held if its last press or repeat arrived within this many
/// ticks. Plain terminals report repeats rather than releases, and the OS
/// repeat rate refreshes the window well before it expires.
const HOLD_WINDOW: u64 = 8;

/// How many ticks the pick-up notice stays on screen.
const NOTICE_TICKS: u64 = 72;

/// Dusk sky behind the scenery tiles.
const SKY: Color = Color::Rgb(62, 74, 96);

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;
    let terminal = ratatui::init();
    let result = App::new().run(terminal);
    ratatui::restore();
    result
}

/// The main application which holds the state and logic of the application.
struct App {
    /// Is the application running?
    running: bool,
    /// The animated scene.
    scene: SceneState,
    /// Randomness for leaf spawning.
    rng: ThreadRng,
    /// Footstep channel, absent on machines without an audio device.
    footsteps: Option<Footsteps>,
    /// Tick of the last press/repeat seen for each key.
    key_seen: HashMap<KeyCode, u64>,
    /// Monotonic tick counter.
    tick: u64,
    /// Tick until which the pick-up notice is shown.
    notice_until: u64,
}

impl App {
    /// Construct a new instance of [`App`].
    fn new() -> Self {
        Self {
            running: false,
            scene: SceneState::new(),
            rng: rand::thread_rng(),
            footsteps: Footsteps::new(),
            key_seen: HashMap::new(),
            tick: 0,
            notice_until: 0,
        }
    }

    /// Run the application's main loop at a fixed 60 Hz.
    fn run(mut self, mut terminal: DefaultTerminal) -> color_eyre::Result<()> {
        self.running = true;
        let epoch = Instant::now();
        while self.running {
            let tick_start = Instant::now();
            self.tick += 1;
            self.drain_events()?;

            let now_ms = epoch.elapsed().as_millis() as u64;
            let input = self.input_snapshot();
            let events = self.scene.update(now_ms, input, &mut self.rng);
            if events.stepped {
                if let Some(footsteps) = &self.footsteps {
                    footsteps.play();
                }
            }

            terminal.draw(|frame| self.render(frame))?;

            let elapsed = tick_start.elapsed();
            if elapsed < TICK {
                thread::sleep(TICK - elapsed);
            }
        }
        Ok(())
    }

    /// Renders the user interface.
    fn render(&mut self, frame: &mut Frame) {
        let chunks =
            Layout::vertical([Constraint::Fill(1), Constraint::Length(1)]).split(frame.area());

        let canvas = Canvas::default()
            .block(Block::bordered().title(" Autumn Stroll "))
            .marker(Marker::Braille)
            .background_color(SKY)
            .x_bounds([0.0, SCREEN_W as f64])
            .y_bounds([0.0, SCREEN_H as f64])
            .paint(|ctx| self.scene.render(ctx));
        frame.render_widget(canvas, chunks[0]);

        let footer = if self.tick < self.notice_until {
            Line::from("picked up a leaf 🍂".yellow()).centered()
        } else {
            Line::from(vec![
                "a/d".bold().yellow(),
                " walk  ".dark_gray(),
                "space".bold().yellow(),
                " pick up a leaf  ".dark_gray(),
                "q".bold().yellow(),
                " quit".dark_gray(),
            ])
            .centered()
        };
        frame.render_widget(footer, chunks[1]);
    }

    /// Drain every pending crossterm event without blocking the tick.
    fn drain_events(&mut self) -> color_eyre::Result<()> {
        while event::poll(Duration::ZERO)? {
            if let Event::Key(key) = event::read()? {
                self.on_key_event(key);
            }
        }
        Ok(())
    }

    /// Handles the key events and updates the state of [`App`].
    fn on_key_event(&mut self, key: KeyEvent) {
        match key.kind {
            KeyEventKind::Press | KeyEventKind::Repeat => {
                self.key_seen.insert(key.code, self.tick);
                match (key.modifiers, key.code) {
                    (_, KeyCode::Esc | KeyCode::Char('q'))
                    | (KeyModifiers::CONTROL, KeyCode::Char('c') | KeyCode::Char('C')) => {
                        self.quit()
                    }
                    (_, KeyCode::Char(' ')) => self.pick_up_leaf(),
                    _ => {}
                }
            }
            // Terminals with keyboard enhancement report releases; drop the
            // key immediately instead of waiting for the window to expire.
            KeyEventKind::Release => {
                self.key_seen.remove(&key.code);
            }
        }
    }

    /// True if the key was pressed or repeated within the hold window.
    fn is_held(&self, code: KeyCode) -> bool {
        self.key_seen
            .get(&code)
            .is_some_and(|&last| self.tick.saturating_sub(last) <= HOLD_WINDOW)
    }

    /// Snapshot of the held movement keys for this tick.
    fn input_snapshot(&self) -> InputState {
        InputState {
            left: self.is_held(KeyCode::Char('a')) || self.is_held(KeyCode::Left),
            right: self.is_held(KeyCode::Char('d')) || self.is_held(KeyCode::Right),
        }
    }

    /// Pure atmosphere: acknowledge the gesture on the footer line.
    fn pick_up_leaf(&mut self) {
        self.notice_until = self.tick + NOTICE_TICKS;
    }

    /// Set running to false to quit the application.
    fn quit(&mut self) {
        self.running = false;
    }
}
