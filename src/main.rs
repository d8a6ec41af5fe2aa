//! Terminal runner (default binary).
//!
//! Polls the keyboard every frame, calls the engine's gravity step whenever the
//! current drop interval has elapsed and redraws through the framebuffer
//! renderer. After a session ends the final numbers stay on screen for a moment
//! with gravity paused.

use std::time::{Duration, Instant};

use anyhow::Result;
use clap::Parser;
use crossterm::event::{self, Event, KeyEventKind};
use log::info;

use blockfall::cli::Args;
use blockfall::core::{GameSnapshot, GameState, RandomSource};
use blockfall::input::{should_quit, InputHandler};
use blockfall::logging;
use blockfall::term::{FrameBuffer, GameView, Overlay, TerminalRenderer, Viewport};
use blockfall::types::{GameAction, GameEvent, TICK_MS};

const GAME_OVER_BANNER: Duration = Duration::from_millis(2500);

fn main() -> Result<()> {
    let args = Args::parse();
    if let Some(path) = &args.log_file {
        logging::init(path, args.log_level)?;
    }

    let config = args.engine_config()?;
    let mut game = GameState::new(config, args.random_source())?;
    info!(
        "starting {}x{} game with {} shapes",
        game.grid().rows(),
        game.grid().cols(),
        game.shapes().len()
    );

    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term, &mut game);

    // Always try to restore terminal state.
    let _ = term.exit();
    result
}

fn run<R: RandomSource>(term: &mut TerminalRenderer, game: &mut GameState<R>) -> Result<()> {
    let view = GameView::default();
    let mut input = InputHandler::new();
    let mut fb = FrameBuffer::new(0, 0);
    let mut snap = GameSnapshot::default();

    let frame = Duration::from_millis(TICK_MS as u64);
    let mut last_frame = Instant::now();
    let mut last_drop = Instant::now();
    let mut banner: Option<(Overlay, Instant)> = None;

    loop {
        // Render.
        game.snapshot_into(&mut snap);
        let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
        let overlay = banner.as_ref().map(|(overlay, _)| overlay);
        view.render_into(&snap, overlay, Viewport::new(w, h), &mut fb);
        term.present(&mut fb)?;

        // Input with timeout until the next frame.
        if event::poll(frame.saturating_sub(last_frame.elapsed()))? {
            match event::read()? {
                Event::Key(key) => {
                    if key.kind != KeyEventKind::Release && should_quit(key) {
                        return Ok(());
                    }
                    if let Some(action) = input.handle_key(key) {
                        game.apply_action(action);
                        if banner.take().is_some() || action == GameAction::Restart {
                            last_drop = Instant::now();
                        }
                    }
                }
                Event::Resize(..) => term.invalidate(),
                _ => {}
            }
        }

        // Frame timers.
        let elapsed = last_frame.elapsed();
        if elapsed >= frame {
            last_frame = Instant::now();
            if let Some(action) = input.update(elapsed.as_millis() as u32) {
                game.apply_action(action);
            }
        }

        // Gravity.
        match banner {
            Some((_, shown_at)) => {
                if shown_at.elapsed() >= GAME_OVER_BANNER {
                    banner = None;
                    last_drop = Instant::now();
                }
            }
            None => {
                let interval = Duration::from_millis(game.drop_interval_ms() as u64);
                if last_drop.elapsed() >= interval {
                    last_drop = Instant::now();
                    game.tick();
                }
            }
        }

        if let Some(GameEvent::GameOver { score, lines, level }) = game.take_last_event() {
            input.reset();
            banner = Some((Overlay::GameOver { score, lines, level }, Instant::now()));
        }
    }
}
