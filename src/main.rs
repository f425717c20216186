//! Terminal game entrypoint.

use std::time::{Duration, Instant, SystemTime, UNIX_EPOCH};

use anyhow::Result;
use crossterm::event::{self, Event, KeyEventKind};

use blockfall::core::GameState;
use blockfall::input::{action_for_key, should_quit, InputHandler};
use blockfall::score_file;
use blockfall::term::{FrameBuffer, GameView, TerminalRenderer, Viewport};
use blockfall::types::{GameAction, SOFT_DROP_GRACE_MS, TICK_MS};

fn main() -> Result<()> {
    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term);

    // Restore the terminal even when the game loop errored.
    let _ = term.exit();
    result
}

fn seed_from_clock() -> u32 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.subsec_nanos() ^ d.as_secs() as u32)
        .unwrap_or(1)
}

fn run(term: &mut TerminalRenderer) -> Result<()> {
    let score_path = score_file::default_path();
    let mut best = score_file::load(&score_path);

    let mut game = GameState::new(seed_from_clock());
    game.start();

    let view = GameView::default();
    let mut input = InputHandler::new();
    let mut fb = FrameBuffer::new(0, 0);

    let tick = Duration::from_millis(TICK_MS as u64);
    let mut last_tick = Instant::now();
    // Soft drop stays engaged briefly after the last Down press so the
    // held state survives the gap between terminal key repeats.
    let mut soft_drop_grace_ms: i32 = 0;

    loop {
        let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
        view.render(&game, best, Viewport::new(w, h), &mut fb);
        term.draw_swap(&mut fb)?;

        let timeout = tick.saturating_sub(last_tick.elapsed());
        if event::poll(timeout)? {
            match event::read()? {
                Event::Key(key) => match key.kind {
                    KeyEventKind::Press => {
                        if should_quit(key) {
                            break;
                        }

                        // Movement keys go through the DAS/ARR handler so a
                        // held key repeats on its cadence; everything else
                        // applies directly.
                        if let Some(action) = input.key_pressed(key.code) {
                            if action == GameAction::SoftDrop {
                                soft_drop_grace_ms = SOFT_DROP_GRACE_MS as i32;
                            }
                            game.apply(action);
                        } else if let Some(action) = action_for_key(key) {
                            if !matches!(
                                action,
                                GameAction::MoveLeft
                                    | GameAction::MoveRight
                                    | GameAction::SoftDrop
                            ) {
                                if action == GameAction::Restart || action == GameAction::Pause {
                                    input.reset();
                                }
                                game.apply(action);
                            }
                        }
                    }
                    // Terminal auto-repeat is ignored; DAS/ARR owns repeats.
                    KeyEventKind::Repeat => {}
                    KeyEventKind::Release => input.key_released(key.code),
                },
                Event::Resize(_, _) => term.invalidate(),
                _ => {}
            }
        }

        if last_tick.elapsed() >= tick {
            last_tick = Instant::now();

            for action in input.poll_repeats(TICK_MS) {
                if action == GameAction::SoftDrop {
                    soft_drop_grace_ms = SOFT_DROP_GRACE_MS as i32;
                }
                game.apply(action);
            }

            if soft_drop_grace_ms > 0 {
                soft_drop_grace_ms -= TICK_MS as i32;
            }

            game.tick(TICK_MS, soft_drop_grace_ms > 0 || input.soft_drop_held());

            if game.score() > best {
                best = game.score();
            }
            if game.game_over() {
                let _ = score_file::save_if_better(&score_path, best);
            }
        }
    }

    score_file::save_if_better(&score_path, best)?;
    Ok(())
}
