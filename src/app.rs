use ggez::event::EventHandler;
use ggez::graphics::{self, Canvas, DrawMode, DrawParam, Mesh, MeshBuilder, Rect, Text};
use ggez::input::keyboard::{KeyCode, KeyInput};
use ggez::{Context, GameResult};
use rand::rngs::ThreadRng;

use crate::basic::{BoardDim, Point};
use crate::error::{ErrorConversion, Result};
use crate::snake::{Snake, State, Tick};
use crate::surface::Surface;

/// Fixed-rate simulation speed
const TICKS_PER_SECOND: u32 = 12;

pub struct App {
    surface: Surface,
    snake: Snake,
    rng: ThreadRng,
    score: i32,
    /// Latched when the engine reports death so the game-over banner
    /// stays up
    finished: bool,
}

impl App {
    pub fn new(screen_size: Point, board_dim: BoardDim) -> Result<Self> {
        let mut rng = rand::thread_rng();
        let mut surface = Surface::new(screen_size, board_dim);
        let snake = Snake::new(&mut surface, &mut rng).with_trace_step("App::new")?;
        Ok(Self {
            surface,
            snake,
            rng,
            score: 0,
            finished: false,
        })
    }

    fn banner(&self) -> Option<(&'static str, Point)> {
        if self.finished {
            Some(("GAME OVER", Point { x: 265., y: 370. }))
        } else if self.snake.state == State::Paused {
            Some(("PAUSED", Point { x: 310., y: 370. }))
        } else {
            None
        }
    }
}

impl EventHandler<ggez::GameError> for App {
    fn update(&mut self, ctx: &mut Context) -> GameResult {
        while ctx.time.check_update_time(TICKS_PER_SECOND) {
            if self.finished {
                continue;
            }
            match self.snake.tick(&mut self.surface, &mut self.rng) {
                Tick::Died => self.finished = true,
                tick => self.score += tick.score_delta(),
            }
        }
        Ok(())
    }

    fn draw(&mut self, ctx: &mut Context) -> GameResult {
        let mut canvas = Canvas::from_frame(ctx, graphics::Color::WHITE);

        let cell_dim = self.surface.cell_dim();
        let mut builder = MeshBuilder::new();
        for (corner, color) in self.surface.materialize() {
            builder.rectangle(
                DrawMode::fill(),
                Rect::new(corner.x, corner.y, cell_dim.x, cell_dim.y),
                color.into(),
            )?;
        }
        let mesh = Mesh::from_data(ctx, builder.build());
        canvas.draw(&mesh, DrawParam::default());

        let mut score_text = Text::new(format!("score: {}", self.score));
        score_text.set_scale(32.);
        canvas.draw(&score_text, DrawParam::default().color(graphics::Color::BLACK));

        if let Some((message, dest)) = self.banner() {
            let mut text = Text::new(message);
            text.set_scale(60.);
            canvas.draw(&text, DrawParam::default().dest(dest).color(graphics::Color::BLACK));
        }

        canvas.finish(ctx)
    }

    fn key_down_event(&mut self, _ctx: &mut Context, input: KeyInput, _repeated: bool) -> GameResult {
        match input.keycode {
            Some(KeyCode::Up) => {
                self.snake.move_up(true);
            }
            Some(KeyCode::Down) => {
                self.snake.move_down(true);
            }
            Some(KeyCode::Left) => {
                self.snake.move_left(true);
            }
            Some(KeyCode::Right) => {
                self.snake.move_right(true);
            }
            Some(KeyCode::Escape) => {
                self.snake.pause();
            }
            Some(KeyCode::Space) => {
                self.snake.fun_key(true);
                self.snake.resume();
            }
            _ => {}
        }
        Ok(())
    }

    fn key_up_event(&mut self, _ctx: &mut Context, input: KeyInput) -> GameResult {
        match input.keycode {
            Some(KeyCode::Up) => {
                self.snake.move_up(false);
            }
            Some(KeyCode::Down) => {
                self.snake.move_down(false);
            }
            Some(KeyCode::Left) => {
                self.snake.move_left(false);
            }
            Some(KeyCode::Right) => {
                self.snake.move_right(false);
            }
            Some(KeyCode::Space) => {
                self.snake.fun_key(false);
            }
            _ => {}
        }
        Ok(())
    }

    fn focus_event(&mut self, _ctx: &mut Context, gained: bool) -> GameResult {
        if !gained && !self.finished {
            self.snake.pause();
        }
        Ok(())
    }
}
