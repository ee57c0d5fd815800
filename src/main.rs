#[macro_use]
extern crate derive_more;

use ggez::conf::{WindowMode, WindowSetup};
use ggez::{event, ContextBuilder};

use crate::app::App;
use crate::basic::{BoardDim, Point, Pos};
use crate::error::{ErrorConversion, Result};

mod app;
mod basic;
mod color;
mod error;
mod snake;
mod surface;

const SCREEN_SIZE: Point = Point { x: 800., y: 800. };
const BOARD_DIM: BoardDim = Pos { x: 40, y: 40 };

fn main() -> Result {
    let wm = WindowMode::default()
        .dimensions(SCREEN_SIZE.x, SCREEN_SIZE.y)
        .resizable(false);

    let ws = WindowSetup::default().title("snake").vsync(true);

    let (ctx, event_loop) = ContextBuilder::new("pixel_snake", "player")
        .window_mode(wm)
        .window_setup(ws)
        .build()?;

    let app = App::new(SCREEN_SIZE, BOARD_DIM).with_trace_step("main")?;
    event::run(ctx, event_loop, app)
}
