use std::collections::VecDeque;

use rand::Rng;
use static_assertions::const_assert;

pub use palette::Palette;

use crate::basic::board::random_free_spot;
use crate::basic::{BoardDim, Dir, Pos};
use crate::error::{ErrorType, Result};
use crate::surface::Surface;

pub mod palette;

/// Smallest board the fixed start position fits on with room to move
pub const MIN_BOARD_DIM: BoardDim = Pos { x: 22, y: 22 };

const START_HEAD: Pos = Pos { x: 20, y: 20 };

// the 2-cell start body (head plus one tail cell to its right)
// must lie within the minimum board
const_assert!(START_HEAD.x + 1 < MIN_BOARD_DIM.x);
const_assert!(START_HEAD.y < MIN_BOARD_DIM.y);

#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub enum State {
    Running,
    Paused,
    Over,
}

/// Outcome of a single simulation tick
#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub enum Tick {
    /// Nothing happened (paused or game over)
    Idle,
    Moved,
    Ate,
    /// The snake ran into itself, reported exactly once
    Died,
}

impl Tick {
    pub fn score_delta(self) -> i32 {
        match self {
            Tick::Idle | Tick::Moved => 0,
            Tick::Ate => 1,
            Tick::Died => -1,
        }
    }
}

pub struct Snake {
    /// Cells of the body, head-first
    pub body: VecDeque<Pos>,
    /// Direction the snake is currently going
    pub dir: Dir,
    /// `None` only when no free cell was left to place food on
    pub food: Option<Pos>,
    pub state: State,
    /// Set when a change of direction has been accepted, blocks further
    /// changes until the next tick consumes the pending one
    pub dir_grace: bool,
    pub board_dim: BoardDim,
    pub palette: Palette,
}

impl Snake {
    /// Places the start body and the first food item onto `surface`.
    /// The surface has to be strictly larger than 21×21 cells.
    pub fn new(surface: &mut Surface, rng: &mut impl Rng) -> Result<Self> {
        let board_dim = surface.dim();
        if board_dim.x < MIN_BOARD_DIM.x || board_dim.y < MIN_BOARD_DIM.y {
            return Err(ErrorType::BoardTooSmall { dim: board_dim, min: MIN_BOARD_DIM }.into());
        }

        let mut snake = Self {
            body: VecDeque::from([START_HEAD, START_HEAD.translate(Dir::R, 1)]),
            dir: Dir::L,
            food: None,
            state: State::Running,
            // block steering until the first tick
            dir_grace: true,
            board_dim,
            palette: Palette::DEFAULT,
        };

        snake.draw(surface);
        if !snake.gen_food(surface, rng) {
            return Err(ErrorType::NoFreeCell.into());
        }
        Ok(snake)
    }

    pub fn head(&self) -> Pos {
        self.body[0]
    }

    /// Advance the simulation by one step.
    ///
    /// The returned score delta is +1 when food was eaten, -1 exactly
    /// once when the snake dies and 0 otherwise.
    pub fn tick(&mut self, surface: &mut Surface, rng: &mut impl Rng) -> Tick {
        self.dir_grace = false;
        if self.state != State::Running {
            return Tick::Idle;
        }

        let candidate = self.head().wrapping_translate(self.dir, 1, self.board_dim);
        let cell = surface.query(candidate);

        if cell.occupied {
            if cell.color == self.palette.body {
                self.state = State::Over;
                return Tick::Died;
            }

            // food: the head takes its cell, the tail stays put
            self.body.push_front(candidate);
            self.food = None;
            self.draw(surface);
            if !self.gen_food(surface, rng) {
                eprintln!("warning: no space left for new food");
            }
            Tick::Ate
        } else {
            self.body.pop_back();
            self.body.push_front(candidate);
            self.draw(surface);
            Tick::Moved
        }
    }

    /// Place food on a uniformly random free cell, false if the board
    /// is entirely full
    pub fn gen_food(&mut self, surface: &mut Surface, rng: &mut impl Rng) -> bool {
        match random_free_spot(&surface.occupied_cells(), self.board_dim, rng) {
            Some(pos) => {
                assert!(surface.set_cell(pos, self.palette.food, false));
                self.food = Some(pos);
                true
            }
            None => false,
        }
    }

    fn steer(&mut self, dir: Dir, holding: bool) -> bool {
        if holding && self.state == State::Running && !self.dir_grace && !dir.same_axis_as(self.dir)
        {
            self.dir = dir;
            self.dir_grace = true;
            true
        } else {
            false
        }
    }

    pub fn move_up(&mut self, holding: bool) -> bool {
        self.steer(Dir::U, holding)
    }

    pub fn move_down(&mut self, holding: bool) -> bool {
        self.steer(Dir::D, holding)
    }

    pub fn move_left(&mut self, holding: bool) -> bool {
        self.steer(Dir::L, holding)
    }

    pub fn move_right(&mut self, holding: bool) -> bool {
        self.steer(Dir::R, holding)
    }

    /// Reserved extension hook (bound to space), intentionally inert
    pub fn fun_key(&mut self, _holding: bool) -> bool {
        false
    }

    pub fn pause(&mut self) -> bool {
        if self.state == State::Running {
            self.state = State::Paused;
            true
        } else {
            false
        }
    }

    pub fn resume(&mut self) -> bool {
        if self.state == State::Paused {
            self.state = State::Running;
            true
        } else {
            false
        }
    }

    /// Full redraw: clear the surface, then write the body (head in its
    /// own color) and the food
    pub fn draw(&self, surface: &mut Surface) {
        surface.clear_all();
        let mut segments = self.body.iter();
        if let Some(&head) = segments.next() {
            assert!(surface.set_cell(head, self.palette.head, false));
        }
        for &segment in segments {
            assert!(surface.set_cell(segment, self.palette.body, false));
        }
        if let Some(food) = self.food {
            surface.set_cell(food, self.palette.food, false);
        }
    }
}

#[cfg(test)]
use crate::basic::Point;
#[cfg(test)]
use rand::rngs::StdRng;
#[cfg(test)]
use rand::SeedableRng;

#[cfg(test)]
fn test_game(dim: isize, seed: u64) -> (Surface, Snake, StdRng) {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut surface = Surface::new(Point { x: 800., y: 800. }, BoardDim { x: dim, y: dim });
    let snake = Snake::new(&mut surface, &mut rng).unwrap();
    (surface, snake, rng)
}

/// Move the food to a known cell so tests don't depend on where the
/// seeded rng happened to place it
#[cfg(test)]
fn park_food(surface: &mut Surface, snake: &mut Snake, pos: Pos) {
    let old = snake.food.take().unwrap();
    surface.clear_cell(old);
    snake.food = Some(pos);
    assert!(surface.set_cell(pos, snake.palette.food, false));
}

#[test]
fn test_start_position_and_first_tick() {
    let (mut surface, mut snake, mut rng) = test_game(40, 0);
    assert_eq!(snake.head(), Pos { x: 20, y: 20 });
    assert_eq!(snake.body[1], Pos { x: 21, y: 20 });
    assert_eq!(snake.dir, Dir::L);
    assert_eq!(snake.state, State::Running);

    park_food(&mut surface, &mut snake, Pos { x: 0, y: 0 });
    let tick = snake.tick(&mut surface, &mut rng);
    assert_eq!(tick, Tick::Moved);
    assert_eq!(tick.score_delta(), 0);
    assert_eq!(snake.head(), Pos { x: 19, y: 20 });
    assert_eq!(snake.body[1], Pos { x: 20, y: 20 });
    assert_eq!(snake.body.len(), 2);
}

#[test]
fn test_min_board_size() {
    let mut rng = StdRng::seed_from_u64(0);
    for dim in [10, 21] {
        let mut surface = Surface::new(Point { x: 800., y: 800. }, BoardDim { x: dim, y: dim });
        assert!(Snake::new(&mut surface, &mut rng).is_err());
    }
    let mut surface = Surface::new(Point { x: 800., y: 800. }, BoardDim { x: 22, y: 22 });
    assert!(Snake::new(&mut surface, &mut rng).is_ok());
}

#[test]
fn test_no_reversal() {
    let (mut surface, mut snake, mut rng) = test_game(40, 1);
    snake.tick(&mut surface, &mut rng);
    // heading left: neither left nor right is accepted
    assert!(!snake.move_right(true));
    assert!(!snake.move_left(true));
    assert_eq!(snake.dir, Dir::L);
    assert!(snake.move_down(true));
    assert_eq!(snake.dir, Dir::D);
}

#[test]
fn test_one_turn_per_tick() {
    let (mut surface, mut snake, mut rng) = test_game(40, 2);
    park_food(&mut surface, &mut snake, Pos { x: 0, y: 0 });
    snake.tick(&mut surface, &mut rng);

    assert!(snake.move_up(true));
    // a second change within the same tick is blocked
    assert!(!snake.move_left(true));
    assert_eq!(snake.dir, Dir::U);

    snake.tick(&mut surface, &mut rng);
    assert!(snake.move_left(true));
    assert_eq!(snake.dir, Dir::L);
}

#[test]
fn test_turn_blocked_before_first_tick() {
    let (_surface, mut snake, _rng) = test_game(40, 3);
    assert!(!snake.move_up(true));
    assert_eq!(snake.dir, Dir::L);
}

#[test]
fn test_key_release_ignored() {
    let (mut surface, mut snake, mut rng) = test_game(40, 4);
    snake.tick(&mut surface, &mut rng);
    assert!(!snake.move_up(false));
    assert_eq!(snake.dir, Dir::L);
    assert!(snake.move_up(true));
}

#[test]
fn test_wraparound() {
    let (mut surface, mut snake, mut rng) = test_game(40, 5);
    park_food(&mut surface, &mut snake, Pos { x: 0, y: 0 });
    // 21 cells straight left from x=20 crosses the edge once
    for _ in 0..21 {
        assert_eq!(snake.tick(&mut surface, &mut rng), Tick::Moved);
    }
    assert_eq!(snake.head(), Pos { x: 39, y: 20 });
    assert_eq!(snake.state, State::Running);
}

#[test]
fn test_growth() {
    let (mut surface, mut snake, mut rng) = test_game(40, 6);
    park_food(&mut surface, &mut snake, Pos { x: 19, y: 20 });

    let tick = snake.tick(&mut surface, &mut rng);
    assert_eq!(tick, Tick::Ate);
    assert_eq!(tick.score_delta(), 1);
    assert_eq!(snake.head(), Pos { x: 19, y: 20 });
    assert_eq!(snake.body.len(), 3);

    // a new food item was placed on a cell the body doesn't cover
    let food = snake.food.unwrap();
    assert!(!snake.body.contains(&food));
    let cell = surface.query(food);
    assert!(cell.occupied);
    assert_eq!(cell.color, snake.palette.food);
}

#[test]
fn test_self_collision_is_sticky() {
    let (mut surface, mut snake, mut rng) = test_game(40, 7);
    park_food(&mut surface, &mut snake, Pos { x: 0, y: 0 });

    // a 2×2 loop about to bite its own tail
    snake.body = VecDeque::from([
        Pos { x: 20, y: 20 },
        Pos { x: 21, y: 20 },
        Pos { x: 21, y: 21 },
        Pos { x: 20, y: 21 },
    ]);
    snake.dir = Dir::D;
    snake.draw(&mut surface);

    let tick = snake.tick(&mut surface, &mut rng);
    assert_eq!(tick, Tick::Died);
    assert_eq!(tick.score_delta(), -1);
    assert_eq!(snake.state, State::Over);
    assert_eq!(snake.head(), Pos { x: 20, y: 20 });
    assert_eq!(snake.body.len(), 4);

    // terminal: later ticks and inputs are no-ops
    let tick = snake.tick(&mut surface, &mut rng);
    assert_eq!(tick, Tick::Idle);
    assert_eq!(tick.score_delta(), 0);
    assert_eq!(snake.head(), Pos { x: 20, y: 20 });
    assert!(!snake.move_up(true));
    assert!(!snake.pause());
    assert!(!snake.resume());
}

#[test]
fn test_pause_resume() {
    let (mut surface, mut snake, mut rng) = test_game(40, 8);
    park_food(&mut surface, &mut snake, Pos { x: 0, y: 0 });

    assert!(snake.pause());
    assert!(!snake.pause());
    assert_eq!(snake.tick(&mut surface, &mut rng), Tick::Idle);
    assert_eq!(snake.head(), Pos { x: 20, y: 20 });
    assert!(!snake.move_up(true));

    assert!(snake.resume());
    assert!(!snake.resume());
    assert_eq!(snake.tick(&mut surface, &mut rng), Tick::Moved);
    assert_eq!(snake.head(), Pos { x: 19, y: 20 });
}

#[test]
fn test_fun_key_is_inert() {
    let (_surface, mut snake, _rng) = test_game(40, 9);
    assert!(!snake.fun_key(true));
    assert!(!snake.fun_key(false));
    assert_eq!(snake.state, State::Running);
    assert_eq!(snake.dir, Dir::L);
}

#[test]
fn test_gen_food_exhaustion() {
    let (mut surface, mut snake, mut rng) = test_game(22, 10);
    // fill the entire board
    for y in 0..22_isize {
        for x in 0..22_isize {
            surface.set_cell(Pos { x, y }, snake.palette.body, true);
        }
    }
    assert!(!snake.gen_food(&mut surface, &mut rng));

    // with exactly one free cell, food must land there
    assert!(surface.clear_cell(Pos { x: 9, y: 9 }));
    assert!(snake.gen_food(&mut surface, &mut rng));
    assert_eq!(snake.food, Some(Pos { x: 9, y: 9 }));
}

#[test]
fn test_draw_is_a_full_redraw() {
    use crate::color::Color;

    let (mut surface, mut snake, _rng) = test_game(40, 11);
    // scribble on the surface, draw must reproduce exactly the game state
    surface.set_cell(Pos { x: 0, y: 39 }, Color::BLACK, true);
    snake.draw(&mut surface);

    assert_eq!(surface.occupied_cells().len(), snake.body.len() + 1);
    assert_eq!(surface.query(snake.head()).color, snake.palette.head);
    assert_eq!(surface.query(snake.body[1]).color, snake.palette.body);
    assert_eq!(surface.query(snake.food.unwrap()).color, snake.palette.food);
}
