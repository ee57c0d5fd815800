use crate::color::Color;

#[derive(Copy, Clone, Debug)]
pub struct Palette {
    pub head: Color,
    pub body: Color,
    pub food: Color,
}

impl Palette {
    pub const DEFAULT: Self = Self {
        head: Color::from_rgb(0, 0, 255),
        body: Color::from_rgb(150, 150, 150),
        food: Color::from_rgb(255, 255, 0),
    };
}
