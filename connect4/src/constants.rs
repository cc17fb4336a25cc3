pub const HEIGHT: usize = 6;
pub const WIDTH: usize = 7;
pub const CONNECT: usize = 4;

pub const NUM_CELLS: usize = HEIGHT * WIDTH;
