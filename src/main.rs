use log::info;

use maze_steps::{Backtracker, Generator};

fn main() {
    env_logger::init();

    let (width, height) = (16 * 3, 9 * 3);
    let mut maze = Backtracker::new(width, height);

    let mut carved = 0;
    while maze.step().is_some() {
        carved += 1;
    }

    info!("carved {} passages in a {}x{} maze", carved, width, height);

    print!("{}", maze.grid().ascii());
}
