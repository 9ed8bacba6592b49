use std::env;

use rand::{thread_rng, Rng as _};

use smaze::dims::Dims;
use smaze::maze::algorithms::{generate, Solver};
use smaze::maze::{CellWall, Maze};
use smaze::observer::NullObserver;
use smaze::progress::ProgressHandle;

fn main() {
    let args = env::args()
        .skip(1)
        .take(3)
        .map(|s| s.parse())
        .collect::<Result<Vec<i64>, _>>()
        .expect("Expected integers");

    assert!(
        args.len() == 2 || args.len() == 3,
        "Usage: generator <width> <height> [seed]"
    );

    let size = Dims(args[0] as i32, args[1] as i32);
    let input_seed = args.get(2).copied().map(|seed| seed as u64);
    let seed = input_seed.unwrap_or_else(|| thread_rng().gen());

    if input_seed.is_none() {
        println!("Seed: {}", seed);
    }

    let mut maze = generate(
        Dims::ZERO,
        size,
        Some(seed),
        &mut NullObserver,
        ProgressHandle::new(),
    )
    .expect("generation failed");

    let report = Solver::solve(&mut maze, &mut NullObserver);
    println!(
        "found: {}, explored: {}, path: {}, efficiency: {:.2}",
        report.found,
        report.explored,
        report.path_length,
        report.efficiency()
    );

    show_maze(&maze);
}

fn show_maze(maze: &Maze) {
    let Dims(w, h) = maze.size();

    for y in 0..h {
        for x in 0..w {
            let cell = maze.get_cell(Dims(x, y)).unwrap();
            print!("+");
            print!(
                "{}",
                if cell.is_wall_present(CellWall::Top) {
                    "---"
                } else {
                    "   "
                }
            );
        }
        println!("+");

        for x in 0..w {
            let cell = maze.get_cell(Dims(x, y)).unwrap();
            print!(
                "{}",
                if cell.is_wall_present(CellWall::Left) {
                    "|"
                } else {
                    " "
                }
            );
            print!("{}", if cell.is_on_path() { " * " } else { "   " });
        }
        println!(
            "{}",
            if maze
                .get_cell(Dims(w - 1, y))
                .unwrap()
                .is_wall_present(CellWall::Right)
            {
                "|"
            } else {
                " "
            }
        );
    }

    for x in 0..w {
        let cell = maze.get_cell(Dims(x, h - 1)).unwrap();
        print!("+");
        print!(
            "{}",
            if cell.is_wall_present(CellWall::Bottom) {
                "---"
            } else {
                "   "
            }
        );
    }
    println!("+");
}
