#![cfg(feature = "std")]

//! Interactive terminal player: manual fleet placement and shot entry.

use std::io::{self, Write};

use rand::Rng;

use crate::board::Board;
use crate::common::{BoardError, CellState, Orientation, ShotResult};
use crate::config::{BOARD_SIZE, FLEET};
use crate::player::Player;

pub struct CliPlayer;

impl CliPlayer {
    pub fn new() -> Self {
        Self
    }
}

impl Default for CliPlayer {
    fn default() -> Self {
        Self::new()
    }
}

/// Format (row, col) as a board coordinate such as `B4`.
pub fn coord_to_string(row: usize, col: usize) -> String {
    let col_ch = (b'A' + col as u8) as char;
    format!("{}{}", col_ch, row + 1)
}

/// Parse a board coordinate such as `B4` into (row, col).
pub fn parse_coord(input: &str) -> Option<(usize, usize)> {
    if input.len() < 2 {
        return None;
    }
    let mut chars = input.chars();
    let col_ch = chars.next()?.to_ascii_uppercase();
    let col = (col_ch as u8).wrapping_sub(b'A') as usize;
    let row_str: String = chars.collect();
    let row: usize = row_str.parse().ok()?;
    if row == 0 || row > BOARD_SIZE || col >= BOARD_SIZE {
        return None;
    }
    Some((row - 1, col))
}

/// Print a board. With `reveal` unhit ships are shown; without it the board
/// renders as the opponent sees it.
pub fn print_board(board: &Board, reveal: bool) {
    print!("   ");
    for col in 0..BOARD_SIZE {
        print!(" {}", (b'A' + col as u8) as char);
    }
    println!();
    for row in 0..BOARD_SIZE {
        print!("{:2} ", row + 1);
        for col in 0..BOARD_SIZE {
            let ch = match board.cell(row, col) {
                CellState::Hit => 'X',
                CellState::Miss => 'o',
                CellState::Ship if reveal => 'S',
                _ => '.',
            };
            print!(" {}", ch);
        }
        println!();
    }
}

fn read_line() -> String {
    let mut line = String::new();
    let _ = io::stdin().read_line(&mut line);
    line.trim().to_string()
}

fn prompt(text: &str) -> String {
    print!("{}", text);
    let _ = io::stdout().flush();
    read_line()
}

fn parse_placement(input: &str) -> Option<((usize, usize), Orientation)> {
    let mut parts = input.split_whitespace();
    let coord = parts.next().and_then(parse_coord)?;
    let orientation = match parts.next().map(|p| p.to_ascii_uppercase()) {
        Some(ref o) if o.starts_with('V') => Orientation::Vertical,
        _ => Orientation::Horizontal,
    };
    Some((coord, orientation))
}

impl Player for CliPlayer {
    /// Place the fleet ship by ship. `B4 H` places the current ship, an empty
    /// line places it randomly, `t B4` toggles a single cell for manual
    /// editing and `auto` places everything that is left at random.
    fn place_ships<R: Rng + ?Sized>(
        &mut self,
        rng: &mut R,
        board: &mut Board,
    ) -> Result<(), BoardError> {
        println!("Place your fleet: {:?}", FLEET);
        println!("Commands: B4 H | B4 V | <enter> = random | t B4 = toggle cell | auto");
        let mut index = 0;
        while index < FLEET.len() {
            let length = FLEET[index];
            print_board(board, true);
            let line = prompt(&format!("Place ship of length {}: ", length));
            if line.is_empty() {
                let (row, col, orientation) = board.random_ship_placement(rng, length)?;
                board.place_ship(row, col, length, orientation)?;
                index += 1;
                continue;
            }
            if line.eq_ignore_ascii_case("auto") {
                board.auto_place(rng)?;
                break;
            }
            if let Some(rest) = line.strip_prefix("t ").or_else(|| line.strip_prefix("T ")) {
                match parse_coord(rest.trim()) {
                    Some((row, col)) => match board.toggle_ship_cell(row, col) {
                        Ok(()) => {}
                        Err(e) => println!("Error: {}", e),
                    },
                    None => println!("Invalid coordinate"),
                }
                continue;
            }
            match parse_placement(&line) {
                Some(((row, col), orientation)) => {
                    match board.place_ship(row, col, length, orientation) {
                        Ok(()) => index += 1,
                        Err(e) => println!("Error: {}", e),
                    }
                }
                None => println!("Invalid input"),
            }
        }
        // Manual toggling can leave an illegal layout; insist on a valid
        // fleet before handing the board back.
        while let Err(reason) = board.validate_fleet() {
            print_board(board, true);
            println!("Fleet is not valid: {}", reason);
            let line = prompt("Fix with 't B4' toggles or type 'auto': ");
            if line.eq_ignore_ascii_case("auto") {
                board.auto_place(rng)?;
                break;
            }
            if let Some(rest) = line.strip_prefix("t ").or_else(|| line.strip_prefix("T ")) {
                match parse_coord(rest.trim()) {
                    Some((row, col)) => match board.toggle_ship_cell(row, col) {
                        Ok(()) => {}
                        Err(e) => println!("Error: {}", e),
                    },
                    None => println!("Invalid coordinate"),
                }
            }
        }
        Ok(())
    }

    fn select_target<R: Rng + ?Sized>(&mut self, _rng: &mut R, enemy: &Board) -> (usize, usize) {
        loop {
            let line = prompt("Enter target (e.g. B4): ");
            match parse_coord(&line) {
                Some((row, col)) if enemy.shootable(row, col) => return (row, col),
                Some((row, col)) => {
                    println!("{} was already resolved", coord_to_string(row, col))
                }
                None => println!("Invalid coordinate"),
            }
        }
    }

    fn handle_shot_result(&mut self, coord: (usize, usize), result: ShotResult, _enemy: &Board) {
        println!(
            "You fired at {} -> {:?}",
            coord_to_string(coord.0, coord.1),
            result
        );
    }

    fn handle_opponent_shot(&mut self, coord: (usize, usize), result: ShotResult) {
        println!(
            "Computer fired at {} -> {:?}",
            coord_to_string(coord.0, coord.1),
            result
        );
    }
}
