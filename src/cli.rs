//! Command-line parsing and maze file loading.

use crate::game::{RunOptions, Strategy};
use std::fs;
use std::io;

/// Parse process arguments (program name excluded) into `RunOptions`.
///
/// Returns a one-line complaint on malformed input; the caller prints it
/// together with the usage text.
pub fn parse_args(args: &[String]) -> Result<RunOptions, String> {
    let mut options = RunOptions::default();
    let mut maze_path: Option<String> = None;

    let mut i = 0;
    while i < args.len() {
        match args[i].as_str() {
            "--fps" => {
                i += 1;
                options.fps = parse_number(args.get(i), "--fps")?;
                if options.fps == 0 {
                    return Err("--fps must be at least 1".to_string());
                }
            }
            "--lives" => {
                i += 1;
                options.lives = parse_number(args.get(i), "--lives")?;
                if options.lives == 0 {
                    return Err("--lives must be at least 1".to_string());
                }
            }
            "--food" => {
                i += 1;
                options.foods = parse_number(args.get(i), "--food")?;
                if options.foods == 0 {
                    return Err("--food must be at least 1".to_string());
                }
            }
            "--playertype" => {
                i += 1;
                options.strategy = match args.get(i).map(String::as_str) {
                    Some("backtracking") => Strategy::ShortestPath,
                    Some("random") => Strategy::RandomWalk,
                    _ => {
                        return Err(
                            "--playertype must be 'backtracking' or 'random'".to_string()
                        )
                    }
                };
            }
            other if other.starts_with('-') => {
                return Err(format!("Unknown argument: {}", other));
            }
            other => {
                if maze_path.is_some() {
                    return Err(format!("Unexpected argument: {}", other));
                }
                maze_path = Some(other.to_string());
            }
        }
        i += 1;
    }

    options.maze_path = maze_path.ok_or("Missing maze file argument")?;
    Ok(options)
}

pub fn print_usage() {
    eprintln!(
        "snaze - autonomous snake-in-a-maze simulation\n\
         \n\
         Usage: snaze [OPTIONS] <maze-file>\n\
         \n\
         Options:\n\
         \x20 --fps N            Frames per second (default: 2)\n\
         \x20 --lives N          Lives the snake starts with (default: 5)\n\
         \x20 --food N           Pellets to eat before winning (default: 10)\n\
         \x20 --playertype TYPE  Route planner, 'backtracking' or 'random'\n\
         \x20                    (default: backtracking)\n\
         \x20 --help, -h         Show this help"
    );
}

fn parse_number(value: Option<&String>, flag: &str) -> Result<u32, String> {
    value
        .and_then(|v| v.parse().ok())
        .ok_or_else(|| format!("{} requires a number", flag))
}

/// Read a maze file: a `rows cols` header line, then that many lines of
/// maze characters.
pub fn read_maze_file(path: &str) -> io::Result<Vec<Vec<char>>> {
    let text = fs::read_to_string(path)?;
    parse_maze(&text)
}

/// Parse maze text into a rectangular character grid.
///
/// Rows shorter than the header's column count are padded with open floor;
/// longer rows are cut to it.
pub fn parse_maze(text: &str) -> io::Result<Vec<Vec<char>>> {
    let mut lines = text.lines();

    let header = lines
        .next()
        .ok_or_else(|| io::Error::new(io::ErrorKind::InvalidData, "maze file is empty"))?;
    let mut parts = header.split_whitespace();
    let rows: usize = parts
        .next()
        .and_then(|p| p.parse().ok())
        .ok_or_else(|| {
            io::Error::new(io::ErrorKind::InvalidData, "maze header must be 'rows cols'")
        })?;
    let cols: usize = parts
        .next()
        .and_then(|p| p.parse().ok())
        .ok_or_else(|| {
            io::Error::new(io::ErrorKind::InvalidData, "maze header must be 'rows cols'")
        })?;
    if rows == 0 || cols == 0 {
        return Err(io::Error::new(
            io::ErrorKind::InvalidData,
            "maze dimensions must be positive",
        ));
    }

    let mut cells = Vec::with_capacity(rows);
    for row in 0..rows {
        let line = lines.next().ok_or_else(|| {
            io::Error::new(
                io::ErrorKind::InvalidData,
                format!("maze file ends at row {} of {}", row, rows),
            )
        })?;
        let mut chars: Vec<char> = line.chars().take(cols).collect();
        chars.resize(cols, ' ');
        cells.push(chars);
    }

    Ok(cells)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_parse_args_defaults() {
        let options = parse_args(&args(&["mazes/simple.txt"])).unwrap();
        assert_eq!(options.maze_path, "mazes/simple.txt");
        assert_eq!(options.fps, 2);
        assert_eq!(options.lives, 5);
        assert_eq!(options.foods, 10);
        assert_eq!(options.strategy, Strategy::ShortestPath);
    }

    #[test]
    fn test_parse_args_all_flags() {
        let options = parse_args(&args(&[
            "--fps",
            "10",
            "--lives",
            "3",
            "--food",
            "7",
            "--playertype",
            "random",
            "level.txt",
        ]))
        .unwrap();
        assert_eq!(options.fps, 10);
        assert_eq!(options.lives, 3);
        assert_eq!(options.foods, 7);
        assert_eq!(options.strategy, Strategy::RandomWalk);
        assert_eq!(options.maze_path, "level.txt");
    }

    #[test]
    fn test_parse_args_flags_after_path() {
        let options = parse_args(&args(&["level.txt", "--fps", "4"])).unwrap();
        assert_eq!(options.fps, 4);
        assert_eq!(options.maze_path, "level.txt");
    }

    #[test]
    fn test_parse_args_rejects_unknown_flag() {
        let err = parse_args(&args(&["--speed", "9", "level.txt"])).unwrap_err();
        assert!(err.contains("Unknown argument"));
    }

    #[test]
    fn test_parse_args_rejects_missing_value() {
        let err = parse_args(&args(&["level.txt", "--fps"])).unwrap_err();
        assert!(err.contains("--fps"));
    }

    #[test]
    fn test_parse_args_rejects_bad_number() {
        let err = parse_args(&args(&["--lives", "many", "level.txt"])).unwrap_err();
        assert!(err.contains("--lives"));
    }

    #[test]
    fn test_parse_args_rejects_zero_fps() {
        let err = parse_args(&args(&["--fps", "0", "level.txt"])).unwrap_err();
        assert!(err.contains("--fps"));
    }

    #[test]
    fn test_parse_args_rejects_bad_playertype() {
        let err = parse_args(&args(&["--playertype", "psychic", "level.txt"])).unwrap_err();
        assert!(err.contains("--playertype"));
    }

    #[test]
    fn test_parse_args_requires_maze_path() {
        let err = parse_args(&args(&["--fps", "2"])).unwrap_err();
        assert!(err.contains("maze file"));
    }

    #[test]
    fn test_parse_args_rejects_second_path() {
        let err = parse_args(&args(&["a.txt", "b.txt"])).unwrap_err();
        assert!(err.contains("Unexpected argument"));
    }

    #[test]
    fn test_parse_maze_reads_grid() {
        let cells = parse_maze("3 5\n#####\n#&  #\n#####\n").unwrap();
        assert_eq!(cells.len(), 3);
        assert_eq!(cells[0], "#####".chars().collect::<Vec<_>>());
        assert_eq!(cells[1], "#&  #".chars().collect::<Vec<_>>());
    }

    #[test]
    fn test_parse_maze_pads_short_rows() {
        let cells = parse_maze("2 4\n##\n#&\n").unwrap();
        assert_eq!(cells[0], vec!['#', '#', ' ', ' ']);
        assert_eq!(cells[1], vec!['#', '&', ' ', ' ']);
    }

    #[test]
    fn test_parse_maze_cuts_long_rows() {
        let cells = parse_maze("1 3\n#####\n").unwrap();
        assert_eq!(cells[0], vec!['#', '#', '#']);
    }

    #[test]
    fn test_parse_maze_rejects_truncated_file() {
        let err = parse_maze("3 5\n#####\n#&  #\n").unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::InvalidData);
        assert!(err.to_string().contains("row 2"));
    }

    #[test]
    fn test_parse_maze_rejects_bad_header() {
        assert!(parse_maze("five 5\n#####\n").is_err());
        assert!(parse_maze("5\n#####\n").is_err());
        assert!(parse_maze("").is_err());
        assert!(parse_maze("0 4\n").is_err());
    }
}
