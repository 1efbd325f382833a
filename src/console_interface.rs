use crate::core::{GameState, PlayerAction};
use crate::models::GameRenderState;
use crate::search::Solution;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind};
use ratatui::{
    Terminal,
    backend::CrosstermBackend,
    layout::{Alignment, Constraint, Direction as LayoutDirection, Layout},
    style::{Color, Style},
    widgets::{Block, Borders, Paragraph},
};
use std::fmt::Write;
use std::io;

/// The layout with sausage cells drawn as their index and the player drawn as its facing.
pub fn render_board_to_string(game: &GameState) -> String {
    let mut lines: Vec<Vec<char>> = game.grid().rows().iter()
        .map(|row| row.chars().collect())
        .collect();

    let mut put = |x: i32, y: i32, ch: char| {
        if x < 0 || y < 0 {
            return;
        }
        if let Some(cell) = lines.get_mut(y as usize).and_then(|l| l.get_mut(x as usize)) {
            *cell = ch;
        }
    };

    let player = game.player();
    put(player.x, player.y, game.facing_char());
    for (i, sausage) in game.sausages().iter().enumerate() {
        let ch = std::char::from_digit((i % 36) as u32, 36).unwrap_or('#');
        for cell in sausage.cells() {
            put(cell.x, cell.y, ch);
        }
    }

    let mut result = String::new();
    for line in lines {
        result.extend(line);
        result.push('\n');
    }
    result
}

/// Grill counters of every sausage, one line each, followed by the board.
pub fn render_state_to_string(game: &GameState) -> String {
    let mut result = String::new();
    for sausage in game.sausages() {
        for g in sausage.grilled() {
            let _ = write!(result, "[{}, {}] ", g.bottom, g.top);
        }
        result.push('\n');
    }
    result.push_str(&render_board_to_string(game));
    result
}

pub fn render_solution_to_string(solution: &Solution) -> String {
    let mut result = String::new();
    for (i, state) in solution.path.iter().enumerate() {
        let _ = writeln!(result, "{})", i);
        result.push_str(&render_state_to_string(state));
    }
    result
}

pub fn setup_terminal() -> Result<Terminal<CrosstermBackend<io::Stdout>>, Box<dyn std::error::Error>>
{
    crossterm::terminal::enable_raw_mode()?;
    crossterm::execute!(io::stdout(), crossterm::terminal::EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(io::stdout());
    let terminal = Terminal::new(backend)?;
    Ok(terminal)
}

pub fn cleanup_terminal() -> Result<(), Box<dyn std::error::Error>> {
    crossterm::terminal::disable_raw_mode()?;
    crossterm::execute!(io::stdout(), crossterm::terminal::LeaveAlternateScreen)?;
    Ok(())
}

pub fn render_game(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    state: &GameRenderState,
) -> Result<(), Box<dyn std::error::Error>> {
    terminal.draw(|f| {
        let chunks = Layout::default()
            .direction(LayoutDirection::Vertical)
            .constraints([Constraint::Min(0), Constraint::Length(3)])
            .split(f.area());

        let game_text = render_state_to_string(&state.game);
        let game_paragraph = Paragraph::new(game_text)
            .block(Block::default().borders(Borders::ALL).title("Sausage Roll"))
            .style(Style::default().fg(Color::White))
            .alignment(Alignment::Center);
        f.render_widget(game_paragraph, chunks[0]);

        let instructions = if state.won {
            "All sausages cooked! Press any key to quit."
        } else if state.lost {
            "Lost. Press any key to quit."
        } else {
            "Controls: W/S forward/back, A/D turn left/right, Q to quit"
        };

        let instructions = format!("{} | Moves: {}", instructions, state.moves);
        let instructions = if let Some(action) = &state.last_action {
            format!("{} | Last: {:?}", instructions, action)
        } else {
            instructions
        };

        let instruction_paragraph = Paragraph::new(instructions)
            .block(Block::default().borders(Borders::ALL).title("Instructions"))
            .style(Style::default().fg(Color::Cyan))
            .alignment(Alignment::Center);
        f.render_widget(instruction_paragraph, chunks[1]);
    })?;
    Ok(())
}

pub enum ConsoleInput {
    PlayerAction(PlayerAction),
    Quit,
    Timeout,
    Unknown,
}

pub fn handle_input() -> Result<ConsoleInput, Box<dyn std::error::Error>> {
    if event::poll(std::time::Duration::from_millis(50))? {
        if let Event::Key(KeyEvent {
            code,
            kind: KeyEventKind::Press,
            ..
        }) = event::read()?
        {
            return Ok(match code {
                KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => ConsoleInput::Quit,
                KeyCode::Char('w') | KeyCode::Char('W') | KeyCode::Up => {
                    ConsoleInput::PlayerAction(PlayerAction::Forward)
                }
                KeyCode::Char('s') | KeyCode::Char('S') | KeyCode::Down => {
                    ConsoleInput::PlayerAction(PlayerAction::Backward)
                }
                KeyCode::Char('a') | KeyCode::Char('A') | KeyCode::Left => {
                    ConsoleInput::PlayerAction(PlayerAction::TurnLeft)
                }
                KeyCode::Char('d') | KeyCode::Char('D') | KeyCode::Right => {
                    ConsoleInput::PlayerAction(PlayerAction::TurnRight)
                }
                _ => ConsoleInput::Unknown,
            });
        }
    }
    Ok(ConsoleInput::Timeout)
}

#[cfg(test)]
mod test {
    use crate::core::{char_to_direction, GameState, Grid, GrillCount, PlayerAction, Sausage, Vec2};
    use crate::search::Solution;
    use super::*;

    #[test]
    fn board_overlays_player_and_sausages() {
        let grid = Grid::new(&["LGL ", "LLLL"]);
        let sausage = Sausage::new(vec![Vec2::new(1, 1), Vec2::new(2, 1)]).unwrap();
        let state = GameState::new(&grid, vec![sausage], Vec2::new(0, 0), char_to_direction('V')).unwrap();

        assert_eq!(render_board_to_string(&state), "VGL \nL00L\n");
    }

    #[test]
    fn cells_outside_layout_are_skipped() {
        let grid = Grid::new(&["LLL"]);
        let sausage = Sausage::new(vec![Vec2::new(2, 0), Vec2::new(3, 0)]).unwrap();
        let state = GameState::new(&grid, vec![sausage], Vec2::new(1, 0), char_to_direction('<')).unwrap();

        assert_eq!(render_board_to_string(&state), "L<0\n");
    }

    #[test]
    fn state_lists_counters_before_board() {
        let grid = Grid::new(&["LGG"]);
        let sausage = Sausage::with_grill_counts(
            vec![Vec2::new(1, 0), Vec2::new(2, 0)],
            vec![GrillCount { bottom: 1, top: 0 }, GrillCount { bottom: 0, top: 1 }],
        ).unwrap();
        let state = GameState::new(&grid, vec![sausage], Vec2::new(0, 0), char_to_direction('>')).unwrap();

        assert_eq!(render_state_to_string(&state), "[1, 0] [0, 1] \n>00\n");
    }

    #[test]
    fn solution_numbers_each_step() {
        let grid = Grid::new(&["LLL"]);
        let start = GameState::new(&grid, vec![], Vec2::new(0, 0), char_to_direction('>')).unwrap();
        let next = start.apply(PlayerAction::Forward);
        let solution = Solution { depth: 1, path: vec![start, next], actions: vec![PlayerAction::Forward] };

        assert_eq!(render_solution_to_string(&solution), "0)\n>LL\n1)\nL>L\n");
    }
}
