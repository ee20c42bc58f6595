//! The numbered text menu driving a [`Session`].

use std::io::{self, BufRead, Write};

use routecalc_core::Coord;

use crate::session::{Command, Outcome, Session};

const OPTIONS: &str = "\
=== MAIN MENU ===
1. Create custom map
2. Use default map (10x10)
3. Set start
4. Set goal
5. Add obstacle (building, water, blocked)
6. Clear cell
7. Show map
8. Find route
9. Quit";

/// Result of prompting for input.
enum Prompted<T> {
    Value(T),
    /// Unusable input; already reported, go back to the menu.
    Skip,
    Eof,
}

impl<T> Prompted<T> {
    fn map<U>(self, f: impl FnOnce(T) -> U) -> Prompted<U> {
        match self {
            Self::Value(v) => Prompted::Value(f(v)),
            Self::Skip => Prompted::Skip,
            Self::Eof => Prompted::Eof,
        }
    }
}

/// Reads menu choices from `input` and writes prompts and results to
/// `output`.
pub struct Menu<R, W> {
    input: R,
    output: W,
    session: Session,
}

impl<R: BufRead, W: Write> Menu<R, W> {
    pub fn new(input: R, output: W, session: Session) -> Self {
        Self {
            input,
            output,
            session,
        }
    }

    pub fn into_output(self) -> W {
        self.output
    }

    /// Loop until the user quits or input ends.
    pub fn run(&mut self) -> io::Result<()> {
        let mut first = true;
        loop {
            if first || !self.session.config().quiet {
                writeln!(self.output, "\n{OPTIONS}")?;
            }
            first = false;

            let Some(choice) = self.ask("Choose an option: ")? else {
                return self.apply(Command::Quit).map(drop);
            };
            match self.read_command(choice.trim())? {
                Prompted::Value(cmd) => {
                    if self.apply(cmd)? {
                        return Ok(());
                    }
                }
                Prompted::Skip => {}
                Prompted::Eof => return self.apply(Command::Quit).map(drop),
            }
        }
    }

    /// Execute `cmd` and print its result. Returns `true` once the session
    /// should end.
    pub fn apply(&mut self, cmd: Command) -> io::Result<bool> {
        match self.session.execute(cmd) {
            Ok(outcome) => {
                let quit = outcome == Outcome::Quit;
                self.report(outcome)?;
                Ok(quit)
            }
            Err(e) => {
                writeln!(self.output, "Error: {e}.")?;
                Ok(false)
            }
        }
    }

    fn read_command(&mut self, choice: &str) -> io::Result<Prompted<Command>> {
        let needs_world = matches!(choice, "3" | "4" | "5" | "6" | "7" | "8");
        if needs_world && !self.session.has_world() {
            writeln!(self.output, "Create a map first.")?;
            return Ok(Prompted::Skip);
        }

        let cmd = match choice {
            "1" => self
                .ask_numbers(["Number of rows: ", "Number of columns: "])?
                .map(|[height, width]| Command::CreateWorld { height, width }),
            "2" => Prompted::Value(Command::DefaultWorld),
            "3" => self
                .ask_numbers(["Start row: ", "Start column: "])?
                .map(|[r, c]| Command::SetStart(Coord::new(r, c))),
            "4" => self
                .ask_numbers(["Goal row: ", "Goal column: "])?
                .map(|[r, c]| Command::SetGoal(Coord::new(r, c))),
            "5" => {
                writeln!(self.output, "Types: 1=Building, 2=Water, 3=Blocked")?;
                self.ask_numbers(["Type: ", "Row: ", "Column: "])?
                    .map(|[code, r, c]| Command::AddObstacle {
                        code,
                        pos: Coord::new(r, c),
                    })
            }
            "6" => self
                .ask_numbers(["Row: ", "Column: "])?
                .map(|[r, c]| Command::ClearCell(Coord::new(r, c))),
            "7" => Prompted::Value(Command::ShowMap),
            "8" => Prompted::Value(Command::FindRoute),
            "9" => Prompted::Value(Command::Quit),
            _ => {
                writeln!(self.output, "Invalid option, try again.")?;
                Prompted::Skip
            }
        };
        Ok(cmd)
    }

    fn report(&mut self, outcome: Outcome) -> io::Result<()> {
        let out = &mut self.output;
        match outcome {
            Outcome::Created {
                height,
                width,
                fallback,
            } => {
                if let Some(e) = fallback {
                    writeln!(out, "{e}; using {height}x{width} instead.")?;
                }
                writeln!(out, "Map created ({height}x{width}).")
            }
            Outcome::StartSet(pos) => writeln!(out, "Start set at {pos}."),
            Outcome::GoalSet(pos) => writeln!(out, "Goal set at {pos}."),
            Outcome::ObstaclePlaced { terrain, pos } => {
                writeln!(out, "Placed {terrain} at {pos}.")
            }
            Outcome::CellCleared(pos) => writeln!(out, "Cell {pos} cleared."),
            Outcome::Map(map) => writeln!(out, "\nCurrent map:\n{map}"),
            Outcome::Route { cost, map } => {
                writeln!(out, "\nRoute found with total cost {cost}:\n{map}")
            }
            Outcome::NoRoute => writeln!(out, "No route found."),
            Outcome::Quit => writeln!(out, "Exiting..."),
        }
    }

    /// Prompt for one line. `None` at end of input.
    fn ask(&mut self, prompt: &str) -> io::Result<Option<String>> {
        write!(self.output, "{prompt}")?;
        self.output.flush()?;
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            writeln!(self.output)?;
            return Ok(None);
        }
        Ok(Some(line.trim().to_owned()))
    }

    fn ask_numbers<const N: usize>(&mut self, prompts: [&str; N]) -> io::Result<Prompted<[i32; N]>> {
        let mut values = [0; N];
        for (slot, prompt) in values.iter_mut().zip(prompts) {
            let Some(answer) = self.ask(prompt)? else {
                return Ok(Prompted::Eof);
            };
            match answer.parse() {
                Ok(v) => *slot = v,
                Err(_) => {
                    writeln!(self.output, "'{answer}' is not a whole number.")?;
                    return Ok(Prompted::Skip);
                }
            }
        }
        Ok(Prompted::Value(values))
    }
}
