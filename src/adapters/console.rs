use crate::core::stats::TeamStats;
use crate::core::{Team, TeamRoster};
use crate::utils::error::Result;
use std::io::{BufRead, Write};

/// How many player / guardian names a stats page lists.
pub const DISPLAY_LIMIT: usize = 6;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum MenuChoice {
    DisplayStats,
    Quit,
}

/// Interactive stats menu over any line-based input and writer.
/// The roster is only read, never changed.
pub struct ConsoleReporter<R: BufRead, W: Write> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> ConsoleReporter<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    pub fn into_output(self) -> W {
        self.output
    }

    /// Runs until the user quits or input ends, then says goodbye.
    pub fn run(&mut self, roster: &TeamRoster) -> Result<()> {
        self.print_header()?;

        loop {
            match self.main_menu()? {
                Some(MenuChoice::DisplayStats) => {
                    let Some(team) = self.select_team(roster)? else {
                        break;
                    };
                    self.print_stats(team)?;
                    if !self.wait_for_enter()? {
                        break;
                    }
                }
                Some(MenuChoice::Quit) | None => break,
            }
        }

        writeln!(self.output, "Goodbye")?;
        self.output.flush()?;
        Ok(())
    }

    fn print_header(&mut self) -> Result<()> {
        writeln!(self.output, "{}", "*".repeat(40))?;
        writeln!(self.output, "BASKET BALL TEAM STATS TOOL")?;
        writeln!(self.output, "{}", "*".repeat(40))?;
        writeln!(self.output, "{}MENU{}", "-".repeat(10), "-".repeat(10))?;
        writeln!(self.output, "Here are your choices: ")?;
        writeln!(self.output, "A) Display Team Stats")?;
        writeln!(self.output, "B) Quit")?;
        Ok(())
    }

    fn main_menu(&mut self) -> Result<Option<MenuChoice>> {
        loop {
            let Some(answer) =
                self.prompt("Enter an option (A or B): A to display team stats and B to quit: ")?
            else {
                return Ok(None);
            };

            match answer.to_ascii_uppercase().as_str() {
                "A" => return Ok(Some(MenuChoice::DisplayStats)),
                "B" => return Ok(Some(MenuChoice::Quit)),
                _ => tracing::debug!("Ignoring menu input {:?}", answer),
            }
        }
    }

    fn select_team<'a>(&mut self, roster: &'a TeamRoster) -> Result<Option<&'a Team>> {
        let prompt = team_prompt(roster);

        loop {
            let Some(answer) = self.prompt(&prompt)? else {
                return Ok(None);
            };

            if let Some(team) = team_for_choice(roster, &answer) {
                return Ok(Some(team));
            }
            tracing::debug!("Ignoring team choice {:?}", answer);
        }
    }

    fn print_stats(&mut self, team: &Team) -> Result<()> {
        tracing::debug!("Showing stats for {}: {:?}", team.name, team.players);
        let stats = TeamStats::from_team(team);
        let average = stats
            .average_height
            .map(|h| format!("{:.1}", h))
            .unwrap_or_else(|| "n/a".to_string());

        writeln!(self.output, "{}", "-".repeat(30))?;
        writeln!(self.output, "Team {} Stats", stats.team)?;
        writeln!(self.output, "{}", "-".repeat(30))?;
        writeln!(self.output, "Total Players: {}", stats.total_players)?;
        writeln!(self.output, "Total experienced: {}", stats.experienced)?;
        writeln!(self.output, "Total inexperienced: {}", stats.inexperienced)?;
        writeln!(self.output, "Average Height: {}", average)?;
        writeln!(self.output, "Players on Team: ")?;
        writeln!(self.output, "  {}", stats.player_preview(DISPLAY_LIMIT))?;
        writeln!(self.output, "Guardians: ")?;
        writeln!(self.output, "  {}", stats.guardian_preview(DISPLAY_LIMIT))?;
        writeln!(self.output)?;
        Ok(())
    }

    fn wait_for_enter(&mut self) -> Result<bool> {
        Ok(self.prompt("Press ENTER to continue...")?.is_some())
    }

    /// 顯示提示並讀一行；輸入結束時回傳 None
    fn prompt(&mut self, message: &str) -> Result<Option<String>> {
        write!(self.output, "{}", message)?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            writeln!(self.output)?;
            return Ok(None);
        }
        Ok(Some(line.trim().to_string()))
    }
}

fn option_letter(index: usize) -> char {
    // 隊伍數已在設定驗證時限制在 26 以內
    char::from(b'A' + (index % 26) as u8)
}

fn team_prompt(roster: &TeamRoster) -> String {
    let letters: Vec<String> = (0..roster.len())
        .map(|i| option_letter(i).to_string())
        .collect();

    let options = match letters.as_slice() {
        [only] => only.clone(),
        [first, second] => format!("{} or {}", first, second),
        [rest @ .., last] => format!("{}, or {}", rest.join(", "), last),
        [] => String::new(),
    };

    let legend: Vec<String> = roster
        .team_names()
        .enumerate()
        .map(|(i, name)| format!("{} for {}", option_letter(i), name))
        .collect();

    format!("Enter an option ({}): {}: ", options, legend.join(", "))
}

fn team_for_choice<'a>(roster: &'a TeamRoster, answer: &str) -> Option<&'a Team> {
    let mut chars = answer.chars();
    let letter = chars.next()?.to_ascii_uppercase();
    if chars.next().is_some() || !letter.is_ascii_uppercase() {
        return None;
    }

    let index = (letter as u8 - b'A') as usize;
    roster.teams.get(index)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Player;
    use std::io::Cursor;

    fn player(name: &str, guardian: &str, height: u32, experience: bool) -> Player {
        Player {
            name: name.to_string(),
            guardians: vec![guardian.to_string()],
            height,
            experience,
        }
    }

    fn roster() -> TeamRoster {
        TeamRoster {
            teams: vec![
                Team {
                    name: "Panthers".to_string(),
                    players: vec![
                        player("Karl Saygan", "Heather Bledsoe", 42, true),
                        player("Matt Gill", "Charles Gill", 40, false),
                    ],
                },
                Team {
                    name: "Bandits".to_string(),
                    players: vec![],
                },
                Team {
                    name: "Warriors".to_string(),
                    players: (1..=8)
                        .map(|i| player(&format!("W{}", i), &format!("G{}", i), 40, i <= 4))
                        .collect(),
                },
            ],
            unassigned: vec![],
        }
    }

    fn run_session(input: &str) -> String {
        let mut reporter = ConsoleReporter::new(Cursor::new(input.as_bytes()), Vec::new());
        reporter.run(&roster()).unwrap();
        String::from_utf8(reporter.into_output()).unwrap()
    }

    #[test]
    fn test_quit_immediately() {
        let output = run_session("b\n");

        assert!(output.contains("BASKET BALL TEAM STATS TOOL"));
        assert!(output.contains("A) Display Team Stats"));
        assert!(output.trim_end().ends_with("Goodbye"));
        assert!(!output.contains("Team Panthers Stats"));
    }

    #[test]
    fn test_display_team_then_quit() {
        let output = run_session("A\na\n\nB\n");

        assert!(output.contains("Team Panthers Stats"));
        assert!(output.contains("Total Players: 2"));
        assert!(output.contains("Total experienced: 1"));
        assert!(output.contains("Total inexperienced: 1"));
        assert!(output.contains("Average Height: 41.0"));
        assert!(output.contains("  Karl Saygan, Matt Gill\n"));
        assert!(output.contains("  Heather Bledsoe, Charles Gill\n"));
        assert!(output.contains("Press ENTER to continue..."));
        // 顯示完回到主選單
        assert_eq!(
            output
                .matches("Enter an option (A or B): A to display team stats and B to quit: ")
                .count(),
            2
        );
    }

    #[test]
    fn test_invalid_input_reprompts() {
        let output = run_session("x\n\nA\nz\nD\nc\n\nb\n");

        assert_eq!(output.matches("A to display team stats").count(), 4);
        assert_eq!(
            output
                .matches("Enter an option (A, B, or C): A for Panthers, B for Bandits, C for Warriors: ")
                .count(),
            3
        );
        assert!(output.contains("Team Warriors Stats"));
    }

    #[test]
    fn test_only_first_six_names_listed() {
        let output = run_session("a\nC\n\nb\n");

        assert!(output.contains("  W1, W2, W3, W4, W5, W6\n"));
        assert!(!output.contains("W7"));
        assert!(output.contains("  G1, G2, G3, G4, G5, G6\n"));
        assert!(output.contains("Total experienced: 4"));
    }

    #[test]
    fn test_empty_team_has_no_average() {
        let output = run_session("a\nb\n\nb\n");

        assert!(output.contains("Team Bandits Stats"));
        assert!(output.contains("Total Players: 0"));
        assert!(output.contains("Average Height: n/a"));
    }

    #[test]
    fn test_end_of_input_quits() {
        let output = run_session("a\n");
        assert!(output.trim_end().ends_with("Goodbye"));

        let output = run_session("");
        assert!(output.trim_end().ends_with("Goodbye"));
    }

    #[test]
    fn test_team_prompt_sizes() {
        let mut small = roster();
        small.teams.truncate(2);
        assert_eq!(
            team_prompt(&small),
            "Enter an option (A or B): A for Panthers, B for Bandits: "
        );

        small.teams.truncate(1);
        assert_eq!(team_prompt(&small), "Enter an option (A): A for Panthers: ");
    }
}
