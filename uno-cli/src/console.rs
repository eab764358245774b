use std::fmt::Display;
use std::io::{BufRead, Write};

use tracing::{info, warn};
use uno_engine::card::{Card, CardColor};
use uno_engine::constants::{MAX_PLAYERS, MIN_PLAYERS};
use uno_engine::io::InputProvider;
use uno_engine::player::Player;
use uno_engine::turn::{Prompt, Rejection};

/// Interactive player input read line by line from `input`, with prompts
/// written to `output`.
pub struct Console<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    pub fn say(&mut self, line: impl Display) {
        if let Err(err) = writeln!(self.output, "{line}") {
            warn!(%err, "failed to write to the terminal");
        }
    }

    /// Writes `prompt` and returns the next line with surrounding whitespace
    /// removed. Input that is closed or unreadable ends the program.
    pub fn ask(&mut self, prompt: &str) -> String {
        match self.read_answer(prompt) {
            Some(answer) => answer,
            None => {
                self.say("\nNo more input. Goodbye!");
                std::process::exit(0);
            }
        }
    }

    fn read_answer(&mut self, prompt: &str) -> Option<String> {
        if let Err(err) = write!(self.output, "{prompt}").and_then(|()| self.output.flush()) {
            warn!(%err, "failed to write to the terminal");
        }

        let mut line = String::new();
        match self.input.read_line(&mut line) {
            Ok(0) => {
                info!("input closed, leaving the game");
                None
            }
            Ok(_) => Some(line.trim().to_string()),
            Err(err) => {
                warn!(%err, "failed to read input, leaving the game");
                None
            }
        }
    }

    pub fn pause(&mut self, message: &str) {
        self.ask(&format!("{message} "));
    }

    pub fn prompt_player_count(&mut self) -> usize {
        loop {
            let answer =
                self.ask(&format!("Enter the number of players ( {MIN_PLAYERS}-{MAX_PLAYERS} ): "));
            match answer.parse::<usize>() {
                Ok(count) if (MIN_PLAYERS..=MAX_PLAYERS).contains(&count) => return count,
                Ok(_) => self.say(format!(
                    "UNO needs between {MIN_PLAYERS} and {MAX_PLAYERS} players."
                )),
                Err(_) => self.say(format!("\"{answer}\" is not a number.")),
            }
        }
    }

    /// Empty names fall back to `Player N`.
    pub fn prompt_player_names(&mut self) -> Vec<String> {
        let count = self.prompt_player_count();
        (1..=count)
            .map(|seat| {
                let name = self.ask(&format!("Enter the name of Player {seat}: "));
                if name.is_empty() {
                    format!("Player {seat}")
                } else {
                    name
                }
            })
            .collect()
    }
}

impl<R: BufRead, W: Write> InputProvider for Console<R, W> {
    fn choose_color(&mut self, player: &Player) -> CardColor {
        self.say(format!("\n{}, your hand: {}", player.name(), player.hand()));
        loop {
            let answer = self.ask("Choose a color for your wild card (r, y, g, b): ");
            if answer.chars().count() != 1 {
                self.say("Please enter just one letter.");
                continue;
            }
            match answer.parse::<CardColor>() {
                Ok(color) => return color,
                Err(_) => self.say("Please enter r, y, g, or b."),
            }
        }
    }

    fn confirm(&mut self, prompt: Prompt, default_yes: bool) -> bool {
        let question = match prompt {
            Prompt::NoPlayableCards => {
                self.ask("You have no plays available. Press enter to draw a card.");
                return true;
            }
            Prompt::DrawInstead => "Draw a card instead of playing?",
            Prompt::PlayDrawn(_) => "Play it?",
        };
        let hint = if default_yes { "(Y/n)" } else { "(y/N)" };
        let answer = self.ask(&format!("{question} {hint} "));

        match answer.chars().next() {
            Some('y' | 'Y') => true,
            Some('n' | 'N') => false,
            _ => default_yes,
        }
    }

    fn choose_card_label(
        &mut self,
        _player: &Player,
        _stock: &Card,
        _wild_color: Option<CardColor>,
    ) -> String {
        self.ask("Choose a card to play: ")
    }

    fn reject(&mut self, rejection: &Rejection) {
        match rejection {
            Rejection::NotInHand(label) => {
                self.say(format!("You do not have \"{label}\" in your hand."));
                self.say("Enter one of the cards in your hand, as listed above.");
            }
            Rejection::NotPlayable { card, stock } => {
                self.say(format!("You cannot play a {card} on a {stock}."));
                self.say("Either the color or the value must match.");
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use std::io::{self, BufReader, Cursor, Read};

    use uno_engine::card::Rank;

    use super::*;

    fn console(input: &str) -> Console<Cursor<Vec<u8>>, Vec<u8>> {
        Console::new(Cursor::new(input.as_bytes().to_vec()), Vec::new())
    }

    fn written(console: &Console<Cursor<Vec<u8>>, Vec<u8>>) -> String {
        String::from_utf8_lossy(&console.output).into_owned()
    }

    struct Unreadable;

    impl Read for Unreadable {
        fn read(&mut self, _buf: &mut [u8]) -> io::Result<usize> {
            Err(io::Error::new(io::ErrorKind::Other, "terminal went away"))
        }
    }

    #[test]
    fn unreadable_input_ends_the_conversation() {
        let mut console = Console::new(BufReader::new(Unreadable), Vec::new());
        assert_eq!(console.read_answer("Choose a card to play: "), None);
    }

    #[test]
    fn closed_input_ends_the_conversation() {
        let mut closed = console("");
        assert_eq!(closed.read_answer("Choose a card to play: "), None);

        let mut open = console(" g7\n");
        assert_eq!(open.read_answer("Choose a card to play: "), Some("g7".to_string()));
    }

    #[test]
    fn choose_color_asks_until_a_single_valid_letter() {
        let mut console = console("red\nx\nb\n");
        let player = Player::new("Ada");

        assert_eq!(console.choose_color(&player), CardColor::Blue);

        let output = written(&console);
        assert!(output.contains("Please enter just one letter."));
        assert!(output.contains("Please enter r, y, g, or b."));
        assert_eq!(output.matches("Choose a color").count(), 3);
    }

    #[test]
    fn confirm_uses_the_default_on_an_empty_answer() {
        let mut console = console("\n\n");
        assert!(!console.confirm(Prompt::DrawInstead, false));
        let drawn = Card::colored(CardColor::Red, Rank::Number(4)).unwrap();
        assert!(console.confirm(Prompt::PlayDrawn(drawn), true));
        assert!(written(&console).contains("Play it? (Y/n)"));
    }

    #[test]
    fn confirm_reads_explicit_answers() {
        let mut console = console("Y\nno\n");
        assert!(console.confirm(Prompt::DrawInstead, false));
        assert!(!console.confirm(Prompt::PlayDrawn(Card::wild()), true));
    }

    #[test]
    fn no_playable_cards_always_draws() {
        let mut console = console("n\n");
        assert!(console.confirm(Prompt::NoPlayableCards, false));
    }

    #[test]
    fn card_label_is_trimmed() {
        let mut console = console("  rD \n");
        let player = Player::new("Ada");
        assert_eq!(console.choose_card_label(&player, &Card::wild(), Some(CardColor::Red)), "rD");
    }

    #[test]
    fn rejections_explain_the_problem() {
        let mut console = console("");
        console.reject(&Rejection::NotInHand("g9".to_string()));
        console.reject(&Rejection::NotPlayable {
            card: Card::colored(CardColor::Blue, Rank::Number(2)).unwrap(),
            stock: Card::colored(CardColor::Red, Rank::Number(5)).unwrap(),
        });

        let output = written(&console);
        assert!(output.contains("You do not have \"g9\" in your hand."));
        assert!(output.contains("You cannot play a Blue 2 on a Red 5."));
    }

    #[test]
    fn player_count_is_asked_until_in_range() {
        let mut console = console("two\n1\n7\n3\n");
        assert_eq!(console.prompt_player_count(), 3);

        let output = written(&console);
        assert!(output.contains("\"two\" is not a number."));
        assert_eq!(output.matches("UNO needs between 2 and 6 players.").count(), 2);
    }

    #[test]
    fn empty_names_get_a_seat_name() {
        let mut console = console("2\nAda\n\n");
        assert_eq!(console.prompt_player_names(), vec!["Ada", "Player 2"]);
    }
}
