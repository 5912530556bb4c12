//! Text adventure session management.
//!
//! [`FictionSession::process`] is the command interpreter: it parses a line,
//! resolves its argument against the current room, runs the action, and
//! checks the win and lose goals. Every failure comes back as a rejected
//! [`Reply`]; nothing here exits the process.

use wf_core::{GameMap, MapError, Room, RoomId};

use crate::condition::Goal;
use crate::config::SessionConfig;
use crate::error::{FictionError, FictionResult};
use crate::events::RandomEvents;
use crate::parser::{Command, Verb, parse_command, resolve_direction, resolve_item};
use crate::player::PlayerState;

/// How a session ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Ending {
    /// The win goal was met.
    Won,
    /// The lose goal was met.
    Lost,
    /// The player quit.
    Quit,
}

impl Ending {
    /// The closing line for this ending.
    pub fn message(&self) -> &'static str {
        match self {
            Self::Won => "Congratulations! You won the game!",
            Self::Lost => "Sorry, you lost the game.",
            Self::Quit => "Goodbye!",
        }
    }
}

/// What became of one line of input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// The command ran and the game goes on.
    Accepted,
    /// The command was refused; state is unchanged.
    Rejected,
    /// The session is over.
    Ended(Ending),
}

/// The session's answer to one line of input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reply {
    /// Text to show the player.
    pub text: String,
    /// What the line did to the session.
    pub outcome: Outcome,
}

impl Reply {
    fn accepted(text: String) -> Self {
        Self {
            text,
            outcome: Outcome::Accepted,
        }
    }

    fn rejected(error: &FictionError) -> Self {
        Self {
            text: error.to_string(),
            outcome: Outcome::Rejected,
        }
    }

    /// The ending, if this reply closed the session.
    pub fn ending(&self) -> Option<Ending> {
        match self.outcome {
            Outcome::Ended(ending) => Some(ending),
            _ => None,
        }
    }

    /// True if the command was refused.
    pub fn is_rejected(&self) -> bool {
        self.outcome == Outcome::Rejected
    }
}

/// A single-player text adventure session.
pub struct FictionSession {
    map: GameMap,
    player: PlayerState,
    config: SessionConfig,
    win: Option<Box<dyn Goal>>,
    lose: Option<Box<dyn Goal>>,
    events: RandomEvents,
}

impl FictionSession {
    /// Create a session with the player in the configured start room.
    ///
    /// Fails if the start room is not in the map. No goals are set, so the
    /// session only ends when the player quits.
    pub fn new(map: GameMap, config: SessionConfig) -> FictionResult<Self> {
        map.require(&config.start_room)?;

        let player = PlayerState::new(config.start_room.clone());
        let events = RandomEvents::new(config.event_chance, config.seed);
        tracing::debug!(start = %config.start_room, "session created");

        Ok(Self {
            map,
            player,
            config,
            win: None,
            lose: None,
            events,
        })
    }

    /// Set the goal that wins the game.
    pub fn with_win(mut self, goal: impl Goal + 'static) -> Self {
        self.win = Some(Box::new(goal));
        self
    }

    /// Set the goal that loses the game.
    pub fn with_lose(mut self, goal: impl Goal + 'static) -> Self {
        self.lose = Some(Box::new(goal));
        self
    }

    /// Get the map.
    pub fn map(&self) -> &GameMap {
        &self.map
    }

    /// Get the player state.
    pub fn player(&self) -> &PlayerState {
        &self.player
    }

    /// Get the session configuration.
    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    /// Get the room the player stands in.
    pub fn current_room(&self) -> FictionResult<&Room> {
        self.map
            .require(self.player.location())
            .map_err(FictionError::from)
    }

    /// Describe the room the player stands in.
    pub fn describe_current(&self) -> FictionResult<String> {
        Ok(describe_room(self.current_room()?))
    }

    /// Roll this turn's cosmetic random event.
    pub fn roll_event(&mut self) -> Option<&'static str> {
        self.events.roll()
    }

    /// Process one line of player input.
    ///
    /// Only accepted lines count as a turn, but the goals are checked after
    /// every line, so a goal already met ends the game on the next input.
    pub fn process(&mut self, input: &str) -> Reply {
        if self.player.is_finished() {
            return Reply::rejected(&FictionError::GameOver);
        }

        let command = parse_command(input, self.config.match_threshold);
        tracing::debug!(turn = self.player.turns(), ?command, "processing command");

        let quitting = command == Command::Quit;
        let mut reply = match self.execute(command) {
            Ok(text) => {
                self.player.advance_turn();
                Reply::accepted(text)
            }
            Err(err) => {
                tracing::debug!(%err, "command rejected");
                Reply::rejected(&err)
            }
        };

        let ending = if quitting {
            Some(Ending::Quit)
        } else {
            self.check_goals()
        };

        if let Some(ending) = ending {
            self.player.finish();
            tracing::info!(?ending, turns = self.player.turns(), "session ended");
            if ending != Ending::Quit {
                reply.text.push_str("\n\n");
                reply.text.push_str(ending.message());
            }
            reply.outcome = Outcome::Ended(ending);
        }

        reply
    }

    fn execute(&mut self, command: Command) -> FictionResult<String> {
        let threshold = self.config.match_threshold;
        match command {
            Command::Empty => Err(FictionError::EmptyCommand),
            Command::Unknown { word } => Err(FictionError::UnknownCommand(word)),
            Command::Go { direction } => {
                let exits = &self.current_room()?.exits;
                let resolved = resolve_direction(&direction, exits, threshold);
                self.do_go(resolved.as_deref())
            }
            Command::Get { item, phrase } => {
                let items = &self.current_room()?.items;
                let resolved = resolve_item(&item, &phrase, items, threshold).map(str::to_string);
                self.do_get(resolved.as_deref(), &item)
            }
            Command::Look => self.describe_current(),
            Command::Inventory => Ok(self.do_inventory()),
            Command::Help => Ok(do_help()),
            Command::Quit => Ok(Ending::Quit.message().to_string()),
        }
    }

    fn check_goals(&self) -> Option<Ending> {
        let met = |goal: &Option<Box<dyn Goal>>| {
            goal.as_ref()
                .is_some_and(|g| g.evaluate(&self.map, &self.player))
        };

        if met(&self.win) {
            Some(Ending::Won)
        } else if met(&self.lose) {
            Some(Ending::Lost)
        } else {
            None
        }
    }

    fn do_go(&mut self, direction: Option<&str>) -> FictionResult<String> {
        let Some(direction) = direction.filter(|d| !d.is_empty()) else {
            return Err(FictionError::NoDirection);
        };

        let room = self.current_room()?;
        let lower = direction.to_lowercase();
        let exact = room.exits.get(direction).or_else(|| {
            room.exits
                .iter()
                .find(|(d, _)| d.to_lowercase() == lower)
                .map(|(_, target)| target)
        });
        let destination = match exact {
            Some(target) => target.clone(),
            None => {
                let candidates: Vec<(&str, &RoomId)> = room
                    .exits
                    .iter()
                    .filter(|(d, _)| d.to_lowercase().starts_with(&lower))
                    .collect();

                match candidates.as_slice() {
                    [] => return Err(FictionError::NoWay(direction.to_string())),
                    [(_, target)] => (*target).clone(),
                    many => {
                        return Err(FictionError::AmbiguousDirection(
                            many.iter().map(|(d, _)| d.to_string()).collect(),
                        ));
                    }
                }
            }
        };

        tracing::debug!(from = %self.player.location(), to = %destination, "moving");
        self.player.move_to(destination);
        self.describe_current()
    }

    fn do_get(&mut self, item: Option<&str>, asked: &str) -> FictionResult<String> {
        let Some(item) = item else {
            return Err(if asked.is_empty() {
                FictionError::NothingToGet
            } else {
                FictionError::NoSuchItem(asked.to_string())
            });
        };

        let location = self.player.location().clone();
        let room = self
            .map
            .room_mut(&location)
            .ok_or_else(|| MapError::RoomNotFound(location.clone()))?;
        let taken = room
            .take_item(item)
            .ok_or_else(|| FictionError::NoSuchItem(item.to_string()))?;

        tracing::debug!(item = %taken, room = %location, "picked up");
        let text = format!("You pick up the {taken}.");
        self.player.add_item(taken);
        Ok(text)
    }

    fn do_inventory(&self) -> String {
        if self.player.inventory().is_empty() {
            return "You're not carrying anything.".to_string();
        }

        let mut output = "Inventory:".to_string();
        for item in self.player.inventory() {
            output.push_str("\n  ");
            output.push_str(item);
        }
        output
    }
}

fn do_help() -> String {
    let mut output = "You can run the following commands:".to_string();
    for verb in Verb::ALL {
        output.push_str(&format!("\n  {} ...", verb.name()));
    }
    output
}

/// Render a room the way the player sees it.
pub fn describe_room(room: &Room) -> String {
    let exits: Vec<&str> = room.exits.directions().collect();
    let mut output = format!("> {}\n\n{}\n\nExits: ", room.name, room.desc);
    if exits.is_empty() {
        output.push_str("none");
    } else {
        output.push_str(&exits.join(", "));
    }

    if !room.items.is_empty() {
        output.push_str(&format!("\nItems: {}", room.items.join(", ")));
    }

    output
}
