//! Command parsing for exploration input.

/// Direction for movement commands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    /// North.
    North,
    /// South.
    South,
    /// East.
    East,
    /// West.
    West,
    /// Up.
    Up,
    /// Down.
    Down,
    /// Northeast.
    Northeast,
    /// Northwest.
    Northwest,
    /// Southeast.
    Southeast,
    /// Southwest.
    Southwest,
    /// Step inside.
    Enter,
    /// Step outside.
    Exit,
    /// Step back.
    Back,
}

impl Direction {
    /// Parse a direction or its alias.
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "n" | "north" => Some(Self::North),
            "s" | "south" => Some(Self::South),
            "e" | "east" => Some(Self::East),
            "w" | "west" => Some(Self::West),
            "u" | "up" => Some(Self::Up),
            "d" | "down" => Some(Self::Down),
            "ne" | "northeast" => Some(Self::Northeast),
            "nw" | "northwest" => Some(Self::Northwest),
            "se" | "southeast" => Some(Self::Southeast),
            "sw" | "southwest" => Some(Self::Southwest),
            "enter" => Some(Self::Enter),
            "exit" => Some(Self::Exit),
            "back" => Some(Self::Back),
            _ => None,
        }
    }

    /// The exit key used in location data.
    pub fn name(&self) -> &'static str {
        match self {
            Self::North => "north",
            Self::South => "south",
            Self::East => "east",
            Self::West => "west",
            Self::Up => "up",
            Self::Down => "down",
            Self::Northeast => "northeast",
            Self::Northwest => "northwest",
            Self::Southeast => "southeast",
            Self::Southwest => "southwest",
            Self::Enter => "enter",
            Self::Exit => "exit",
            Self::Back => "back",
        }
    }
}

/// A parsed exploration command.
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    /// Move through an exit.
    Move {
        /// The direction to move.
        direction: Direction,
    },
    /// Go back to the previous location without rolling encounters.
    Return,
    /// Describe the current location.
    Look,
    /// Show explored locations or the restored map.
    Map,
    /// Show the stat block.
    Status,
    /// List exploration commands.
    Help,
    /// List inventory.
    Inventory,
    /// Take an item.
    Take {
        /// The item name as typed.
        item: String,
    },
    /// Unknown command.
    Unknown {
        /// The original input.
        input: String,
    },
}

const MOVE_VERBS: &[&str] = &["go", "move", "walk"];
const LOOK_VERBS: &[&str] = &["look", "l"];
const TAKE_VERBS: &[&str] = &["take", "get", "grab"];
const INVENTORY_VERBS: &[&str] = &["inventory", "inv", "i"];

/// Parse a player input string into a command.
pub fn parse_command(input: &str) -> Command {
    let input = input.trim();
    let words: Vec<&str> = input.split_whitespace().collect();
    let Some(first) = words.first() else {
        return unknown(input);
    };
    let verb = first.to_lowercase();
    let rest = &words[1..];

    if let Some(direction) = Direction::parse(&verb) {
        return if rest.is_empty() {
            Command::Move { direction }
        } else {
            unknown(input)
        };
    }

    if MOVE_VERBS.contains(&verb.as_str()) {
        return match rest {
            [dir] => Direction::parse(dir)
                .map(|direction| Command::Move { direction })
                .unwrap_or_else(|| unknown(input)),
            _ => unknown(input),
        };
    }
    if TAKE_VERBS.contains(&verb.as_str()) {
        return if rest.is_empty() {
            unknown(input)
        } else {
            Command::Take {
                item: rest.join(" "),
            }
        };
    }
    if !rest.is_empty() {
        return unknown(input);
    }
    if LOOK_VERBS.contains(&verb.as_str()) {
        return Command::Look;
    }
    if INVENTORY_VERBS.contains(&verb.as_str()) {
        return Command::Inventory;
    }

    match verb.as_str() {
        "return" => Command::Return,
        "map" => Command::Map,
        "status" => Command::Status,
        "help" => Command::Help,
        _ => unknown(input),
    }
}

fn unknown(input: &str) -> Command {
    Command::Unknown {
        input: input.to_string(),
    }
}
