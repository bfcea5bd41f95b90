//! Combat commands.

/// A spell a mage can cast.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Spell {
    /// Ranged fire damage, 5d6 minus enemy defense.
    Fireball,
    /// +5 armor class for the enemy's next attack.
    Shield,
}

impl Spell {
    /// Every known spell, in the order they are listed.
    pub const ALL: [Spell; 2] = [Self::Fireball, Self::Shield];

    /// Parse a spell name (case-insensitive).
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "fireball" => Some(Self::Fireball),
            "shield" => Some(Self::Shield),
            _ => None,
        }
    }

    /// Mana spent on casting.
    pub fn mana_cost(self) -> i32 {
        match self {
            Self::Fireball => 15,
            Self::Shield => 10,
        }
    }

    /// Uppercase display name.
    pub fn name(self) -> &'static str {
        match self {
            Self::Fireball => "FIREBALL",
            Self::Shield => "SHIELD",
        }
    }
}

/// A parsed combat command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CombatAction {
    /// Melee attack.
    Attack,
    /// Guard against the next hit.
    Defend,
    /// Bare `cast`: list mana and spells.
    Spellbook,
    /// `cast <spell>`; `None` when the spell is unknown.
    Cast(Option<Spell>),
    /// Try to escape.
    Flee,
    /// List combat commands.
    Help,
    /// Anything else.
    Invalid(String),
}

impl CombatAction {
    /// Parse raw input into a combat action.
    pub fn parse(input: &str) -> Self {
        let lower = input.trim().to_lowercase();
        match lower.as_str() {
            "attack" => Self::Attack,
            "defend" => Self::Defend,
            "cast" => Self::Spellbook,
            "flee" => Self::Flee,
            "help" => Self::Help,
            other => match other.strip_prefix("cast ") {
                Some(spell) => Self::Cast(Spell::parse(spell)),
                None => Self::Invalid(lower),
            },
        }
    }

    /// Whether the action starts a new player turn (and so ends last turn's guard).
    pub fn starts_turn(&self) -> bool {
        !matches!(self, Self::Help)
    }
}

impl std::fmt::Display for CombatAction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Attack => write!(f, "attack"),
            Self::Defend => write!(f, "defend"),
            Self::Spellbook => write!(f, "cast"),
            Self::Cast(Some(spell)) => write!(f, "cast {}", spell.name().to_lowercase()),
            Self::Cast(None) => write!(f, "cast ?"),
            Self::Flee => write!(f, "flee"),
            Self::Help => write!(f, "help"),
            Self::Invalid(raw) => write!(f, "{raw}"),
        }
    }
}
