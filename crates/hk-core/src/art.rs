//! ASCII art shown by the terminal: enemy portraits and the restored map.

/// The full map of Hawkins, revealed once every fragment is held.
pub const FULL_MAP: &str = r#"
                         ┌──────────────────────────┐
                         │   RADIO TOWER (T4) 📡     │
                         │  Signal Wraiths           │
                         └───────────┬──────────────┘
                                     │
            ┌────────────────────────┼────────────────────────┐
            │                        │                        │
┌───────────▼──────────┐   ┌─────────▼─────────┐   ┌─────────▼─────────┐
│ FOREST TUNNELS (T3)   │   │  HAWKINS HIGH (T3) │   │  ARCADE (T2) 🕹️   │
│ Spore Wolves          │   │ Corrupted Students│   │ Shadow Teens      │
└───────────┬──────────┘   └─────────┬─────────┘   └─────────┬─────────┘
            │                        │                        │
            │                        │                        │
┌───────────▼──────────┐   ┌─────────▼─────────┐   ┌─────────▼─────────┐
│ SCRAP YARD (T1)       │   │  TOWN CENTER (SAFE)│  │ STARCOURT RUINS(T3)│
│ Possessed Rats        │   │ Save / Inventory  │  │ Flesh Crawlers     │
└───────────┬──────────┘   └─────────┬─────────┘   └─────────┬─────────┘
            │                        │                        │
            │                        │                        │
┌───────────▼──────────┐   ┌─────────▼─────────┐   ┌─────────▼─────────┐
│ HOSPITAL (T4) 🏥      │   │ QUARRY EDGE (T4)  │   │ CULT SHELTER (T5) │
│ Screamer Nurses       │   │ Void Hawks        │   │ Mindbound Cultists│
└───────────┬──────────┘   └─────────┬─────────┘   └─────────┬─────────┘
            │                        │                        │
            │                        │                        │
            └───────────────┬────────┴────────┬──────────────┘
                            │                 │
                ┌───────────▼──────────┐  ┌───▼──────────────────┐
                │ UPSIDE DOWN GATE (T5) │  │ ??? UNKNOWN ZONE ???  │
                │ Veiled Mind (BOSS)    │  │ ⚠ UNDER CONSTRUCTION │
                └──────────────────────┘  └──────────────────────┘
"#;

const POSSESSED_RAT: &str = r#"
     (o)(o)
    /      \
    \      /
     `----´
  "#;

const SHADOW_TEEN: &str = r#"
      ,  ,
     /|--|\
    ( @  @ )
     \ -- /
      |  |
  "#;

const CORRUPTED_STUDENT: &str = r#"
      _______
     /       \
    |  O   x  |
    |    ^    |
     \  ~~~  /
      \_____/
       | H |
  "#;

const SPORE_WOLF: &str = r#"
      ^..^
     (oo )____
       \  o o  \
        \ ooo   \
        (__(____/
  "#;

const FLESH_CRAWLER: &str = r#"
     /\  /\
    (  OO  )
    / <  > \
   (  \/  )
  "#;

const SIGNAL_WRAITH: &str = r#"
      .---.
     / ⚡ ⚡ \
    |   O   |
     \  ~  /
      | | |
     /  |  \
  "#;

const VOID_HAWK: &str = r#"
     \    /
      \  /
      (oo)
     //||\\
  "#;

const VEILED_MIND: &str = r#"
   .   .dP                  dP                   9b                 9b.    .
  4    qXb         .       dX                     Xb       .        dXp     t
 dX.    9Xb      .dXb    __                         __    dXb.     dXP     .Xb
 9XXb._       _.dXXXXb dXXXXbo.                 .odXXXXb dXXXXb._       _.dXXP
  9XXXXXXXXXXXXXXXXXXXVXXXXXXXXOo.           .oOXXXXXXXXVXXXXXXXXXXXXXXXXXXXP
   `9XXXXXXXXXXXXXXXXXXXXX'~   ~"OOO8b   d8OOO"~   ~'XXXXXXXXXXXXXXXXXXXXXP'
     `9XXXXXXXXXXXP' `9XX'   DIE    `98v8P'  HUMAN   'XXP' `9XXXXXXXXXXXP'
         ~~~~~~~       9X.          .db|db.          .XP       ~~~~~~~
                         )b.  .dbo.dP'`v'`9b.odb.  .dX(
                       ,dXXXXXXXXXXXb     dXXXXXXXXXXXb.
                      dXXXXXXXXXXXP'   .   `9XXXXXXXXXXXb
                     dXXXXXXXXXXXXb   d|b   dXXXXXXXXXXXXb
                     9XXb'   `XXXXXb.dX|Xb.dXXXXX'   `dXXP
                      '      9XXXXXX(   )XXXXXXP      `/
                              XXXX X.`v'.X XXXX
                              XP^X'`b   d'`X^XX
                              X. 9  `   '  P )X
                              `b  `       '  d'
  "#;

/// Portrait for an enemy kind, keyed by template ID.
pub fn enemy_art(enemy_id: &str) -> Option<&'static str> {
    match enemy_id {
        "possessed_rat" => Some(POSSESSED_RAT),
        "shadow_teen" => Some(SHADOW_TEEN),
        "corrupted_student" => Some(CORRUPTED_STUDENT),
        "spore_wolf" => Some(SPORE_WOLF),
        "flesh_crawler" => Some(FLESH_CRAWLER),
        "signal_wraith" => Some(SIGNAL_WRAITH),
        "void_hawk" => Some(VOID_HAWK),
        "veiled_mind" => Some(VEILED_MIND),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_enemies_have_art() {
        assert!(enemy_art("void_hawk").is_some());
        assert!(enemy_art("veiled_mind").unwrap().contains("HUMAN"));
        assert!(enemy_art("rust_walker").is_none());
    }

    #[test]
    fn map_mentions_every_region() {
        for region in ["RADIO TOWER", "TOWN CENTER", "QUARRY EDGE", "UNKNOWN ZONE"] {
            assert!(FULL_MAP.contains(region), "missing {region}");
        }
    }
}
