//! Fixed catalog of prey species
//!
//! Species carry no behavior; the renderer uses the name and sprite.

use rand::Rng;
use serde::{Deserialize, Serialize};

const SPRITE_BASE: &str = "https://raw.githubusercontent.com/PokeAPI/sprites/master/sprites/pokemon";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Species {
    Bulbasaur,
    Charmander,
    Squirtle,
    Pikachu,
    Jigglypuff,
    Meowth,
    Psyduck,
    Eevee,
    Snorlax,
    Mewtwo,
}

impl Species {
    pub const ALL: [Species; 10] = [
        Species::Bulbasaur,
        Species::Charmander,
        Species::Squirtle,
        Species::Pikachu,
        Species::Jigglypuff,
        Species::Meowth,
        Species::Psyduck,
        Species::Eevee,
        Species::Snorlax,
        Species::Mewtwo,
    ];

    /// Uniform pick from the catalog
    pub fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Self::ALL[rng.gen_range(0..Self::ALL.len())]
    }

    pub fn name(&self) -> &'static str {
        match self {
            Species::Bulbasaur => "bulbasaur",
            Species::Charmander => "charmander",
            Species::Squirtle => "squirtle",
            Species::Pikachu => "pikachu",
            Species::Jigglypuff => "jigglypuff",
            Species::Meowth => "meowth",
            Species::Psyduck => "psyduck",
            Species::Eevee => "eevee",
            Species::Snorlax => "snorlax",
            Species::Mewtwo => "mewtwo",
        }
    }

    /// National dex number, used to build the sprite reference
    pub fn dex_number(&self) -> u16 {
        match self {
            Species::Bulbasaur => 1,
            Species::Charmander => 4,
            Species::Squirtle => 7,
            Species::Pikachu => 25,
            Species::Jigglypuff => 39,
            Species::Meowth => 52,
            Species::Psyduck => 54,
            Species::Eevee => 133,
            Species::Snorlax => 143,
            Species::Mewtwo => 150,
        }
    }

    pub fn sprite_url(&self) -> String {
        format!("{}/{}.png", SPRITE_BASE, self.dex_number())
    }

    /// Single-character glyph for text rendering
    pub fn glyph(&self) -> char {
        self.name().chars().next().unwrap_or('?').to_ascii_lowercase()
    }
}
