#![allow(dead_code)]

use std::collections::{HashMap, HashSet};

use borsh::schema::BorshSchemaContainer;
use borsh::BorshSchema;
use zorsh_gen_compiler::decode_schema_container;
use zorsh_gen_schema::SchemaContainer;

#[derive(BorshSchema)]
pub struct Location {
    lat: f64,
    lng: f64,
    altitude: Option<u32>,
}

#[derive(BorshSchema)]
pub enum ItemRarity {
    Common,
    Uncommon,
    Rare,
    Epic,
    Legendary,
}

#[derive(BorshSchema)]
pub struct Stats {
    strength: u16,
    dexterity: u16,
    intelligence: u16,
    health: u32,
    mana: u32,
}

#[derive(BorshSchema)]
pub enum ItemEffect {
    Damage(u32),
    Heal { amount: u32, duration: u16 },
    Status { effect_type: String, power: u16, duration: u32 },
    None,
}

#[derive(BorshSchema)]
pub struct Item {
    id: String,
    name: String,
    description: String,
    rarity: ItemRarity,
    level_requirement: u8,
    effects: Vec<ItemEffect>,
    stats: Option<Stats>,
    metadata: HashMap<String, String>,
}

#[derive(BorshSchema)]
pub struct Achievement {
    id: String,
    name: String,
    description: String,
    reward_points: u32,
    completed_at: Option<u64>,
    prerequisites: Vec<String>,
}

#[derive(BorshSchema)]
pub enum CharacterClass {
    Warrior(Stats),
    Mage { base_stats: Stats, spells_known: Vec<String>, mana_regen: f32 },
    Rogue { base_stats: Stats, stealth_level: u8, critical_chance: f32 },
}

#[derive(BorshSchema)]
pub struct GuildMembership {
    guild_id: String,
    guild_name: String,
    joined_at: u64,
    rank: String,
    permissions: HashSet<String>,
}

#[derive(BorshSchema)]
pub struct Trade {
    id: String,
    from_player: String,
    to_player: String,
    items: Vec<Item>,
    gold_amount: u64,
    status: String,
    created_at: u64,
    completed_at: Option<u64>,
}

#[derive(BorshSchema)]
pub struct QuestProgress {
    quest_id: String,
    started_at: u64,
    steps_completed: Vec<u32>,
    current_step: u32,
    collected_items: HashMap<String, u32>,
}

#[derive(BorshSchema)]
pub struct PlayerCharacter {
    id: String,
    name: String,
    created_at: u64,
    last_login: u64,
    character_class: CharacterClass,
    level: u32,
    experience: u64,
    location: Location,
    inventory: Vec<Item>,
    equipped_items: HashMap<String, Item>,
    achievements: Vec<Achievement>,
    completed_quests: HashSet<String>,
    active_quests: Vec<QuestProgress>,
    guild: Option<GuildMembership>,
    current_trades: Vec<Trade>,
    friends: HashSet<String>,
    blocked_players: HashSet<String>,
    settings: HashMap<String, String>,
    last_deaths: Vec<(u64, Location, String)>,
    skill_levels: HashMap<String, (u16, f32)>,
}

/// Borsh-serialized schema container for `PlayerCharacter`.
pub fn player_character_bytes() -> Vec<u8> {
    borsh::to_vec(&BorshSchemaContainer::for_type::<PlayerCharacter>()).unwrap()
}

/// `player_character_bytes` decoded into the model.
pub fn player_character() -> SchemaContainer {
    decode_schema_container(&player_character_bytes()).unwrap()
}

/// Position of `needle` in `haystack`, failing the test when absent.
pub fn index_of(haystack: &str, needle: &str) -> usize {
    haystack
        .find(needle)
        .unwrap_or_else(|| panic!("{:?} not found in generated code:\n{}", needle, haystack))
}

/// The declaration block that starts with `export const <name>Schema`.
pub fn block<'a>(code: &'a str, name: &str) -> &'a str {
    let start = index_of(code, &format!("export const {}Schema = ", name));
    let rest = &code[start..];
    let end = rest.find("\n\n").unwrap_or(rest.len());
    &rest[..end]
}
