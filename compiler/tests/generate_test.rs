mod common;

use borsh::schema::BorshSchemaContainer;
use common::{block, index_of, player_character, player_character_bytes, PlayerCharacter};
use zorsh_gen_compiler::{
    compile_schema_container, decode_schema_container, encode_schema_container, find_nominal_types, generate,
    generate_with_options, resolve, GeneratorOptions, ZorshError,
};
use zorsh_gen_schema::{Definition, SchemaContainer};

const EXPECTED_TYPES: [&str; 11] = [
    "Location",
    "ItemRarity",
    "Stats",
    "ItemEffect",
    "Item",
    "Achievement",
    "CharacterClass",
    "GuildMembership",
    "Trade",
    "QuestProgress",
    "PlayerCharacter",
];

#[test]
fn test_nominal_types_of_complex_schema() {
    let nominal = find_nominal_types(&player_character());
    assert_eq!(
        nominal,
        vec![
            "Achievement",
            "CharacterClass",
            "GuildMembership",
            "Item",
            "ItemEffect",
            "ItemRarity",
            "Location",
            "PlayerCharacter",
            "QuestProgress",
            "Stats",
            "Trade",
        ]
    );
}

#[test]
fn test_resolved_order_of_complex_schema() {
    let container = player_character();
    let sorted = resolve(&find_nominal_types(&container), &container).unwrap();
    assert_eq!(
        sorted,
        vec![
            "Achievement",
            "Stats",
            "CharacterClass",
            "GuildMembership",
            "ItemRarity",
            "ItemEffect",
            "Item",
            "Location",
            "QuestProgress",
            "Trade",
            "PlayerCharacter",
        ]
    );
}

#[test]
fn test_generate_complex_schema() {
    let code = generate(&player_character()).unwrap();

    assert!(code.starts_with("import { b } from \"@zorsh/zorsh\";\n\n"));
    for ty in EXPECTED_TYPES {
        assert!(code.contains(&format!("export const {}Schema = ", ty)), "{} missing", ty);
        assert!(code.contains(&format!("export type {} = b.infer<typeof {}Schema>;", ty, ty)));
    }

    // Synthetic entries never get a declaration of their own.
    for synthetic in ["ItemEffect__Damage", "CharacterClass__Mage", "ItemRarity__Common", "String", "u32"] {
        assert!(!code.contains(&format!("const {}Schema", synthetic)), "{} leaked", synthetic);
    }

    assert!(block(&code, "Location").contains("lat: b.f64()"));
    assert!(block(&code, "Location").contains("altitude: b.option(b.u32())"));
    assert!(block(&code, "ItemRarity").contains("Common: b.unit()"));
    assert!(block(&code, "ItemRarity").contains("Legendary: b.unit()"));

    assert!(code.contains("b.vec(ItemSchema)"));
    assert!(code.contains("b.hashMap(b.string(), ItemSchema)"));
    assert!(code.contains("b.option(StatsSchema)"));
    assert!(code.contains("b.hashSet(b.string())"));
    assert!(code.contains("b.tuple([b.u64(), LocationSchema, b.string()])"));
    assert!(code.contains("skill_levels: b.hashMap(b.string(), b.tuple([b.u16(), b.f32()]))"));
}

#[test]
fn test_enum_payloads_are_inlined() {
    let code = generate(&player_character()).unwrap();

    let effect = block(&code, "ItemEffect");
    assert!(effect.contains("  Damage: b.u32(),\n"));
    assert!(effect.contains("  Heal: b.struct({\n    amount: b.u32(),\n    duration: b.u16()\n  }),\n"));
    assert!(effect.contains("  None: b.unit()\n"));

    let class = block(&code, "CharacterClass");
    assert!(class.contains("  Warrior: StatsSchema,\n"));
    assert!(class.contains("    base_stats: StatsSchema,\n    spells_known: b.vec(b.string()),\n"));
}

#[test]
fn test_declarations_follow_dependencies() {
    let code = generate(&player_character()).unwrap();
    let at = |name: &str| index_of(&code, &format!("export const {}Schema = ", name));

    assert!(at("Stats") < at("CharacterClass"));
    assert!(at("Stats") < at("Item"));
    assert!(at("ItemEffect") < at("Item"));
    assert!(at("Location") < at("PlayerCharacter"));
    assert!(at("Item") < at("Trade"));
    assert!(at("Trade") < at("PlayerCharacter"));
}

#[test]
fn test_struct_field_order_is_preserved() {
    let code = generate(&player_character()).unwrap();
    let stats = block(&code, "Stats");

    let mut last = 0;
    for field in ["strength", "dexterity", "intelligence", "health", "mana"] {
        let at = index_of(stats, &format!("  {}: ", field));
        assert!(at > last, "{} out of order in\n{}", field, stats);
        last = at;
    }
}

#[test]
fn test_output_is_deterministic() {
    let first = generate(&player_character()).unwrap();
    let second = generate(&player_character()).unwrap();
    assert_eq!(first, second);
}

#[test]
fn test_compile_from_borsh_bytes() {
    let options = GeneratorOptions::default();
    let from_bytes = compile_schema_container(&player_character_bytes(), &options).unwrap();
    let in_memory = SchemaContainer::from(&BorshSchemaContainer::for_type::<PlayerCharacter>());
    assert_eq!(from_bytes, generate_with_options(&in_memory, &options).unwrap());
}

#[test]
fn test_encode_reproduces_borsh_bytes() {
    let bytes = player_character_bytes();
    let container = decode_schema_container(&bytes).unwrap();
    assert_eq!(container.declaration, "PlayerCharacter");
    assert_eq!(encode_schema_container(&container).unwrap(), bytes);
}

#[test]
fn test_borsh_variant_payload_names() {
    let container = player_character();
    assert_eq!(
        container.get("ItemEffect__Damage"),
        Some(&Definition::unnamed_struct(["u32"]))
    );
    assert_eq!(container.get("ItemRarity__Common"), Some(&Definition::empty_struct()));
    assert_eq!(
        container.get("HashMap<String, (u16, f32)>"),
        Some(&Definition::sequence("(String, (u16, f32))"))
    );
}

#[test]
fn test_stats_item_type_item() {
    let container = SchemaContainer::new("Item")
        .with("Stats", Definition::named_struct([("value", "u32")]))
        .with(
            "ItemType",
            Definition::simple_enum([("Basic", "()"), ("Special", "()")]),
        )
        .with(
            "Item",
            Definition::named_struct([("type", "ItemType"), ("stats", "Stats")]),
        );

    let nominal = find_nominal_types(&container);
    assert_eq!(nominal, vec!["Stats", "ItemType", "Item"]);
    let sorted = resolve(&nominal, &container).unwrap();
    assert_eq!(sorted.last().map(String::as_str), Some("Item"));

    let code = generate(&container).unwrap();
    let item = block(&code, "Item");
    assert!(item.contains("type: ItemTypeSchema"));
    assert!(item.contains("stats: StatsSchema"));
    let item_type = block(&code, "ItemType");
    assert!(item_type.contains("Basic: b.unit()"));
    assert!(item_type.contains("Special: b.unit()"));
}

#[test]
fn test_empty_schema() {
    let code = generate(&SchemaContainer::new("Empty")).unwrap();
    assert_eq!(code, "import { b } from \"@zorsh/zorsh\";\n");
}

#[test]
fn test_cycle_aborts_generation() {
    let container = SchemaContainer::new("A")
        .with("A", Definition::named_struct([("b", "Option<B>")]))
        .with("B", Definition::named_struct([("a", "Vec<A>")]));

    assert!(matches!(generate(&container), Err(ZorshError::CircularDependency(_))));
}

#[test]
fn test_no_exports_option() {
    let options = GeneratorOptions { exports: false };
    let code = generate_with_options(&player_character(), &options).unwrap();
    assert!(code.contains("\nconst LocationSchema = b.struct({"));
    assert!(code.contains("\ntype Location = b.infer<typeof LocationSchema>;"));
    assert!(!code.contains("export "));
}
