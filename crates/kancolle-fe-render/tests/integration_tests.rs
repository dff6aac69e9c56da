//! Integration tests for fleet expression resolution.
//!
//! These tests resolve real quest requirements end to end, with and without
//! a ship name database.

use std::borrow::Cow;
use std::collections::HashMap;

use kancolle_fe::{FeError, Language, ShipType};
use kancolle_fe_render::{
    resolve, CacheConfig, FleetResolver, ResolverConfig, ShipNameLookup,
};

/// Mock ship database keyed by ship id and class id.
struct MockShipDatabase {
    ships: HashMap<u32, (&'static str, &'static str)>,
    classes: HashMap<u32, (&'static str, &'static str)>,
}

impl MockShipDatabase {
    fn new() -> Self {
        let mut db = MockShipDatabase {
            ships: HashMap::new(),
            classes: HashMap::new(),
        };

        // (Japanese, English)
        db.ships.insert(543, ("長波改二", "Naganami Kai Ni"));
        db.ships.insert(424, ("高波", "Takanami"));
        db.ships.insert(452, ("沖波", "Okinami"));
        db.ships.insert(425, ("朝霜", "Asashimo"));
        db.ships.insert(646, ("加賀改二護", "Kaga Kai Ni Go"));

        db.classes.insert(30, ("陽炎型", "Kagerou-class"));
        db.classes.insert(38, ("夕雲型", "Yuugumo-class"));

        db
    }

    fn pick(entry: &(&'static str, &'static str), language: Language) -> &'static str {
        match language {
            Language::English => entry.1,
            _ => entry.0,
        }
    }
}

impl ShipNameLookup for MockShipDatabase {
    fn display_name(&self, token: &ShipType, language: Language) -> Cow<'_, str> {
        let entry = match token {
            ShipType::Ship(id) => self.ships.get(id),
            ShipType::Class(id) => self.classes.get(id),
            _ => None,
        };
        match entry {
            Some(entry) => Cow::Borrowed(Self::pick(entry, language)),
            None => Cow::Owned(token.to_string()),
        }
    }
}

// =============================================================================
// Reference sentences
// =============================================================================

#[test]
fn test_light_cruiser_flagship_zh_hans() {
    assert_eq!(
        resolve("CL{1,3}[0]-DD{1,}", "zh_Hans").unwrap(),
        "需要1~3个CL旗舰，需要至少1个DD，不能带其它舰种"
    );
}

#[test]
fn test_escort_fleet_with_wildcard_zh_hans() {
    assert_eq!(
        resolve("CVL|CL|CLT|CT{1,}-DD|DE{3,}-ANY*", "zh_Hans").unwrap(),
        "需要至少1个CVL/CL/CLT/CT，需要至少3个DD/DE"
    );
}

#[test]
fn test_battleship_flagship_zh_hans() {
    assert_eq!(
        resolve("BB{1}[0]-CL{1}-DD{4}", "zh_Hans").unwrap(),
        "需要1个BB旗舰，需要1个CL，需要4个DD，不能带其它舰种"
    );
}

#[test]
fn test_carrier_upper_bound_zh_hans() {
    assert_eq!(
        resolve("CV|CVB{0,2}-DD{2,}", "zh_Hans").unwrap(),
        "需要至多2个CV/CVB，需要至少2个DD，不能带其它舰种"
    );
}

#[test]
fn test_battleship_flagship_en() {
    assert_eq!(
        resolve("BB{1}[0]-CL{1}-DD{4}", "en").unwrap(),
        "Require exactly 1 BB as flagship, Require exactly 1 CL, Require exactly 4 DD, No other ship types allowed"
    );
}

#[test]
fn test_carrier_upper_bound_ja() {
    assert_eq!(
        resolve("CV|CVB{0,2}-DD{2,}", "ja").unwrap(),
        "CV/CVB最大2隻必要、DD少なくとも2隻必要、他の艦種は不可"
    );
}

#[test]
fn test_light_cruiser_flagship_zh_hant() {
    assert_eq!(
        resolve("CL{1,3}[0]-DD{1,}", "zh_Hant").unwrap(),
        "需要1~3個CL旗艦，需要至少1個DD，不能帶其它艦種"
    );
}

// =============================================================================
// Documented expressions
// =============================================================================

#[test]
fn test_grouped_battleships_with_star() {
    assert_eq!(
        resolve("(BB|BBV|FBB){1,2}[0]-(CV|CVB){0,2}-(DD|DE)*", "en").unwrap(),
        "Require 1 to 2 BB or BBV or FBB as flagship, Require up to 2 CV or CVB, Require exactly 1 DD or DE"
    );
}

#[test]
fn test_negated_group() {
    assert_eq!(
        resolve("!(BB|BBV|FBB)", "zh_Hans").unwrap(),
        "不能带1个BB/BBV/FBB，不能带其它舰种"
    );
}

#[test]
fn test_flagship_level() {
    assert_eq!(
        resolve("ANY[0,level>70]", "ja").unwrap(),
        "任意の艦1隻旗艦レベル70超必要"
    );
}

#[test]
fn test_named_ships_ja() {
    let db = MockShipDatabase::new();
    let resolver = FleetResolver::new(&db);
    assert_eq!(
        resolver
            .resolve("#543[0]-#424-#452-#425-ANY*", Language::Japanese)
            .unwrap(),
        "長波改二1隻旗艦必要、高波1隻必要、沖波1隻必要、朝霜1隻必要"
    );
}

#[test]
fn test_named_class_en() {
    let db = MockShipDatabase::new();
    let resolver = FleetResolver::new(&db);
    assert_eq!(
        resolver.resolve("@30{4,}|@38{4,}", Language::English).unwrap(),
        "Require at least 4 Kagerou-class, No other ship types allowed"
    );
}

#[test]
fn test_unknown_ids_fall_back_to_token() {
    let db = MockShipDatabase::new();
    let resolver = FleetResolver::new(&db);
    assert_eq!(
        resolver.resolve("#9999[0]-ANY*", Language::English).unwrap(),
        "Require exactly 1 #9999 as flagship"
    );
}

// =============================================================================
// Configuration and errors
// =============================================================================

#[test]
fn test_cached_resolver_with_lookup() {
    let db = MockShipDatabase::new();
    let config = ResolverConfig::builder()
        .with_default_language(Language::English)
        .with_cache(CacheConfig { max_entries: 4 })
        .build();
    let resolver = FleetResolver::with_config(&db, config);

    let first = resolver.resolve_default("#646[0]-ANY*").unwrap();
    let second = resolver.resolve_default("#646[0]-ANY*").unwrap();
    assert_eq!(first, "Require exactly 1 Kaga Kai Ni Go as flagship");
    assert_eq!(first, second);

    // Different language is a different cache entry.
    let ja = resolver.resolve("#646[0]-ANY*", Language::Japanese).unwrap();
    assert_eq!(ja, "加賀改二護1隻旗艦必要");
    assert_eq!(resolver.cache().map(|c| c.len()), Some(2));
}

#[test]
fn test_batch_resolution() {
    let resolver = FleetResolver::default();
    let expressions = ["CL{1,3}[0]-DD{1,}", "DD{3,1}", "BB{1}[0]-CL{1}-DD{4}"];
    let results = resolver.resolve_batch(&expressions, Language::SimplifiedChinese);

    assert_eq!(results.len(), 3);
    assert_eq!(
        results[0].as_deref(),
        Ok("需要1~3个CL旗舰，需要至少1个DD，不能带其它舰种")
    );
    assert_eq!(results[1], Err(FeError::InvalidQuantity { min: 3, max: 1 }));
    assert_eq!(
        results[2].as_deref(),
        Ok("需要1个BB旗舰，需要1个CL，需要4个DD，不能带其它舰种")
    );
}

#[test]
fn test_unsupported_language_is_an_error() {
    for tag in ["", "fr", "zh", "kr", "english"] {
        assert!(
            matches!(resolve("BB{1}", tag), Err(FeError::UnsupportedLanguage(_))),
            "tag {tag:?} should be rejected"
        );
    }
}

#[test]
fn test_malformed_expressions() {
    for expr in ["", "   ", "BB--DD", "DD-", "@{2}", "#-DD"] {
        assert!(
            matches!(resolve(expr, "en"), Err(FeError::MalformedExpression { .. })),
            "expression {expr:?} should be rejected"
        );
    }
}
