//! Keyword tables and patterns for rule-based classification.
//!
//! Every table is a [`KeywordSet`]: entries match at the start of a word,
//! so Czech stems (`základ`, `výztuž`) catch their inflected forms. Short
//! stems that are also the head of an unrelated English word carry an
//! explicit word end (`norm[aěyu]?\b` vs `normal`, `desk…\b` vs `desktop`).

use super::entities::Domain;
use crate::core::keyword_set::KeywordSet;
use regex::Regex;
use std::sync::LazyLock;

/// `norma`, `normy`, `norm` but not `normal`
pub(crate) const NORM: &str = r"norm[aěyu]?\b|norem\b";
/// `deska`, `desky`, `desku` but not `desktop`
pub(crate) const DESK: &str = r"desk(?:a|y|u|ou|ách|ami|ě)?\b";
/// `cena`, `ceny`, `cenu` but not `cenzura`
pub(crate) const PRICE_CZ: &str = r"cen(?:a|y|u|ou|ě|ách)\b";

macro_rules! keyword_set {
    ($(#[$meta:meta])* $name:ident = [$($kw:expr),* $(,)?]) => {
        $(#[$meta])*
        pub(crate) static $name: LazyLock<KeywordSet> =
            LazyLock::new(|| KeywordSet::new(&[$($kw),*]));
    };
}

keyword_set!(MATERIALS = [
    "concrete", "cement", "steel", "reinforcement", "aggregate", "material", "mix",
    "beton", "ocel", "výztuž", "kamenivo", "materiál", "směs",
]);

keyword_set!(CALCULATION = [
    "calculat", "compute", "how much", "how many", "load", "volume", "quantity", "area",
    "moment", "dimension", "span", "spočít", "vypočít", "výpočet", "kolik", "zatížení",
    "objem", "množství", "plocha", "rozměr", "rozpětí",
]);

keyword_set!(DESIGN = [
    "design", "foundation", "footing", "beam", "slab", "column", "wall", "structure",
    "building", "návrh", "navrhn", "základ", "patk", "nosník", DESK, "sloup", "stěn",
    "konstrukc", "budov",
]);

keyword_set!(VALIDATION = [
    "check", "validate", "verify", "error", "mistake", "compliance", "audit", "kontrol",
    "zkontrol", "ověř", "chyb", "soulad",
]);

keyword_set!(STANDARDS = [
    "čsn", "csn", "en 206", "en 1992", "eurocode", "eurokód", "standard", NORM,
    "requirement", "regulation", "exposure class", "požadav", "předpis", "třída prostředí",
]);

keyword_set!(CODES = [
    "otskp", "kros", "úrs", "code", "price", "cost", "budget", "catalog", "kód", "položk",
    PRICE_CZ, "náklad", "rozpočet", "rozpočt", "katalog",
]);

/// Keyword table for a domain
pub(crate) fn domain_keywords(domain: Domain) -> &'static KeywordSet {
    match domain {
        Domain::Materials => &MATERIALS,
        Domain::Calculation => &CALCULATION,
        Domain::Design => &DESIGN,
        Domain::Validation => &VALIDATION,
        Domain::Standards => &STANDARDS,
        Domain::Codes => &CODES,
    }
}

keyword_set!(CREATIVE = [
    "alternative", "innovative", "creative", "brainstorm", "what if", "unconventional",
    "new approach", "alternativ", "inovativ", "kreativ", "co kdyby", "netradiční",
    "nový přístup",
]);

keyword_set!(COMPLEX = [
    "comprehensive", "entire project", "whole project", "compare", "step by step",
    "multiple options", "several variants", "komplexní", "celý projekt", "celého projektu",
    "porovn", "více variant",
]);

keyword_set!(SIMPLE = [
    "what is", "what's", "what are", "define", "definition", "meaning", "look up", "lookup",
    "co je", "co znamená", "význam", "jaký je", "jaká je", "jaké je",
]);

keyword_set!(LOOKUP = [
    "what", "which", "where", "find", "show", "list", r"co\b", "jaký", "jaká", "jaké",
    "který", "která", "které", "kde", "najdi", "vyhledej",
]);

keyword_set!(OPTIMIZATION = [
    "optimi", "optimal", "minimi", "reduce cost", "cheaper", "efficien", "optimáln",
    "minimaliz", "levněj", "úspor", "snížit", "snížení", "efektivn",
]);

keyword_set!(
    /// Phrasing that asks whether something is good enough
    ADEQUACY = [
        "sufficient", "adequate", "enough", "is it ok", "will it hold", "postačuj",
        "dostateč", "vyhovuje", "vyhoví", "unese",
    ]
);

keyword_set!(COST = [
    "cost", "price", "budget", PRICE_CZ, "náklad", "rozpočet", "rozpočt",
]);

keyword_set!(
    /// Catalogue or standard names that make a question a reference lookup
    CATALOGUE = [
        "otskp", "kros", "úrs", "čsn", "csn", "en 206", "en 1992", "eurocode", "eurokód",
        "code", "kód", NORM, "standard", "položk", "catalog", "katalog",
    ]
);

keyword_set!(
    /// Verbs that turn a lookup into real engineering work
    WORK_VERBS = [
        "calculat", "compute", "design", r"size\b", "check", "verify", "spočít", "vypočít",
        "navrhn", "posuď", "ověř", "zkontroluj",
    ]
);

keyword_set!(
    /// Nouns for a multi-storey structure
    BUILDING = [
        "building", "house", "storey", "budov", "dům", "domu", "objekt", "podlaž",
        r"patr(?:o|a|u|e|ech|ů|ov\w*)\b",
    ]
);

keyword_set!(CONCRETE = ["concrete", "beton"]);

pub(crate) static COMPLEX_PHRASE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?i)\b(full|complete|comprehensive|detailed|thorough|celkov\w*|podrobn\w*)\s+(analys[ie]s|design|review|assessment|report|analýz\w*|posouzení|návrh\w*)",
    )
    .expect("valid complex phrase regex")
});

pub(crate) static VALIDATION_REQUEST: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?i)\b(check|validate|verify|zkontroluj\w*|kontrol\w*|ověř\w*)\b.*\b(errors?|compliance|design|project|chyb\w*|soulad\w*|návrh\w*|projekt\w*)",
    )
    .expect("valid validation regex")
});

pub(crate) static NUMBER_WITH_UNIT: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?i)\d+(?:[.,]\d+)?\s*(?:mm|cm|km|m²|m³|m2|m3|kn/m|kn|mpa|kg|metres|meters|metrů|metry|ks|m|t|%)(?:[^\p{L}\p{N}]|$)",
    )
    .expect("valid number-with-unit regex")
});

pub(crate) static STOREY_COUNT: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)\d+\s*(?:-\s*)?(?:stor(?:e)?y|storeys|stories|floors?|podlaž\w*|patr\w*|np\b)")
        .expect("valid storey count regex")
});

pub(crate) static EXPOSURE_INFO: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?i)\bx[cdsfam]\d\b|exposure|expozi|prostředí|indoor|outdoor|interiér|exteriér|venkovn|vnitřn",
    )
    .expect("valid exposure regex")
});

pub(crate) static CONCRETE_CLASS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)\bc\d{2,3}/\d{2,3}\b").expect("valid concrete class regex"));

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_number_with_unit_matches() {
        for text in ["span of 6 m", "300mm slab", "12,5 m2", "load 25 kN/m", "C30/37 at 4.5 m"] {
            assert!(NUMBER_WITH_UNIT.is_match(text), "{}", text);
        }
    }

    #[test]
    fn test_number_with_unit_rejects_bare_numbers() {
        for text in ["C25/30 concrete", "3 questions", "2024 project", "10 tons"] {
            assert!(!NUMBER_WITH_UNIT.is_match(text), "{}", text);
        }
    }

    #[test]
    fn test_validation_request_needs_verb_and_object() {
        assert!(VALIDATION_REQUEST.is_match("check my design"));
        assert!(VALIDATION_REQUEST.is_match("Zkontroluj chyby v projektu"));
        assert!(!VALIDATION_REQUEST.is_match("check the price"));
        assert!(!VALIDATION_REQUEST.is_match("design errors"));
    }

    #[test]
    fn test_storey_count() {
        assert!(STOREY_COUNT.is_match("a 4-storey building"));
        assert!(STOREY_COUNT.is_match("budova se 3 podlažími"));
        assert!(!STOREY_COUNT.is_match("a residential building"));
    }

    #[test]
    fn test_exposure_info() {
        assert!(EXPOSURE_INFO.is_match("exposure class XF2"));
        assert!(EXPOSURE_INFO.is_match("xc1 interior"));
        assert!(!EXPOSURE_INFO.is_match("concrete for a slab"));
    }

    #[test]
    fn test_keyword_tables_are_lowercase() {
        for domain in Domain::ALL {
            for kw in domain_keywords(domain).patterns() {
                assert_eq!(*kw, kw.to_lowercase());
            }
        }
    }

    #[test]
    fn test_english_words_do_not_trigger_czech_stems() {
        let words = [
            "scenario", "desktop", "lifespan", "normal", "normally", "enormous", "encode",
            "decode", "concentrate", "patrol",
        ];
        for domain in Domain::ALL {
            for word in words {
                assert!(
                    !domain_keywords(domain).is_match(word),
                    "{:?} matched {}",
                    domain,
                    word
                );
            }
        }
        for word in words {
            assert!(!CATALOGUE.is_match(word), "{}", word);
            assert!(!BUILDING.is_match(word), "{}", word);
        }
    }

    #[test]
    fn test_czech_inflections_still_match() {
        assert!(DESIGN.is_match("základovou desku"));
        assert!(STANDARDS.is_match("podle normy"));
        assert!(CODES.is_match("jaká je cena"));
        assert!(CODES.is_match("v rozpočtu"));
        assert!(VALIDATION.is_match("zkontroluj výkres"));
        assert!(BUILDING.is_match("třetí patro"));
    }
}
