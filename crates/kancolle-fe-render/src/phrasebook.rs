//! Per-language phrase tables.
//!
//! Every language is described by a [`Phrasebook`]; the renderer has a single
//! code path and only reads from the table. Templates use `{n}` for the lower
//! bound and `{m}` for the upper bound.

use kancolle_fe::{Language, Quantity, QuantityCase};

/// Printed for the missing upper bound of `{0,}`.
pub const UNBOUNDED: &str = "∞";

/// Where the verb goes in a clause.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WordOrder {
    /// `{verb} {quantity}{counter} {types}{flagship}{level}`
    VerbFirst,
    /// `{types}{quantity}{counter}{flagship}{level}{verb}`
    VerbLast,
}

/// Phrase table of one language.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Phrasebook {
    /// Separator between clauses.
    pub clause_separator: &'static str,
    /// Separator between alternative ship types.
    pub type_separator: &'static str,
    /// Separator between the words of a clause.
    pub word_separator: &'static str,
    /// Verb of a regular clause.
    pub require: &'static str,
    /// Verb of a negated clause.
    pub forbid: &'static str,
    /// Counter word following the quantity.
    pub counter: &'static str,
    /// Quantity template for `min == max`.
    pub exact: &'static str,
    /// Quantity template for `min == 0` with a finite maximum.
    pub at_most: &'static str,
    /// Quantity template for `min > 0` without a maximum.
    pub at_least: &'static str,
    /// Quantity template for every other range.
    pub range: &'static str,
    /// Noun used when a clause only lists the wildcard.
    pub any_ship: &'static str,
    /// Suffix of a clause that must occupy the flagship slot.
    pub flagship: &'static str,
    /// Level suffix template.
    pub level: &'static str,
    /// Closing clause when no wildcard appears anywhere.
    pub no_other_types: &'static str,
    /// Sentence for an expression that restricts nothing.
    pub unrestricted: &'static str,
    /// Clause word order.
    pub order: WordOrder,
}

/// Simplified Chinese phrases.
pub const SIMPLIFIED_CHINESE: Phrasebook = Phrasebook {
    clause_separator: "，",
    type_separator: "/",
    word_separator: "",
    require: "需要",
    forbid: "不能带",
    counter: "个",
    exact: "{n}",
    at_most: "至多{m}",
    at_least: "至少{n}",
    range: "{n}~{m}",
    any_ship: "任意舰",
    flagship: "旗舰",
    level: "等级大于{n}",
    no_other_types: "不能带其它舰种",
    unrestricted: "无舰种限制",
    order: WordOrder::VerbFirst,
};

/// Traditional Chinese phrases.
pub const TRADITIONAL_CHINESE: Phrasebook = Phrasebook {
    clause_separator: "，",
    type_separator: "/",
    word_separator: "",
    require: "需要",
    forbid: "不能帶",
    counter: "個",
    exact: "{n}",
    at_most: "至多{m}",
    at_least: "至少{n}",
    range: "{n}~{m}",
    any_ship: "任意艦",
    flagship: "旗艦",
    level: "等級大於{n}",
    no_other_types: "不能帶其它艦種",
    unrestricted: "無艦種限制",
    order: WordOrder::VerbFirst,
};

/// Japanese phrases.
pub const JAPANESE: Phrasebook = Phrasebook {
    clause_separator: "、",
    type_separator: "/",
    word_separator: "",
    require: "必要",
    forbid: "不可",
    counter: "隻",
    exact: "{n}",
    at_most: "最大{m}",
    at_least: "少なくとも{n}",
    range: "{n}~{m}",
    any_ship: "任意の艦",
    flagship: "旗艦",
    level: "レベル{n}超",
    no_other_types: "他の艦種は不可",
    unrestricted: "艦種制限なし",
    order: WordOrder::VerbLast,
};

/// English phrases.
pub const ENGLISH: Phrasebook = Phrasebook {
    clause_separator: ", ",
    type_separator: " or ",
    word_separator: " ",
    require: "Require",
    forbid: "Must not have",
    counter: "",
    exact: "exactly {n}",
    at_most: "up to {m}",
    at_least: "at least {n}",
    range: "{n} to {m}",
    any_ship: "any ship",
    flagship: " as flagship",
    level: " with level > {n}",
    no_other_types: "No other ship types allowed",
    unrestricted: "No ship type restrictions",
    order: WordOrder::VerbFirst,
};

impl Phrasebook {
    /// Returns the phrase table of `language`.
    pub fn for_language(language: Language) -> &'static Phrasebook {
        match language {
            Language::SimplifiedChinese => &SIMPLIFIED_CHINESE,
            Language::TraditionalChinese => &TRADITIONAL_CHINESE,
            Language::Japanese => &JAPANESE,
            Language::English => &ENGLISH,
        }
    }

    /// Quantity phrase including the counter word, e.g. `1~3个` or `at least 2`.
    pub fn quantity(&self, quantity: &Quantity) -> String {
        let phrase = match quantity.case() {
            QuantityCase::Exact(n) => fill(self.exact, n, None),
            QuantityCase::AtMost(m) => fill(self.at_most, 0, Some(m)),
            QuantityCase::AtLeast(n) => fill(self.at_least, n, None),
            QuantityCase::Range(n, m) => match m {
                Some(m) => fill(self.range, n, Some(m)),
                None => self.range.replace("{n}", &n.to_string()).replace("{m}", UNBOUNDED),
            },
        };
        format!("{}{}", phrase, self.counter)
    }

    /// Level suffix for a minimum level.
    pub fn level(&self, level: u32) -> String {
        fill(self.level, level, None)
    }

    /// Verb for a regular or negated clause.
    pub fn verb(&self, negated: bool) -> &'static str {
        if negated {
            self.forbid
        } else {
            self.require
        }
    }
}

fn fill(template: &str, n: u32, m: Option<u32>) -> String {
    let filled = template.replace("{n}", &n.to_string());
    match m {
        Some(m) => filled.replace("{m}", &m.to_string()),
        None => filled,
    }
}
