//! Readable names for ESPN's numeric stat ids.
//!
//! Only the ids that show up in common scoring settings are named; anything
//! else keeps its numeric key so no data is dropped.

use std::collections::BTreeMap;

pub fn stat_name(stat_id: u16) -> Option<&'static str> {
    let name = match stat_id {
        0 => "passingAttempts",
        1 => "passingCompletions",
        2 => "passingIncompletions",
        3 => "passingYards",
        4 => "passingTouchdowns",
        19 => "passing2PtConversions",
        20 => "passingInterceptions",
        23 => "rushingAttempts",
        24 => "rushingYards",
        25 => "rushingTouchdowns",
        26 => "rushing2PtConversions",
        42 => "receivingYards",
        43 => "receivingTouchdowns",
        44 => "receiving2PtConversions",
        53 => "receivingReceptions",
        58 => "receivingTargets",
        72 => "lostFumbles",
        74 => "madeFieldGoalsFrom50Plus",
        77 => "madeFieldGoalsFrom40To49",
        80 => "madeFieldGoalsFromUnder40",
        83 => "madeFieldGoals",
        84 => "attemptedFieldGoals",
        85 => "missedFieldGoals",
        86 => "madeExtraPoints",
        87 => "attemptedExtraPoints",
        88 => "missedExtraPoints",
        93 => "defensiveBlockedKickForTouchdowns",
        95 => "defensiveInterceptions",
        96 => "defensiveFumbles",
        97 => "defensiveBlockedKicks",
        98 => "defensiveSafeties",
        99 => "defensiveSacks",
        101 => "kickoffReturnTouchdowns",
        102 => "puntReturnTouchdowns",
        120 => "defensivePointsAllowed",
        127 => "defensiveYardsAllowed",
        _ => return None,
    };
    Some(name)
}

/// Re-key a raw `{"<statId>": value}` map with readable names.
pub fn named_breakdown(raw: &BTreeMap<String, f64>) -> BTreeMap<String, f64> {
    raw.iter()
        .map(|(key, value)| {
            let name = key
                .parse::<u16>()
                .ok()
                .and_then(stat_name)
                .map(str::to_string)
                .unwrap_or_else(|| key.clone());
            (name, *value)
        })
        .collect()
}
