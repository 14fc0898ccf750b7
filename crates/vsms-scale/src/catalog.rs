use serde::{Deserialize, Serialize};
use ts_rs::TS;

use vsms_core::models::domain::DomainCode;
use vsms_core::models::domain::DomainCode::{Com, Loc, Occ, Sd, Shd, She, Shg, Soc};

/// Which weight every achieved item contributes.
///
/// The two observed configurations of the scale are mutually exclusive:
/// exactly one is chosen when the catalog is built and the catalog never
/// changes afterwards. No attempt is made to auto-detect or reconcile
/// them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum Weighting {
    /// Every item scores 1 point.
    Flat,
    /// All items within an age block share the block's month-equivalent
    /// weight: block span in months divided by item count, rounded to a
    /// tenth so scores display cleanly at one decimal place.
    MonthEquivalent,
}

/// One skill item of the scale.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct ScaleItem {
    /// Stable identity, unique across the whole catalog (1..=89).
    pub id: u32,
    pub skill: String,
    pub domain: DomainCode,
    /// Display label of the age block the item belongs to.
    pub age_block: String,
    pub weight: f64,
}

/// One age block with its items in official sequence order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct AgeGroup {
    /// Age-level key as used by the entry form (e.g. "2-3").
    pub key: String,
    /// Display label (e.g. "II–III").
    pub label: String,
    pub items: Vec<ScaleItem>,
}

/// (key, label, month-equivalent weight) per age block, in scale order.
const BLOCKS: [(&str, &str, f64); 13] = [
    ("0-1", "0–1", 0.8),
    ("1-2", "I–II", 0.8),
    ("2-3", "II–III", 1.2),
    ("3-4", "III–IV", 2.0),
    ("4-5", "IV–V", 2.0),
    ("5-6", "V–VI", 2.4),
    ("6-7", "VI–VII", 3.0),
    ("7-8", "VII–VIII", 2.4),
    ("8-9", "VIII–IX", 4.0),
    ("9-10", "IX–X", 3.0),
    ("10-11", "X–XI", 4.0),
    ("11-12", "XI–XII", 3.0),
    ("12-15", "XII–XV", 5.1),
];

/// The 89 items of the Malin adaptation: (id, skill, domain, block index).
/// Order within a block is the official sequencing and is significant for
/// progressive-disclosure display and report layout, not for scoring.
const ITEMS: [(u32, &str, DomainCode, usize); 89] = [
    (1, "Crows, laughs", Soc, 0),
    (2, "Balances head", Shg, 0),
    (3, "Grasps objects within reach", Shg, 0),
    (4, "Reaches for familiar persons", Soc, 0),
    (5, "Rolls over (unassisted)", Loc, 0),
    (6, "Occupies self unattended", Occ, 0),
    (7, "Sits unsupported", Loc, 0),
    (8, "Pulls self upright", Loc, 0),
    (9, "\"Talks\", imitates sounds", Com, 0),
    (10, "Drinks from cup or glass (assisted)", She, 0),
    (11, "Moves about on floor (creeping, crawling)", Loc, 0),
    (12, "Grasps with thumb and finger", Shg, 0),
    (13, "Demands personal attention", Soc, 0),
    (14, "Stands alone", Loc, 0),
    (15, "Does not drool", Shg, 0),
    (16, "Follows simple instructions", Com, 0),
    (17, "Walks about room unattended", Loc, 1),
    (18, "Marks with pencil or crayon or chalk", Occ, 1),
    (19, "Masticates (chews) solid or semi-solid food", She, 1),
    (20, "Pulls off clothes (shoes, sandals, socks)", Shd, 1),
    (21, "Overcomes simple obstacles", Shg, 1),
    (22, "Fetches or carries familiar objects", Occ, 1),
    (23, "Drinks from cup or glass unassisted", She, 1),
    (24, "Walks without support", Loc, 1),
    (25, "Plays with other children", Soc, 1),
    (26, "Eats with own hands (biscuits, bread, etc.)", She, 1),
    (27, "Goes about house or yard", Loc, 1),
    (28, "Discriminates edible substances from non-edibles", Shg, 1),
    (29, "Uses names of familiar objects", Com, 1),
    (30, "Walks upstairs unassisted", Loc, 1),
    (31, "Unwraps sweets, chocolates", Shg, 1),
    (32, "Talks in short sentences", Com, 1),
    (33, "Signals to go to toilet", Shg, 2),
    (34, "Initiates own play activities", Occ, 2),
    (35, "Removes shirt or frock if unbuttoned", Shd, 2),
    (36, "Eats with spoon / hands (food)", She, 2),
    (37, "Gets drink (water) unassisted", Shg, 2),
    (38, "Dries own hands", Shg, 2),
    (39, "Avoids simple hazards", Sd, 2),
    (40, "Puts on shirt or frock unassisted (need not button)", Shd, 2),
    (41, "Can do paper folding / cutting", Occ, 2),
    (42, "Relates experiences", Com, 2),
    (43, "Walks downstairs, one step at a time", Loc, 3),
    (44, "Plays cooperatively at kindergarten level", Soc, 3),
    (45, "Buttons shirt or frock", Shd, 3),
    (46, "Helps at little household tasks", Occ, 3),
    (47, "\"Performs\" for others (reciting, singing, dancing)", Soc, 3),
    (48, "Washes hands unaided", Shg, 3),
    (49, "Cares for self at toilet", Shg, 4),
    (50, "Washes face unassisted", Shg, 4),
    (51, "Goes about neighborhood unattended", Loc, 4),
    (52, "Dresses self except for tying", Shd, 4),
    (53, "Uses pencil or crayon or chalk for drawing", Occ, 4),
    (54, "Plays competitive exercise games (tag, hide and seek, jumping rope)", Soc, 4),
    (55, "Uses skates, wagon, bicycle, scooter", Loc, 5),
    (56, "Writes simple words", Com, 5),
    (57, "Plays simple table games (ludo, snakes & ladders)", Soc, 5),
    (58, "Is trusted with money (small errands)", Sd, 5),
    (59, "Goes to school unattended", Loc, 5),
    (60, "Uses table knife for spreading", She, 6),
    (61, "Uses pencil for writing", Occ, 6),
    (62, "Bathes self assisted", Shg, 6),
    (63, "Goes to bed unassisted", Shg, 6),
    (64, "Combs or brushes hair", Shg, 7),
    (65, "Uses tools or utensils", Occ, 7),
    (66, "Helps at routine household tasks (sweeping, dusting, watering plants)", Occ, 7),
    (67, "Reads on own initiative", Com, 7),
    (68, "Bathes self unaided", Shg, 7),
    (69, "Looks after self at table", She, 8),
    (70, "Makes minor purchases (buys things from shop)", Sd, 8),
    (71, "Goes about hometown freely", Loc, 8),
    (72, "Writes short letters", Com, 9),
    (73, "Makes telephone calls", Com, 9),
    (74, "Does small remunerative work", Occ, 9),
    (75, "Answers advertisement; responds to information", Com, 9),
    (76, "Does household tasks on demand (cooking, stitching, cleaning)", Occ, 10),
    (77, "Participates in skilled games and sports (cricket, basketball, badminton)", Soc, 10),
    (78, "Responsible for own personal cleanliness", Shd, 10),
    (79, "Uses simple mechanics / tools (bicycle repair, sewing machine)", Occ, 11),
    (80, "Does routine household tasks independently", Occ, 11),
    (81, "Buys own clothing accessories", Sd, 11),
    (82, "Goes to nearby places alone (cinema, market, fair)", Loc, 11),
    (83, "Writes letters to get information (books, magazine, toys)", Com, 12),
    (84, "Plans or participates in picnic trips, outdoor sports", Soc, 12),
    (85, "Assisting in housework (caring for garden, cleaning car, washing window, waiting at table)", Occ, 12),
    (86, "Is left to care for self or others", Sd, 12),
    (87, "Enjoys books, newspapers, magazines", Com, 12),
    (88, "Plays difficult games (chess, carrom, etc.) and manages own spending money", Sd, 12),
    (89, "Engages in creative work (art, craft, tailoring, etc.)", Occ, 12),
];

/// The fixed, immutable item catalog. Built once per configuration; no
/// item is added, removed, or reweighted at runtime.
#[derive(Debug, Clone)]
pub struct Catalog {
    weighting: Weighting,
    groups: Vec<AgeGroup>,
}

impl Catalog {
    pub fn new(weighting: Weighting) -> Self {
        let groups = BLOCKS
            .iter()
            .enumerate()
            .map(|(block_idx, &(key, label, month_weight))| AgeGroup {
                key: key.to_string(),
                label: label.to_string(),
                items: ITEMS
                    .iter()
                    .filter(|&&(_, _, _, block)| block == block_idx)
                    .map(|&(id, skill, domain, _)| ScaleItem {
                        id,
                        skill: skill.to_string(),
                        domain,
                        age_block: label.to_string(),
                        weight: match weighting {
                            Weighting::Flat => 1.0,
                            Weighting::MonthEquivalent => month_weight,
                        },
                    })
                    .collect(),
            })
            .collect();

        Self { weighting, groups }
    }

    pub fn weighting(&self) -> Weighting {
        self.weighting
    }

    /// All items in official scale order, the same order every call.
    pub fn all_items(&self) -> impl Iterator<Item = &ScaleItem> {
        self.groups.iter().flat_map(|group| group.items.iter())
    }

    /// The ordered age blocks with their items, for progressive reveal
    /// and deterministic report layout.
    pub fn groups(&self) -> &[AgeGroup] {
        &self.groups
    }

    pub fn item(&self, id: u32) -> Option<&ScaleItem> {
        self.all_items().find(|item| item.id == id)
    }

    pub fn contains(&self, id: u32) -> bool {
        self.item(id).is_some()
    }

    pub fn len(&self) -> usize {
        self.groups.iter().map(|group| group.items.len()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Display label for an age-level key ("2-3" → "II–III"), falling back to
/// the key itself for anything unknown.
pub fn age_level_label(key: &str) -> &str {
    BLOCKS
        .iter()
        .find(|&&(block_key, _, _)| block_key == key)
        .map(|&(_, label, _)| label)
        .unwrap_or(key)
}
