pub const HIGH_RISK_TACTICS: [&str; 5] = [
    "Establish multiple escape routes and safety zones",
    "Consider indirect attack methods",
    "Pre-position structure protection resources",
    "Utilize aerial resources for reconnaissance and suppression",
    "Implement spot fire detection protocols",
];

// flame length limits of each attack method [ft]
pub const INDIRECT_ATTACK_FLAME_LENGTH: f64 = 8.0;
pub const HEAVY_EQUIPMENT_FLAME_LENGTH: f64 = 4.0;
pub const INDIRECT_ATTACK_TACTIC: &str = "Direct attack not recommended - use indirect methods";
pub const HEAVY_EQUIPMENT_TACTIC: &str = "Use heavy equipment and aerial resources";
pub const HANDLINE_TACTIC: &str = "Direct attack with handlines possible";

pub const LOOKOUT_SPOTTING_DISTANCE: f64 = 0.5; // [mi]

pub const GENERAL_GUIDELINES: [&str; 4] = [
    "Identify and mark locations of endangered species habitat",
    "Minimize use of fire retardant near wetlands and water bodies",
    "Avoid establishing fire lines through known rare plant populations",
    "Consider seasonal wildlife movements and breeding patterns",
];

pub const SPRING_GUIDELINES: [&str; 3] = [
    "Protect Pine Barrens Treefrog breeding pools",
    "Avoid disturbing nesting birds",
    "Preserve rare spring ephemeral plants",
];
