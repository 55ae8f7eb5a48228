/// Trait for hexagonal automaton rules.
/// A rule only decides liveness; `Cell::evolve` keeps special cells intact.
pub trait Rule: Send + Sync {
    /// Name of the rule
    fn name(&self) -> &'static str;

    /// Short description
    fn description(&self) -> &'static str;

    /// Whether a cell is alive in the next generation given its current
    /// liveness and the number of alive cells among its six neighbours.
    fn next_alive(&self, alive: bool, neighbors: u8) -> bool;
}

/// Hex Life (B245/S2345)
/// Conway's idea retuned for six neighbours: 2, 4 or 5 alive neighbours
/// always give life, 3 keeps an already alive cell alive.
#[derive(Clone, Copy)]
pub struct HexLifeRule;

impl Rule for HexLifeRule {
    fn name(&self) -> &'static str {
        "HexLife"
    }

    fn description(&self) -> &'static str {
        "B245/S2345 - Default"
    }

    fn next_alive(&self, alive: bool, neighbors: u8) -> bool {
        match (alive, neighbors) {
            (_, 2 | 4 | 5) => true,
            (true, 3) => true,
            _ => false,
        }
    }
}

/// Sparse Life (B245/S3)
/// Alive cells survive only with exactly three neighbours.
#[derive(Clone, Copy)]
pub struct SparseLifeRule;

impl Rule for SparseLifeRule {
    fn name(&self) -> &'static str {
        "SparseLife"
    }

    fn description(&self) -> &'static str {
        "B245/S3 - Strict survival"
    }

    fn next_alive(&self, alive: bool, neighbors: u8) -> bool {
        if alive {
            neighbors == 3
        } else {
            matches!(neighbors, 2 | 4 | 5)
        }
    }
}

/// Get all available rules
pub fn all_rules() -> Vec<(&'static str, Box<dyn Rule>)> {
    vec![
        ("HexLife", Box::new(HexLifeRule) as Box<dyn Rule>),
        ("SparseLife", Box::new(SparseLifeRule)),
    ]
}

/// Look a rule up by its name
pub fn rule_by_name(name: &str) -> Option<Box<dyn Rule>> {
    all_rules()
        .into_iter()
        .find(|(rule_name, _)| rule_name.eq_ignore_ascii_case(name))
        .map(|(_, rule)| rule)
}

/// Get default rule (Hex Life)
pub fn default_rule() -> Box<dyn Rule> {
    Box::new(HexLifeRule)
}
