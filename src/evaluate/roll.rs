use crate::parse::signed_suffix;

/// Outcome of rolling an expression: every die that was thrown plus the bonuses added to them.
///
/// `total` is always `modifier` plus the sum of `rolls`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RollResult {
    pub(crate) total: i64,
    pub(crate) modifier: i64,
    pub(crate) rolls: Vec<u32>,
}

impl RollResult {
    pub(crate) fn with_modifier(modifier: i64, capacity: usize) -> Self {
        Self {
            total: modifier,
            modifier,
            rolls: Vec::with_capacity(capacity),
        }
    }

    pub(crate) fn push(&mut self, face: u32) {
        self.total += i64::from(face);
        self.rolls.push(face);
    }

    /// Adds two results together, the rolls of `self` come before the rolls of `other`.
    pub fn merge(mut self, other: RollResult) -> RollResult {
        self.rolls.extend(other.rolls);
        RollResult {
            total: self.total + other.total,
            modifier: self.modifier + other.modifier,
            rolls: self.rolls,
        }
    }

    pub fn total(&self) -> i64 {
        self.total
    }
    pub fn modifier(&self) -> i64 {
        self.modifier
    }
    /// Individual die faces in the order they were rolled.
    pub fn rolls(&self) -> &[u32] {
        &self.rolls
    }
}

pub fn to_notations(rolls: &[u32]) -> String {
    format!(
        "[{}]",
        rolls
            .iter()
            .map(|r| r.to_string())
            .collect::<Vec<_>>()
            .join(", ")
    )
}

impl std::fmt::Display for RollResult {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}  <= {}{}",
            self.total,
            to_notations(&self.rolls),
            signed_suffix(self.modifier)
        )
    }
}
