//! Per-team, per-participant, per-resource integer counters.

use std::collections::BTreeMap;

/// Flat ledger key: which resource of which participant of which team.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ResourceKey {
    pub team: String,
    pub participant: String,
    pub resource: String,
}

impl ResourceKey {
    pub fn new(
        team: impl Into<String>,
        participant: impl Into<String>,
        resource: impl Into<String>,
    ) -> Self {
        Self {
            team: team.into(),
            participant: participant.into(),
            resource: resource.into(),
        }
    }
}

/// Resource counter store.
///
/// Entries appear only through [`ResourceLedger::get_or_insert_zero`] (and the
/// add/subtract helpers built on it); reads never create entries. Amounts may
/// go negative, any floor is a rule-content decision.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ResourceLedger {
    amounts: BTreeMap<ResourceKey, i64>,
}

impl ResourceLedger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seeds a ledger from a template of starting amounts.
    pub fn from_template(template: &BTreeMap<ResourceKey, i64>) -> Self {
        Self {
            amounts: template.clone(),
        }
    }

    /// Returns the counter for `key`, creating it at zero if absent.
    pub fn get_or_insert_zero(&mut self, key: ResourceKey) -> &mut i64 {
        self.amounts.entry(key).or_insert(0)
    }

    /// Adds `amount` and returns the resulting balance.
    pub fn add(&mut self, key: ResourceKey, amount: i64) -> i64 {
        let slot = self.get_or_insert_zero(key);
        *slot = slot.saturating_add(amount);
        *slot
    }

    /// Subtracts `amount` and returns the resulting balance.
    pub fn subtract(&mut self, key: ResourceKey, amount: i64) -> i64 {
        let slot = self.get_or_insert_zero(key);
        *slot = slot.saturating_sub(amount);
        *slot
    }

    /// Current balance, without creating the entry.
    pub fn amount(&self, key: &ResourceKey) -> Option<i64> {
        self.amounts.get(key).copied()
    }

    pub fn len(&self) -> usize {
        self.amounts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.amounts.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&ResourceKey, i64)> {
        self.amounts.iter().map(|(key, amount)| (key, *amount))
    }
}
