use serde::{Deserialize, Serialize};

use gstinvoice_core::ValueObject;

/// Buyer details as entered on the invoice form and kept in the directory.
///
/// The directory is keyed by `name`; `address` is the billing address.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BuyerRecord {
    pub name: String,
    pub address: String,
    pub gstin: String,
}

impl ValueObject for BuyerRecord {}

impl BuyerRecord {
    pub fn new(
        name: impl Into<String>,
        address: impl Into<String>,
        gstin: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            address: address.into(),
            gstin: gstin.into(),
        }
    }
}

/// Known buyers, unique by name, in the order they were first remembered.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BuyerDirectory {
    records: Vec<BuyerRecord>,
}

impl BuyerDirectory {
    /// Build a directory from loaded records.
    ///
    /// Later records whose name is already present are dropped, so a hand-edited
    /// store with duplicates still resolves each name to its first entry.
    pub fn new(records: Vec<BuyerRecord>) -> Self {
        let mut directory = Self::default();
        for record in records {
            if directory.find(&record.name).is_none() {
                directory.records.push(record);
            }
        }
        directory
    }

    pub fn records(&self) -> &[BuyerRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Exact-name lookup used to autocomplete address and GSTIN.
    pub fn find(&self, name: &str) -> Option<&BuyerRecord> {
        self.records.iter().find(|b| b.name == name)
    }

    /// Names containing `query` (case-insensitive), in directory order.
    ///
    /// An empty query lists every name.
    pub fn suggestions(&self, query: &str) -> Vec<&str> {
        let needle = query.trim().to_lowercase();
        self.records
            .iter()
            .map(|b| b.name.as_str())
            .filter(|name| needle.is_empty() || name.to_lowercase().contains(&needle))
            .collect()
    }

    /// Add `buyer` unless its name is blank or already known.
    ///
    /// Existing entries are never overwritten. Returns whether the directory
    /// changed.
    pub fn remember(&mut self, buyer: &BuyerRecord) -> bool {
        if buyer.name.trim().is_empty() || self.find(&buyer.name).is_some() {
            return false;
        }
        self.records.push(buyer.clone());
        true
    }
}
