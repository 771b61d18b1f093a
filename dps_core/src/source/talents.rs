//! TalentSet - Points allocated across the three talent trees
//!
//! Tiers 1 and 2 of every tree are open to all specializations; deeper
//! talents are only reachable when the active spec allows them.

use crate::error::CalcError;
use crate::source::{TalentModel, TREE_COUNT};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// A talent and its allocation within one tree
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TalentDef {
    pub name: String,
    /// Row within the tree, starting at 1
    pub tier: u32,
    pub max_points: u32,
    #[serde(default)]
    pub points: u32,
}

impl TalentDef {
    pub fn new(name: impl Into<String>, tier: u32, max_points: u32) -> Self {
        TalentDef {
            name: name.into(),
            tier,
            max_points,
            points: 0,
        }
    }

    pub fn with_points(mut self, points: u32) -> Self {
        self.points = points;
        self
    }
}

/// One talent tree
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TalentTree {
    pub name: String,
    #[serde(default)]
    pub talents: Vec<TalentDef>,
}

impl TalentTree {
    pub fn new(name: impl Into<String>) -> Self {
        TalentTree {
            name: name.into(),
            talents: Vec::new(),
        }
    }

    pub fn with_talent(mut self, talent: TalentDef) -> Self {
        self.talents.push(talent);
        self
    }

    pub fn get(&self, talent: &str) -> Option<&TalentDef> {
        self.talents.iter().find(|t| t.name == talent)
    }

    /// Allocate points to a talent in this tree
    pub fn set_talent(&mut self, talent: &str, points: u32) -> Result<(), CalcError> {
        let tree = self.name.clone();
        let def = self
            .talents
            .iter_mut()
            .find(|t| t.name == talent)
            .ok_or_else(|| CalcError::TalentNotInTree {
                talent: talent.to_string(),
                tree,
            })?;

        if points > def.max_points {
            return Err(CalcError::TooManyPoints {
                talent: talent.to_string(),
                points,
                max: def.max_points,
            });
        }
        def.points = points;
        Ok(())
    }
}

/// The active specialization
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Spec {
    pub name: String,
    /// Talents beyond tier 2 this spec may take
    #[serde(default)]
    pub allowed_talents: BTreeSet<String>,
}

impl Spec {
    pub fn new(name: impl Into<String>) -> Self {
        Spec {
            name: name.into(),
            allowed_talents: BTreeSet::new(),
        }
    }

    pub fn allowing(mut self, talent: impl Into<String>) -> Self {
        self.allowed_talents.insert(talent.into());
        self
    }
}

/// Talents across all trees plus the active spec
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TalentSet {
    pub trees: [TalentTree; TREE_COUNT],
    #[serde(default)]
    pub spec: Spec,
}

impl TalentSet {
    pub fn new(trees: [TalentTree; TREE_COUNT], spec: Spec) -> Self {
        TalentSet { trees, spec }
    }

    fn find(&self, talent: &str) -> Result<&TalentDef, CalcError> {
        self.trees
            .iter()
            .find_map(|tree| tree.get(talent))
            .ok_or_else(|| CalcError::UnknownTalent(talent.to_string()))
    }

    fn tree(&self, tree: usize) -> Result<&TalentTree, CalcError> {
        self.trees.get(tree).ok_or_else(|| no_such_tree(tree))
    }
}

fn no_such_tree(tree: usize) -> CalcError {
    CalcError::InvalidInput(format!("No talent tree at index {}", tree))
}

impl TalentModel for TalentSet {
    fn talents(&self) -> Vec<String> {
        let mut seen = BTreeSet::new();
        self.trees
            .iter()
            .flat_map(|tree| tree.talents.iter())
            .filter(|t| seen.insert(t.name.as_str()))
            .map(|t| t.name.clone())
            .collect()
    }

    fn points(&self, talent: &str) -> Result<u32, CalcError> {
        self.find(talent).map(|t| t.points)
    }

    fn tree_points(&self, tree: usize, talent: &str) -> Result<u32, CalcError> {
        let owner = self.tree(tree)?;
        owner.get(talent).map(|t| t.points).ok_or_else(|| CalcError::TalentNotInTree {
            talent: talent.to_string(),
            tree: owner.name.clone(),
        })
    }

    fn tier(&self, talent: &str) -> Result<u32, CalcError> {
        self.find(talent).map(|t| t.tier)
    }

    fn allowed_in_spec(&self, talent: &str) -> bool {
        self.spec.allowed_talents.contains(talent)
    }

    fn set_talent(&mut self, tree: usize, talent: &str, points: u32) -> Result<(), CalcError> {
        match self.trees.get_mut(tree) {
            Some(owner) => owner.set_talent(talent, points),
            None => Err(no_such_tree(tree)),
        }
    }
}
