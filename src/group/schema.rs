//! Group schema: the fixed set of degree-of-freedom groups of a trajectory.

use heapless::{String, Vec};

use crate::error::{truncated_name, ConfigError, Result};

/// Maximum number of groups in a schema.
pub const MAX_GROUPS: usize = 8;

/// Maximum number of components in a group.
pub const MAX_COMPONENTS: usize = 8;

/// Group or waypoint name.
pub type Name = String<32>;

/// Component label.
pub type Label = String<16>;

const QUATERNION_LABELS: [&str; 4] = ["w", "x", "y", "z"];

/// Symbolic definition of one group.
#[derive(Debug, Clone, PartialEq)]
pub struct GroupDef {
    name: Name,
    components: Vec<Label, MAX_COMPONENTS>,
    rotational: bool,
}

impl GroupDef {
    /// Define a linear group with the given component labels.
    ///
    /// # Errors
    ///
    /// Returns an error if there are no labels, too many labels, or a name does not fit.
    pub fn linear(name: &str, labels: &[&str]) -> Result<Self> {
        Self::with_labels(name, labels, false)
    }

    /// Define a rotational group holding a `[w, x, y, z]` quaternion.
    pub fn rotational(name: &str) -> Result<Self> {
        Self::with_labels(name, &QUATERNION_LABELS, true)
    }

    /// Define a group from labels and a rotational flag.
    ///
    /// Rotational groups must have exactly four labels, ordered `w, x, y, z`.
    pub fn with_labels(name: &str, labels: &[&str], rotational: bool) -> Result<Self> {
        let name = Name::try_from(name).map_err(|_| ConfigError::NameTooLong)?;

        let count_ok = if rotational {
            labels.len() == 4
        } else {
            !labels.is_empty() && labels.len() <= MAX_COMPONENTS
        };
        if !count_ok {
            return Err(ConfigError::InvalidComponentCount {
                group: name,
                count: labels.len(),
            }
            .into());
        }

        let mut components = Vec::new();
        for label in labels {
            let label = Label::try_from(*label).map_err(|_| ConfigError::NameTooLong)?;
            components
                .push(label)
                .map_err(|_| ConfigError::InvalidComponentCount {
                    group: name.clone(),
                    count: labels.len(),
                })?;
        }

        Ok(Self {
            name,
            components,
            rotational,
        })
    }

    /// Get the group name.
    #[inline]
    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    /// Get the component labels.
    #[inline]
    pub fn components(&self) -> &[Label] {
        &self.components
    }

    /// Number of components.
    #[inline]
    pub fn dimension(&self) -> usize {
        self.components.len()
    }

    /// Whether the group holds an orientation.
    #[inline]
    pub fn is_rotational(&self) -> bool {
        self.rotational
    }
}

/// Ordered set of groups shared by every waypoint of a trajectory.
///
/// Group order is insertion order; it defines the group indices used by
/// sections, phases and evaluation results.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct GroupSchema {
    groups: Vec<GroupDef, MAX_GROUPS>,
}

impl GroupSchema {
    /// Create an empty schema.
    pub fn new() -> Self {
        Self { groups: Vec::new() }
    }

    /// Add a group, returning its index.
    ///
    /// # Errors
    ///
    /// Returns an error if the name is already used or the schema is full.
    pub fn add(&mut self, group: GroupDef) -> Result<usize> {
        if self.index_of(group.name()).is_some() {
            return Err(ConfigError::DuplicateGroup(group.name.clone()).into());
        }
        self.groups
            .push(group)
            .map_err(|_| ConfigError::TooManyGroups)?;
        Ok(self.groups.len() - 1)
    }

    /// Chainable form of [`add`](Self::add) for a linear group.
    pub fn with_linear(mut self, name: &str, labels: &[&str]) -> Result<Self> {
        self.add(GroupDef::linear(name, labels)?)?;
        Ok(self)
    }

    /// Chainable form of [`add`](Self::add) for a rotational group.
    pub fn with_rotational(mut self, name: &str) -> Result<Self> {
        self.add(GroupDef::rotational(name)?)?;
        Ok(self)
    }

    /// Number of groups.
    #[inline]
    pub fn len(&self) -> usize {
        self.groups.len()
    }

    /// Check if the schema has no groups.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    /// Get a group by index.
    #[inline]
    pub fn get(&self, index: usize) -> Option<&GroupDef> {
        self.groups.get(index)
    }

    /// Find the index of a group by name.
    pub fn index_of(&self, name: &str) -> Option<usize> {
        self.groups.iter().position(|g| g.name() == name)
    }

    /// Get the index of a group, or an `UnknownGroup` error.
    pub fn require(&self, name: &str) -> Result<usize> {
        self.index_of(name)
            .ok_or_else(|| ConfigError::UnknownGroup(truncated_name(name)).into())
    }

    /// Iterate over the groups in index order.
    pub fn iter(&self) -> impl Iterator<Item = &GroupDef> {
        self.groups.iter()
    }

    /// Iterate over group names in index order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.groups.iter().map(|g| g.name())
    }
}
