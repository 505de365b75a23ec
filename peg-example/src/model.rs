//! In-memory process-hitting model.
//!
//! A model has named sorts, each with processes numbered `0..=max`, and
//! actions `a i -> b j k`: process `a_i` hits `b_j`, which bounces to `b_k`.

use std::fmt;

/// Firing rate of an action, or the model-wide default.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum Rate {
    Finite(f64),
    #[default]
    Infinite,
}

impl fmt::Display for Rate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Rate::Finite(value) => write!(f, "{}", value),
            Rate::Infinite => f.write_str("Inf"),
        }
    }
}

/// A named component with `max + 1` processes.
#[derive(Debug, Clone, PartialEq)]
pub struct Sort {
    pub name: String,
    pub max: usize,
}

impl Sort {
    pub fn processes(&self) -> impl Iterator<Item = Process<'_>> {
        (0..=self.max).map(move |index| Process {
            sort: &self.name,
            index,
        })
    }
}

/// A process `sort_index`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Process<'m> {
    pub sort: &'m str,
    pub index: usize,
}

impl fmt::Display for Process<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}_{}", self.sort, self.index)
    }
}

/// A hit: `hitter_sort hitter -> target_sort target bounce`.
#[derive(Debug, Clone, PartialEq)]
pub struct Action {
    pub hitter_sort: String,
    pub hitter: usize,
    pub target_sort: String,
    pub target: usize,
    pub bounce: usize,
    /// Rate given with `@`; the model default applies otherwise.
    pub rate: Option<Rate>,
    /// Stochasticity absorption given with `~`.
    pub stochasticity: Option<u32>,
}

impl Action {
    pub fn hitter(&self) -> Process<'_> {
        Process {
            sort: &self.hitter_sort,
            index: self.hitter,
        }
    }

    pub fn target(&self) -> Process<'_> {
        Process {
            sort: &self.target_sort,
            index: self.target,
        }
    }

    pub fn bounce(&self) -> Process<'_> {
        Process {
            sort: &self.target_sort,
            index: self.bounce,
        }
    }
}

/// A validated process-hitting model.
#[derive(Debug, Clone, PartialEq)]
pub struct Model {
    pub default_rate: Rate,
    pub stochasticity_absorption: u32,
    pub(crate) sorts: Vec<Sort>,
    pub(crate) actions: Vec<Action>,
}

impl Default for Model {
    fn default() -> Self {
        Self {
            default_rate: Rate::Infinite,
            stochasticity_absorption: 1,
            sorts: Vec::new(),
            actions: Vec::new(),
        }
    }
}

impl Model {
    /// Sorts in declaration order.
    pub fn sorts(&self) -> &[Sort] {
        &self.sorts
    }

    pub fn sort(&self, name: &str) -> Option<&Sort> {
        self.sorts.iter().find(|sort| sort.name == name)
    }

    /// Actions in declaration order.
    pub fn actions(&self) -> &[Action] {
        &self.actions
    }

    pub fn process_count(&self) -> usize {
        self.sorts.iter().map(|sort| sort.max + 1).sum()
    }

    /// Rate of `action`, falling back to the model default.
    pub fn effective_rate(&self, action: &Action) -> Rate {
        action.rate.unwrap_or(self.default_rate)
    }

    /// Actions whose hitter is `process`.
    pub fn hits_from<'m>(&'m self, process: Process<'m>) -> impl Iterator<Item = &'m Action> {
        self.actions
            .iter()
            .filter(move |action| action.hitter() == process)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Model {
        Model {
            default_rate: Rate::Finite(0.5),
            stochasticity_absorption: 1,
            sorts: vec![
                Sort {
                    name: "a".to_string(),
                    max: 1,
                },
                Sort {
                    name: "b".to_string(),
                    max: 2,
                },
            ],
            actions: vec![Action {
                hitter_sort: "a".to_string(),
                hitter: 1,
                target_sort: "b".to_string(),
                target: 0,
                bounce: 2,
                rate: None,
                stochasticity: None,
            }],
        }
    }

    #[test]
    fn test_process_count() {
        assert_eq!(sample().process_count(), 5);
    }

    #[test]
    fn test_effective_rate_falls_back_to_default() {
        let model = sample();
        assert_eq!(model.effective_rate(&model.actions()[0]), Rate::Finite(0.5));
    }

    #[test]
    fn test_hits_from() {
        let model = sample();
        let a1 = Process { sort: "a", index: 1 };
        let a0 = Process { sort: "a", index: 0 };
        assert_eq!(model.hits_from(a1).count(), 1);
        assert_eq!(model.hits_from(a0).count(), 0);
    }

    #[test]
    fn test_process_display() {
        let model = sample();
        let names: Vec<String> = model.sorts()[1]
            .processes()
            .map(|p| p.to_string())
            .collect();
        assert_eq!(names, ["b_0", "b_1", "b_2"]);
    }
}
