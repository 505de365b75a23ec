//! Text renderings of a [`Model`]: the `.ph` format, Graphviz and a summary.

use crate::model::{Model, Rate};
use std::fmt::{self, Write};

impl fmt::Display for Model {
    /// Writes the model back in the `.ph` text format.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "directive default_rate {}", self.default_rate)?;
        writeln!(
            f,
            "directive stochasticity_absorption {}",
            self.stochasticity_absorption
        )?;

        if !self.sorts.is_empty() {
            writeln!(f)?;
        }
        for sort in &self.sorts {
            writeln!(f, "process {} {}", sort.name, sort.max)?;
        }

        if !self.actions.is_empty() {
            writeln!(f)?;
        }
        for action in &self.actions {
            write!(
                f,
                "{} {} -> {} {} {}",
                action.hitter_sort, action.hitter, action.target_sort, action.target, action.bounce
            )?;
            if let Some(rate) = action.rate {
                write!(f, " @{}", rate)?;
            }
            if let Some(stochasticity) = action.stochasticity {
                write!(f, "~{}", stochasticity)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

impl Model {
    /// Graphviz rendering: one cluster per sort, a solid edge per hit and a
    /// dashed edge per bounce.
    pub fn to_dot(&self) -> String {
        let mut dot = String::from("digraph ph {\n    compound = true;\n");

        for sort in &self.sorts {
            let _ = writeln!(dot, "    subgraph \"cluster_{}\" {{", sort.name);
            let _ = writeln!(dot, "        label = \"{}\";", sort.name);
            for process in sort.processes() {
                let _ = writeln!(
                    dot,
                    "        \"{}\" [label = \"{}\"];",
                    process, process.index
                );
            }
            dot.push_str("    }\n");
        }

        for action in &self.actions {
            let label = match self.effective_rate(action) {
                Rate::Infinite => String::new(),
                rate => format!(" [label = \"{}\"]", rate),
            };
            let _ = writeln!(
                dot,
                "    \"{}\" -> \"{}\"{};",
                action.hitter(),
                action.target(),
                label
            );
            let _ = writeln!(
                dot,
                "    \"{}\" -> \"{}\" [style = dashed];",
                action.target(),
                action.bounce()
            );
        }

        dot.push_str("}\n");
        dot
    }

    /// One-paragraph description of the model size.
    pub fn summary(&self) -> String {
        let mut text = format!(
            "{} sorts, {} processes, {} actions\n",
            self.sorts.len(),
            self.process_count(),
            self.actions.len()
        );
        let _ = writeln!(text, "default rate: {}", self.default_rate);
        let _ = writeln!(
            text,
            "stochasticity absorption: {}",
            self.stochasticity_absorption
        );
        for sort in &self.sorts {
            let hits = self
                .actions
                .iter()
                .filter(|action| action.hitter_sort == sort.name)
                .count();
            let _ = writeln!(
                text,
                "  {}: {} processes, hits {} times",
                sort.name,
                sort.max + 1,
                hits
            );
        }
        text
    }
}
