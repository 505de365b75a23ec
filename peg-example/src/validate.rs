//! Turns parsed statements into a checked [`Model`].

use crate::error::ModelError;
use crate::grammar::{parse_statements, RawRate, Statement};
use crate::model::{Action, Model, Rate, Sort};
use std::path::Path;
use std::str::FromStr;

/// Parses and validates model text.
pub fn parse_model(text: &str) -> Result<Model, ModelError> {
    let statements = parse_statements(text)?;
    log::debug!("parsed {} statements", statements.len());
    build_model(statements)
}

/// Reads, parses and validates a model file.
pub fn load_model(path: &Path) -> Result<Model, ModelError> {
    let text = std::fs::read_to_string(path).map_err(|source| ModelError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    log::info!("loaded {} ({} bytes)", path.display(), text.len());
    parse_model(&text)
}

fn number<T: FromStr>(value: &str, line: usize) -> Result<T, ModelError> {
    value.parse().map_err(|_| ModelError::NumberOutOfRange {
        value: value.to_string(),
        line,
    })
}

fn rate(raw: &RawRate, line: usize) -> Result<Rate, ModelError> {
    match raw {
        RawRate::Infinite => Ok(Rate::Infinite),
        RawRate::Finite(text) => {
            let value: f64 = number(text, line)?;
            if value > 0.0 && value.is_finite() {
                Ok(Rate::Finite(value))
            } else {
                Err(ModelError::InvalidRate { value, line })
            }
        }
    }
}

fn check_process(sort: &Sort, index: usize, line: usize) -> Result<(), ModelError> {
    if index > sort.max {
        return Err(ModelError::ProcessOutOfRange {
            sort: sort.name.clone(),
            index,
            max: sort.max,
            line,
        });
    }
    Ok(())
}

/// Sorts are collected first, so an action may mention a sort declared
/// further down the file.
pub fn build_model(statements: Vec<Statement>) -> Result<Model, ModelError> {
    let mut model = Model::default();

    for statement in &statements {
        match statement {
            Statement::DefaultRate { rate: raw, line } => {
                model.default_rate = rate(raw, *line)?;
            }
            Statement::StochasticityAbsorption { value, line } => {
                model.stochasticity_absorption = number(value, *line)?;
            }
            Statement::Process { sort, max, line } => {
                if model.sort(sort).is_some() {
                    return Err(ModelError::DuplicateSort {
                        name: sort.clone(),
                        line: *line,
                    });
                }
                model.sorts.push(Sort {
                    name: sort.clone(),
                    max: number(max, *line)?,
                });
            }
            Statement::Action { .. } => {}
        }
    }

    for statement in statements {
        let Statement::Action {
            hitter_sort,
            hitter,
            target_sort,
            target,
            bounce,
            rate: raw_rate,
            stochasticity,
            line,
        } = statement
        else {
            continue;
        };

        let lookup = |name: &str| {
            model
                .sort(name)
                .cloned()
                .ok_or_else(|| ModelError::UndeclaredSort {
                    name: name.to_string(),
                    line,
                })
        };
        let hitter_def = lookup(&hitter_sort)?;
        let target_def = lookup(&target_sort)?;

        let hitter: usize = number(&hitter, line)?;
        let target: usize = number(&target, line)?;
        let bounce: usize = number(&bounce, line)?;
        check_process(&hitter_def, hitter, line)?;
        check_process(&target_def, target, line)?;
        check_process(&target_def, bounce, line)?;

        if target == bounce {
            return Err(ModelError::NoBounce {
                sort: target_sort,
                target,
                line,
            });
        }
        if hitter_sort == target_sort && hitter != target {
            return Err(ModelError::SelfHit {
                sort: hitter_sort,
                hitter,
                line,
            });
        }

        let action = Action {
            hitter_sort,
            hitter,
            target_sort,
            target,
            bounce,
            rate: raw_rate.as_ref().map(|raw| rate(raw, line)).transpose()?,
            stochasticity: stochasticity
                .as_deref()
                .map(|value| number(value, line))
                .transpose()?,
        };
        if model.actions.contains(&action) {
            log::warn!(
                "line {}: duplicate action {} -> {}",
                line,
                action.hitter(),
                action.target()
            );
        }
        model.actions.push(action);
    }

    Ok(model)
}
