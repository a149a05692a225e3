use crate::error::{MotifError, Result};
use crate::model::{BaseProbabilities, Connector, IdAllocator, Organism, Pssm};
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::sync::Arc;

/// One node of an exported organism chain
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "objectType", rename_all = "lowercase")]
pub enum ChainElement {
    Pssm { pwm: Vec<BaseProbabilities> },
    Connector { mu: f64, sigma: f64 },
}

fn to_chain(organism: &Organism) -> Vec<ChainElement> {
    let mut chain = Vec::with_capacity(organism.count_recognizers() * 2 - 1);
    for (i, recognizer) in organism.recognizers().iter().enumerate() {
        if i > 0 {
            let connector = &organism.connectors()[i - 1];
            chain.push(ChainElement::Connector {
                mu: connector.mu,
                sigma: connector.sigma,
            });
        }
        chain.push(ChainElement::Pssm {
            pwm: recognizer.pwm().to_vec(),
        });
    }
    chain
}

/// Rebuild an organism from its chain. Elements must alternate recognizer,
/// connector, recognizer and so on, starting and ending with a recognizer.
fn from_chain(
    position: usize,
    chain: Vec<ChainElement>,
    ids: &IdAllocator,
    pseudocount: f64,
) -> Result<Organism> {
    let mut recognizers = Vec::new();
    let mut connectors = Vec::new();

    for (i, element) in chain.into_iter().enumerate() {
        match (i % 2, element) {
            (0, ChainElement::Pssm { pwm }) => recognizers.push(Arc::new(Pssm::new(pwm, pseudocount)?)),
            (1, ChainElement::Connector { mu, sigma }) => {
                connectors.push(Arc::new(Connector::new(mu, sigma)))
            }
            (_, element) => {
                return Err(MotifError::MalformedOrganism(format!(
                    "organism #{}: unexpected {} at element {}",
                    position,
                    match element {
                        ChainElement::Pssm { .. } => "pssm",
                        ChainElement::Connector { .. } => "connector",
                    },
                    i
                )))
            }
        }
    }

    if connectors.len() + 1 != recognizers.len() {
        return Err(MotifError::MalformedOrganism(format!(
            "organism #{} must end with a pssm",
            position
        )));
    }

    Organism::new(ids.next_id(), recognizers, connectors)
}

pub fn organisms_to_json(organisms: &[Organism]) -> Result<String> {
    let chains: Vec<Vec<ChainElement>> = organisms.iter().map(to_chain).collect();
    Ok(serde_json::to_string_pretty(&chains)?)
}

/// Parse organisms from JSON; each one gets a fresh id from `ids`
pub fn organisms_from_json(json: &str, ids: &IdAllocator, pseudocount: f64) -> Result<Vec<Organism>> {
    let chains: Vec<Vec<ChainElement>> = serde_json::from_str(json)?;
    chains
        .into_iter()
        .enumerate()
        .map(|(position, chain)| from_chain(position, chain, ids, pseudocount))
        .collect()
}

pub fn export_organisms<P: AsRef<Path>>(organisms: &[Organism], path: P) -> Result<()> {
    std::fs::write(&path, organisms_to_json(organisms)?)?;
    log::info!(
        "Exported {} organisms to {}",
        organisms.len(),
        path.as_ref().display()
    );
    Ok(())
}

pub fn import_organisms<P: AsRef<Path>>(path: P, ids: &IdAllocator, pseudocount: f64) -> Result<Vec<Organism>> {
    let json = std::fs::read_to_string(&path)?;
    let organisms = organisms_from_json(&json, ids, pseudocount)?;
    log::info!(
        "Imported {} organisms from {}",
        organisms.len(),
        path.as_ref().display()
    );
    Ok(organisms)
}

#[cfg(test)]
mod tests {
    use super::*;

    const TWO_NODE: &str = r#"[
      [
        {"objectType": "pssm", "pwm": [{"a": 0.7, "g": 0.1, "c": 0.1, "t": 0.1}]},
        {"objectType": "connector", "mu": 4.0, "sigma": 1.5},
        {"objectType": "pssm", "pwm": [{"a": 0.1, "g": 0.1, "c": 0.1, "t": 0.7},
                                       {"a": 0.25, "g": 0.25, "c": 0.25, "t": 0.25}]}
      ]
    ]"#;

    #[test]
    fn test_import_assigns_fresh_ids() {
        let ids = IdAllocator::starting_after(41);
        let organisms = organisms_from_json(TWO_NODE, &ids, 0.01).unwrap();

        assert_eq!(organisms.len(), 1);
        let organism = &organisms[0];
        assert_eq!(organism.id(), 42);
        assert_eq!(organism.count_recognizers(), 2);
        assert_eq!(organism.recognizer(1).unwrap().width(), 2);
        assert_eq!(**organism.connector(0).unwrap(), Connector::new(4.0, 1.5));
    }

    #[test]
    fn test_export_layout() {
        let ids = IdAllocator::new();
        let organisms = organisms_from_json(TWO_NODE, &ids, 0.01).unwrap();
        let json: serde_json::Value = serde_json::from_str(&organisms_to_json(&organisms).unwrap()).unwrap();

        let chain = json[0].as_array().unwrap();
        assert_eq!(chain.len(), 3);
        assert_eq!(chain[0]["objectType"], "pssm");
        assert_eq!(chain[1]["objectType"], "connector");
        assert_eq!(chain[1]["mu"], 4.0);
        assert_eq!(chain[2]["pwm"][0]["t"], 0.7);
    }

    #[test]
    fn test_rejects_broken_alternation() {
        let ids = IdAllocator::new();
        let json = r#"[[
            {"objectType": "pssm", "pwm": [{"a": 1.0, "g": 0.0, "c": 0.0, "t": 0.0}]},
            {"objectType": "pssm", "pwm": [{"a": 1.0, "g": 0.0, "c": 0.0, "t": 0.0}]}
        ]]"#;
        assert!(matches!(
            organisms_from_json(json, &ids, 0.01),
            Err(MotifError::MalformedOrganism(_))
        ));

        let trailing = r#"[[
            {"objectType": "pssm", "pwm": [{"a": 1.0, "g": 0.0, "c": 0.0, "t": 0.0}]},
            {"objectType": "connector", "mu": 1.0, "sigma": 1.0}
        ]]"#;
        assert!(organisms_from_json(trailing, &ids, 0.01).is_err());
    }

    #[test]
    fn test_file_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("organisms.json");

        let ids = IdAllocator::new();
        let organisms = organisms_from_json(TWO_NODE, &ids, 0.01).unwrap();
        export_organisms(&organisms, &path).unwrap();

        let reimported = import_organisms(&path, &ids, 0.01).unwrap();
        assert_eq!(reimported[0].id(), 2);
        assert_eq!(reimported[0].recognizers()[0].pwm(), organisms[0].recognizers()[0].pwm());
        assert_eq!(reimported[0].connectors()[0], organisms[0].connectors()[0]);
    }
}
