//! Turning syntax trees into annotations and changes

use crate::grammar::{AccessionNode, AnnotationNode, ChangeNode, FeatureNode, PlasmidNode, Statement};
use gnomic_core::{Accession, FeatureType, GnomicResult, NotationConfig, Organism};
use gnomic_genotype::{Annotation, AtLocus, Change, CompositeAnnotation, Feature, Fusion, Plasmid};
use indexmap::IndexMap;
use tracing::trace;

/// Resolves organism and type identifiers against a [`NotationConfig`].
///
/// Identifiers missing from the tables are taken literally.
#[derive(Debug, Clone)]
pub struct Semantics {
    organisms: IndexMap<String, Organism>,
    types: IndexMap<String, FeatureType>,
    phene_type: FeatureType,
}

impl Semantics {
    pub fn new(config: &NotationConfig) -> Self {
        let types = config.type_table();
        let phene_type = types
            .get(&config.phene_type)
            .cloned()
            .unwrap_or_else(|| FeatureType::new(config.phene_type.as_str()));
        Self {
            organisms: config.organism_table(),
            types,
            phene_type,
        }
    }

    pub fn organism(&self, id: &str) -> Organism {
        self.organisms
            .get(id)
            .cloned()
            .unwrap_or_else(|| Organism::new(id))
    }

    pub fn feature_type(&self, id: &str) -> FeatureType {
        self.types
            .get(id)
            .cloned()
            .unwrap_or_else(|| FeatureType::new(id))
    }

    pub fn phene_type(&self) -> &FeatureType {
        &self.phene_type
    }

    /// Build a feature; `default_type` applies only when none was written.
    pub fn feature(&self, node: &FeatureNode<'_>, default_type: Option<&FeatureType>) -> Feature {
        Feature {
            name: node.name.map(str::to_string),
            feature_type: node
                .feature_type
                .map(|t| self.feature_type(t))
                .or_else(|| default_type.cloned()),
            accession: node.accession.as_ref().map(accession),
            organism: node.organism.map(|o| self.organism(o)),
            variant: node
                .variant
                .iter()
                .flatten()
                .map(|v| v.to_string())
                .collect(),
        }
    }

    pub fn annotation(&self, node: &AnnotationNode<'_>) -> GnomicResult<Annotation> {
        Ok(match node {
            AnnotationNode::Feature(feature) => self.feature(feature, None).into(),
            AnnotationNode::Fusion(members) => Fusion::new(self.annotations(members)?)?.into(),
            AnnotationNode::Set(members) => CompositeAnnotation::new(self.annotations(members)?).into(),
            AnnotationNode::Plasmid(plasmid) => self.plasmid(plasmid)?.into(),
            AnnotationNode::AtLocus(annotation, locus) => AtLocus::new(
                self.annotation(annotation)?,
                self.feature(locus, None).into(),
            )?
            .into(),
        })
    }

    fn annotations(&self, nodes: &[AnnotationNode<'_>]) -> GnomicResult<Vec<Annotation>> {
        nodes.iter().map(|node| self.annotation(node)).collect()
    }

    pub fn plasmid(&self, node: &PlasmidNode<'_>) -> GnomicResult<Plasmid> {
        Plasmid::new(node.name, self.annotations(&node.members)?)
    }

    /// The changes one statement stands for: the change itself, then one
    /// insertion per marker feature.
    pub fn changes(&self, statement: &Statement<'_>) -> GnomicResult<Vec<Change>> {
        let carrier = match &statement.change {
            ChangeNode::Insertion(annotation) => Change::insert(self.annotation(annotation)?),
            ChangeNode::Deletion(annotation) => Change::delete(self.annotation(annotation)?),
            ChangeNode::Replacement {
                target,
                replacement,
                multiple,
            } => Change::new(
                Some(self.annotation(target)?),
                Some(self.annotation(replacement)?),
                *multiple,
            )?,
            ChangeNode::Plasmid(plasmid) => Change::insert(self.plasmid(plasmid)?),
            ChangeNode::Phene(feature) => {
                Change::insert(self.feature(feature, Some(&self.phene_type)))
            }
        };

        let mut changes = vec![carrier];
        for marker in &statement.markers {
            self.marker_features(marker, &mut changes);
        }
        trace!(count = changes.len(), "resolved statement");
        Ok(changes)
    }

    fn marker_features(&self, node: &AnnotationNode<'_>, out: &mut Vec<Change>) {
        match node {
            AnnotationNode::Feature(feature) => {
                out.push(Change::insert(self.feature(feature, Some(&self.phene_type))))
            }
            AnnotationNode::Fusion(members) | AnnotationNode::Set(members) => {
                for member in members {
                    self.marker_features(member, out);
                }
            }
            AnnotationNode::Plasmid(plasmid) => {
                for member in &plasmid.members {
                    self.marker_features(member, out);
                }
            }
            AnnotationNode::AtLocus(annotation, _) => self.marker_features(annotation, out),
        }
    }
}

impl Default for Semantics {
    fn default() -> Self {
        Self::new(&NotationConfig::default())
    }
}

fn accession(node: &AccessionNode<'_>) -> Accession {
    match node.database {
        Some(database) => Accession::with_database(node.identifier, database),
        None => Accession::new(node.identifier),
    }
}
