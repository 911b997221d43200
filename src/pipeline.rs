//! End-to-end extraction: build, correct, resolve, attach.

use crate::builder::MeasurementBuilder;
use crate::cluster::{assemble_clusters, LabeledCluster, TaggedToken, Token};
use crate::correction::{correct_measurements, CorrectionConfig};
use crate::measurement::MeasurementSet;
use crate::resolution::{resolve_units, UnitLexicon};
use crate::substance::{DefaultSubstanceResolver, SubstanceResolver};
use crate::trace::TraceSink;

/// The full extraction pass over one labeled-cluster stream.
///
/// Owns its collaborators: the unit lexicon, the correction thresholds, and
/// a substance resolver (the pass-through by default). One pipeline may
/// serve any number of `extract` calls; no state survives between them.
///
/// ```
/// use std::collections::HashMap;
/// use quantified_text::MeasurementPipeline;
///
/// let pipeline = MeasurementPipeline::new(HashMap::new());
/// let set = pipeline.extract("no measurements here", 0, &[]);
/// assert!(set.is_empty());
/// ```
pub struct MeasurementPipeline<L> {
    lexicon: L,
    config: CorrectionConfig,
    substances: Box<dyn SubstanceResolver>,
}

impl<L: UnitLexicon> MeasurementPipeline<L> {
    pub fn new(lexicon: L) -> Self {
        MeasurementPipeline {
            lexicon,
            config: CorrectionConfig::default(),
            substances: Box::new(DefaultSubstanceResolver),
        }
    }

    /// Replace the default correction thresholds.
    pub fn with_config(mut self, config: CorrectionConfig) -> Self {
        self.config = config;
        self
    }

    /// Replace the pass-through substance resolver.
    pub fn with_substance_resolver(
        mut self,
        resolver: impl SubstanceResolver + 'static,
    ) -> Self {
        self.substances = Box::new(resolver);
        self
    }

    /// Run build → correct → resolve → substance attachment.
    pub fn extract(
        &self,
        text: &str,
        origin: usize,
        clusters: &[LabeledCluster],
    ) -> MeasurementSet {
        self.run(text, origin, clusters, None)
    }

    /// [`extract`](Self::extract), reporting every builder decision to
    /// `sink`.
    pub fn extract_with_trace(
        &self,
        text: &str,
        origin: usize,
        clusters: &[LabeledCluster],
        sink: &mut dyn TraceSink,
    ) -> MeasurementSet {
        self.run(text, origin, clusters, Some(sink))
    }

    /// Assemble clusters from raw tagger `(token, label)` pairs, then
    /// [`extract`](Self::extract).
    pub fn extract_tagged(
        &self,
        text: &str,
        origin: usize,
        tagged: &[TaggedToken],
    ) -> MeasurementSet {
        let clusters = assemble_clusters(tagged, origin);
        self.extract(text, origin, &clusters)
    }

    fn run(
        &self,
        text: &str,
        origin: usize,
        clusters: &[LabeledCluster],
        sink: Option<&mut dyn TraceSink>,
    ) -> MeasurementSet {
        let mut builder = MeasurementBuilder::new(text, origin);
        if let Some(sink) = sink {
            builder = builder.with_trace(sink);
        }
        for cluster in clusters {
            builder.consume(cluster);
        }
        let raw = builder.finish();
        tracing::debug!(built = raw.len(), "measurement build finished");

        let mut set = correct_measurements(raw, &self.config);
        tracing::debug!(kept = set.len(), "consistency correction finished");

        resolve_units(&mut set, &self.lexicon);
        let resolved = set
            .units
            .iter()
            .filter(|(_, unit)| unit.is_resolved())
            .count();
        tracing::debug!(resolved, "unit resolution finished");

        let tokens: Vec<Token> = clusters
            .iter()
            .flat_map(|cluster| cluster.tokens().iter().cloned())
            .collect();
        self.substances.attach(&tokens, set)
    }
}
