//! Tokens, labeled clusters, and assembly of clusters from raw tagger output.
//!
//! The builder consumes [`LabeledCluster`]s; [`assemble_clusters`] produces
//! them from the `(token, label)` pairs a sequence tagger emits. Grouping
//! rules:
//!
//! - consecutive tokens with the same (prefix-stripped) label form one cluster
//! - a `B-` prefix forces a new cluster even when the label repeats
//! - whitespace tokens attach to the following cluster, whatever label they
//!   carry, so cursor arithmetic in the builder can skip over them
//! - a label string outside the tagset is reported and degraded to `<other>`

use serde::{Deserialize, Serialize};
use unicode_segmentation::UnicodeSegmentation;

use crate::label::ClusterLabel;
use crate::span::Span;

/// One tokenizer-produced fragment of the source text.
///
/// Whitespace fragments are tokens too. The builder advances its cursor by
/// summed token lengths, so dropping them would shift every downstream span.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Token {
    text: String,
}

impl Token {
    pub fn new(text: impl Into<String>) -> Self {
        Token { text: text.into() }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    /// Length in characters, the unit every offset in this crate counts.
    pub fn len_chars(&self) -> usize {
        self.text.chars().count()
    }

    /// True when the token holds nothing but whitespace.
    pub fn is_whitespace(&self) -> bool {
        self.text.chars().all(char::is_whitespace)
    }
}

/// Split text on word bounds, keeping whitespace fragments as tokens.
///
/// A reference tokenizer for tests and demos; real deployments feed the
/// tagger's own token stream in.
pub fn segment_tokens(text: &str) -> Vec<Token> {
    text.split_word_bounds().map(Token::new).collect()
}

/// A token paired with the raw label string emitted by the tagger.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaggedToken {
    pub token: Token,
    pub label: String,
}

impl TaggedToken {
    pub fn new(token: Token, label: impl Into<String>) -> Self {
        TaggedToken {
            token,
            label: label.into(),
        }
    }
}

/// A maximal run of same-label tokens: the builder's unit of input.
///
/// `text` is the token concatenation with boundary whitespace removed and
/// `span` tightens around it. The builder keeps its own running cursor and
/// never reads `span`; the field is informational for consumers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LabeledCluster {
    label: ClusterLabel,
    text: String,
    tokens: Vec<Token>,
    span: Span,
}

impl LabeledCluster {
    /// Build a cluster from a label and its tokens, `start` being the
    /// character position of the first token.
    pub fn new(label: ClusterLabel, tokens: Vec<Token>, start: usize) -> Self {
        let raw: String = tokens.iter().map(Token::text).collect();
        let total = raw.chars().count();
        let text = raw.trim().to_string();
        let span = if text.is_empty() {
            Span::new(start, start)
        } else {
            let lead = raw.chars().take_while(|c| c.is_whitespace()).count();
            let trail = raw.chars().rev().take_while(|c| c.is_whitespace()).count();
            Span::new(start + lead, start + total - trail)
        };
        LabeledCluster {
            label,
            text,
            tokens,
            span,
        }
    }

    pub fn label(&self) -> ClusterLabel {
        self.label
    }

    /// The covered text, boundary whitespace removed.
    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn tokens(&self) -> &[Token] {
        &self.tokens
    }

    /// Whitespace-tightened span of the covered text.
    pub fn span(&self) -> Span {
        self.span
    }

    /// Raw character length of the token run, whitespace included.
    pub fn len_chars(&self) -> usize {
        self.tokens.iter().map(Token::len_chars).sum()
    }
}

/// Group a tagged token stream into labeled clusters.
///
/// `origin` is the character position of the first token in the source text.
/// Labels carried by whitespace tokens are ignored; trailing whitespace with
/// no cluster after it is dropped.
pub fn assemble_clusters(tagged: &[TaggedToken], origin: usize) -> Vec<LabeledCluster> {
    struct OpenCluster {
        label: ClusterLabel,
        bare_label: String,
        tokens: Vec<Token>,
        start: usize,
    }

    let mut clusters = Vec::new();
    let mut current: Option<OpenCluster> = None;
    let mut buffered: Vec<Token> = Vec::new();
    let mut buffered_start = origin;
    let mut cursor = origin;

    for tagged_token in tagged {
        let len = tagged_token.token.len_chars();
        if tagged_token.token.is_whitespace() {
            if buffered.is_empty() {
                buffered_start = cursor;
            }
            buffered.push(tagged_token.token.clone());
            cursor += len;
            continue;
        }

        let begins = tagged_token.label.starts_with("B-");
        let bare = tagged_token
            .label
            .strip_prefix("B-")
            .or_else(|| tagged_token.label.strip_prefix("I-"))
            .unwrap_or(&tagged_token.label);

        let continues = matches!(&current, Some(open) if !begins && open.bare_label == bare);
        if let (true, Some(open)) = (continues, current.as_mut()) {
            open.tokens.append(&mut buffered);
            open.tokens.push(tagged_token.token.clone());
        } else {
            if let Some(open) = current.take() {
                clusters.push(LabeledCluster::new(open.label, open.tokens, open.start));
            }
            let label = bare.parse::<ClusterLabel>().unwrap_or_else(|_| {
                tracing::warn!(
                    label = %tagged_token.label,
                    "unknown cluster label, treating as other"
                );
                ClusterLabel::Other
            });
            let start = if buffered.is_empty() {
                cursor
            } else {
                buffered_start
            };
            let mut tokens = std::mem::take(&mut buffered);
            tokens.push(tagged_token.token.clone());
            current = Some(OpenCluster {
                label,
                bare_label: bare.to_string(),
                tokens,
                start,
            });
        }
        cursor += len;
    }

    if let Some(open) = current.take() {
        clusters.push(LabeledCluster::new(open.label, open.tokens, open.start));
    }
    clusters
}
