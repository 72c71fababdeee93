//! Conversion of parsed documents into aligner sentences.

use crate::collapse::collapse_dependencies;
use crate::document::{CoreNlpDocument, CoreNlpSentence};
use crate::errors::{CoreNlpError, CoreNlpResult};
use layered_align::{DependencyEdge, Sentence, Token, ROOT_INDEX};
use std::fs;
use std::path::Path;
use tracing::debug;

/// Convert a single parsed sentence.
pub fn sentence_from_parse(parse: &CoreNlpSentence) -> Sentence {
    let (tokens, edges) = parts(parse, 0);
    Sentence::new(tokens, edges)
}

/// Convert every parsed sentence on its own.
pub fn split_document(document: &CoreNlpDocument) -> Vec<Sentence> {
    document.sentences.iter().map(sentence_from_parse).collect()
}

/// Join every parsed sentence into one token sequence. Indices of later
/// sentences are shifted past the earlier ones; ROOT stays at 0.
pub fn join_document(document: &CoreNlpDocument) -> Sentence {
    let mut tokens = Vec::new();
    let mut edges = Vec::new();
    for parse in &document.sentences {
        let (sentence_tokens, sentence_edges) = parts(parse, tokens.len());
        tokens.extend(sentence_tokens);
        edges.extend(sentence_edges);
    }
    if document.sentences.len() > 1 {
        debug!(
            sentences = document.sentences.len(),
            tokens = tokens.len(),
            "joined multi-sentence parse"
        );
    }
    Sentence::new(tokens, edges)
}

fn parts(parse: &CoreNlpSentence, offset: usize) -> (Vec<Token>, Vec<DependencyEdge>) {
    let tokens = parse
        .tokens
        .iter()
        .enumerate()
        .map(|(position, token)| {
            Token::new(offset + position + 1, token.surface(), &token.lemma, &token.pos)
                .with_ner(token.ner.as_str())
                .with_char_span(token.character_offset_begin, token.character_offset_end)
        })
        .collect();
    let shift = |index: usize| if index == ROOT_INDEX { ROOT_INDEX } else { index + offset };
    let edges = collapse_dependencies(&parse.basic_dependencies)
        .into_iter()
        .map(|edge| DependencyEdge::new(edge.relation, shift(edge.governor), shift(edge.dependent)))
        .collect();
    (tokens, edges)
}

/// Parse CoreNLP JSON and join its sentences.
pub fn read_document(json: &str) -> CoreNlpResult<Sentence> {
    let document: CoreNlpDocument = serde_json::from_str(json)?;
    Ok(join_document(&document))
}

pub fn load_document(path: &Path) -> CoreNlpResult<Sentence> {
    let json = fs::read_to_string(path).map_err(|source| CoreNlpError::Io {
        path: path.display().to_string(),
        source,
    })?;
    read_document(&json)
}
