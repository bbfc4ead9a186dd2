//! Whitespace-separated edge-list text.
//!
//! The text is a flat token stream read two vertex numbers at a time as
//! `source target`. Line breaks carry no meaning. A vertex number is the run
//! of ASCII digits a token starts with, so `12` and the `12` of `12abc` both
//! read as vertex 12. Reading stops quietly at the first token that does not
//! start with a digit, right after a token with trailing characters, or at a
//! lone number left over at the end. Every complete pair read before that
//! point is kept. Vertex ranges are not checked here; see
//! [`ArcGraph::from_arcs`](crate::graph::ArcGraph::from_arcs).

/// Where and why reading stopped before the end of the text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Truncation {
    /// Zero-based index of the token that ended the input.
    pub token_index: usize,
    /// The token itself.
    pub token: String,
    /// `true` if the token was a whole vertex number left without a partner
    /// at the end of the text.
    pub unpaired: bool,
}

/// Arcs read from an edge list.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EdgeList {
    /// Complete `(source, target)` pairs in input order.
    pub arcs: Vec<(usize, usize)>,
    /// Set when reading stopped before the end of the text.
    pub truncated: Option<Truncation>,
}

/// Parses `text` as an edge list.
///
/// Never fails: malformed input just ends the list early, and
/// [`EdgeList::truncated`] says where.
pub fn parse_edge_list(text: &str) -> EdgeList {
    let mut list = EdgeList::default();
    let mut pending: Option<(usize, usize, &str)> = None;

    for (index, token) in text.split_whitespace().enumerate() {
        let stop = Truncation {
            token_index: index,
            token: token.to_owned(),
            unpaired: false,
        };
        let Some((vertex, complete)) = leading_vertex(token) else {
            list.truncated = Some(stop);
            return list;
        };
        match pending.take() {
            None => pending = Some((vertex, index, token)),
            Some((source, _, _)) => list.arcs.push((source, vertex)),
        }
        if !complete {
            // The characters after the number end the input.
            list.truncated = Some(stop);
            return list;
        }
    }

    if let Some((_, index, token)) = pending {
        list.truncated = Some(Truncation {
            token_index: index,
            token: token.to_owned(),
            unpaired: true,
        });
    }
    list
}

/// The vertex number `token` starts with, and whether it is the whole token.
///
/// `None` if the token does not start with a digit or the number does not
/// fit in a `usize`.
fn leading_vertex(token: &str) -> Option<(usize, bool)> {
    let digits = token.bytes().take_while(u8::is_ascii_digit).count();
    let vertex = token.get(..digits)?.parse().ok()?;
    Some((vertex, digits == token.len()))
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
