use std::path::Path;

use tracing::debug;

use super::catalog::GrammarCatalog;

/// How a grammar was chosen
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectionOrigin {
    /// Named on the command line or in the config file
    Explicit,
    /// Matched from the file name or extension
    Filename,
    /// Inferred from the content
    Content,
    /// Nothing matched
    Fallback,
}

/// The grammar chosen for one input
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GrammarSelection {
    pub name: String,
    pub origin: SelectionOrigin,
}

/// Everything known about an input when its grammar is chosen
#[derive(Debug, Clone, Copy)]
pub struct LexerQuery<'a> {
    pub explicit: Option<&'a str>,
    pub path: Option<&'a Path>,
    pub content: &'a str,
}

type Resolver = fn(&dyn GrammarCatalog, &LexerQuery) -> Option<GrammarSelection>;

/// Tried in order; the first to answer wins
const RESOLVERS: &[Resolver] = &[by_explicit, by_filename, by_content];

fn by_explicit(catalog: &dyn GrammarCatalog, query: &LexerQuery) -> Option<GrammarSelection> {
    let name = query.explicit?;
    let found = catalog.by_name(name);
    if found.is_none() {
        debug!("Unknown lexer '{}', ignoring", name);
    }
    found.map(|name| GrammarSelection {
        name,
        origin: SelectionOrigin::Explicit,
    })
}

fn by_filename(catalog: &dyn GrammarCatalog, query: &LexerQuery) -> Option<GrammarSelection> {
    catalog.by_filename(query.path?).map(|name| GrammarSelection {
        name,
        origin: SelectionOrigin::Filename,
    })
}

fn by_content(catalog: &dyn GrammarCatalog, query: &LexerQuery) -> Option<GrammarSelection> {
    catalog.by_content(query.content).map(|name| GrammarSelection {
        name,
        origin: SelectionOrigin::Content,
    })
}

/// Choose a grammar: explicit name, then filename, then content, then fallback
pub fn select_lexer(catalog: &dyn GrammarCatalog, query: &LexerQuery) -> GrammarSelection {
    let selection = RESOLVERS
        .iter()
        .find_map(|resolve| resolve(catalog, query))
        .unwrap_or_else(|| GrammarSelection {
            name: catalog.fallback(),
            origin: SelectionOrigin::Fallback,
        });

    debug!("Selected lexer '{}' ({:?})", selection.name, selection.origin);
    selection
}
