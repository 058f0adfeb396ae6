//! Fixture knowledge bases
//!
//! Symbols:
//!     mod::fn               -> /docs/mod/fn
//!     core::module::func    -> /docs/core/module/fn.func.html
//!     CurveFit::new         -> /docs/CurveFit/new
//!
//! Glossary:
//!     epsilon     Epsilon     "small quantity"
//!     derivative  Derivative  "rate of change"
//!
//! Basis:
//!     chebyshev   Chebyshev   ["Orthogonal polynomials on [-1, 1].", "Well suited to approximation."]
//!     fourier     (no name)   ["Sums of sines and cosines."]

use crate::docmark::compiler::Compiler;
use crate::docmark::resolvers::{BasisTable, GlossaryTable, KnowledgeBase, SymbolTable};

pub fn symbols() -> SymbolTable {
    [
        ("mod::fn", "/docs/mod/fn"),
        ("core::module::func", "/docs/core/module/fn.func.html"),
        ("CurveFit::new", "/docs/CurveFit/new"),
    ]
    .into_iter()
    .collect()
}

pub fn glossary() -> GlossaryTable {
    let mut table = GlossaryTable::new();
    table.insert("epsilon", "Epsilon", "small quantity");
    table.insert("derivative", "Derivative", "rate of change");
    table
}

pub fn basis() -> BasisTable {
    let mut table = BasisTable::new();
    table.insert(
        "chebyshev",
        Some("Chebyshev"),
        [
            "Orthogonal polynomials on [-1, 1].",
            "Well suited to approximation.",
        ],
    );
    table.insert("fourier", None, ["Sums of sines and cosines."]);
    table
}

/// All three fixture tables.
pub fn knowledge_base() -> KnowledgeBase {
    KnowledgeBase::empty()
        .with_symbols(symbols())
        .with_glossary(glossary())
        .with_basis(basis())
}

/// A default compiler over [`knowledge_base`].
pub fn compiler() -> Compiler {
    Compiler::new(knowledge_base())
}
