/// The evaluator module executes AST nodes and computes results.
///
/// The evaluator traverses the AST, performs arithmetic on scalars and
/// matrices, and resolves names through the scoped environment and the
/// workspace.
///
/// # Responsibilities
/// - Evaluates AST nodes, performing all supported operations.
/// - Binds parameters and running indices in scope frames.
/// - Reports runtime errors such as unresolved names or singular matrices.
pub mod evaluator;
/// The lexer module tokenizes source text for further parsing.
///
/// # Responsibilities
/// - Converts the input characters into tokens.
/// - Delimits numeric literals and hands them to the literal parser.
/// - Reports unexpected characters, malformed numbers and empty input.
pub mod lexer;
/// The parser module builds the abstract syntax tree (AST) from tokens.
///
/// # Responsibilities
/// - Converts tokens into expression nodes following operator precedence.
/// - Recognises definition heads by speculative parsing with backtracking.
/// - Extracts parameters, defaults and index shapes from definition heads.
pub mod parser;
/// The value module defines the runtime data types for evaluation.
///
/// # Responsibilities
/// - Defines the `Value` enum: a complex scalar or a matrix.
/// - Implements complex and matrix arithmetic with checked failure modes.
pub mod value;
/// Scoped environment.
///
/// A stack of frames over per-name value stacks, used to bind parameters and
/// running indices while a definition is evaluated.
pub mod environment;
/// Reference resolution.
///
/// Stores the definitions made under one name and picks the one answering a
/// call: explicit index, general formula or simple definition.
pub mod reference;
/// Workspace registry.
///
/// The store of definitions shared by successive evaluations.
pub mod workspace;
/// Interpreter façade.
///
/// Runs text through lexer, parser and evaluator, reporting failures instead
/// of propagating them.
pub mod session;
