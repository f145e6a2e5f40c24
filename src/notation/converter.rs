/// Three-address code generation.
///
/// Lowers an AST into triples and quadruples, the tabular forms compilers
/// use for intermediate code.
pub mod intermediate;
/// Shunting Yard conversion.
///
/// Reorders an infix token stream into postfix using an operator stack and
/// an output queue, without building an AST.
pub mod postfix;
/// AST traversals.
///
/// Produces prefix notation by pre-order traversal and postfix notation by
/// post-order traversal of the parsed tree.
pub mod prefix;
