/// The evaluator module reduces postfix instructions to a number.
///
/// The evaluator walks an instruction sequence left to right with a value
/// stack, applying each operator to the operands already on the stack.
///
/// # Responsibilities
/// - Executes `Number`, prefix and infix instructions.
/// - Reports division by zero as an error instead of producing an infinity.
/// - Detects sequences that underflow or leave more than one value behind.
pub mod evaluator;
/// The lexer module tokenizes source text for further parsing.
///
/// The lexer reads a single line, splits it on whitespace and scans each
/// fragment into numerals, operator symbols and parentheses.
///
/// # Responsibilities
/// - Converts the input text into an ordered token sequence.
/// - Rejects fragments containing unknown characters or malformed numerals.
pub mod lexer;
/// Operator tables and the postfix instruction type.
///
/// Declares the infix and prefix operators together with their fixed
/// precedences, and the `Instruction` enum shared by the parser and the
/// evaluator.
pub mod operator;
/// The parser module converts tokens into postfix order.
///
/// The parser is a shunting-yard converter: it keeps an operator stack and an
/// output sequence, resolves unary against binary minus from context, and
/// applies precedence, associativity and parenthesis matching.
///
/// # Responsibilities
/// - Produces a postfix instruction sequence that reduces to exactly one value.
/// - Rejects malformed expressions with a precise `ParseError`.
pub mod parser;
