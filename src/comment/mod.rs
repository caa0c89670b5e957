//! Comment handling: classification, javadoc reconstruction, and reflow.

pub mod description;
pub mod javadoc;
pub mod patterns;
pub mod reflow;
pub mod tokenizer;

pub use description::render_description;
pub use javadoc::{JavadocComment, JavadocComponent};
pub use reflow::print_block_comment;
pub use tokenizer::{has_content, CommentToken, CommentTokenizer, TokenKind};
