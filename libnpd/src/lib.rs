pub mod call_chain;
pub mod console;
pub mod error;
pub mod object;

// Export the types a caller needs to drive the chain as is
pub use call_chain::{CallChain, Outcome};
pub use console::Console;
pub use error::NullDereference;
pub use object::{NullObjectSource, ObjectRef, ObjectSource, ValueObjectSource};
