use std::io::Write;
/////////////////////////////////////////
use anyhow::Result;
/////////////////////////////////////////
use crate::console::Console;
use crate::error::NullDereference;
use crate::object::{ObjectRef, ObjectSource};
/////////////////////////////////////////

/// How a run of the chain ended. Both variants are a normal termination.
#[derive(Debug, PartialEq, Eq)]
pub enum Outcome {
    Completed,
    NullDereferenceCaught(String /* Message of the caught error */),
}

/// The four step call chain: createObject -> getNullObject, then processObject -> useObject.
pub struct CallChain<S: ObjectSource> {
    source: S,
}

impl<S: ObjectSource> CallChain<S> {
    pub fn new(source: S) -> Self {
        CallChain { source }
    }

    /// Top level routine. A null dereference raised anywhere below is caught here, exactly once,
    /// and reported as the final line. Console failures are not caught.
    pub fn run<W: Write>(&self, console: &mut Console<W>) -> Result<Outcome> {
        console.line("Starting Null Pointer Exception Demo.")?;
        let object = self.create_object(console)?;
        match self.process_object(console, object) {
            Ok(()) => Ok(Outcome::Completed),
            Err(e) => match e.downcast_ref::<NullDereference>() {
                Some(null_dereference) => {
                    let message = null_dereference.to_string();
                    console.line(&format!("Caught a NullPointerException: {}", message))?;
                    Ok(Outcome::NullDereferenceCaught(message))
                }
                None => Err(e),
            },
        }
    }

    pub fn create_object<W: Write>(&self, console: &mut Console<W>) -> Result<ObjectRef> {
        console.line("createObject: Calling getNullObject...")?;
        self.source.get_object(console)
    }

    pub fn process_object<W: Write>(
        &self,
        console: &mut Console<W>,
        object: ObjectRef,
    ) -> Result<()> {
        console.line("processObject: Received object, calling useObject...")?;
        self.use_object(console, object)
    }

    pub fn use_object<W: Write>(&self, console: &mut Console<W>, object: ObjectRef) -> Result<()> {
        console.line("useObject: Attempting to call toString on the object...")?;
        let object = object.ok_or_else(|| NullDereference::new("Object.toString()", "obj"))?;
        console.line(&format!("Object's toString(): {}", object))?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::object::{NullObjectSource, ValueObjectSource};

    /// Accepts a fixed number of lines, then fails every write.
    struct LineLimitedWriter {
        lines_left: usize,
    }

    impl Write for LineLimitedWriter {
        fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
            if self.lines_left == 0 {
                return Err(std::io::Error::from(std::io::ErrorKind::BrokenPipe));
            }
            let newlines = buf.iter().filter(|&&b| b == b'\n').count();
            self.lines_left = self.lines_left.saturating_sub(newlines);
            Ok(buf.len())
        }
        fn flush(&mut self) -> std::io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn test_use_object_fails_on_absent_reference() {
        let chain = CallChain::new(NullObjectSource);
        let mut console = Console::new(Vec::new());
        let err = chain.use_object(&mut console, None).unwrap_err();
        assert!(err.downcast_ref::<NullDereference>().is_some());
        // The failure comes after the log line, never before it.
        assert_eq!(
            console.lines(),
            vec!["useObject: Attempting to call toString on the object..."]
        );
    }

    #[test]
    fn test_use_object_prints_value() {
        let chain = CallChain::new(NullObjectSource);
        let mut console = Console::new(Vec::new());
        let object: ObjectRef = Some(Box::new("hello"));
        chain.use_object(&mut console, object).unwrap();
        assert_eq!(console.lines()[1], "Object's toString(): hello");
    }

    #[test]
    fn test_create_object_propagates_source_result() {
        let chain = CallChain::new(ValueObjectSource::new("payload"));
        let mut console = Console::new(Vec::new());
        let object = chain.create_object(&mut console).unwrap();
        assert_eq!(object.map(|o| o.to_string()), Some("payload".to_string()));
    }

    #[test]
    fn test_process_object_forwards_failure_unchanged() {
        let chain = CallChain::new(NullObjectSource);
        let mut console = Console::new(Vec::new());
        let err = chain.process_object(&mut console, None).unwrap_err();
        let null_dereference = err
            .downcast_ref::<NullDereference>()
            .expect("Expected a NullDereference");
        assert_eq!(null_dereference.operation, "Object.toString()");
        assert_eq!(console.lines().len(), 2);
    }

    #[test]
    fn test_run_propagates_console_failure_inside_chain() {
        // Start, createObject and getNullObject get through, processObject's line does not.
        let mut console = Console::new(LineLimitedWriter { lines_left: 3 });
        let err = CallChain::new(NullObjectSource)
            .run(&mut console)
            .unwrap_err();
        assert!(err.downcast_ref::<NullDereference>().is_none());
        assert_eq!(err.to_string(), "Failed to write to console");
    }

    #[test]
    fn test_run_propagates_console_failure_on_first_line() {
        let mut console = Console::new(LineLimitedWriter { lines_left: 0 });
        let result = CallChain::new(NullObjectSource).run(&mut console);
        assert!(result.is_err());
        assert!(result.unwrap_err().downcast_ref::<NullDereference>().is_none());
    }
}
